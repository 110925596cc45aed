use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{ExecutableCommand, QueueableCommand};
use std::io::{self, Stdout, Write};
use std::thread;
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthStr;

use maze_pursuit::{
    Direction, Error, Game, GhostKind, Input, Layout, PelletKind, Position, Settings, Snapshot,
    Status,
};

/// Terminal columns per maze cell; emoji sprites are two wide.
const CELL_W: usize = 2;

/// One maze cell as drawn: text padded to `CELL_W` and its colour.
#[derive(Clone, Copy, PartialEq)]
struct Sprite {
    text: &'static str,
    color: Color,
}

impl Sprite {
    const PLAYER: Sprite = Sprite::new("😃", Color::Yellow);
    const FRIGHTENED: Sprite = Sprite::new("😱", Color::Blue);
    const WALL: Sprite = Sprite::new("██", Color::Blue);
    const FLOOR: Sprite = Sprite::new("", Color::Reset);
    const PELLET: Sprite = Sprite::new("·", Color::White);
    const POWER: Sprite = Sprite::new("●", Color::Magenta);

    const fn new(text: &'static str, color: Color) -> Self {
        Self { text, color }
    }

    fn ghost(kind: GhostKind) -> Self {
        let color = match kind {
            GhostKind::Blinky => Color::Red,
            GhostKind::Pinky => Color::Magenta,
            GhostKind::Inky => Color::Cyan,
            GhostKind::Clyde => Color::DarkYellow,
        };
        Self::new("👻", color)
    }

    fn pad(&self) -> usize {
        CELL_W.saturating_sub(self.text.width())
    }
}

/// Rows painted on the previous frame. Only rows that differ are redrawn.
#[derive(Default)]
struct Screen {
    rows: Vec<Vec<Sprite>>,
    status_line: String,
    origin: Option<(u16, u16)>,
}

fn main() -> Result<(), Error> {
    env_logger::init();
    let settings = Settings::from_env();
    let layout = settings.load_layout()?;
    log::info!(
        "starting {}x{} maze, seed {}, tick {}ms",
        layout.width(),
        layout.height(),
        settings.seed,
        settings.tick_ms
    );

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(Hide)?;

    let result = run(&mut stdout, &settings, layout);

    stdout.execute(Show)?;
    stdout.execute(LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result.map_err(Error::from)
}

fn run(stdout: &mut Stdout, settings: &Settings, layout: Layout) -> io::Result<()> {
    let mut screen = Screen::default();
    let mut game = Game::new(layout, settings.seed);
    let tick_every = Duration::from_millis(settings.tick_ms);
    let frame_time = Duration::from_micros(1_000_000 / settings.render_fps.max(1));
    let mut last_tick = Instant::now();

    loop {
        let frame_start = Instant::now();
        while event::poll(Duration::from_millis(0))? {
            if let Event::Key(key) = event::read()? {
                if !matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
                    continue;
                }
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Char(' ') | KeyCode::Enter => {
                        game.apply(Input::Start);
                    }
                    code => {
                        if let Some(dir) = direction_for(code) {
                            game.apply(Input::Turn(dir));
                        }
                    }
                }
            }
        }

        if game.status() == Status::Running && last_tick.elapsed() >= tick_every {
            last_tick = Instant::now();
            let status = game.tick().status;
            if status.is_terminal() {
                log::info!("run finished: {:?}, score {}", status, game.state().score);
            }
        } else if game.status() != Status::Running {
            last_tick = Instant::now();
        }

        screen.paint(stdout, game.layout(), &game.snapshot())?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            thread::sleep(frame_time - elapsed);
        }
    }
}

fn direction_for(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('w') => Some(Direction::Up),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('s') => Some(Direction::Down),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('a') => Some(Direction::Left),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('d') => Some(Direction::Right),
        _ => None,
    }
}

impl Screen {
    fn paint(&mut self, out: &mut Stdout, layout: &Layout, snapshot: &Snapshot) -> io::Result<()> {
        let board_w = (layout.width() * CELL_W) as u16;
        let board_h = layout.height() as u16 + 1;
        let (cols, lines) = terminal::size()?;
        if cols < board_w || lines < board_h {
            self.origin = None;
            out.queue(MoveTo(0, 0))?;
            out.queue(Clear(ClearType::All))?;
            out.queue(Print(format!(
                "Enlarge the terminal to {board_w}x{board_h} (now {cols}x{lines})"
            )))?;
            return out.flush();
        }

        let origin = ((cols - board_w) / 2, (lines - board_h) / 2 + 1);
        if self.origin != Some(origin) {
            out.queue(Clear(ClearType::All))?;
            self.rows.clear();
            self.status_line.clear();
            self.origin = Some(origin);
        }
        let (x, y) = origin;

        let status_line = format!(
            "Score {}  Lives {}  Power {}  {}  [q]uit",
            snapshot.score, snapshot.lives, snapshot.power_ticks, snapshot.message
        );
        if status_line != self.status_line {
            out.queue(MoveTo(x, y - 1))?;
            out.queue(Clear(ClearType::CurrentLine))?;
            out.queue(SetForegroundColor(Color::White))?;
            out.queue(Print(&status_line))?;
            self.status_line = status_line;
        }

        for (row, sprites) in compose(layout, snapshot).into_iter().enumerate() {
            if self.rows.get(row) == Some(&sprites) {
                continue;
            }
            out.queue(MoveTo(x, y + row as u16))?;
            for sprite in &sprites {
                out.queue(SetForegroundColor(sprite.color))?;
                out.queue(Print(sprite.text))?;
                out.queue(Print(" ".repeat(sprite.pad())))?;
            }
            match self.rows.get_mut(row) {
                Some(slot) => *slot = sprites,
                None => self.rows.push(sprites),
            }
        }

        out.queue(ResetColor)?;
        out.flush()
    }
}

/// Lay the snapshot over the maze, one sprite per cell, row by row.
fn compose(layout: &Layout, snapshot: &Snapshot) -> Vec<Vec<Sprite>> {
    let frightened = snapshot.power_ticks > 0;
    (0..layout.height())
        .map(|row| {
            (0..layout.width())
                .map(|col| {
                    let pos = Position::new(col, row);
                    if pos == snapshot.player {
                        Sprite::PLAYER
                    } else if let Some(ghost) = snapshot.ghost_at(pos) {
                        if frightened {
                            Sprite::FRIGHTENED
                        } else {
                            Sprite::ghost(ghost.kind)
                        }
                    } else {
                        match snapshot.pellet_at(pos) {
                            Some(PelletKind::Normal) => Sprite::PELLET,
                            Some(PelletKind::Power) => Sprite::POWER,
                            None if layout.is_wall(pos) => Sprite::WALL,
                            None => Sprite::FLOOR,
                        }
                    }
                })
                .collect()
        })
        .collect()
}
