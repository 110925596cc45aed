use thiserror::Error;

use crate::level::LayoutError;

/// Errors surfaced outside the simulation core.
///
/// Gameplay itself never fails; only building a layout and host I/O can.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid layout: {0}")]
    Layout(#[from] LayoutError),
    #[error("failed to read layout file {path}: {source}")]
    LayoutFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
