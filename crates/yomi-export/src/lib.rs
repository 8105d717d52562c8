pub mod artifact;
pub mod gate;

pub use artifact::{Artifact, UTF8_BOM};
pub use gate::AccessGate;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Export password required")]
    PasswordRequired,

    #[error("Export password rejected")]
    AccessDenied,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
