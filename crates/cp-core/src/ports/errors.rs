use thiserror::Error;

use crate::clipboard::ContentKind;

#[derive(Debug, Error)]
pub enum PasteboardError {
    #[error("pasteboard unavailable: {0}")]
    Unavailable(String),

    #[error("failed to read {kind}: {message}")]
    Read { kind: ContentKind, message: String },

    #[error("failed to write {kind}: {message}")]
    Write { kind: ContentKind, message: String },

    #[error("representation not supported by this pasteboard: {0}")]
    Unsupported(ContentKind),
}

#[derive(Debug, Error)]
pub enum RestrictionStoreError {
    #[error("restriction store failed: {0}")]
    Storage(String),

    #[error("restriction data corrupt: {0}")]
    Corrupt(String),
}

#[derive(Debug, Error)]
pub enum AppCatalogError {
    #[error("failed to enumerate applications in {dir}: {source}")]
    Enumerate {
        dir: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum AppDirsError {
    #[error("system data-local directory is unavailable")]
    DataLocalDirUnavailable,
}

#[derive(Debug, Error)]
pub enum AutostartError {
    #[error("login item program path is not valid UTF-8: {0}")]
    InvalidProgramPath(String),

    #[error("login item backend failed: {0}")]
    Backend(String),
}
