use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("resume HTML not found: {path}")]
    HtmlNotFound { path: String },

    #[error("unsupported document format: {ext}")]
    UnsupportedFormat { ext: String },

    #[error("document container error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("document conversion failed: {detail}")]
    Convert { detail: String },

    #[error("config error: {0}")]
    Config(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, SyncError>;
