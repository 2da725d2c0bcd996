use miette::Diagnostic;
use thiserror::Error;

/// Main error type for poster operations
#[derive(Error, Diagnostic, Debug)]
pub enum PosterError {
    #[error("IO error: {0}")]
    #[diagnostic(code(poster::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(poster::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(poster::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Invalid parameter `{name}`: {message}")]
    #[diagnostic(code(poster::param))]
    InvalidParameter {
        name: String,
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Render error: {message}")]
    #[diagnostic(code(poster::render))]
    Render {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, PosterError>;
