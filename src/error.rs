use miette::Diagnostic;
use thiserror::Error;

/// Main error type for banner operations
#[derive(Error, Diagnostic, Debug)]
pub enum BannerError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(banner::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(banner::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Unknown pattern identifier: {id}")]
    #[diagnostic(
        code(banner::pattern),
        help("valid identifiers are the 13 built-in pattern ids, e.g. stripe_center or chevron")
    )]
    InvalidPattern { id: String },

    #[error("A banner holds at most {} pattern layers", crate::types::MAX_LAYERS)]
    #[diagnostic(code(banner::layers), help("remove a layer before adding another"))]
    LayerLimit,

    #[error("Build error: {message}")]
    #[diagnostic(code(banner::build))]
    Build { message: String },
}

pub type Result<T> = std::result::Result<T, BannerError>;
