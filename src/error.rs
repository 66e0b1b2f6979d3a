use miette::Diagnostic;
use thiserror::Error;

/// Main error type for pxkit operations
#[derive(Error, Diagnostic, Debug)]
pub enum PxError {
    #[error("Invalid dimensions: cannot crop {margin}px from each edge of a {width}x{height} image")]
    #[diagnostic(
        code(pxkit::crop),
        help("The margin must be less than half of both the width and the height")
    )]
    InvalidDimensions { width: u32, height: u32, margin: u32 },

    #[error("Invalid scale: {message}")]
    #[diagnostic(code(pxkit::scale))]
    InvalidScale {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Invalid parameter: {message}")]
    #[diagnostic(code(pxkit::param))]
    InvalidParameter {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(pxkit::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(pxkit::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, PxError>;
