use miette::Diagnostic;
use thiserror::Error;

/// Main error type for framediff operations
#[derive(Error, Diagnostic, Debug)]
pub enum FramediffError {
    #[error("Size mismatch: {left_width}x{left_height} vs {right_width}x{right_height}")]
    #[diagnostic(
        code(framediff::size),
        help("Both frames must be captured at the same viewport size")
    )]
    SizeMismatch {
        left_width: u32,
        left_height: u32,
        right_width: u32,
        right_height: u32,
    },

    #[error("Invalid raster: {message}")]
    #[diagnostic(code(framediff::raster))]
    InvalidRaster { message: String },

    #[error("Sample length mismatch: {left} vs {right}")]
    #[diagnostic(
        code(framediff::length),
        help("Use the lenient length policy to compare the overlapping prefix")
    )]
    LengthMismatch { left: usize, right: usize },

    #[error("IO error: {0}")]
    #[diagnostic(code(framediff::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(framediff::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Decode error: {message}")]
    #[diagnostic(code(framediff::decode))]
    Decode {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(framediff::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Usage error: {message}")]
    #[diagnostic(code(framediff::usage))]
    Usage {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Serialize error: {message}")]
    #[diagnostic(code(framediff::serialize))]
    Serialize { message: String },

    #[error("Config error: {message}")]
    #[diagnostic(code(framediff::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, FramediffError>;
