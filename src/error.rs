use miette::Diagnostic;
use thiserror::Error;

/// Main error type for apidoc operations
#[derive(Error, Diagnostic, Debug)]
pub enum DocError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(apidoc::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    /// A malformed annotation. Aborts the file that contains it.
    #[error("Grammar violation in {path}:{line}: {message}")]
    #[diagnostic(code(apidoc::grammar))]
    Grammar {
        path: String,
        line: u32,
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Config error: {message}")]
    #[diagnostic(code(apidoc::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Validation error: {message}")]
    #[diagnostic(code(apidoc::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Output error: {message}")]
    #[diagnostic(code(apidoc::output))]
    Output {
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl DocError {
    /// Whether this error came from the annotation grammar rather than I/O.
    pub fn is_grammar(&self) -> bool {
        matches!(self, DocError::Grammar { .. })
    }
}

pub type Result<T> = std::result::Result<T, DocError>;
