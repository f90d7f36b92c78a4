//! CLI-level errors (wraps application errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;
use crate::exitcode;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("I/O error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Usage(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Create an I/O error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => exitcode::USAGE,
            CliError::Io { .. } => exitcode::IOERR,
            CliError::Application(app) => match app {
                ApplicationError::Domain(domain) => match domain {
                    DomainError::EmptyInput
                    | DomainError::MalformedNumber(_)
                    | DomainError::DivideByZero => exitcode::DATAERR,
                    DomainError::UnknownOperator(_) => exitcode::USAGE,
                    DomainError::NonFiniteResult => exitcode::SOFTWARE,
                },
                ApplicationError::Config { .. } => exitcode::CONFIG,
                ApplicationError::Internal { .. } => exitcode::SOFTWARE,
            },
        }
    }
}
