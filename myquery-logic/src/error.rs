use thiserror::Error;

/// Errors raised by the sequence operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A required argument was absent.
    ///
    /// Carries the name of the parameter that was checked.
    #[error("Value cannot be null. (Parameter '{name}')")]
    NullArgument { name: String },
}

impl Error {
    pub(crate) fn null_argument(name: &str) -> Self {
        Error::NullArgument {
            name: name.to_string(),
        }
    }

    /// The name of the offending parameter.
    pub fn parameter(&self) -> &str {
        match self {
            Error::NullArgument { name } => name,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
