//! Error reporting.

use std::{fmt, io};

/// An error.
#[derive(Debug)]
pub enum Error {
    /// A shape was narrowed to a variant it does not belong to.
    TypeMismatch {
        /// The name of the expected variant.
        expected: &'static str,
        /// The name of the variant the shape actually stores.
        got: &'static str,
    },
    /// The output sink rejected the rendered text.
    Output(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TypeMismatch { expected, got } => {
                write!(f, "type mismatch, expected {expected} but got {got}")
            }
            Self::Output(error) => write!(f, "cannot write to output: {error}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Self::Output(error)
    }
}
