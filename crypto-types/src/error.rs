//! Error types.
use thiserror::Error;

/// Errors produced when constructing a fixed-size value.
#[derive(Error, Debug)]
pub enum Error {
    #[error("{type_name}: invalid length (expected {expected} bytes, got {actual})")]
    InvalidLength {
        type_name: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("{type_name}: invalid hex encoding")]
    InvalidEncoding {
        type_name: &'static str,
        #[source]
        source: rustc_hex::FromHexError,
    },
}

impl Error {
    /// Name of the type whose construction failed.
    pub fn type_name(&self) -> &'static str {
        match self {
            Error::InvalidLength { type_name, .. } => type_name,
            Error::InvalidEncoding { type_name, .. } => type_name,
        }
    }
}
