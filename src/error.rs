use thiserror::Error;

/// Errors reported by the public hash and MAC operations.
///
/// The numeric values returned by [`Error::code`] are part of the external
/// ABI and stable across versions; `0` is reserved for success and never
/// appears here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// No registered implementation matches the requested algorithm
    /// identifier and flags.
    #[error("no implementation found for the requested algorithm")]
    NotFound,
    /// The data passed in is invalid for the operation.
    #[error("data is invalid for the operation")]
    BadData,
    /// A length is invalid for the operation: a BLAKE2 key longer than the
    /// algorithm allows, or an undersized output buffer.
    #[error("length is invalid for the operation")]
    BadLen,
    /// A required parameter was absent.
    #[error("required parameter is missing")]
    ParamNull,
    /// The handle was used before `init`, or again after finalization
    /// without being re-initialized.
    #[error("object was not initialized")]
    NotInitialized,
    /// Dynamic memory allocation failed.
    #[error("memory allocation failed")]
    AllocFailure,
    /// Random data generation failed.
    #[error("random data generation failed")]
    RandomFailure,
}

impl Error {
    /// The stable numeric code of this error.
    pub const fn code(self) -> i32 {
        match self {
            Error::NotFound => 1,
            Error::BadData => 2,
            Error::BadLen => 3,
            Error::ParamNull => 4,
            Error::NotInitialized => 10,
            Error::AllocFailure => 20,
            Error::RandomFailure => 30,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
