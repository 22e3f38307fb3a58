use thiserror::Error;

/// Errors raised while building a cross-filter index.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    /// Filter state is tracked as one bit per dimension.
    #[error("too many dimensions: at most {max} are supported")]
    TooManyDimensions { max: usize },

    /// A dimension with this name is already registered.
    #[error("dimension already exists: {0}")]
    DuplicateDimension(String),
}
