use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("invalid number in query parameter: {0:?}")]
    InvalidNumber(String),

    /// Only strings, numbers and booleans can become query values.
    #[error("unrecognized option '{0}' isn't a primitive value")]
    NonPrimitive(String),
}
