use thiserror::Error;

/// Error type for invalid unit operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AgroMixError {
    #[error("Unknown unit '{0}'; only registered units can be converted")]
    UnknownUnit(String),
    #[error("Cannot convert from '{from}' to '{to}': incompatible dimensions ({from_dimension} vs {to_dimension})")]
    IncompatibleUnits {
        from: String,
        to: String,
        from_dimension: String,
        to_dimension: String,
    },
}

/// Convenience type for `Result<T, AgroMixError>`.
pub type AgroMixResult<T> = Result<T, AgroMixError>;
