use thiserror::Error;

/// Validation failures raised while constructing domain models from raw input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Reservation date string does not match the `yyyy-MM-dd` pattern.
    ///
    /// Carries the offending input value in the message. Surfaced to clients
    /// as a 400 Bad Request.
    #[error("date ({value}) does not match yyyy-MM-dd")]
    InvalidDateFormat { value: String },

    /// Time slot string does not match the `HH:mm` pattern.
    ///
    /// Carries the offending input value in the message. Surfaced to clients
    /// as a 400 Bad Request.
    #[error("start time ({value}) does not match HH:mm")]
    InvalidTimeFormat { value: String },
}
