use thiserror::Error;

pub type LabResult<T> = Result<T, LabError>;

#[derive(Error, Debug)]
pub enum LabError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Invariant violated: {what}")]
    Invariant { what: String },
}
