use thiserror::Error;

pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid torque curve: {what}")]
    InvalidCurve { what: &'static str },

    #[error("Invalid parameter {field}: {what}")]
    InvalidParameter {
        field: &'static str,
        what: &'static str,
    },

    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },
}
