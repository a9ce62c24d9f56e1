use thiserror::Error;

pub type IoResult<T> = Result<T, IoError>;

#[derive(Error, Debug)]
pub enum IoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error at line {line}: invalid {field}: {value:?}")]
    Parse {
        line: usize,
        field: &'static str,
        value: String,
    },

    #[error("Invalid input for {field}: {value:?}")]
    InvalidInput { field: &'static str, value: String },

    #[error("Unexpected end of input while reading {field}")]
    UnexpectedEof { field: &'static str },

    #[error(transparent)]
    Core(#[from] em_core::CoreError),
}
