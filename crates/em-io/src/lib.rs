//! em-io: readers and sinks around the simulation core.
//!
//! The core never touches a console or a file; everything user-facing lives
//! here: the flat parameter-file format, the interactive field-by-field
//! reader, and the trajectory sinks (tab-separated text and JSON lines).

pub mod error;
pub mod reader;
pub mod writer;

pub use error::{IoError, IoResult};
pub use reader::{
    parse_parameters, prompt_ambient_temperature, read_parameters_file,
    read_parameters_interactive,
};
pub use writer::{JsonLinesSink, TrajectorySink, format_outcome};
