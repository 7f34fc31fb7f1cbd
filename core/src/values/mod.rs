//! Runtime values produced by evaluation.

mod value;


pub use value::{ErrorKind, Value, format, parse_number};
