//! Domain layer: parsing, formatting, and arithmetic
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config
//! loading). Everything here is a pure function of its inputs.

pub mod error;
pub mod formatter;
pub mod operator;
pub mod parser;

pub use error::DomainError;
pub use formatter::format_value;
pub use operator::Operator;
pub use parser::parse_number;
