//! Application layer: services and use cases
//!
//! This layer orchestrates domain logic for the presentation layer.

pub mod calculator;
pub mod error;

pub use calculator::{CalculatorService, DEFAULT_RESULT_LABEL};
pub use error::{ApplicationError, ApplicationResult};
