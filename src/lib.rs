//! rscalc: a command-line calculator with validated input parsing and
//! magnitude-aware result formatting.
//!
//! Layered layout:
//! - [`domain`] — pure logic: number parsing, result formatting, operators
//! - [`application`] — the calculation service orchestrating the domain
//! - [`cli`] — argument parsing, dispatch, terminal output
//! - [`config`] — layered settings (defaults, global file, env vars)

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;

pub use application::{ApplicationError, ApplicationResult, CalculatorService};
pub use domain::{format_value, parse_number, DomainError, Operator};
