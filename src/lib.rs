pub mod assembler;
pub mod cli;
pub mod config;
pub mod error;
pub mod finder;
pub mod model;
pub mod output;
pub mod reporter;
pub mod rules;
pub mod scanner;

pub use error::{NotifyOffensesError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_OFFENSES_FOUND: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
