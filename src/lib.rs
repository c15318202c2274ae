pub mod analyzer;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod filesystem;
pub mod filter;
pub mod input;
pub mod output;
pub mod path_utils;
pub mod report;

#[cfg(test)]
mod mock_fs;

pub use error::{Result, SmatchDigestError};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ISSUES_FOUND: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
