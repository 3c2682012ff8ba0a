pub mod cli;
pub mod client;
pub mod commands;
pub mod error;
pub mod prompt;

#[cfg(test)]
pub mod testsupport;

pub use cli::{Cli, Mode};
pub use client::{ApiResponse, ClusterClient};
pub use error::{Result, SnapctlError};
