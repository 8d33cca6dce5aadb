//! md-cli library
//!
//! Wires configuration, storage and the identity provider into an
//! [`md_auth::IdentityReconciler`] and runs one command against it.

pub mod app;
pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;

#[cfg(test)]
mod tests;

pub use app::App;
pub use cli::Cli;
pub use commands::Commands;
pub use error::{CliError, Result as CliErrorResult};
