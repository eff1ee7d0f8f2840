//! CLI module
//!
//! Command-line interface for the listing and href helpers.
//!
//! # Commands
//!
//! - `limit` - Offset/limit pagination over a generated collection
//! - `marker` - Marker/limit pagination over a generated collection
//! - `params` - Validate marker/limit parameters
//! - `strip-version`, `id`, `uuid` - Href helpers
//! - `serve` - Start HTTP server mode

mod commands;
mod runner;
mod server;

pub use commands::{Cli, Commands};
pub use runner::Runner;
pub use server::{router, serve};
