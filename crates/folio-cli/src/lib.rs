//! Folio CLI - command-line front end of the control panel
//!
//! Each invocation is one operator session: the password gate runs first
//! for every command that changes or publishes something, then the command
//! is dispatched to [`folio_core::ControlPanel`].
//!
//! # Example
//!
//! ```bash
//! export FOLIO_PASSWORD='my password'
//! folio token set ghp_xxxxxxxxxxxxxxxxxxxx
//! folio add dc-characters "The Joker" oil --image joker.png --year 2019
//! folio publish
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
pub mod args;
pub mod commands;
pub mod logging;
pub mod output;

// Re-exports
pub use args::{AddArgs, Cli, Command, GlobalArgs, TokenCommand};
pub use commands::run;
pub use logging::init_tracing;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
