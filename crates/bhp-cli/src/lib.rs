//! BHP CLI - command-line front end
//!
//! Parses arguments with [`cli::build_cli`], loads [`settings::Settings`],
//! and runs one command through [`commands::run`].

#![warn(unreachable_pub)]

pub mod cli;
pub mod commands;
pub mod render;
pub mod settings;

pub use cli::build_cli;
pub use commands::run;
pub use settings::{Settings, DEFAULT_SETTINGS_FILE};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
