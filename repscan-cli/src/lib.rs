//! repscan command-line interface.
//!
//! The binary (`src/main.rs`) parses arguments with [`cli::Cli`], loads
//! configuration, installs logging and dispatches to [`commands`].

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod output;
