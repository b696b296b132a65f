//! Command-line interface and orchestration for codeboard
//!
//! This module parses the command line, loads the configuration and the
//! measurement set, and hands them to the report pipeline.
//!
//! # Implementation Model
//!
//! ## Commands
//!
//! - **generate**: Load a measurement set and produce the HTML report into the
//!   configured (or `--report-html`) directory
//! - **init**: Write a default configuration file
//! - **validate**: Check the configuration file and that its template directory
//!   holds every page template and asset bundle
//!
//! The `run` function parses command-line arguments using clap and routes to
//! the appropriate command handler. All output goes through a [`Host`] so the
//! commands can run in-process under test.
//!
//! Configuration is a TOML file (`codeboard.toml`) naming the report directory,
//! an optional template directory and the list of groups.

mod common;
mod config;
mod generate;
mod host;
mod init;
mod run;
mod validate;

pub use common::LogLevel;
pub use config::{CONFIG_FILE_NAME, Config, DEFAULT_CONFIG_TOML};
pub use generate::{GenerateArgs, generate_report};
pub use host::Host;
pub use init::{InitArgs, init_config};
pub use run::run;
pub use validate::{ValidateArgs, validate_config};
