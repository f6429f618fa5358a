//! CLI module for tools-dashboard - command-line interface and subcommands.
//!
//! With no subcommand the TUI is launched; `list` prints the catalog.

pub mod commands;

pub use commands::Cli;
