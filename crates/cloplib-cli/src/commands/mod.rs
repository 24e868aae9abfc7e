//! Subcommand implementations.

pub mod classify;
pub mod show_config;
pub mod tools;
pub mod types;
