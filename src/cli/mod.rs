//! CLI interface for confusable-distance
//!
//! Provides command-line access to the distance engine, skeletons and the
//! confusable table, plus persistent user settings.

pub mod args;
pub mod commands;
pub mod paths;

pub use args::{Cli, Commands};
pub use commands::Outcome;
pub use paths::{config_dir, PersistentConfig};
