//! Command handlers for CLI subcommands
//!
//! This module contains the implementation logic for each CLI subcommand.

mod completions;
mod transform;
mod utils;

pub use completions::handle_completions;
pub use transform::{handle_aliases, handle_fetch, handle_save};
