//! Command-line interface for grimoire.

mod commands;
pub mod helpers;
pub mod icons;

pub use commands::{is_verbose, run};
