//! grimoire - spell record annotation toolkit.
//!
//! Core library exposing the record model, configuration and the JSON store
//! shared by the workspace crates.

pub mod config;
pub mod models;
pub mod store;
