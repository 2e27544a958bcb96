//! grimoire-annotate - annotation services for spell records.

pub mod services;
