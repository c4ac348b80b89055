//! Directory listing module
//!
//! This module contains the listing engine, its configuration, and the
//! sorted collection of matching names.

pub mod collection;
pub mod config;
pub mod engine;

pub use collection::FilenameCollection;
pub use config::ListingConfig;
pub use engine::{check_list, generate_list, ListingEngine, ListingOutcome};
