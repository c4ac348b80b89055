//! SVG list generator
//!
//! Lists the entries of a directory that end with a suffix (".svg" by
//! default), sorts them ordinally, and writes them as a pretty-printed JSON
//! array for a static gallery page to load.

pub mod cli;
pub mod error;
pub mod formatter;
pub mod listing;
pub mod scanner;

// Re-export commonly used types
pub use error::{ListingError, ListingResult};
pub use formatter::JsonListFormatter;
pub use listing::{
    check_list, generate_list, FilenameCollection, ListingConfig, ListingEngine, ListingOutcome,
};
