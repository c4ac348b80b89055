//! Directory scanning module

pub mod directory;
pub mod filter;

pub use directory::find_matching_entries;
pub use filter::has_suffix;
