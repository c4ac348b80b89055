//! Configuration options for directory listing

use std::path::{Path, PathBuf};

use crate::formatter::{JsonListFormatter, MAX_INDENT};

/// Directory scanned when none is given
pub const DEFAULT_DIRECTORY: &str = "mathworld_svgs";
/// File the list is written to when none is given
pub const DEFAULT_OUTPUT: &str = "mathworld_svgs_list.json";
/// Name suffix retained when none is given
pub const DEFAULT_SUFFIX: &str = ".svg";

/// Listing configuration options
#[derive(Debug, Clone, PartialEq)]
pub struct ListingConfig {
    /// Directory whose direct entries are listed
    pub directory: PathBuf,
    /// JSON file the sorted names are written to
    pub output: PathBuf,
    /// Entry names must end with this suffix
    pub suffix: String,
    /// Spaces per indentation level (0-8)
    pub indent_size: u8,
    /// Escape non-ASCII characters as \uXXXX (on by default)
    pub ensure_ascii: bool,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(DEFAULT_DIRECTORY),
            output: PathBuf::from(DEFAULT_OUTPUT),
            suffix: DEFAULT_SUFFIX.to_string(),
            indent_size: 2,
            ensure_ascii: true,
        }
    }
}

impl ListingConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = directory.into();
        self
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Set indentation size
    pub fn with_indent_size(mut self, size: u8) -> Result<Self, String> {
        if size > MAX_INDENT {
            return Err(format!("Indent size must be 0-{} spaces", MAX_INDENT));
        }
        self.indent_size = size;
        Ok(self)
    }

    pub fn with_ensure_ascii(mut self, enabled: bool) -> Self {
        self.ensure_ascii = enabled;
        self
    }

    /// Validate configuration consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.indent_size > MAX_INDENT {
            return Err(format!("Indent size must be 0-{} spaces", MAX_INDENT));
        }

        if self.suffix.is_empty() {
            return Err("Suffix must not be empty".to_string());
        }

        if self.directory.as_os_str().is_empty() {
            return Err("Directory path must not be empty".to_string());
        }

        if self.output.as_os_str().is_empty() {
            return Err("Output path must not be empty".to_string());
        }

        Ok(())
    }

    /// Label used in status lines, derived from the suffix (".svg" -> "SVG")
    pub fn kind_label(&self) -> String {
        self.suffix.trim_start_matches('.').to_uppercase()
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    /// JSON formatter for this configuration
    pub fn formatter(&self) -> JsonListFormatter {
        JsonListFormatter::new(self.indent_size, self.ensure_ascii)
    }
}
