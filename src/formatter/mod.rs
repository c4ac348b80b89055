//! JSON output formatting
//!
//! Renders the file list as a pretty-printed JSON array. The layout matches
//! the usual "indent N" style: one element per line, `[]` for an empty list,
//! and no trailing newline.

pub mod ascii;

use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter, Serializer};
use std::io::Write;

use crate::error::ListingResult;
use ascii::AsciiFormatter;

/// Maximum supported indentation width
pub const MAX_INDENT: u8 = 8;

/// Pretty JSON writer with configurable indentation
#[derive(Debug, Clone, PartialEq)]
pub struct JsonListFormatter {
    indent: String,
    ensure_ascii: bool,
}

impl Default for JsonListFormatter {
    fn default() -> Self {
        Self::new(2, true)
    }
}

impl JsonListFormatter {
    /// Create a formatter indenting each level by `indent_size` spaces
    pub fn new(indent_size: u8, ensure_ascii: bool) -> Self {
        Self {
            indent: " ".repeat(indent_size.min(MAX_INDENT) as usize),
            ensure_ascii,
        }
    }

    pub fn indent_size(&self) -> usize {
        self.indent.len()
    }

    pub fn ensure_ascii(&self) -> bool {
        self.ensure_ascii
    }

    /// Serialize `value` into `writer`
    pub fn write<W, T>(&self, writer: W, value: &T) -> ListingResult<()>
    where
        W: Write,
        T: ?Sized + Serialize,
    {
        let pretty = PrettyFormatter::with_indent(self.indent.as_bytes());
        if self.ensure_ascii {
            serialize(writer, AsciiFormatter::new(pretty), value)
        } else {
            serialize(writer, pretty, value)
        }
    }

    /// Serialize `value` into a string
    pub fn render<T>(&self, value: &T) -> ListingResult<String>
    where
        T: ?Sized + Serialize,
    {
        let mut buffer = Vec::new();
        self.write(&mut buffer, value)?;
        // serde_json only emits valid UTF-8
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}

fn serialize<W, F, T>(writer: W, formatter: F, value: &T) -> ListingResult<()>
where
    W: Write,
    F: Formatter,
    T: ?Sized + Serialize,
{
    let mut serializer = Serializer::with_formatter(writer, formatter);
    value.serialize(&mut serializer)?;
    Ok(())
}
