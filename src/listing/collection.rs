use serde::Serialize;

/// Sorted names of the entries that passed the suffix filter.
///
/// Ordering is ordinal: Rust string comparison, which is byte order on
/// UTF-8 and therefore Unicode code point order. No locale or case folding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FilenameCollection {
    names: Vec<String>,
}

impl FilenameCollection {
    pub fn new(mut names: Vec<String>) -> Self {
        names.sort_unstable();
        Self { names }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl From<Vec<String>> for FilenameCollection {
    fn from(names: Vec<String>) -> Self {
        Self::new(names)
    }
}

impl FromIterator<String> for FilenameCollection {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
