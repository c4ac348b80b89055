//! Core listing engine: existence check, scan, filter, sort, write

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{ListingError, ListingResult};
use crate::formatter::JsonListFormatter;
use crate::listing::collection::FilenameCollection;
use crate::listing::config::ListingConfig;
use crate::scanner::find_matching_entries;

/// What a listing run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingOutcome {
    /// The list was written to `output`
    Generated { count: usize, output: PathBuf },
    /// The source directory does not exist; nothing was written
    DirectoryNotFound { directory: PathBuf },
    /// Check mode: the output file already holds the current list
    UpToDate { count: usize },
    /// Check mode: the output file is missing or differs from the current list
    Stale { count: usize, output: PathBuf },
}

impl ListingOutcome {
    /// Human-readable status line for this outcome
    pub fn status_line(&self, kind_label: &str) -> String {
        match self {
            Self::Generated { count, .. } => {
                format!("Generated list with {} {} files", count, kind_label)
            }
            Self::DirectoryNotFound { directory } => {
                format!("Directory {} not found!", directory.display())
            }
            Self::UpToDate { count } => {
                format!("List is up to date with {} {} files", count, kind_label)
            }
            Self::Stale { count, output } => format!(
                "List {} is out of date ({} {} files)",
                output.display(),
                count,
                kind_label
            ),
        }
    }

    /// False only for a stale list in check mode
    pub fn is_success(&self) -> bool {
        !matches!(self, Self::Stale { .. })
    }

    /// Number of listed entries, if a scan happened
    pub fn count(&self) -> Option<usize> {
        match self {
            Self::Generated { count, .. } | Self::UpToDate { count } | Self::Stale { count, .. } => {
                Some(*count)
            }
            Self::DirectoryNotFound { .. } => None,
        }
    }
}

/// Main listing engine
#[derive(Debug, Clone)]
pub struct ListingEngine {
    config: ListingConfig,
    formatter: JsonListFormatter,
}

impl ListingEngine {
    /// Create a new listing engine
    pub fn new(config: ListingConfig) -> ListingResult<Self> {
        config.validate().map_err(ListingError::configuration)?;
        let formatter = config.formatter();
        Ok(Self { config, formatter })
    }

    pub fn config(&self) -> &ListingConfig {
        &self.config
    }

    /// Scan the configured directory, or `None` if it does not exist
    pub fn scan(&self) -> ListingResult<Option<FilenameCollection>> {
        let directory = self.config.directory();
        if !directory.exists() {
            tracing::debug!("{} does not exist", directory.display());
            return Ok(None);
        }
        if !directory.is_dir() {
            return Err(ListingError::io(
                io::Error::new(io::ErrorKind::InvalidInput, "not a directory"),
                directory,
            ));
        }

        tracing::debug!(
            "Scanning {} for entries ending in {:?}",
            directory.display(),
            self.config.suffix
        );
        let names = find_matching_entries(directory, &self.config.suffix)?;
        Ok(Some(FilenameCollection::new(names)))
    }

    /// Scan and write the sorted list to the output file
    pub fn generate(&self) -> ListingResult<ListingOutcome> {
        let Some(collection) = self.scan()? else {
            return Ok(self.not_found());
        };

        let output = self.config.output();
        write_list(output, &collection, &self.formatter)?;
        tracing::info!("Wrote {} names to {}", collection.len(), output.display());

        Ok(ListingOutcome::Generated {
            count: collection.len(),
            output: output.to_path_buf(),
        })
    }

    /// Scan and compare with the existing output file without writing
    pub fn check(&self) -> ListingResult<ListingOutcome> {
        let Some(collection) = self.scan()? else {
            return Ok(self.not_found());
        };

        let output = self.config.output();
        let mut expected = Vec::new();
        self.formatter.write(&mut expected, &collection)?;

        let current = match fs::read(output) {
            Ok(bytes) => Some(bytes),
            Err(err) if err.kind() == io::ErrorKind::NotFound => None,
            Err(err) => return Err(ListingError::io(err, output)),
        };

        let count = collection.len();
        if current.as_deref() == Some(expected.as_slice()) {
            Ok(ListingOutcome::UpToDate { count })
        } else {
            tracing::debug!("{} differs from a fresh scan", output.display());
            Ok(ListingOutcome::Stale {
                count,
                output: output.to_path_buf(),
            })
        }
    }

    fn not_found(&self) -> ListingOutcome {
        ListingOutcome::DirectoryNotFound {
            directory: self.config.directory().to_path_buf(),
        }
    }
}

/// Write `collection` to `path`, creating or truncating it.
///
/// The file handle lives only for this call and is closed on every path.
fn write_list(
    path: &Path,
    collection: &FilenameCollection,
    formatter: &JsonListFormatter,
) -> ListingResult<()> {
    let file = File::create(path).map_err(|e| ListingError::io(e, path))?;
    let mut writer = BufWriter::new(file);
    formatter.write(&mut writer, collection)?;
    writer.flush().map_err(|e| ListingError::io(e, path))?;
    Ok(())
}

/// List the configured directory into its JSON file
pub fn generate_list(config: &ListingConfig) -> ListingResult<ListingOutcome> {
    ListingEngine::new(config.clone())?.generate()
}

/// Compare the configured JSON file with a fresh scan
pub fn check_list(config: &ListingConfig) -> ListingResult<ListingOutcome> {
    ListingEngine::new(config.clone())?.check()
}
