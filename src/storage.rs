//! CSV output and directory layout for scraped categories
//!
//! Layout under the user-supplied output root:
//!
//! ```text
//! <root>/<category>/<category>.csv
//! <root>/<category>/images/<title>.jpg
//! ```

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use csv::{QuoteStyle, ReaderBuilder, Terminator, WriterBuilder};

use crate::catalog::transform::sanitize_filename;
use crate::catalog::{COLUMNS, ProductRecord, UNKNOWN};
use crate::error::Error as CrateError;

/// Error type for storage operations
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Output directory does not exist: {}", .0.display())]
    MissingDirectory(PathBuf),
}

impl From<StorageError> for CrateError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::MissingDirectory(path) => CrateError::MissingDirectory(path),
            _ => CrateError::Storage(err.to_string()),
        }
    }
}

type Result<T> = std::result::Result<T, StorageError>;

/// Check that the output root exists before any scraping starts
pub fn ensure_output_root(path: &Path) -> Result<()> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(StorageError::MissingDirectory(path.to_path_buf()))
    }
}

/// Write records to `path`: an unquoted header line, then one line per record
/// with every field double-quoted and embedded quotes doubled
pub fn write_records(path: &Path, records: &[ProductRecord]) -> Result<()> {
    let mut file = BufWriter::new(File::create(path)?);
    writeln!(file, "{}", COLUMNS.join(","))?;

    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(file);

    for record in records {
        writer.write_record(record.as_row())?;
    }
    writer.flush()?;
    Ok(())
}

/// Read back a file produced by [`write_records`]
pub fn read_records(path: &Path) -> Result<Vec<ProductRecord>> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let records = reader
        .deserialize()
        .collect::<std::result::Result<Vec<ProductRecord>, csv::Error>>()?;
    Ok(records)
}

/// Output directories of one category
#[derive(Debug, Clone)]
pub struct CategoryLayout {
    name: String,
    directory: PathBuf,
}

impl CategoryLayout {
    /// Create `<root>/<name>/images`, reusing directories that already exist
    pub fn create(root: &Path, category: &str) -> Result<Self> {
        let mut name = sanitize_filename(category);
        if name.trim().is_empty() {
            name = UNKNOWN.to_string();
        }

        let layout = Self {
            directory: root.join(&name),
            name,
        };
        fs::create_dir_all(layout.images_dir())?;
        Ok(layout)
    }

    /// Category directory
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// `<category>/<category>.csv`
    pub fn csv_path(&self) -> PathBuf {
        self.directory.join(format!("{}.csv", self.name))
    }

    /// `<category>/images`
    pub fn images_dir(&self) -> PathBuf {
        self.directory.join("images")
    }
}
