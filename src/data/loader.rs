//! CSV Data Loader Module
//! Reads the users and sessions datasets into Polars DataFrames.

use polars::prelude::*;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use super::options::ReadOptions;
use super::paths::{DataPaths, UsersVariant};

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to load CSV {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: PolarsError,
    },
    #[error("Invalid read options: {0}")]
    Config(#[from] serde_json::Error),
}

impl LoaderError {
    /// Path of the file that failed, if the error came from a read.
    pub fn path(&self) -> Option<&Path> {
        match self {
            LoaderError::Open { path, .. } | LoaderError::Csv { path, .. } => Some(path.as_path()),
            LoaderError::Config(_) => None,
        }
    }

    /// True when the file did not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, LoaderError::Open { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

pub type Result<T> = std::result::Result<T, LoaderError>;

/// Read one comma-separated file with a header row.
pub fn read_table(path: &Path, options: &ReadOptions) -> Result<DataFrame> {
    debug!(path = %path.display(), "reading csv");

    let file = File::open(path).map_err(|source| LoaderError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let df = options
        .to_csv_options()
        .into_reader_with_file_handle(file)
        .finish()
        .map_err(|source| LoaderError::Csv {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "loaded csv"
    );
    Ok(df)
}

/// Loads the datasets found under one base directory.
#[derive(Debug, Clone, Default)]
pub struct DataLoader {
    paths: DataPaths,
    options: ReadOptions,
}

impl DataLoader {
    /// Create a loader rooted at `base` with default read options.
    pub fn new(base: impl AsRef<Path>) -> Self {
        Self {
            paths: DataPaths::new(base),
            options: ReadOptions::default(),
        }
    }

    /// Replace the read options.
    pub fn with_options(mut self, options: ReadOptions) -> Self {
        self.options = options;
        self
    }

    /// Get the dataset layout.
    pub fn paths(&self) -> &DataPaths {
        &self.paths
    }

    /// Get the read options.
    pub fn options(&self) -> &ReadOptions {
        &self.options
    }

    /// Load `(train_users, test_users)`. Train is read first; either failure
    /// aborts the whole load.
    pub fn load_users(&self, variant: &UsersVariant) -> Result<(DataFrame, DataFrame)> {
        let (train_path, test_path) = self.paths.users(variant);
        let train = read_table(&train_path, &self.options)?;
        let test = read_table(&test_path, &self.options)?;
        Ok((train, test))
    }

    /// Load `raw/sessions.csv`.
    pub fn load_sessions(&self) -> Result<DataFrame> {
        read_table(&self.paths.sessions(), &self.options)
    }
}

/// Load train and test users from `path`, raw or preprocessed.
///
/// `prefix` is prepended to the file names in preprocessed mode only.
pub fn load_users_data(
    path: impl AsRef<Path>,
    preprocessed: bool,
    prefix: &str,
) -> Result<(DataFrame, DataFrame)> {
    DataLoader::new(path).load_users(&UsersVariant::from_flags(preprocessed, prefix))
}

/// Load `raw/sessions.csv` from `path`.
pub fn load_sessions_data(path: impl AsRef<Path>) -> Result<DataFrame> {
    DataLoader::new(path).load_sessions()
}
