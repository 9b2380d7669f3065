//! Dataset Layout Module
//! Resolves file paths inside the `raw/` and `processed/` dataset directories.

use std::ffi::OsString;
use std::path::{Path, PathBuf, MAIN_SEPARATOR_STR};

/// Base directory used when no path is given.
pub const DEFAULT_PATH: &str = "../data/";

pub const RAW_DIR: &str = "raw";
pub const PROCESSED_DIR: &str = "processed";

pub const TRAIN_USERS_FILE: &str = "train_users.csv";
pub const TEST_USERS_FILE: &str = "test_users.csv";
pub const SESSIONS_FILE: &str = "sessions.csv";

/// Which copy of the users dataset to read.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UsersVariant {
    /// Files as originally distributed, under `raw/`.
    #[default]
    Raw,
    /// Files produced by an external preprocessing step, under `processed/`.
    /// The prefix is prepended to each file name.
    Processed { prefix: String },
}

impl UsersVariant {
    /// Build a variant from the `(preprocessed, prefix)` flag pair.
    /// The prefix only matters in preprocessed mode.
    pub fn from_flags(preprocessed: bool, prefix: &str) -> Self {
        if preprocessed {
            UsersVariant::Processed {
                prefix: prefix.to_string(),
            }
        } else {
            UsersVariant::Raw
        }
    }
}

/// Directory convention rooted at a base path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    base: PathBuf,
}

impl Default for DataPaths {
    fn default() -> Self {
        Self::new(DEFAULT_PATH)
    }
}

impl DataPaths {
    pub fn new(base: impl AsRef<Path>) -> Self {
        Self {
            base: base.as_ref().to_path_buf(),
        }
    }

    /// Base directory holding `raw/` and `processed/`.
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Train and test users file paths for the given variant.
    pub fn users(&self, variant: &UsersVariant) -> (PathBuf, PathBuf) {
        match variant {
            UsersVariant::Raw => {
                let dir = self.base.join(RAW_DIR);
                (dir.join(TRAIN_USERS_FILE), dir.join(TEST_USERS_FILE))
            }
            UsersVariant::Processed { prefix } => {
                let dir = self.base.join(PROCESSED_DIR);
                (
                    prefixed_file(&dir, prefix, TRAIN_USERS_FILE),
                    prefixed_file(&dir, prefix, TEST_USERS_FILE),
                )
            }
        }
    }

    /// Sessions only ship in raw form.
    pub fn sessions(&self) -> PathBuf {
        self.base.join(RAW_DIR).join(SESSIONS_FILE)
    }
}

/// `<dir>/<prefix><file>`, built as text so the result always stays under
/// `dir`, even when the prefix starts with a separator.
fn prefixed_file(dir: &Path, prefix: &str, file: &str) -> PathBuf {
    let mut path = OsString::from(dir);
    path.push(MAIN_SEPARATOR_STR);
    path.push(prefix);
    path.push(file);
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths_resolve_under_raw() {
        let paths = DataPaths::default();
        let (train, test) = paths.users(&UsersVariant::default());

        assert_eq!(train, Path::new("../data/raw/train_users.csv"));
        assert_eq!(test, Path::new("../data/raw/test_users.csv"));
        assert_eq!(paths.sessions(), Path::new("../data/raw/sessions.csv"));
    }

    #[test]
    fn test_processed_paths_carry_prefix() {
        let paths = DataPaths::new("/srv/data");
        let (train, test) = paths.users(&UsersVariant::from_flags(true, "p_"));

        assert_eq!(train, Path::new("/srv/data/processed/p_train_users.csv"));
        assert_eq!(test, Path::new("/srv/data/processed/p_test_users.csv"));
    }

    #[test]
    fn test_prefix_ignored_in_raw_mode() {
        assert_eq!(UsersVariant::from_flags(false, "p_"), UsersVariant::Raw);

        let (train, _) = DataPaths::new("/srv/data").users(&UsersVariant::from_flags(false, "p_"));
        assert_eq!(train, Path::new("/srv/data/raw/train_users.csv"));
    }

    #[test]
    fn test_trailing_separator_is_irrelevant() {
        let with_slash = DataPaths::new("/srv/data/");
        let without_slash = DataPaths::new("/srv/data");

        assert_eq!(with_slash.sessions(), without_slash.sessions());
        assert_eq!(
            with_slash.users(&UsersVariant::Raw),
            without_slash.users(&UsersVariant::Raw)
        );
    }

    #[test]
    fn test_prefix_never_escapes_processed_dir() {
        let paths = DataPaths::new("/srv/data/");
        let (train, test) = paths.users(&UsersVariant::from_flags(true, "/p_"));
        let processed = paths.base().join(PROCESSED_DIR);

        assert!(train.starts_with(&processed), "{}", train.display());
        assert!(test.starts_with(&processed), "{}", test.display());
        assert_eq!(train.file_name().unwrap(), "p_train_users.csv");
        assert_eq!(test.file_name().unwrap(), "p_test_users.csv");
    }

    #[test]
    fn test_empty_prefix_in_processed_mode() {
        let paths = DataPaths::new("/srv/data");
        let (train, test) = paths.users(&UsersVariant::from_flags(true, ""));

        assert_eq!(train, Path::new("/srv/data/processed/train_users.csv"));
        assert_eq!(test, Path::new("/srv/data/processed/test_users.csv"));
        assert_eq!(paths.base(), Path::new("/srv/data"));
    }
}
