//! Data module - dataset layout and CSV loading

mod loader;
mod options;
mod paths;

pub use loader::{load_sessions_data, load_users_data, read_table, DataLoader, LoaderError, Result};
pub use options::ReadOptions;
pub use paths::{
    DataPaths, UsersVariant, DEFAULT_PATH, PROCESSED_DIR, RAW_DIR, SESSIONS_FILE, TEST_USERS_FILE,
    TRAIN_USERS_FILE,
};
