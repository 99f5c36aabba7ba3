//! Compiled-in runtime configuration.
//!
//! The garage tool takes no flags or environment variables; every path is
//! resolved against the working directory the binary is started from.

use garage_core::default_log_level;
use std::io;
use std::path::{Path, PathBuf};

pub const DB_FILE_NAME: &str = "garage.db";
pub const LOG_DIR_NAME: &str = "logs";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// SQLite database file shared by every operation.
    pub db_path: PathBuf,
    /// Absolute directory for rolling log files.
    pub log_dir: PathBuf,
    pub log_level: &'static str,
}

impl AppConfig {
    /// Builds the configuration rooted at `base_dir`.
    pub fn rooted_at(base_dir: &Path) -> Self {
        Self {
            db_path: base_dir.join(DB_FILE_NAME),
            log_dir: base_dir.join(LOG_DIR_NAME),
            log_level: default_log_level(),
        }
    }

    /// Builds the configuration rooted at the current working directory.
    pub fn from_current_dir() -> io::Result<Self> {
        Ok(Self::rooted_at(&std::env::current_dir()?))
    }
}
