use std::path::{Path, PathBuf};

const APP_DIR: &str = "travel-journal";

/// Where the journal keeps its config and its log, relative to a home
/// directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalDirs {
    pub config_dir: PathBuf,
    pub log_dir: PathBuf,
}

impl JournalDirs {
    pub fn under(home: &Path) -> Self {
        Self {
            config_dir: home.join(".config").join(APP_DIR),
            log_dir: home.join(".cache").join(APP_DIR).join("log"),
        }
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join("journal.log")
    }
}

/// Dirs under `$HOME`, or under the working directory when it is unset.
pub fn journal_dirs() -> JournalDirs {
    let home = std::env::var_os("HOME").map_or_else(|| PathBuf::from("."), PathBuf::from);
    JournalDirs::under(&home)
}
