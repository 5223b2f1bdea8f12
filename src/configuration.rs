use std::path::PathBuf;
use std::{fs, io};

/// Fixed name of the blob every session reads and writes.
pub const STORAGE_FILE_NAME: &str = "appointments.json";

pub trait Configuration: Clone + Send + Sync + 'static {
    fn storage_file(&self) -> PathBuf;
}

#[derive(Debug, Clone)]
pub struct ConfigurationHandler {
    data_dir: PathBuf,
}

impl ConfigurationHandler {
    /// Creates the data directory if needed. Wiring fails here, before any
    /// store exists, when the location is unusable.
    pub fn new(data_dir: impl Into<PathBuf>) -> io::Result<Self> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir)?;
        Ok(Self { data_dir })
    }
}

impl Configuration for ConfigurationHandler {
    fn storage_file(&self) -> PathBuf {
        self.data_dir.join(STORAGE_FILE_NAME)
    }
}
