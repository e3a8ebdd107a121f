use std::fs::{self, File};
use std::path::{Path, PathBuf};

use super::snapshot::Snapshot;
use crate::error::SaveError;

/// Reads and writes save files. Relative names resolve against `directory`.
#[derive(Debug, Clone)]
pub struct SaveStore {
    directory: PathBuf,
}

impl SaveStore {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        SaveStore {
            directory: directory.into(),
        }
    }

    pub fn resolve(&self, name: &Path) -> PathBuf {
        if name.is_absolute() {
            name.to_path_buf()
        } else {
            self.directory.join(name)
        }
    }

    /// Open an existing save file for reading, positioned at its start.
    pub fn open(&self, name: &Path) -> Result<File, SaveError> {
        let path = self.resolve(name);
        if !path.is_file() {
            return Err(SaveError::InvalidFileName(path));
        }
        File::open(&path).map_err(|e| SaveError::Read { path, source: e })
    }

    pub fn load(&self, name: &Path) -> Result<Snapshot, SaveError> {
        let file = self.open(name)?;
        let snapshot = Snapshot::read_from(file)?;
        tracing::info!(path = %self.resolve(name).display(), "loaded save");
        Ok(snapshot)
    }

    /// Write a snapshot, replacing any existing file. Returns the path written.
    pub fn save(&self, name: &Path, snapshot: &Snapshot) -> Result<PathBuf, SaveError> {
        let path = self.resolve(name);
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let mut tmp_name = path.clone().into_os_string();
        tmp_name.push(".tmp");
        let tmp_path = PathBuf::from(tmp_name);

        fs::write(&tmp_path, snapshot.to_json()?)?;
        // Atomic rename
        fs::rename(&tmp_path, &path)?;

        tracing::info!(path = %path.display(), "saved game");
        Ok(path)
    }
}
