use crate::{CacheError, CacheResult, LocalStore};

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::debug;

/// One `<key>.json` file per key inside a cache directory.
///
/// Writes go to a temp file, are synced, then renamed over the target so a
/// crash mid-write never leaves a half-written entry.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn entry_path(&self, key: &str) -> CacheResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(CacheError::invalid_key(key));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl LocalStore for FileStore {
    fn get(&self, key: &str) -> CacheResult<Option<String>> {
        let path = self.entry_path(key)?;

        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(CacheError::file_read(path, e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> CacheResult<()> {
        let final_path = self.entry_path(key)?;
        fs::create_dir_all(&self.dir).map_err(|e| CacheError::dir_creation(self.dir.clone(), e))?;

        let temp_path = self
            .dir
            .join(format!("{key}.json.tmp.{}", std::process::id()));

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| CacheError::file_write(temp_path.clone(), e))?;
            file.write_all(value.as_bytes())
                .map_err(|e| CacheError::file_write(temp_path.clone(), e))?;
            file.sync_all()
                .map_err(|e| CacheError::file_write(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &final_path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            CacheError::atomic_rename(temp_path, final_path.clone(), e)
        })?;

        debug!("Wrote cache entry {final_path:?}");
        Ok(())
    }

    fn remove(&self, key: &str) -> CacheResult<()> {
        let path = self.entry_path(key)?;

        match fs::remove_file(&path) {
            Ok(()) => {
                debug!("Removed cache entry {path:?}");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(CacheError::file_write(path, e)),
        }
    }
}
