use super::DataStore;
use crate::error::{InvError, Result};
use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::Path;
use tracing::debug;

/// Filesystem-backed store. Paths are used as given.
#[derive(Debug, Default, Clone)]
pub struct FileStore;

impl FileStore {
    pub fn new() -> Self {
        Self
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.as_os_str().is_empty() && !path.exists() {
            fs::create_dir_all(path).map_err(InvError::Io)?;
            debug!(dir = %path.display(), "created directory");
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn read(&self, path: &Path) -> Result<Option<Vec<u8>>> {
        match fs::read(path) {
            Ok(bytes) => {
                debug!(path = %path.display(), bytes = bytes.len(), "read file");
                Ok(Some(bytes))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(InvError::Io(e)),
        }
    }

    fn write(&mut self, path: &Path, contents: &[u8]) -> Result<()> {
        if let Some(parent) = path.parent() {
            self.ensure_dir(parent)?;
        }

        let file = File::create(path).map_err(InvError::Io)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(contents).map_err(InvError::Io)?;
        writer.flush().map_err(InvError::Io)?;

        debug!(path = %path.display(), bytes = contents.len(), "wrote file");
        Ok(())
    }
}
