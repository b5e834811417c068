use super::DataStore;
use crate::error::{InvError, Result};
use std::collections::HashMap;
use std::io::{Error, ErrorKind};
use std::path::{Path, PathBuf};

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    files: HashMap<PathBuf, Vec<u8>>,
    deny_writes: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl AsRef<Path>, contents: impl AsRef<[u8]>) -> Self {
        self.files
            .insert(path.as_ref().to_path_buf(), contents.as_ref().to_vec());
        self
    }

    /// Make every subsequent write fail with `PermissionDenied`.
    pub fn deny_writes(mut self) -> Self {
        self.deny_writes = true;
        self
    }

    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files
            .get(path.as_ref())
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }
}

impl DataStore for InMemoryStore {
    fn read(&self, path: &Path) -> Result<Option<Vec<u8>>> {
        Ok(self.files.get(path).cloned())
    }

    fn write(&mut self, path: &Path, contents: &[u8]) -> Result<()> {
        if self.deny_writes {
            return Err(InvError::Io(Error::new(
                ErrorKind::PermissionDenied,
                format!("write denied: {}", path.display()),
            )));
        }
        self.files.insert(path.to_path_buf(), contents.to_vec());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::codec::{encode, Delimiter};
    use crate::model::Item;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_items(mut self, path: impl AsRef<Path>, count: usize) -> Self {
            let items: Vec<Item> = (0..count)
                .map(|i| {
                    Item::new(
                        format!("Item {}", i + 1),
                        format!("Description for item {}", i + 1),
                        i as u32,
                        format!("images/item-{}.jpg", i + 1),
                    )
                })
                .collect();
            let text = encode(&items, Delimiter::default());
            self.store = self.store.with_file(path, text);
            self
        }

        pub fn with_raw(mut self, path: impl AsRef<Path>, text: &str) -> Self {
            self.store = self.store.with_file(path, text);
            self
        }
    }
}
