//! # Storage Layer
//!
//! The [`DataStore`] trait is the only place the application touches
//! persisted bytes. It reads and replaces whole files; it knows nothing about
//! items or the text format.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage on the local filesystem.
//! - [`memory::InMemoryStore`]: a map of path to bytes for tests. Can be told
//!   to refuse writes so error paths are testable without touching the disk.
//!
//! ## Load / Save
//!
//! [`load_from_path`] and [`save_to_path`] combine a store with the
//! [`codec`](crate::codec). They are what the command layer (and any other UI)
//! calls:
//!
//! - A missing file loads as `Ok(None)`. The caller decides how to report it.
//! - Malformed records never fail a load; they come back as warnings in
//!   [`Decoded`].
//! - Saving creates the containing directory first, then replaces the file.
//!
//! ## Storage Layout
//!
//! ```text
//! save/
//! ├── inventory.csv    # the working inventory, always comma-delimited
//! └── settings.cfg     # line 1: export delimiter
//! export/
//! └── <name>.csv       # exports, written with the configured delimiter
//! ```

use crate::codec::{self, Decoded, Delimiter};
use crate::error::Result;
use crate::model::Item;
use std::path::Path;
use tracing::debug;

pub mod fs;
pub mod memory;

/// Whole-file persistence backend.
pub trait DataStore {
    /// Read the full contents of `path`, or `None` when it does not exist.
    fn read(&self, path: &Path) -> Result<Option<Vec<u8>>>;

    /// Replace the contents of `path`, creating its parent directory if needed.
    fn write(&mut self, path: &Path, contents: &[u8]) -> Result<()>;
}

pub fn load_from_path<S: DataStore>(
    store: &S,
    path: &Path,
    delimiter: Delimiter,
) -> Result<Option<Decoded>> {
    let Some(bytes) = store.read(path)? else {
        debug!(path = %path.display(), "inventory file not found");
        return Ok(None);
    };

    let decoded = codec::decode(&bytes, delimiter);
    debug!(
        path = %path.display(),
        items = decoded.items.len(),
        warnings = decoded.warnings.len(),
        "decoded inventory file"
    );
    Ok(Some(decoded))
}

pub fn save_to_path<'a, S, I>(store: &mut S, items: I, path: &Path, delimiter: Delimiter) -> Result<()>
where
    S: DataStore,
    I: IntoIterator<Item = &'a Item>,
{
    let text = codec::encode(items, delimiter);
    store.write(path, text.as_bytes())
}
