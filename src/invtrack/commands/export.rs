use crate::codec::Delimiter;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::store::{save_to_path, DataStore};
use chrono::Local;
use std::path::{Path, PathBuf};

const EXPORT_EXTENSION: &str = ".csv";

/// Writes every item to `<export_dir>/<name>.csv` using `delimiter`.
///
/// Exporting does not mark the session as saved: the working inventory file is
/// untouched.
pub fn run<S: DataStore>(
    store: &mut S,
    inventory: &Inventory,
    export_dir: &Path,
    name: Option<&str>,
    delimiter: Delimiter,
) -> Result<CmdResult> {
    let path = export_path(export_dir, name);
    save_to_path(store, inventory.items(), &path, delimiter)?;

    let mut result = CmdResult::default().with_paths(vec![path.clone()]);
    if inventory.is_empty() {
        result.add_message(CmdMessage::info("Inventory is empty; exported an empty file."));
    }
    result.add_message(CmdMessage::success(format!(
        "Exported {} item{} to {} (delimiter '{}')",
        inventory.len(),
        if inventory.len() == 1 { "" } else { "s" },
        path.display(),
        delimiter
    )));
    Ok(result)
}

fn export_path(export_dir: &Path, name: Option<&str>) -> PathBuf {
    let mut filename = name
        .map(sanitize_filename)
        .filter(|n| !n.is_empty())
        .unwrap_or_else(default_name);
    if !filename.to_lowercase().ends_with(EXPORT_EXTENSION) {
        filename.push_str(EXPORT_EXTENSION);
    }
    export_dir.join(filename)
}

fn default_name() -> String {
    format!("inventory-{}", Local::now().format("%Y-%m-%d_%H-%M-%S"))
}

/// Reduces a user-supplied name to a single, plain path component.
fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == ' ' || c == '-' || c == '_' || c == '.' {
                c
            } else {
                '_'
            }
        })
        .collect::<String>()
        .trim()
        .trim_start_matches('.')
        .to_string()
}
