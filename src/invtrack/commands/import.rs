use crate::codec::Delimiter;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::store::{load_from_path, DataStore};
use std::path::Path;

/// Appends the records of a delimited file to the session, after the items
/// already present.
pub fn run<S: DataStore>(
    store: &S,
    inventory: &mut Inventory,
    path: &Path,
    delimiter: Delimiter,
) -> Result<CmdResult> {
    let mut result = CmdResult::default().with_paths(vec![path.to_path_buf()]);

    let Some(decoded) = load_from_path(store, path, delimiter)? else {
        result.add_message(CmdMessage::warning(format!(
            "File not found: {}",
            path.display()
        )));
        return Ok(result);
    };

    for warning in &decoded.warnings {
        result.add_message(CmdMessage::warning(warning.to_string()));
    }

    let imported = decoded.items;
    inventory.extend(imported.iter().cloned());
    result.add_message(CmdMessage::success(format!(
        "Imported {} item{} from {}",
        imported.len(),
        if imported.len() == 1 { "" } else { "s" },
        path.display()
    )));
    Ok(result.with_affected_items(imported))
}
