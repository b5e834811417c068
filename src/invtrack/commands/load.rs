use crate::codec::Delimiter;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::store::{load_from_path, DataStore};
use std::path::Path;

/// Replaces the session inventory with the contents of the inventory file.
///
/// The working file is always comma-delimited; only exports use the
/// configured delimiter.
pub fn run<S: DataStore>(store: &S, inventory: &mut Inventory, path: &Path) -> Result<CmdResult> {
    let mut result = CmdResult::default().with_paths(vec![path.to_path_buf()]);

    let Some(decoded) = load_from_path(store, path, Delimiter::default())? else {
        *inventory = Inventory::new();
        result.add_message(CmdMessage::info(format!(
            "No inventory found at {}, starting empty.",
            path.display()
        )));
        return Ok(result);
    };

    for warning in &decoded.warnings {
        result.add_message(CmdMessage::warning(warning.to_string()));
    }

    let count = decoded.items.len();
    *inventory = Inventory::from_items(decoded.items);
    result.add_message(CmdMessage::success(format!(
        "Loaded {} item{} from {}",
        count,
        if count == 1 { "" } else { "s" },
        path.display()
    )));

    Ok(result)
}
