use crate::commands::{CmdMessage, CmdResult, ItemSelector};
use crate::error::Result;
use crate::inventory::Inventory;

/// Removes one item. A name deletes the first match; a handle deletes exactly
/// that item and is stale afterwards.
pub fn run(inventory: &mut Inventory, selector: &ItemSelector) -> Result<CmdResult> {
    let removed = match selector {
        ItemSelector::Name(name) => inventory.delete_by_name(name)?,
        ItemSelector::Id(id) => inventory.remove(*id)?,
    };

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Item deleted: {}",
        removed.name()
    )));
    Ok(result.with_affected_items(vec![removed]))
}
