use crate::commands::helpers::resolve;
use crate::commands::{CmdResult, ItemSelector};
use crate::error::Result;
use crate::inventory::Inventory;

pub fn run(inventory: &Inventory, selector: &ItemSelector) -> Result<CmdResult> {
    let id = resolve(inventory, selector)?;
    let listed = inventory
        .display_items()
        .into_iter()
        .filter(|di| di.id == id)
        .collect();
    Ok(CmdResult::default()
        .with_listed_items(listed)
        .with_selected(id))
}
