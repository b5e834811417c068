use crate::commands::ItemSelector;
use crate::error::{InvError, Result};
use crate::inventory::{Inventory, ItemId};
use crate::model::normalize_name;

pub fn resolve(inventory: &Inventory, selector: &ItemSelector) -> Result<ItemId> {
    match selector {
        ItemSelector::Name(name) => inventory
            .find_by_name(name)
            .ok_or_else(|| InvError::ItemNotFound(normalize_name(name))),
        ItemSelector::Id(id) if inventory.contains(*id) => Ok(*id),
        ItemSelector::Id(id) => Err(InvError::StaleItem(*id)),
    }
}

/// True when some item other than `except` already uses `name`.
pub fn name_taken(inventory: &Inventory, name: &str, except: Option<ItemId>) -> bool {
    let name = normalize_name(name);
    inventory
        .entries()
        .any(|(id, item)| Some(id) != except && item.name() == name)
}
