use crate::commands::helpers::resolve;
use crate::commands::{CmdMessage, CmdResult, ItemSelector};
use crate::error::Result;
use crate::inventory::{Inventory, ItemId};
use crate::model::AmountChange;

pub fn increment(inventory: &mut Inventory, selector: &ItemSelector) -> Result<CmdResult> {
    let id = resolve(inventory, selector)?;
    let change = inventory.increment(id)?;
    report(inventory, id, change)
}

pub fn decrement(inventory: &mut Inventory, selector: &ItemSelector) -> Result<CmdResult> {
    let id = resolve(inventory, selector)?;
    let change = inventory.decrement(id)?;
    report(inventory, id, change)
}

fn report(inventory: &Inventory, id: ItemId, change: AmountChange) -> Result<CmdResult> {
    let item = inventory.get(id)?.clone();
    let mut result = CmdResult::default().with_selected(id);

    let message = match change {
        AmountChange::Incremented(amount) => {
            CmdMessage::success(format!("Incremented {}: now {}", item.name(), amount))
        }
        AmountChange::Decremented(amount) => {
            CmdMessage::success(format!("Decremented {}: now {}", item.name(), amount))
        }
        AmountChange::AtZero => {
            CmdMessage::warning(format!("Cannot decrement below zero: {}", item.name()))
        }
        AmountChange::AtCapacity => CmdMessage::warning(format!(
            "Cannot increment past {}: {}",
            u32::MAX,
            item.name()
        )),
    };
    result.add_message(message);

    Ok(result.with_affected_items(vec![item]))
}
