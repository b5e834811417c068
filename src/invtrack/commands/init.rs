use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::model::Item;

pub const SAMPLE_NAME: &str = "sample sign";
pub const SAMPLE_DESCRIPTION: &str = "A sample sign, simple but effective";
pub const SAMPLE_IMAGE: &str = "images/sample.jpg";

/// Seeds an empty inventory with a sample item. A non-empty inventory is left
/// alone.
pub fn run(inventory: &mut Inventory) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if !inventory.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "Inventory already has {} item{}; nothing to initialize.",
            inventory.len(),
            if inventory.len() == 1 { "" } else { "s" }
        )));
        return Ok(result);
    }

    let item = Item::new(SAMPLE_NAME, SAMPLE_DESCRIPTION, 1, SAMPLE_IMAGE);
    let id = inventory.append(item.clone());
    result.add_message(CmdMessage::success(format!(
        "New inventory created with sample item: {}",
        item.name()
    )));
    Ok(result.with_selected(id).with_affected_items(vec![item]))
}
