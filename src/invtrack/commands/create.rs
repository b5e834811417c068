use crate::commands::helpers::name_taken;
use crate::commands::{CmdMessage, CmdResult, NewItem};
use crate::error::Result;
use crate::inventory::Inventory;

pub fn run(inventory: &mut Inventory, new_item: NewItem) -> Result<CmdResult> {
    let duplicate = name_taken(inventory, &new_item.name, None);
    let item = new_item.into_item();
    let id = inventory.append(item.clone());

    let mut result = CmdResult::default().with_selected(id);
    if duplicate {
        result.add_message(CmdMessage::warning(format!(
            "An item named '{}' already exists; lookups by name will find the earlier one.",
            item.name()
        )));
    }
    result.add_message(CmdMessage::success(format!(
        "Item added successfully: {}",
        item.name()
    )));
    Ok(result.with_affected_items(vec![item]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;

    #[test]
    fn appends_with_lowercased_name() {
        let mut inventory = Inventory::new();
        let result = run(
            &mut inventory,
            NewItem::new("Widget").description("Blue").amount(4),
        )
        .unwrap();

        let id = result.selected.unwrap();
        let item = inventory.get(id).unwrap();
        assert_eq!(item.name(), "widget");
        assert_eq!(item.amount(), 4);
        assert_eq!(inventory.find_by_name("WIDGET"), Some(id));
    }

    #[test]
    fn duplicate_names_are_allowed_with_warning() {
        let mut inventory = Inventory::new();
        run(&mut inventory, NewItem::new("widget")).unwrap();
        let result = run(&mut inventory, NewItem::new("Widget")).unwrap();

        assert_eq!(inventory.len(), 2);
        assert_eq!(result.count(MessageLevel::Warning), 1);
    }
}
