use crate::commands::helpers::{name_taken, resolve};
use crate::commands::{CmdMessage, CmdResult, ItemSelector, ItemUpdate};
use crate::error::Result;
use crate::inventory::Inventory;

pub fn run(
    inventory: &mut Inventory,
    selector: &ItemSelector,
    update: ItemUpdate,
) -> Result<CmdResult> {
    let id = resolve(inventory, selector)?;
    let previous_name = inventory.get(id)?.name().to_string();
    let mut result = CmdResult::default().with_selected(id);

    let item = match &update {
        ItemUpdate::Rename(new_name) => {
            if name_taken(inventory, new_name, Some(id)) {
                result.add_message(CmdMessage::warning(format!(
                    "Another item is already named '{}'.",
                    crate::model::normalize_name(new_name)
                )));
            }
            let item = inventory.rename(id, new_name)?;
            result.add_message(CmdMessage::success(format!(
                "Item renamed: {} -> {}",
                previous_name,
                item.name()
            )));
            item
        }
        ItemUpdate::Description(description) => {
            let item = inventory.set_description(id, description)?;
            result.add_message(CmdMessage::success(format!(
                "Description updated: {}",
                item.name()
            )));
            item
        }
        ItemUpdate::ImagePath(image_path) => {
            let item = inventory.set_image_path(id, image_path)?;
            result.add_message(CmdMessage::success(format!(
                "Image path updated: {}",
                item.name()
            )));
            item
        }
    }
    .clone();

    Ok(result.with_affected_items(vec![item]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::error::InvError;
    use crate::model::Item;

    fn inventory() -> Inventory {
        Inventory::from_items(vec![
            Item::new("shelf", "pine", 1, "shelf.jpg"),
            Item::new("table", "oak", 1, ""),
        ])
    }

    #[test]
    fn rename_lowercases() {
        let mut inv = inventory();
        run(&mut inv, &"shelf".into(), ItemUpdate::Rename("Big Shelf".into())).unwrap();
        assert!(inv.find_by_name("big shelf").is_some());
        assert!(inv.find_by_name("shelf").is_none());
    }

    #[test]
    fn rename_onto_existing_name_warns_but_applies() {
        let mut inv = inventory();
        let result = run(&mut inv, &"shelf".into(), ItemUpdate::Rename("TABLE".into())).unwrap();
        assert_eq!(result.count(MessageLevel::Warning), 1);
        assert_eq!(inv.items().filter(|i| i.name() == "table").count(), 2);
    }

    #[test]
    fn description_and_image_are_replaced() {
        let mut inv = inventory();
        run(
            &mut inv,
            &"table".into(),
            ItemUpdate::Description("walnut, \"antique\"".into()),
        )
        .unwrap();
        let result = run(
            &mut inv,
            &"table".into(),
            ItemUpdate::ImagePath("img/table.png".into()),
        )
        .unwrap();

        let item = &result.affected_items[0];
        assert_eq!(item.description(), "walnut, \"antique\"");
        assert_eq!(item.image_path(), "img/table.png");
        assert!(inv.is_dirty());
    }

    #[test]
    fn missing_item_changes_nothing() {
        let mut inv = inventory();
        let err = run(&mut inv, &"chair".into(), ItemUpdate::Rename("x".into())).unwrap_err();
        assert!(matches!(err, InvError::ItemNotFound(_)));
        assert!(!inv.is_dirty());
    }
}
