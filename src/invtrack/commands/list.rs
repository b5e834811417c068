use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;

/// Lists items in insertion order. `search` narrows the listing to items whose
/// name or description contains the term, ignoring case. It does not affect
/// how commands resolve names.
pub fn run(inventory: &Inventory, search: Option<&str>) -> Result<CmdResult> {
    let term = search.map(str::to_lowercase);
    let listed: Vec<_> = inventory
        .display_items()
        .into_iter()
        .filter(|di| match &term {
            Some(term) => {
                di.item.name().contains(term.as_str())
                    || di.item.description().to_lowercase().contains(term.as_str())
            }
            None => true,
        })
        .collect();

    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::info("No items to display."));
    }
    Ok(result.with_listed_items(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Item;

    fn inventory() -> Inventory {
        Inventory::from_items(vec![
            Item::new("Hammer", "Claw hammer", 2, ""),
            Item::new("Saw", "Cuts WOOD", 1, ""),
            Item::new("Drill", "Cordless", 0, ""),
        ])
    }

    #[test]
    fn lists_everything_in_order() {
        let result = run(&inventory(), None).unwrap();
        let names: Vec<_> = result.listed_items.iter().map(|d| d.item.name()).collect();
        assert_eq!(names, vec!["hammer", "saw", "drill"]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn search_matches_name_and_description() {
        let inv = inventory();
        assert_eq!(run(&inv, Some("HAM")).unwrap().listed_items.len(), 1);

        let by_desc = run(&inv, Some("wood")).unwrap();
        assert_eq!(by_desc.listed_items.len(), 1);
        assert_eq!(by_desc.listed_items[0].position, 2);
    }

    #[test]
    fn empty_listing_has_message() {
        let result = run(&Inventory::new(), None).unwrap();
        assert!(result.listed_items.is_empty());
        assert_eq!(result.messages[0].content, "No items to display.");
    }
}
