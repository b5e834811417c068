use crate::codec::Delimiter;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::store::{save_to_path, DataStore};
use std::path::Path;

pub fn run<S: DataStore>(
    store: &mut S,
    inventory: &mut Inventory,
    path: &Path,
) -> Result<CmdResult> {
    save_to_path(store, inventory.items(), path, Delimiter::default())?;
    inventory.mark_saved();

    let mut result = CmdResult::default().with_paths(vec![path.to_path_buf()]);
    result.add_message(CmdMessage::success(format!(
        "Items saved successfully to {}",
        path.display()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvError;
    use crate::model::Item;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn writes_comma_delimited_file() {
        let mut store = InMemoryStore::new();
        let mut inventory = Inventory::new();
        inventory.append(Item::new("Lamp", "desk, black", 2, "lamp.jpg"));
        let path = Path::new("save/inventory.csv");

        run(&mut store, &mut inventory, path).unwrap();

        assert_eq!(
            store.contents(path).unwrap(),
            "\"lamp\",\"desk, black\",2,\"lamp.jpg\"\n"
        );
        assert!(!inventory.is_dirty());
    }

    #[test]
    fn failed_write_keeps_session_dirty() {
        let mut store = InMemoryStore::new().deny_writes();
        let mut inventory = Inventory::new();
        inventory.append(Item::new("Lamp", "", 2, ""));

        let err = run(&mut store, &mut inventory, Path::new("x.csv")).unwrap_err();

        assert!(matches!(err, InvError::Io(_)));
        assert!(inventory.is_dirty());
    }
}
