//! # Record Store
//!
//! [`Inventory`] is the ordered, in-memory collection of items for one session.
//! Insertion order is the display order and the order items are written back
//! to disk.
//!
//! ## Handles
//!
//! Every item gets an [`ItemId`] when it enters the inventory. Handles are
//! session-only (they are never persisted) and are how a UI keeps hold of a
//! "current item" between calls. Once an item is removed, its handle is stale
//! and every operation taking it returns [`InvError::StaleItem`]. Names are not
//! usable as handles because they are neither unique nor stable across a
//! rename.
//!
//! ## Name lookup
//!
//! Stored names are lowercase. [`Inventory::find_by_name`] lowercases the key
//! and returns the first exact match in insertion order. Duplicate names are
//! allowed; only the first one is reachable by name.

use crate::error::{InvError, Result};
use crate::model::{normalize_name, AmountChange, Item};
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ItemId(Uuid);

impl ItemId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone)]
struct Entry {
    id: ItemId,
    item: Item,
}

/// An item together with its handle and 1-based position, for listings.
#[derive(Debug, Clone, Serialize)]
pub struct DisplayItem {
    pub position: usize,
    #[serde(skip)]
    pub id: ItemId,
    #[serde(flatten)]
    pub item: Item,
}

#[derive(Debug, Clone, Default)]
pub struct Inventory {
    entries: Vec<Entry>,
    dirty: bool,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an inventory from already-persisted items. The result is clean.
    pub fn from_items(items: impl IntoIterator<Item = Item>) -> Self {
        let mut inventory = Self::new();
        inventory.extend(items);
        inventory.dirty = false;
        inventory
    }

    pub fn append(&mut self, item: Item) -> ItemId {
        let id = ItemId::new();
        self.entries.push(Entry { id, item });
        self.dirty = true;
        id
    }

    pub fn extend(&mut self, items: impl IntoIterator<Item = Item>) -> Vec<ItemId> {
        items.into_iter().map(|item| self.append(item)).collect()
    }

    pub fn find_by_name(&self, key: &str) -> Option<ItemId> {
        let key = normalize_name(key);
        self.entries
            .iter()
            .find(|entry| entry.item.name() == key)
            .map(|entry| entry.id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.position_of(id).is_some()
    }

    pub fn get(&self, id: ItemId) -> Result<&Item> {
        let pos = self.require(id)?;
        Ok(&self.entries[pos].item)
    }

    pub fn rename(&mut self, id: ItemId, new_name: &str) -> Result<&Item> {
        self.modify(id, |item| item.set_name(new_name))
    }

    pub fn set_description(&mut self, id: ItemId, description: &str) -> Result<&Item> {
        self.modify(id, |item| item.set_description(description))
    }

    pub fn set_image_path(&mut self, id: ItemId, image_path: &str) -> Result<&Item> {
        self.modify(id, |item| item.set_image_path(image_path))
    }

    pub fn increment(&mut self, id: ItemId) -> Result<AmountChange> {
        let pos = self.require(id)?;
        let change = self.entries[pos].item.increment();
        self.dirty |= change.is_change();
        Ok(change)
    }

    pub fn decrement(&mut self, id: ItemId) -> Result<AmountChange> {
        let pos = self.require(id)?;
        let change = self.entries[pos].item.decrement();
        self.dirty |= change.is_change();
        Ok(change)
    }

    pub fn remove(&mut self, id: ItemId) -> Result<Item> {
        let pos = self.require(id)?;
        self.dirty = true;
        Ok(self.entries.remove(pos).item)
    }

    /// Removes the first item whose name matches `key`.
    pub fn delete_by_name(&mut self, key: &str) -> Result<Item> {
        let id = self
            .find_by_name(key)
            .ok_or_else(|| InvError::ItemNotFound(normalize_name(key)))?;
        self.remove(id)
    }

    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.entries.iter().map(|entry| &entry.item)
    }

    pub fn ids(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.entries.iter().map(|entry| entry.id)
    }

    pub fn entries(&self) -> impl Iterator<Item = (ItemId, &Item)> {
        self.entries.iter().map(|entry| (entry.id, &entry.item))
    }

    pub fn display_items(&self) -> Vec<DisplayItem> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, entry)| DisplayItem {
                position: i + 1,
                id: entry.id,
                item: entry.item.clone(),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when the inventory changed since it was loaded or last saved.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }

    fn position_of(&self, id: ItemId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    fn require(&self, id: ItemId) -> Result<usize> {
        self.position_of(id).ok_or(InvError::StaleItem(id))
    }

    fn modify<F>(&mut self, id: ItemId, f: F) -> Result<&Item>
    where
        F: FnOnce(&mut Item),
    {
        let pos = self.require(id)?;
        f(&mut self.entries[pos].item);
        self.dirty = true;
        Ok(&self.entries[pos].item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Inventory {
        Inventory::from_items(vec![
            Item::new("Bolt", "M6", 10, "bolt.png"),
            Item::new("Nut", "M6", 0, "nut.png"),
            Item::new("bolt", "M8 duplicate", 3, ""),
        ])
    }

    #[test]
    fn from_items_preserves_order_and_is_clean() {
        let inv = sample();
        let names: Vec<_> = inv.items().map(|i| i.name()).collect();
        assert_eq!(names, vec!["bolt", "nut", "bolt"]);
        assert!(!inv.is_dirty());
    }

    #[test]
    fn append_marks_dirty_and_returns_handle() {
        let mut inv = Inventory::new();
        let id = inv.append(Item::new("Widget", "", 1, ""));
        assert!(inv.is_dirty());
        assert_eq!(inv.get(id).unwrap().name(), "widget");
    }

    #[test]
    fn find_by_name_is_case_insensitive() {
        let mut inv = Inventory::new();
        let id = inv.append(Item::new("Widget", "", 1, ""));
        assert_eq!(inv.find_by_name("WIDGET"), Some(id));
        assert_eq!(inv.find_by_name("widget"), Some(id));
    }

    #[test]
    fn find_by_name_is_exact() {
        let inv = sample();
        assert_eq!(inv.find_by_name("bol"), None);
        assert_eq!(inv.find_by_name("bolts"), None);
    }

    #[test]
    fn find_by_name_returns_first_duplicate() {
        let inv = sample();
        let id = inv.find_by_name("BOLT").unwrap();
        assert_eq!(inv.get(id).unwrap().description(), "M6");
    }

    #[test]
    fn rename_lowercases_without_collision_check() {
        let mut inv = sample();
        let nut = inv.find_by_name("nut").unwrap();
        inv.rename(nut, "BOLT").unwrap();
        assert_eq!(inv.get(nut).unwrap().name(), "bolt");
        assert_eq!(inv.items().filter(|i| i.name() == "bolt").count(), 3);
    }

    #[test]
    fn setters_update_in_place() {
        let mut inv = sample();
        let nut = inv.find_by_name("nut").unwrap();
        inv.set_description(nut, "hex nut").unwrap();
        inv.set_image_path(nut, "images/nut.jpg").unwrap();
        let item = inv.get(nut).unwrap();
        assert_eq!(item.description(), "hex nut");
        assert_eq!(item.image_path(), "images/nut.jpg");
        assert!(inv.is_dirty());
    }

    #[test]
    fn decrement_at_zero_is_a_reported_noop() {
        let mut inv = sample();
        let nut = inv.find_by_name("nut").unwrap();
        assert_eq!(inv.decrement(nut).unwrap(), AmountChange::AtZero);
        assert_eq!(inv.get(nut).unwrap().amount(), 0);
        assert!(!inv.is_dirty());
    }

    #[test]
    fn increment_and_decrement() {
        let mut inv = sample();
        let bolt = inv.find_by_name("bolt").unwrap();
        assert_eq!(inv.increment(bolt).unwrap(), AmountChange::Incremented(11));
        assert_eq!(inv.decrement(bolt).unwrap(), AmountChange::Decremented(10));
        assert!(inv.is_dirty());
    }

    #[test]
    fn delete_by_name_removes_first_match() {
        let mut inv = sample();
        let removed = inv.delete_by_name("Bolt").unwrap();
        assert_eq!(removed.description(), "M6");
        assert_eq!(inv.len(), 2);

        let remaining = inv.find_by_name("bolt").unwrap();
        assert_eq!(inv.get(remaining).unwrap().description(), "M8 duplicate");
    }

    #[test]
    fn delete_by_name_not_found_leaves_state() {
        let mut inv = sample();
        let err = inv.delete_by_name("washer").unwrap_err();
        assert!(matches!(err, InvError::ItemNotFound(ref name) if name == "washer"));
        assert_eq!(inv.len(), 3);
        assert!(!inv.is_dirty());
    }

    #[test]
    fn stale_handle_is_refused() {
        let mut inv = sample();
        let nut = inv.find_by_name("nut").unwrap();
        inv.remove(nut).unwrap();

        assert!(!inv.contains(nut));
        assert!(matches!(inv.get(nut), Err(InvError::StaleItem(_))));
        assert!(matches!(inv.increment(nut), Err(InvError::StaleItem(_))));
        assert!(matches!(inv.rename(nut, "x"), Err(InvError::StaleItem(_))));
        assert!(matches!(inv.remove(nut), Err(InvError::StaleItem(_))));
        assert_eq!(inv.len(), 2);
    }

    #[test]
    fn handles_survive_removal_of_other_items() {
        let mut inv = sample();
        let ids: Vec<_> = inv.ids().collect();
        inv.remove(ids[0]).unwrap();
        assert_eq!(inv.get(ids[2]).unwrap().description(), "M8 duplicate");
    }

    #[test]
    fn display_items_are_numbered_from_one() {
        let inv = sample();
        let listed = inv.display_items();
        assert_eq!(listed.len(), 3);
        assert_eq!(listed[0].position, 1);
        assert_eq!(listed[2].position, 3);
        assert_eq!(listed[1].item.name(), "nut");
    }

    #[test]
    fn mark_saved_clears_dirty() {
        let mut inv = Inventory::new();
        inv.append(Item::new("a", "", 0, ""));
        inv.mark_saved();
        assert!(!inv.is_dirty());
    }
}
