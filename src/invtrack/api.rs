//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for every inventory operation, whichever UI drives it (one-shot
//! subcommands or the interactive session).
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns the session**: the [`Inventory`], the storage backend, the resolved
//!   paths and the live [`InvConfig`]
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (names and handles become [`ItemSelector`]s)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: that belongs in `commands/*.rs`
//! - **Presentation**: no stdout or stderr, no formatting
//!
//! ## Generic Over DataStore
//!
//! `InvApi<S: DataStore>` is generic over the storage backend:
//! - Production: `InvApi<FileStore>`
//! - Testing: `InvApi<InMemoryStore>`
//!
//! The configuration is passed in once at construction. Exports read the
//! delimiter from it; `config` updates it in place so a changed delimiter
//! applies to the rest of the session.

use crate::codec::Delimiter;
use crate::commands;
use crate::config::InvConfig;
use crate::error::Result;
use crate::inventory::{Inventory, ItemId};
use crate::store::DataStore;
use std::path::Path;

pub struct InvApi<S: DataStore> {
    store: S,
    paths: commands::InvPaths,
    config: InvConfig,
    inventory: Inventory,
}

impl<S: DataStore> InvApi<S> {
    pub fn new(store: S, paths: commands::InvPaths, config: InvConfig) -> Self {
        Self {
            store,
            paths,
            config,
            inventory: Inventory::new(),
        }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn settings(&self) -> &InvConfig {
        &self.config
    }

    pub fn paths(&self) -> &commands::InvPaths {
        &self.paths
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn is_dirty(&self) -> bool {
        self.inventory.is_dirty()
    }

    pub fn find_item(&self, name: &str) -> Option<ItemId> {
        self.inventory.find_by_name(name)
    }

    pub fn load(&mut self) -> Result<CmdResult> {
        let path = self.paths.inventory_file();
        commands::load::run(&self.store, &mut self.inventory, &path)
    }

    pub fn save(&mut self) -> Result<CmdResult> {
        let path = self.paths.inventory_file();
        commands::save::run(&mut self.store, &mut self.inventory, &path)
    }

    pub fn add_item(&mut self, item: NewItem) -> Result<CmdResult> {
        commands::create::run(&mut self.inventory, item)
    }

    pub fn list_items(&self, search: Option<&str>) -> Result<CmdResult> {
        commands::list::run(&self.inventory, search)
    }

    pub fn view_item(&self, selector: impl Into<ItemSelector>) -> Result<CmdResult> {
        commands::view::run(&self.inventory, &selector.into())
    }

    pub fn update_item(
        &mut self,
        selector: impl Into<ItemSelector>,
        update: ItemUpdate,
    ) -> Result<CmdResult> {
        commands::update::run(&mut self.inventory, &selector.into(), update)
    }

    pub fn increment(&mut self, selector: impl Into<ItemSelector>) -> Result<CmdResult> {
        commands::amount::increment(&mut self.inventory, &selector.into())
    }

    pub fn decrement(&mut self, selector: impl Into<ItemSelector>) -> Result<CmdResult> {
        commands::amount::decrement(&mut self.inventory, &selector.into())
    }

    pub fn delete_item(&mut self, selector: impl Into<ItemSelector>) -> Result<CmdResult> {
        commands::delete::run(&mut self.inventory, &selector.into())
    }

    pub fn export(&mut self, name: Option<&str>) -> Result<CmdResult> {
        commands::export::run(
            &mut self.store,
            &self.inventory,
            &self.paths.export_dir,
            name,
            self.config.delimiter,
        )
    }

    /// Imports with `delimiter`, or the configured one when `None`.
    pub fn import(&mut self, path: &Path, delimiter: Option<Delimiter>) -> Result<CmdResult> {
        let delimiter = delimiter.unwrap_or(self.config.delimiter);
        commands::import::run(&self.store, &mut self.inventory, path, delimiter)
    }

    pub fn init(&mut self) -> Result<CmdResult> {
        commands::init::run(&mut self.inventory)
    }

    pub fn config(&mut self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&mut self.config, &self.paths.data_dir, action)
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{
    CmdMessage, CmdResult, InvPaths, ItemSelector, ItemUpdate, MessageLevel, NewItem,
};
