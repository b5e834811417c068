use crate::config::InvConfig;
use crate::inventory::{DisplayItem, ItemId};
use crate::model::Item;
use std::path::PathBuf;

pub mod amount;
pub mod config;
pub mod create;
pub mod delete;
pub mod export;
pub mod helpers;
pub mod import;
pub mod init;
pub mod list;
pub mod load;
pub mod save;
pub mod update;
pub mod view;

const INVENTORY_FILENAME: &str = "inventory.csv";

/// Directories resolved for the active scope.
#[derive(Debug, Clone)]
pub struct InvPaths {
    /// Holds `inventory.csv` and `settings.cfg`.
    pub data_dir: PathBuf,
    pub export_dir: PathBuf,
}

impl InvPaths {
    pub fn new(data_dir: impl Into<PathBuf>, export_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            export_dir: export_dir.into(),
        }
    }

    pub fn inventory_file(&self) -> PathBuf {
        self.data_dir.join(INVENTORY_FILENAME)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_items: Vec<Item>,
    pub listed_items: Vec<DisplayItem>,
    pub paths: Vec<PathBuf>,
    pub config: Option<InvConfig>,
    /// Handle of the item the command acted on, when it still exists.
    pub selected: Option<ItemId>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_items(mut self, items: Vec<Item>) -> Self {
        self.affected_items = items;
        self
    }

    pub fn with_listed_items(mut self, items: Vec<DisplayItem>) -> Self {
        self.listed_items = items;
        self
    }

    pub fn with_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.paths = paths;
        self
    }

    pub fn with_config(mut self, config: InvConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_selected(mut self, id: ItemId) -> Self {
        self.selected = Some(id);
        self
    }

    pub fn count(&self, level: MessageLevel) -> usize {
        self.messages.iter().filter(|m| m.level == level).count()
    }
}

/// How a command picks the item it acts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemSelector {
    /// First item with this name (case-insensitive).
    Name(String),
    /// A handle held from an earlier call.
    Id(ItemId),
}

impl From<&str> for ItemSelector {
    fn from(name: &str) -> Self {
        ItemSelector::Name(name.to_string())
    }
}

impl From<String> for ItemSelector {
    fn from(name: String) -> Self {
        ItemSelector::Name(name)
    }
}

impl From<ItemId> for ItemSelector {
    fn from(id: ItemId) -> Self {
        ItemSelector::Id(id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub name: String,
    pub description: String,
    pub amount: u32,
    pub image_path: String,
}

impl NewItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            amount: 0,
            image_path: String::new(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn amount(mut self, amount: u32) -> Self {
        self.amount = amount;
        self
    }

    pub fn image_path(mut self, image_path: impl Into<String>) -> Self {
        self.image_path = image_path.into();
        self
    }

    pub fn into_item(self) -> Item {
        Item::new(self.name, self.description, self.amount, self.image_path)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemUpdate {
    Rename(String),
    Description(String),
    ImagePath(String),
}
