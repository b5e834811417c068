use crate::inventory::ItemId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InvError {
    #[error("Item not found: {0}")]
    ItemNotFound(String),

    #[error("Item is no longer in the inventory: {0}")]
    StaleItem(ItemId),

    #[error("Invalid delimiter: {0}")]
    InvalidDelimiter(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, InvError>;
