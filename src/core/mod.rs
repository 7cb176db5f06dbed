//! Core module - fundamental types and utilities

pub mod config;
pub mod error;
pub mod identity;
pub mod inventory;
pub mod price;

pub use config::Config;
pub use error::{InventoryError, ValidationError};
pub use identity::{PartId, ProductId};
pub use inventory::Inventory;
