//! Error types for repository operations and field validation

use miette::Diagnostic;
use thiserror::Error;

use crate::core::identity::{PartId, ProductId};

/// Errors raised by [`crate::core::Inventory`] operations
#[derive(Debug, Error, Diagnostic)]
pub enum InventoryError {
    #[error("no part with ID {0} exists in the inventory")]
    PartNotFound(PartId),

    #[error("no product with ID {0} exists in the inventory")]
    ProductNotFound(ProductId),

    #[error("product {id} still contains {count} part(s)")]
    #[diagnostic(help("remove the contained parts first, or force the removal"))]
    ProductNotEmpty { id: ProductId, count: usize },
}

/// Validation failures surfaced to the user when saving a form.
///
/// Save handlers check in a fixed order: required fields, then numeric
/// parses, then the domain invariants enforced by the entity setters. The
/// first failure aborts the save.
#[derive(Debug, Error, Diagnostic, PartialEq)]
pub enum ValidationError {
    #[error("all fields must have a value ({0} is missing)")]
    MissingField(&'static str),

    #[error("'{value}' is not a valid number for {field}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("'{0}' is not a valid price")]
    InvalidPrice(String),

    #[error("price cannot be negative")]
    NegativePrice,

    #[error("amount of stock needs to be greater than or equal to the minimum")]
    StockBelowMin,

    #[error("amount of stock needs to be less than or equal to the maximum")]
    StockAboveMax,

    #[error("minimum amount of stock needs to be less than or equal to the maximum")]
    MinAboveMax,

    #[error("maximum amount of stock needs to be greater than or equal to the minimum")]
    MaxBelowMin,

    #[error("price cannot be less than the total price of the contained parts")]
    PriceBelowPartsCost,

    #[error("a product must contain at least one part")]
    NoParts,
}
