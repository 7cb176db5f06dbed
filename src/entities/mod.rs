//! Entity type definitions
//!
//! The catalog holds two entity types:
//!
//! - [`Part`] - An individual component, either made in-house or purchased
//!   from a supplier
//! - [`Product`] - A finished assembly containing copies of one or more parts

pub mod part;
pub mod product;

pub use part::{Part, PartSource};
pub use product::Product;
