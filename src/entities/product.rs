//! Product entity type - finished assemblies containing parts

use crate::core::error::ValidationError;
use crate::core::identity::{PartId, ProductId};
use crate::core::price;
use crate::entities::part::Part;

/// Name given to a product when the user leaves the name blank
pub const DEFAULT_PRODUCT_NAME: &str = "New Product";

/// A finished product assembled from copies of parts.
///
/// The part list holds owned copies, and the same part may appear more than
/// once. The price invariant is that a product never costs less than the sum
/// of the parts it contains.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: ProductId,
    name: String,
    price: f64,
    instock: u32,
    min: u32,
    max: u32,
    parts: Vec<Part>,
}

impl Product {
    /// Create a new product, claiming the next product ID.
    ///
    /// The part list is installed before the price check so the parts-cost
    /// invariant is enforced from the start.
    pub fn new(
        name: &str,
        price: f64,
        instock: u32,
        min: u32,
        max: u32,
        parts: Vec<Part>,
    ) -> Result<Self, ValidationError> {
        let mut product = Product {
            id: ProductId::next(),
            name: String::new(),
            price: 0.0,
            instock: 0,
            min: 0,
            max: 0,
            parts,
        };

        product.set_name(name);
        product.set_price(price)?;
        product.set_max(max)?;
        product.set_min(min)?;
        product.set_instock(instock)?;

        Ok(product)
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn instock(&self) -> u32 {
        self.instock
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    /// The parts contained in this product
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Total price of all contained parts
    pub fn parts_cost(&self) -> f64 {
        self.parts.iter().map(Part::price).sum()
    }

    /// Set the name, substituting [`DEFAULT_PRODUCT_NAME`] when blank
    pub fn set_name(&mut self, name: &str) {
        self.name = if name.trim().is_empty() {
            DEFAULT_PRODUCT_NAME.to_string()
        } else {
            name.to_string()
        };
    }

    /// Set the price. Rejects negative amounts and amounts below the total
    /// cost of the contained parts (compared in whole cents).
    pub fn set_price(&mut self, new_price: f64) -> Result<(), ValidationError> {
        if new_price < 0.0 {
            return Err(ValidationError::NegativePrice);
        }
        if price::cents(new_price) < price::cents(self.parts_cost()) {
            return Err(ValidationError::PriceBelowPartsCost);
        }
        self.price = new_price;
        Ok(())
    }

    pub fn set_instock(&mut self, instock: u32) -> Result<(), ValidationError> {
        if instock < self.min {
            return Err(ValidationError::StockBelowMin);
        }
        if instock > self.max {
            return Err(ValidationError::StockAboveMax);
        }
        self.instock = instock;
        Ok(())
    }

    pub fn set_min(&mut self, min: u32) -> Result<(), ValidationError> {
        if min > self.max {
            return Err(ValidationError::MinAboveMax);
        }
        self.min = min;
        Ok(())
    }

    pub fn set_max(&mut self, max: u32) -> Result<(), ValidationError> {
        if max < self.min {
            return Err(ValidationError::MaxBelowMin);
        }
        self.max = max;
        Ok(())
    }

    /// Add a copy of a part to this product. Duplicates are allowed.
    pub fn add_part(&mut self, part: Part) {
        self.parts.push(part);
    }

    /// Find a contained part by ID (first match)
    pub fn lookup_part(&self, id: PartId) -> Option<&Part> {
        self.parts.iter().find(|p| p.id() == id)
    }

    /// Remove the first contained part with the given ID.
    /// Returns whether anything was removed.
    pub fn remove_part(&mut self, id: PartId) -> bool {
        match self.parts.iter().position(|p| p.id() == id) {
            Some(index) => {
                self.parts.remove(index);
                true
            }
            None => false,
        }
    }

    /// Take over another product's ID. Used by the update-in-place
    /// convention so a replacement keeps the number of the product it
    /// replaces.
    pub(crate) fn assign_id(&mut self, id: ProductId) {
        self.id = id;
    }
}
