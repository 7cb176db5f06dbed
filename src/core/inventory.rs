//! The in-memory repository holding all parts and products
//!
//! A flat list-based store with linear search. Everything lives for the
//! duration of one session; nothing is persisted.

use crate::core::error::InventoryError;
use crate::core::identity::{PartId, ProductId};
use crate::core::price::format_price;
use crate::entities::part::Part;
use crate::entities::product::Product;

#[derive(Debug, Default)]
pub struct Inventory {
    parts: Vec<Part>,
    products: Vec<Product>,
}

impl Inventory {
    /// Create a new empty inventory
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------ part methods ------------------------

    /// All parts currently in the inventory
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Add a part to the inventory
    pub fn add_part(&mut self, part: Part) {
        self.parts.push(part);
    }

    /// Remove a part from the inventory.
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

    pub fn part_by_id(&self, id: PartId) -> Option<&Part> {
        self.parts.iter().find(|p| p.id() == id)
    }

    /// Find a part by complete name match (case-insensitive, first hit)
    pub fn lookup_part(&self, name: &str) -> Option<&Part> {
        self.parts
            .iter()
            .find(|p| p.name().eq_ignore_ascii_case(name))
    }

    /// Replace a part with an edited version, keeping the old ID.
    ///
    /// The replacement is built from scratch by the form; only the numeric
    /// ID carries over from the part being replaced.
    pub fn update_part(&mut self, old: PartId, mut replacement: Part) -> Result<(), InventoryError> {
        if self.part_by_id(old).is_none() {
            return Err(InventoryError::PartNotFound(old));
        }
        replacement.assign_id(old);
        self.remove_part(old);
        self.add_part(replacement);
        Ok(())
    }

    /// Search all parts for a substring (case-insensitive).
    ///
    /// Matches against the part name, the formatted price, the company name
    /// of outsourced parts, and the machine ID digits of in-house parts.
    pub fn search_parts(&self, query: &str) -> Vec<&Part> {
        let needle = query.to_lowercase();
        self.parts
            .iter()
            .filter(|p| {
                p.name().to_lowercase().contains(&needle)
                    || format_price(p.price()).contains(&needle)
                    || p.source().detail().to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// True when some part is the source of this name (used for the
    /// duplicate-name confirmation when adding)
    pub fn part_name_taken(&self, name: &str) -> bool {
        self.lookup_part(name).is_some()
    }

    // ------------------------ product methods ------------------------

    /// All products currently in the inventory
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Add a product to the inventory
    pub fn add_product(&mut self, product: Product) {
        self.products.push(product);
    }

    pub fn product_by_id(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == id)
    }

    /// Find a product by complete name match (case-insensitive, first hit)
    pub fn lookup_product(&self, name: &str) -> Option<&Product> {
        self.products
            .iter()
            .find(|p| p.name().eq_ignore_ascii_case(name))
    }

    /// Remove a product, refusing while it still contains parts.
    ///
    /// Returns whether anything was removed. A product that still contains
    /// parts is only removable through [`Inventory::force_remove_product`],
    /// which the UI reaches after a secondary confirmation.
    pub fn remove_product(&mut self, id: ProductId) -> Result<bool, InventoryError> {
        match self.product_by_id(id) {
            None => Ok(false),
            Some(product) if !product.parts().is_empty() => Err(InventoryError::ProductNotEmpty {
                id,
                count: product.parts().len(),
            }),
            Some(_) => Ok(self.force_remove_product(id)),
        }
    }

    /// Remove a product even if it still contains parts
    pub fn force_remove_product(&mut self, id: ProductId) -> bool {
        match self.products.iter().position(|p| p.id() == id) {
            Some(index) => {
                self.products.remove(index);
                true
            }
            None => false,
        }
    }

    /// Replace a product with an edited version, keeping the old ID.
    /// Works even when the old product still contains parts.
    pub fn update_product(
        &mut self,
        old: ProductId,
        mut replacement: Product,
    ) -> Result<(), InventoryError> {
        if self.product_by_id(old).is_none() {
            return Err(InventoryError::ProductNotFound(old));
        }
        replacement.assign_id(old);
        self.force_remove_product(old);
        self.add_product(replacement);
        Ok(())
    }

    /// Search all products for a substring (case-insensitive).
    ///
    /// Matches against the product name, the formatted price, and the names
    /// of the contained parts.
    pub fn search_products(&self, query: &str) -> Vec<&Product> {
        let needle = query.to_lowercase();
        self.products
            .iter()
            .filter(|p| {
                p.name().to_lowercase().contains(&needle)
                    || format_price(p.price()).contains(&needle)
                    || p.parts()
                        .iter()
                        .any(|part| part.name().to_lowercase().contains(&needle))
            })
            .collect()
    }

    pub fn product_name_taken(&self, name: &str) -> bool {
        self.lookup_product(name).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::part::PartSource;

    fn in_house(name: &str, price: f64, machine_id: u32) -> Part {
        Part::new(name, price, 0, 0, 10, PartSource::in_house(machine_id)).unwrap()
    }

    fn outsourced(name: &str, price: f64, company: &str) -> Part {
        Part::new(name, price, 0, 0, 10, PartSource::outsourced(company)).unwrap()
    }

    #[test]
    fn test_add_and_remove_part() {
        let mut inv = Inventory::new();
        let part = in_house("Bracket", 1.5, 546);
        let id = part.id();
        inv.add_part(part);
        assert_eq!(inv.parts().len(), 1);
        assert!(inv.remove_part(id));
        assert!(!inv.remove_part(id));
        assert!(inv.parts().is_empty());
    }

    #[test]
    fn test_lookup_part_is_exact_and_case_insensitive() {
        let mut inv = Inventory::new();
        inv.add_part(in_house("Hex Bolt", 1.0, 1));
        assert!(inv.lookup_part("hex bolt").is_some());
        assert!(inv.lookup_part("HEX BOLT").is_some());
        // substring is not enough for lookup
        assert!(inv.lookup_part("hex").is_none());
    }

    #[test]
    fn test_update_part_keeps_id() {
        let mut inv = Inventory::new();
        let old = in_house("Bracket", 1.5, 546);
        let old_id = old.id();
        inv.add_part(old);

        let replacement = outsourced("Bracket v2", 2.5, "ACME");
        inv.update_part(old_id, replacement).unwrap();

        assert_eq!(inv.parts().len(), 1);
        let updated = inv.part_by_id(old_id).unwrap();
        assert_eq!(updated.name(), "Bracket v2");
        assert_eq!(updated.source().detail(), "ACME");
    }

    #[test]
    fn test_update_unknown_part_fails() {
        let mut inv = Inventory::new();
        let orphan = in_house("Orphan", 1.0, 1);
        let missing_id = orphan.id();
        let err = inv.update_part(missing_id, orphan).unwrap_err();
        assert!(matches!(err, InventoryError::PartNotFound(_)));
    }

    #[test]
    fn test_search_parts_covers_all_fields() {
        let mut inv = Inventory::new();
        inv.add_part(in_house("Bracket", 1.5, 546));
        inv.add_part(outsourced("Spring", 25.64, "ACME"));
        inv.add_part(outsourced("Washer", 0.02, "Brand X"));

        // name, case-insensitive substring
        assert_eq!(inv.search_parts("brack").len(), 1);
        // machine ID digits
        assert_eq!(inv.search_parts("546").len(), 1);
        // supplier name
        assert_eq!(inv.search_parts("acme").len(), 1);
        // formatted price substring
        assert_eq!(inv.search_parts("25.64").len(), 1);
        assert_eq!(inv.search_parts("$0.02").len(), 1);
        // no match
        assert!(inv.search_parts("titanium").is_empty());
        // everything matches the empty query
        assert_eq!(inv.search_parts("").len(), 3);
    }

    #[test]
    fn test_remove_product_refuses_while_parts_remain() {
        let mut inv = Inventory::new();
        let bolt = in_house("Bolt", 2.0, 1);
        let product = Product::new("Gadget", 10.0, 0, 0, 0, vec![bolt]).unwrap();
        let id = product.id();
        inv.add_product(product);

        let err = inv.remove_product(id).unwrap_err();
        assert!(matches!(err, InventoryError::ProductNotEmpty { count: 1, .. }));
        assert_eq!(inv.products().len(), 1);

        // the override path removes it anyway
        assert!(inv.force_remove_product(id));
        assert!(inv.products().is_empty());
    }

    #[test]
    fn test_remove_empty_product() {
        let mut inv = Inventory::new();
        let product = Product::new("Shell", 10.0, 0, 0, 0, vec![]).unwrap();
        let id = product.id();
        inv.add_product(product);
        assert!(inv.remove_product(id).unwrap());
        assert!(!inv.remove_product(id).unwrap());
    }

    #[test]
    fn test_update_product_keeps_id_even_with_parts() {
        let mut inv = Inventory::new();
        let bolt = in_house("Bolt", 2.0, 1);
        let old = Product::new("Gadget", 10.0, 0, 0, 0, vec![bolt.clone()]).unwrap();
        let old_id = old.id();
        inv.add_product(old);

        let replacement = Product::new("Gadget Mk2", 15.0, 0, 0, 0, vec![bolt]).unwrap();
        inv.update_product(old_id, replacement).unwrap();

        assert_eq!(inv.products().len(), 1);
        assert_eq!(inv.product_by_id(old_id).unwrap().name(), "Gadget Mk2");
    }

    #[test]
    fn test_search_products_matches_contained_part_names() {
        let mut inv = Inventory::new();
        let bolt = in_house("Hex Bolt", 2.0, 1);
        let spring = outsourced("Spring", 3.0, "ACME");
        inv.add_product(Product::new("Gadget", 10.0, 0, 0, 0, vec![bolt]).unwrap());
        inv.add_product(Product::new("Widget", 250.0, 0, 0, 0, vec![spring]).unwrap());

        // by contained part name
        assert_eq!(inv.search_products("hex").len(), 1);
        // by product name
        assert_eq!(inv.search_products("widget").len(), 1);
        // by formatted price (thousands grouping not triggered here)
        assert_eq!(inv.search_products("$250.00").len(), 1);
        assert!(inv.search_products("sprocket").is_empty());
    }

    #[test]
    fn test_ids_are_not_reused_after_delete() {
        let mut inv = Inventory::new();
        let first = in_house("First", 1.0, 1);
        let first_id = first.id();
        inv.add_part(first);
        inv.remove_part(first_id);

        let second = in_house("Second", 1.0, 1);
        assert!(second.id() > first_id);
    }
}
