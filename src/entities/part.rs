//! Part entity type - individual components (in-house or outsourced)

use crate::core::error::ValidationError;
use crate::core::identity::PartId;

/// Name given to a part when the user leaves the name blank
pub const DEFAULT_PART_NAME: &str = "New Part";

/// Supplier recorded for an outsourced part with no company given
pub const DEFAULT_SUPPLIER: &str = "No Supplier Specified";

/// Where a part comes from
#[derive(Debug, Clone, PartialEq)]
pub enum PartSource {
    /// Made on one of our machines
    InHouse { machine_id: u32 },
    /// Purchased from a supplier
    Outsourced { company: String },
}

impl PartSource {
    /// Build an outsourced source, falling back to [`DEFAULT_SUPPLIER`]
    /// when the company name is blank
    pub fn outsourced(company: &str) -> Self {
        let company = if company.trim().is_empty() {
            DEFAULT_SUPPLIER.to_string()
        } else {
            company.to_string()
        };
        PartSource::Outsourced { company }
    }

    pub fn in_house(machine_id: u32) -> Self {
        PartSource::InHouse { machine_id }
    }

    /// Short label for table output and source toggles
    pub fn label(&self) -> &'static str {
        match self {
            PartSource::InHouse { .. } => "In-house",
            PartSource::Outsourced { .. } => "Outsourced",
        }
    }

    /// The machine ID or company name as shown in the source column
    pub fn detail(&self) -> String {
        match self {
            PartSource::InHouse { machine_id } => machine_id.to_string(),
            PartSource::Outsourced { company } => company.clone(),
        }
    }
}

/// An individual part stored in the inventory and/or included in a product
#[derive(Debug, Clone, PartialEq)]
pub struct Part {
    id: PartId,
    name: String,
    price: f64,
    instock: u32,
    min: u32,
    max: u32,
    source: PartSource,
}

impl Part {
    /// Create a new part, claiming the next part ID.
    ///
    /// Bounds are applied in order (max, min, instock) so each check runs
    /// against the values already accepted.
    pub fn new(
        name: &str,
        price: f64,
        instock: u32,
        min: u32,
        max: u32,
        source: PartSource,
    ) -> Result<Self, ValidationError> {
        let mut part = Part {
            id: PartId::next(),
            name: String::new(),
            price: 0.0,
            instock: 0,
            min: 0,
            max: 0,
            source,
        };

        part.set_name(name);
        part.set_price(price)?;
        part.set_max(max)?;
        part.set_min(min)?;
        part.set_instock(instock)?;

        Ok(part)
    }

    pub fn id(&self) -> PartId {
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

    pub fn source(&self) -> &PartSource {
        &self.source
    }

    /// Set the name, substituting [`DEFAULT_PART_NAME`] when blank
    pub fn set_name(&mut self, name: &str) {
        self.name = if name.trim().is_empty() {
            DEFAULT_PART_NAME.to_string()
        } else {
            name.to_string()
        };
    }

    pub fn set_price(&mut self, price: f64) -> Result<(), ValidationError> {
        if price < 0.0 {
            return Err(ValidationError::NegativePrice);
        }
        self.price = price;
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

    pub fn set_source(&mut self, source: PartSource) {
        self.source = source;
    }

    /// Take over another part's ID. Used by the update-in-place convention
    /// so a replacement part keeps the number of the part it replaces.
    pub(crate) fn assign_id(&mut self, id: PartId) {
        self.id = id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_house(price: f64, instock: u32, min: u32, max: u32) -> Result<Part, ValidationError> {
        Part::new("Widget", price, instock, min, max, PartSource::in_house(546))
    }

    #[test]
    fn test_part_creation() {
        let part = in_house(1.50, 75, 10, 100).unwrap();
        assert_eq!(part.name(), "Widget");
        assert_eq!(part.price(), 1.50);
        assert_eq!(part.instock(), 75);
        assert_eq!(part.min(), 10);
        assert_eq!(part.max(), 100);
        assert_eq!(part.source().detail(), "546");
    }

    #[test]
    fn test_blank_name_gets_placeholder() {
        let part = Part::new("  ", 1.0, 0, 0, 0, PartSource::in_house(1)).unwrap();
        assert_eq!(part.name(), DEFAULT_PART_NAME);
    }

    #[test]
    fn test_blank_company_gets_placeholder() {
        let source = PartSource::outsourced("");
        assert_eq!(source.detail(), DEFAULT_SUPPLIER);
    }

    #[test]
    fn test_negative_price_rejected() {
        assert_eq!(in_house(-0.01, 0, 0, 0), Err(ValidationError::NegativePrice));
    }

    #[test]
    fn test_instock_above_max_rejected() {
        assert_eq!(in_house(1.0, 101, 10, 100), Err(ValidationError::StockAboveMax));
    }

    #[test]
    fn test_instock_below_min_rejected() {
        assert_eq!(in_house(1.0, 5, 10, 100), Err(ValidationError::StockBelowMin));
    }

    #[test]
    fn test_min_above_max_rejected() {
        assert_eq!(in_house(1.0, 50, 60, 40), Err(ValidationError::MinAboveMax));
    }

    #[test]
    fn test_setters_check_against_current_bounds() {
        let mut part = in_house(1.0, 50, 45, 100).unwrap();
        assert_eq!(part.set_instock(101), Err(ValidationError::StockAboveMax));
        assert_eq!(part.set_max(40), Err(ValidationError::MaxBelowMin));
        part.set_max(60).unwrap();
        part.set_min(20).unwrap();
        part.set_instock(60).unwrap();
        assert_eq!(part.instock(), 60);
    }

    #[test]
    fn test_max_rejection_names_the_maximum() {
        let mut part = in_house(1.0, 50, 45, 100).unwrap();
        let err = part.set_max(40).unwrap_err();
        assert_eq!(err, ValidationError::MaxBelowMin);
        assert!(err.to_string().starts_with("maximum"));
        assert!(ValidationError::MinAboveMax.to_string().starts_with("minimum"));
    }

    #[test]
    fn test_each_part_gets_unique_id() {
        let a = in_house(1.0, 0, 0, 0).unwrap();
        let b = in_house(1.0, 0, 0, 0).unwrap();
        assert_ne!(a.id(), b.id());
    }
}
