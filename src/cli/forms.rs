//! Add/modify forms for parts and products
//!
//! A form collects raw field strings into a draft, then validates the draft
//! in a fixed order: required fields, then numeric parses, then the domain
//! invariants enforced by the entity constructors. The first failure aborts
//! the save with a warning, and the user is offered the form again with the
//! values they already entered.
//!
//! Drafts are plain data so the validation pipeline can be tested without a
//! terminal; only the `prompt_*` functions touch dialoguer.

use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm, FuzzySelect, Input, Select};
use miette::{IntoDiagnostic, Result};

use crate::cli::helpers::warn;
use crate::cli::table::{render_contained_parts, TableConfig};
use crate::core::error::ValidationError;
use crate::core::inventory::Inventory;
use crate::core::price::{self, format_price, parse_price, PriceParseError};
use crate::entities::part::{Part, PartSource};
use crate::entities::product::Product;

/// Raw field values for the part form
#[derive(Debug, Clone, Default)]
pub struct PartDraft {
    pub name: String,
    pub price: String,
    pub instock: String,
    pub min: String,
    pub max: String,
    /// Source toggle: in-house (machine ID) vs. outsourced (company name)
    pub in_house: bool,
    /// Machine ID or company name, depending on the toggle
    pub source: String,
}

impl PartDraft {
    /// An empty draft for the add form
    pub fn empty() -> Self {
        Self::default()
    }

    /// Prefill a draft from an existing part for the modify form
    pub fn from_part(part: &Part) -> Self {
        Self {
            name: part.name().to_string(),
            price: format_price(part.price()),
            instock: part.instock().to_string(),
            min: part.min().to_string(),
            max: part.max().to_string(),
            in_house: matches!(part.source(), PartSource::InHouse { .. }),
            source: part.source().detail(),
        }
    }

    /// Validate the draft and build a part from it
    pub fn validate(&self) -> Result<Part, ValidationError> {
        require("name", &self.name)?;
        require("price", &self.price)?;
        require("in stock", &self.instock)?;
        require("min", &self.min)?;
        require("max", &self.max)?;
        let source_field = if self.in_house { "machine ID" } else { "company name" };
        require(source_field, &self.source)?;

        let price = parse_draft_price(&self.price)?;
        let instock = parse_count("in stock", &self.instock)?;
        let min = parse_count("min", &self.min)?;
        let max = parse_count("max", &self.max)?;

        let source = if self.in_house {
            PartSource::in_house(parse_count("machine ID", &self.source)?)
        } else {
            PartSource::outsourced(&self.source)
        };

        Part::new(&self.name, price, instock, min, max, source)
    }
}

/// Raw field values for the product form, plus the contained-parts list
#[derive(Debug, Clone, Default)]
pub struct ProductDraft {
    pub name: String,
    pub price: String,
    pub instock: String,
    pub min: String,
    pub max: String,
    pub parts: Vec<Part>,
}

impl ProductDraft {
    /// An empty draft for the add form
    pub fn empty() -> Self {
        Self::default()
    }

    /// Prefill a draft from an existing product for the modify form
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name().to_string(),
            price: format_price(product.price()),
            instock: product.instock().to_string(),
            min: product.min().to_string(),
            max: product.max().to_string(),
            parts: product.parts().to_vec(),
        }
    }

    /// Total price of the parts currently in the draft
    pub fn parts_cost(&self) -> f64 {
        self.parts.iter().map(Part::price).sum()
    }

    /// The price field as a number; unparseable input counts as zero until
    /// validation reports it properly
    pub fn current_price(&self) -> f64 {
        parse_price(&self.price).unwrap_or(0.0)
    }

    /// After a part is added: when the parts cost has climbed above the
    /// draft price, bump the price by the added part's price
    pub fn absorb_part_price(&mut self, added: &Part) {
        let current = self.current_price();
        if price::cents(self.parts_cost()) > price::cents(current) {
            self.price = format_price(current + added.price());
        }
    }

    /// After a part is removed: lower the price by the removed part's
    /// price, unless that would take it below zero
    pub fn relax_part_price(&mut self, removed: &Part) {
        let current = self.current_price();
        if current - removed.price() >= 0.0 {
            self.price = format_price(current - removed.price());
        }
    }

    /// Validate the draft and build a product from it
    pub fn validate(&self) -> Result<Product, ValidationError> {
        require("name", &self.name)?;
        require("price", &self.price)?;
        require("in stock", &self.instock)?;
        require("min", &self.min)?;
        require("max", &self.max)?;

        if self.parts.is_empty() {
            return Err(ValidationError::NoParts);
        }

        let price = parse_draft_price(&self.price)?;
        let instock = parse_count("in stock", &self.instock)?;
        let min = parse_count("min", &self.min)?;
        let max = parse_count("max", &self.max)?;

        Product::new(&self.name, price, instock, min, max, self.parts.clone())
    }
}

fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(())
    }
}

fn parse_count(field: &'static str, value: &str) -> Result<u32, ValidationError> {
    value.trim().parse().map_err(|_| ValidationError::InvalidNumber {
        field,
        value: value.trim().to_string(),
    })
}

fn parse_draft_price(value: &str) -> Result<f64, ValidationError> {
    parse_price(value).map_err(|err| match err {
        PriceParseError::Empty => ValidationError::MissingField("price"),
        PriceParseError::Invalid(text) => ValidationError::InvalidPrice(text),
    })
}

/// Selection label for part pickers: ID, name, price
pub fn part_pick_label(part: &Part) -> String {
    format!("{}  {}  {}", part.id(), part.name(), format_price(part.price()))
}

/// Run the add/modify part form until the draft validates or the user
/// gives up. Returns `None` when the form is abandoned unsaved.
pub fn prompt_part_form(
    theme: &ColorfulTheme,
    mut draft: PartDraft,
    title: &str,
    supplier_placeholder: &str,
) -> Result<Option<Part>> {
    loop {
        println!();
        println!("{}", style(title).bold());

        let source_choice = Select::with_theme(theme)
            .with_prompt("Source")
            .items(&["In-house", "Outsourced"])
            .default(if draft.in_house { 0 } else { 1 })
            .interact()
            .into_diagnostic()?;
        let was_in_house = draft.in_house;
        draft.in_house = source_choice == 0;
        if draft.in_house != was_in_house {
            // a machine ID makes no sense as a company name and vice versa
            draft.source.clear();
        }

        draft.name = text_input(theme, "Name", &draft.name)?;
        draft.price = text_input(theme, "Price", &draft.price)?;
        draft.instock = text_input(theme, "In stock", &draft.instock)?;
        draft.min = text_input(theme, "Min", &draft.min)?;
        draft.max = text_input(theme, "Max", &draft.max)?;

        if draft.in_house {
            draft.source = text_input(theme, "Machine ID", &draft.source)?;
        } else {
            let initial = if draft.source.is_empty() {
                supplier_placeholder.to_string()
            } else {
                draft.source.clone()
            };
            draft.source = text_input(theme, "Company name", &initial)?;
        }

        match draft.validate() {
            Ok(part) => return Ok(Some(part)),
            Err(err) => {
                warn(&format!("Part not saved: {}", err));
                if !try_again(theme)? {
                    return Ok(None);
                }
            }
        }
    }
}

/// Run the add/modify product form until the draft validates or the user
/// gives up. Returns `None` when the form is abandoned unsaved.
pub fn prompt_product_form(
    theme: &ColorfulTheme,
    mut draft: ProductDraft,
    title: &str,
    inventory: &Inventory,
    table_config: &TableConfig,
) -> Result<Option<Product>> {
    loop {
        println!();
        println!("{}", style(title).bold());

        draft.name = text_input(theme, "Name", &draft.name)?;
        draft.price = text_input(theme, "Price", &draft.price)?;
        draft.instock = text_input(theme, "In stock", &draft.instock)?;
        draft.min = text_input(theme, "Min", &draft.min)?;
        draft.max = text_input(theme, "Max", &draft.max)?;

        edit_part_list(theme, &mut draft, inventory, table_config)?;

        match draft.validate() {
            Ok(product) => return Ok(Some(product)),
            Err(err) => {
                warn(&format!("Product not saved: {}", err));
                if !try_again(theme)? {
                    return Ok(None);
                }
            }
        }
    }
}

/// The part-picker sub-loop of the product form
fn edit_part_list(
    theme: &ColorfulTheme,
    draft: &mut ProductDraft,
    inventory: &Inventory,
    table_config: &TableConfig,
) -> Result<()> {
    loop {
        println!();
        print!("{}", render_contained_parts(&draft.parts, table_config));

        let choice = Select::with_theme(theme)
            .with_prompt("Contained parts")
            .items(&["Add a part", "Remove a part", "Done"])
            .default(2)
            .interact()
            .into_diagnostic()?;

        match choice {
            0 => {
                if inventory.parts().is_empty() {
                    warn("There are no parts in the inventory to add.");
                    continue;
                }
                let items: Vec<String> = inventory.parts().iter().map(part_pick_label).collect();
                let picked = FuzzySelect::with_theme(theme)
                    .with_prompt("Add which part? (type to search)")
                    .items(&items)
                    .interact()
                    .into_diagnostic()?;
                let part = inventory.parts()[picked].clone();
                draft.parts.push(part.clone());
                draft.absorb_part_price(&part);
            }
            1 => {
                if draft.parts.is_empty() {
                    warn("This product does not contain any parts.");
                    continue;
                }
                let items: Vec<String> = draft.parts.iter().map(part_pick_label).collect();
                let picked = Select::with_theme(theme)
                    .with_prompt("Remove which part?")
                    .items(&items)
                    .default(0)
                    .interact()
                    .into_diagnostic()?;
                let removed = draft.parts.remove(picked);
                draft.relax_part_price(&removed);
            }
            _ => return Ok(()),
        }
    }
}

fn text_input(theme: &ColorfulTheme, prompt: &str, initial: &str) -> Result<String> {
    let mut input = Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .allow_empty(true);
    if !initial.is_empty() {
        input = input.with_initial_text(initial.to_string());
    }
    input.interact_text().into_diagnostic()
}

fn try_again(theme: &ColorfulTheme) -> Result<bool> {
    Confirm::with_theme(theme)
        .with_prompt("Try again?")
        .default(true)
        .interact()
        .into_diagnostic()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_part_draft() -> PartDraft {
        PartDraft {
            name: "Bracket".to_string(),
            price: "$1.50".to_string(),
            instock: "75".to_string(),
            min: "10".to_string(),
            max: "100".to_string(),
            in_house: true,
            source: "546".to_string(),
        }
    }

    #[test]
    fn test_part_draft_builds_part() {
        let part = filled_part_draft().validate().unwrap();
        assert_eq!(part.name(), "Bracket");
        assert_eq!(part.price(), 1.50);
        assert_eq!(part.source().detail(), "546");
    }

    #[test]
    fn test_missing_field_reported_before_bad_number() {
        let mut draft = filled_part_draft();
        draft.instock = String::new();
        draft.min = "not a number".to_string();
        assert_eq!(draft.validate(), Err(ValidationError::MissingField("in stock")));
    }

    #[test]
    fn test_bad_number_reported_before_domain_invariant() {
        let mut draft = filled_part_draft();
        draft.min = "200".to_string(); // would violate min <= max
        draft.max = "ten".to_string();
        assert_eq!(
            draft.validate(),
            Err(ValidationError::InvalidNumber {
                field: "max",
                value: "ten".to_string()
            })
        );
    }

    #[test]
    fn test_domain_invariant_checked_last() {
        let mut draft = filled_part_draft();
        draft.instock = "500".to_string();
        assert_eq!(draft.validate(), Err(ValidationError::StockAboveMax));
    }

    #[test]
    fn test_bad_price_reported() {
        let mut draft = filled_part_draft();
        draft.price = "$1.5x".to_string();
        assert!(matches!(draft.validate(), Err(ValidationError::InvalidPrice(_))));
    }

    #[test]
    fn test_machine_id_must_be_numeric() {
        let mut draft = filled_part_draft();
        draft.source = "Lathe".to_string();
        assert_eq!(
            draft.validate(),
            Err(ValidationError::InvalidNumber {
                field: "machine ID",
                value: "Lathe".to_string()
            })
        );
    }

    #[test]
    fn test_company_name_is_free_text() {
        let mut draft = filled_part_draft();
        draft.in_house = false;
        draft.source = "Brand X".to_string();
        let part = draft.validate().unwrap();
        assert_eq!(part.source().detail(), "Brand X");
    }

    #[test]
    fn test_part_draft_roundtrip_prefill() {
        let part = filled_part_draft().validate().unwrap();
        let draft = PartDraft::from_part(&part);
        assert_eq!(draft.price, "$1.50");
        let again = draft.validate().unwrap();
        assert_eq!(again.price(), part.price());
        assert_eq!(again.instock(), part.instock());
    }

    fn bolt(price: f64) -> Part {
        Part::new("Bolt", price, 0, 0, 10, PartSource::in_house(1)).unwrap()
    }

    fn filled_product_draft() -> ProductDraft {
        ProductDraft {
            name: "Gadget".to_string(),
            price: "$20.00".to_string(),
            instock: "5".to_string(),
            min: "0".to_string(),
            max: "10".to_string(),
            parts: vec![bolt(2.0)],
        }
    }

    #[test]
    fn test_product_draft_builds_product() {
        let product = filled_product_draft().validate().unwrap();
        assert_eq!(product.name(), "Gadget");
        assert_eq!(product.parts().len(), 1);
    }

    #[test]
    fn test_product_requires_a_part() {
        let mut draft = filled_product_draft();
        draft.parts.clear();
        assert_eq!(draft.validate(), Err(ValidationError::NoParts));
    }

    #[test]
    fn test_empty_part_list_reported_before_bad_number() {
        let mut draft = filled_product_draft();
        draft.parts.clear();
        draft.max = "ten".to_string();
        assert_eq!(draft.validate(), Err(ValidationError::NoParts));
    }

    #[test]
    fn test_price_below_parts_cost_rejected() {
        let mut draft = filled_product_draft();
        draft.parts.push(bolt(30.0));
        assert_eq!(draft.validate(), Err(ValidationError::PriceBelowPartsCost));
    }

    #[test]
    fn test_absorb_part_price_bumps_when_needed() {
        let mut draft = filled_product_draft(); // price $20, parts cost $2
        let pricey = bolt(25.0);
        draft.parts.push(pricey.clone());
        draft.absorb_part_price(&pricey); // cost $27 > $20
        assert_eq!(draft.price, "$45.00");
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_absorb_part_price_leaves_sufficient_price_alone() {
        let mut draft = filled_product_draft();
        let cheap = bolt(1.0);
        draft.parts.push(cheap.clone());
        draft.absorb_part_price(&cheap); // cost $3 <= $20
        assert_eq!(draft.price, "$20.00");
    }

    #[test]
    fn test_relax_part_price_stays_non_negative() {
        let mut draft = filled_product_draft();
        draft.price = "$1.00".to_string();
        let removed = bolt(5.0);
        draft.relax_part_price(&removed); // would go below zero
        assert_eq!(draft.price, "$1.00");

        draft.price = "$8.00".to_string();
        draft.relax_part_price(&removed);
        assert_eq!(draft.price, "$3.00");
    }
}
