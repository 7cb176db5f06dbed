//! The interactive session: main screen loop and its action handlers
//!
//! One session owns one [`Inventory`]. The loop renders both master tables,
//! offers a menu of actions, and dispatches to handlers that drive the
//! forms, pickers, and confirmations.

use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use miette::{IntoDiagnostic, Result};

use crate::cli::args::Cli;
use crate::cli::forms::{part_pick_label, prompt_part_form, prompt_product_form, PartDraft, ProductDraft};
use crate::cli::helpers::{notice, success, warn};
use crate::cli::table::{render_parts, render_products, TableConfig};
use crate::core::error::InventoryError;
use crate::core::inventory::Inventory;
use crate::core::Config;
use crate::entities::part::{Part, PartSource};
use crate::entities::product::Product;

const MAIN_MENU: [&str; 9] = [
    "Search parts",
    "Add part",
    "Modify part",
    "Delete part",
    "Search products",
    "Add product",
    "Modify product",
    "Delete product",
    "Quit",
];

pub struct Session {
    inventory: Inventory,
    config: Config,
    theme: ColorfulTheme,
    table_config: TableConfig,
}

impl Session {
    pub fn new(cli: &Cli, config: Config) -> Result<Self> {
        let mut inventory = Inventory::new();
        if cli.seed {
            seed_sample_catalog(&mut inventory)
                .map_err(|e| miette::miette!("failed to build the sample catalog: {}", e))?;
        }

        let table_config = match cli.width.or(config.table_width) {
            Some(width) => TableConfig::for_width(width),
            None => TableConfig::default(),
        };

        Ok(Self {
            inventory,
            config,
            theme: ColorfulTheme::default(),
            table_config,
        })
    }

    /// Run the main screen loop until the user quits
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.render_main_screen();

            let choice = Select::with_theme(&self.theme)
                .with_prompt("Action")
                .items(&MAIN_MENU)
                .default(0)
                .interact()
                .into_diagnostic()?;

            match choice {
                0 => self.search_parts()?,
                1 => self.add_part()?,
                2 => self.modify_part()?,
                3 => self.delete_part()?,
                4 => self.search_products()?,
                5 => self.add_product()?,
                6 => self.modify_product()?,
                7 => self.delete_product()?,
                _ => {
                    let quit = Confirm::with_theme(&self.theme)
                        .with_prompt("Are you sure you want to quit?")
                        .default(false)
                        .interact()
                        .into_diagnostic()?;
                    if quit {
                        return Ok(());
                    }
                }
            }
        }
    }

    fn render_main_screen(&self) {
        println!();
        println!("{}", style("═══ Parts ═══").bold());
        let parts: Vec<&Part> = self.inventory.parts().iter().collect();
        print!("{}", render_parts(&parts, &self.table_config));
        println!();
        println!("{}", style("═══ Products ═══").bold());
        let products: Vec<&Product> = self.inventory.products().iter().collect();
        print!("{}", render_products(&products, &self.table_config));
        println!();
    }

    // ------------------------ part actions ------------------------

    fn search_parts(&self) -> Result<()> {
        let query: String = Input::with_theme(&self.theme)
            .with_prompt("Search parts for")
            .allow_empty(true)
            .interact_text()
            .into_diagnostic()?;

        // an empty query restores the full table, which the next render
        // shows anyway
        if query.trim().is_empty() {
            return Ok(());
        }

        let found = self.inventory.search_parts(query.trim());
        println!();
        print!("{}", render_parts(&found, &self.table_config));
        Ok(())
    }

    fn add_part(&mut self) -> Result<()> {
        let saved = prompt_part_form(
            &self.theme,
            PartDraft::empty(),
            "Add Part",
            self.config.supplier_placeholder(),
        )?;

        let Some(part) = saved else {
            notice("Part not added.");
            return Ok(());
        };

        if self.inventory.part_name_taken(part.name()) {
            let add_anyway = Confirm::with_theme(&self.theme)
                .with_prompt("A part with that name already exists in the inventory. Add this part?")
                .default(false)
                .interact()
                .into_diagnostic()?;
            if !add_anyway {
                notice("Part not added.");
                return Ok(());
            }
        }

        let summary = format!("Added part {} ({})", part.name(), part.id());
        self.inventory.add_part(part);
        success(&summary);
        Ok(())
    }

    fn modify_part(&mut self) -> Result<()> {
        let Some(old_id) = self.pick_part("Modify which part?")? else {
            return Ok(());
        };
        let Some(old) = self.inventory.part_by_id(old_id) else {
            return Ok(());
        };

        let saved = prompt_part_form(
            &self.theme,
            PartDraft::from_part(old),
            "Modify Part",
            self.config.supplier_placeholder(),
        )?;

        match saved {
            Some(replacement) => {
                let name = replacement.name().to_string();
                self.inventory
                    .update_part(old_id, replacement)
                    .map_err(|e| miette::miette!("{}", e))?;
                success(&format!("Updated part {} ({})", name, old_id));
            }
            None => notice("Part not updated."),
        }
        Ok(())
    }

    fn delete_part(&mut self) -> Result<()> {
        let Some(id) = self.pick_part("Delete which part?")? else {
            return Ok(());
        };
        let Some(part) = self.inventory.part_by_id(id) else {
            return Ok(());
        };
        let name = part.name().to_string();

        let confirmed = Confirm::with_theme(&self.theme)
            .with_prompt(format!("Are you sure you want to delete {}?", name))
            .default(false)
            .interact()
            .into_diagnostic()?;

        if confirmed && self.inventory.remove_part(id) {
            success(&format!("Deleted part {} ({})", name, id));
        }
        Ok(())
    }

    /// Pick a part from the inventory; `None` when the table is empty
    fn pick_part(&self, prompt: &str) -> Result<Option<crate::core::PartId>> {
        if self.inventory.parts().is_empty() {
            warn("There are no parts in the inventory.");
            return Ok(None);
        }
        let items: Vec<String> = self.inventory.parts().iter().map(part_pick_label).collect();
        let picked = Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(&items)
            .default(0)
            .interact()
            .into_diagnostic()?;
        Ok(Some(self.inventory.parts()[picked].id()))
    }

    // ------------------------ product actions ------------------------

    fn search_products(&self) -> Result<()> {
        let query: String = Input::with_theme(&self.theme)
            .with_prompt("Search products for")
            .allow_empty(true)
            .interact_text()
            .into_diagnostic()?;

        if query.trim().is_empty() {
            return Ok(());
        }

        let found = self.inventory.search_products(query.trim());
        println!();
        print!("{}", render_products(&found, &self.table_config));
        Ok(())
    }

    fn add_product(&mut self) -> Result<()> {
        let saved = prompt_product_form(
            &self.theme,
            ProductDraft::empty(),
            "Add Product",
            &self.inventory,
            &self.table_config,
        )?;

        let Some(product) = saved else {
            notice("Product not added.");
            return Ok(());
        };

        if self.inventory.product_name_taken(product.name()) {
            let add_anyway = Confirm::with_theme(&self.theme)
                .with_prompt("A product with that name already exists in the inventory. Add this product?")
                .default(false)
                .interact()
                .into_diagnostic()?;
            if !add_anyway {
                notice("Product not added.");
                return Ok(());
            }
        }

        let summary = format!("Added product {} ({})", product.name(), product.id());
        self.inventory.add_product(product);
        success(&summary);
        Ok(())
    }

    fn modify_product(&mut self) -> Result<()> {
        let Some(old_id) = self.pick_product("Modify which product?")? else {
            return Ok(());
        };
        let Some(old) = self.inventory.product_by_id(old_id) else {
            return Ok(());
        };

        let saved = prompt_product_form(
            &self.theme,
            ProductDraft::from_product(old),
            "Modify Product",
            &self.inventory,
            &self.table_config,
        )?;

        match saved {
            Some(replacement) => {
                let name = replacement.name().to_string();
                self.inventory
                    .update_product(old_id, replacement)
                    .map_err(|e| miette::miette!("{}", e))?;
                success(&format!("Updated product {} ({})", name, old_id));
            }
            None => notice("Product not updated."),
        }
        Ok(())
    }

    fn delete_product(&mut self) -> Result<()> {
        let Some(id) = self.pick_product("Delete which product?")? else {
            return Ok(());
        };
        let Some(product) = self.inventory.product_by_id(id) else {
            return Ok(());
        };
        let name = product.name().to_string();

        let confirmed = Confirm::with_theme(&self.theme)
            .with_prompt(format!("Are you sure you want to delete {}?", name))
            .default(false)
            .interact()
            .into_diagnostic()?;
        if !confirmed {
            return Ok(());
        }

        match self.inventory.remove_product(id) {
            Ok(true) => success(&format!("Deleted product {} ({})", name, id)),
            Ok(false) => {}
            Err(InventoryError::ProductNotEmpty { count, .. }) => {
                warn(&format!("This product still contains {} part(s).", count));
                let delete_anyway = Confirm::with_theme(&self.theme)
                    .with_prompt("Are you sure you want to delete this product?")
                    .default(false)
                    .interact()
                    .into_diagnostic()?;
                if delete_anyway && self.inventory.force_remove_product(id) {
                    success(&format!("Deleted product {} ({})", name, id));
                }
            }
            Err(other) => return Err(miette::miette!("{}", other)),
        }
        Ok(())
    }

    /// Pick a product from the inventory; `None` when the table is empty
    fn pick_product(&self, prompt: &str) -> Result<Option<crate::core::ProductId>> {
        if self.inventory.products().is_empty() {
            warn("There are no products in the inventory.");
            return Ok(None);
        }
        let items: Vec<String> = self
            .inventory
            .products()
            .iter()
            .map(|p| {
                format!(
                    "{}  {}  {} part(s)",
                    p.id(),
                    p.name(),
                    p.parts().len()
                )
            })
            .collect();
        let picked = Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(&items)
            .default(0)
            .interact()
            .into_diagnostic()?;
        Ok(Some(self.inventory.products()[picked].id()))
    }
}

/// Preload the sample catalog: ten parts and three products, including
/// shared suppliers, duplicate contained parts, a part used by several
/// products, and a product priced exactly at its parts cost
pub fn seed_sample_catalog(
    inventory: &mut Inventory,
) -> Result<(), crate::core::ValidationError> {
    let first = Part::new("First Part", 1.50, 75, 10, 100, PartSource::in_house(546))?;
    let second = Part::new("Second Part", 3.75, 17, 5, 20, PartSource::in_house(112))?;
    let third = Part::new("Third Part", 10.0, 2, 0, 5, PartSource::outsourced("ACME"))?;
    let fourth = Part::new("Fourth Part", 12.10, 4, 1, 10, PartSource::outsourced("Brand X"))?;
    let fifth = Part::new("Fifth Part", 10.0, 46, 10, 100, PartSource::in_house(10101))?;
    let sixth = Part::new("Sixth Part", 50.0, 12, 5, 20, PartSource::in_house(112))?;
    let seventh = Part::new("Seventh Part", 25.64, 0, 0, 5, PartSource::outsourced("ACME"))?;
    let eighth = Part::new("Eighth Part", 0.02, 7, 1, 10, PartSource::outsourced("Brand X"))?;
    let ninth = Part::new(
        "Ninth Part",
        1.0,
        264,
        100,
        1000,
        PartSource::outsourced("Generic Industries"),
    )?;
    let tenth = Part::new(
        "Tenth Part",
        2.0,
        745,
        100,
        1000,
        PartSource::outsourced("Generic Industries"),
    )?;

    inventory.add_product(Product::new(
        "First Product",
        500.0,
        88,
        10,
        100,
        vec![first.clone(), second.clone(), ninth.clone()],
    )?);
    inventory.add_product(Product::new(
        "Second Product",
        250.0,
        49,
        10,
        100,
        vec![
            sixth.clone(),
            sixth.clone(),
            sixth.clone(),
            sixth.clone(),
            sixth.clone(),
        ],
    )?);
    inventory.add_product(Product::new(
        "Third Product",
        70.0,
        12,
        10,
        100,
        vec![
            tenth.clone(),
            third.clone(),
            sixth.clone(),
            tenth.clone(),
            first.clone(),
        ],
    )?);

    for part in [
        first, second, third, fourth, fifth, sixth, seventh, eighth, ninth, tenth,
    ] {
        inventory.add_part(part);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_sample_catalog() {
        let mut inventory = Inventory::new();
        seed_sample_catalog(&mut inventory).unwrap();

        assert_eq!(inventory.parts().len(), 10);
        assert_eq!(inventory.products().len(), 3);

        // the second product contains the same part five times and sits
        // exactly on the price == parts cost boundary
        let second = inventory.lookup_product("Second Product").unwrap();
        assert_eq!(second.parts().len(), 5);
        assert!(second.parts().iter().all(|p| p.name() == "Sixth Part"));
        assert_eq!(second.parts_cost(), 250.0);
        assert_eq!(second.price(), second.parts_cost());

        // every sample product honors the price invariant
        for product in inventory.products() {
            assert!(product.price() >= product.parts_cost());
        }
    }

    #[test]
    fn test_seed_third_product_repeats_tenth_part() {
        let mut inventory = Inventory::new();
        seed_sample_catalog(&mut inventory).unwrap();

        let third = inventory.lookup_product("Third Product").unwrap();
        assert_eq!(third.parts().len(), 5);
        let tenths = third
            .parts()
            .iter()
            .filter(|p| p.name() == "Tenth Part")
            .count();
        assert_eq!(tenths, 2);
    }

    #[test]
    fn test_seeded_search_scenarios() {
        let mut inventory = Inventory::new();
        seed_sample_catalog(&mut inventory).unwrap();

        // two parts share a supplier, two share a machine
        assert_eq!(inventory.search_parts("acme").len(), 2);
        assert_eq!(inventory.search_parts("112").len(), 2);
        // products found via a contained part name
        assert_eq!(inventory.search_products("sixth").len(), 2);
    }
}
