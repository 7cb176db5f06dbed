//! Table formatting for the master tables
//!
//! Renders the parts and products tables shown on the main screen and in
//! search results. Rendering returns plain strings so it can be tested
//! without a terminal; color is applied per-cell after padding so styled
//! text does not break column alignment.

use console::style;

use crate::cli::helpers::truncate_str;
use crate::core::price::format_price;
use crate::entities::part::Part;
use crate::entities::product::Product;

/// Configuration for table output
#[derive(Debug, Clone)]
pub struct TableConfig {
    /// Widest a text column may grow before truncation
    pub max_text_width: usize,
    /// Show summary line after the table (e.g. "5 part(s)")
    pub show_summary: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            max_text_width: 30,
            show_summary: true,
        }
    }
}

impl TableConfig {
    /// Derive a config from an overall terminal width budget
    pub fn for_width(total: usize) -> Self {
        // roughly half the line is taken by the numeric columns
        Self {
            max_text_width: (total / 2).clamp(12, 60),
            show_summary: true,
        }
    }
}

const PART_HEADERS: [&str; 7] = ["ID", "Name", "Price", "In Stock", "Min", "Max", "Source"];
const PRODUCT_HEADERS: [&str; 7] = ["ID", "Name", "Price", "In Stock", "Min", "Max", "Parts"];

/// Render the parts master table
pub fn render_parts(parts: &[&Part], config: &TableConfig) -> String {
    let rows: Vec<[String; 7]> = parts
        .iter()
        .map(|part| {
            [
                part.id().to_string(),
                truncate_str(part.name(), config.max_text_width),
                format_price(part.price()),
                part.instock().to_string(),
                part.min().to_string(),
                part.max().to_string(),
                truncate_str(
                    &format!("{} ({})", part.source().label(), part.source().detail()),
                    config.max_text_width,
                ),
            ]
        })
        .collect();

    render(&PART_HEADERS, &rows, "part(s)", config)
}

/// Render the products master table.
/// The parts column shows a count plus the first few contained part names.
pub fn render_products(products: &[&Product], config: &TableConfig) -> String {
    let rows: Vec<[String; 7]> = products
        .iter()
        .map(|product| {
            [
                product.id().to_string(),
                truncate_str(product.name(), config.max_text_width),
                format_price(product.price()),
                product.instock().to_string(),
                product.min().to_string(),
                product.max().to_string(),
                truncate_str(&contained_summary(product), config.max_text_width),
            ]
        })
        .collect();

    render(&PRODUCT_HEADERS, &rows, "product(s)", config)
}

/// Render the contained-parts table inside the product form
pub fn render_contained_parts(parts: &[Part], config: &TableConfig) -> String {
    let refs: Vec<&Part> = parts.iter().collect();
    let mut out = render_parts(&refs, &TableConfig {
        show_summary: false,
        ..config.clone()
    });
    let cost: f64 = parts.iter().map(Part::price).sum();
    out.push_str(&format!(
        "{} contained part(s), total cost {}\n",
        parts.len(),
        format_price(cost)
    ));
    out
}

fn contained_summary(product: &Product) -> String {
    let names: Vec<&str> = product.parts().iter().map(Part::name).collect();
    match names.len() {
        0 => "(none)".to_string(),
        n => format!("{}: {}", n, names.join(", ")),
    }
}

fn render(headers: &[&str; 7], rows: &[[String; 7]], noun: &str, config: &TableConfig) -> String {
    let mut out = String::new();

    if rows.is_empty() {
        out.push_str(&format!("{}\n", style(format!("No {} found.", noun)).dim()));
        return out;
    }

    // column widths from headers and cells
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    for (i, header) in headers.iter().enumerate() {
        out.push_str(&format!("{}  ", style(pad(header, widths[i])).bold()));
    }
    out.push('\n');
    for (i, _) in headers.iter().enumerate() {
        out.push_str(&format!("{}  ", "-".repeat(widths[i])));
    }
    out.push('\n');

    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            let padded = pad(cell, widths[i]);
            if i == 0 {
                out.push_str(&format!("{}  ", style(padded).cyan()));
            } else {
                out.push_str(&format!("{}  ", padded));
            }
        }
        out.push('\n');
    }

    if config.show_summary {
        out.push_str(&format!("{}\n", style(format!("{} {}", rows.len(), noun)).dim()));
    }

    out
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    let mut padded = text.to_string();
    padded.extend(std::iter::repeat(' ').take(width.saturating_sub(len)));
    padded
}
