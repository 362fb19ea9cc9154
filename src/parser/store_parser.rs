// Store listing HTML parsing
use crate::model::{FieldTarget, Listed, Offer, ParserError, RowError};
use crate::normalizer::{normalize_condition, normalize_name, parse_price, parse_quantity};
use crate::utils::{child_elements, element_text, first_text_node, nth_text};
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info, warn};

pub const DEFAULT_ROW_SELECTOR: &str = "tr.tm";
pub const DEFAULT_ROW_CELLS: usize = 4;

const CONDITION_CELL: usize = 1;
const ITEM_CELL: usize = 2;
const QUANTITY_CELL: usize = 3;

pub trait Parser {
    fn parse(&self, html: &str) -> Result<Vec<Listed>, ParserError>;
}

/// Outcome of looking at one listing row.
#[derive(Debug)]
pub enum ParsedRow {
    Product(Listed),
    /// Header, separator or anything else without the product-row shape.
    NotProduct,
}

/// Selectors used inside a single product row.
struct RowSelectors {
    bold: Selector,
    product_key: Selector,
    wanted: Selector,
    input: Selector,
}

impl RowSelectors {
    fn new() -> Result<Self, ParserError> {
        Ok(Self {
            bold: selector("b")?,
            product_key: selector("font.fv a:last-child")?,
            wanted: selector("font.fv b")?,
            input: selector("input[type=\"text\"], input:not([type])")?,
        })
    }
}

fn selector(css: &str) -> Result<Selector, ParserError> {
    Selector::parse(css).map_err(|e| ParserError::InvalidSelector(format!("{css}: {e}")))
}

pub struct StoreListingParser {
    row_selector: String,
    row_cells: usize,
}

impl StoreListingParser {
    pub fn new() -> Self {
        Self::with_layout(DEFAULT_ROW_SELECTOR, DEFAULT_ROW_CELLS)
    }

    pub fn with_layout(row_selector: impl Into<String>, row_cells: usize) -> Self {
        Self {
            row_selector: row_selector.into(),
            row_cells,
        }
    }

    fn classify_row(&self, row: ElementRef<'_>, sel: &RowSelectors) -> Result<ParsedRow, RowError> {
        let cells = child_elements(&row);
        if cells.len() != self.row_cells {
            return Ok(ParsedRow::NotProduct);
        }

        let condition_cell = cells.get(CONDITION_CELL).ok_or(RowError::MissingField("condition cell"))?;
        let item_cell = cells.get(ITEM_CELL).ok_or(RowError::MissingField("item cell"))?;
        let quantity_cell = cells.get(QUANTITY_CELL).ok_or(RowError::MissingField("quantity cell"))?;

        let condition_text = nth_text(condition_cell, &sel.bold, 0).ok_or(RowError::MissingField("condition"))?;
        let condition = normalize_condition(&condition_text)?;

        let name = first_text_node(item_cell)
            .map(|text| normalize_name(&text))
            .ok_or(RowError::MissingField("name"))?;

        let product_key = item_cell
            .select(&sel.product_key)
            .last()
            .map(|a| element_text(&a).trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or(RowError::MissingField("product key"))?;

        let available_text = nth_text(quantity_cell, &sel.bold, 0).ok_or(RowError::MissingField("available quantity"))?;
        let price_text = nth_text(quantity_cell, &sel.bold, 1).ok_or(RowError::MissingField("price"))?;
        let wanted_text = nth_text(quantity_cell, &sel.wanted, 0).ok_or(RowError::MissingField("wanted quantity"))?;

        let input = row.select(&sel.input).next().ok_or(RowError::MissingField("quantity input"))?;
        let field = input
            .value()
            .attr("name")
            .or_else(|| input.value().attr("id"))
            .ok_or(RowError::MissingField("quantity input name"))?;

        let offer = Offer {
            product_key,
            name,
            condition,
            price: parse_price(&price_text)?,
            available_quantity: parse_quantity(&available_text, "available quantity")?,
            wanted_quantity: parse_quantity(&wanted_text, "wanted quantity")?,
        };

        Ok(ParsedRow::Product(Listed {
            offer,
            target: FieldTarget::new(field),
        }))
    }
}

impl Default for StoreListingParser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser for StoreListingParser {
    fn parse(&self, html: &str) -> Result<Vec<Listed>, ParserError> {
        let document = Html::parse_document(html);

        let row_selector = selector(&self.row_selector)?;
        let row_selectors = RowSelectors::new()?;

        let mut listed = Vec::new();
        let mut skipped = 0usize;

        for (index, row) in document.select(&row_selector).enumerate() {
            match self.classify_row(row, &row_selectors) {
                Ok(ParsedRow::Product(item)) => listed.push(item),
                Ok(ParsedRow::NotProduct) => debug!("Row {} is not a product row", index),
                Err(e) => {
                    skipped += 1;
                    warn!("⚠️ Skipping malformed row {}: {}", index, e);
                }
            }
        }

        info!("Extracted {} offers ({} malformed rows skipped)", listed.len(), skipped);
        Ok(listed)
    }
}
