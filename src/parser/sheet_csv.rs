use crate::model::{CatalogRow, ParserError};
use crate::normalizer::normalize;
use serde::Deserialize;
use tracing::warn;

pub trait Parser {
    fn parse(&self, raw: &str) -> Result<Vec<CatalogRow>, ParserError>;
}

/// One record of the published sheet, addressed by column name. Every column
/// is optional: a sheet without e.g. a SKU column still parses, the field
/// just stays at its default.
#[derive(Debug, Deserialize)]
struct SheetRecord {
    #[serde(rename = "Title", default)]
    title: String,
    #[serde(rename = "Price_TRY", default)]
    price: Option<String>,
    #[serde(rename = "StockNote", default)]
    stock_note: String,
    #[serde(rename = "SKU", default)]
    sku: String,
    #[serde(rename = "Keywords", default)]
    keywords: String,
}

pub struct SheetCsvParser;

impl SheetCsvParser {
    pub fn new() -> Self {
        Self
    }
}

impl Parser for SheetCsvParser {
    fn parse(&self, raw: &str) -> Result<Vec<CatalogRow>, ParserError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(raw.as_bytes());

        let mut rows = Vec::new();
        for record in reader.deserialize::<SheetRecord>() {
            let record = record.map_err(|e| ParserError::Csv(e.to_string()))?;
            rows.push(to_row(record));
        }

        Ok(rows)
    }
}

fn to_row(record: SheetRecord) -> CatalogRow {
    let title = record.title.trim().to_string();
    let norm_title = normalize(&title);
    let price = parse_price(record.price.as_deref(), &title);

    let norm_keywords = record
        .keywords
        .split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(normalize)
        .collect();

    CatalogRow {
        norm_title,
        title,
        price,
        stock_note: record.stock_note.trim().to_string(),
        sku: record.sku.trim().to_string(),
        norm_keywords,
    }
}

/// Blank cell means no price. A cell that is present but not a non-negative
/// number is logged and treated the same, the row itself stays in the catalog.
fn parse_price(raw: Option<&str>, title: &str) -> Option<f64> {
    let raw = raw.map(str::trim).filter(|p| !p.is_empty())?;
    match raw.parse::<f64>() {
        Ok(price) if price >= 0.0 => Some(price),
        Ok(_) | Err(_) => {
            warn!("Unusable price {:?} for row {:?}, keeping row without price", raw, title);
            None
        }
    }
}
