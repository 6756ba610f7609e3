// Core structs: CatalogRow, CatalogSnapshot, MatchResult
use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Clone)]
pub struct CatalogRow {
    pub title: String,
    /// Canonical form of `title`, computed once at ingestion.
    pub norm_title: String,
    /// Absent when the sheet cell is blank or unusable, never 0.0 as a stand-in.
    pub price: Option<f64>,
    pub stock_note: String,
    pub sku: String,
    pub norm_keywords: Vec<String>,
}

/// Immutable point-in-time view of the whole catalog. Built complete, shared
/// behind an Arc, never mutated after install.
#[derive(Debug)]
pub struct CatalogSnapshot {
    pub rows: Vec<CatalogRow>,
    pub fetched_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MatchResult {
    NotFound,
    Found {
        title: String,
        price: f64,
        stock_note: String,
        sku: String,
    },
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("http error: {0}")]
    Http(String),
    #[error("request timed out")]
    Timeout,
    #[error("unexpected status {0}")]
    BadStatus(u16),
}

#[derive(Debug, Error)]
pub enum ParserError {
    #[error("csv error: {0}")]
    Csv(String),
}

#[derive(Debug, Error)]
pub enum RefreshError {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error(transparent)]
    Parser(#[from] ParserError),
}

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("catalog source unavailable: {0}")]
    SourceUnavailable(String),
}
