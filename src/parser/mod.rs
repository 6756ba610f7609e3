// Turns raw sheet text into normalized catalog rows.

pub mod sheet_csv;

pub use sheet_csv::{Parser, SheetCsvParser};
