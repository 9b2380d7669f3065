//! CSV read options shared by every loader.

use polars::prelude::*;
use serde::{Deserialize, Serialize};

use super::loader::LoaderError;

/// Settings passed through to the polars CSV reader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadOptions {
    pub separator: u8,
    /// Rows scanned for type inference. `None` scans the whole file.
    pub infer_schema_length: Option<usize>,
    /// Extra strings read as null. Empty keeps the reader's defaults.
    pub null_values: Vec<String>,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            separator: b',',
            infer_schema_length: None,
            null_values: Vec::new(),
        }
    }
}

impl ReadOptions {
    pub fn from_json_str(json: &str) -> Result<Self, LoaderError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Translate into polars reader options. A header row is always expected.
    pub(crate) fn to_csv_options(&self) -> CsvReadOptions {
        let separator = self.separator;
        let null_values = if self.null_values.is_empty() {
            None
        } else {
            Some(NullValues::AllColumns(
                self.null_values.iter().map(|v| v.as_str().into()).collect(),
            ))
        };

        CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(self.infer_schema_length)
            .map_parse_options(move |opts| {
                opts.with_separator(separator)
                    .with_null_values(null_values.clone())
            })
    }
}
