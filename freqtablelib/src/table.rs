//! Table-ready data structures for word-frequency output.
//!
//! This module provides `TableDescriptor`, the record a data-table UI
//! component consumes directly once serialized to JSON:
//!
//! ```json
//! {
//!   "title": "Word Frequency",
//!   "columns": [{"title": "Word", "field": "word"}, {"title": "Count", "field": "count"}],
//!   "data": [{"word": "the", "count": 5}],
//!   "options": {"sorting": true, "exportAllData": true, "exportButton": true}
//! }
//! ```
//!
//! The descriptor is a pure presentation layer. Rows are passed through in
//! the order the input yields them; no sorting or aggregation happens here.

use std::borrow::Borrow;
use std::io::Read;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::options::TableOptions;
use crate::source::{frequencies_from_reader, frequencies_from_str, frequencies_from_value};
use crate::Result;

/// Title shown above the table.
pub const TABLE_TITLE: &str = "Word Frequency";

/// Row field holding the word.
pub const WORD_FIELD: &str = "word";

/// Row field holding the count.
pub const COUNT_FIELD: &str = "count";

/// A column header and the row field it binds to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnValue {
    /// Header text
    pub title: String,
    /// Name of the row field displayed in this column
    pub field: String,
}

impl ColumnValue {
    pub fn new(title: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            field: field.into(),
        }
    }

    /// The two fixed columns: Word, then Count.
    pub fn word_frequency_columns() -> Vec<ColumnValue> {
        vec![
            ColumnValue::new("Word", WORD_FIELD),
            ColumnValue::new("Count", COUNT_FIELD),
        ]
    }
}

/// A single data row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataValue {
    pub word: String,
    pub count: u64,
}

/// Table-ready word-frequency data.
///
/// Output only: descriptors are built through the constructors below so the
/// title and columns always hold their fixed values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableDescriptor {
    /// Always [`TABLE_TITLE`]
    pub title: String,
    /// Always [`ColumnValue::word_frequency_columns`]
    pub columns: Vec<ColumnValue>,
    /// One row per input entry, in input order
    pub data: Vec<DataValue>,
    pub options: TableOptions,
}

impl TableDescriptor {
    /// Build a descriptor from any enumerable word -> count mapping.
    ///
    /// Accepts owned or borrowed maps (`HashMap`, `BTreeMap`, ...) as well as
    /// plain iterators of pairs. Rows follow the iteration order of `freqs`.
    #[tracing::instrument(skip_all)]
    pub fn from_frequencies<I, K, V>(freqs: I, options: TableOptions) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Borrow<u64>,
    {
        let data: Vec<DataValue> = freqs
            .into_iter()
            .map(|(word, count)| DataValue {
                word: word.as_ref().to_string(),
                count: *count.borrow(),
            })
            .collect();

        debug!(rows = data.len(), "built word frequency table");

        TableDescriptor {
            title: TABLE_TITLE.to_string(),
            columns: ColumnValue::word_frequency_columns(),
            data,
            options,
        }
    }

    /// Build a descriptor from an untyped JSON value.
    ///
    /// Fails with `InvalidInput` unless `value` is an object of non-negative
    /// integers. No descriptor is returned on failure.
    pub fn from_json_value(value: &Value, options: TableOptions) -> Result<Self> {
        let freqs = frequencies_from_value(value)?;
        Ok(Self::from_frequencies(freqs, options))
    }

    /// Build a descriptor from JSON text.
    pub fn from_json_str(input: &str, options: TableOptions) -> Result<Self> {
        let freqs = frequencies_from_str(input)?;
        Ok(Self::from_frequencies(freqs, options))
    }

    /// Build a descriptor from JSON read out of `reader`.
    pub fn from_reader<R: Read>(reader: R, options: TableOptions) -> Result<Self> {
        let freqs = frequencies_from_reader(reader)?;
        Ok(Self::from_frequencies(freqs, options))
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Build a descriptor with every recognized option enabled.
pub fn word_frequency_table<I, K, V>(freqs: I) -> TableDescriptor
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Borrow<u64>,
{
    TableDescriptor::from_frequencies(freqs, TableOptions::default())
}
