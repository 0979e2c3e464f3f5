//! # freqtablelib
//!
//! Turn a word-frequency map into a table descriptor that a data-table UI
//! component can render as-is.
//!
//! ## Overview
//!
//! Upstream code counts words; the table component wants a `title`, a list of
//! `columns`, the `data` rows and a few `options`. This library does the
//! reshaping and nothing else:
//!
//! - **Typed input**: any enumerable word -> count mapping (`HashMap`,
//!   `BTreeMap`, a `Vec` of pairs, borrowed or owned)
//! - **Untyped input**: a JSON object, checked at the boundary
//! - **Pure data out**: `TableDescriptor` serializes to the exact field names
//!   the component expects
//!
//! Rows are passed through in input order. Sorting is left to the component,
//! which is why `options.sorting` is on by default.
//!
//! ## Example
//!
//! ```rust
//! use freqtablelib::{word_frequency_table, TableDescriptor, TableOptions};
//! use std::collections::BTreeMap;
//!
//! let mut counts = BTreeMap::new();
//! counts.insert("fox", 2u64);
//! counts.insert("the", 5u64);
//!
//! let table = word_frequency_table(&counts);
//! assert_eq!(table.title, "Word Frequency");
//! assert_eq!(table.data.len(), 2);
//! assert!(table.options.sorting);
//!
//! // Untyped input is validated first
//! let table = TableDescriptor::from_json_str(r#"{"the": 5}"#, TableOptions::sorting_only()).unwrap();
//! assert_eq!(table.data[0].count, 5);
//! assert!(TableDescriptor::from_json_str("null", TableOptions::default()).is_err());
//! ```

pub mod error;
pub mod options;
pub mod source;
pub mod table;

pub use error::FreqTableError;
pub use options::TableOptions;
pub use source::{frequencies_from_reader, frequencies_from_str, frequencies_from_value};
pub use table::{
    word_frequency_table, ColumnValue, DataValue, TableDescriptor, COUNT_FIELD, TABLE_TITLE,
    WORD_FIELD,
};

/// Result type for freqtablelib operations
pub type Result<T> = std::result::Result<T, FreqTableError>;
