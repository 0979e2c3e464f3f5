//! Display options carried in the table descriptor.
//!
//! The table UI component reads these flags to decide which interactive
//! features to offer. This library only passes them through.

use serde::{Deserialize, Serialize};

/// Options record of a [`TableDescriptor`](crate::TableDescriptor).
///
/// Serialized with the component's own field names (`sorting`,
/// `exportAllData`, `exportButton`). Export flags set to `None` are left out
/// of the serialized record entirely, which yields the older
/// `{"sorting": true}` shape. Fields missing on deserialization take the
/// values of [`TableOptions::default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableOptions {
    /// Enable column sorting
    pub sorting: bool,
    /// Export every row, not just the current page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_all_data: Option<bool>,
    /// Show the export button
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_button: Option<bool>,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl TableOptions {
    /// All recognized flags enabled (default)
    pub fn new() -> Self {
        Self {
            sorting: true,
            export_all_data: Some(true),
            export_button: Some(true),
        }
    }

    /// Sorting enabled, export flags absent
    pub fn sorting_only() -> Self {
        Self::new().without_export()
    }

    /// Builder: set sorting
    pub fn with_sorting(mut self, enable: bool) -> Self {
        self.sorting = enable;
        self
    }

    /// Builder: set the export-all-data flag
    pub fn with_export_all_data(mut self, enable: bool) -> Self {
        self.export_all_data = Some(enable);
        self
    }

    /// Builder: set the export-button flag
    pub fn with_export_button(mut self, enable: bool) -> Self {
        self.export_button = Some(enable);
        self
    }

    /// Builder: drop both export flags from the record
    pub fn without_export(mut self) -> Self {
        self.export_all_data = None;
        self.export_button = None;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_enables_everything() {
        let options = TableOptions::default();
        assert!(options.sorting);
        assert_eq!(options.export_all_data, Some(true));
        assert_eq!(options.export_button, Some(true));
    }

    #[test]
    fn test_sorting_only() {
        let options = TableOptions::sorting_only();
        assert!(options.sorting);
        assert!(options.export_all_data.is_none());
        assert!(options.export_button.is_none());
    }

    #[test]
    fn test_builders() {
        let options = TableOptions::new()
            .with_sorting(false)
            .with_export_button(false);
        assert!(!options.sorting);
        assert_eq!(options.export_all_data, Some(true));
        assert_eq!(options.export_button, Some(false));

        let options = TableOptions::sorting_only().with_export_all_data(true);
        assert_eq!(options.export_all_data, Some(true));
        assert!(options.export_button.is_none());
    }

    #[test]
    fn test_serialized_field_names() {
        let value = serde_json::to_value(TableOptions::new()).unwrap();
        assert_eq!(
            value,
            json!({"sorting": true, "exportAllData": true, "exportButton": true})
        );
    }

    #[test]
    fn test_absent_export_flags_are_omitted() {
        let value = serde_json::to_value(TableOptions::sorting_only()).unwrap();
        assert_eq!(value, json!({"sorting": true}));
    }

    #[test]
    fn test_deserialize_missing_fields_take_defaults() {
        let options: TableOptions = serde_json::from_value(json!({})).unwrap();
        assert_eq!(options, TableOptions::default());

        let options: TableOptions =
            serde_json::from_value(json!({"sorting": false, "exportButton": false})).unwrap();
        assert!(!options.sorting);
        assert_eq!(options.export_all_data, Some(true));
        assert_eq!(options.export_button, Some(false));
    }

    #[test]
    fn test_deserialize_explicit_null_drops_flag() {
        let options: TableOptions =
            serde_json::from_value(json!({"exportAllData": null, "exportButton": null})).unwrap();
        assert_eq!(options, TableOptions::sorting_only());
    }
}
