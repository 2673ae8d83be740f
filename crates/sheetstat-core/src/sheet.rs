//! Sheet identifiers and per-sheet status records.
//!
//! Listing entry names encode a sheet number with underscores standing in
//! for slashes (`66E_1.pdf` is sheet `66E/1`). A joint sheet published
//! across adjacent codes carries both, separated by `-`
//! (`66E_1-66E_2.pdf` covers `66E/1` and `66E/2`).

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// How far a sheet got through the pipeline: `found` means the scanned
/// PDF exists, `parsed` means a georeferenced GeoTIFF was produced too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SheetState {
    Found,
    Parsed,
}

impl SheetState {
    pub fn as_str(self) -> &'static str {
        match self {
            SheetState::Found => "found",
            SheetState::Parsed => "parsed",
        }
    }
}

impl fmt::Display for SheetState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accumulated availability for one sheet. Fields are filled in as each
/// listing kind is collated; a sheet present in only one listing keeps
/// the rest as `None`. Filesizes are pre-formatted display strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<SheetState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdf_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdf_filesize: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gtiff_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gtiff_filesize: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jpg_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jpg_filesize: Option<String>,
}

/// Per-sheet status keyed by normalized sheet number, sorted for display.
pub type SheetStatusMap = BTreeMap<String, SheetRecord>;

/// Normalizes a raw entry name to a display name: every `_` becomes `/`,
/// then the first occurrence of `extension` is removed.
pub fn sheet_display_name(name: &str, extension: &str) -> String {
    name.replace('_', "/").replacen(extension, "", 1)
}

/// Expands a display name into its sheet numbers. Joint sheets split on
/// `-`; everything else maps to itself.
pub fn expand_sheet_numbers(display_name: &str) -> Vec<&str> {
    display_name.split('-').collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_replaces_underscores_and_strips_extension() {
        assert_eq!(sheet_display_name("66E_1.pdf", ".pdf"), "66E/1");
        assert_eq!(sheet_display_name("55J_4.tif", ".tif"), "55J/4");
    }

    #[test]
    fn display_name_strips_only_matching_extension() {
        // A .tif entry passed through a .pdf collation pass keeps its suffix.
        assert_eq!(sheet_display_name("55J_4.tif", ".pdf"), "55J/4.tif");
    }

    #[test]
    fn joint_sheet_expands_to_both_numbers() {
        let disp = sheet_display_name("66E_1-66E_2.pdf", ".pdf");
        assert_eq!(disp, "66E/1-66E/2");
        assert_eq!(expand_sheet_numbers(&disp), vec!["66E/1", "66E/2"]);
    }

    #[test]
    fn plain_sheet_expands_to_itself() {
        assert_eq!(expand_sheet_numbers("66E/1"), vec!["66E/1"]);
    }

    #[test]
    fn record_serializes_camel_case_without_empty_fields() {
        let rec = SheetRecord {
            status: Some(SheetState::Found),
            pdf_url: Some("u".to_string()),
            pdf_filesize: Some("2.00 kB".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&rec).unwrap();
        assert_eq!(
            json,
            r#"{"status":"found","pdfUrl":"u","pdfFilesize":"2.00 kB"}"#
        );
    }
}
