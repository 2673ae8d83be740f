//! Parsing of map-sheet listing files.
//!
//! A listing is a small CSV blob: a header line followed by
//! `name,size,url` rows. There is no quoting or escaping support; commas
//! inside fields are not handled. That is a constraint of the listing
//! format itself, not something this parser tries to repair.

use std::collections::HashMap;

/// One artifact from a listing: size in bytes and a download URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEntry {
    pub size: u64,
    pub url: String,
}

/// Parsed listing keyed by raw entry name (e.g. `66E_1.pdf`).
/// Duplicate names keep the last row seen.
pub type ListingMap = HashMap<String, ListingEntry>;

/// Parses a listing blob into a [`ListingMap`].
///
/// The first line is a header and is always discarded. Blank lines are
/// skipped. Rows with fewer than 3 comma-separated fields are dropped
/// silently; fields beyond the third are ignored. A row whose size field
/// is not a non-negative integer is dropped as well.
pub fn parse_listing(text: &str) -> ListingMap {
    let mut data = HashMap::new();
    // skip header
    for line in text.trim().lines().skip(1) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let mut fields = line.split(',');
        let (Some(name), Some(size), Some(url)) = (fields.next(), fields.next(), fields.next())
        else {
            continue;
        };
        let Ok(size) = size.parse::<u64>() else {
            tracing::debug!("dropping listing row with non-numeric size: {}", line);
            continue;
        };
        data.insert(
            name.to_string(),
            ListingEntry {
                size,
                url: url.to_string(),
            },
        );
    }
    data
}
