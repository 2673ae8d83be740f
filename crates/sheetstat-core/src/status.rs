//! Status aggregation: fetch every listing for a product concurrently,
//! then collate them into one per-sheet status map.
//!
//! Each listing fetch runs in its own blocking task; collation happens
//! only after all of them have completed, success or failure. If any
//! fetch failed, the whole aggregation fails and successfully fetched
//! listings are discarded. When several fetches fail, the error reported
//! is the last one observed in completion order.

use crate::config::SheetstatConfig;
use crate::fetch::{fetch_listing, FetchError};
use crate::filesize::file_size;
use crate::listing::ListingMap;
use crate::sheet::{expand_sheet_numbers, sheet_display_name, SheetState, SheetStatusMap};
use std::collections::HashMap;
use std::time::Duration;

/// Which artifact format a listing enumerates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListingKind {
    Pdf,
    Gtiff,
    Jpg,
}

impl ListingKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ListingKind::Pdf => "pdf",
            ListingKind::Gtiff => "gtiff",
            ListingKind::Jpg => "jpg",
        }
    }

    /// File extension stripped when deriving the sheet number.
    pub fn extension(self) -> &'static str {
        match self {
            ListingKind::Pdf => ".pdf",
            ListingKind::Gtiff => ".tif",
            ListingKind::Jpg => ".jpg",
        }
    }

    /// Pipeline state this listing kind asserts for a sheet, if any.
    /// JPEG previews carry no state of their own.
    fn state(self) -> Option<SheetState> {
        match self {
            ListingKind::Pdf => Some(SheetState::Found),
            ListingKind::Gtiff => Some(SheetState::Parsed),
            ListingKind::Jpg => None,
        }
    }
}

/// One listing a product publishes: its kind and well-known path.
#[derive(Debug, Clone, Copy)]
pub struct ListingSource {
    pub kind: ListingKind,
    pub path: &'static str,
}

/// A map product with its own set of listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Product {
    /// Open Series Map 1:50,000 sheets (GeoTIFF + PDF + JPEG listings).
    Osm50k,
    /// CMPDI 1:5,000 sheets (PDF listing only).
    Cmpdi5k,
}

const OSM_50K_LISTINGS: &[ListingSource] = &[
    ListingSource {
        kind: ListingKind::Pdf,
        path: "/india_topo_maps/50k/osm/pdf_listing.csv",
    },
    ListingSource {
        kind: ListingKind::Gtiff,
        path: "/india_topo_maps/50k/osm/tiff_listing.csv",
    },
    ListingSource {
        kind: ListingKind::Jpg,
        path: "/india_topo_maps/50k/osm/jpg_listing.csv",
    },
];

const CMPDI_5K_LISTINGS: &[ListingSource] = &[ListingSource {
    kind: ListingKind::Pdf,
    path: "/india_topo_maps/5k/cmpdi/pdf_listing.csv",
}];

impl Product {
    pub fn as_str(self) -> &'static str {
        match self {
            Product::Osm50k => "osm-50k",
            Product::Cmpdi5k => "cmpdi-5k",
        }
    }

    /// Listings in collation order. PDF comes first so that GeoTIFF can
    /// overwrite a `found` status with `parsed` for sheets in both.
    pub fn listings(self) -> &'static [ListingSource] {
        match self {
            Product::Osm50k => OSM_50K_LISTINGS,
            Product::Cmpdi5k => CMPDI_5K_LISTINGS,
        }
    }
}

/// Fetches every listing of `product` concurrently and collates the
/// results. Returns the status map only if all fetches succeeded.
pub async fn fetch_status(
    cfg: &SheetstatConfig,
    product: Product,
) -> Result<SheetStatusMap, FetchError> {
    let sources = product.listings();
    let connect_timeout = Duration::from_secs(cfg.connect_timeout_secs);
    let request_timeout = Duration::from_secs(cfg.request_timeout_secs);

    let mut tasks = tokio::task::JoinSet::new();
    for source in sources {
        let base_url = cfg.base_url.clone();
        let kind = source.kind;
        let path = source.path;
        tasks.spawn_blocking(move || {
            (
                kind,
                fetch_listing(&base_url, path, connect_timeout, request_timeout),
            )
        });
    }

    let mut slots: HashMap<ListingKind, ListingMap> = HashMap::new();
    let mut last_err: Option<FetchError> = None;
    while let Some(joined) = tasks.join_next().await {
        let (kind, fetched) = joined.map_err(FetchError::Task)?;
        match fetched {
            Ok(listing) => {
                tracing::debug!("{} listing fetched: {} entries", kind.as_str(), listing.len());
                slots.insert(kind, listing);
            }
            Err(e) => {
                tracing::warn!("{} listing fetch failed: {}", kind.as_str(), e);
                last_err = Some(e);
            }
        }
    }

    if let Some(e) = last_err {
        return Err(e);
    }
    Ok(collate(sources, &slots))
}

/// Merges fetched listings into one per-sheet status map, processing
/// sources in the given order. Joint sheets expand to every number they
/// cover, all sharing the same url/filesize data.
pub fn collate(
    sources: &[ListingSource],
    slots: &HashMap<ListingKind, ListingMap>,
) -> SheetStatusMap {
    let mut status = SheetStatusMap::new();
    for source in sources {
        let Some(listing) = slots.get(&source.kind) else {
            continue;
        };
        for (name, entry) in listing {
            let display_name = sheet_display_name(name, source.kind.extension());
            let fsize = file_size(entry.size);
            for sheet_no in expand_sheet_numbers(&display_name) {
                let record = status.entry(sheet_no.to_string()).or_default();
                if let Some(state) = source.kind.state() {
                    record.status = Some(state);
                }
                match source.kind {
                    ListingKind::Pdf => {
                        record.pdf_url = Some(entry.url.clone());
                        record.pdf_filesize = Some(fsize.clone());
                    }
                    ListingKind::Gtiff => {
                        record.gtiff_url = Some(entry.url.clone());
                        record.gtiff_filesize = Some(fsize.clone());
                    }
                    ListingKind::Jpg => {
                        record.jpg_url = Some(entry.url.clone());
                        record.jpg_filesize = Some(fsize.clone());
                    }
                }
            }
        }
    }
    status
}
