//! `sheetstat fetch <product> <kind>` – fetch and print one parsed listing.

use anyhow::{bail, Context, Result};
use sheetstat_core::config::SheetstatConfig;
use sheetstat_core::fetch;
use sheetstat_core::filesize::file_size;
use sheetstat_core::status::{ListingKind, Product};
use std::time::Duration;

pub async fn run_fetch(cfg: &SheetstatConfig, product: Product, kind: ListingKind) -> Result<()> {
    let Some(source) = product.listings().iter().find(|s| s.kind == kind) else {
        bail!(
            "product {} has no {} listing",
            product.as_str(),
            kind.as_str()
        );
    };

    let listing = tokio::task::spawn_blocking({
        let base_url = cfg.base_url.clone();
        let connect_timeout = Duration::from_secs(cfg.connect_timeout_secs);
        let request_timeout = Duration::from_secs(cfg.request_timeout_secs);
        let path = source.path;
        move || fetch::fetch_listing(&base_url, path, connect_timeout, request_timeout)
    })
    .await
    .context("fetch task join")??;

    if listing.is_empty() {
        println!("Listing is empty.");
        return Ok(());
    }

    let mut names: Vec<&String> = listing.keys().collect();
    names.sort();
    println!("{:<40} {:>12} {}", "NAME", "SIZE", "URL");
    for name in names {
        let entry = &listing[name];
        println!("{:<40} {:>12} {}", name, file_size(entry.size), entry.url);
    }
    Ok(())
}
