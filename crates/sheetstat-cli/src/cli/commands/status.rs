//! `sheetstat status <product>` – aggregate listings into a per-sheet table.

use anyhow::Result;
use sheetstat_core::config::SheetstatConfig;
use sheetstat_core::status::{self, Product};

pub async fn run_status(cfg: &SheetstatConfig, product: Product, json: bool) -> Result<()> {
    let status = status::fetch_status(cfg, product).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    if status.is_empty() {
        println!("No sheets listed for {}.", product.as_str());
        return Ok(());
    }

    println!(
        "{:<12} {:<8} {:>12} {:>12} {:>12}",
        "SHEET", "STATUS", "PDF", "GTIFF", "JPG"
    );
    for (sheet_no, record) in &status {
        println!(
            "{:<12} {:<8} {:>12} {:>12} {:>12}",
            sheet_no,
            record.status.map(|s| s.as_str()).unwrap_or("-"),
            record.pdf_filesize.as_deref().unwrap_or("-"),
            record.gtiff_filesize.as_deref().unwrap_or("-"),
            record.jpg_filesize.as_deref().unwrap_or("-"),
        );
    }
    println!("{} sheets", status.len());
    Ok(())
}
