//! `cvr latest` – print the newest published page number.

use anyhow::Result;
use cvr_core::resolver::VolumeResolver;

pub async fn run_latest(resolver: VolumeResolver) -> Result<()> {
    let page = tokio::task::spawn_blocking(move || resolver.fetch_latest_page_number()).await??;
    println!("{page}");
    Ok(())
}
