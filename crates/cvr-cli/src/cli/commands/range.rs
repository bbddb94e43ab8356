//! `cvr range <VOLUME>` – resolve a volume's page range against the site.

use anyhow::Result;
use cvr_core::resolver::VolumeResolver;

pub async fn run_range(resolver: VolumeResolver, volume: usize) -> Result<()> {
    let range =
        tokio::task::spawn_blocking(move || resolver.resolve_latest_volume_range(volume)).await??;
    println!("{range}");
    Ok(())
}
