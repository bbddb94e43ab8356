//! `cvr volumes` – list the configured volume table.

use anyhow::Result;
use cvr_core::resolver::VolumeResolver;

pub fn run_volumes(resolver: &VolumeResolver) -> Result<()> {
    println!("{:<4} {:<12} {:<12} {}", "ID", "PAGES", "NAME", "INFO");
    for (idx, v) in resolver.volumes().iter().enumerate() {
        println!("{:<4} {:<12} {:<12} {}", idx, v.range, v.name, v.blurb);
    }
    Ok(())
}
