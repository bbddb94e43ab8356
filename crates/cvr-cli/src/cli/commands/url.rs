//! `cvr url <PAGE>` – print the image URL for a page number.

use anyhow::Result;
use cvr_core::resolver::VolumeResolver;

pub fn run_url(resolver: &VolumeResolver, page: u32) -> Result<()> {
    println!("{}", resolver.image_url(page)?);
    Ok(())
}
