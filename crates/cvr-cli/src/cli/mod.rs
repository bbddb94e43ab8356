//! CLI for the cvr webcomic volume resolver.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use cvr_core::config;
use cvr_core::resolver::VolumeResolver;

use commands::{run_latest, run_range, run_url, run_volumes};

/// Top-level CLI for the cvr volume resolver.
#[derive(Debug, Parser)]
#[command(name = "cvr")]
#[command(about = "cvr: volume range resolver for webcomic archives", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the page number of the newest published comic.
    Latest,

    /// Resolve the page range of a volume against the live site.
    Range {
        /// Volume index into the configured table (0 = oldest).
        volume: usize,
    },

    /// List the configured volume table.
    Volumes,

    /// Print the image URL for a page number.
    Url {
        /// Page number.
        page: u32,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let resolver = VolumeResolver::new(cfg);

        match cli.command {
            CliCommand::Latest => run_latest(resolver).await?,
            CliCommand::Range { volume } => run_range(resolver, volume).await?,
            CliCommand::Volumes => run_volumes(&resolver)?,
            CliCommand::Url { page } => run_url(&resolver, page)?,
        }

        Ok(())
    }
}
