pub mod medium_to_md;

use crate::prelude::*;
use canivete_core::config::Config;

#[derive(Debug, clap::Parser)]
#[command(name = "internet")]
#[command(about = "Internet tools")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Converts a medium post to markdown
    #[clap(name = "medium2md")]
    #[command(long_about = medium_to_md::LONG_ABOUT, after_help = medium_to_md::EXAMPLES)]
    MediumToMd(medium_to_md::MediumToMdOptions),
}

pub async fn run(app: App, global: crate::Global, config: &Config) -> Result<()> {
    match app.command {
        Commands::MediumToMd(options) => medium_to_md::run(options, global, config).await,
    }
}
