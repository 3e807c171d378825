pub mod compound_interests;

use crate::prelude::*;
use canivete_core::config::Config;

#[derive(Debug, clap::Parser)]
#[command(name = "finance")]
#[command(about = "Finance related tools")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Calculates compound interests
    #[clap(name = "compoundinterests")]
    #[command(
        long_about = compound_interests::LONG_ABOUT,
        after_help = compound_interests::EXAMPLES
    )]
    CompoundInterests(compound_interests::CompoundInterestsOptions),
}

pub async fn run(app: App, global: crate::Global, config: &Config) -> Result<()> {
    match app.command {
        Commands::CompoundInterests(options) => compound_interests::run(options, global, config),
    }
}
