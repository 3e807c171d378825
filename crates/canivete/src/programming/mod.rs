pub mod new_uuid;

use crate::prelude::*;

#[derive(Debug, clap::Parser)]
#[command(name = "programming")]
#[command(about = "Programming tools")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Generates UUIDs (or GUIDs)
    #[clap(name = "uuid")]
    #[command(long_about = new_uuid::LONG_ABOUT)]
    Uuid(new_uuid::UuidOptions),
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    match app.command {
        Commands::Uuid(options) => new_uuid::run(options, global),
    }
}
