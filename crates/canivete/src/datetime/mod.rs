pub mod from_unix;

use crate::prelude::*;

#[derive(Debug, clap::Parser)]
#[command(name = "datetime")]
#[command(about = "Date/time tools")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Converts a Unix timestamp to human friendly format
    #[clap(name = "fromunix")]
    #[command(long_about = from_unix::LONG_ABOUT, after_help = from_unix::EXAMPLES)]
    FromUnix(from_unix::FromUnixOptions),
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    match app.command {
        Commands::FromUnix(options) => from_unix::run(options, global),
    }
}
