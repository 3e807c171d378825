use crate::prelude::*;
use clap::Parser;
use std::path::PathBuf;

mod config;
mod datetime;
mod error;
mod finance;
mod internet;
mod prelude;
mod programming;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "canivete is a CLI to support you everyday, making your life simpler.

Here you can find utility tools to:
  . Calculate compound interests
  . Convert Unix timestamps to human friendly dates
  . Generate UUIDs
  . Convert Medium posts to Markdown"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Configuration file (default: <config dir>/canivete/config.toml)
    #[clap(long, env = "CANIVETE_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Whether to display additional information.
    #[clap(long, env = "CANIVETE_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Finance related tools
    Finance(crate::finance::App),

    /// Date/time tools
    Datetime(crate::datetime::App),

    /// Programming tools
    Programming(crate::programming::App),

    /// Internet tools
    Internet(crate::internet::App),
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let app = App::parse();

    init_logging(app.global.verbose);
    color_eyre::install()?;

    let config = crate::config::load(app.global.config.as_deref())?;

    match app.command {
        SubCommands::Finance(sub_app) => crate::finance::run(sub_app, app.global, &config).await,
        SubCommands::Datetime(sub_app) => crate::datetime::run(sub_app, app.global).await,
        SubCommands::Programming(sub_app) => crate::programming::run(sub_app, app.global).await,
        SubCommands::Internet(sub_app) => crate::internet::run(sub_app, app.global, &config).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
