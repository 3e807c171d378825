use crate::prelude::{eprintln, println, *};
use canivete_core::datetime::{format_unix_timestamp, TimestampOutput, TimestampUnit};
use serde::{Deserialize, Serialize};

pub const LONG_ABOUT: &str = "Converts a Unix timestamp to human friendly format.

The Unix timestamp is a way to track time as a running total of seconds.
This count starts at the Unix Epoch on January 1st, 1970 at UTC.";

pub const EXAMPLES: &str = "Examples:
  canivete datetime fromunix --value 1638964800
  canivete datetime fromunix -v 1638964800
  canivete datetime fromunix -v 1638964800123 --millis --json";

#[derive(Debug, clap::Args, Serialize, Deserialize, Clone)]
pub struct FromUnixOptions {
    /// the unix timestamp
    #[arg(short, long, allow_negative_numbers = true)]
    pub value: i64,

    /// Interpret the value as milliseconds since the epoch
    #[arg(long)]
    pub millis: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(options: FromUnixOptions, global: crate::Global) -> Result<()> {
    let output = from_unix_data(&options)?;

    if global.verbose {
        eprintln!("RFC 3339: {}", output.rfc3339);
    }

    if options.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", output.utc);
    }

    Ok(())
}

/// Public data function - render the timestamp
pub fn from_unix_data(options: &FromUnixOptions) -> Result<TimestampOutput> {
    let unit = if options.millis {
        TimestampUnit::Milliseconds
    } else {
        TimestampUnit::Seconds
    };

    format_unix_timestamp(options.value, unit).map_err(|e| Error::Validation(e).into())
}
