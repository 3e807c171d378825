use crate::prelude::{eprintln, println, *};
use canivete_core::programming::{build_uuid_output, UuidOutput};
use serde::{Deserialize, Serialize};

pub const LONG_ABOUT: &str = "Generates UUIDs (or GUIDs).

UUID also known as GUID is a 16 byte or 128-bit number.
It is meant to uniquely identify something. Generated UUIDs are random (version 4).";

#[derive(Debug, Clone, Copy, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UuidFormat {
    /// 8-4-4-4-12 hex groups (default)
    Hyphenated,
    /// 32 hex digits without hyphens
    Simple,
    /// urn:uuid: prefixed
    Urn,
}

impl From<UuidFormat> for canivete_core::programming::UuidFormat {
    fn from(f: UuidFormat) -> Self {
        match f {
            UuidFormat::Hyphenated => canivete_core::programming::UuidFormat::Hyphenated,
            UuidFormat::Simple => canivete_core::programming::UuidFormat::Simple,
            UuidFormat::Urn => canivete_core::programming::UuidFormat::Urn,
        }
    }
}

#[derive(Debug, clap::Args, Serialize, Deserialize, Clone)]
pub struct UuidOptions {
    /// Number of UUIDs to generate
    #[arg(short, long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
    pub count: u32,

    /// Text layout of the generated UUIDs
    #[arg(short, long, default_value = "hyphenated")]
    pub format: UuidFormat,

    /// Use uppercase hex digits
    #[arg(short, long)]
    pub uppercase: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(options: UuidOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        eprintln!("Generating {} UUID(s)", options.count);
    }

    let output = uuid_data(&options);

    if options.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        for id in &output.uuids {
            println!("{}", id);
        }
    }

    Ok(())
}

/// Public data function - generate random UUIDs
pub fn uuid_data(options: &UuidOptions) -> UuidOutput {
    let ids: Vec<::uuid::Uuid> = (0..options.count).map(|_| ::uuid::Uuid::new_v4()).collect();
    build_uuid_output(&ids, options.format.into(), options.uppercase)
}
