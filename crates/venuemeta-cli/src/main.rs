//! Command-line front end for the venue metadata library.
//!
//! Emits JSON on stdout so the commands can be piped into ingestion
//! scripts; absence results are emitted as JSON `null` rather than a
//! non-zero exit, matching the library's "no match is normal" contract.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::json;

use venuemeta_classify::GeoClassifier;
use venuemeta_core::{load_countries, LocationSignal};
use venuemeta_extract::{extract_coordinates, extract_venue_name};

#[derive(Debug, Parser)]
#[command(name = "venuemeta")]
#[command(about = "Venue metadata classification and extraction")]
struct Cli {
    /// YAML country table replacing the built-in markets.
    #[arg(long, global = true, env = "VENUEMETA_COUNTRIES_FILE")]
    countries_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Classify a location signal into a supported market country.
    Classify {
        #[arg(long)]
        url: Option<String>,
        /// IANA timezone name, e.g. Asia/Bahrain.
        #[arg(long)]
        timezone: Option<String>,
        /// Three-letter currency code, e.g. BHD.
        #[arg(long)]
        currency: Option<String>,
    },
    /// Recover a venue name from an event image URL.
    VenueName {
        image_url: String,
        event_id: u64,
    },
    /// Extract latitude/longitude from a maps share URL.
    Coords { url: String },
    /// List supported country names in table order.
    Countries {
        /// Omit this country (e.g. the home market) from the list.
        #[arg(long)]
        exclude: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let loaded;
    let classifier: &GeoClassifier = match &cli.countries_file {
        Some(path) => {
            loaded = GeoClassifier::new(load_countries(path)?)?;
            &loaded
        }
        None => GeoClassifier::builtin(),
    };

    let output = match cli.command {
        Commands::Classify {
            url,
            timezone,
            currency,
        } => {
            let signal = LocationSignal {
                url,
                timezone,
                currency_code: currency,
            };
            match classifier.classify(&signal) {
                Some(profile) => serde_json::to_value(profile)?,
                None => json!(null),
            }
        }
        Commands::VenueName {
            image_url,
            event_id,
        } => json!(extract_venue_name(Some(&image_url), event_id)),
        Commands::Coords { url } => match extract_coordinates(&url) {
            Some(coordinate) => serde_json::to_value(coordinate)?,
            None => json!(null),
        },
        Commands::Countries { exclude } => match exclude {
            Some(name) => json!(classifier.countries_excluding(&name)),
            None => json!(classifier
                .profiles()
                .iter()
                .map(|p| p.name.as_str())
                .collect::<Vec<_>>()),
        },
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
