//! CLI options.

use chrono::NaiveDate;
use clap::Parser;

use crate::prediction::endpoint::{self, resolve_api_base};
use crate::prediction::models::{AssetKind, Material, SoilType};

pub mod parsers;

#[derive(Parser)]
#[clap(version, about)]
pub struct Opts {
    /// Sentry DSN
    #[clap(long, env = "TUNNELVISION_SENTRY_DSN")]
    pub sentry_dsn: Option<String>,

    /// Sentry traces sample rate
    #[clap(long, env = "TUNNELVISION_TRACES_SAMPLE_RATE", default_value = "0.0")]
    pub traces_sample_rate: f32,

    #[clap(subcommand)]
    pub subcommand: Subcommand,
}

#[derive(clap::Subcommand)]
pub enum Subcommand {
    Web(WebOpts),
    Predict(PredictOpts),
}

/// Runs the web application
#[derive(clap::Args)]
pub struct WebOpts {
    #[clap(flatten)]
    pub connections: ConnectionOpts,

    /// Web application bind host
    #[clap(long, default_value = "::")]
    pub host: String,

    /// Web application bind port
    #[clap(short, long, default_value = "8081")]
    pub port: u16,
}

/// Requests a one-shot risk assessment and prints it
#[derive(clap::Args)]
pub struct PredictOpts {
    #[clap(flatten)]
    pub connections: ConnectionOpts,

    #[clap(flatten)]
    pub asset: AssetOpts,

    /// Fill the exact location from the geolocation service
    #[clap(long)]
    pub locate: bool,
}

/// Upstream services shared between the subcommands.
#[derive(clap::Args)]
pub struct ConnectionOpts {
    /// Prediction service origin, resolved from the environment when omitted
    #[clap(long, env = "TUNNELVISION_PREDICT_API")]
    pub predict_api: Option<String>,

    /// Geolocation service origin
    #[clap(long, env = "TUNNELVISION_GEOLOCATION_API", default_value = "http://ip-api.com")]
    pub geolocation_api: String,
}

impl ConnectionOpts {
    /// Prediction service origin: the explicit option wins,
    /// otherwise it is derived from the current hostname.
    pub fn predict_api(&self) -> String {
        match &self.predict_api {
            Some(base) => base.trim_end_matches('/').to_string(),
            None => {
                let hostname = std::env::var("HOSTNAME").unwrap_or_default();
                match resolve_api_base(&hostname) {
                    base if base.is_empty() => endpoint::LOOPBACK_API.to_string(),
                    base => base,
                }
            }
        }
    }
}

/// The asset being assessed.
#[derive(clap::Args)]
pub struct AssetOpts {
    /// Asset kind
    #[clap(long = "type", value_parser = parsers::asset_kind)]
    pub kind: AssetKind,

    /// Asset material
    #[clap(long, value_parser = parsers::material)]
    pub material: Material,

    /// Surrounding soil type
    #[clap(long, value_parser = parsers::soil_type)]
    pub soil_type: SoilType,

    /// Region name, required unless an exact location is given
    #[clap(long)]
    pub region: Option<String>,

    /// Exact latitude
    #[clap(long, requires = "longitude", value_parser = parsers::latitude)]
    pub latitude: Option<f64>,

    /// Exact longitude
    #[clap(long, requires = "latitude", value_parser = parsers::longitude)]
    pub longitude: Option<f64>,

    /// Last repair date (`YYYY-MM-DD`)
    #[clap(long, value_parser = parsers::input_date)]
    pub last_repair_date: Option<NaiveDate>,

    /// Snapshot date (`YYYY-MM-DD`), the service defaults it to today
    #[clap(long, value_parser = parsers::input_date)]
    pub snapshot_date: Option<NaiveDate>,

    /// Installation year
    #[clap(long, value_parser = parsers::install_year)]
    pub install_year: i32,

    /// Segment length in metres
    #[clap(long, value_parser = parsers::length_m)]
    pub length_m: Option<f64>,
}
