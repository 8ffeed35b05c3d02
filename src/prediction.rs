//! Client side of the external failure-risk prediction service,
//! and the one-shot `predict` subcommand built on top of it.

use crate::geolocation::{Geolocator, IpApiLocator};
use crate::opts::PredictOpts;
use crate::prediction::requests::{format_wire_date, PredictionRequest};
use crate::prelude::*;

pub mod client;
pub mod endpoint;
pub mod models;
pub mod requests;
pub mod responses;

pub use client::{Client, PredictError};

/// Runs a one-shot assessment and prints it.
pub async fn run(opts: PredictOpts) -> Result {
    sentry::configure_scope(|scope| scope.set_tag("app", "predict"));

    let asset = opts.asset;
    let exact_location = match (asset.latitude, asset.longitude) {
        (Some(latitude), Some(longitude)) => Some((latitude, longitude)),
        _ if opts.locate => {
            let locator = IpApiLocator::new(&opts.connections.geolocation_api)?;
            let position = locator.current_position().await?;
            info!(
                latitude = position.display_latitude().as_str(),
                longitude = position.display_longitude().as_str(),
                "resolved the current position"
            );
            Some((position.latitude, position.longitude))
        }
        _ => None,
    };

    let request = PredictionRequest {
        kind: asset.kind,
        material: asset.material,
        soil_type: asset.soil_type,
        region: asset.region,
        exact_location,
        last_repair_date: asset.last_repair_date.map(format_wire_date),
        snapshot_date: asset.snapshot_date.map(format_wire_date),
        install_year: asset.install_year,
        length_m: asset.length_m,
    };
    request.validate()?;

    let client = Client::new(opts.connections.predict_api())?;
    let start_instant = Instant::now();
    let response = client.predict(&request).await?;
    info!(elapsed = ?start_instant.elapsed(), "done");

    println!("Risk:               {}", response.risk_badge());
    println!("Risk score:         {} (gauge {})", response.risk_score, response.gauge_value());
    println!("Failure type:       {}", response.failure_type);
    println!("Priority:           {}", response.priority);
    println!("Recommended action: {}", response.recommended_action);
    Ok(())
}
