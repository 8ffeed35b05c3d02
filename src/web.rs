//! The web application: the asset form, the submission handler
//! and the locate control.

use std::net::IpAddr;
use std::str::FromStr;

use poem::listener::TcpListener;
use poem::middleware::{CatchPanic, Tracing};
use poem::{get, post, Endpoint, EndpointExt, Response, Route, Server};

use crate::geolocation::IpApiLocator;
use crate::opts::WebOpts;
use crate::prediction;
use crate::prelude::*;
use crate::web::middleware::{ErrorMiddleware, SecurityHeadersMiddleware, SentryMiddleware};
use crate::web::state::State;

pub mod form;
pub mod middleware;
pub mod partials;
pub mod state;
pub mod views;

#[cfg(test)]
mod test;

pub async fn run(opts: WebOpts) -> Result {
    sentry::configure_scope(|scope| scope.set_tag("app", "web"));

    let predictor = prediction::Client::new(opts.connections.predict_api())?;
    let geolocator = Arc::new(IpApiLocator::new(&opts.connections.geolocation_api)?);
    let state = State::new(predictor, geolocator);

    info!(host = opts.host.as_str(), port = opts.port, "listening…");
    Server::new(TcpListener::bind((IpAddr::from_str(&opts.host)?, opts.port)))
        .run_with_graceful_shutdown(
            create_app(state),
            async {
                let _ = tokio::signal::ctrl_c().await;
            },
            None,
        )
        .await?;
    Ok(())
}

pub fn create_app(state: State) -> impl Endpoint<Output = Response> {
    Route::new()
        .at("/", get(views::index::get))
        .at("/assess", post(views::assess::post))
        .at("/locate", post(views::locate::post))
        .data(state)
        .with(Tracing)
        .with(CatchPanic::new())
        .with(ErrorMiddleware)
        .with(SecurityHeadersMiddleware)
        .with(SentryMiddleware)
}
