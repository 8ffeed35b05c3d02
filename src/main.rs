use clap::Parser;

use crate::opts::{Opts, Subcommand};
use crate::prelude::*;

mod geolocation;
mod opts;
mod prediction;
mod prelude;
mod tracing;
mod web;

fn main() -> Result {
    let opts = Opts::parse();
    let _sentry_guard = crate::tracing::init(opts.sentry_dsn.clone(), opts.traces_sample_rate)?;

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(run_subcommand(opts))
}

async fn run_subcommand(opts: Opts) -> Result {
    match opts.subcommand {
        Subcommand::Web(opts) => web::run(opts).await,
        Subcommand::Predict(opts) => prediction::run(opts).await,
    }
}
