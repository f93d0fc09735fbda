mod api;
mod catalog;
mod comparison;
mod database;
mod filter;
mod handoff;
mod listing;
mod record;
mod selection;
mod session;
mod settings;
mod web;

use std::process::exit;

use clap::Parser;
use tracing::{error, info};

use crate::{
    database::Database,
    settings::{Args, Settings},
};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();
    info!("Oncology Trial Dashboard Server");

    let args = Args::parse();
    let settings = match Settings::load(args.config.as_deref()) {
        Ok(ret) => ret,
        Err(error) => {
            error!("Problem while loading settings. {error}");
            exit(1);
        }
    };

    let database = match Database::connect(&settings.store.path) {
        Ok(ret) => ret,
        Err(error) => {
            error!("Problem while opening the store. {error:#}");
            exit(1);
        }
    };
    match database.clear_transient() {
        Ok(0) => {}
        Ok(dropped) => info!("Dropped {dropped} session entries left from a previous run"),
        Err(error) => error!("Problem while clearing stale session entries. {error:#}"),
    }

    let schema = api::schema(database.clone(), settings.handoff.retry_delay());
    web::serve(
        schema,
        settings.web.address,
        args.cert.zip(args.key),
        web::shutdown_signal(),
    )
    .await;

    if let Err(error) = database.flush().await {
        error!("Problem while flushing the store. {error:#}");
    }
}
