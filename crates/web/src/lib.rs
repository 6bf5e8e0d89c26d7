pub use crate::common::RouteResult;

use std::env;

use axum::Router;
use database::PgDatabase;
use geosearch::locator::Locator;
use model::{location::Location, venue::Venue};
use tokio::net::TcpListener;

pub mod api;
pub mod common;
pub mod markup;

/// Shared request state. The locators are constructed once at startup and
/// handed in explicitly; handlers never instantiate their own.
#[derive(Clone)]
pub struct WebState {
    pub store: PgDatabase,
    pub locator: Locator<Location>,
    pub venue_locator: Locator<Venue>,
    pub output_format: markup::OutputFormat,
}

pub async fn start_web_server(state: WebState) -> std::io::Result<()> {
    let routes: Router = api::routes(state);

    let address =
        env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8080".to_owned());
    let listener = TcpListener::bind(&address).await?;
    log::info!("listening on {}", address);
    axum::serve(listener, routes.into_make_service()).await?;

    Ok(())
}
