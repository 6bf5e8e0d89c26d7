use std::env;

use database::{DatabaseConnectionInfo, PgDatabase};
use geosearch::locator::Locator;
use web::{markup::OutputFormat, start_web_server, WebState};

#[tokio::main]
async fn main() {
    env_logger::init();

    // database
    let database_connection_info = DatabaseConnectionInfo::from_env()
        .expect("expected database connection info in env.");
    let store = PgDatabase::connect(database_connection_info)
        .await
        .expect("could not connect to database.");

    // web server
    let output_format = OutputFormat::from_name(
        &env::var("OUTPUT_FORMAT").unwrap_or_else(|_| "xml".to_owned()),
    );
    let web_future = start_web_server(WebState {
        store,
        locator: Locator::locations(),
        venue_locator: Locator::venues(),
        output_format,
    });

    let _ = web_future.await;
}
