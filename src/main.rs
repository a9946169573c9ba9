use dotenv::dotenv;
use tracing::{info, warn};

use logistics_backend::app::App;
use logistics_backend::util::logger::Logger;

#[tokio::main]
async fn main() {
    // Load environment variables before logging config reads them
    let dotenv_result = dotenv();

    // Keep the appender guards alive for the lifetime of the process
    let _logger = Logger::new().expect("Failed to initialize logging");

    info!("Starting logistics backend");
    match dotenv_result {
        Ok(_) => info!("Loaded .env file"),
        Err(e) => warn!("No .env file loaded: {} (using system env vars)", e),
    }

    let app = App::new().await;
    app.start().await;
}
