use std::error::Error;

use student_records::{Config, StudentStore};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    let store = StudentStore::seeded();
    info!(port = config.port, records = store.len()?, "starting student service");

    student_records::serve(store, config.addr()).await?;
    Ok(())
}
