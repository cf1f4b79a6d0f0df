use anyhow::Result;
use chrono::Local;
use tracing::info;

use matchday_tools::api::{http_client, ApiFootballClient};
use matchday_tools::config::{Config, ImportConfig, Setting};
use matchday_tools::db::StorageClient;
use matchday_tools::jobs::{PopulateMatchesJob, PopulateSettings};

#[tokio::main]
async fn main() -> Result<()> {
    matchday_tools::init_logging("populate_matches=info,matchday_tools=info,warn");

    let config = Config::from_env()?;
    config.require(&[
        Setting::StorageUrl,
        Setting::StorageServiceKey,
        Setting::ApiFootballKey,
    ])?;
    let import = ImportConfig::from_env()?;

    info!("Starting match population");

    let client = http_client(config.request_timeout)?;
    let source = ApiFootballClient::new(
        client.clone(),
        &config.api_football_url,
        config.get(Setting::ApiFootballKey)?,
    );
    let store = StorageClient::new(
        client,
        config.get(Setting::StorageUrl)?,
        config.get(Setting::StorageServiceKey)?,
    );

    let settings = PopulateSettings::window(
        import.leagues,
        import.season,
        Local::now().date_naive(),
        import.days_ahead,
    );

    let summary = PopulateMatchesJob::new(source, store, settings).run().await;

    info!("Saved {} matches", summary.saved);
    if summary.save_errors > 0 {
        info!("Failed to save {} matches", summary.save_errors);
    }

    Ok(())
}
