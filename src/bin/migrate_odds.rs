use anyhow::Result;
use tracing::info;

use matchday_tools::api::http_client;
use matchday_tools::config::{Config, Setting};
use matchday_tools::db::StorageClient;
use matchday_tools::jobs::MigrateOddsJob;

#[tokio::main]
async fn main() -> Result<()> {
    matchday_tools::init_logging("migrate_odds=info,matchday_tools=info,warn");

    // Updates need the service_role key
    let config = Config::from_env()?;
    config.require(&[Setting::StorageUrl, Setting::StorageServiceKey])?;

    let store = StorageClient::new(
        http_client(config.request_timeout)?,
        config.get(Setting::StorageUrl)?,
        config.get(Setting::StorageServiceKey)?,
    );

    info!("Migrating odds from {{home, draw, away}} to {{H, U, B}}");
    let summary = MigrateOddsJob::new(store).run().await?;

    info!("Migrated: {}", summary.migrated);
    info!("Skipped (already migrated): {}", summary.skipped);
    info!("Errors: {}", summary.errors);

    Ok(())
}
