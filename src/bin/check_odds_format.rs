use anyhow::Result;
use tracing::info;

use matchday_tools::api::http_client;
use matchday_tools::config::{Config, Setting};
use matchday_tools::db::StorageClient;
use matchday_tools::jobs::check_odds_format;

#[tokio::main]
async fn main() -> Result<()> {
    matchday_tools::init_logging("check_odds_format=info,matchday_tools=info,warn");

    let config = Config::from_env()?;
    config.require(&[Setting::StorageUrl, Setting::StorageAnonKey])?;

    let store = StorageClient::new(
        http_client(config.request_timeout)?,
        config.get(Setting::StorageUrl)?,
        config.get(Setting::StorageAnonKey)?,
    );

    let report = check_odds_format(&store).await?;

    info!(
        "Checked {} records: {} canonical, {} legacy, {} unrecognized",
        report.total(),
        report.canonical,
        report.legacy,
        report.unrecognized
    );
    if report.needs_migration() {
        info!("Run migrate_odds to convert legacy records");
    }

    Ok(())
}
