use anyhow::Result;

use matchday_tools::api::http_client;
use matchday_tools::config::{Config, Setting};
use matchday_tools::db::StorageClient;
use matchday_tools::jobs::check_access;

#[tokio::main]
async fn main() -> Result<()> {
    matchday_tools::init_logging("check_access=info,matchday_tools=info,warn");

    let config = Config::from_env()?;
    config.require(&[Setting::StorageUrl, Setting::StorageAnonKey])?;

    let client = http_client(config.request_timeout)?;
    let url = config.get(Setting::StorageUrl)?;

    let anon = StorageClient::new(client.clone(), url, config.get(Setting::StorageAnonKey)?);
    let service = config
        .storage_service_key
        .as_deref()
        .map(|key| StorageClient::new(client, url, key));

    check_access(&anon, service.as_ref()).await;

    Ok(())
}
