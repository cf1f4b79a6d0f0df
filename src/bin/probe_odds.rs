use std::env;

use anyhow::{Context, Result};

use matchday_tools::api::{http_client, ApiFootballClient};
use matchday_tools::config::{Config, Setting};
use matchday_tools::jobs::probe_fixture_odds;

#[tokio::main]
async fn main() -> Result<()> {
    matchday_tools::init_logging("probe_odds=debug,matchday_tools=debug,warn");

    let args: Vec<String> = env::args().collect();
    let fixture_id = parse_fixture_id(&args)?;

    let config = Config::from_env()?;
    config.require(&[Setting::ApiFootballKey])?;

    let source = ApiFootballClient::new(
        http_client(config.request_timeout)?,
        &config.api_football_url,
        config.get(Setting::ApiFootballKey)?,
    );

    probe_fixture_odds(&source, fixture_id).await?;

    Ok(())
}

/// First positional argument is the fixture id
fn parse_fixture_id(args: &[String]) -> Result<i64> {
    let raw = args
        .get(1)
        .context("usage: probe_odds <fixture_id>")?;
    raw.parse()
        .with_context(|| format!("fixture id must be a number, got {:?}", raw))
}
