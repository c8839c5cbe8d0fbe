use poise::serenity_prelude::{ClientBuilder, GatewayIntents};
use tracing::{error, info, warn};

use config::Config;
use deals::DealsClient;
use discord::{Data, create_framework};
use error::AppError;
use market::{CoinMarketCapClient, FearGreedClient};
use riot::RiotClient;

mod config;
mod deals;
mod discord;
mod error;
mod http;
mod logging;
mod market;
mod riot;
mod shutdown;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    logging::init();

    info!("🤡 Starting...");

    let config = Config::from_env()?;
    let (trigger, shutdown) = shutdown::channel();
    let stopping = shutdown.clone();

    let riot = RiotClient::new(
        config.riot_api_key,
        config.riot_platform,
        config.http_timeout,
        shutdown.clone(),
    )?;
    info!(
        platform = %riot.platform(),
        server = riot.platform().display_name(),
        "🎮 Riot client ready"
    );

    let http = http::build_client(config.http_timeout)?;

    let cmc = config
        .cmc_api_key
        .map(|key| CoinMarketCapClient::new(http.clone(), key, shutdown.clone()));
    if cmc.is_none() {
        info!("💰 CMC_API_KEY not set, price command disabled");
    }

    let deals = config
        .itad_api_key
        .map(|key| DealsClient::new(http.clone(), key, shutdown.clone()));
    if deals.is_none() {
        info!("🎮 ITAD_API_KEY not set, deals command disabled");
    }

    let data = Data {
        riot,
        cmc,
        fear_greed: FearGreedClient::new(http, shutdown),
        deals,
        clown_image: config.clown_image_path,
        prefix: config.command_prefix,
    };

    let intents = GatewayIntents::non_privileged() | GatewayIntents::MESSAGE_CONTENT;
    let mut client = ClientBuilder::new(config.discord_token, intents)
        .framework(create_framework(data))
        .await?;

    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!(error = %err, "❌ Could not listen for Ctrl-C");
            return;
        }
        info!("🛑 Shutdown requested");
        trigger.trigger();
        shard_manager.shutdown_all().await;
    });

    info!("🌐 Connecting to the Discord gateway");
    client.start().await?;

    if stopping.is_triggered() {
        info!("👋 Bye");
    } else {
        warn!("🌐 Gateway connection closed without a shutdown request");
    }
    Ok(())
}
