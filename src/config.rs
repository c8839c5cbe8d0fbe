use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::AppError;
use crate::riot::Platform;

#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    pub riot_api_key: String,
    pub cmc_api_key: Option<String>,
    pub itad_api_key: Option<String>,
    pub riot_platform: Platform,
    pub command_prefix: String,
    pub http_timeout: Duration,
    pub clown_image_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        const DEFAULT_COMMAND_PREFIX: &str = "!";
        const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;
        const DEFAULT_CLOWN_IMAGE_PATH: &str = "image/clown.webp";

        let discord_token = var("DISCORD_TOKEN")
            .ok_or_else(|| AppError::Config("DISCORD_TOKEN must be set".into()))?;

        let riot_api_key = var("RIOT_API_KEY")
            .ok_or_else(|| AppError::Config("RIOT_API_KEY must be set".into()))?;

        let cmc_api_key = var("CMC_API_KEY").filter(|k| !k.is_empty());
        let itad_api_key = var("ITAD_API_KEY").filter(|k| !k.is_empty());

        let riot_platform = match var("RIOT_PLATFORM") {
            Some(raw) => raw
                .parse()
                .map_err(|err| AppError::Config(format!("RIOT_PLATFORM: {err}")))?,
            None => Platform::EUW1,
        };

        let command_prefix =
            var("COMMAND_PREFIX").unwrap_or_else(|| DEFAULT_COMMAND_PREFIX.into());

        let http_timeout = var("HTTP_TIMEOUT_SECS")
            .and_then(|v| v.parse().ok())
            .filter(|secs: &u64| *secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS));

        let clown_image_path = var("CLOWN_IMAGE_PATH")
            .unwrap_or_else(|| DEFAULT_CLOWN_IMAGE_PATH.into())
            .into();

        Ok(Self {
            discord_token,
            riot_api_key,
            cmc_api_key,
            itad_api_key,
            riot_platform,
            command_prefix,
            http_timeout,
            clown_image_path,
        })
    }
}
