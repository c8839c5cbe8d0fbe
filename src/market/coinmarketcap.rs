use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::trace;

use super::CryptoQuote;
use crate::error::ServiceError;
use crate::http::get_json;
use crate::shutdown::Shutdown;

const SERVICE: &str = "CoinMarketCap";
const BASE_URL: &str = "https://pro-api.coinmarketcap.com/v2";
const CONVERT: &str = "USD";

/// CoinMarketCap answers a symbol with either one asset or a list of assets sharing it.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    /// The first listed asset is the most relevant one for a symbol.
    fn into_first(self) -> Option<T> {
        match self {
            Self::Many(items) => items.into_iter().next(),
            Self::One(item) => Some(item),
        }
    }
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: HashMap<String, OneOrMany<T>>,
}

impl<T> Envelope<T> {
    fn take(mut self, symbol: &str) -> Option<T> {
        self.data.remove(symbol).and_then(OneOrMany::into_first)
    }
}

#[derive(Debug, Deserialize)]
struct AssetDto {
    quote: HashMap<String, QuoteDto>,
}

#[derive(Debug, Deserialize)]
struct QuoteDto {
    price: Option<f64>,
    percent_change_24h: Option<f64>,
    percent_change_7d: Option<f64>,
    volume_24h: Option<f64>,
    market_cap: Option<f64>,
    last_updated: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
struct InfoDto {
    logo: Option<String>,
}

pub struct CoinMarketCapClient {
    http: reqwest::Client,
    key: String,
    base_url: String,
    shutdown: Shutdown,
}

impl std::fmt::Debug for CoinMarketCapClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoinMarketCapClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl CoinMarketCapClient {
    pub fn new(http: reqwest::Client, key: String, shutdown: Shutdown) -> Self {
        Self {
            http,
            key,
            base_url: BASE_URL.to_string(),
            shutdown,
        }
    }

    #[cfg(test)]
    fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    fn request(&self, path: &str, query: &[(&str, &str)]) -> reqwest::RequestBuilder {
        self.http
            .get(format!("{}{}", self.base_url, path))
            .header("X-CMC_PRO_API_KEY", &self.key)
            .query(query)
    }

    /// Latest USD quote of `symbol` (upper case).
    pub async fn get_quote(&self, symbol: &str) -> Result<CryptoQuote, ServiceError> {
        trace!(symbol, "fetching quote");
        let envelope: Envelope<AssetDto> = get_json(
            SERVICE,
            self.request(
                "/cryptocurrency/quotes/latest",
                &[("symbol", symbol), ("convert", CONVERT)],
            ),
            &self.shutdown,
        )
        .await?;

        let missing = || ServiceError::Missing {
            service: SERVICE,
            query: symbol.to_string(),
        };

        let mut asset = envelope.take(symbol).ok_or_else(missing)?;
        let quote = asset.quote.remove(CONVERT).ok_or_else(missing)?;
        let price = quote.price.ok_or_else(missing)?;

        Ok(CryptoQuote {
            symbol: symbol.to_string(),
            price,
            change_24h: quote.percent_change_24h.unwrap_or_default(),
            change_7d: quote.percent_change_7d.unwrap_or_default(),
            volume_24h: quote.volume_24h.unwrap_or_default(),
            market_cap: quote.market_cap.unwrap_or_default(),
            last_updated: quote.last_updated,
        })
    }

    /// Logo URL of `symbol`, `None` when CoinMarketCap has none.
    pub async fn get_logo(&self, symbol: &str) -> Result<Option<String>, ServiceError> {
        let envelope: Envelope<InfoDto> = get_json(
            SERVICE,
            self.request("/cryptocurrency/info", &[("symbol", symbol)]),
            &self.shutdown,
        )
        .await?;

        Ok(envelope.take(symbol).and_then(|info| info.logo))
    }
}
