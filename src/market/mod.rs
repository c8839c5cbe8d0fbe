mod coinmarketcap;
mod fear_greed;

use chrono::{DateTime, Utc};

pub use coinmarketcap::CoinMarketCapClient;
pub use fear_greed::{FearGreedClient, FearGreedIndex};

#[derive(Debug, Clone, PartialEq)]
pub struct CryptoQuote {
    pub symbol: String,
    pub price: f64,
    pub change_24h: f64,
    pub change_7d: f64,
    pub volume_24h: f64,
    pub market_cap: f64,
    pub last_updated: DateTime<Utc>,
}

impl CryptoQuote {
    /// Short reading of the price moves and trading activity, one signal per line.
    pub fn sentiment(&self) -> String {
        let mut signals = Vec::new();

        if self.change_24h > 5.0 {
            signals.push("🚀 Strong bullish move over 24h");
        } else if self.change_24h < -5.0 {
            signals.push("📉 Strong bearish move over 24h");
        }

        if self.change_7d > 10.0 {
            signals.push("📈 Very positive 7 day trend");
        } else if self.change_7d < -10.0 {
            signals.push("⚠️ Very negative 7 day trend");
        }

        if self.volume_24h > self.market_cap * 0.1 {
            signals.push("💫 Heavy volume, strong activity");
        }

        if signals.is_empty() {
            "😐 Stable market".to_string()
        } else {
            signals.join("\n")
        }
    }
}
