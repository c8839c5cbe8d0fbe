use serde::Deserialize;

use crate::error::ServiceError;
use crate::http::get_json;
use crate::shutdown::Shutdown;

const SERVICE: &str = "alternative.me";
const URL: &str = "https://api.alternative.me/fng/";

#[derive(Debug, Deserialize)]
struct FngResponse {
    data: Vec<FngEntryDto>,
}

#[derive(Debug, Deserialize)]
struct FngEntryDto {
    value: String,
    value_classification: String,
}

/// Crypto Fear & Greed index, 0 (extreme fear) to 100 (extreme greed).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FearGreedIndex {
    pub value: u8,
    pub classification: String,
}

impl FearGreedIndex {
    pub fn emoji(&self) -> &'static str {
        match self.classification.as_str() {
            "Extreme Fear" => "😱",
            "Fear" => "😨",
            "Neutral" => "😐",
            "Greed" => "🤑",
            "Extreme Greed" => "🤩",
            _ => "",
        }
    }
}

#[derive(Debug)]
pub struct FearGreedClient {
    http: reqwest::Client,
    url: String,
    shutdown: Shutdown,
}

impl FearGreedClient {
    pub fn new(http: reqwest::Client, shutdown: Shutdown) -> Self {
        Self {
            http,
            url: URL.to_string(),
            shutdown,
        }
    }

    #[cfg(test)]
    fn with_url(mut self, url: String) -> Self {
        self.url = url;
        self
    }

    pub async fn get_index(&self) -> Result<FearGreedIndex, ServiceError> {
        let response: FngResponse = get_json(SERVICE, self.http.get(&self.url), &self.shutdown).await?;

        let missing = || ServiceError::Missing {
            service: SERVICE,
            query: "latest index".into(),
        };

        let latest = response.data.into_iter().next().ok_or_else(missing)?;
        let value = latest.value.trim().parse().map_err(|_| missing())?;

        Ok(FearGreedIndex {
            value,
            classification: latest.value_classification,
        })
    }
}
