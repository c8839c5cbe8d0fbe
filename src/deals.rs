//! Discounted game listings from IsThereAnyDeal.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::ServiceError;
use crate::http::get_json;
use crate::shutdown::Shutdown;

const SERVICE: &str = "IsThereAnyDeal";
const URL: &str = "https://api.isthereanydeal.com/v01/deals/list/";
const SHOPS: &str = "steam,epic,gog,ubisoft,origin,rockstar";
const LIMIT: &str = "10";
const MIN_PRICE_CUT: &str = "50";

#[derive(Debug, Deserialize)]
struct DealsResponse {
    data: Option<DealList>,
    list: Option<Vec<DealDto>>,
}

#[derive(Debug, Deserialize)]
struct DealList {
    #[serde(default)]
    list: Vec<DealDto>,
}

#[derive(Debug, Deserialize)]
struct DealDto {
    title: String,
    price_old: f64,
    price_new: f64,
    price_cut: Option<u32>,
    shop: ShopDto,
    urls: DealUrlsDto,
    #[serde(alias = "price_cut_end")]
    expiry: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct ShopDto {
    name: String,
}

#[derive(Debug, Deserialize)]
struct DealUrlsDto {
    game: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Deal {
    pub title: String,
    pub shop: String,
    pub price_old: f64,
    pub price_new: f64,
    /// Discount in percent.
    pub cut: u32,
    pub ends_at: Option<DateTime<Utc>>,
    pub url: String,
}

impl From<DealDto> for Deal {
    fn from(dto: DealDto) -> Self {
        let cut = dto.price_cut.unwrap_or_else(|| {
            if dto.price_old > 0.0 {
                (100.0 * (1.0 - dto.price_new / dto.price_old)).round() as u32
            } else {
                0
            }
        });

        Self {
            title: dto.title,
            shop: dto.shop.name,
            price_old: dto.price_old,
            price_new: dto.price_new,
            cut,
            ends_at: dto.expiry.and_then(|ts| DateTime::from_timestamp(ts, 0)),
            url: dto.urls.game,
        }
    }
}

impl Deal {
    /// `Title (Shop): 59.99€ -> 19.99€ until 01/03/2024`
    pub fn summary(&self) -> String {
        let mut line = format!(
            "{} ({}): {:.2}€ -> {:.2}€ (-{}%)",
            self.title, self.shop, self.price_old, self.price_new, self.cut
        );
        if let Some(end) = self.ends_at {
            line.push_str(&format!(" until {}", end.format("%d/%m/%Y")));
        }
        line
    }
}

pub struct DealsClient {
    http: reqwest::Client,
    key: String,
    url: String,
    shutdown: Shutdown,
}

impl std::fmt::Debug for DealsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DealsClient")
            .field("url", &self.url)
            .finish_non_exhaustive()
    }
}

impl DealsClient {
    pub fn new(http: reqwest::Client, key: String, shutdown: Shutdown) -> Self {
        Self {
            http,
            key,
            url: URL.to_string(),
            shutdown,
        }
    }

    #[cfg(test)]
    fn with_url(mut self, url: String) -> Self {
        self.url = url;
        self
    }

    /// Best current discounts on the French stores.
    pub async fn get_deals(&self) -> Result<Vec<Deal>, ServiceError> {
        let request = self.http.get(&self.url).query(&[
            ("key", self.key.as_str()),
            ("region", "fr"),
            ("country", "FR"),
            ("shops", SHOPS),
            ("limit", LIMIT),
            ("price_cut", MIN_PRICE_CUT),
        ]);

        let response: DealsResponse = get_json(SERVICE, request, &self.shutdown).await?;

        let list = response
            .data
            .map(|data| data.list)
            .or(response.list)
            .unwrap_or_default();

        Ok(list.into_iter().map(Deal::from).collect())
    }
}
