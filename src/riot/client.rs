use std::fmt::Debug;
use std::time::Duration;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::error::{Endpoint, LookupError};
use crate::riot::region::Platform;
use crate::shutdown::Shutdown;

/// Shared Riot API client, built once at start-up.
///
/// The inner [`reqwest::Client`] pools connections; nothing request specific is stored here.
pub struct RiotClient {
    http: reqwest::Client,
    /// Riot API Key
    key: String,
    platform: Platform,
    platform_url: String,
    region_url: String,
    shutdown: Shutdown,
}

impl std::fmt::Debug for RiotClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RiotClient")
            .field("platform", &self.platform)
            .field("key", &"<redacted>")
            .finish()
    }
}

impl RiotClient {
    pub fn new(
        key: String,
        platform: Platform,
        timeout: Duration,
        shutdown: Shutdown,
    ) -> Result<Self, reqwest::Error> {
        let http = crate::http::build_client(timeout)?;

        Ok(Self {
            http,
            key,
            platform,
            platform_url: platform.base_url(),
            region_url: platform.to_region().base_url(),
            shutdown,
        })
    }

    /// Points both routing levels at `base_url`.
    #[cfg(test)]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.platform_url = base_url.to_string();
        self.region_url = base_url.to_string();
        self
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub(crate) fn platform_url(&self) -> &str {
        &self.platform_url
    }

    pub(crate) fn region_url(&self) -> &str {
        &self.region_url
    }

    /// GET `url` and decode a JSON body.
    ///
    /// 404 and 403 are reported as [`LookupError::NotFound`] and [`LookupError::Forbidden`];
    /// callers refine them when the endpoint gives them another meaning.
    pub(crate) async fn get<T: DeserializeOwned + Debug>(
        &self,
        url: &str,
        endpoint: Endpoint,
    ) -> Result<T, LookupError> {
        tracing::trace!(%endpoint, url, "riot request");

        let request = async {
            let res = self
                .http
                .get(url)
                .header("X-Riot-Token", &self.key)
                .send()
                .await
                .map_err(|e| transport_error(endpoint, e))?;

            match res.status() {
                StatusCode::OK => res.json::<T>().await.map_err(|e| {
                    LookupError::upstream(endpoint, Some(StatusCode::OK), format!("malformed body: {e}"))
                }),
                StatusCode::NOT_FOUND => Err(LookupError::NotFound(endpoint)),
                StatusCode::FORBIDDEN => Err(LookupError::Forbidden(endpoint)),
                status => {
                    let body = res.text().await.unwrap_or_default();
                    Err(LookupError::upstream(endpoint, Some(status), body))
                }
            }
        };

        match self.shutdown.run(request).await {
            Some(result) => result,
            None => Err(LookupError::Cancelled),
        }
    }
}

fn transport_error(endpoint: Endpoint, err: reqwest::Error) -> LookupError {
    let reason = if err.is_timeout() {
        "timed out".to_string()
    } else {
        err.to_string()
    };
    LookupError::upstream(endpoint, err.status(), reason)
}
