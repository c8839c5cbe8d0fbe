use std::time::Duration;

use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

use crate::error::ServiceError;
use crate::shutdown::Shutdown;

pub fn build_client(timeout: Duration) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder().timeout(timeout).build()
}

/// Sends `request` and decodes its JSON body, for the providers other than Riot.
pub async fn get_json<T: DeserializeOwned>(
    service: &'static str,
    request: RequestBuilder,
    shutdown: &Shutdown,
) -> Result<T, ServiceError> {
    let call = async {
        let res = request
            .send()
            .await
            .map_err(|source| ServiceError::Transport { service, source })?;

        match res.status() {
            StatusCode::OK => res
                .json::<T>()
                .await
                .map_err(|source| ServiceError::Transport { service, source }),
            status => Err(ServiceError::Status { service, status }),
        }
    };

    shutdown
        .run(call)
        .await
        .unwrap_or(Err(ServiceError::Cancelled { service }))
}
