//! HTTP client wrapper - the two backend calls the dashboard makes

use crate::constants::HTTP_TIMEOUT;
use crate::error::ApiError;
use crate::models::{Device, DeviceId, DeviceList, MessageUpdate};

/// Client for the device backend
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(create_client(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        ApiClient { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn devices_url(&self) -> String {
        format!("{}/api/devices", self.base_url)
    }

    fn message_url(&self, id: &DeviceId) -> String {
        format!(
            "{}/api/{}/message",
            self.base_url,
            urlencoding::encode(id.as_str())
        )
    }

    /// `GET /api/devices`
    pub async fn get_devices(&self) -> Result<Vec<Device>, ApiError> {
        let resp = self.http.get(self.devices_url()).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        let body = resp.text().await?;
        let list: DeviceList = serde_json::from_str(&body)?;
        Ok(list.devices)
    }

    /// `PUT /api/{id}/message`; the response body is ignored
    pub async fn put_message(&self, id: &DeviceId, msg: &str) -> Result<(), ApiError> {
        let body = MessageUpdate {
            msg: msg.to_string(),
        };
        let resp = self
            .http
            .put(self.message_url(id))
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }
        Ok(())
    }
}

/// Create an HTTP client with default configuration
pub fn create_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(HTTP_TIMEOUT)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}
