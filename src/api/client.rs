use std::time::Duration;

use reqwest::Client;

use crate::api::error::FetchError;
use crate::config::ApiConfig;
use crate::model::User;

pub const USER_AGENT: &str = concat!("userdesk/", env!("CARGO_PKG_VERSION"));

/// GET-only client for the users listing.
#[derive(Clone)]
pub struct UsersClient {
    client: Client,
    url: String,
    timeout: Option<Duration>,
}

impl UsersClient {
    pub fn new(url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(FetchError::Setup)?;

        Ok(Self {
            client,
            url: url.into(),
            timeout,
        })
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self, FetchError> {
        Self::new(
            config.users_url.clone(),
            config.timeout_seconds.map(Duration::from_secs),
        )
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch and decode the full user list.
    ///
    /// Without a configured timeout the request may wait indefinitely; the
    /// caller is expected to race it against a cancellation token.
    pub async fn list_users(&self) -> Result<Vec<User>, FetchError> {
        match self.timeout {
            Some(limit) => tokio::time::timeout(limit, self.request())
                .await
                .map_err(|_| FetchError::Timeout {
                    seconds: limit.as_secs(),
                })?,
            None => self.request().await,
        }
    }

    async fn request(&self) -> Result<Vec<User>, FetchError> {
        let response = self
            .client
            .get(&self.url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|source| FetchError::Connection {
                url: self.url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| FetchError::Connection {
                url: self.url.clone(),
                source,
            })?;

        Ok(serde_json::from_slice(&body)?)
    }
}
