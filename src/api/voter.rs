use std::time::Duration;

use reqwest::Client;
use tracing::debug;
use url::Url;

use super::{ApiError, VoterApi, decode, endpoint, ensure_success, http_client};
use crate::models::email::EmailUpdate;
use crate::models::voter::{NewVoter, Voter};

/// Client for the voter registry under `/api/voter`.
pub struct VoterClient {
    client: Client,
    base: Url,
}

impl VoterClient {
    /// `timeout` bounds every request; `None` waits as long as the backend takes.
    pub fn new(backend: &Url, timeout: Option<Duration>) -> Result<Self, ApiError> {
        Ok(Self {
            client: http_client(timeout)?,
            base: endpoint(backend, &["api", "voter"])?,
        })
    }

    fn voter_url(&self, id: &str) -> Result<Url, ApiError> {
        endpoint(&self.base, &[id])
    }
}

impl VoterApi for VoterClient {
    async fn create_voter(&self, voter: &NewVoter) -> Result<Voter, ApiError> {
        debug!(url = %self.base, "registering voter");
        let response = self.client.post(self.base.clone()).json(voter).send().await?;
        let response = ensure_success(response, "Failed to register voter").await?;
        decode(response).await
    }

    async fn fetch_voter(&self, id: &str) -> Result<Voter, ApiError> {
        let url = self.voter_url(id)?;
        debug!(%url, "loading voter");
        let response = self.client.get(url).send().await?;
        let response = ensure_success(response, "Failed to load voter data").await?;
        decode(response).await
    }

    async fn update_email(&self, id: &str, email: &str) -> Result<Voter, ApiError> {
        let url = self.voter_url(id)?;
        debug!(%url, "updating voter email");
        let response = self
            .client
            .put(url)
            .json(&EmailUpdate { email })
            .send()
            .await?;
        let response = ensure_success(response, "Failed to update email address").await?;
        decode(response).await
    }
}
