use std::time::Duration;

use reqwest::Client;
use tracing::{debug, info};
use url::Url;

use super::{ApiError, VoteApi, endpoint, ensure_success, http_client};
use crate::models::vote::VoteRequest;

/// Client for the ballot command endpoint `POST /api/vote`.
pub struct VoteClient {
    client: Client,
    url: Url,
}

impl VoteClient {
    /// `timeout` bounds every request; `None` waits as long as the backend takes.
    pub fn new(backend: &Url, timeout: Option<Duration>) -> Result<Self, ApiError> {
        Ok(Self {
            client: http_client(timeout)?,
            url: endpoint(backend, &["api", "vote"])?,
        })
    }
}

impl VoteApi for VoteClient {
    async fn cast_vote(&self, vote: &VoteRequest) -> Result<(), ApiError> {
        debug!(url = %self.url, poll = %vote.poll_id, "casting vote");
        let response = self.client.post(self.url.clone()).json(vote).send().await?;
        // 201 Created carries no body
        ensure_success(response, "Failed to cast vote").await?;

        info!(correlation_id = %vote.correlation_id, "vote accepted");
        Ok(())
    }
}
