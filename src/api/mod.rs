//! Typed client for the eVote REST backend.
//!
//! Every call is a single request with no retry. Non-success statuses become
//! [`ApiError::Rejected`] carrying the backend's body text, so the views can
//! show the backend's own wording.

pub mod vote;
pub mod voter;

use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use thiserror::Error;
use tracing::warn;
use url::Url;

use crate::models::vote::VoteRequest;
use crate::models::voter::{NewVoter, Voter};

pub use vote::VoteClient;
pub use voter::VoterClient;

#[derive(Error, Debug)]
pub enum ApiError {
    /// The backend answered with a non-success status.
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },

    /// The configured request timeout elapsed before the backend answered.
    #[error("Backend did not answer in time: {0}")]
    Timeout(reqwest::Error),

    #[error("Backend unreachable: {0}")]
    Transport(reqwest::Error),

    #[error("Malformed backend response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Backend URL cannot carry a path: {0}")]
    InvalidBaseUrl(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            ApiError::Timeout(error)
        } else {
            ApiError::Transport(error)
        }
    }
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Rejected { status, .. } if *status == StatusCode::NOT_FOUND)
    }
}

pub trait VoterApi {
    async fn create_voter(&self, voter: &NewVoter) -> Result<Voter, ApiError>;

    /// Unknown ids surface as an error for which [`ApiError::is_not_found`] holds.
    async fn fetch_voter(&self, id: &str) -> Result<Voter, ApiError>;

    async fn update_email(&self, id: &str, email: &str) -> Result<Voter, ApiError>;
}

pub trait VoteApi {
    async fn cast_vote(&self, vote: &VoteRequest) -> Result<(), ApiError>;
}

/// Builds the HTTP client shared by one API half. Without a timeout a request
/// waits for the backend for as long as the connection stays open.
fn http_client(timeout: Option<Duration>) -> Result<Client, ApiError> {
    let builder = Client::builder();
    let builder = match timeout {
        Some(timeout) => builder.timeout(timeout),
        None => builder,
    };
    Ok(builder.build()?)
}

/// Appends path segments to the backend base URL, escaping each one.
fn endpoint(base: &Url, segments: &[&str]) -> Result<Url, ApiError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| ApiError::InvalidBaseUrl(base.to_string()))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Passes successful responses through and turns everything else into
/// [`ApiError::Rejected`]. The body becomes the message untouched; only an
/// empty body is replaced by `fallback`.
async fn ensure_success(response: Response, fallback: &str) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = if body.is_empty() {
        fallback.to_string()
    } else {
        body
    };
    warn!(status = status.as_u16(), %message, "backend rejected request");

    Err(ApiError::Rejected { status, message })
}

async fn decode<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}
