use std::path::PathBuf;
use std::time::Duration;

use clap::Args;
use url::Url;

use crate::api::{ApiError, VoteClient, VoterClient};
use crate::handlers::assets::AssetRoot;
use crate::views::ballot::BallotContext;

/// Settings shared by every subcommand. Each one can come from a flag, the
/// environment or a `.env` file.
#[derive(Args, Debug, Clone)]
pub struct Config {
    /// Base URL of the eVote REST backend
    #[arg(
        long,
        env = "EVOTE_BACKEND_URL",
        default_value = "http://localhost:8080",
        value_parser = parse_backend_url,
        global = true
    )]
    pub backend_url: Url,

    /// Address the asset server binds to
    #[arg(long, env = "EVOTE_HOST", default_value = "127.0.0.1", global = true)]
    pub host: String,

    #[arg(long, env = "EVOTE_PORT", default_value_t = 3000, global = true)]
    pub port: u16,

    /// Directory holding the front-end assets, HTML pages under `pages/`
    #[arg(long, env = "EVOTE_ASSET_ROOT", default_value = "frontend", global = true)]
    pub asset_root: PathBuf,

    /// Per-request timeout for backend calls, in seconds; 0 waits indefinitely
    #[arg(
        long,
        env = "EVOTE_REQUEST_TIMEOUT_SECS",
        default_value_t = 0,
        global = true
    )]
    pub request_timeout_secs: u64,

    /// Poll that ballots are cast for
    #[arg(long, env = "EVOTE_POLL_ID", default_value = "POLL-CK-2026", global = true)]
    pub poll_id: String,

    /// Voter acting through the profile and ballot commands
    #[arg(long, env = "EVOTE_VOTER_ID", default_value = "VOTER-001", global = true)]
    pub voter_id: String,
}

fn parse_backend_url(raw: &str) -> Result<Url, String> {
    let url = Url::parse(raw).map_err(|e| format!("invalid URL: {e}"))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(format!("unsupported scheme `{scheme}`, expected http or https")),
    }
}

impl Config {
    /// `None` unless a non-zero timeout was configured.
    pub fn request_timeout(&self) -> Option<Duration> {
        match self.request_timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }

    pub fn voter_client(&self) -> Result<VoterClient, ApiError> {
        VoterClient::new(&self.backend_url, self.request_timeout())
    }

    pub fn vote_client(&self) -> Result<VoteClient, ApiError> {
        VoteClient::new(&self.backend_url, self.request_timeout())
    }

    pub fn ballot_context(&self) -> BallotContext {
        BallotContext {
            poll_id: self.poll_id.clone(),
            voter_id: self.voter_id.clone(),
        }
    }

    pub fn assets(&self) -> AssetRoot {
        AssetRoot::new(&self.asset_root)
    }
}
