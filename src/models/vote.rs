use serde::Serialize;
use uuid::Uuid;

/// Ballot submission for `POST /api/vote`.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VoteRequest {
    pub poll_id: String,
    pub option_id: String,
    pub voter_id: String,
    /// Fresh per submission; the backend uses it to spot replays.
    pub correlation_id: Uuid,
}

impl VoteRequest {
    pub fn new(poll_id: &str, option_id: &str, voter_id: &str) -> Self {
        Self {
            poll_id: poll_id.to_string(),
            option_id: option_id.to_string(),
            voter_id: voter_id.to_string(),
            correlation_id: Uuid::new_v4(),
        }
    }
}
