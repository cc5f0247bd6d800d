use tracing::info;

use super::{Page, ids};
use crate::api::VoteApi;
use crate::models::vote::VoteRequest;

/// Poll and voter a ballot is cast for. Comes from configuration until
/// sign-in exists.
#[derive(Debug, Clone)]
pub struct BallotContext {
    pub poll_id: String,
    pub voter_id: String,
}

/// Submits the checked ballot option.
pub async fn submit<A: VoteApi>(page: &mut Page, api: &A, context: &BallotContext) {
    let Some(option_id) = page.checked(ids::OPTION).map(str::to_string) else {
        page.render_warning(ids::VOTE_OUTPUT, "Please choose an option.");
        return;
    };

    let vote = VoteRequest::new(&context.poll_id, &option_id, &context.voter_id);
    match api.cast_vote(&vote).await {
        Ok(()) => {
            info!(poll = %vote.poll_id, correlation_id = %vote.correlation_id, "ballot submitted");
            page.hide(ids::OPTIONS_GROUP);
            page.hide(ids::SUBMIT_BUTTON);
            page.hide(ids::ABSTENTION_BUTTON);
            page.render_success(ids::VOTE_OUTPUT, "Vote cast successfully!");
        }
        Err(error) => page.render_error(ids::VOTE_OUTPUT, error.to_string()),
    }
}
