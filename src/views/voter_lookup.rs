use super::{Page, ids};
use crate::api::VoterApi;
use crate::models::voter::Voter;

fn summary(voter: &Voter) -> Vec<(String, String)> {
    let address = voter
        .address
        .formatted
        .clone()
        .filter(|formatted| !formatted.trim().is_empty())
        .unwrap_or_else(|| "-".to_string());
    let verified = if voter.verified { "Yes" } else { "No" };

    vec![
        ("ID".to_string(), voter.id.clone()),
        ("Name".to_string(), voter.name.display()),
        ("Email".to_string(), voter.email.clone()),
        ("Address".to_string(), address),
        ("District".to_string(), voter.district.clone()),
        ("Verified".to_string(), verified.to_string()),
        ("Registered at".to_string(), voter.registered_at_display()),
    ]
}

/// Looks up the voter whose id was typed into the lookup form.
pub async fn show<A: VoterApi>(page: &mut Page, api: &A) {
    let id = page.value(ids::VOTER_ID).trim().to_string();
    if id.is_empty() {
        page.render_error(ids::VIEW_OUTPUT, "Please enter an ID");
        return;
    }

    match api.fetch_voter(&id).await {
        Ok(voter) if !voter.id.is_empty() => {
            page.render_details(ids::VIEW_OUTPUT, summary(&voter));
        }
        Ok(_) => page.render_error(ids::VIEW_OUTPUT, "Not found"),
        Err(error) if error.is_not_found() => page.render_error(ids::VIEW_OUTPUT, "Not found"),
        Err(error) => page.render_error(ids::VIEW_OUTPUT, error.to_string()),
    }
}
