use tracing::info;

use super::{Page, ids};
use crate::api::VoterApi;
use crate::models::email::is_valid_email;
use crate::models::voter::Voter;

/// Copies a voter into the profile form and the navbar.
pub fn fill_profile_form(page: &mut Page, voter: &Voter) {
    page.set_value(ids::FIRST_NAME, voter.name.first_name.as_str());
    page.set_value(ids::LAST_NAME, voter.name.last_name.as_str());
    page.set_value(ids::EMAIL, voter.email.as_str());
    page.set_value(ids::STREET, voter.address.street_line());
    page.set_value(ids::POSTAL_CODE, voter.address.postal_code.as_str());
    page.set_value(ids::CITY, voter.address.city.as_str());
    page.set_value(ids::DISTRICT, voter.district.as_str());

    if let Some(full_name) = voter.name.full_name.as_deref().filter(|n| !n.is_empty()) {
        page.set_text(ids::NAVBAR_NAME, full_name);
    }
}

fn message_or(error: &impl ToString, fallback: &str) -> String {
    match error.to_string() {
        message if message.is_empty() => fallback.to_string(),
        message => message,
    }
}

/// Loads the signed-in voter's profile into the form.
pub async fn load<A: VoterApi>(page: &mut Page, api: &A, voter_id: &str) {
    match api.fetch_voter(voter_id).await {
        Ok(voter) => fill_profile_form(page, &voter),
        Err(error) => page.render_error(
            ids::PROFILE_OUTPUT,
            message_or(&error, "Could not load voter data."),
        ),
    }
}

/// Saves the email address currently in the profile form.
pub async fn update_email<A: VoterApi>(page: &mut Page, api: &A, voter_id: &str) {
    let email = page.value(ids::EMAIL).trim().to_string();
    if email.is_empty() || !is_valid_email(&email) {
        page.render_error(ids::PROFILE_OUTPUT, "Please enter a valid email address.");
        return;
    }

    match api.update_email(voter_id, &email).await {
        Ok(voter) => {
            info!(id = %voter.id, "voter email updated");
            fill_profile_form(page, &voter);
            page.render_success(ids::PROFILE_OUTPUT, "Email updated successfully.");
        }
        Err(error) => page.render_error(
            ids::PROFILE_OUTPUT,
            message_or(&error, "Failed to save the change."),
        ),
    }
}
