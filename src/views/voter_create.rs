use tracing::info;

use super::{Page, ids};
use crate::api::VoterApi;
use crate::models::voter::{NewVoter, NewVoterAddress, NewVoterName};

static REQUIRED_FIELDS: [(&str, &str); 7] = [
    (ids::FIRST_NAME, "first name"),
    (ids::LAST_NAME, "last name"),
    (ids::EMAIL, "email address"),
    (ids::STREET, "street"),
    (ids::POSTAL_CODE, "postal code"),
    (ids::CITY, "city"),
    (ids::DISTRICT, "district"),
];

fn read_form(page: &Page) -> NewVoter {
    let field = |id: &str| page.value(id).trim().to_string();
    NewVoter {
        name: NewVoterName {
            first_name: field(ids::FIRST_NAME),
            last_name: field(ids::LAST_NAME),
        },
        email: field(ids::EMAIL),
        address: NewVoterAddress {
            street: field(ids::STREET),
            postal_code: field(ids::POSTAL_CODE),
            city: field(ids::CITY),
        },
        district: field(ids::DISTRICT),
    }
}

/// Registers a voter from the create form.
pub async fn register<A: VoterApi>(page: &mut Page, api: &A) {
    let missing = REQUIRED_FIELDS
        .iter()
        .find(|(id, _)| page.value(id).trim().is_empty());
    if let Some((_, label)) = missing {
        page.render_warning(ids::CREATE_OUTPUT, format!("Please fill in the {label}."));
        return;
    }

    match api.create_voter(&read_form(page)).await {
        Ok(voter) => {
            info!(id = %voter.id, "voter registered");
            page.render_success(
                ids::CREATE_OUTPUT,
                format!("Voter registered with ID {}.", voter.id),
            );
        }
        Err(error) => page.render_error(ids::CREATE_OUTPUT, error.to_string()),
    }
}
