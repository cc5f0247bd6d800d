//! Test doubles for the backend: a real HTTP fake for the clients and an
//! in-process stub for the views.

use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use actix_web::{App, HttpResponse, HttpServer, web};
use reqwest::StatusCode;
use serde_json::{Value, json};
use url::Url;

use crate::api::{ApiError, VoteApi, VoterApi};
use crate::models::email::is_valid_email;
use crate::models::vote::VoteRequest;
use crate::models::voter::{NewVoter, Voter, VoterAddress, VoterName};

struct BackendState {
    voters: Mutex<HashMap<String, Value>>,
    votes: Mutex<Vec<Value>>,
    next_id: AtomicUsize,
}

impl BackendState {
    fn seeded() -> Self {
        let seed = json!({
            "id": "VOTER-001",
            "name": { "firstName": "Erika", "lastName": "Mustermann", "fullName": "Erika Mustermann" },
            "email": "erika@example.com",
            "address": {
                "street": "Musterstraße",
                "houseNumber": "12a",
                "postalCode": "10115",
                "city": "Berlin",
                "formatted": "Musterstraße 12a, 10115 Berlin"
            },
            "district": "Berlin-Mitte",
            "registeredAt": "2026-01-15T09:30:00",
            "verified": true
        });

        Self {
            voters: Mutex::new(HashMap::from([("VOTER-001".to_string(), seed)])),
            votes: Mutex::new(Vec::new()),
            next_id: AtomicUsize::new(2),
        }
    }
}

/// Minimal stand-in for the voter and vote REST backend, listening on an
/// ephemeral local port.
pub struct FakeBackend {
    pub url: Url,
    state: web::Data<BackendState>,
}

impl FakeBackend {
    pub const POLL_ID: &'static str = "POLL-CK-2026";
    /// Lookups for this id fail with a 500 and an empty body.
    pub const SILENT_FAILURE_ID: &'static str = "VOTER-500";
    /// Lookups for this id succeed but the record carries no `id`.
    pub const ANONYMOUS_ID: &'static str = "VOTER-200";
    /// Votes for this poll are refused with [`Self::PADDED_CONFLICT`] as body.
    pub const PADDED_POLL_ID: &'static str = "POLL-PADDED";
    pub const PADDED_CONFLICT: &'static str = "  Conflict: Voter has already voted\n";
    /// Votes for this poll are refused only after [`Self::SLOW_DELAY`].
    pub const SLOW_POLL_ID: &'static str = "POLL-SLOW";
    pub const SLOW_DELAY: Duration = Duration::from_millis(1000);

    pub async fn spawn() -> Self {
        let state = web::Data::new(BackendState::seeded());
        let app_state = state.clone();

        let server = HttpServer::new(move || {
            App::new()
                .app_data(app_state.clone())
                .route("/api/voter", web::post().to(create_voter))
                .route("/api/voter/{id}", web::get().to(get_voter))
                .route("/api/voter/{id}", web::put().to(update_voter))
                .route("/api/vote", web::post().to(cast_vote))
        })
        .workers(1)
        .disable_signals()
        .bind(("127.0.0.1", 0))
        .expect("bind fake backend");

        let addr = server.addrs()[0];
        actix_web::rt::spawn(server.run());

        Self {
            url: Url::parse(&format!("http://{addr}")).expect("fake backend url"),
            state,
        }
    }

    pub fn recorded_votes(&self) -> Vec<Value> {
        self.state.votes.lock().expect("votes lock").clone()
    }
}

fn split_street(line: &str) -> (String, String) {
    match line.trim().rsplit_once(' ') {
        Some((street, number)) if number.starts_with(|c: char| c.is_ascii_digit()) => {
            (street.to_string(), number.to_string())
        }
        _ => (line.trim().to_string(), String::new()),
    }
}

async fn create_voter(state: web::Data<BackendState>, body: web::Json<Value>) -> HttpResponse {
    let email = body["email"].as_str().unwrap_or_default();
    if !is_valid_email(email) {
        return HttpResponse::BadRequest()
            .body(format!("Invalid input: Ungültige E-Mail-Adresse: {email}"));
    }

    let id = format!("VOTER-{:03}", state.next_id.fetch_add(1, Ordering::SeqCst));
    let first = body["name"]["vorname"].as_str().unwrap_or_default();
    let last = body["name"]["nachname"].as_str().unwrap_or_default();
    let street_line = body["adresse"]["strasse"].as_str().unwrap_or_default();
    let (street, house_number) = split_street(street_line);
    let postal_code = body["adresse"]["plz"].as_str().unwrap_or_default();
    let city = body["adresse"]["ort"].as_str().unwrap_or_default();

    let voter = json!({
        "id": id,
        "name": { "firstName": first, "lastName": last, "fullName": format!("{first} {last}") },
        "email": email,
        "address": {
            "street": street,
            "houseNumber": house_number,
            "postalCode": postal_code,
            "city": city,
            "formatted": format!("{street} {house_number}, {postal_code} {city}")
        },
        "district": body["wahlkreis"],
        "registeredAt": "2026-10-18T12:00:00",
        "verified": true
    });

    state
        .voters
        .lock()
        .expect("voters lock")
        .insert(id, voter.clone());
    HttpResponse::Ok().json(voter)
}

fn not_found(id: &str) -> HttpResponse {
    HttpResponse::NotFound().body(format!("Bürger mit ID {id} nicht gefunden"))
}

async fn get_voter(state: web::Data<BackendState>, path: web::Path<String>) -> HttpResponse {
    let id = path.into_inner();
    if id == FakeBackend::SILENT_FAILURE_ID {
        return HttpResponse::InternalServerError().finish();
    }
    if id == FakeBackend::ANONYMOUS_ID {
        return HttpResponse::Ok().json(json!({
            "name": { "firstName": "Erika", "lastName": "Mustermann" },
            "email": "erika@example.com",
            "district": "Berlin-Mitte"
        }));
    }

    match state.voters.lock().expect("voters lock").get(&id) {
        Some(voter) => HttpResponse::Ok().json(voter),
        None => not_found(&id),
    }
}

async fn update_voter(
    state: web::Data<BackendState>,
    path: web::Path<String>,
    body: web::Json<Value>,
) -> HttpResponse {
    let id = path.into_inner();
    let email = body["email"].as_str().unwrap_or_default();
    if !is_valid_email(email) {
        return HttpResponse::BadRequest().body(format!("Ungültige E-Mail-Adresse: {email}"));
    }

    let mut voters = state.voters.lock().expect("voters lock");
    match voters.get_mut(&id) {
        Some(voter) => {
            voter["email"] = json!(email);
            HttpResponse::Ok().json(voter.clone())
        }
        None => not_found(&id),
    }
}

async fn cast_vote(state: web::Data<BackendState>, body: web::Json<Value>) -> HttpResponse {
    let poll = body["pollId"].as_str().unwrap_or_default();
    if poll == FakeBackend::PADDED_POLL_ID {
        return HttpResponse::Conflict().body(FakeBackend::PADDED_CONFLICT);
    }
    if poll == FakeBackend::SLOW_POLL_ID {
        actix_web::rt::time::sleep(FakeBackend::SLOW_DELAY).await;
        return HttpResponse::Conflict().body("Conflict: Voter has already voted in this poll");
    }
    if poll != FakeBackend::POLL_ID {
        return HttpResponse::BadRequest().body(format!("Invalid input: Unknown poll {poll}"));
    }

    let mut votes = state.votes.lock().expect("votes lock");
    let already_voted = votes
        .iter()
        .any(|vote| vote["pollId"] == body["pollId"] && vote["voterId"] == body["voterId"]);
    if already_voted {
        return HttpResponse::Conflict().body("Conflict: Voter has already voted in this poll");
    }

    votes.push(body.into_inner());
    HttpResponse::Created().finish()
}

/// A call observed by [`StubApi`].
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Create(NewVoter),
    Fetch(String),
    UpdateEmail(String, String),
    Vote(VoteRequest),
}

/// In-process [`VoterApi`] and [`VoteApi`] that records every call and
/// answers all of them the same way.
pub struct StubApi {
    outcome: Result<Voter, (StatusCode, String)>,
    calls: RefCell<Vec<Call>>,
}

impl StubApi {
    pub fn answering(voter: Voter) -> Self {
        Self {
            outcome: Ok(voter),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn rejecting(status: u16, message: &str) -> Self {
        let status = StatusCode::from_u16(status).expect("valid status");
        Self {
            outcome: Err((status, message.to_string())),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn answer(&self, call: Call) -> Result<Voter, ApiError> {
        self.calls.borrow_mut().push(call);
        match &self.outcome {
            Ok(voter) => Ok(voter.clone()),
            Err((status, message)) => Err(ApiError::Rejected {
                status: *status,
                message: message.clone(),
            }),
        }
    }
}

impl VoterApi for StubApi {
    async fn create_voter(&self, voter: &NewVoter) -> Result<Voter, ApiError> {
        self.answer(Call::Create(voter.clone()))
    }

    async fn fetch_voter(&self, id: &str) -> Result<Voter, ApiError> {
        self.answer(Call::Fetch(id.to_string()))
    }

    async fn update_email(&self, id: &str, email: &str) -> Result<Voter, ApiError> {
        let mut voter = self.answer(Call::UpdateEmail(id.to_string(), email.to_string()))?;
        voter.email = email.to_string();
        Ok(voter)
    }
}

impl VoteApi for StubApi {
    async fn cast_vote(&self, vote: &VoteRequest) -> Result<(), ApiError> {
        self.answer(Call::Vote(vote.clone())).map(|_| ())
    }
}

pub fn sample_voter() -> Voter {
    Voter {
        id: "VOTER-001".into(),
        name: VoterName {
            first_name: "Erika".into(),
            last_name: "Mustermann".into(),
            full_name: Some("Erika Mustermann".into()),
        },
        email: "erika@example.com".into(),
        address: VoterAddress {
            street: "Musterstraße".into(),
            house_number: "12a".into(),
            postal_code: "10115".into(),
            city: "Berlin".into(),
            formatted: Some("Musterstraße 12a, 10115 Berlin".into()),
        },
        district: "Berlin-Mitte".into(),
        verified: true,
        registered_at: Some("2026-01-15T09:30:00".into()),
    }
}
