use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Voter record as returned by every `/api/voter` endpoint.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Voter {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: VoterName,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: VoterAddress,
    #[serde(default)]
    pub district: String,
    #[serde(default)]
    pub verified: bool,
    pub registered_at: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct VoterName {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub full_name: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct VoterAddress {
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub house_number: String,
    #[serde(default)]
    pub postal_code: String,
    #[serde(default)]
    pub city: String,
    pub formatted: Option<String>,
}

impl VoterName {
    /// Pre-composed full name when the backend sent one, otherwise "first last".
    pub fn display(&self) -> String {
        match &self.full_name {
            Some(full) if !full.trim().is_empty() => full.clone(),
            _ => format!("{} {}", self.first_name, self.last_name)
                .trim()
                .to_string(),
        }
    }
}

impl VoterAddress {
    /// Street and house number joined by a space, skipping blank parts.
    pub fn street_line(&self) -> String {
        [self.street.as_str(), self.house_number.as_str()]
            .into_iter()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

// LocalDateTime.toString() drops seconds when they are zero
const REGISTERED_AT_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

impl Voter {
    pub fn registered_at_parsed(&self) -> Option<NaiveDateTime> {
        let raw = self.registered_at.as_deref()?.trim();
        // offsets and a trailing `Z` are ignored, the backend stores local time
        let local = raw.split_once(['Z', '+']).map_or(raw, |(head, _)| head);

        REGISTERED_AT_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(local, format).ok())
    }

    /// Registration time as `dd.mm.yyyy HH:MM`, the raw backend text when it
    /// does not parse, `-` when absent.
    pub fn registered_at_display(&self) -> String {
        match (self.registered_at_parsed(), self.registered_at.as_deref()) {
            (Some(parsed), _) => parsed.format("%d.%m.%Y %H:%M").to_string(),
            (None, Some(raw)) if !raw.trim().is_empty() => raw.to_string(),
            _ => "-".to_string(),
        }
    }
}

/// Registration payload. The backend's create endpoint still expects the
/// German field names, unlike every response.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct NewVoter {
    pub name: NewVoterName,
    pub email: String,
    #[serde(rename = "adresse")]
    pub address: NewVoterAddress,
    #[serde(rename = "wahlkreis")]
    pub district: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct NewVoterName {
    #[serde(rename = "vorname")]
    pub first_name: String,
    #[serde(rename = "nachname")]
    pub last_name: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct NewVoterAddress {
    #[serde(rename = "strasse")]
    pub street: String,
    #[serde(rename = "plz")]
    pub postal_code: String,
    #[serde(rename = "ort")]
    pub city: String,
}
