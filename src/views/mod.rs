//! View controllers and the page model they operate on.
//!
//! A [`Page`] holds what the browser DOM holds for the voter forms: input
//! values, the checked radio option, output slots and hidden elements. Each
//! controller reads the page, performs at most one backend call and writes
//! its outcome back.

pub mod ballot;
pub mod voter_create;
pub mod voter_lookup;
pub mod voter_profile;

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Element ids shared between the pages and the controllers.
pub mod ids {
    pub const FIRST_NAME: &str = "firstName";
    pub const LAST_NAME: &str = "lastName";
    pub const EMAIL: &str = "email";
    pub const STREET: &str = "street";
    pub const POSTAL_CODE: &str = "postalCode";
    pub const CITY: &str = "city";
    pub const DISTRICT: &str = "district";
    pub const CREATE_OUTPUT: &str = "createOutput";

    pub const VOTER_ID: &str = "voterId";
    pub const VIEW_OUTPUT: &str = "viewOutput";

    pub const NAVBAR_NAME: &str = "navbarVoterName";
    pub const PROFILE_OUTPUT: &str = "profileOutput";

    /// Radio group holding the ballot options.
    pub const OPTION: &str = "option";
    pub const OPTIONS_GROUP: &str = "options-group";
    pub const SUBMIT_BUTTON: &str = "submitVoteBtn";
    pub const ABSTENTION_BUTTON: &str = "abstentionBtn";
    pub const VOTE_OUTPUT: &str = "voteOutput";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
    Danger,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub tone: Tone,
    pub message: String,
}

/// Content of an output slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Notice(Notice),
    /// Label/value rows, e.g. a voter summary.
    Details(Vec<(String, String)>),
}

#[derive(Debug, Default, Clone)]
pub struct Page {
    fields: BTreeMap<String, String>,
    choices: BTreeMap<String, String>,
    texts: BTreeMap<String, String>,
    outputs: BTreeMap<String, Output>,
    hidden: BTreeSet<String>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, id: &str, value: impl Into<String>) -> Self {
        self.set_value(id, value);
        self
    }

    /// Marks `value` as the checked option of radio group `group`.
    pub fn with_choice(mut self, group: &str, value: impl Into<String>) -> Self {
        self.choices.insert(group.to_string(), value.into());
        self
    }

    /// Current value of an input, empty when the field was never filled.
    pub fn value(&self, id: &str) -> &str {
        self.fields.get(id).map_or("", String::as_str)
    }

    pub fn set_value(&mut self, id: &str, value: impl Into<String>) {
        self.fields.insert(id.to_string(), value.into());
    }

    pub fn checked(&self, group: &str) -> Option<&str> {
        self.choices.get(group).map(String::as_str)
    }

    pub fn text(&self, id: &str) -> Option<&str> {
        self.texts.get(id).map(String::as_str)
    }

    pub fn set_text(&mut self, id: &str, text: impl Into<String>) {
        self.texts.insert(id.to_string(), text.into());
    }

    pub fn render(&mut self, target: &str, tone: Tone, message: impl Into<String>) {
        let notice = Notice {
            tone,
            message: message.into(),
        };
        self.outputs.insert(target.to_string(), Output::Notice(notice));
    }

    pub fn render_success(&mut self, target: &str, message: impl Into<String>) {
        self.render(target, Tone::Success, message);
    }

    pub fn render_warning(&mut self, target: &str, message: impl Into<String>) {
        self.render(target, Tone::Warning, message);
    }

    pub fn render_error(&mut self, target: &str, message: impl Into<String>) {
        self.render(target, Tone::Danger, message);
    }

    pub fn render_details(&mut self, target: &str, rows: Vec<(String, String)>) {
        self.outputs.insert(target.to_string(), Output::Details(rows));
    }

    pub fn output(&self, target: &str) -> Option<&Output> {
        self.outputs.get(target)
    }

    /// The notice in `target`, if that slot holds one.
    pub fn notice(&self, target: &str) -> Option<&Notice> {
        match self.outputs.get(target) {
            Some(Output::Notice(notice)) => Some(notice),
            _ => None,
        }
    }

    pub fn notices(&self) -> impl Iterator<Item = &Notice> {
        self.outputs.values().filter_map(|output| match output {
            Output::Notice(notice) => Some(notice),
            Output::Details(_) => None,
        })
    }

    pub fn hide(&mut self, id: &str) {
        self.hidden.insert(id.to_string());
    }

    pub fn is_hidden(&self, id: &str) -> bool {
        self.hidden.contains(id)
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Tone::Success => "success",
            Tone::Warning => "warning",
            Tone::Danger => "error",
        };
        f.write_str(label)
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Notice(notice) => write!(f, "{}: {}", notice.tone, notice.message),
            Output::Details(rows) => {
                let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
                for (label, value) in rows {
                    writeln!(f, "{label:<width$}  {value}")?;
                }
                Ok(())
            }
        }
    }
}
