use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use crate::config::Config;
use crate::views::{Output, Page, Tone, ballot, ids, voter_create, voter_lookup, voter_profile};

#[derive(Parser, Debug)]
#[command(name = "evote", version, about = "eVote front-end server and command line client")]
pub struct Cli {
    #[command(flatten)]
    pub config: Config,

    /// Defaults to `serve`
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the front-end assets
    Serve,
    #[command(flatten)]
    Client(ClientCommand),
}

/// Commands that drive one view controller against the backend.
#[derive(Subcommand, Debug)]
pub enum ClientCommand {
    /// Register a new voter
    Register(RegisterArgs),
    /// Look up a voter by id
    Show {
        #[arg(default_value = "")]
        id: String,
    },
    /// Show the configured voter's profile, optionally changing the email address
    Profile {
        #[arg(long)]
        email: Option<String>,
    },
    /// Cast a ballot in the configured poll
    Vote {
        /// Ballot option to select; omitting it submits nothing
        #[arg(long)]
        option: Option<String>,
    },
}

#[derive(Args, Debug)]
pub struct RegisterArgs {
    #[arg(long)]
    first_name: Option<String>,
    #[arg(long)]
    last_name: Option<String>,
    #[arg(long)]
    email: Option<String>,
    /// Street and house number, e.g. "Musterstraße 12a"
    #[arg(long)]
    street: Option<String>,
    #[arg(long)]
    postal_code: Option<String>,
    #[arg(long)]
    city: Option<String>,
    #[arg(long)]
    district: Option<String>,
}

impl RegisterArgs {
    fn into_page(self) -> Page {
        [
            (ids::FIRST_NAME, self.first_name),
            (ids::LAST_NAME, self.last_name),
            (ids::EMAIL, self.email),
            (ids::STREET, self.street),
            (ids::POSTAL_CODE, self.postal_code),
            (ids::CITY, self.city),
            (ids::DISTRICT, self.district),
        ]
        .into_iter()
        .fold(Page::new(), |page, (id, value)| {
            page.with_field(id, value.unwrap_or_default())
        })
    }
}

const PROFILE_FIELDS: [(&str, &str); 7] = [
    (ids::FIRST_NAME, "First name"),
    (ids::LAST_NAME, "Last name"),
    (ids::EMAIL, "Email"),
    (ids::STREET, "Street"),
    (ids::POSTAL_CODE, "Postal code"),
    (ids::CITY, "City"),
    (ids::DISTRICT, "District"),
];

fn profile_form(page: &Page) -> Output {
    let rows = PROFILE_FIELDS
        .iter()
        .map(|(id, label)| (label.to_string(), page.value(id).to_string()))
        .collect();
    Output::Details(rows)
}

fn print_slot(page: &Page, slot: &str) {
    if let Some(output) = page.output(slot) {
        println!("{}", output.to_string().trim_end());
    }
}

impl ClientCommand {
    /// Runs the matching controller and prints what it rendered. Returns
    /// `false` when the controller ended on a warning or an error.
    pub async fn run(self, config: &Config) -> Result<bool> {
        let page = match self {
            ClientCommand::Register(args) => {
                let api = config.voter_client()?;
                let mut page = args.into_page();
                voter_create::register(&mut page, &api).await;
                print_slot(&page, ids::CREATE_OUTPUT);
                page
            }
            ClientCommand::Show { id } => {
                let api = config.voter_client()?;
                let mut page = Page::new().with_field(ids::VOTER_ID, id);
                voter_lookup::show(&mut page, &api).await;
                print_slot(&page, ids::VIEW_OUTPUT);
                page
            }
            ClientCommand::Profile { email } => {
                let api = config.voter_client()?;
                let mut page = Page::new();
                voter_profile::load(&mut page, &api, &config.voter_id).await;

                let loaded = page.output(ids::PROFILE_OUTPUT).is_none();
                if let (true, Some(email)) = (loaded, email) {
                    page.set_value(ids::EMAIL, email);
                    voter_profile::update_email(&mut page, &api, &config.voter_id).await;
                }

                if loaded {
                    if let Some(name) = page.text(ids::NAVBAR_NAME) {
                        println!("{name}");
                    }
                    println!("{}", profile_form(&page).to_string().trim_end());
                }
                print_slot(&page, ids::PROFILE_OUTPUT);
                page
            }
            ClientCommand::Vote { option } => {
                let api = config.vote_client()?;
                let mut page = match option {
                    Some(option) => Page::new().with_choice(ids::OPTION, option),
                    None => Page::new(),
                };
                ballot::submit(&mut page, &api, &config.ballot_context()).await;
                print_slot(&page, ids::VOTE_OUTPUT);
                page
            }
        };

        Ok(page.notices().all(|notice| notice.tone == Tone::Success))
    }
}
