//! Subcommand implementations.

pub mod activity;
pub mod exams;
pub mod get;
pub mod homework;
pub mod leaders;
pub mod login;
pub mod news;
pub mod profile;
pub mod progress;
pub mod schedule;

use anyhow::{Context, Result};
use mystat::{ApiUrl, Client, ClientConfig, Credentials};
use serde::Serialize;

use crate::cli::{Cli, Commands, ConnectionArgs};
use crate::output;

/// What every command gets: a client and the output preference.
pub struct Session {
    pub client: Client,
    pub pretty: bool,
}

impl Session {
    /// Print a payload as JSON.
    pub fn print<T: Serialize>(&self, value: &T) -> Result<()> {
        output::json(value, self.pretty)
    }
}

pub async fn handle(cli: Cli) -> Result<()> {
    let session = Session {
        client: connect(&cli.connection)?,
        pretty: cli.pretty,
    };

    match cli.command {
        Commands::Login(args) => login::run(&session, args).await,
        Commands::Profile(args) => profile::run(&session, args).await,
        Commands::Schedule(args) => schedule::run(&session, args).await,
        Commands::Homework(cmd) => homework::handle(&session, cmd).await,
        Commands::News(args) => news::run(&session, args).await,
        Commands::Exams(args) => exams::run(&session, args).await,
        Commands::Leaders(args) => leaders::run(&session, args).await,
        Commands::Activity(args) => activity::run(&session, args).await,
        Commands::Progress(args) => progress::run(&session, args).await,
        Commands::Get(args) => get::run(&session, args).await,
    }
}

/// Build a client from the connection arguments. No request is made here.
fn connect(args: &ConnectionArgs) -> Result<Client> {
    let username = args
        .username
        .as_deref()
        .context("Missing username. Pass --username or set MYSTAT_USERNAME.")?;
    let password = args
        .password
        .as_deref()
        .context("Missing password. Pass --password or set MYSTAT_PASSWORD.")?;

    let base_url = ApiUrl::new(&args.base_url).context("Invalid base URL")?;
    let config = ClientConfig::default()
        .with_base_url(base_url)
        .with_language(&args.language);

    Client::new(config, Credentials::new(username, password)).context("Failed to create client")
}
