//! Subcommand implementations.

pub mod auth;
pub mod navigate;
pub mod questions;

use anyhow::{Context as _, Result};
use tracing::debug;

use askbox_http::SessionClient;

use crate::cli::{Cli, Commands};
use crate::storage::FileStorage;

/// Everything a subcommand needs: the configured client and its session file.
pub struct Context {
    pub client: SessionClient<FileStorage>,
}

impl Context {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let storage = match &cli.session_file {
            Some(path) => FileStorage::new(path),
            None => FileStorage::default_location()?,
        };
        let config = cli.client_config()?;
        let client = SessionClient::new(&config, storage).context("Failed to build HTTP client")?;
        Ok(Self { client })
    }

    pub fn storage(&self) -> &FileStorage {
        self.client.store().storage()
    }
}

pub async fn handle(cli: Cli) -> Result<()> {
    let ctx = Context::from_cli(&cli)?;
    debug!(
        api_url = %ctx.client.http().base_url(),
        session_file = %ctx.storage().path().display(),
        "Client configured"
    );

    match cli.command {
        Commands::Login(args) => auth::login(&ctx, args).await,
        Commands::Signup(args) => auth::signup(&ctx, args).await,
        Commands::Logout(args) => auth::logout(&ctx, args).await,
        Commands::Whoami(args) => auth::whoami(&ctx, args),
        Commands::Users(args) => questions::users(&ctx, args).await,
        Commands::Feed(args) => questions::feed(&ctx, args).await,
        Commands::Inbox(args) => questions::inbox(&ctx, args).await,
        Commands::Asked(args) => questions::asked(&ctx, args).await,
        Commands::Ask(args) => questions::ask(&ctx, args).await,
        Commands::Answer(args) => questions::answer(&ctx, args).await,
        Commands::Ignore(args) => questions::ignore(&ctx, args).await,
        Commands::Navigate(args) => navigate::navigate(&ctx, args),
        Commands::Routes(args) => navigate::routes(args),
    }
}
