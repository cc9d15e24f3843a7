//! CLI argument definitions.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use askbox_core::ApiUrl;
use askbox_http::ClientConfig;

use crate::commands::{auth, navigate, questions};

/// Command-line client for the askbox question service.
#[derive(Parser, Debug)]
#[command(name = "askbox")]
#[command(author, version = env!("ASKBOX_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Server root URL
    #[arg(
        long,
        global = true,
        env = "ASKBOX_API_URL",
        default_value = askbox_core::types::DEFAULT_API_URL
    )]
    pub api_url: String,

    /// Seconds to wait for the server during logout before clearing locally
    #[arg(long, global = true, default_value_t = 5)]
    pub logout_timeout: u64,

    /// Overall timeout in seconds for other requests
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Session file (defaults to the user data directory)
    #[arg(long, global = true, env = "ASKBOX_SESSION_FILE")]
    pub session_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Builds the client configuration from the global flags.
    pub fn client_config(&self) -> Result<ClientConfig> {
        let base_url = ApiUrl::new(&self.api_url).context("Invalid API URL")?;
        let mut config = ClientConfig::new(base_url)
            .with_logout_timeout(Duration::from_secs(self.logout_timeout));
        if let Some(secs) = self.timeout {
            config = config.with_request_timeout(Duration::from_secs(secs));
        }
        Ok(config)
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in and store the session
    Login(auth::LoginArgs),

    /// Create an account and store the session
    Signup(auth::SignupArgs),

    /// End the session on the server and remove it locally
    Logout(auth::LogoutArgs),

    /// Show whether a session is stored
    Whoami(auth::WhoamiArgs),

    /// List registered users
    Users(questions::UsersArgs),

    /// Show the public feed of answered questions
    Feed(questions::FeedArgs),

    /// List questions sent to a user
    Inbox(questions::InboxArgs),

    /// List questions a user has asked
    Asked(questions::AskedArgs),

    /// Send a question to a user
    Ask(questions::AskArgs),

    /// Answer a question
    Answer(questions::AnswerArgs),

    /// Ignore a question
    Ignore(questions::IgnoreArgs),

    /// Decide where navigating to a route ends up
    Navigate(navigate::NavigateArgs),

    /// List the routes and their access classes
    Routes(navigate::RoutesArgs),
}
