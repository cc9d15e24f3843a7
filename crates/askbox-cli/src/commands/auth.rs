//! Login, signup, logout and whoami.

use anyhow::{Context as _, Result};
use clap::Args;
use colored::Colorize;
use serde::Serialize;

use askbox_core::{Credentials, SessionState, Signup};

use super::Context;
use crate::output;

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Account username
    #[arg(long)]
    pub username: String,

    /// Account password
    #[arg(long, env = "ASKBOX_PASSWORD", hide_env_values = true)]
    pub password: String,
}

#[derive(Args, Debug)]
pub struct SignupArgs {
    /// Username for the new account
    #[arg(long)]
    pub username: String,

    /// Email address for the new account
    #[arg(long)]
    pub email: String,

    /// Password for the new account
    #[arg(long, env = "ASKBOX_PASSWORD", hide_env_values = true)]
    pub password: String,
}

#[derive(Args, Debug)]
pub struct LogoutArgs {}

#[derive(Args, Debug)]
pub struct WhoamiArgs {
    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn login(ctx: &Context, args: LoginArgs) -> Result<()> {
    let credentials = Credentials::new(&args.username, &args.password);

    output::note("Logging in...");

    ctx.client
        .login(&credentials)
        .await
        .context("Failed to login")?;

    output::success("Logged in successfully");
    println!();
    output::field("Username", &args.username);
    output::field("Server", ctx.client.http().base_url().as_str());

    Ok(())
}

pub async fn signup(ctx: &Context, args: SignupArgs) -> Result<()> {
    let signup = Signup::new(&args.username, &args.email, &args.password);

    output::note("Creating account...");

    ctx.client
        .signup(&signup)
        .await
        .context("Failed to sign up")?;

    output::success("Account created");
    println!();
    output::field("Username", &args.username);
    output::field("Email", &args.email);
    output::field("Server", ctx.client.http().base_url().as_str());

    Ok(())
}

pub async fn logout(ctx: &Context, _args: LogoutArgs) -> Result<()> {
    ctx.client
        .logout()
        .await
        .context("Failed to remove local session")?;

    output::success("Logged out");
    Ok(())
}

#[derive(Debug, Serialize)]
struct SessionSummary<'a> {
    authenticated: bool,
    server: &'a str,
    session_file: String,
}

/// Reports whether a session is stored. Tokens are never printed.
pub fn whoami(ctx: &Context, args: WhoamiArgs) -> Result<()> {
    let state = ctx
        .client
        .session_state()
        .context("Failed to read session")?;

    let summary = SessionSummary {
        authenticated: state.is_authenticated(),
        server: ctx.client.http().base_url().as_str(),
        session_file: ctx.storage().path().display().to_string(),
    };

    if args.json {
        return output::json(&summary);
    }

    match state {
        SessionState::Authenticated => output::field("Session", &"active".green().to_string()),
        SessionState::Anonymous => output::field("Session", &"none".yellow().to_string()),
    }
    output::field("Server", summary.server);
    output::field("Session file", &summary.session_file);

    Ok(())
}
