//! Route guard subcommands.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::Serialize;

use askbox_core::{NavigationGuard, NavigationOutcome, NavigationRequest, RouteTable};

use super::Context;
use crate::output;

#[derive(Args, Debug)]
pub struct NavigateArgs {
    /// Route name or path to enter
    pub target: String,

    /// Route being left
    #[arg(long)]
    pub from: Option<String>,

    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct RoutesArgs {
    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct Decision<'a> {
    outcome: &'static str,
    route: &'a str,
    path: Option<&'a str>,
}

pub fn navigate(ctx: &Context, args: NavigateArgs) -> Result<()> {
    let table = RouteTable::default();

    let target = resolve_name(&table, &args.target);
    let mut request = NavigationRequest::to(target);
    if let Some(from) = &args.from {
        request = request.from_route(resolve_name(&table, from));
    }

    let guard = NavigationGuard::new(&table, ctx.client.store());
    let outcome = guard.navigate(&request);
    let path = table.get(outcome.route()).map(|r| r.path.as_str());

    if args.json {
        return output::json(&Decision {
            outcome: if outcome.is_redirect() { "redirect" } else { "allow" },
            route: outcome.route(),
            path,
        });
    }

    let label = match &outcome {
        NavigationOutcome::Allow(_) => "allow".green(),
        NavigationOutcome::Redirect(_) => "redirect".yellow(),
    };
    match path {
        Some(path) => println!("{} {} {}", label, outcome.route(), path.dimmed()),
        None => println!("{} {}", label, outcome.route()),
    }

    Ok(())
}

pub fn routes(args: RoutesArgs) -> Result<()> {
    let table = RouteTable::default();

    if args.json {
        return output::json(&table.routes());
    }

    for route in table.routes() {
        println!(
            "{:<10} {:<10} {}",
            route.name,
            route.path,
            route.access.to_string().dimmed()
        );
    }
    println!();
    output::field("Login route", table.login_route());
    output::field("Landing route", table.landing_route());

    Ok(())
}

/// Maps a path such as `/profile` to its route name. Unknown input is kept
/// as-is and treated as a public route by the guard.
fn resolve_name(table: &RouteTable, name_or_path: &str) -> String {
    table
        .resolve(name_or_path)
        .map(|r| r.name.clone())
        .unwrap_or_else(|| name_or_path.to_string())
}
