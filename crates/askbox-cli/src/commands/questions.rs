//! Users and questions subcommands.

use anyhow::{Context as _, Result};
use clap::Args;
use colored::Colorize;

use askbox_http::Question;

use super::Context;
use crate::output;

/// Output flags shared by the listing commands.
#[derive(Args, Debug)]
pub struct ListFormat {
    /// Print one JSON object per line
    #[arg(long)]
    pub json: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Args, Debug)]
pub struct UsersArgs {
    #[command(flatten)]
    pub format: ListFormat,
}

#[derive(Args, Debug)]
pub struct FeedArgs {
    #[command(flatten)]
    pub format: ListFormat,
}

#[derive(Args, Debug)]
pub struct InboxArgs {
    /// User whose received questions to list
    pub user_id: String,

    #[command(flatten)]
    pub format: ListFormat,
}

#[derive(Args, Debug)]
pub struct AskedArgs {
    /// User whose asked questions to list
    pub user_id: String,

    #[command(flatten)]
    pub format: ListFormat,
}

#[derive(Args, Debug)]
pub struct AskArgs {
    /// Recipient user id
    pub to: String,

    /// Question text
    pub question: String,

    /// Hide the sender from the recipient
    #[arg(long)]
    pub anonymous: bool,
}

#[derive(Args, Debug)]
pub struct AnswerArgs {
    /// Question id
    pub question_id: String,

    /// Answer text
    pub answer: String,
}

#[derive(Args, Debug)]
pub struct IgnoreArgs {
    /// Question id
    pub question_id: String,
}

pub async fn users(ctx: &Context, args: UsersArgs) -> Result<()> {
    let users = ctx
        .client
        .questions()
        .list_users()
        .await
        .context("Failed to list users")?;

    if users.is_empty() {
        output::note("No users found.");
        return Ok(());
    }

    for user in &users {
        if args.format.pretty {
            output::json_pretty(user)?;
        } else if args.format.json {
            output::json(user)?;
        } else {
            println!("{}  {}", user.id.dimmed(), user.username);
        }
    }

    Ok(())
}

pub async fn feed(ctx: &Context, args: FeedArgs) -> Result<()> {
    let questions = ctx
        .client
        .questions()
        .feed()
        .await
        .context("Failed to fetch feed")?;

    print_questions(&questions, &args.format)
}

pub async fn inbox(ctx: &Context, args: InboxArgs) -> Result<()> {
    let questions = ctx
        .client
        .questions()
        .received_questions(&args.user_id)
        .await
        .context("Failed to list received questions")?;

    print_questions(&questions, &args.format)
}

pub async fn asked(ctx: &Context, args: AskedArgs) -> Result<()> {
    let questions = ctx
        .client
        .questions()
        .asked_questions(&args.user_id)
        .await
        .context("Failed to list asked questions")?;

    print_questions(&questions, &args.format)
}

pub async fn ask(ctx: &Context, args: AskArgs) -> Result<()> {
    let reply = ctx
        .client
        .questions()
        .send_question(&args.to, &args.question, args.anonymous)
        .await
        .context("Failed to send question")?;

    output::success("Question sent");
    print_reply(&reply)
}

pub async fn answer(ctx: &Context, args: AnswerArgs) -> Result<()> {
    let reply = ctx
        .client
        .questions()
        .answer_question(&args.question_id, &args.answer)
        .await
        .context("Failed to answer question")?;

    output::success("Answer saved");
    print_reply(&reply)
}

pub async fn ignore(ctx: &Context, args: IgnoreArgs) -> Result<()> {
    let reply = ctx
        .client
        .questions()
        .ignore_question(&args.question_id)
        .await
        .context("Failed to ignore question")?;

    output::success("Question ignored");
    print_reply(&reply)
}

fn print_questions(questions: &[Question], format: &ListFormat) -> Result<()> {
    if questions.is_empty() {
        output::note("No questions found.");
        return Ok(());
    }

    for question in questions {
        if format.pretty {
            output::json_pretty(question)?;
        } else if format.json {
            output::json(question)?;
        } else {
            print_question(question);
        }
    }

    Ok(())
}

fn print_question(question: &Question) {
    let when = question
        .created_at
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default();
    let sender = if question.is_anonymous { " (anonymous)" } else { "" };

    println!("{} {}{}", question.id.dimmed(), when.dimmed(), sender.dimmed());
    println!("  {} {}", "Q:".bold(), question.question);
    match question.answer.as_deref().filter(|_| question.is_answered()) {
        Some(answer) => println!("  {} {}", "A:".bold(), answer),
        None => println!("  {}", "unanswered".yellow()),
    }
    println!();
}

fn print_reply(reply: &serde_json::Value) -> Result<()> {
    if reply.is_null() {
        return Ok(());
    }
    println!();
    output::json_pretty(reply)
}
