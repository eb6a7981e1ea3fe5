//! Interactive and one-shot chat handlers.

use std::io::Write;
use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use super::catalog::{render_catalog, PRODUCT_CATALOG};
use crate::client::AgentClient;
use crate::config::AgentConfig;
use crate::session::{ConversationSession, UiFlag};

type CliResult = Result<(), Box<dyn std::error::Error>>;

/// One line of user input, interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatCommand {
    Message(String),
    Toggle(UiFlag),
    History,
    Quit,
    Empty,
}

impl ChatCommand {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        match line {
            "" => Self::Empty,
            "/quit" | "/exit" => Self::Quit,
            "/history" => Self::History,
            "/catalog" => Self::Toggle(UiFlag::ShowProducts),
            "/schedule" => Self::Toggle(UiFlag::ShowScheduler),
            _ => Self::Message(line.to_string()),
        }
    }
}

fn flag_label(flag: UiFlag) -> &'static str {
    match flag {
        UiFlag::ShowProducts => "Product catalog",
        UiFlag::ShowScheduler => "Meeting scheduler",
    }
}

/// Flip a UI flag and return what the terminal should show for it.
///
/// Opening the product catalog lists every product; the scheduler has no
/// terminal view beyond its open/closed line.
pub fn apply_toggle(session: &mut ConversationSession, flag: UiFlag) -> String {
    let open = !session.flag(flag.name());
    session.toggle_flag(flag.name(), open);

    let state = if open { "opened" } else { "closed" };
    let mut text = format!("{} {state}\n", flag_label(flag));
    if open && flag == UiFlag::ShowProducts {
        text.push_str(&render_catalog(&PRODUCT_CATALOG));
    }
    text
}

fn prompt<W: Write>(out: &mut W) -> std::io::Result<()> {
    write!(out, "you> ")?;
    out.flush()
}

fn print_history<W: Write>(session: &ConversationSession, out: &mut W) -> std::io::Result<()> {
    for turn in session.turns() {
        writeln!(out, "you> {}", turn.human.content)?;
        match turn.reply {
            Some(reply) => writeln!(out, "agent> {}", reply.content)?,
            None => writeln!(out, "  (no reply)")?,
        }
    }
    Ok(())
}

/// Drive a session from `input` until `/quit` or end of input.
///
/// Agent errors are written as `Error: <message>` and the loop continues.
pub async fn run_chat<R, W>(
    session: &mut ConversationSession,
    input: R,
    out: &mut W,
) -> CliResult
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    session.ensure_identity();
    if let Some(label) = session.conversation_label() {
        writeln!(out, "Conversation ID: {label}")?;
    }
    writeln!(out, "Commands: /catalog, /schedule, /history, /quit")?;
    prompt(out)?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        match ChatCommand::parse(&line) {
            ChatCommand::Quit => break,
            ChatCommand::Empty => {}
            ChatCommand::History => print_history(session, out)?,
            ChatCommand::Toggle(flag) => write!(out, "{}", apply_toggle(session, flag))?,
            ChatCommand::Message(text) => match session.submit_user_message(text).await {
                Ok(reply) => writeln!(out, "agent> {}", reply.content)?,
                Err(e) => writeln!(out, "Error: {e}")?,
            },
        }
        prompt(out)?;
    }

    writeln!(out)?;
    Ok(())
}

/// Run the interactive loop on stdin/stdout.
pub async fn handle_chat(config: AgentConfig) -> CliResult {
    let mut session = ConversationSession::new(Arc::new(AgentClient::new(config)));
    let stdin = BufReader::new(tokio::io::stdin());
    run_chat(&mut session, stdin, &mut std::io::stdout()).await
}

/// Send one message in a fresh session and write the reply to `out`.
pub async fn send_once<W: Write>(config: AgentConfig, message: String, out: &mut W) -> CliResult {
    let mut session = ConversationSession::new(Arc::new(AgentClient::new(config)));
    let reply = session.submit_user_message(message).await?;
    writeln!(out, "{}", reply.content)?;
    Ok(())
}

/// Send one message in a fresh session and print the reply.
pub async fn handle_send(config: AgentConfig, message: String) -> CliResult {
    send_once(config, message, &mut std::io::stdout()).await
}
