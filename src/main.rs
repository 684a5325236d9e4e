use anyhow::Context;
use tracing_subscriber::{EnvFilter, fmt};

use smm_chatbot::ChatBot;
use smm_chatbot::services::session_manager::run_session;

fn main() {
    // Logs go to stderr; stdout carries only the conversation.
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    if let Err(e) = run() {
        tracing::error!("chatbot failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let bot = ChatBot::builtin().context("failed to initialise chatbot")?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let summary = run_session(&bot, stdin.lock(), stdout.lock()).context("chat session failed")?;

    tracing::info!(
        exit_reason = ?summary.exit_reason,
        metrics = %serde_json::to_string(&summary.metrics)?,
        "session finished"
    );
    Ok(())
}
