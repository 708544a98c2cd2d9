mod server;
mod session;

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use coach_core::render;
use coach_store::CoachStore;
use rmcp::{ServiceExt, transport::stdio};

use crate::session::Coach;

#[derive(Parser)]
#[command(name = "coach", about = "Mood check-in coach: chat loop, one-shot and MCP server")]
struct Cli {
    /// Directory holding coach.toml, the memory file and quotes.json
    /// (defaults to $COACH_DATA_DIR, then the current directory)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Enable verbose debug output
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive chat on stdin/stdout, one message per line
    Chat,

    /// Handle a single message and print the reply
    Say {
        /// Message text or command (why, save, reset, correct: <mood>)
        text: String,
    },

    /// Show the recent mood history
    History,

    /// Start MCP server on stdio transport
    Serve,
}

fn open_store(cli: &Cli) -> Result<CoachStore> {
    CoachStore::open(cli.data_dir.as_deref()).context("failed to open coach store")
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Chat => cmd_chat(&cli),
        Commands::Say { text } => cmd_say(&cli, text),
        Commands::History => cmd_history(&cli),
        Commands::Serve => cmd_serve(&cli).await,
    }
}

async fn cmd_serve(cli: &Cli) -> Result<()> {
    let store = open_store(cli)?;
    tracing::info!("starting MCP server with data dir {}", store.data_dir().display());

    let service = server::CoachServer::new(store)
        .serve(stdio())
        .await
        .context("failed to start MCP server")?;
    service.waiting().await?;
    Ok(())
}

fn cmd_chat(cli: &Cli) -> Result<()> {
    let mut coach = Coach::new(open_store(cli)?);
    let stdin = std::io::stdin();
    let mut out = std::io::stdout().lock();

    writeln!(out, "{}", render::welcome())?;
    out.flush()?;

    for line in stdin.lock().lines() {
        let line = line.context("failed to read stdin")?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        if text.eq_ignore_ascii_case("quit") || text.eq_ignore_ascii_case("exit") {
            break;
        }

        let replies = coach.handle(text).context("failed to handle message")?;
        for reply in replies {
            writeln!(out, "{reply}\n")?;
        }
        out.flush()?;
    }
    Ok(())
}

fn cmd_say(cli: &Cli, text: &str) -> Result<()> {
    let mut coach = Coach::new(open_store(cli)?);
    let replies = coach.handle(text).context("failed to handle message")?;
    println!("{}", replies.join("\n\n"));
    Ok(())
}

fn cmd_history(cli: &Cli) -> Result<()> {
    let store = open_store(cli)?;
    let state = store.memory().load();
    println!("{}", render::history(&state));
    if cli.verbose {
        eprintln!("--- memory file: {} ---", store.memory().path().display());
    }
    Ok(())
}
