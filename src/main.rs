//! Wikipedia title search CLI.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use wikisearch::{render, SearchController, WikiClient};

/// Search Wikipedia article titles from the command line.
#[derive(Parser)]
#[command(name = "wikisearch")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Search query. Without one, starts an interactive session.
    query: Option<String>,

    /// Wikipedia language edition (e.g. "en", "de", "zh")
    #[arg(short, long, default_value = "en")]
    language: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
    }

    let client = WikiClient::new().with_language(&cli.language);
    let mut controller = SearchController::new(client);

    match cli.query {
        Some(query) => {
            controller.update_query(query);
            controller.submit().await;
            print!("{}", render(controller.query(), controller.state(), &cli.language));
        }
        None => run_session(&mut controller, &cli.language).await?,
    }

    Ok(())
}

/// Interactive loop: each input line becomes the query and is submitted.
/// An empty line is a no-op, exactly like submitting an empty search form.
async fn run_session(
    controller: &mut SearchController<WikiClient>,
    language: &str,
) -> Result<()> {
    println!("wikisearch interactive session (:quit or Ctrl-D to exit)");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim_end_matches(['\r', '\n']);
        if line == ":quit" {
            break;
        }

        controller.update_query(line);
        controller.submit().await;
        print!("{}", render(controller.query(), controller.state(), language));
    }

    Ok(())
}
