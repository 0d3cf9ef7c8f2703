mod command;
mod terminal;
mod vm;

use clap::Parser;
use services::config::{ENDPOINT_VAR, ITEMS_VAR, TIMEOUT_VAR};
use services::{QuizSession, SubmissionConfig};
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

/// Answer each quiz item as correct or incorrect, then submit the set.
#[derive(Parser, Debug)]
#[command(name = "quiz")]
struct Args {
    /// Endpoint that receives the answers as a JSON POST [env: QUIZ_ENDPOINT]
    #[arg(long)]
    endpoint: Option<String>,

    /// Comma-separated item labels, in display order [env: QUIZ_ITEMS]
    #[arg(long)]
    items: Option<String>,

    /// HTTP client timeout in seconds [env: QUIZ_TIMEOUT_SECS]
    #[arg(long)]
    timeout_secs: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "QUIZ_LOG", default_value = "warn")]
    log_level: String,
}

impl Args {
    /// Flag value for a config key; flags win over the environment.
    fn flag(&self, key: &str) -> Option<String> {
        match key {
            ENDPOINT_VAR => self.endpoint.clone(),
            ITEMS_VAR => self.items.clone(),
            TIMEOUT_VAR => self.timeout_secs.clone(),
            _ => None,
        }
    }
}

fn init_tracing(level: &str) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_new(format!(
        "app={level},services={level},quiz_core={level},reqwest=warn"
    ))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact()
        .init();
    Ok(())
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing(&args.log_level)?;

    let config = SubmissionConfig::from_lookup(|key| {
        args.flag(key).or_else(|| std::env::var(key).ok())
    })?;
    tracing::info!(
        endpoint = %config.endpoint,
        items = config.catalog.len(),
        "quiz configured"
    );

    let quiz = QuizSession::from_config(&config)?;
    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    terminal::run(quiz, stdin, &mut stdout).await?;
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
