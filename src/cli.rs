// command line interface

use std::io::BufRead;

use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use tracing::error;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::output::Output;
use crate::{Classifier, FailPolicy, Provider, Server};

#[derive(Parser)]
#[command(name = "xfilter", about = "Filter tweets with a plain english rule")]
struct Cli {
    /// model provider (azure, gemini)
    #[arg(long, short, env = "XFILTER_PROVIDER", default_value = "azure", global = true)]
    provider: Provider,

    /// what to answer when the model output can't be parsed (open, closed)
    #[arg(long, env = "XFILTER_FAIL_POLICY", default_value = "open", global = true)]
    fail_policy: FailPolicy,

    /// debug logging
    #[arg(long, short, global = true)]
    verbose: bool,

    /// port number for serve
    #[arg(long, env = "PORT", default_value = "8000", global = true)]
    port: u16,

    /// host to bind for serve
    #[arg(long, env = "HOST", default_value = "0.0.0.0", global = true)]
    host: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// start as http server (default)
    Serve,

    /// classify tweets once and print the verdicts
    Classify {
        /// rule to match against, defaults to the startup/business rule
        #[arg(long, short)]
        rule: Option<String>,

        /// print json instead of a table
        #[arg(long)]
        json: bool,

        /// tweets to classify, read one per line from stdin when empty
        items: Vec<String>,
    },
}

pub async fn run() -> Result<()> {
    // a missing .env is fine, the real environment may have everything
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            // come up anyway so the operator sees 503s instead of a dead port
            let classifier = match cli.provider.connect() {
                Ok(provider) => Some(Classifier::new(provider, cli.fail_policy)),
                Err(e) => {
                    error!(error = %e, provider = ?cli.provider, "failed to initialize model client");
                    None
                }
            };
            Ok(Server::run(classifier, &cli.host, cli.port).await?)
        }

        Commands::Classify { rule, json, items } => {
            let items = if items.is_empty() {
                read_stdin()?
            } else {
                items
            };

            let classifier = Classifier::new(cli.provider.connect()?, cli.fail_policy);
            let results = classifier.classify(&items, rule.as_deref()).await?;

            if json {
                Output::raw(&results);
            } else {
                Output::pretty(&items, &results);
            }
            Ok(())
        }
    }
}

fn read_stdin() -> Result<Vec<String>> {
    let mut items = Vec::new();
    for line in std::io::stdin().lock().lines() {
        let line = line.into_diagnostic()?;
        if !line.trim().is_empty() {
            items.push(line);
        }
    }
    Ok(items)
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("xfilter=debug,tower_http=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("xfilter=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
