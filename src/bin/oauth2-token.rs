use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser;
use oauth2_token::cache::cache_store::CacheStore;
use oauth2_token::config::loader;
use oauth2_token::config::settings::LogFormat;
use oauth2_token::sources::acquirer::TokenAcquirer;
use oauth2_token::sources::build_client;
use oauth2_token::utils::config_loader;
use oauth2_token::utils::logging::{self, LogLevel};
use oauth2_token::utils::output::{self, OutputMode};
use tracing::error;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to config file [default: ~/.oauth.toml]
    #[arg(short = 'f', long, env = "OAUTH2_TOKEN_CONFIG")]
    config: Option<PathBuf>,
    /// OAuth client name in config file
    #[arg(short = 'c', long)]
    client: Option<String>,
    /// Only print access token
    #[arg(short = 'p', long)]
    print_token: bool,
    #[arg(long, env = "LOG_LEVEL", value_enum)]
    log_level: Option<LogLevel>,
    /// Falls back to LOG_FORMAT
    #[arg(long, value_enum)]
    log_format: Option<LogFormat>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();
    logging::run(args.log_level, args.log_format);

    match run(args).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<String> {
    // -------------------------------
    // 1. Resolve client from config
    // -------------------------------

    let Some(client_name) = args.client else {
        bail!("please specify a client name from the config file (see -h)");
    };
    let config_path = match args.config {
        Some(path) => path,
        None => loader::default_config_path()?,
    };
    let config = config_loader::run(&config_path).await?;
    let credentials = config
        .credentials(&client_name)
        .with_context(|| format!("config file '{}'", config_path.display()))?;

    // -------------------------------
    // 2. Obtain token, cached or fresh
    // -------------------------------

    let client = build_client(&config.settings).context("failed to build http client")?;
    let store = CacheStore::new(loader::cache_root()?);
    let token = TokenAcquirer::new(client, store).obtain(&credentials).await?;

    Ok(output::render(&token, OutputMode::from_flag(args.print_token)))
}
