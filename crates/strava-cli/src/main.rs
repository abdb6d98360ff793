/*
[INPUT]:  CLI arguments, YAML configuration file, STRAVA_* environment variables
[OUTPUT]: JSON result of one API call on stdout
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or startup flow
*/

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use strava_api::StravaClient;
use strava_cli::{run, CliConfig, Command};

#[derive(Parser, Debug)]
#[command(name = "strava", version, about = "Strava gear and upload client")]
struct Cli {
    #[arg(long = "config", value_name = "PATH", global = true)]
    config_path: Option<PathBuf>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info", global = true)]
    log_level: String,
    #[arg(long = "base-path", value_name = "URL", global = true)]
    base_path: Option<String>,
    #[arg(long = "dry-run", global = true)]
    dry_run: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    let config = load_config(&args)?;
    info!(
        base_path = config.base_path.as_deref().unwrap_or(strava_api::http::DEFAULT_BASE_PATH),
        has_token = config.access_token.is_some(),
        "configuration loaded"
    );

    if args.dry_run {
        info!("dry-run requested; configuration validated");
        return Ok(());
    }

    let command = args
        .command
        .context("no command given, see --help")?;

    let client = StravaClient::with_config(config.to_configuration()).context("create client")?;
    let value = run(&client, command).await?;
    println!("{}", serde_json::to_string_pretty(&value)?);

    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

fn load_config(args: &Cli) -> Result<CliConfig> {
    let mut config = match &args.config_path {
        Some(path) => CliConfig::from_file(path).context("load config")?,
        None => CliConfig::default(),
    };
    config.apply_env(|key| std::env::var(key).ok())?;
    if let Some(base_path) = &args.base_path {
        config.base_path = Some(base_path.clone());
    }
    config.validate().context("validate config")?;
    Ok(config)
}
