use std::process::ExitCode;

use brierly::adapter::inbound::cli::command::{Cli, ColorChoice, Commands, ConfigCommand};
use brierly::adapter::inbound::cli::output::{self, OutputConfig};
use brierly::adapter::inbound::cli::{config, fixtures, score};
use brierly::error::Result;
use brierly::infrastructure::config::settings::Config;
use clap::Parser;
use tracing::{debug, error};

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {}
    }
    output::configure(OutputConfig::new(cli.json, cli.quiet, cli.verbose));

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Command failed");
            output::error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    if let Commands::Config(ConfigCommand::Validate) = cli.command {
        return config::execute_validate(&cli.config);
    }

    let mut settings = Config::load_or_default(&cli.config)?;
    if cli.verbose > 1 {
        settings.logging.level = "debug".into();
    }
    settings.init_logging();
    debug!(config = %cli.config.display(), "Configuration loaded");

    match &cli.command {
        Commands::Score(args) => score::execute(args, &settings).await,
        Commands::Fixtures => fixtures::execute(&settings),
        Commands::Config(ConfigCommand::Show) => config::execute_show(&cli.config, &settings),
        Commands::Config(ConfigCommand::Validate) => config::execute_validate(&cli.config),
    }
}
