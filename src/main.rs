use clap::Parser;
use scrapeview::adapter::inbound::cli::command::{Cli, Commands, ConfigCommand};
use scrapeview::adapter::inbound::cli::output::{self, OutputConfig};
use scrapeview::adapter::inbound::cli::{browse, categories, check, config, search};
use scrapeview::error::Result;
use scrapeview::infrastructure::config::settings::Config;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::apply_color(&cli.color);
    output::configure(OutputConfig::new(cli.json, cli.quiet));

    if let Err(e) = run(cli).await {
        error!(error = %e, "Command failed");
        output::error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Categories => return categories::execute(),
        Commands::Config(ConfigCommand::Path) => return config::execute_path(&cli.config),
        _ => {}
    }

    let settings = Config::load_or_default(&cli.config)?;
    settings
        .logging
        .clone()
        .with_verbosity(cli.verbose, cli.quiet)
        .init();
    info!(config = %cli.config.display(), "scrapeview starting");

    match &cli.command {
        Commands::Search(args) => search::execute(&settings, args).await,
        Commands::Browse(args) => {
            tokio::select! {
                result = browse::execute(&settings, args) => result,
                _ = tokio::signal::ctrl_c() => {
                    info!("Interrupted");
                    Ok(())
                }
            }
        }
        Commands::Check => check::execute(&settings).await,
        Commands::Config(ConfigCommand::Show) => config::execute_show(&cli.config, &settings),
        Commands::Categories | Commands::Config(ConfigCommand::Path) => Ok(()),
    }
}
