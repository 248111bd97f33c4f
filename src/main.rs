//! historai binary entry point.

mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use historai::cli::{Cli, Commands, ConfigCommands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);
    tracing::debug!("Debug logging enabled");

    let config_file = cli.config.as_deref();

    match cli.command {
        Commands::Find {
            query,
            source,
            agent,
        } => {
            let config = commands::load_config(config_file)?;
            commands::find::handle(&config, &query, &source, &agent)
        }
        Commands::Suggest {
            task,
            source,
            no_history_context,
            agent,
        } => {
            let config = commands::load_config(config_file)?;
            commands::suggest::handle(&config, &task, &source, no_history_context, &agent)
        }
        Commands::History {
            source,
            json,
            timestamps,
        } => {
            let config = commands::load_config(config_file)?;
            commands::history::handle(&config, &source, json, timestamps)
        }
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => {
                commands::config::handle_show(&commands::load_config(config_file)?)
            }
            ConfigCommands::Path => commands::config::handle_path(config_file),
            ConfigCommands::Edit => commands::config::handle_edit(config_file),
        },
        Commands::Completions { shell } => commands::handle_completions(shell),
    }
}

/// Log to stderr: warnings by default, everything with `--debug`.
/// `RUST_LOG` overrides both.
fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
