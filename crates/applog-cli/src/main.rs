mod cli;
mod handlers;
mod output;

use applog_core::LoggerConfig;
use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use crossterm::tty::IsTty;

fn main() {
    if let Err(err) = init_tracing() {
        output::fatal(&err);
    }

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        output::fatal(&err);
    }
}

fn init_tracing() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("APPLOG_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::WARN)
            .init();
    }
    Ok(())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    if let Commands::Completions { shell } = cli.command {
        clap_complete::generate(shell, &mut Cli::command(), "applog", &mut std::io::stdout());
        return Ok(());
    }

    let mut config = LoggerConfig::load_with(|name| cli.setting(name))?;
    if cli.no_color || !std::io::stderr().is_tty() {
        config = config.with_ansi(false);
    }
    tracing::debug!("Resolved logger config: {:?}", config);

    match cli.command {
        Commands::Error(args) => handlers::record::handle_error(&config, args),
        Commands::Created(args) => {
            handlers::record::handle_action(&config, applog_core::ActionKind::Create, args)
        }
        Commands::Updated(args) => {
            handlers::record::handle_action(&config, applog_core::ActionKind::Update, args)
        }
        Commands::Deleted(args) => {
            handlers::record::handle_action(&config, applog_core::ActionKind::Delete, args)
        }
        Commands::Show(args) => handlers::show::handle(&config, args),
        Commands::Completions { .. } => Ok(()),
    }
}
