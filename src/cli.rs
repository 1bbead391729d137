use std::path::PathBuf;

mod check;
mod prompt;
mod sort;
mod terminal;

use carlog::Config;
use check::Check;
use clap::ArgAction;
use sort::Sort;

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let config = match &self.config {
            Some(path) => Config::load(path).map_err(anyhow::Error::msg)?,
            None => Config::default(),
        };
        tracing::debug!(?config, "loaded configuration");

        self.command
            .unwrap_or_else(|| Command::Sort(Sort::default()))
            .run(&config)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        // Records go to stdout, so logs stay on stderr.
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Sort the built-in records and print them (default)
    ///
    /// Prompts for the sort order unless one is given with --by or in the
    /// configuration file.
    Sort(Sort),

    /// Check lines for validity and report each one
    ///
    /// Checks the built-in records when no lines are given.
    Check(Check),
}

impl Command {
    fn run(self, config: &Config) -> anyhow::Result<()> {
        match self {
            Self::Sort(command) => command.run(config)?,
            Self::Check(command) => command.run(config)?,
        }
        Ok(())
    }
}
