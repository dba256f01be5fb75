use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "gaussboard", version, about = "Gaussian sample database round-trip with a browser chart")]
pub struct Cli {
    /// Path to the YAML config file. Without it, $CONFIG_PATH is
    /// consulted, then ./config.yaml, then built-in defaults.
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Copy, Subcommand)]
pub enum Command {
    /// Seed the database if empty, then serve the chart (default).
    Serve,
    /// Seed the database and print inserted row counts, then exit.
    Seed,
    /// Print the round-tripped figure JSON to stdout, then exit.
    Show,
}

impl Cli {
    pub fn command(&self) -> Command {
        self.command.unwrap_or(Command::Serve)
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Cli, Command};

    #[test]
    fn defaults_to_serve() {
        let cli = Cli::parse_from(["gaussboard"]);
        assert!(matches!(cli.command(), Command::Serve));
        assert!(cli.config.is_none());
    }

    #[test]
    fn parses_seed_with_config_path() {
        let cli = Cli::parse_from(["gaussboard", "--config", "/tmp/demo.yaml", "seed"]);
        assert!(matches!(cli.command(), Command::Seed));
        assert_eq!(
            cli.config.as_deref().map(|p| p.to_string_lossy().to_string()),
            Some("/tmp/demo.yaml".to_string())
        );
    }
}
