use clap::{Parser, Subcommand};
use std::path::PathBuf;

use admyrrand_core::config::DEFAULT_CONFIG_FILE;

mod commands;

#[derive(Parser, Debug)]
#[command(name = "admyrrand", version, about = "Admyrrand analytics dashboard")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the dashboard until interrupted.
    Run {
        /// Configuration file (YAML or TOML). Falls back to ADMYRRAND_CONFIG,
        /// then ./admyrrand.yaml if present, then built-in defaults.
        #[arg(long, short)]
        config: Option<PathBuf>,

        /// Override dashboard.host
        #[arg(long)]
        host: Option<String>,

        /// Override dashboard.port (takes precedence over ADMYRRAND_PORT)
        #[arg(long, short)]
        port: Option<u16>,
    },

    /// Validate a configuration file against the schema and report findings.
    Check {
        /// Configuration file to check. Same lookup as `run`.
        #[arg(long, short)]
        config: Option<PathBuf>,
    },

    /// Write a commented default configuration file.
    Init {
        /// Where to write the file
        #[arg(long, short, default_value = DEFAULT_CONFIG_FILE)]
        path: PathBuf,

        /// Overwrite the file if it already exists
        #[arg(long, default_value_t = false)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Command::Run { config, host, port } => commands::run::run(config, host, port).await,
        Command::Check { config } => commands::check::run(config),
        Command::Init { path, force } => commands::init::run(&path, force),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_run_overrides() {
        let cli = Cli::try_parse_from(["admyrrand", "run", "--port", "9090", "-c", "a.toml"]).unwrap();
        match cli.cmd {
            Command::Run { config, host, port } => {
                assert_eq!(config, Some(PathBuf::from("a.toml")));
                assert_eq!(host, None);
                assert_eq!(port, Some(9090));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_init_defaults_to_yaml_file() {
        let cli = Cli::try_parse_from(["admyrrand", "init"]).unwrap();
        match cli.cmd {
            Command::Init { path, force } => {
                assert_eq!(path, PathBuf::from("admyrrand.yaml"));
                assert!(!force);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
