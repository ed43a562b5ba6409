//! awssume - run commands with credentials from an assumed AWS IAM Role
//!
//! # Configuration
//!
//! Roles are stored in exactly one of `~/.config/awssume.{yaml,json,toml}`.
//! The file is created (empty, YAML) on first use.
//!
//! # Environment Variables
//!
//! - `AWSSUME_CONFIG`: Config path without extension (same as `--config`)
//! - `AWSSUME_LOG`: Log filter directive (default: `warn`)

mod commands;
mod logging;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use awssume_execution::DEFAULT_SESSION_DURATION_SECS;
use awssume_infrastructure::{ConfigStore, OsFileSystem};

#[derive(Parser, Debug)]
#[command(name = "awssume")]
#[command(about = "CLI for performing sts:AssumeRole", long_about = None)]
#[command(arg_required_else_help = true)]
struct Cli {
    /// Configuration file path, without extension
    #[arg(long, global = true, env = "AWSSUME_CONFIG", value_name = "PATH")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Display awssume version
    Version,

    /// List configured Roles
    #[command(visible_aliases = ["l", "ls"])]
    List,

    /// Add a new Role
    #[command(visible_alias = "a")]
    Add {
        /// Role ARN, e.g. arn:aws:iam::123456789012:role/admin
        arn: String,
        alias: String,
        session_name: String,
    },

    /// Remove a Role
    #[command(visible_alias = "rm")]
    Remove { alias: String },

    /// Convert configuration between formats
    #[command(visible_aliases = ["c", "conv"])]
    Convert {
        /// Target format: json, yaml or toml
        format: String,
    },

    /// Execute a subprocess with Role credentials as environment variables
    #[command(visible_aliases = ["e", "ex", "exe"])]
    Exec {
        alias: String,

        /// The duration of the STS Session when the Role is assumed
        #[arg(short = 'd', long, default_value_t = DEFAULT_SESSION_DURATION_SECS)]
        session_duration: i64,

        /// Command to run after `--` (defaults to $SHELL)
        #[arg(last = true, value_name = "COMMAND")]
        command: Vec<String>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            println!("{e:#}");
            1
        }
    };

    std::process::exit(code);
}

/// Dispatches the subcommand and returns the process exit code.
async fn run(cli: Cli) -> Result<i32> {
    if let Commands::Version = cli.command {
        commands::version::show();
        return Ok(0);
    }

    let config_path = commands::config_path(cli.config)?;
    tracing::debug!(path = %config_path.display(), "using configuration path");
    let store = ConfigStore::new(OsFileSystem::new());

    match cli.command {
        Commands::Version => {}
        Commands::List => commands::list::run(&store, &config_path, &mut std::io::stdout())?,
        Commands::Add {
            arn,
            alias,
            session_name,
        } => commands::add::run(&store, &config_path, &arn, &alias, &session_name)?,
        Commands::Remove { alias } => commands::remove::run(&store, &config_path, &alias)?,
        Commands::Convert { format } => commands::convert::run(&store, &config_path, &format)?,
        Commands::Exec {
            alias,
            session_duration,
            command,
        } => {
            return commands::exec::run(&store, &config_path, alias, session_duration, command)
                .await;
        }
    }

    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_exec_parses_trailing_command() {
        let cli = Cli::try_parse_from([
            "awssume", "ex", "skunk", "-d", "900", "--", "aws", "s3", "ls", "--recursive",
        ])
        .unwrap();

        match cli.command {
            Commands::Exec {
                alias,
                session_duration,
                command,
            } => {
                assert_eq!(alias, "skunk");
                assert_eq!(session_duration, 900);
                assert_eq!(command, vec!["aws", "s3", "ls", "--recursive"]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_exec_defaults() {
        let cli = Cli::try_parse_from(["awssume", "exec", "skunk"]).unwrap();
        match cli.command {
            Commands::Exec {
                session_duration,
                command,
                ..
            } => {
                assert_eq!(session_duration, 3600);
                assert!(command.is_empty());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_list_aliases() {
        for alias in ["list", "l", "ls"] {
            let cli = Cli::try_parse_from(["awssume", alias]).unwrap();
            assert!(matches!(cli.command, Commands::List));
        }
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::try_parse_from(["awssume", "ls", "--config", "/tmp/cfg"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/cfg")));
    }
}
