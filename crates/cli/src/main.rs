//! `arena`: play the DSA Arena games from a terminal.
//!
//! ```text
//! arena route levels
//! arena route play --level 1 --route isb,mul,suk,khi
//! arena route compute --file request.json
//! arena castle --seed 42
//! arena exec --file command.json
//! ```

mod render;
mod repl;

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use arena_engine::graph::types::ComputeRequest;
use arena_executor::{Arena, ArenaConfig, Error, Result};

#[derive(Debug, Parser)]
#[command(name = "arena", version, about = "Shortest-path and red-black tree games")]
struct Cli {
    /// TOML configuration file.
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Raise log verbosity (-v debug, -vv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Route Rally: shortest paths on weighted maps.
    Route {
        #[command(subcommand)]
        action: RouteAction,
    },
    /// Castle Defender: interactive red-black tree campaign.
    Castle {
        /// Seed for reproducible missions.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Execute one JSON command and print the JSON output.
    Exec {
        /// Command file. Reads stdin when omitted.
        #[arg(long, value_name = "FILE")]
        file: Option<PathBuf>,
    },
}

#[derive(Debug, Subcommand)]
enum RouteAction {
    /// Compute the optimal cost of a graph request.
    Compute {
        /// JSON request with nodes, edges, start and end.
        #[arg(long, value_name = "FILE")]
        file: PathBuf,
    },
    /// List built-in maps.
    Levels,
    /// Score a route on a built-in map.
    Play {
        /// Level number.
        #[arg(long)]
        level: u32,
        /// Comma-separated node ids from start to destination.
        #[arg(long, value_delimiter = ',')]
        route: Vec<String>,
    },
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = ArenaConfig::load(cli.config.as_deref())?;
    let arena = Arena::with_config(config)?;
    tracing::debug!(command = ?cli.command, "arena ready");

    match cli.command {
        Commands::Route { action } => route(&arena, action)?,
        Commands::Castle { seed } => repl::run(&arena, seed)?,
        Commands::Exec { file } => return exec(&arena, file.as_deref()),
    }
    Ok(ExitCode::SUCCESS)
}

fn route(arena: &Arena, action: RouteAction) -> Result<()> {
    match action {
        RouteAction::Compute { file } => {
            let text = std::fs::read_to_string(&file)?;
            let req: ComputeRequest = serde_json::from_str(&text)?;
            let result = arena.compute(req)?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        RouteAction::Levels => {
            print!("{}", render::levels(&arena.levels()?));
        }
        RouteAction::Play { level, route } => {
            let hops: Vec<&str> = route.iter().map(String::as_str).collect();
            let verdict = arena.check_route(level, &hops)?;
            print!("{}", render::verdict(&verdict));
        }
    }
    Ok(())
}

/// Raw boundary: command JSON in, output JSON out. Errors are printed as JSON
/// on stdout with a failing exit code.
fn exec(arena: &Arena, file: Option<&Path>) -> Result<ExitCode> {
    let raw = match file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    match arena.executor().execute_json(&raw) {
        Ok(out) => {
            println!("{}", out);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            println!("{}", error_json(&e));
            Ok(ExitCode::FAILURE)
        }
    }
}

fn error_json(e: &Error) -> serde_json::Value {
    serde_json::json!({
        "error": e.kind(),
        "reason": e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_route_play() {
        let cli = Cli::parse_from([
            "arena", "-v", "route", "play", "--level", "2", "--route", "gate,audi,admin,mech",
        ]);
        assert_eq!(cli.verbose, 1);
        match cli.command {
            Commands::Route {
                action: RouteAction::Play { level, route },
            } => {
                assert_eq!(level, 2);
                assert_eq!(route, vec!["gate", "audi", "admin", "mech"]);
            }
            other => panic!("Expected route play, got {:?}", other),
        }
    }

    #[test]
    fn parse_castle_with_global_config() {
        let cli = Cli::parse_from(["arena", "castle", "--seed", "7", "--config", "arena.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("arena.toml")));
        assert!(matches!(cli.command, Commands::Castle { seed: Some(7) }));
    }

    #[test]
    fn error_json_shape() {
        let json = error_json(&Error::SessionNotFound {
            session: "abc".into(),
        });
        assert_eq!(json["error"], "SessionNotFound");
        assert_eq!(json["reason"], "session not found: abc");
    }
}
