use crate::config::Placeholders;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum Command {
    Help,
    List(ListArgs),
    Render(RenderArgs),
    Check(CheckArgs),
}

impl Command {
    /// `-v` count for commands that log; `None` for help.
    pub fn verbosity(&self) -> Option<u8> {
        match self {
            Command::Help => None,
            Command::List(args) => Some(args.common.verbose),
            Command::Render(args) => Some(args.common.verbose),
            Command::Check(args) => Some(args.common.verbose),
        }
    }
}

/// Options accepted by every command.
#[derive(Debug, Clone, Default)]
pub struct CommonArgs {
    /// Explicit config file; `instaorm.toml` is used when present otherwise.
    pub config: Option<PathBuf>,
    pub verbose: u8,
}

#[derive(Debug, Clone, Default)]
pub struct ListArgs {
    pub common: CommonArgs,
    pub placeholders: Option<Placeholders>,
    pub json: bool,
    /// Only list queries whose name starts with this prefix.
    pub prefix: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RenderArgs {
    pub common: CommonArgs,
    pub placeholders: Option<Placeholders>,
    pub json: bool,
    pub name: String,
}

#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    pub common: CommonArgs,
    pub database: Option<String>,
}

pub fn parse_args(args: &[String]) -> anyhow::Result<Command> {
    let mut it = args.iter().skip(1).map(|s| s.as_str());
    let Some(first) = it.next() else {
        return Ok(Command::Help);
    };

    match first {
        "-h" | "--help" | "help" => Ok(Command::Help),
        "list" | "render" | "check" => parse_command(first, it),
        _ => anyhow::bail!("unknown command: {first}"),
    }
}

fn parse_command<'a>(name: &str, mut it: impl Iterator<Item = &'a str>) -> anyhow::Result<Command> {
    let mut common = CommonArgs::default();
    let mut placeholders: Option<Placeholders> = None;
    let mut json = false;
    let mut database: Option<String> = None;
    let mut positional: Vec<&str> = Vec::new();

    while let Some(token) = it.next() {
        match token {
            "-h" | "--help" => return Ok(Command::Help),
            "-v" | "--verbose" => common.verbose = common.verbose.saturating_add(1),
            "-vv" => common.verbose = common.verbose.saturating_add(2),
            "--config" => {
                let Some(v) = it.next() else {
                    anyhow::bail!("--config requires a value");
                };
                common.config = Some(PathBuf::from(v));
            }
            _ if token.starts_with("--config=") => {
                common.config = Some(PathBuf::from(token.trim_start_matches("--config=")));
            }
            "--database" if name == "check" => {
                let Some(v) = it.next() else {
                    anyhow::bail!("--database requires a value");
                };
                database = Some(v.to_string());
            }
            _ if name == "check" && token.starts_with("--database=") => {
                database = Some(token.trim_start_matches("--database=").to_string());
            }
            "--numbered" if name != "check" => placeholders = Some(Placeholders::Numbered),
            "--positional" if name != "check" => placeholders = Some(Placeholders::Positional),
            "--json" if name != "check" => json = true,
            other if other.starts_with('-') => anyhow::bail!("unknown argument: {other}"),
            other => positional.push(other),
        }
    }

    match name {
        "list" => {
            if positional.len() > 1 {
                anyhow::bail!("list takes at most one name prefix");
            }
            Ok(Command::List(ListArgs {
                common,
                placeholders,
                json,
                prefix: positional.first().map(|s| s.to_string()),
            }))
        }
        "render" => {
            let [query] = positional.as_slice() else {
                anyhow::bail!("render takes exactly one query name (see `instaorm list`)");
            };
            Ok(Command::Render(RenderArgs {
                common,
                placeholders,
                json,
                name: query.to_string(),
            }))
        }
        "check" => {
            if let Some(extra) = positional.first() {
                anyhow::bail!("unexpected argument: {extra}");
            }
            Ok(Command::Check(CheckArgs { common, database }))
        }
        other => anyhow::bail!("unknown command: {other}"),
    }
}

pub fn print_help() {
    println!(
        "\
instaorm - inspect and verify the SQL rendered by instaorm

USAGE:
  instaorm list [PREFIX] [OPTIONS]
  instaorm render <NAME> [OPTIONS]
  instaorm check [OPTIONS]

COMMANDS:
  list          Show every injector query (optionally only names starting with PREFIX)
  render        Print one query with its bind slots
  check         Prepare every query against a live database

OPTIONS:
  --config <FILE>       Config file path (default: instaorm.toml, if present)
  --numbered            Render `$1, $2, ...` placeholders (list, render)
  --positional          Render `?` placeholders (list, render)
  --json                Print JSON instead of a table (list, render)
  --database <URL>      Override database.url / DATABASE_URL (check)
  -v, --verbose         Log rendered SQL; repeat for more detail
  -h, --help            Print help"
    );
}
