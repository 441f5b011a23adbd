//! CLI configuration.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults, then overridden by command-line flags.
//!
//! | Source              | Setting                                   |
//! |---------------------|-------------------------------------------|
//! | `BASKET_LOG`        | tracing filter directive (default `warn`) |
//! | `RUST_LOG`          | used when `BASKET_LOG` is unset           |
//! | `BASKET_RULES_PATH` | JSON rules file (default: standard rules) |
//! | `--rules <path>`    | overrides `BASKET_RULES_PATH`             |
//! | `--json`            | print JSON instead of text                |
//! | `--dump-rules`      | print the active rules as JSON and exit   |

use std::env;
use std::path::PathBuf;

/// Default log filter; keeps stdout output free of log noise.
pub const DEFAULT_LOG_FILTER: &str = "warn";

pub const USAGE: &str = "\
Usage: basket [OPTIONS] [CODE ...]

Prices a basket of product codes. With no codes, runs the demo scenarios.

Options:
  --rules <PATH>   Load pricing rules from a JSON file
  --json           Print results as JSON
  --dump-rules     Print the active pricing rules as JSON and exit
  -h, --help       Show this help

Environment:
  BASKET_LOG          Log filter (falls back to RUST_LOG, then \"warn\")
  BASKET_RULES_PATH   Default for --rules";

/// What the invocation asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run the built-in demo scenarios.
    Demo,
    /// Price the given codes.
    Price(Vec<String>),
    /// Print the active rules document.
    DumpRules,
    Help,
}

/// Resolved CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// tracing-subscriber `EnvFilter` directive.
    pub log_filter: String,

    /// Rules file; `None` means the standard rules.
    pub rules_path: Option<PathBuf>,

    /// Emit JSON instead of text.
    pub json: bool,

    pub command: Command,
}

impl CliConfig {
    /// Loads configuration from the process environment and arguments.
    pub fn load() -> Result<Self, ConfigError> {
        CliConfig::from_sources(|key| env::var(key).ok(), env::args().skip(1))
    }

    /// Builds configuration from an environment lookup and the arguments
    /// following the program name.
    pub fn from_sources<E, A>(lookup: E, args: A) -> Result<Self, ConfigError>
    where
        E: Fn(&str) -> Option<String>,
        A: IntoIterator<Item = String>,
    {
        let mut config = CliConfig {
            log_filter: lookup("BASKET_LOG")
                .or_else(|| lookup("RUST_LOG"))
                .filter(|filter| !filter.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            rules_path: lookup("BASKET_RULES_PATH")
                .filter(|path| !path.is_empty())
                .map(PathBuf::from),
            json: false,
            command: Command::Demo,
        };

        let mut codes = Vec::new();
        let mut dump_rules = false;
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--rules" => {
                    let path = args
                        .next()
                        .ok_or_else(|| ConfigError::MissingValue("--rules".to_string()))?;
                    config.rules_path = Some(PathBuf::from(path));
                }
                "--json" => config.json = true,
                "--dump-rules" => dump_rules = true,
                "-h" | "--help" => {
                    config.command = Command::Help;
                    return Ok(config);
                }
                flag if flag.starts_with('-') => {
                    return Err(ConfigError::UnknownFlag(flag.to_string()));
                }
                code => codes.push(code.to_string()),
            }
        }

        config.command = match (dump_rules, codes.is_empty()) {
            (true, true) => Command::DumpRules,
            (true, false) => return Err(ConfigError::Conflict("--dump-rules".to_string())),
            (false, true) => Command::Demo,
            (false, false) => Command::Price(codes),
        };

        Ok(config)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing value for {0}")]
    MissingValue(String),

    #[error("Unknown option: {0}")]
    UnknownFlag(String),

    #[error("{0} cannot be combined with product codes")]
    Conflict(String),
}
