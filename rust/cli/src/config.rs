use blackjack_engine::bank::STARTING_CHIPS;
use blackjack_engine::player::MAX_PLAYERS;
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub players: usize,
    /// Whole chips each player starts with
    pub starting_balance: u64,
    pub seed: Option<u64>,
    /// Rounds to play before stopping; `None` plays until input ends
    pub rounds: Option<u32>,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
    Cli,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub players: ValueSource,
    pub starting_balance: ValueSource,
    pub seed: ValueSource,
    pub rounds: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            players: ValueSource::Default,
            starting_balance: ValueSource::Default,
            seed: ValueSource::Default,
            rounds: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            players: 2,
            starting_balance: STARTING_CHIPS,
            seed: None,
            rounds: None,
        }
    }
}

/// Values given on the command line; each one present wins over every
/// other source.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub players: Option<usize>,
    pub starting_balance: Option<u64>,
    pub seed: Option<u64>,
    pub rounds: Option<u32>,
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    resolve(&CliOverrides::default())
}

/// Layers defaults, the `BLACKJACK_CONFIG` file, `BLACKJACK_*` variables and
/// command-line values, in that order, then validates the result.
pub fn resolve(overrides: &CliOverrides) -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("BLACKJACK_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.players {
            cfg.players = v;
            sources.players = ValueSource::File;
        }
        if let Some(v) = f.starting_balance {
            cfg.starting_balance = v;
            sources.starting_balance = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.rounds {
            cfg.rounds = Some(v);
            sources.rounds = ValueSource::File;
        }
    }

    if let Ok(players) = std::env::var("BLACKJACK_PLAYERS")
        && !players.is_empty()
    {
        cfg.players = players
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid players".into()))?;
        sources.players = ValueSource::Env;
    }
    if let Ok(balance) = std::env::var("BLACKJACK_STARTING_BALANCE")
        && !balance.is_empty()
    {
        cfg.starting_balance = balance
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid starting_balance".into()))?;
        sources.starting_balance = ValueSource::Env;
    }
    if let Ok(seed) = std::env::var("BLACKJACK_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(rounds) = std::env::var("BLACKJACK_ROUNDS")
        && !rounds.is_empty()
    {
        cfg.rounds = Some(
            rounds
                .parse()
                .map_err(|_| ConfigError::Invalid("Invalid rounds".into()))?,
        );
        sources.rounds = ValueSource::Env;
    }

    if let Some(v) = overrides.players {
        cfg.players = v;
        sources.players = ValueSource::Cli;
    }
    if let Some(v) = overrides.starting_balance {
        cfg.starting_balance = v;
        sources.starting_balance = ValueSource::Cli;
    }
    if let Some(v) = overrides.seed {
        cfg.seed = Some(v);
        sources.seed = ValueSource::Cli;
    }
    if let Some(v) = overrides.rounds {
        cfg.rounds = Some(v);
        sources.rounds = ValueSource::Cli;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    players: Option<usize>,
    #[serde(default)]
    starting_balance: Option<u64>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    rounds: Option<u32>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.players == 0 || cfg.players > MAX_PLAYERS {
        return Err(ConfigError::Invalid(format!(
            "players must be 1..={}",
            MAX_PLAYERS
        )));
    }
    if cfg.starting_balance == 0 {
        return Err(ConfigError::Invalid(
            "starting_balance must be >0".into(),
        ));
    }
    if cfg.rounds == Some(0) {
        return Err(ConfigError::Invalid(
            "rounds must be >=1".into(),
        ));
    }
    Ok(())
}
