use serde::{Deserialize, Serialize};
use std::fs;

use minipoker_engine::hand::HandRules;
use minipoker_engine::session::TableConfig;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub small_blind: u32,
    pub starting_money: u32,
    pub seed: Option<u64>,
    pub ace_low_straights: bool,
    pub max_rounds: Option<u32>,
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
    pub small_blind: ValueSource,
    pub starting_money: ValueSource,
    pub seed: ValueSource,
    pub ace_low_straights: ValueSource,
    pub max_rounds: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            small_blind: ValueSource::Default,
            starting_money: ValueSource::Default,
            seed: ValueSource::Default,
            ace_low_straights: ValueSource::Default,
            max_rounds: ValueSource::Default,
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
        let table = TableConfig::default();
        Self {
            small_blind: table.small_blind,
            starting_money: table.starting_money,
            seed: table.seed,
            ace_low_straights: table.rules.ace_low_straights,
            max_rounds: table.max_rounds,
        }
    }
}

impl Config {
    pub fn rules(&self) -> HandRules {
        HandRules {
            ace_low_straights: self.ace_low_straights,
        }
    }

    pub fn table(&self) -> TableConfig {
        TableConfig {
            small_blind: self.small_blind,
            starting_money: self.starting_money,
            seed: self.seed,
            rules: self.rules(),
            max_rounds: self.max_rounds,
        }
    }
}

/// Values given on the command line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub seed: Option<u64>,
    pub small_blind: Option<u32>,
    pub starting_money: Option<u32>,
    pub ace_low_straights: Option<bool>,
    pub max_rounds: Option<u32>,
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

impl std::error::Error for ConfigError {}

pub const CONFIG_ENV: &str = "MINIPOKER_CONFIG";

/// Resolves defaults, then the TOML file named by `MINIPOKER_CONFIG`, then
/// `MINIPOKER_*` variables, then `overrides`. Later layers win.
pub fn load_with_sources(overrides: &Overrides) -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_ENV)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.small_blind {
            cfg.small_blind = v;
            sources.small_blind = ValueSource::File;
        }
        if let Some(v) = f.starting_money {
            cfg.starting_money = v;
            sources.starting_money = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.ace_low_straights {
            cfg.ace_low_straights = v;
            sources.ace_low_straights = ValueSource::File;
        }
        if let Some(v) = f.max_rounds {
            cfg.max_rounds = Some(v);
            sources.max_rounds = ValueSource::File;
        }
    }

    if let Some(seed) = env_value("MINIPOKER_SEED") {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid(format!("Invalid seed: {}", seed)))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Some(blind) = env_value("MINIPOKER_SMALL_BLIND") {
        cfg.small_blind = blind
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid small blind: {}", blind)))?;
        sources.small_blind = ValueSource::Env;
    }
    if let Some(money) = env_value("MINIPOKER_STARTING_MONEY") {
        cfg.starting_money = money
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid starting money: {}", money)))?;
        sources.starting_money = ValueSource::Env;
    }
    if let Some(ace_low) = env_value("MINIPOKER_ACE_LOW") {
        cfg.ace_low_straights = parse_bool(&ace_low)
            .ok_or_else(|| ConfigError::Invalid(format!("Invalid ace-low flag: {}", ace_low)))?;
        sources.ace_low_straights = ValueSource::Env;
    }

    if let Some(v) = overrides.seed {
        cfg.seed = Some(v);
        sources.seed = ValueSource::Cli;
    }
    if let Some(v) = overrides.small_blind {
        cfg.small_blind = v;
        sources.small_blind = ValueSource::Cli;
    }
    if let Some(v) = overrides.starting_money {
        cfg.starting_money = v;
        sources.starting_money = ValueSource::Cli;
    }
    if let Some(v) = overrides.ace_low_straights {
        cfg.ace_low_straights = v;
        sources.ace_low_straights = ValueSource::Cli;
    }
    if let Some(v) = overrides.max_rounds {
        cfg.max_rounds = Some(v);
        sources.max_rounds = ValueSource::Cli;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    small_blind: Option<u32>,
    #[serde(default)]
    starting_money: Option<u32>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    ace_low_straights: Option<bool>,
    #[serde(default)]
    max_rounds: Option<u32>,
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    cfg.table()
        .validate()
        .map_err(|e| ConfigError::Invalid(e.to_string()))
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
