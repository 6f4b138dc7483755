use serde::{Deserialize, Serialize};
use sequence_engine::game::Difficulty;
use std::fs;

/// Upper bound for the cosmetic pause before an AI move.
pub const MAX_AI_DELAY_MS: u64 = 10_000;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub player_one: String,
    pub player_two: String,
    pub difficulty: Difficulty,
    pub seed: Option<u64>,
    /// Pause before each AI move in interactive play
    pub ai_delay_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub player_one: ValueSource,
    pub player_two: ValueSource,
    pub difficulty: ValueSource,
    pub seed: ValueSource,
    pub ai_delay_ms: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            player_one: ValueSource::Default,
            player_two: ValueSource::Default,
            difficulty: ValueSource::Default,
            seed: ValueSource::Default,
            ai_delay_ms: ValueSource::Default,
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
            player_one: "Player 1".into(),
            player_two: "Player 2".into(),
            difficulty: Difficulty::Medium,
            seed: None,
            ai_delay_ms: 700,
        }
    }
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

/// Resolve the configuration: defaults, then the TOML file named by
/// `SEQUENCE_CONFIG`, then `SEQUENCE_*` environment variables.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("SEQUENCE_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.player_one {
            cfg.player_one = v;
            sources.player_one = ValueSource::File;
        }
        if let Some(v) = f.player_two {
            cfg.player_two = v;
            sources.player_two = ValueSource::File;
        }
        if let Some(v) = f.difficulty {
            cfg.difficulty = v;
            sources.difficulty = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.ai_delay_ms {
            cfg.ai_delay_ms = v;
            sources.ai_delay_ms = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var("SEQUENCE_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(d) = std::env::var("SEQUENCE_DIFFICULTY")
        && !d.is_empty()
    {
        cfg.difficulty = d.parse().map_err(ConfigError::Invalid)?;
        sources.difficulty = ValueSource::Env;
    }
    if let Ok(delay) = std::env::var("SEQUENCE_AI_DELAY_MS")
        && !delay.is_empty()
    {
        cfg.ai_delay_ms = delay
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid ai_delay_ms".into()))?;
        sources.ai_delay_ms = ValueSource::Env;
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
    player_one: Option<String>,
    #[serde(default)]
    player_two: Option<String>,
    #[serde(default)]
    difficulty: Option<Difficulty>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    ai_delay_ms: Option<u64>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.player_one.trim().is_empty() || cfg.player_two.trim().is_empty() {
        return Err(ConfigError::Invalid(
            "Invalid configuration: player names must not be empty".into(),
        ));
    }
    if cfg.ai_delay_ms > MAX_AI_DELAY_MS {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: ai_delay_ms must be <= {}",
            MAX_AI_DELAY_MS
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(validate(&Config::default()).is_ok());
    }

    #[test]
    fn blank_names_are_rejected() {
        let cfg = Config {
            player_two: "  ".into(),
            ..Config::default()
        };
        assert!(matches!(validate(&cfg), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn long_delay_is_rejected() {
        let cfg = Config {
            ai_delay_ms: MAX_AI_DELAY_MS + 1,
            ..Config::default()
        };
        assert!(validate(&cfg).is_err());
    }

    #[test]
    fn file_config_accepts_partial_tables() {
        let f: FileConfig = toml::from_str("difficulty = \"hard\"\nseed = 9\n").unwrap();
        assert_eq!(f.difficulty, Some(Difficulty::Hard));
        assert_eq!(f.seed, Some(9));
        assert!(f.player_one.is_none());
    }
}
