//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.botanical/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//! Only startup preferences live here. Nothing is written back at runtime.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

use crate::core::error::InvalidViewState;
use crate::core::state::Theme;
use crate::core::view::{DifficultyFilter, SortKey, SortOrder};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct BotanicalConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub theme: Option<String>,
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CatalogConfig {
    pub search: Option<String>,
    pub difficulty: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
}

/// Values given on the command line. `None` = flag not passed.
///
/// clap has already parsed these, so only file and env values can be invalid.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub search: Option<String>,
    pub difficulty: Option<DifficultyFilter>,
    pub sort: Option<SortKey>,
    pub order: Option<SortOrder>,
    pub theme: Option<Theme>,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub theme: Theme,
    pub log_level: LevelFilter,
    pub search: String,
    pub difficulty: DifficultyFilter,
    pub sort: SortKey,
    pub order: SortOrder,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            log_level: DEFAULT_LOG_LEVEL,
            search: String::new(),
            difficulty: DifficultyFilter::default(),
            sort: SortKey::default(),
            order: SortOrder::default(),
        }
    }
}

pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config value: {0}")]
    Invalid(#[from] InvalidViewState),
    #[error("invalid log level `{0}`")]
    LogLevel(String),
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.botanical/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".botanical").join("config.toml"))
}

/// Load config from `~/.botanical/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `BotanicalConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<BotanicalConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(BotanicalConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(BotanicalConfig::default());
    }

    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<BotanicalConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: BotanicalConfig = toml::from_str(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

fn generate_default_config(path: &Path) {
    let default_content = r#"# Botanical Haven Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# theme = "light"                # "light" or "dark" (env: BOTANICAL_THEME)
# log_level = "debug"            # "off", "error", "warn", "info", "debug", "trace"

# [catalog]
# search = ""                    # Initial search text
# difficulty = "all"             # "all", "easy", "intermediate", "advanced"
# sort = "name"                  # "name", "difficulty", "rating", "random" (env: BOTANICAL_SORT)
# order = "asc"                  # "asc" or "desc"
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &BotanicalConfig, cli: &CliOverrides) -> Result<ResolvedConfig, ConfigError> {
    resolve_with(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], reading env vars through `env` instead of the process environment.
pub fn resolve_with(
    config: &BotanicalConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> Result<ResolvedConfig, ConfigError> {
    let defaults = ResolvedConfig::default();

    // Theme: CLI → env → config → default
    let theme = layer(
        cli.theme,
        env("BOTANICAL_THEME").or_else(|| config.general.theme.clone()),
        defaults.theme,
    )?;

    // Sort key: CLI → env → config → default
    let sort = layer(
        cli.sort,
        env("BOTANICAL_SORT").or_else(|| config.catalog.sort.clone()),
        defaults.sort,
    )?;

    let order = layer(cli.order, config.catalog.order.clone(), defaults.order)?;
    let difficulty = layer(
        cli.difficulty,
        config.catalog.difficulty.clone(),
        defaults.difficulty,
    )?;

    let search = cli
        .search
        .clone()
        .or_else(|| config.catalog.search.clone())
        .unwrap_or(defaults.search);

    let log_level = match &config.general.log_level {
        Some(level) => level
            .parse::<LevelFilter>()
            .map_err(|_| ConfigError::LogLevel(level.clone()))?,
        None => defaults.log_level,
    };

    Ok(ResolvedConfig {
        theme,
        log_level,
        search,
        difficulty,
        sort,
        order,
    })
}

/// A parsed CLI value wins; otherwise parse the env/file text, else the default.
fn layer<T>(cli: Option<T>, text: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr<Err = InvalidViewState>,
{
    match (cli, text) {
        (Some(value), _) => Ok(value),
        (None, Some(text)) => Ok(text.parse()?),
        (None, None) => Ok(default),
    }
}
