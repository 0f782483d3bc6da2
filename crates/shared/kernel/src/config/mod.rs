use config::{Config, Environment, File};
use plzmap_domain::config::MapConfig;
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::Path;
use tracing::info;

/// Prefix for environment overrides (`PLZMAP__DATA__ROOT` maps to `data.root`).
pub const ENV_PREFIX: &str = "PLZMAP";
/// Configuration file looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_NAME: &str = "plzmap";

/// Custom error type for config loading.
#[plzmap_derive::plzmap_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// A reusable configuration loader that combines file-based settings with environment overrides.
///
/// Layers, lowest priority first:
/// 1. **Base File**: an explicit `path` is required to exist. Without one, an optional
///    `plzmap.{toml,json,yaml}` in the working directory is used if present, so the
///    defaults of `T` apply out of the box.
/// 2. **Environment Overrides**: variables prefixed with `PLZMAP__`, nested with double
///    underscores (e.g., `PLZMAP__STYLE__FALLBACK_COLOR`).
///
/// # Errors
/// This function will return an error if:
/// * The explicitly specified configuration file cannot be found.
/// * The content of the file does not match the structure of type `T`.
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let file = match &path {
        Some(p) => {
            info!("Loading config from {}", p.as_ref().display());
            File::from(p.as_ref()).required(true)
        },
        None => {
            info!("Loading config from ./{DEFAULT_CONFIG_NAME} (optional)");
            File::with_name(DEFAULT_CONFIG_NAME).required(false)
        },
    };

    let config = Config::builder()
        .add_source(file)
        .add_source(
            Environment::with_prefix(ENV_PREFIX).separator("__").convert_case(config::Case::Snake),
        )
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}

/// Loads the zone map configuration.
///
/// # Errors
/// See [`load_config`].
pub fn load_map_config(path: Option<impl AsRef<Path>>) -> Result<MapConfig, ConfigError> {
    load_config::<MapConfig>(path)
}
