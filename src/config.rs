use anyhow::{Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

// Hosted comic index this plugin core is built against.
pub const DEFAULT_API_URL: &str = "https://findxkcd.com";
pub const DEFAULT_COLLECTION: &str = "xkcd";

/// Connection details for the remote document-search service.
///
/// The original plugin persisted an `apiUrl` setting but hardcoded the
/// request endpoint and key anyway; here everything the client needs is
/// routed through this record.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SearchConfig {
    /// Base URL of the search service, without trailing path.
    pub api_url: String,
    /// Name of the remote collection that queries are scoped to.
    pub collection: String,
    /// Search-only API key. Empty means the service requires none.
    #[serde(default)]
    pub api_key: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
            api_key: String::new(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct FetcherConfig {
    #[serde(default)]
    pub search: SearchConfig,
}

/// Loads configuration from defaults, an optional TOML file and the
/// environment, in that order of increasing precedence.
///
/// The config file path defaults to `comic_fetcher.toml` and can be
/// overridden with `COMIC_FETCHER_CONFIG_PATH`. Environment overrides use the
/// `COMIC_FETCHER_` prefix with `__` as the section separator, e.g.
/// `COMIC_FETCHER_SEARCH__API_KEY`.
pub fn load_config() -> Result<FetcherConfig> {
    let config_path_env = std::env::var("COMIC_FETCHER_CONFIG_PATH").ok();
    let config_path = config_path_env
        .clone()
        .unwrap_or_else(|| "comic_fetcher.toml".to_string());

    if let Some(ref env_path) = config_path_env {
        if !std::path::Path::new(env_path).exists() {
            return Err(anyhow::anyhow!(
                "Config file not found at COMIC_FETCHER_CONFIG_PATH: {}",
                env_path
            ));
        }
        log::info!("COMIC_FETCHER_CONFIG_PATH is set: {}", env_path);
    } else {
        log::debug!(
            "COMIC_FETCHER_CONFIG_PATH not set, falling back to default: {}",
            config_path
        );
    }

    let figment = Figment::new()
        .merge(Serialized::defaults(FetcherConfig::default()))
        .merge(Toml::file(&config_path))
        .merge(Env::prefixed("COMIC_FETCHER_").split("__"));

    let config: FetcherConfig = figment.extract().context("Failed to extract FetcherConfig")?;
    validate_config(&config)?;
    Ok(config)
}

fn validate_config(config: &FetcherConfig) -> Result<()> {
    if config.search.api_url.trim().is_empty() {
        return Err(anyhow::anyhow!("Configured api_url cannot be empty"));
    }
    if config.search.collection.trim().is_empty() {
        return Err(anyhow::anyhow!("Configured collection cannot be empty"));
    }
    Ok(())
}
