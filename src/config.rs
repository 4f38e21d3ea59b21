// file: src/config.rs
// description: application configuration management with toml and environment support
// reference: https://docs.rs/config

use crate::error::{Result, SearchError};
use crate::utils::Validator;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub library: LibraryConfig,
    pub server: ServerConfig,
    pub search: SearchConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LibraryConfig {
    pub root_dir: PathBuf,
    /// Document extension without the leading dot.
    pub extension: String,
}

/// Consumed by the HTTP front end that wraps the engine.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    pub max_concurrent_tasks: usize,
    pub max_read_bytes: usize,
    pub snippet_max_chars: usize,
    pub related_limit: usize,
    pub placeholder_image: String,
}

impl Config {
    /// Layers, lowest precedence first: built-in defaults, the TOML file,
    /// `ARTICLE_SEARCH__*` variables, then the legacy `STATIC_DIR` / `PORT`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let defaults = Self::default_config();
        let mut builder = config::Config::builder()
            .set_default(
                "library.root_dir",
                defaults.library.root_dir.to_string_lossy().to_string(),
            )
            .and_then(|b| b.set_default("library.extension", defaults.library.extension))
            .and_then(|b| b.set_default("server.port", defaults.server.port as i64))
            .and_then(|b| {
                b.set_default(
                    "search.max_concurrent_tasks",
                    defaults.search.max_concurrent_tasks as i64,
                )
            })
            .and_then(|b| {
                b.set_default("search.max_read_bytes", defaults.search.max_read_bytes as i64)
            })
            .and_then(|b| {
                b.set_default(
                    "search.snippet_max_chars",
                    defaults.search.snippet_max_chars as i64,
                )
            })
            .and_then(|b| {
                b.set_default("search.related_limit", defaults.search.related_limit as i64)
            })
            .and_then(|b| {
                b.set_default("search.placeholder_image", defaults.search.placeholder_image)
            })
            .map_err(|e| SearchError::Config(e.to_string()))?;

        builder = match path {
            Some(path) => builder.add_source(config::File::from(path)),
            None => builder
                .add_source(config::File::from(Path::new(DEFAULT_CONFIG_PATH)).required(false)),
        };

        builder = builder
            .add_source(
                config::Environment::with_prefix("ARTICLE_SEARCH")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("library.root_dir", non_empty_env("STATIC_DIR"))
            .and_then(|b| b.set_override_option("server.port", non_empty_env("PORT")))
            .map_err(|e| SearchError::Config(e.to_string()))?;

        let settings = builder
            .build()
            .map_err(|e| SearchError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| SearchError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            library: LibraryConfig {
                root_dir: PathBuf::from("/app/static/articles"),
                extension: "html".to_string(),
            },
            server: ServerConfig { port: 8081 },
            search: SearchConfig {
                max_concurrent_tasks: 16,
                max_read_bytes: 8192,
                snippet_max_chars: 200,
                related_limit: 5,
                placeholder_image: "/placeholder.jpg".to_string(),
            },
        }
    }

    /// Default configuration rooted at `root_dir`.
    pub fn for_root(root_dir: impl Into<PathBuf>) -> Self {
        let mut config = Self::default_config();
        config.library.root_dir = root_dir.into();
        config
    }

    pub fn validate(&self) -> Result<()> {
        if self.search.max_concurrent_tasks == 0 {
            return Err(SearchError::Config(
                "max_concurrent_tasks must be greater than 0".to_string(),
            ));
        }

        if self.search.max_read_bytes == 0 {
            return Err(SearchError::Config(
                "max_read_bytes must be greater than 0".to_string(),
            ));
        }

        if self.search.snippet_max_chars < 4 {
            return Err(SearchError::Config(
                "snippet_max_chars must be at least 4".to_string(),
            ));
        }

        if self.search.related_limit == 0 {
            return Err(SearchError::Config(
                "related_limit must be greater than 0".to_string(),
            ));
        }

        if self.library.extension.trim_start_matches('.').is_empty() {
            return Err(SearchError::Config(
                "document extension cannot be empty".to_string(),
            ));
        }

        Validator::validate_port(self.server.port)
            .map_err(|e| SearchError::Config(e.to_string()))?;

        Ok(())
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}
