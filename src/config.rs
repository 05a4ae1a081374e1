use std::env;
use std::fmt;

use anyhow::{Context, anyhow};

use crate::agents::{FAST_MODEL, ModelCatalog, PLANNER_MODEL};

pub const API_KEY_VAR: &str = "GROQ_API_KEY";

/// Log filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str =
    "learnbuddy_svc=info,tower_http=debug,axum::rejection=info";

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub groq_api_key: String,
    pub fast_model: String,
    pub planner_model: String,
}

impl Config {
    /// Load from the process environment. A missing API key is fatal.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let groq_api_key = lookup(API_KEY_VAR)
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| anyhow!("{} environment variable not set", API_KEY_VAR))?;

        let port = match lookup("PORT") {
            Some(port) => port
                .parse()
                .with_context(|| format!("PORT must be a valid number, got {port:?}"))?,
            None => 8080,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            groq_api_key,
            fast_model: lookup("LEARNBUDDY_FAST_MODEL").unwrap_or_else(|| FAST_MODEL.to_string()),
            planner_model: lookup("LEARNBUDDY_PLANNER_MODEL")
                .unwrap_or_else(|| PLANNER_MODEL.to_string()),
        })
    }

    pub fn models(&self) -> ModelCatalog {
        ModelCatalog {
            fast: self.fast_model.clone(),
            planner: self.planner_model.clone(),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("groq_api_key", &"***API_KEY***")
            .field("fast_model", &self.fast_model)
            .field("planner_model", &self.planner_model)
            .finish()
    }
}
