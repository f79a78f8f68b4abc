use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;

use crate::game::DEFAULT_GRID_SIZE;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub crossword: CrosswordConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CrosswordConfig {
    /// JSON file holding the word list
    pub words_path: String,
    /// Side length of the working grid used during generation
    pub grid_size: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key/value source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let server = ServerConfig {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: lookup("PORT")
                .unwrap_or_else(|| "3000".to_string())
                .parse()
                .context("PORT must be a number")?,
        };

        let grid_size: usize = lookup("CROSSWORD_GRID_SIZE")
            .unwrap_or_else(|| DEFAULT_GRID_SIZE.to_string())
            .parse()
            .context("CROSSWORD_GRID_SIZE must be a number")?;
        if grid_size == 0 {
            anyhow::bail!("CROSSWORD_GRID_SIZE must be greater than zero");
        }

        let crossword = CrosswordConfig {
            words_path: lookup("CROSSWORD_WORDS_PATH")
                .unwrap_or_else(|| "./data/crossword/words.json".to_string()),
            grid_size,
        };

        Ok(Config { server, crossword })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.server_addr(), "0.0.0.0:3000");
        assert_eq!(config.crossword.words_path, "./data/crossword/words.json");
        assert_eq!(config.crossword.grid_size, DEFAULT_GRID_SIZE);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("CROSSWORD_WORDS_PATH", "/tmp/words.json"),
            ("CROSSWORD_GRID_SIZE", "30"),
        ])
        .unwrap();

        assert_eq!(config.server_addr(), "127.0.0.1:8080");
        assert_eq!(config.crossword.words_path, "/tmp/words.json");
        assert_eq!(config.crossword.grid_size, 30);
    }

    #[test]
    fn test_invalid_numbers_are_rejected() {
        assert!(config_from(&[("PORT", "not-a-port")]).is_err());
        assert!(config_from(&[("CROSSWORD_GRID_SIZE", "big")]).is_err());
        assert!(config_from(&[("CROSSWORD_GRID_SIZE", "0")]).is_err());
    }
}
