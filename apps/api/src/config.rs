use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Everything has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// When set, sections are enhanced by the LLM; otherwise by the simulator.
    pub groq_api_key: Option<String>,
    pub groq_api_url: Option<String>,
    pub enhance_delay: Duration,
    pub re_enhance_delay: Duration,
    pub pdflatex_bin: String,
    pub latex_temp_dir: PathBuf,
    /// Idle time after which a session is dropped. Zero keeps sessions forever.
    pub session_ttl: Duration,
    /// Browser origins allowed by CORS. Empty allows any origin.
    pub cors_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Config {
            port: get("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: get("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            groq_api_key: get("GROQ_API_KEY"),
            groq_api_url: get("GROQ_API_URL"),
            enhance_delay: parse_millis(get("ENHANCE_DELAY_MS"), 2000, "ENHANCE_DELAY_MS")?,
            re_enhance_delay: parse_millis(get("REENHANCE_DELAY_MS"), 1000, "REENHANCE_DELAY_MS")?,
            pdflatex_bin: get("PDFLATEX_BIN").unwrap_or_else(|| "pdflatex".to_string()),
            latex_temp_dir: get("LATEX_TEMP_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(std::env::temp_dir),
            session_ttl: Duration::from_secs(
                get("SESSION_TTL_SECS")
                    .unwrap_or_else(|| "3600".to_string())
                    .parse::<u64>()
                    .context("SESSION_TTL_SECS must be a whole number of seconds")?,
            ),
            cors_origins: get("CORS_ALLOWED_ORIGINS")
                .map(|v| {
                    v.split(',')
                        .map(str::trim)
                        .filter(|o| !o.is_empty())
                        .map(String::from)
                        .collect()
                })
                .unwrap_or_default(),
        })
    }
}

fn parse_millis(value: Option<String>, default_ms: u64, key: &str) -> Result<Duration> {
    let ms = match value {
        Some(v) => v
            .parse::<u64>()
            .with_context(|| format!("{key} must be a whole number of milliseconds"))?,
        None => default_ms,
    };
    Ok(Duration::from_millis(ms))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert!(config.groq_api_key.is_none());
        assert_eq!(config.enhance_delay, Duration::from_millis(2000));
        assert_eq!(config.re_enhance_delay, Duration::from_millis(1000));
        assert_eq!(config.pdflatex_bin, "pdflatex");
        assert_eq!(config.session_ttl, Duration::from_secs(3600));
        assert!(config.cors_origins.is_empty());
    }

    #[test]
    fn test_session_ttl_and_origins() {
        let config = config_from(&[
            ("SESSION_TTL_SECS", "0"),
            (
                "CORS_ALLOWED_ORIGINS",
                "http://localhost:3000, https://resume.example.com,",
            ),
        ])
        .unwrap();
        assert_eq!(config.session_ttl, Duration::ZERO);
        assert_eq!(
            config.cors_origins,
            vec!["http://localhost:3000", "https://resume.example.com"]
        );
        assert!(config_from(&[("SESSION_TTL_SECS", "1h")]).is_err());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("PORT", "9000"),
            ("GROQ_API_KEY", "gsk_test"),
            ("ENHANCE_DELAY_MS", "0"),
            ("LATEX_TEMP_DIR", "/var/tmp/latex"),
        ])
        .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.groq_api_key.as_deref(), Some("gsk_test"));
        assert_eq!(config.enhance_delay, Duration::ZERO);
        assert_eq!(config.latex_temp_dir, PathBuf::from("/var/tmp/latex"));
    }

    #[test]
    fn test_blank_api_key_counts_as_unset() {
        let config = config_from(&[("GROQ_API_KEY", "  ")]).unwrap();
        assert!(config.groq_api_key.is_none());
    }

    #[test]
    fn test_invalid_numbers_fail() {
        assert!(config_from(&[("PORT", "eighty")]).is_err());
        assert!(config_from(&[("ENHANCE_DELAY_MS", "-5")]).is_err());
    }
}
