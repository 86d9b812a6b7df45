use anyhow::{bail, Context, Result};

use crate::matching::engine::{DEFAULT_LIMIT, DEFAULT_THRESHOLD};

/// Which language-analysis backend the resume extractor runs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalyzerBackend {
    Heuristic,
    /// Extraction degrades to empty profiles.
    Disabled,
}

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub db_max_connections: u32,
    pub port: u16,
    pub rust_log: String,
    pub match_threshold: f64,
    pub match_limit: usize,
    pub match_limit_max: usize,
    pub max_upload_bytes: usize,
    pub analyzer: AnalyzerBackend,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let match_threshold: f64 = parse_env("MATCH_THRESHOLD", DEFAULT_THRESHOLD)?;
        if !(0.0..=1.0).contains(&match_threshold) {
            bail!("MATCH_THRESHOLD must be within [0, 1], got {match_threshold}");
        }

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            db_max_connections: parse_env("DB_MAX_CONNECTIONS", 10)?,
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            match_threshold,
            match_limit: parse_env("MATCH_LIMIT", DEFAULT_LIMIT)?,
            match_limit_max: parse_env("MATCH_LIMIT_MAX", 50)?,
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", 10 * 1024 * 1024)?,
            analyzer: parse_analyzer(
                &std::env::var("LANGUAGE_ANALYZER").unwrap_or_else(|_| "heuristic".to_string()),
            )?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} has an invalid value '{raw}'")),
        Err(_) => Ok(default),
    }
}

fn parse_analyzer(raw: &str) -> Result<AnalyzerBackend> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "heuristic" => Ok(AnalyzerBackend::Heuristic),
        "none" | "off" | "disabled" => Ok(AnalyzerBackend::Disabled),
        other => bail!("LANGUAGE_ANALYZER must be 'heuristic' or 'none', got '{other}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_analyzer_accepts_known_values() {
        assert_eq!(parse_analyzer("Heuristic").unwrap(), AnalyzerBackend::Heuristic);
        assert_eq!(parse_analyzer("none").unwrap(), AnalyzerBackend::Disabled);
        assert!(parse_analyzer("spacy").is_err());
    }

    #[test]
    fn test_parse_env_falls_back_to_default() {
        let v: usize = parse_env("INTERNSHIP_API_TEST_UNSET_KEY", 7).unwrap();
        assert_eq!(v, 7);
    }
}
