use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::analysis::scorer::SkillTaxonomy;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub upload_dir: PathBuf,
    pub port: u16,
    pub max_upload_bytes: usize,
    /// Raw `SKILL_TAXONOMY` override, validated when the taxonomy is built.
    pub skill_taxonomy: Option<String>,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: env_or("DATABASE_URL", "sqlite://resume_data.db"),
            upload_dir: PathBuf::from(env_or("UPLOAD_DIR", "uploads")),
            port: env_or("PORT", "8000")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            max_upload_bytes: env_or("MAX_UPLOAD_BYTES", "10485760")
                .parse::<usize>()
                .context("MAX_UPLOAD_BYTES must be a non-negative integer")?,
            skill_taxonomy: std::env::var("SKILL_TAXONOMY").ok(),
            rust_log: env_or("RUST_LOG", "info"),
        })
    }

    /// The skill taxonomy to score against: the `SKILL_TAXONOMY` override if
    /// set, else the default list.
    pub fn taxonomy(&self) -> Result<SkillTaxonomy> {
        match &self.skill_taxonomy {
            Some(raw) => SkillTaxonomy::parse(raw)
                .with_context(|| format!("SKILL_TAXONOMY '{raw}' names no skills")),
            None => Ok(SkillTaxonomy::default()),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_taxonomy(raw: Option<&str>) -> Config {
        Config {
            database_url: "sqlite::memory:".to_string(),
            upload_dir: PathBuf::from("uploads"),
            port: 8000,
            max_upload_bytes: 1024,
            skill_taxonomy: raw.map(str::to_string),
            rust_log: "info".to_string(),
        }
    }

    #[test]
    fn test_default_taxonomy_when_unset() {
        let taxonomy = config_with_taxonomy(None).taxonomy().unwrap();
        assert_eq!(taxonomy, SkillTaxonomy::default());
    }

    #[test]
    fn test_taxonomy_override() {
        let taxonomy = config_with_taxonomy(Some("Rust, Tokio")).taxonomy().unwrap();
        assert_eq!(taxonomy.skills(), ["rust", "tokio"]);
    }

    #[test]
    fn test_blank_taxonomy_override_is_rejected() {
        assert!(config_with_taxonomy(Some(" , ")).taxonomy().is_err());
    }
}
