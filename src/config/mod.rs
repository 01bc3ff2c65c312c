use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub ledger: LedgerConfig,
    pub countries: CountriesConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// JSON file holding the visit ledger
    pub path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountriesConfig {
    /// JSON array of `{ "code", "name" }`; codes are shown as-is without it
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "ReportConfig::default_ranking_limit")]
    pub ranking_limit: usize,
}

impl ReportConfig {
    const fn default_ranking_limit() -> usize {
        5
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let ledger_path = std::env::var("TRAVELOG_LEDGER_PATH")
            .unwrap_or_else(|_| "./travelog.json".to_string());

        let countries_path = std::env::var("TRAVELOG_COUNTRIES_PATH")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let ranking_limit = match std::env::var("TRAVELOG_RANKING_LIMIT") {
            Ok(raw) => raw
                .trim()
                .parse::<usize>()
                .with_context(|| format!("TRAVELOG_RANKING_LIMIT must be a number, got '{raw}'"))?,
            Err(_) => ReportConfig::default_ranking_limit(),
        };

        Ok(Config {
            ledger: LedgerConfig {
                path: PathBuf::from(ledger_path),
            },
            countries: CountriesConfig {
                path: countries_path,
            },
            report: ReportConfig { ranking_limit },
        })
    }
}
