//! Runtime configuration
//!
//! The supported company enumeration and dataset path were module-level
//! constants in earlier prototypes; they now travel as an explicit value
//! so the loader, classifier and session can be tested against synthetic
//! setups.

use serde::{Deserialize, Serialize};
use std::env;
use tracing::info;

const DEFAULT_DATA_FILE: &str = "GFC_10K_Financial_Data_3_Years.csv";
const DEFAULT_COMPANIES: &[&str] = &["Apple", "Microsoft", "Tesla"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotConfig {
    /// Companies the bot recognizes, in enumeration order. Extraction and
    /// the "all companies" override both resolve against this list.
    pub companies: Vec<String>,
    /// Path of the CSV dataset to load at startup.
    pub data_file: String,
}

impl BotConfig {
    /// Build a config from the environment, falling back to the defaults
    /// the original dataset ships with.
    ///
    /// Env vars: `CHATBOT_DATA_FILE`, `CHATBOT_COMPANIES` (comma-separated).
    pub fn from_env() -> Self {
        let data_file =
            env::var("CHATBOT_DATA_FILE").unwrap_or_else(|_| DEFAULT_DATA_FILE.to_string());

        let companies = match env::var("CHATBOT_COMPANIES") {
            Ok(raw) => {
                let parsed: Vec<String> = raw
                    .split(',')
                    .map(|c| c.trim().to_string())
                    .filter(|c| !c.is_empty())
                    .collect();
                if parsed.is_empty() {
                    Self::default_companies()
                } else {
                    parsed
                }
            }
            Err(_) => Self::default_companies(),
        };

        info!(data_file = %data_file, companies = ?companies, "Chatbot configuration resolved");

        Self {
            companies,
            data_file,
        }
    }

    fn default_companies() -> Vec<String> {
        DEFAULT_COMPANIES.iter().map(|c| c.to_string()).collect()
    }
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            companies: Self::default_companies(),
            data_file: DEFAULT_DATA_FILE.to_string(),
        }
    }
}
