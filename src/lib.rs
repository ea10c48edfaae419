//! Financial Chatbot
//!
//! A rule-based question-answering bot over a small tabular financial
//! dataset:
//! - Loads a fixed-schema CSV (company, fiscal year, five metrics) into an
//!   immutable in-memory table with derived YoY percent changes
//! - Extracts companies, fiscal year, metric and intent flags from free
//!   text with keyword/regex rules
//! - Composes single-company and cross-company comparison answers
//! - Carries one piece of cross-turn state: the last mentioned companies
//!
//! TURN FLOW:
//! TEXT → CLASSIFY → COORDINATE (state + table) → COMPOSE → STRING

pub mod classifier;
pub mod composer;
pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod session;

pub use error::{ChatbotError, Result};

// Re-export common types
pub use config::BotConfig;
pub use models::{FinancialRecord, FinancialTable, Metric};
pub use session::{reply, ConversationState};
