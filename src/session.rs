//! Dialogue coordination
//!
//! Per-turn decision sequence over the extracted intent, the carried
//! conversation state and the loaded table. Business-logic outcomes
//! (clarifying questions, answers, per-company "no data" segments) are all
//! returned as strings; only record lookups for a direct single-company
//! answer surface as errors, which the REPL prints without dying.

use crate::classifier::{detect_metric, extract_companies, extract_year, wants_compare, wants_yoy};
use crate::composer::{answer_compare, answer_single};
use crate::config::BotConfig;
use crate::error::ChatbotError;
use crate::models::FinancialTable;
use crate::Result;
use serde::{Deserialize, Serialize};
use tracing::debug;

const METRIC_QUESTION: &str =
    "Which metric do you want: revenue, net income, assets, liabilities, or operating cash flow (CFO)?";

/// Cross-turn memory: the companies the user most recently mentioned.
/// Lives for the process session only.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ConversationState {
    pub last_companies: Vec<String>,
}

impl ConversationState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Answer one utterance. Mutates `state.last_companies` when the text
/// names companies explicitly; otherwise leaves the state untouched.
pub fn reply(
    table: &FinancialTable,
    text: &str,
    state: &mut ConversationState,
    config: &BotConfig,
) -> Result<String> {
    let text = text.trim();
    let lowered = text.to_lowercase();

    let mut companies = extract_companies(text, &config.companies);
    if !companies.is_empty() {
        state.last_companies = companies.clone();
    }

    let year = extract_year(text);
    let metric = detect_metric(text);
    let include_yoy = wants_yoy(text);
    let mut compare = wants_compare(text) || companies.len() > 1;

    debug!(
        ?metric,
        ?year,
        ?companies,
        include_yoy,
        compare,
        "Intent extracted"
    );

    let Some(metric) = metric else {
        return Ok(METRIC_QUESTION.to_string());
    };

    // "all" broadens to the whole enumeration, even on a fresh session
    // with no companies carried over.
    if lowered.contains("all") {
        companies = config.companies.clone();
        compare = true;
    }

    if companies.is_empty() {
        companies = state.last_companies.clone();
    }
    if companies.is_empty() {
        return Ok(company_question(&config.companies));
    }

    let year = match year {
        Some(y) => y,
        None => table
            .latest_year(&companies[0])
            .ok_or_else(|| ChatbotError::NoHistory(companies[0].clone()))?,
    };

    if compare {
        // "compare" with a single company broadens to the full set;
        // comparing one company against itself makes no sense.
        if companies.len() == 1 {
            companies = config.companies.clone();
        }
        return Ok(answer_compare(table, &companies, metric, year, include_yoy));
    }

    answer_single(table, &companies[0], metric, year, include_yoy)
}

fn company_question(companies: &[String]) -> String {
    let listed = match companies {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{first} or {second}"),
        [init @ .., last] => format!("{}, or {last}", init.join(", ")),
    };
    format!("Which company: {listed}? (You can also say 'compare all')")
}
