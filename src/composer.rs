//! Answer composition
//!
//! Turns resolved (company, metric, year) queries into the bot's sentence
//! formats. `answer_single` fails on a missing record; `answer_compare`
//! never fails as a whole and embeds per-company "no data" segments inline.

use crate::error::ChatbotError;
use crate::models::{FinancialTable, Metric};
use crate::Result;

/// Format a USD-millions value with thousands separators and no decimals.
pub fn money_musd(value: f64) -> String {
    let rounded = format!("{value:.0}");
    let (sign, digits) = match rounded.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rounded.as_str()),
    };
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}{grouped} USD mn")
}

/// One company's answer sentence, with an optional YoY clause.
pub fn answer_single(
    table: &FinancialTable,
    company: &str,
    metric: Metric,
    year: i32,
    include_yoy: bool,
) -> Result<String> {
    let record = table.get(company, year).ok_or_else(|| ChatbotError::NotFound {
        company: company.to_string(),
        year,
    })?;

    let mut msg = format!(
        "{} {} (FY{}) = {}.",
        company,
        metric.display_name(),
        year,
        money_musd(record.value(metric))
    );

    if include_yoy {
        match record.yoy.get(metric) {
            None => msg.push_str(" YoY: N/A (no prior year in dataset)."),
            Some(pct) => {
                // pct == 0 reads as "decreased"; kept as-is.
                let direction = if pct > 0.0 { "increased" } else { "decreased" };
                msg.push_str(&format!(
                    " YoY: {} by {:.2}% vs FY{}.",
                    direction,
                    pct.abs(),
                    year - 1
                ));
            }
        }
    }

    Ok(msg)
}

/// Per-company answers joined with " | ". A company without data for the
/// year contributes a "No data" segment instead of failing the response.
pub fn answer_compare(
    table: &FinancialTable,
    companies: &[String],
    metric: Metric,
    year: i32,
    include_yoy: bool,
) -> String {
    let parts: Vec<String> = companies
        .iter()
        .map(|company| {
            answer_single(table, company, metric, year, include_yoy)
                .unwrap_or_else(|_| format!("{company}: No data for FY{year}."))
        })
        .collect();
    parts.join(" | ")
}
