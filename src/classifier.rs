//! Intent extraction
//!
//! Pure keyword/regex scans over a lower-cased utterance. Four independent
//! extractors: company mentions, fiscal year, metric, and the two intent
//! flags (year-over-year, cross-company compare). No state, no allocation
//! beyond the lowered input.

use crate::models::Metric;
use lazy_static::lazy_static;
use regex::Regex;

/// Ordered (metric, keyword group) table. The first group with any keyword
/// present in the text wins, so the order is load-bearing: "cash flow and
/// revenue" resolves to revenue because its group is checked first.
const METRIC_KEYWORDS: &[(Metric, &[&str])] = &[
    (Metric::TotalRevenue, &["revenue", "sales", "top line"]),
    (Metric::NetIncome, &["net income", "profit", "earnings"]),
    (Metric::TotalAssets, &["assets", "total assets"]),
    (Metric::TotalLiabilities, &["liabilities", "total liabilities", "debt"]),
    (
        Metric::Cfo,
        &["cfo", "operating cash", "operating cash flow", "cash flow from operations"],
    ),
];

/// Static keyword lists — zero allocation
const YOY_KEYWORDS: &[&str] = &[
    "yoy", "year over year", "growth", "change", "increased", "decreased", "delta",
];

const COMPARE_KEYWORDS: &[&str] = &[
    "compare", "vs", "versus", "difference", "which company",
];

lazy_static! {
    static ref YEAR_RE: Regex = Regex::new(r"\b(20\d{2})\b").expect("year pattern is valid");
}

/// Companies whose name appears (case-insensitively) in the text, returned
/// in enumeration order rather than occurrence order. May be empty.
pub fn extract_companies(text: &str, companies: &[String]) -> Vec<String> {
    let lowered = text.to_lowercase();
    companies
        .iter()
        .filter(|c| lowered.contains(&c.to_lowercase()))
        .cloned()
        .collect()
}

/// First 4-digit token matching `20\d\d`, if any. A text mentioning two
/// years yields only the first.
pub fn extract_year(text: &str) -> Option<i32> {
    YEAR_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// First metric whose keyword group matches, per the fixed priority order
/// of [`METRIC_KEYWORDS`].
pub fn detect_metric(text: &str) -> Option<Metric> {
    let lowered = text.to_lowercase();
    METRIC_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| lowered.contains(kw)))
        .map(|(metric, _)| *metric)
}

/// Does the text ask about a year-over-year change?
pub fn wants_yoy(text: &str) -> bool {
    let lowered = text.to_lowercase();
    YOY_KEYWORDS.iter().any(|kw| lowered.contains(kw))
}

/// Does the text ask for a cross-company comparison?
pub fn wants_compare(text: &str) -> bool {
    let lowered = text.to_lowercase();
    COMPARE_KEYWORDS.iter().any(|kw| lowered.contains(kw))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn companies() -> Vec<String> {
        vec![
            "Apple".to_string(),
            "Microsoft".to_string(),
            "Tesla".to_string(),
        ]
    }

    #[test]
    fn test_extract_companies_in_enumeration_order() {
        // Microsoft appears before Apple in the text; extraction order is
        // still enumeration order.
        let found = extract_companies("Compare microsoft and Apple", &companies());
        assert_eq!(found, vec!["Apple", "Microsoft"]);
    }

    #[test]
    fn test_extract_companies_none_mentioned() {
        let found = extract_companies("no ticker here", &companies());
        assert!(found.is_empty());
    }

    #[test]
    fn test_extract_year_first_match_only() {
        assert_eq!(extract_year("What was revenue in 2023 vs 2024?"), Some(2023));
        assert_eq!(extract_year("latest numbers please"), None);
        // 4-digit tokens outside 20xx are not years to this bot.
        assert_eq!(extract_year("back in 1999"), None);
    }

    #[test]
    fn test_detect_metric_priority_order() {
        let cases = vec![
            ("What was the revenue?", Some(Metric::TotalRevenue)),
            ("show me profit", Some(Metric::NetIncome)),
            ("total assets please", Some(Metric::TotalAssets)),
            ("how much debt", Some(Metric::TotalLiabilities)),
            ("operating cash flow", Some(Metric::Cfo)),
            ("hello there", None),
        ];
        for (text, expected) in cases {
            assert_eq!(detect_metric(text), expected, "text: {text}");
        }
    }

    #[test]
    fn test_detect_metric_tie_break_favors_earlier_group() {
        // Both groups match; revenue is checked first.
        assert_eq!(
            detect_metric("net income and revenue"),
            Some(Metric::TotalRevenue)
        );
        assert_eq!(
            detect_metric("cash flow and revenue"),
            Some(Metric::TotalRevenue)
        );
    }

    #[test]
    fn test_intent_flags() {
        assert!(wants_yoy("How did it change year over year?"));
        assert!(wants_yoy("revenue growth"));
        assert!(!wants_yoy("What was revenue in 2024?"));

        assert!(wants_compare("Apple vs Tesla"));
        assert!(wants_compare("which company earned more"));
        assert!(!wants_compare("What was revenue in 2024?"));
    }
}
