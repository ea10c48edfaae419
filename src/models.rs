//! Core data models for the financial chatbot

use serde::{Deserialize, Serialize};
use std::fmt;

//
// ================= Metric =================
//

/// The closed set of financial metrics the bot can answer about.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Metric {
    TotalRevenue,
    NetIncome,
    TotalAssets,
    TotalLiabilities,
    Cfo,
}

impl Metric {
    /// All metrics, in canonical order. This order doubles as the
    /// keyword-detection priority order and must not be reshuffled.
    pub const ALL: [Metric; 5] = [
        Metric::TotalRevenue,
        Metric::NetIncome,
        Metric::TotalAssets,
        Metric::TotalLiabilities,
        Metric::Cfo,
    ];

    /// Canonical column identifier in the source table.
    pub fn column(&self) -> &'static str {
        match self {
            Metric::TotalRevenue => "TotalRevenue",
            Metric::NetIncome => "NetIncome",
            Metric::TotalAssets => "TotalAssets",
            Metric::TotalLiabilities => "TotalLiabilities",
            Metric::Cfo => "CFO",
        }
    }

    /// Human-readable name used in answer sentences.
    pub fn display_name(&self) -> &'static str {
        match self {
            Metric::TotalRevenue => "total revenue",
            Metric::NetIncome => "net income",
            Metric::TotalAssets => "total assets",
            Metric::TotalLiabilities => "total liabilities",
            Metric::Cfo => "cash flow from operations (CFO)",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

//
// ================= Records =================
//

/// Year-over-year percent change per metric, relative to the company's
/// immediately preceding fiscal year. `None` for a company's first year
/// or when the prior value is zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct YoyChanges {
    pub total_revenue: Option<f64>,
    pub net_income: Option<f64>,
    pub total_assets: Option<f64>,
    pub total_liabilities: Option<f64>,
    pub cfo: Option<f64>,
}

impl YoyChanges {
    pub fn get(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::TotalRevenue => self.total_revenue,
            Metric::NetIncome => self.net_income,
            Metric::TotalAssets => self.total_assets,
            Metric::TotalLiabilities => self.total_liabilities,
            Metric::Cfo => self.cfo,
        }
    }

    pub fn set(&mut self, metric: Metric, pct: Option<f64>) {
        match metric {
            Metric::TotalRevenue => self.total_revenue = pct,
            Metric::NetIncome => self.net_income = pct,
            Metric::TotalAssets => self.total_assets = pct,
            Metric::TotalLiabilities => self.total_liabilities = pct,
            Metric::Cfo => self.cfo = pct,
        }
    }
}

/// One row of the dataset: a company's figures for a single fiscal year,
/// all in USD millions. Immutable after load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FinancialRecord {
    pub company: String,
    pub fiscal_year: i32,
    pub total_revenue: f64,
    pub net_income: f64,
    pub total_assets: f64,
    pub total_liabilities: f64,
    pub cfo: f64,
    pub yoy: YoyChanges,
}

impl FinancialRecord {
    pub fn value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::TotalRevenue => self.total_revenue,
            Metric::NetIncome => self.net_income,
            Metric::TotalAssets => self.total_assets,
            Metric::TotalLiabilities => self.total_liabilities,
            Metric::Cfo => self.cfo,
        }
    }

    pub(crate) fn set_value(&mut self, metric: Metric, value: f64) {
        match metric {
            Metric::TotalRevenue => self.total_revenue = value,
            Metric::NetIncome => self.net_income = value,
            Metric::TotalAssets => self.total_assets = value,
            Metric::TotalLiabilities => self.total_liabilities = value,
            Metric::Cfo => self.cfo = value,
        }
    }
}

//
// ================= Table =================
//

/// The loaded dataset: records sorted by (company, fiscal year) ascending.
/// Built once by the loader, read-only afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialTable {
    records: Vec<FinancialRecord>,
}

impl FinancialTable {
    /// Records must already be sorted by (company, fiscal_year).
    pub(crate) fn new(records: Vec<FinancialRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[FinancialRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up the record for (company, fiscal year). First match wins
    /// if duplicates slipped into the source data.
    pub fn get(&self, company: &str, year: i32) -> Option<&FinancialRecord> {
        self.records
            .iter()
            .find(|r| r.company == company && r.fiscal_year == year)
    }

    /// Latest fiscal year present for a company, or `None` if the company
    /// has no rows at all.
    pub fn latest_year(&self, company: &str) -> Option<i32> {
        self.records
            .iter()
            .filter(|r| r.company == company)
            .map(|r| r.fiscal_year)
            .max()
    }
}
