//! Table loader
//!
//! Reads the fixed-schema CSV dataset into a [`FinancialTable`]: renames
//! long Excel-style headers to canonical column names, validates schema and
//! numeric types strictly, sorts by (company, fiscal year) and derives the
//! per-metric year-over-year percent changes.

use crate::error::ChatbotError;
use crate::models::{FinancialRecord, FinancialTable, Metric, YoyChanges};
use crate::Result;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::info;

/// Long-form source headers mapped to canonical column names. Applied only
/// for headers actually present; already-canonical headers pass through.
const HEADER_RENAMES: &[(&str, &str)] = &[
    ("Fiscal Year", "FiscalYear"),
    ("Total Revenue (USD mn)", "TotalRevenue"),
    ("Net Income (USD mn)", "NetIncome"),
    ("Total Assets (USD mn)", "TotalAssets"),
    ("Total Liabilities (USD mn)", "TotalLiabilities"),
    ("Cash Flow from Operations (USD mn)", "CFO"),
];

const COMPANY_COL: &str = "Company";
const FISCAL_YEAR_COL: &str = "FiscalYear";

/// Canonical columns that must all be present after renaming.
const REQUIRED_COLUMNS: [&str; 7] = [
    "Company",
    "FiscalYear",
    "TotalRevenue",
    "NetIncome",
    "TotalAssets",
    "TotalLiabilities",
    "CFO",
];

/// Load the dataset from a file path. Fatal at startup: the bot cannot
/// answer anything without a valid table.
pub fn load_table<P: AsRef<Path>>(path: P) -> Result<FinancialTable> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ChatbotError::FileNotFound(path.display().to_string()));
    }

    let table = read_table(File::open(path)?)?;
    info!(
        rows = table.len(),
        path = %path.display(),
        "Financial table loaded"
    );
    Ok(table)
}

/// Parse a table from any reader. Split out from [`load_table`] so tests
/// can feed synthetic CSV text without touching the filesystem.
pub fn read_table<R: Read>(reader: R) -> Result<FinancialTable> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()?
        .iter()
        .map(canonical_header)
        .collect();

    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !headers.iter().any(|h| h == *col))
        .map(|col| col.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(ChatbotError::SchemaError(missing));
    }

    let column_index = |name: &str| headers.iter().position(|h| h == name).unwrap_or_default();
    let company_idx = column_index(COMPANY_COL);
    let year_idx = column_index(FISCAL_YEAR_COL);
    let metric_idx: Vec<usize> = Metric::ALL.iter().map(|m| column_index(m.column())).collect();

    let mut records = Vec::new();
    for (row, result) in csv_reader.records().enumerate() {
        let raw = result?;

        // Fiscal year is coerced to integer; metrics stay floating-point.
        let year = parse_numeric(&raw, year_idx, FISCAL_YEAR_COL, row)? as i32;
        let mut record = FinancialRecord {
            company: raw.get(company_idx).unwrap_or_default().trim().to_string(),
            fiscal_year: year,
            total_revenue: 0.0,
            net_income: 0.0,
            total_assets: 0.0,
            total_liabilities: 0.0,
            cfo: 0.0,
            yoy: YoyChanges::default(),
        };
        for (metric, idx) in Metric::ALL.iter().zip(&metric_idx) {
            let value = parse_numeric(&raw, *idx, metric.column(), row)?;
            record.set_value(*metric, value);
        }
        records.push(record);
    }

    records.sort_by(|a, b| {
        a.company
            .cmp(&b.company)
            .then(a.fiscal_year.cmp(&b.fiscal_year))
    });
    derive_yoy(&mut records);

    Ok(FinancialTable::new(records))
}

fn canonical_header(header: &str) -> String {
    let trimmed = header.trim();
    HEADER_RENAMES
        .iter()
        .find(|(long, _)| *long == trimmed)
        .map(|(_, canonical)| canonical.to_string())
        .unwrap_or_else(|| trimmed.to_string())
}

/// Strict numeric parse: any non-numeric cell is a hard error, never a
/// silent null.
fn parse_numeric(
    raw: &csv::StringRecord,
    idx: usize,
    column: &'static str,
    row: usize,
) -> Result<f64> {
    let cell = raw.get(idx).unwrap_or_default().trim();
    cell.parse::<f64>().map_err(|_| ChatbotError::TypeError {
        column,
        value: cell.to_string(),
        row: row + 1,
    })
}

/// Per-metric YoY percent change against the immediately preceding record
/// of the same company in sorted order. Undefined for a company's first
/// year and when the prior value is zero.
fn derive_yoy(records: &mut [FinancialRecord]) {
    for i in 1..records.len() {
        if records[i - 1].company != records[i].company {
            continue;
        }
        for metric in Metric::ALL {
            let prev = records[i - 1].value(metric);
            let cur = records[i].value(metric);
            let pct = if prev == 0.0 {
                None
            } else {
                Some((cur - prev) / prev * 100.0)
            };
            records[i].yoy.set(metric, pct);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const WELL_FORMED: &str = "\
Company,Fiscal Year,Total Revenue (USD mn),Net Income (USD mn),Total Assets (USD mn),Total Liabilities (USD mn),Cash Flow from Operations (USD mn)
Tesla,2023,96773,14997,106618,43009,13256
Apple,2023,383285,96995,352583,290437,110543
Apple,2024,391035,93736,364980,308030,118254
Tesla,2024,97690,7091,122070,48390,14923
";

    fn table_from(csv_text: &str) -> Result<FinancialTable> {
        read_table(Cursor::new(csv_text))
    }

    #[test]
    fn test_loads_and_sorts_by_company_and_year() {
        let table = table_from(WELL_FORMED).unwrap();
        let order: Vec<(&str, i32)> = table
            .records()
            .iter()
            .map(|r| (r.company.as_str(), r.fiscal_year))
            .collect();
        assert_eq!(
            order,
            vec![
                ("Apple", 2023),
                ("Apple", 2024),
                ("Tesla", 2023),
                ("Tesla", 2024)
            ]
        );
    }

    #[test]
    fn test_renames_long_headers() {
        let table = table_from(WELL_FORMED).unwrap();
        let apple = table.get("Apple", 2024).unwrap();
        assert_eq!(apple.total_revenue, 391035.0);
        assert_eq!(apple.cfo, 118254.0);
    }

    #[test]
    fn test_yoy_first_year_undefined_later_years_computed() {
        let table = table_from(WELL_FORMED).unwrap();

        let first = table.get("Apple", 2023).unwrap();
        for metric in Metric::ALL {
            assert_eq!(first.yoy.get(metric), None);
        }

        let second = table.get("Apple", 2024).unwrap();
        let expected = (391035.0 - 383285.0) / 383285.0 * 100.0;
        let got = second.yoy.get(Metric::TotalRevenue).unwrap();
        assert!((got - expected).abs() < 1e-9);
    }

    #[test]
    fn test_yoy_undefined_when_prior_value_is_zero() {
        let csv_text = "\
Company,FiscalYear,TotalRevenue,NetIncome,TotalAssets,TotalLiabilities,CFO
Acme,2023,0,1,1,1,1
Acme,2024,50,2,2,2,2
";
        let table = table_from(csv_text).unwrap();
        let later = table.get("Acme", 2024).unwrap();
        assert_eq!(later.yoy.get(Metric::TotalRevenue), None);
        assert!(later.yoy.get(Metric::NetIncome).is_some());
    }

    #[test]
    fn test_yoy_does_not_cross_company_boundary() {
        let table = table_from(WELL_FORMED).unwrap();
        // Tesla 2023 follows Apple 2024 in sorted order but is Tesla's
        // first year.
        let tesla_first = table.get("Tesla", 2023).unwrap();
        assert_eq!(tesla_first.yoy.get(Metric::TotalRevenue), None);
    }

    #[test]
    fn test_schema_error_lists_all_missing_columns() {
        let csv_text = "Company,FiscalYear,TotalRevenue\nApple,2024,1\n";
        let err = table_from(csv_text).unwrap_err();
        match err {
            ChatbotError::SchemaError(missing) => {
                assert_eq!(
                    missing,
                    vec!["NetIncome", "TotalAssets", "TotalLiabilities", "CFO"]
                );
            }
            other => panic!("expected SchemaError, got {other:?}"),
        }
    }

    #[test]
    fn test_type_error_on_non_numeric_cell() {
        let csv_text = "\
Company,FiscalYear,TotalRevenue,NetIncome,TotalAssets,TotalLiabilities,CFO
Apple,2024,n/a,1,1,1,1
";
        let err = table_from(csv_text).unwrap_err();
        match err {
            ChatbotError::TypeError { column, value, .. } => {
                assert_eq!(column, "TotalRevenue");
                assert_eq!(value, "n/a");
            }
            other => panic!("expected TypeError, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_file_is_file_not_found() {
        let err = load_table("definitely/not/a/real/path.csv").unwrap_err();
        assert!(matches!(err, ChatbotError::FileNotFound(_)));
    }

    #[test]
    fn test_latest_year_lookup() {
        let table = table_from(WELL_FORMED).unwrap();
        assert_eq!(table.latest_year("Tesla"), Some(2024));
        assert_eq!(table.latest_year("Netflix"), None);
    }
}
