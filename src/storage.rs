use crate::error::{BalanceSheetError, Result};
use crate::schema::{BalanceSheet, SourceData};
use log::{debug, info};
use std::fs;
use std::path::Path;

pub fn parse_source(text: &str) -> Result<SourceData> {
    let source: SourceData = serde_json::from_str(text)?;
    debug!(
        "Parsed {} expense and {} revenue entries",
        source.expense_data.len(),
        source.revenue_data.len()
    );
    Ok(source)
}

pub fn read_source(path: impl AsRef<Path>) -> Result<SourceData> {
    let path = path.as_ref();
    info!("Reading source data from {}", path.display());

    let text = fs::read_to_string(path).map_err(|source| BalanceSheetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_source(&text)
}

/// Encodes the sheet as JSON, indented with two spaces when `pretty` is set.
pub fn to_json(sheet: &BalanceSheet, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(sheet)?
    } else {
        serde_json::to_string(sheet)?
    };
    Ok(json)
}

pub fn write_balance_sheet(path: impl AsRef<Path>, sheet: &BalanceSheet, pretty: bool) -> Result<()> {
    let path = path.as_ref();
    let json = to_json(sheet, pretty)?;

    fs::write(path, json).map_err(|source| BalanceSheetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Wrote {} balance entries to {}", sheet.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::BalanceEntry;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_parse_source_rejects_malformed_json() {
        let err = parse_source(r#"{"expenseData": [{"amount": "ten"}]}"#).unwrap_err();
        assert!(matches!(err, BalanceSheetError::MalformedSource(_)));

        let err = parse_source("not json").unwrap_err();
        assert!(matches!(err, BalanceSheetError::MalformedSource(_)));
    }

    #[test]
    fn test_parse_source_requires_both_series() {
        let err = parse_source(r#"{"expenseData": []}"#).unwrap_err();
        assert!(matches!(err, BalanceSheetError::MalformedSource(_)));
    }

    #[test]
    fn test_read_missing_file_is_io_error() {
        let err = read_source("/definitely/not/here/input.json").unwrap_err();
        match err {
            BalanceSheetError::Io { path, .. } => {
                assert_eq!(path, Path::new("/definitely/not/here/input.json"))
            }
            other => panic!("expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_to_json_pretty_and_compact() {
        let sheet = BalanceSheet {
            balance: vec![BalanceEntry {
                amount: 40,
                date: Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap(),
            }],
        };

        let pretty = to_json(&sheet, true).unwrap();
        assert_eq!(
            pretty,
            "{\n  \"balance\": [\n    {\n      \"amount\": 40,\n      \"startDate\": \"2021-01-01T00:00:00.000Z\"\n    }\n  ]\n}"
        );

        let compact = to_json(&sheet, false).unwrap();
        assert_eq!(
            compact,
            r#"{"balance":[{"amount":40,"startDate":"2021-01-01T00:00:00.000Z"}]}"#
        );
    }
}
