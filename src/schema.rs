use crate::utils::format_timestamp;
use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Which side of the ledger a series of entries belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum Series {
    Expense,
    Revenue,
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Series::Expense => write!(f, "expense"),
            Series::Revenue => write!(f, "revenue"),
        }
    }
}

/// A single dated observation read from the source document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DatedAmount {
    #[schemars(description = "Whole-unit amount for the entry. May be negative.")]
    pub amount: i64,

    #[serde(rename = "startDate")]
    #[schemars(
        description = "RFC3339 timestamp of the month this amount belongs to (e.g. 2021-01-01T00:00:00.000Z). Non-UTC offsets are converted to UTC."
    )]
    pub date: DateTime<Utc>,
}

impl DatedAmount {
    pub fn new(amount: i64, date: DateTime<Utc>) -> Self {
        Self { amount, date }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SourceData {
    #[schemars(description = "Expense entries, in any order. The first entry anchors the year.")]
    pub expense_data: Vec<DatedAmount>,

    #[schemars(description = "Revenue entries, in any order. The first entry anchors the year.")]
    pub revenue_data: Vec<DatedAmount>,
}

impl SourceData {
    pub fn entries(&self, series: Series) -> &[DatedAmount] {
        match series {
            Series::Expense => &self.expense_data,
            Series::Revenue => &self.revenue_data,
        }
    }

    pub fn generate_json_schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(SourceData)
    }

    pub fn schema_as_json() -> Result<String, serde_json::Error> {
        let schema = Self::generate_json_schema();
        serde_json::to_string_pretty(&schema)
    }
}

/// One month of the balance sheet.
///
/// `amount` is revenue minus expense when both series have the month, or the
/// raw amount of whichever series does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BalanceEntry {
    pub amount: i64,

    #[serde(rename = "startDate", serialize_with = "serialize_timestamp")]
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BalanceSheet {
    pub balance: Vec<BalanceEntry>,
}

impl BalanceSheet {
    pub fn len(&self) -> usize {
        self.balance.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balance.is_empty()
    }

    pub fn total(&self) -> i64 {
        self.balance.iter().map(|entry| entry.amount).sum()
    }
}

fn serialize_timestamp<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_timestamp(date))
}
