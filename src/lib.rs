//! # Monthly Balance Sheet
//!
//! A library for folding two series of dated amounts (expenses and revenues)
//! into a monthly balance sheet of revenue minus expense.
//!
//! ## Core Concepts
//!
//! - **Anchor**: The first entry of a series, moved to January of its year. It
//!   defines the twelve month slots of that series.
//! - **Month Slots**: Twelve per-month buckets. Entries landing in the same
//!   slot are summed; months without entries are zero-filled.
//! - **Last Real Month**: The highest calendar month present in a series before
//!   zero-filling. The balance sheet is cut to the larger of the two.
//! - **Netting**: Months both series share become `revenue - expense`.
//!
//! ## Example
//!
//! ```rust
//! use monthly_balance_sheet::*;
//! use chrono::{TimeZone, Utc};
//!
//! let jan = Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap();
//! let feb = Utc.with_ymd_and_hms(2021, 2, 1, 0, 0, 0).unwrap();
//!
//! let source = SourceData {
//!     expense_data: vec![DatedAmount::new(10, jan), DatedAmount::new(20, feb)],
//!     revenue_data: vec![DatedAmount::new(50, jan)],
//! };
//!
//! let sheet = build_balance_sheet(&source).unwrap();
//! assert_eq!(sheet.balance[0].amount, 40);
//! assert_eq!(sheet.balance[1].amount, -20);
//! ```

pub mod aggregator;
pub mod config;
pub mod error;
pub mod merger;
pub mod schema;
pub mod storage;
pub mod utils;

pub use aggregator::{AggregationResult, MonthAggregator, MonthSlot, SlotOrigin};
pub use config::{BuilderConfig, RunConfig, SlotMatching};
pub use error::{BalanceSheetError, Result};
pub use merger::BalanceMerger;
pub use schema::*;
pub use storage::{parse_source, read_source, to_json, write_balance_sheet};
pub use utils::*;

use log::{debug, info};

pub struct BalanceSheetBuilder {
    config: BuilderConfig,
}

impl BalanceSheetBuilder {
    pub fn new(config: BuilderConfig) -> Self {
        Self { config }
    }

    pub fn build(&self, source: &SourceData) -> Result<BalanceSheet> {
        info!(
            "Building balance sheet from {} expense and {} revenue entries",
            source.expense_data.len(),
            source.revenue_data.len()
        );

        let aggregator = MonthAggregator::new(self.config.slot_matching);
        let expense = aggregator.aggregate(Series::Expense, source.entries(Series::Expense))?;
        let revenue = aggregator.aggregate(Series::Revenue, source.entries(Series::Revenue))?;

        validate_shared_anchor_year(&expense, &revenue)?;

        let balance = BalanceMerger::merge(&expense, &revenue)?;
        debug!(
            "Balance sheet spans {} months from {}",
            balance.len(),
            expense.anchor
        );

        Ok(BalanceSheet { balance })
    }
}

impl Default for BalanceSheetBuilder {
    fn default() -> Self {
        Self::new(BuilderConfig::default())
    }
}

pub fn build_balance_sheet(source: &SourceData) -> Result<BalanceSheet> {
    BalanceSheetBuilder::default().build(source)
}

/// Reads the source file, builds the sheet and writes it out.
///
/// Nothing is written unless the whole sheet was built.
pub fn run(config: &RunConfig) -> Result<BalanceSheet> {
    let source = read_source(&config.input_path)?;
    let sheet = BalanceSheetBuilder::new(config.builder.clone()).build(&source)?;
    write_balance_sheet(&config.output_path, &sheet, config.builder.pretty_output)?;
    Ok(sheet)
}

fn validate_shared_anchor_year(
    expense: &AggregationResult,
    revenue: &AggregationResult,
) -> Result<()> {
    if expense.anchor_year() != revenue.anchor_year() {
        return Err(BalanceSheetError::AnchorYearMismatch {
            expense: expense.anchor_year(),
            revenue: revenue.anchor_year(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    fn utc(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_end_to_end_scenario() {
        let source = SourceData {
            expense_data: vec![
                DatedAmount::new(10, utc(2021, 1, 1)),
                DatedAmount::new(20, utc(2021, 2, 1)),
            ],
            revenue_data: vec![DatedAmount::new(50, utc(2021, 1, 1))],
        };

        let sheet = build_balance_sheet(&source).unwrap();
        assert_eq!(
            sheet.balance,
            vec![
                BalanceEntry {
                    amount: 40,
                    date: utc(2021, 1, 1)
                },
                BalanceEntry {
                    amount: -20,
                    date: utc(2021, 2, 1)
                },
            ]
        );
        assert_eq!(sheet.total(), 20);
    }

    #[test]
    fn test_empty_series_fails_whole_pipeline() {
        let source = SourceData {
            expense_data: vec![DatedAmount::new(10, utc(2021, 1, 1))],
            revenue_data: vec![],
        };

        let err = build_balance_sheet(&source).unwrap_err();
        assert!(matches!(
            err,
            BalanceSheetError::InvalidInput {
                series: Series::Revenue
            }
        ));
    }

    #[test]
    fn test_divergent_anchor_years_are_rejected() {
        let source = SourceData {
            expense_data: vec![DatedAmount::new(10, utc(2020, 6, 1))],
            revenue_data: vec![DatedAmount::new(50, utc(2021, 6, 1))],
        };

        let err = build_balance_sheet(&source).unwrap_err();
        assert!(matches!(
            err,
            BalanceSheetError::AnchorYearMismatch {
                expense: 2020,
                revenue: 2021
            }
        ));
    }

    #[test]
    fn test_calendar_month_builder() {
        let source = SourceData {
            expense_data: vec![DatedAmount::new(10, utc(2021, 1, 31))],
            revenue_data: vec![
                DatedAmount::new(50, utc(2021, 1, 5)),
                DatedAmount::new(25, utc(2021, 3, 20)),
            ],
        };

        let builder = BalanceSheetBuilder::new(BuilderConfig {
            slot_matching: SlotMatching::CalendarMonth,
            ..BuilderConfig::default()
        });
        let sheet = builder.build(&source).unwrap();

        let amounts: Vec<i64> = sheet.balance.iter().map(|e| e.amount).collect();
        assert_eq!(amounts, vec![40, 0, 25]);
        assert_eq!(sheet.balance[2].date, utc(2021, 3, 1));
    }
}
