use crate::config::SlotMatching;
use crate::error::{BalanceSheetError, Result};
use crate::schema::{DatedAmount, Series};
use crate::utils::{add_months, month_start, start_of_year};
use chrono::{DateTime, Datelike, Utc};
use log::debug;
use std::collections::BTreeMap;

pub const MONTHS_PER_YEAR: u32 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotOrigin {
    /// At least one input entry landed in this month
    Observed,
    /// No entry for this month; the amount is an implied zero
    Filled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthSlot {
    pub amount: i64,
    pub date: DateTime<Utc>,
    pub origin: SlotOrigin,
}

/// Twelve month slots for one series, ascending by date.
///
/// Only the slots up to `last_real_month` carry meaning for the balance
/// sheet. Everything after it is zero fill that the merger truncates away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregationResult {
    pub series: Series,
    pub anchor: DateTime<Utc>,
    pub months: Vec<MonthSlot>,
    pub last_real_month: u32,
}

impl AggregationResult {
    pub fn anchor_year(&self) -> i32 {
        self.anchor.year()
    }

    pub fn total(&self) -> i64 {
        self.months.iter().map(|slot| slot.amount).sum()
    }

    pub fn observed_months(&self) -> usize {
        self.months
            .iter()
            .filter(|slot| slot.origin == SlotOrigin::Observed)
            .count()
    }
}

pub struct MonthAggregator {
    slot_matching: SlotMatching,
}

impl MonthAggregator {
    pub fn new(slot_matching: SlotMatching) -> Self {
        Self { slot_matching }
    }

    pub fn aggregate(&self, series: Series, entries: &[DatedAmount]) -> Result<AggregationResult> {
        let first = entries
            .first()
            .ok_or(BalanceSheetError::InvalidInput { series })?;

        let anchor = match self.slot_matching {
            SlotMatching::Exact => start_of_year(first.date)?,
            SlotMatching::CalendarMonth => month_start(first.date.year(), 1)?,
        };

        let mut grid: BTreeMap<DateTime<Utc>, MonthSlot> = BTreeMap::new();
        for offset in 0..MONTHS_PER_YEAR as i32 {
            let date = add_months(anchor, offset)?;
            grid.insert(
                date,
                MonthSlot {
                    amount: 0,
                    date,
                    origin: SlotOrigin::Filled,
                },
            );
        }

        let mut last_real_month = 0;
        for entry in entries {
            let key = self.slot_key(entry.date)?;
            let slot = grid
                .get_mut(&key)
                .ok_or(BalanceSheetError::UnmatchedEntry {
                    series,
                    date: entry.date,
                })?;

            slot.amount = slot
                .amount
                .checked_add(entry.amount)
                .ok_or(BalanceSheetError::AmountOverflow {
                    series,
                    date: slot.date,
                })?;
            slot.origin = SlotOrigin::Observed;
            last_real_month = last_real_month.max(entry.date.month());
        }

        let result = AggregationResult {
            series,
            anchor,
            months: grid.into_values().collect(),
            last_real_month,
        };

        debug!(
            "Aggregated {} {} entries into {} observed months (anchor {}, last real month {})",
            entries.len(),
            series,
            result.observed_months(),
            result.anchor,
            result.last_real_month
        );

        Ok(result)
    }

    fn slot_key(&self, date: DateTime<Utc>) -> Result<DateTime<Utc>> {
        match self.slot_matching {
            SlotMatching::Exact => Ok(date),
            SlotMatching::CalendarMonth => month_start(date.year(), date.month()),
        }
    }
}

impl Default for MonthAggregator {
    fn default() -> Self {
        Self::new(SlotMatching::default())
    }
}
