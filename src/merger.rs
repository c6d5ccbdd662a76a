use crate::aggregator::{AggregationResult, MonthSlot};
use crate::error::{BalanceSheetError, Result};
use crate::schema::BalanceEntry;
use log::debug;
use std::cmp::Ordering;

pub struct BalanceMerger;

impl BalanceMerger {
    /// Sorted merge of the expense and revenue month slots.
    ///
    /// Slots sharing a date are netted as revenue minus expense. A slot only
    /// one side has is emitted with its own amount. The result is cut to the
    /// longer of the two series' `last_real_month`.
    pub fn merge(
        expense: &AggregationResult,
        revenue: &AggregationResult,
    ) -> Result<Vec<BalanceEntry>> {
        let exp = &expense.months;
        let rev = &revenue.months;
        let mut merged = Vec::with_capacity(exp.len() + rev.len());

        let (mut i, mut j) = (0, 0);
        while i < exp.len() && j < rev.len() {
            match exp[i].date.cmp(&rev[j].date) {
                Ordering::Equal => {
                    let amount = rev[j].amount.checked_sub(exp[i].amount).ok_or(
                        BalanceSheetError::AmountOverflow {
                            series: revenue.series,
                            date: rev[j].date,
                        },
                    )?;
                    merged.push(BalanceEntry {
                        amount,
                        date: exp[i].date,
                    });
                    i += 1;
                    j += 1;
                }
                Ordering::Greater => {
                    merged.push(as_entry(&rev[j]));
                    j += 1;
                }
                Ordering::Less => {
                    merged.push(as_entry(&exp[i]));
                    i += 1;
                }
            }
        }
        merged.extend(exp[i..].iter().map(as_entry));
        merged.extend(rev[j..].iter().map(as_entry));

        let extent = expense.last_real_month.max(revenue.last_real_month) as usize;
        debug!(
            "Merged {} expense and {} revenue slots into {} entries, keeping {}",
            exp.len(),
            rev.len(),
            merged.len(),
            extent
        );
        merged.truncate(extent);
        Ok(merged)
    }
}

fn as_entry(slot: &MonthSlot) -> BalanceEntry {
    BalanceEntry {
        amount: slot.amount,
        date: slot.date,
    }
}
