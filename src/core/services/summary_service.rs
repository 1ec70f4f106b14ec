//! Income/outcome aggregation and month-over-month comparison.

use chrono::{Datelike, Month, NaiveDate};

use crate::domain::{
    date::{month_from_index, month_from_prefix},
    Amounted, Transaction,
};

/// Totals shown on the balance card.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Financials {
    /// Sum of positive amounts.
    pub income: f64,
    /// Sum of the magnitudes of non-positive amounts.
    pub outcome: f64,
    /// Always `income - outcome`; never read from a stored field.
    pub balance: f64,
}

impl Financials {
    fn from_totals(income: f64, outcome: f64) -> Self {
        Self {
            income,
            outcome,
            balance: income - outcome,
        }
    }
}

/// Where the "this month" of a comparison came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceMonth {
    Configured(Month),
    LatestTransaction(Month),
    Today(Month),
}

impl ReferenceMonth {
    pub fn month(&self) -> Month {
        match self {
            ReferenceMonth::Configured(month)
            | ReferenceMonth::LatestTransaction(month)
            | ReferenceMonth::Today(month) => *month,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthComparison {
    pub reference: ReferenceMonth,
    pub month: Month,
    pub previous: Month,
    pub this_month_total: f64,
    pub last_month_total: f64,
    pub percentage_change: f64,
    /// Heading for the overview screen: the configured label verbatim, or
    /// the full month name.
    pub label: String,
}

impl MonthComparison {
    pub fn is_increase(&self) -> bool {
        self.percentage_change >= 0.0
    }
}

pub struct SummaryService;

impl SummaryService {
    /// All-time income and outcome over every transaction in `transactions`.
    pub fn sum_financials(transactions: &[Transaction]) -> Financials {
        let (income, outcome) = transactions
            .iter()
            .fold((0.0, 0.0), |(income, outcome), txn| {
                if txn.is_income() {
                    (income + txn.amount, outcome)
                } else {
                    (income, outcome + txn.amount.abs())
                }
            });
        tracing::debug!(count = transactions.len(), income, outcome, "summed financials");
        Financials::from_totals(income, outcome)
    }

    /// Same as [`Self::sum_financials`] restricted to transactions whose date
    /// parses into `month`. Undated transactions are left out.
    pub fn sum_financials_for_month(transactions: &[Transaction], month: Month) -> Financials {
        let scoped: Vec<Transaction> = transactions
            .iter()
            .filter(|txn| in_month(txn, month))
            .cloned()
            .collect();
        Self::sum_financials(&scoped)
    }

    /// Signed total of transactions dated in `month`; the year is ignored.
    pub fn sum_by_month(transactions: &[Transaction], month: Month) -> f64 {
        transactions
            .iter()
            .filter(|txn| in_month(txn, month))
            .map(|txn| txn.amount)
            .sum()
    }

    /// `(this - last) / |last| * 100`, or `0` when there is no previous total.
    pub fn percentage_change(this_month: f64, last_month: f64) -> f64 {
        if last_month == 0.0 || !last_month.is_finite() || !this_month.is_finite() {
            return 0.0;
        }
        (this_month - last_month) / last_month.abs() * 100.0
    }

    /// Picks "this month": a configured label that names a month, else the
    /// month of the latest parseable transaction date, else `today`.
    pub fn reference_month(
        transactions: &[Transaction],
        configured: Option<&str>,
        today: NaiveDate,
    ) -> ReferenceMonth {
        if let Some(month) = configured.and_then(month_from_prefix) {
            return ReferenceMonth::Configured(month);
        }
        transactions
            .iter()
            .filter_map(Transaction::parsed_date)
            .max()
            .map(|latest| ReferenceMonth::LatestTransaction(latest.month()))
            .unwrap_or_else(|| ReferenceMonth::Today(month_from_index(today.month0())))
    }

    pub fn month_comparison(
        transactions: &[Transaction],
        configured: Option<&str>,
        today: NaiveDate,
    ) -> MonthComparison {
        let reference = Self::reference_month(transactions, configured, today);
        let month = reference.month();
        let previous = month.pred();
        let this_month_total = Self::sum_by_month(transactions, month);
        let last_month_total = Self::sum_by_month(transactions, previous);
        let percentage_change = Self::percentage_change(this_month_total, last_month_total);
        let label = configured
            .map(str::trim)
            .filter(|label| !label.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| month.name().to_string());
        tracing::debug!(
            month = month.name(),
            this_month_total,
            last_month_total,
            percentage_change,
            "month comparison"
        );
        MonthComparison {
            reference,
            month,
            previous,
            this_month_total,
            last_month_total,
            percentage_change,
            label,
        }
    }
}

fn in_month(txn: &Transaction, month: Month) -> bool {
    txn.parsed_date()
        .map(|date| date.month() == month)
        .unwrap_or(false)
}
