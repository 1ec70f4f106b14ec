//! Category filtering and free-text search over the transaction list.

use std::fmt;

use crate::domain::{Transaction, TransactionKind};

/// Filter chip selected on the overview screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TransactionFilter {
    #[default]
    All,
    Expenses,
    Income,
    Transfers,
    /// Exact category id, compared case-insensitively.
    Category(String),
}

impl TransactionFilter {
    /// Maps the chip ids used by the UI (`"all"`, `"expenses"`, `"income"`,
    /// `"transfers"`); any other id selects that category.
    pub fn parse(id: &str) -> Self {
        let normalized = id.trim().to_lowercase();
        match normalized.as_str() {
            "" | "all" => TransactionFilter::All,
            "expenses" => TransactionFilter::Expenses,
            "income" => TransactionFilter::Income,
            "transfers" => TransactionFilter::Transfers,
            _ => TransactionFilter::Category(normalized),
        }
    }

    pub fn id(&self) -> &str {
        match self {
            TransactionFilter::All => "all",
            TransactionFilter::Expenses => "expenses",
            TransactionFilter::Income => "income",
            TransactionFilter::Transfers => "transfers",
            TransactionFilter::Category(id) => id,
        }
    }

    pub fn matches(&self, txn: &Transaction) -> bool {
        match self {
            TransactionFilter::All => true,
            TransactionFilter::Expenses => {
                txn.amount < 0.0 || txn.kind() == Some(TransactionKind::Expense)
            }
            TransactionFilter::Income => {
                txn.amount > 0.0 || txn.kind() == Some(TransactionKind::Income)
            }
            TransactionFilter::Transfers => txn
                .category_tag()
                .map(|tag| tag.to_lowercase().contains("transfer"))
                .unwrap_or(false),
            TransactionFilter::Category(id) => txn
                .category_tag()
                .map(|tag| tag.trim().to_lowercase() == id.to_lowercase())
                .unwrap_or(false),
        }
    }
}

impl From<&str> for TransactionFilter {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl fmt::Display for TransactionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

pub struct TransactionService;

impl TransactionService {
    /// Keeps transactions that match `filter` and, when `query` is not blank,
    /// contain it (case-insensitively) in the title, category or amount text.
    /// Input order is preserved.
    pub fn filter<'a>(
        transactions: &'a [Transaction],
        filter: &TransactionFilter,
        query: &str,
    ) -> Vec<&'a Transaction> {
        let needle = query.trim().to_lowercase();
        let matched: Vec<&Transaction> = transactions
            .iter()
            .filter(|txn| filter.matches(txn))
            .filter(|txn| needle.is_empty() || Self::matches_query(txn, &needle))
            .collect();
        tracing::debug!(
            filter = %filter,
            query = needle.as_str(),
            total = transactions.len(),
            matched = matched.len(),
            "filtered transactions"
        );
        matched
    }

    /// `needle` must already be lowercase.
    fn matches_query(txn: &Transaction, needle: &str) -> bool {
        txn.label().to_lowercase().contains(needle)
            || txn
                .category_tag()
                .map(|tag| tag.to_lowercase().contains(needle))
                .unwrap_or(false)
            || txn.amount_text().to_lowercase().contains(needle)
    }

    /// Looks a transaction up by its display id (`"7"` matches both `7` and `"7"`).
    pub fn find<'a>(transactions: &'a [Transaction], id: &str) -> Option<&'a Transaction> {
        transactions.iter().find(|txn| txn.id.to_string() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger() -> Vec<Transaction> {
        vec![
            Transaction::new(1, "Rent", -500.0).with_category("housing"),
            Transaction::new(2, "Salary", 1200.0).with_category("salary"),
            Transaction::new(3, "To savings", -100.0).with_category("Transfer"),
            Transaction::new(4, "Refund", 0.0)
                .with_category("shopping")
                .with_kind(TransactionKind::Income),
            Transaction::new(5, "Parking", 0.0).with_kind(TransactionKind::Expense),
        ]
    }

    fn ids(found: &[&Transaction]) -> Vec<String> {
        found.iter().map(|txn| txn.id.to_string()).collect()
    }

    #[test]
    fn parses_chip_ids() {
        assert_eq!(TransactionFilter::parse("ALL"), TransactionFilter::All);
        assert_eq!(TransactionFilter::parse(" expenses "), TransactionFilter::Expenses);
        assert_eq!(
            TransactionFilter::parse("Food"),
            TransactionFilter::Category("food".into())
        );
    }

    #[test]
    fn expenses_use_sign_or_type_tag() {
        let txns = ledger();
        let found = TransactionService::filter(&txns, &TransactionFilter::Expenses, "");
        assert_eq!(ids(&found), ["1", "3", "5"]);
    }

    #[test]
    fn income_uses_sign_or_type_tag() {
        let txns = ledger();
        let found = TransactionService::filter(&txns, &TransactionFilter::Income, "");
        assert_eq!(ids(&found), ["2", "4"]);
    }

    #[test]
    fn transfers_match_category_substring() {
        let txns = ledger();
        let found = TransactionService::filter(&txns, &TransactionFilter::Transfers, "");
        assert_eq!(ids(&found), ["3"]);
    }

    #[test]
    fn explicit_category_ignores_case() {
        let txns = ledger();
        let found = TransactionService::filter(&txns, &"Housing".into(), "");
        assert_eq!(ids(&found), ["1"]);
    }

    #[test]
    fn search_spans_title_category_and_amount() {
        let txns = ledger();
        let all = TransactionFilter::All;
        assert_eq!(ids(&TransactionService::filter(&txns, &all, "rent")), ["1"]);
        assert_eq!(ids(&TransactionService::filter(&txns, &all, "SAL")), ["2"]);
        assert_eq!(ids(&TransactionService::filter(&txns, &all, "-100")), ["3"]);
        assert_eq!(ids(&TransactionService::filter(&txns, &all, "   ")).len(), 5);
    }

    #[test]
    fn search_combines_with_filter() {
        let txns = ledger();
        let found = TransactionService::filter(&txns, &TransactionFilter::Income, "rent");
        assert!(found.is_empty());
    }

    #[test]
    fn find_by_display_id() {
        let txns = ledger();
        assert_eq!(
            TransactionService::find(&txns, "2").map(|txn| txn.label()),
            Some("Salary")
        );
        assert!(TransactionService::find(&txns, "99").is_none());
    }
}
