//! The wallet screen's in-memory ledger: stored balance, appended
//! transactions and the savings goal.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::core::services::{Financials, ServiceError, ServiceResult, SummaryService};
use crate::domain::{
    date::format_month_day, Displayable, SavingsGoal, Transaction, WalletSnapshot,
};
use crate::storage::FixtureSet;

#[derive(Debug, Clone)]
pub struct Wallet {
    balance: f64,
    currency: String,
    transactions: Vec<Transaction>,
    goal: SavingsGoal,
}

impl Wallet {
    pub fn new(snapshot: WalletSnapshot, transactions: Vec<Transaction>, goal: SavingsGoal) -> Self {
        Self {
            balance: snapshot.balance,
            currency: snapshot.currency,
            transactions,
            goal,
        }
    }

    pub fn from_fixtures(fixtures: &FixtureSet) -> Self {
        Self::new(
            fixtures.wallet.clone(),
            fixtures.transactions.clone(),
            fixtures.goal.clone(),
        )
    }

    /// Prepends a transaction dated `today` and moves the balance by `amount`.
    pub fn add_transaction(
        &mut self,
        title: &str,
        amount: f64,
        today: NaiveDate,
    ) -> ServiceResult<&Transaction> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ServiceError::Invalid("Please enter a title".into()));
        }
        if !amount.is_finite() || amount == 0.0 {
            return Err(ServiceError::Invalid("Please enter a valid amount".into()));
        }

        let txn = Transaction::new(Uuid::new_v4().to_string().as_str(), title, amount)
            .with_date(format_month_day(today));
        self.balance += amount;
        tracing::info!(
            txn = %txn.display_label(),
            balance = self.balance,
            "wallet transaction added"
        );
        self.transactions.insert(0, txn);

        Ok(&self.transactions[0])
    }

    pub fn update_goal(&mut self, current: f64) {
        if current.is_finite() {
            self.goal.current = current;
        }
    }

    pub fn financials(&self) -> Financials {
        SummaryService::sum_financials(&self.transactions)
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn goal(&self) -> &SavingsGoal {
        &self.goal
    }
}
