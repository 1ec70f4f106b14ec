use serde::{Deserialize, Serialize};

use crate::domain::common::lenient;

/// Stored wallet header: opening balance and display currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletSnapshot {
    #[serde(default, deserialize_with = "lenient::amount")]
    pub balance: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Default for WalletSnapshot {
    fn default() -> Self {
        Self {
            balance: 0.0,
            currency: default_currency(),
        }
    }
}

fn default_currency() -> String {
    "USD".into()
}

/// A savings target tracked on the wallet screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsGoal {
    #[serde(default)]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub current: f64,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub target: f64,
}

impl SavingsGoal {
    pub fn new(title: impl Into<String>, current: f64, target: f64) -> Self {
        Self {
            title: title.into(),
            current,
            target,
        }
    }

    /// Fraction of the target reached, clamped to `[0, 1]`.
    pub fn progress(&self) -> f64 {
        if self.target <= 0.0 {
            return 0.0;
        }
        (self.current / self.target).clamp(0.0, 1.0)
    }

    pub fn remaining(&self) -> f64 {
        (self.target - self.current).max(0.0)
    }
}

impl Default for SavingsGoal {
    fn default() -> Self {
        Self::new("", 0.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_clamped() {
        assert_eq!(SavingsGoal::new("Laptop", 250.0, 1000.0).progress(), 0.25);
        assert_eq!(SavingsGoal::new("Laptop", 1500.0, 1000.0).progress(), 1.0);
        assert_eq!(SavingsGoal::new("Laptop", -5.0, 1000.0).progress(), 0.0);
        assert_eq!(SavingsGoal::new("Nothing", 10.0, 0.0).progress(), 0.0);
    }

    #[test]
    fn remaining_never_negative() {
        assert_eq!(SavingsGoal::new("Trip", 300.0, 1000.0).remaining(), 700.0);
        assert_eq!(SavingsGoal::new("Trip", 1300.0, 1000.0).remaining(), 0.0);
    }

    #[test]
    fn wallet_snapshot_defaults_currency() {
        let snapshot: WalletSnapshot =
            serde_json::from_str(r#"{"balance": 120.5}"#).expect("decode wallet");
        assert_eq!(snapshot.currency, "USD");
        assert_eq!(snapshot.balance, 120.5);
    }
}
