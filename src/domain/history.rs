use serde::{Deserialize, Serialize};

use crate::domain::common::lenient;

/// One bar of the weekly statistics chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyStat {
    #[serde(default)]
    pub day: String,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub amount: f64,
}

/// Balance history fixture: the configured month label and weekly bars.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceHistory {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_month: Option<String>,
    #[serde(default)]
    pub weekly_data: Vec<WeeklyStat>,
}

impl BalanceHistory {
    /// Largest weekly amount, used to scale the bars. Zero when empty.
    pub fn max_amount(&self) -> f64 {
        self.weekly_data
            .iter()
            .map(|stat| stat.amount)
            .fold(0.0_f64, f64::max)
    }

    /// Bar height relative to [`Self::max_amount`], in `[0, 1]`.
    pub fn relative_height(&self, stat: &WeeklyStat) -> f64 {
        let max = self.max_amount();
        if max <= 0.0 {
            0.0
        } else {
            (stat.amount / max).clamp(0.0, 1.0)
        }
    }
}
