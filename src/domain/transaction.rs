use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::common::{lenient, Amounted, Displayable};
use crate::domain::date::{parse_optional_date, ParsedDate};

/// Fixture ids are either strings or integers; both are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TransactionId {
    Number(i64),
    Text(String),
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionId::Number(value) => write!(f, "{}", value),
            TransactionId::Text(value) => f.write_str(value),
        }
    }
}

impl From<&str> for TransactionId {
    fn from(value: &str) -> Self {
        TransactionId::Text(value.to_string())
    }
}

impl From<i64> for TransactionId {
    fn from(value: i64) -> Self {
        TransactionId::Number(value)
    }
}

impl From<i32> for TransactionId {
    fn from(value: i32) -> Self {
        TransactionId::Number(i64::from(value))
    }
}

/// Explicit income/expense marker carried by some fixture variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "income" => Some(TransactionKind::Income),
            "expense" => Some(TransactionKind::Expense),
            _ => None,
        }
    }
}

/// One ledger entry as read from the transaction fixture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub amount: f64,
    #[serde(
        default,
        deserialize_with = "lenient::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub date: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub category: Option<String>,
    #[serde(
        rename = "type",
        default,
        deserialize_with = "lenient::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub kind_tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Transaction {
    pub fn new(id: impl Into<TransactionId>, title: impl Into<String>, amount: f64) -> Self {
        Self {
            id: id.into(),
            title: Some(title.into()),
            name: None,
            amount: if amount.is_finite() { amount } else { 0.0 },
            date: None,
            category: None,
            kind_tag: None,
            image: None,
        }
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_kind(mut self, kind: TransactionKind) -> Self {
        self.kind_tag = Some(
            match kind {
                TransactionKind::Income => "income",
                TransactionKind::Expense => "expense",
            }
            .to_string(),
        );
        self
    }

    /// Display label: `title`, then `name`, then an empty string.
    pub fn label(&self) -> &str {
        self.title
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or_default()
    }

    pub fn category_tag(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn kind(&self) -> Option<TransactionKind> {
        self.kind_tag.as_deref().and_then(TransactionKind::from_tag)
    }

    pub fn parsed_date(&self) -> Option<ParsedDate> {
        parse_optional_date(self.date.as_deref())
    }

    /// Plain rendering of the amount used by free-text search (`100`, `-40.5`).
    pub fn amount_text(&self) -> String {
        self.amount.to_string()
    }
}

impl Amounted for Transaction {
    fn amount(&self) -> f64 {
        self.amount
    }
}

impl Displayable for Transaction {
    fn display_label(&self) -> String {
        format!("txn:{} [{}]", self.id, self.label())
    }
}
