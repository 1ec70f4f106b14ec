use serde::{Deserialize, Serialize};

use crate::domain::common::{lenient, Displayable, NamedEntity};

/// A payment card shown on the cards screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    #[serde(deserialize_with = "lenient_id")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub balance: f64,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub last_four_digits: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry: Option<String>,
}

impl Card {
    /// `"Account **1234"`, or `"Account"` when the digits are unknown.
    pub fn account_label(&self) -> String {
        match self.last_four_digits.as_deref() {
            Some(digits) if !digits.is_empty() => format!("Account **{}", digits),
            _ => "Account".to_string(),
        }
    }
}

/// A recipient offered by the send-money flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(deserialize_with = "lenient_id")]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl Contact {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            avatar: None,
        }
    }
}

impl NamedEntity for Contact {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for Card {
    fn display_label(&self) -> String {
        self.account_label()
    }
}

fn lenient_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    lenient::optional_text(deserializer)?
        .ok_or_else(|| serde::de::Error::custom("id must be a string or number"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_camel_case_card() {
        let card: Card = serde_json::from_str(
            r##"{"id": 1, "balance": 2500.5, "lastFourDigits": 4821, "backgroundColor": "#8B5CF6"}"##,
        )
        .expect("decode card");
        assert_eq!(card.id, "1");
        assert_eq!(card.account_label(), "Account **4821");
        assert_eq!(card.background_color.as_deref(), Some("#8B5CF6"));
    }

    #[test]
    fn missing_digits_render_plain_label() {
        let card: Card = serde_json::from_str(r#"{"id": "c"}"#).expect("decode card");
        assert_eq!(card.account_label(), "Account");
        assert_eq!(card.balance, 0.0);
    }
}
