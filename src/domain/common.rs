/// Provides access to a human-friendly entity name.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

/// Supplies a presentation-ready label for UI or logs.
pub trait Displayable {
    fn display_label(&self) -> String;
}

/// Entities that carry a signed money amount.
pub trait Amounted {
    fn amount(&self) -> f64;

    fn is_income(&self) -> bool {
        self.amount() > 0.0
    }

    fn is_expense(&self) -> bool {
        self.amount() < 0.0
    }
}

/// Serde helpers for the loosely typed fixture files.
pub(crate) mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    /// Reads a money amount from a number, a numeric string or `null`.
    /// Anything else, including non-finite values, decodes as zero.
    pub fn amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value.as_ref().map(amount_from_value).unwrap_or(0.0))
    }

    pub fn amount_from_value(value: &Value) -> f64 {
        let parsed = match value {
            Value::Number(number) => number.as_f64(),
            Value::String(text) => text.trim().parse::<f64>().ok(),
            _ => None,
        };
        parsed.filter(|amount| amount.is_finite()).unwrap_or(0.0)
    }

    /// Accepts a string, a number or `null` for optional text fields.
    pub fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(match value {
            Some(Value::String(text)) => Some(text),
            Some(Value::Number(number)) => Some(number.to_string()),
            Some(Value::Bool(flag)) => Some(flag.to_string()),
            _ => None,
        })
    }
}
