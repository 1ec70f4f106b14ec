//! Send, receive and convert flows. None of them touch a ledger: each one
//! validates the form values and returns what the confirmation alert shows.

use uuid::Uuid;

use crate::currency::{format_balance, CurrencyCode, ExchangeTable};
use crate::domain::{Contact, NamedEntity};

use super::{ServiceError, ServiceResult};

const WALLET_ID_PREFIX: &str = "STU-2024-";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub amount: f64,
    pub from: CurrencyCode,
    pub to: CurrencyCode,
    pub rate: f64,
    pub converted: f64,
}

impl Conversion {
    pub fn summary(&self) -> String {
        format!(
            "{:.2} {} = {:.2} {}",
            self.amount,
            self.from.as_str(),
            self.converted,
            self.to.as_str()
        )
    }

    pub fn confirmation(&self) -> Confirmation {
        Confirmation {
            title: "Conversion successful!".into(),
            message: self.summary(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiveDetails {
    pub wallet_id: String,
    pub holder: String,
}

pub struct TransferService;

impl TransferService {
    pub fn send(contact: Option<&Contact>, amount_text: &str) -> ServiceResult<Confirmation> {
        let contact =
            contact.ok_or_else(|| ServiceError::Invalid("Please select a contact".into()))?;
        let amount = parse_positive_amount(amount_text)?;
        tracing::info!(contact = contact.name(), amount, "send confirmed");
        Ok(Confirmation {
            title: "Success!".into(),
            message: format!("You sent {} to {}", format_balance(amount), contact.name()),
        })
    }

    pub fn convert(amount_text: &str, from: &str, to: &str) -> ServiceResult<Conversion> {
        Self::convert_with(ExchangeTable::standard(), amount_text, from, to)
    }

    pub fn convert_with(
        table: &ExchangeTable,
        amount_text: &str,
        from: &str,
        to: &str,
    ) -> ServiceResult<Conversion> {
        let amount = parse_positive_amount(amount_text)?;
        let from = CurrencyCode::new(from);
        let to = CurrencyCode::new(to);
        let rate = table.rate(&from, &to);
        let converted = table.convert(amount, &from, &to);
        Ok(Conversion {
            amount,
            from,
            to,
            rate,
            converted,
        })
    }

    /// Wallet id in the `STU-2024-XXXXXXXX` form, random on every call.
    pub fn receive_details(holder: &str) -> ReceiveDetails {
        let suffix: String = Uuid::new_v4()
            .simple()
            .to_string()
            .chars()
            .take(8)
            .collect::<String>()
            .to_uppercase();
        let holder = holder.trim();
        ReceiveDetails {
            wallet_id: format!("{}{}", WALLET_ID_PREFIX, suffix),
            holder: if holder.is_empty() {
                "Student".to_string()
            } else {
                holder.to_string()
            },
        }
    }
}

fn parse_positive_amount(text: &str) -> ServiceResult<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite() && *amount > 0.0)
        .ok_or_else(|| ServiceError::Invalid("Please enter a valid amount".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_requires_contact_and_amount() {
        let err = TransferService::send(None, "10").expect_err("no contact");
        assert_eq!(err.to_string(), "Please select a contact");

        let ana = Contact::new("1", "Ana");
        for bad in ["", "0", "-5", "abc", "NaN"] {
            let err = TransferService::send(Some(&ana), bad).expect_err("bad amount");
            assert_eq!(err.to_string(), "Please enter a valid amount");
        }
    }

    #[test]
    fn send_confirmation_names_recipient() {
        let ana = Contact::new("1", "Ana");
        let confirmation = TransferService::send(Some(&ana), " 1250.5 ").expect("send");
        assert_eq!(confirmation.message, "You sent $1,250.50 to Ana");
    }

    #[test]
    fn convert_uses_fixed_rates() {
        let conversion = TransferService::convert("100", "usd", "BAM").expect("convert");
        assert_eq!(conversion.rate, 1.79);
        assert_eq!(conversion.converted, 179.0);
        assert_eq!(conversion.summary(), "100.00 USD = 179.00 BAM");
    }

    #[test]
    fn convert_same_currency_is_parity() {
        let conversion = TransferService::convert("12.5", "EUR", "EUR").expect("convert");
        assert_eq!(conversion.rate, 1.0);
        assert_eq!(conversion.converted, 12.5);
    }

    #[test]
    fn convert_rejects_invalid_amount() {
        assert!(TransferService::convert("0", "USD", "EUR").is_err());
    }

    #[test]
    fn receive_details_shape() {
        let details = TransferService::receive_details("  ");
        assert_eq!(details.holder, "Student");
        assert!(details.wallet_id.starts_with("STU-2024-"));
        let suffix = &details.wallet_id["STU-2024-".len()..];
        assert_eq!(suffix.len(), 8);
        assert!(suffix
            .chars()
            .all(|ch| ch.is_ascii_digit() || ch.is_ascii_uppercase()));
    }
}
