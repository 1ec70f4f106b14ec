//! Fixture-backed domain types and the pure helpers that interpret them.

pub mod card;
pub mod category;
pub mod common;
pub mod date;
pub mod goal;
pub mod history;
pub mod transaction;
pub mod user;

pub use card::{Card, Contact};
pub use category::{category_label, classify_category, Category, CategoryStyle};
pub use common::{Amounted, Displayable, NamedEntity};
pub use date::{parse_date, parse_optional_date, ParsedDate, REFERENCE_YEAR};
pub use goal::{SavingsGoal, WalletSnapshot};
pub use history::{BalanceHistory, WeeklyStat};
pub use transaction::{Transaction, TransactionId, TransactionKind};
pub use user::User;
