pub mod category_service;
pub mod summary_service;
pub mod transaction_service;
pub mod transfer_service;

pub use category_service::{CategoryService, ResolvedCategory};
pub use summary_service::{Financials, MonthComparison, ReferenceMonth, SummaryService};
pub use transaction_service::{TransactionFilter, TransactionService};
pub use transfer_service::{Confirmation, Conversion, ReceiveDetails, TransferService};

use crate::errors::WalletError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Wallet(#[from] WalletError),
    #[error("{0}")]
    Invalid(String),
}
