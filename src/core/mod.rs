pub mod services;
pub mod session;
pub mod wallet;

pub use session::{LoginOutcome, Session};
pub use wallet::Wallet;
