use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    config::Config,
    domain::{
        BalanceHistory, Card, Category, Contact, SavingsGoal, Transaction, User, WalletSnapshot,
    },
    utils::paths,
};

use super::{FixtureSource, Result};

pub const TRANSACTIONS_FILE: &str = "transactions.json";
pub const CATEGORIES_FILE: &str = "categories.json";
pub const CARDS_FILE: &str = "cards.json";
pub const USERS_FILE: &str = "users.json";
pub const CONTACTS_FILE: &str = "contacts.json";
pub const BALANCE_HISTORY_FILE: &str = "balanceHistory.json";
pub const WALLET_FILE: &str = "wallet.json";
pub const GOAL_FILE: &str = "goal.json";

/// Fixtures compiled into the crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledFixtures;

impl FixtureSource for BundledFixtures {
    fn read(&self, file_name: &str) -> Result<Option<String>> {
        let contents = match file_name {
            TRANSACTIONS_FILE => include_str!("../../fixtures/transactions.json"),
            CATEGORIES_FILE => include_str!("../../fixtures/categories.json"),
            CARDS_FILE => include_str!("../../fixtures/cards.json"),
            USERS_FILE => include_str!("../../fixtures/users.json"),
            CONTACTS_FILE => include_str!("../../fixtures/contacts.json"),
            BALANCE_HISTORY_FILE => include_str!("../../fixtures/balanceHistory.json"),
            WALLET_FILE => include_str!("../../fixtures/wallet.json"),
            GOAL_FILE => include_str!("../../fixtures/goal.json"),
            _ => return Ok(None),
        };
        Ok(Some(contents.to_string()))
    }

    fn describe(&self) -> String {
        "bundled".into()
    }
}

/// Fixtures read from a directory of JSON files.
#[derive(Debug, Clone)]
pub struct DirectoryFixtures {
    root: PathBuf,
}

impl DirectoryFixtures {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl FixtureSource for DirectoryFixtures {
    fn read(&self, file_name: &str) -> Result<Option<String>> {
        let path = self.root.join(file_name);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}

/// Every fixture collection the app reads at startup.
#[derive(Debug, Clone, Default)]
pub struct FixtureSet {
    pub transactions: Vec<Transaction>,
    pub categories: Vec<Category>,
    pub cards: Vec<Card>,
    pub users: Vec<User>,
    pub contacts: Vec<Contact>,
    pub balance_history: BalanceHistory,
    pub wallet: WalletSnapshot,
    pub goal: SavingsGoal,
}

impl FixtureSet {
    pub fn load(source: &dyn FixtureSource) -> Result<Self> {
        let set = Self {
            transactions: read_collection(source, TRANSACTIONS_FILE)?,
            categories: read_collection(source, CATEGORIES_FILE)?,
            cards: read_collection(source, CARDS_FILE)?,
            users: read_collection(source, USERS_FILE)?,
            contacts: read_collection(source, CONTACTS_FILE)?,
            balance_history: read_record(source, BALANCE_HISTORY_FILE)?,
            wallet: read_record(source, WALLET_FILE)?,
            goal: read_record(source, GOAL_FILE)?,
        };
        tracing::info!(
            source = %source.describe(),
            transactions = set.transactions.len(),
            users = set.users.len(),
            "fixtures loaded"
        );
        Ok(set)
    }

    pub fn bundled() -> Result<Self> {
        Self::load(&BundledFixtures)
    }

    pub fn load_dir(root: impl Into<PathBuf>) -> Result<Self> {
        Self::load(&DirectoryFixtures::new(root))
    }

    /// Uses `config.fixtures_dir`, then `<home>/fixtures` when present, then
    /// the bundled set.
    pub fn from_config(config: &Config) -> Result<Self> {
        if let Some(dir) = &config.fixtures_dir {
            return Self::load_dir(dir.clone());
        }
        let home_fixtures = paths::fixtures_dir_in(&paths::app_data_dir());
        if home_fixtures.is_dir() {
            return Self::load_dir(home_fixtures);
        }
        Self::bundled()
    }
}

/// Reads a top-level array. A non-array root yields an empty collection and
/// entries that do not decode are skipped.
fn read_collection<T: DeserializeOwned>(
    source: &dyn FixtureSource,
    file_name: &str,
) -> Result<Vec<T>> {
    let Some(text) = source.read(file_name)? else {
        return Ok(Vec::new());
    };
    let root: Value = serde_json::from_str(&text)?;
    let Value::Array(entries) = root else {
        tracing::warn!(file = file_name, "fixture root is not an array, ignoring");
        return Ok(Vec::new());
    };
    let total = entries.len();
    let decoded: Vec<T> = entries
        .into_iter()
        .filter_map(|entry| serde_json::from_value(entry).ok())
        .collect();
    if decoded.len() < total {
        tracing::warn!(
            file = file_name,
            skipped = total - decoded.len(),
            "skipped fixture entries that failed to decode"
        );
    }
    Ok(decoded)
}

/// Reads a single-object fixture, defaulting when absent or mis-shaped.
fn read_record<T: DeserializeOwned + Default>(
    source: &dyn FixtureSource,
    file_name: &str,
) -> Result<T> {
    let Some(text) = source.read(file_name)? else {
        return Ok(T::default());
    };
    let root: Value = serde_json::from_str(&text)?;
    match serde_json::from_value(root) {
        Ok(record) => Ok(record),
        Err(err) => {
            tracing::warn!(file = file_name, error = %err, "fixture record ignored");
            Ok(T::default())
        }
    }
}
