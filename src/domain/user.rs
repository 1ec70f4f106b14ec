use serde::{Deserialize, Serialize};

use crate::domain::common::{lenient, Displayable, NamedEntity};

/// A bundled user record. Credentials are compared in plaintext.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub name: String,
    /// Account balance as stored in the fixture. Not derived from any ledger.
    #[serde(default, deserialize_with = "lenient::amount")]
    pub balance: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl User {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        let username = username.into();
        Self {
            name: username.clone(),
            username,
            email: None,
            password: password.into(),
            balance: 0.0,
            avatar: None,
        }
    }

    /// True when `identifier` is this user's username or email.
    pub fn matches_identifier(&self, identifier: &str) -> bool {
        (!self.username.is_empty() && self.username == identifier)
            || self.email.as_deref() == Some(identifier)
    }

    pub fn matches_password(&self, secret: &str) -> bool {
        self.password == secret
    }
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("name", &self.name)
            .field("balance", &self.balance)
            .finish_non_exhaustive()
    }
}

impl NamedEntity for User {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for User {
    fn display_label(&self) -> String {
        format!("{} <{}>", self.name, self.username)
    }
}
