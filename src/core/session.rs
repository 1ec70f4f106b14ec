//! Login and logout against the bundled user records.

use std::{thread, time::Duration};

use crate::config::Config;
use crate::domain::{Displayable, User};

const MISSING_IDENTIFIER: &str = "Please enter a username";
const MISSING_SECRET: &str = "Please enter a password";
const INVALID_CREDENTIALS: &str = "Invalid username or password";

/// Result of a login attempt. `message` is set only on failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    pub success: bool,
    pub message: Option<String>,
}

impl LoginOutcome {
    fn accepted() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    fn rejected(message: &str) -> Self {
        Self {
            success: false,
            message: Some(message.to_string()),
        }
    }
}

/// In-memory sign-in state. Nothing is persisted.
#[derive(Debug, Clone)]
pub struct Session {
    users: Vec<User>,
    current: Option<User>,
    delay: Duration,
}

impl Session {
    pub fn new(users: Vec<User>, config: &Config) -> Self {
        Self {
            users,
            current: None,
            delay: config.login_delay(),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Checks `identifier` (username or email) and `secret` exactly as typed,
    /// after the configured pause. Blank fields fail immediately.
    pub fn login(&mut self, identifier: &str, secret: &str) -> LoginOutcome {
        if identifier.trim().is_empty() {
            return LoginOutcome::rejected(MISSING_IDENTIFIER);
        }
        if secret.is_empty() {
            return LoginOutcome::rejected(MISSING_SECRET);
        }

        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }

        let found = self
            .users
            .iter()
            .find(|user| user.matches_identifier(identifier) && user.matches_password(secret));
        match found {
            Some(user) => {
                tracing::info!(user = %user.display_label(), "login succeeded");
                self.current = Some(user.clone());
                LoginOutcome::accepted()
            }
            None => {
                tracing::info!(identifier, "login rejected");
                LoginOutcome::rejected(INVALID_CREDENTIALS)
            }
        }
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.current.take() {
            tracing::info!(user = user.username.as_str(), "logged out");
        }
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        let mut student = User::new("student", "student123");
        student.email = Some("student@campus.edu".into());
        Session::new(vec![student, User::new("demo", "demo")], &Config::default())
            .with_delay(Duration::ZERO)
    }

    #[test]
    fn blank_fields_short_circuit() {
        let mut session = session();
        assert_eq!(
            session.login("  ", "x").message.as_deref(),
            Some("Please enter a username")
        );
        assert_eq!(
            session.login("student", "").message.as_deref(),
            Some("Please enter a password")
        );
        assert!(!session.is_authenticated());
    }

    #[test]
    fn login_by_username_or_email() {
        let mut session = session();
        assert!(session.login("student", "student123").success);
        assert_eq!(session.current_user().map(|u| u.username.as_str()), Some("student"));

        session.logout();
        assert!(session.current_user().is_none());

        assert!(session.login("student@campus.edu", "student123").success);
    }

    #[test]
    fn wrong_password_is_rejected() {
        let mut session = session();
        let outcome = session.login("student", "Student123");
        assert!(!outcome.success);
        assert_eq!(outcome.message.as_deref(), Some("Invalid username or password"));
        assert!(!session.is_authenticated());
    }

    #[test]
    fn identifier_is_matched_verbatim() {
        let mut session = session();
        assert!(!session.login(" student", "student123").success);
        assert!(!session.login("student ", "student123").success);
        assert!(!session.login("Student", "student123").success);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn password_of_another_user_does_not_match() {
        let mut session = session();
        assert!(!session.login("student", "demo").success);
    }
}
