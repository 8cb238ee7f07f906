//! Decides whether a freshly authenticated user still needs onboarding.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use strum::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum SocialProvider {
    Google,
    Facebook,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginMethod {
    Email(String),
    Social(SocialProvider),
}

/// Lookup used after a successful login to pick between the personalization
/// flow and the daily plan.
pub trait AccountDirectory: Send + Sync {
    fn is_new_user(&self, login: &LoginMethod) -> bool;
}

/// In-memory directory: a fixed set of returning e-mail addresses, everyone
/// else (and every social login) gets `new_by_default`.
#[derive(Debug, Clone, Default)]
pub struct StaticDirectory {
    new_by_default: bool,
    returning: HashSet<String>,
}

impl StaticDirectory {
    pub fn new<I, S>(new_by_default: bool, returning: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            new_by_default,
            returning: returning
                .into_iter()
                .map(|email| normalize(email.as_ref()))
                .collect(),
        }
    }
}

impl AccountDirectory for StaticDirectory {
    fn is_new_user(&self, login: &LoginMethod) -> bool {
        match login {
            LoginMethod::Email(email) if self.returning.contains(&normalize(email)) => false,
            _ => self.new_by_default,
        }
    }
}

fn normalize(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_emails_are_returning() {
        let directory = StaticDirectory::new(true, ["sarah@unwindyoga.com"]);
        assert!(!directory.is_new_user(&LoginMethod::Email(" Sarah@UnwindYoga.com".into())));
        assert!(directory.is_new_user(&LoginMethod::Email("new@unwindyoga.com".into())));
        assert!(directory.is_new_user(&LoginMethod::Social(SocialProvider::Google)));
    }

    #[test]
    fn test_default_applies_to_unknown() {
        let directory = StaticDirectory::new(false, Vec::<String>::new());
        assert!(!directory.is_new_user(&LoginMethod::Email("a@b.com".into())));
        assert!(!directory.is_new_user(&LoginMethod::Social(SocialProvider::Facebook)));
    }
}
