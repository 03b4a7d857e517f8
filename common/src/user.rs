use serde::{Deserialize, Serialize};

use crate::money::Money;

/// An account holder. The name doubles as the login key and must be
/// unique within a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    /// Stored and compared in the clear; this is a local single-user tool.
    pub password: String,
    pub balance: Money,
}

impl User {
    pub fn new(name: impl Into<String>, password: impl Into<String>, balance: Money) -> Self {
        User {
            name: name.into(),
            password: password.into(),
            balance,
        }
    }

    /// Exact-equality password check, as received from the console.
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password == candidate
    }
}
