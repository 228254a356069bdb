//! Injectable credential verification for the admin surface.
//!
//! The engine never ships accounts of its own: stores are populated at
//! runtime by the embedding application, so no secrets live in the binary.

use std::collections::HashMap;

pub trait CredentialStore: Send + Sync {
    /// Returns true when the username exists and the password matches.
    fn verify(&self, username: &str, password: &str) -> bool;
}

/// Plain in-memory store, suitable for demo builds and tests.
#[derive(Debug, Default)]
pub struct InMemoryCredentialStore {
    accounts: HashMap<String, String>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, username: impl Into<String>, password: impl Into<String>) {
        self.accounts.insert(username.into(), password.into());
    }
}

impl CredentialStore for InMemoryCredentialStore {
    fn verify(&self, username: &str, password: &str) -> bool {
        self.accounts
            .get(username)
            .is_some_and(|stored| stored == password)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verifies_only_matching_pairs() {
        let mut store = InMemoryCredentialStore::new();
        store.insert("admin", "s3cret");

        assert!(store.verify("admin", "s3cret"));
        assert!(!store.verify("admin", "wrong"));
        assert!(!store.verify("nobody", "s3cret"));
    }

    #[test]
    fn empty_store_rejects_everything() {
        let store = InMemoryCredentialStore::new();
        assert!(!store.verify("admin", ""));
    }
}
