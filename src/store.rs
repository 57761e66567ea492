//! In-memory user store.
//!
//! Users are kept in insertion order and every lookup is a linear scan.
//! Nothing here is persisted; the store lives as long as the [`AppState`]
//! that owns it.
//!
//! [`AppState`]: crate::AppState

use crate::model::User;

/// Outcome of resolving a request's `userName` and `userEmail` against the store.
///
/// The two keys are resolved independently: `Found` only says that the name
/// matched a user and that *some* user holds the email.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserLookup {
    /// Index of the first user with the requested name.
    Found(usize),
    NotFoundByName { email_known: bool },
    /// The name resolved to this index but no user holds the email.
    NotFoundByEmail(usize),
}

#[derive(Debug, Default)]
pub struct TodoStore {
    users: Vec<User>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn user(&self, index: usize) -> &User {
        &self.users[index]
    }

    pub fn user_mut(&mut self, index: usize) -> &mut User {
        &mut self.users[index]
    }

    pub fn users_mut(&mut self) -> impl Iterator<Item = &mut User> {
        self.users.iter_mut()
    }

    /// Appends a user and returns its index.
    pub fn insert(&mut self, user: User) -> usize {
        self.users.push(user);
        self.users.len() - 1
    }

    pub fn position_by_name(&self, user_name: &str) -> Option<usize> {
        self.users.iter().position(|user| user.user_name == user_name)
    }

    pub fn email_known(&self, user_email: &str) -> bool {
        self.users.iter().any(|user| user.user_email == user_email)
    }

    pub fn lookup(&self, user_name: &str, user_email: &str) -> UserLookup {
        let email_known = self.email_known(user_email);
        match self.position_by_name(user_name) {
            None => UserLookup::NotFoundByName { email_known },
            Some(index) if email_known => UserLookup::Found(index),
            Some(index) => UserLookup::NotFoundByEmail(index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> TodoStore {
        let mut store = TodoStore::new();
        store.insert(User::new("alice", "alice@x.com"));
        store.insert(User::new("bob", "bob@x.com"));
        store
    }

    #[test]
    fn lookup_finds_matching_pair() {
        let store = seeded();
        assert_eq!(store.lookup("bob", "bob@x.com"), UserLookup::Found(1));
    }

    #[test]
    fn lookup_does_not_require_same_record() {
        let store = seeded();
        assert_eq!(store.lookup("alice", "bob@x.com"), UserLookup::Found(0));
    }

    #[test]
    fn lookup_reports_missing_name_with_email_state() {
        let store = seeded();
        assert_eq!(
            store.lookup("carol", "carol@x.com"),
            UserLookup::NotFoundByName { email_known: false }
        );
        assert_eq!(
            store.lookup("carol", "alice@x.com"),
            UserLookup::NotFoundByName { email_known: true }
        );
    }

    #[test]
    fn lookup_reports_missing_email_with_name_index() {
        let store = seeded();
        assert_eq!(
            store.lookup("bob", "nobody@x.com"),
            UserLookup::NotFoundByEmail(1)
        );
    }

    #[test]
    fn name_lookup_returns_first_duplicate() {
        let mut store = seeded();
        store.insert(User::new("alice", "alice2@x.com"));
        assert_eq!(store.position_by_name("alice"), Some(0));
        assert_eq!(store.users().len(), 3);
    }

    #[test]
    fn empty_store_resolves_nothing() {
        let store = TodoStore::new();
        assert!(store.is_empty());
        assert_eq!(
            store.lookup("", ""),
            UserLookup::NotFoundByName { email_known: false }
        );
    }
}
