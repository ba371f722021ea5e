//! User repository: identity operations persisted through the record store.

use super::store::{RecordKind, RecordStore};
use crate::libs::error::Result;
use crate::libs::user::{Role, User, UserSet};

pub struct Users {
    store: RecordStore,
}

impl Users {
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }

    /// Fresh snapshot of the user file.
    pub fn snapshot(&self) -> Result<UserSet> {
        Ok(UserSet::new(self.store.load_users()?.records))
    }

    pub fn exists(&self, username: &str) -> Result<bool> {
        Ok(self.snapshot()?.contains(username))
    }

    /// Accounts with a known role, in file order.
    pub fn list(&self) -> Result<Vec<User>> {
        Ok(self.snapshot()?.users())
    }

    pub fn legacy_count(&self) -> Result<usize> {
        Ok(self.snapshot()?.legacy_count())
    }

    pub fn register(&self, username: &str, credential: &str, role: Role) -> Result<User> {
        let mut users = self.snapshot()?;
        let user = users.register(username, credential, role)?;
        self.store.save_users(users.records())?;

        tracing::info!(username = %user.username, role = %user.role, "user registered");
        Ok(user)
    }

    pub fn authenticate(&self, username: &str, credential: &str) -> Result<User> {
        match self.snapshot()?.authenticate(username, credential) {
            Ok(user) => {
                tracing::info!(username = %user.username, "user logged in");
                Ok(user)
            }
            Err(e) => {
                tracing::warn!(%username, "failed login attempt");
                Err(e)
            }
        }
    }

    /// Assigns roles to legacy records and rewrites the user file.
    ///
    /// Does nothing, not even a backup, when every record already has a role.
    pub fn backfill_roles<F>(&self, assign: F) -> Result<Vec<(String, Role)>>
    where
        F: FnMut(&str) -> Result<Role>,
    {
        let mut users = self.snapshot()?;
        if users.legacy_count() == 0 {
            return Ok(Vec::new());
        }

        let assigned = users.backfill_roles(assign)?;
        self.store.backup(RecordKind::Users);
        self.store.save_users(users.records())?;

        for (username, role) in &assigned {
            tracing::info!(%username, %role, "role assigned");
        }
        Ok(assigned)
    }
}
