//! User accounts, roles and the identity rules applied to a user snapshot.
//!
//! A [`UserRecord`] mirrors one line of the user file and may lack a role
//! (records written before roles existed). A [`User`] is a record whose role
//! is known; only users can log in or appear in reports.
//!
//! [`UserSet`] holds a full snapshot loaded from the record store. Its
//! operations mutate the owned snapshot only; persisting it is the job of
//! [`crate::db::users::Users`].

use super::error::{Result, TaskError};
use super::validation;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Admin,
    NonAdmin,
}

impl Role {
    /// Canonical spelling used in the user file.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::NonAdmin => "Non-Admin",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "non-admin" => Ok(Role::NonAdmin),
            _ => Err(()),
        }
    }
}

/// One line of the user file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub username: String,
    pub credential: String,
    pub role: Option<Role>,
}

impl UserRecord {
    /// Returns the account if the record carries a role.
    pub fn user(&self) -> Option<User> {
        self.role.map(|role| User {
            username: self.username.clone(),
            credential: self.credential.clone(),
            role,
        })
    }
}

/// An account with a known role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub username: String,
    pub credential: String,
    pub role: Role,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

impl From<User> for UserRecord {
    fn from(user: User) -> Self {
        UserRecord {
            username: user.username,
            credential: user.credential,
            role: Some(user.role),
        }
    }
}

/// Full snapshot of the user file.
#[derive(Debug, Clone, Default)]
pub struct UserSet {
    records: Vec<UserRecord>,
}

impl UserSet {
    pub fn new(records: Vec<UserRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }

    /// Exact, case-sensitive lookup, legacy records included.
    pub fn contains(&self, username: &str) -> bool {
        self.records.iter().any(|r| r.username == username)
    }

    /// Accounts with a known role, in file order.
    pub fn users(&self) -> Vec<User> {
        self.records.iter().filter_map(UserRecord::user).collect()
    }

    /// Number of records still missing a role.
    pub fn legacy_count(&self) -> usize {
        self.records.iter().filter(|r| r.role.is_none()).count()
    }

    /// Validates and appends a new account.
    pub fn register(&mut self, username: &str, credential: &str, role: Role) -> Result<User> {
        validation::username(username)?;
        validation::credential(credential)?;
        if self.contains(username) {
            return Err(TaskError::DuplicateUsername(username.to_string()));
        }

        let user = User {
            username: username.to_string(),
            credential: credential.to_string(),
            role,
        };
        self.records.push(user.clone().into());
        Ok(user)
    }

    /// Exact match on both fields among records with a role.
    ///
    /// Every failure yields the same [`TaskError::Authentication`].
    pub fn authenticate(&self, username: &str, credential: &str) -> Result<User> {
        self.records
            .iter()
            .filter(|r| r.username == username && r.credential == credential)
            .find_map(UserRecord::user)
            .ok_or(TaskError::Authentication)
    }

    /// Assigns a role to every record lacking one, in file order.
    ///
    /// `assign` is called once per legacy record. Returns the assignments made.
    pub fn backfill_roles<F>(&mut self, mut assign: F) -> Result<Vec<(String, Role)>>
    where
        F: FnMut(&str) -> Result<Role>,
    {
        let mut assigned = Vec::new();
        for record in self.records.iter_mut().filter(|r| r.role.is_none()) {
            let role = assign(&record.username)?;
            record.role = Some(role);
            assigned.push((record.username.clone(), role));
        }
        Ok(assigned)
    }
}
