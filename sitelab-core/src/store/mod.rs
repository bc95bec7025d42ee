//! In-memory store for sites, scenarios and users.
//!
//! [`SiteStore::new`] builds a store already seeded with the fixture sites and
//! scenarios; seeding is part of construction, not a separate step. The HTTP
//! layer reads through the [`SiteRepository`] trait only.
//!
//! # Example
//!
//! ```rust,ignore
//! use sitelab_core::store::{SiteRepository, SiteStore};
//!
//! let store = SiteStore::new();
//! assert_eq!(store.get_all_sites().len(), 3);
//! assert_eq!(store.get_scenarios(Some(1)).len(), 4);
//! ```

pub mod seed;
pub mod table;

pub use table::IdTable;

use crate::model::{NewScenario, NewSite, NewUser, RecordId, Scenario, Site, User};
use crate::security::PasswordHasherService;

/// Read-side query facade over site and scenario data
pub trait SiteRepository: Send + Sync {
    /// All sites in insertion order
    fn get_all_sites(&self) -> Vec<Site>;

    fn get_site(&self, id: RecordId) -> Option<Site>;

    /// Scenarios whose `site_id` equals `site_id`, or every scenario when
    /// `None`. Insertion order either way.
    fn get_scenarios(&self, site_id: Option<RecordId>) -> Vec<Scenario>;

    fn get_scenario(&self, id: RecordId) -> Option<Scenario>;

    fn get_user(&self, id: RecordId) -> Option<User>;

    /// First user with this username in insertion order
    fn get_user_by_username(&self, username: &str) -> Option<User>;

    fn site_count(&self) -> usize;

    fn scenario_count(&self) -> usize;
}

/// Process-lifetime store: one [`IdTable`] per record type
pub struct SiteStore {
    users: IdTable<User>,
    sites: IdTable<Site>,
    scenarios: IdTable<Scenario>,
    hasher: PasswordHasherService,
}

impl SiteStore {
    /// Create a store seeded with the fixture sites and scenarios
    pub fn new() -> Self {
        let store = Self::empty();
        store.seed();
        store
    }

    /// Create a store with no records (ids still start at 1)
    pub fn empty() -> Self {
        Self {
            users: IdTable::new(),
            sites: IdTable::new(),
            scenarios: IdTable::new(),
            hasher: PasswordHasherService::new(),
        }
    }

    fn seed(&self) {
        let mut first_site = None;
        for fields in seed::sites() {
            let site = self.create_site(fields);
            first_site.get_or_insert(site.id);
        }

        if let Some(site_id) = first_site {
            for fields in seed::scenarios(site_id) {
                self.create_scenario(fields);
            }
        }

        log::debug!(
            "Seeded store with {} sites and {} scenarios",
            self.sites.len(),
            self.scenarios.len()
        );
    }

    pub fn create_site(&self, fields: NewSite) -> Site {
        self.sites.create_with(|id| fields.into_site(id))
    }

    /// Store a scenario. `site_id` is not checked against existing sites.
    pub fn create_scenario(&self, fields: NewScenario) -> Scenario {
        self.scenarios.create_with(|id| fields.into_scenario(id))
    }

    /// Store a user with an Argon2 hash of the given password.
    ///
    /// The id is consumed before hashing, so a hashing failure still advances
    /// the user id sequence. Username uniqueness is not enforced.
    pub fn create_user(&self, fields: NewUser) -> crate::Result<User> {
        let id = self.users.allocate_id();
        let password_hash = self.hasher.hash_password(&fields.password)?;
        let user = User { id, username: fields.username, password_hash };
        self.users.insert(id, user.clone());
        Ok(user)
    }

    /// Check a password for the first user with `username`.
    ///
    /// Unknown users verify as `false`.
    pub fn verify_user_password(&self, username: &str, password: &str) -> crate::Result<bool> {
        match self.get_user_by_username(username) {
            Some(user) => Ok(self.hasher.verify_password(password, &user.password_hash)?),
            None => Ok(false),
        }
    }
}

impl Default for SiteStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SiteRepository for SiteStore {
    fn get_all_sites(&self) -> Vec<Site> {
        self.sites.values()
    }

    fn get_site(&self, id: RecordId) -> Option<Site> {
        self.sites.get(id)
    }

    fn get_scenarios(&self, site_id: Option<RecordId>) -> Vec<Scenario> {
        match site_id {
            Some(site_id) => self.scenarios.filter(|s| s.site_id == site_id),
            None => self.scenarios.values(),
        }
    }

    fn get_scenario(&self, id: RecordId) -> Option<Scenario> {
        self.scenarios.get(id)
    }

    fn get_user(&self, id: RecordId) -> Option<User> {
        self.users.get(id)
    }

    fn get_user_by_username(&self, username: &str) -> Option<User> {
        self.users.find_first(|u| u.username == username)
    }

    fn site_count(&self) -> usize {
        self.sites.len()
    }

    fn scenario_count(&self) -> usize {
        self.scenarios.len()
    }
}
