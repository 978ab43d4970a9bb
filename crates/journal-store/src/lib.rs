use journal_types::{DuplicateUserPolicy, Trip, User};
use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("User {0} already exists.")]
    DuplicateUser(String),
    #[error("Unknown user: {0}")]
    UnknownUser(String),
}

/// All users and trips for one session.
///
/// Trips are grouped by user name, not by user record, so two users sharing a
/// name share one trip list.
#[derive(Debug, Default)]
pub struct RecordStore {
    users: Vec<User>,
    trips: FxHashMap<String, Vec<Trip>>,
    duplicate_policy: DuplicateUserPolicy,
}

impl RecordStore {
    pub fn new(duplicate_policy: DuplicateUserPolicy) -> Self {
        Self {
            users: Vec::new(),
            trips: FxHashMap::default(),
            duplicate_policy,
        }
    }

    pub fn duplicate_policy(&self) -> DuplicateUserPolicy {
        self.duplicate_policy
    }

    pub fn has_users(&self) -> bool {
        !self.users.is_empty()
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Users in registration order.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Whether `name` has a trip list, which is what trip commands key on.
    pub fn contains_user(&self, name: &str) -> bool {
        self.trips.contains_key(name)
    }

    /// Fails only under `DuplicateUserPolicy::Reject`.
    pub fn check_new_name(&self, name: &str) -> Result<(), StoreError> {
        if self.duplicate_policy == DuplicateUserPolicy::Reject && self.contains_user(name) {
            return Err(StoreError::DuplicateUser(name.to_string()));
        }
        Ok(())
    }

    pub fn register_user(&mut self, user: User) -> Result<&User, StoreError> {
        self.check_new_name(&user.name)?;

        let previous = self.trips.insert(user.name.clone(), Vec::new());
        if let Some(dropped) = previous {
            info!(
                "Duplicate user name registered, {} trip(s) no longer listed",
                dropped.len()
            );
        }
        debug!("Registered user #{}", self.users.len() + 1);

        self.users.push(user);
        Ok(&self.users[self.users.len() - 1])
    }

    pub fn register_trip(&mut self, username: &str, trip: Trip) -> Result<(), StoreError> {
        let trips = self
            .trips
            .get_mut(username)
            .ok_or_else(|| StoreError::UnknownUser(username.to_string()))?;
        trips.push(trip);
        debug!("Registered trip #{} for a user", trips.len());
        Ok(())
    }

    /// Trips for `username` in registration order.
    pub fn trips_for(&self, username: &str) -> Result<&[Trip], StoreError> {
        self.trips
            .get(username)
            .map(Vec::as_slice)
            .ok_or_else(|| StoreError::UnknownUser(username.to_string()))
    }
}
