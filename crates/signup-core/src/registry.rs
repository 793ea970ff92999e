//! Activity registry.
//!
//! Records are stored in a `DashMap`, so each signup/unregister runs its
//! membership check and mutation under the entry's shard write guard.
//! Activities are fixed at construction; only participant lists change.

use dashmap::DashMap;
use tracing::{debug, info};

use crate::activity::{Activity, ActivityCatalog};
use crate::error::RegistryError;
use crate::seed::default_activities;

/// Thread-safe store of all activities, keyed by name.
pub struct ActivityRegistry {
    activities: DashMap<String, Activity>,
    /// Seed order, used for listing.
    order: Vec<String>,
}

impl ActivityRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            activities: DashMap::new(),
            order: Vec::new(),
        }
    }

    /// Create a registry from seed data.
    ///
    /// Fails if an activity name repeats or a participant appears twice in
    /// the same activity.
    pub fn with_activities<I, S>(seed: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = (S, Activity)>,
        S: Into<String>,
    {
        let mut registry = Self::new();
        for (name, activity) in seed {
            let name = name.into();
            if registry.activities.contains_key(&name) {
                return Err(RegistryError::DuplicateActivity(name));
            }
            if let Some(email) = first_duplicate(&activity.participants) {
                return Err(RegistryError::DuplicateParticipant {
                    activity: name,
                    email: email.to_string(),
                });
            }
            registry.insert(name, activity);
        }
        info!("Activity registry seeded with {} activities", registry.len());
        Ok(registry)
    }

    /// Create a registry holding the built-in activity set.
    pub fn seeded() -> Self {
        let mut registry = Self::new();
        for (name, activity) in default_activities() {
            registry.insert(name, activity);
        }
        registry
    }

    fn insert(&mut self, name: String, activity: Activity) {
        self.order.push(name.clone());
        self.activities.insert(name, activity);
    }

    /// Snapshot of every activity in seed order.
    pub fn list_activities(&self) -> ActivityCatalog {
        let entries = self
            .order
            .iter()
            .filter_map(|name| {
                self.activities
                    .get(name)
                    .map(|entry| (name.clone(), entry.value().clone()))
            })
            .collect();
        ActivityCatalog::new(entries)
    }

    /// Sign `email` up for `activity`.
    pub fn signup(&self, activity: &str, email: &str) -> Result<(), RegistryError> {
        let mut entry = self
            .activities
            .get_mut(activity)
            .ok_or_else(|| RegistryError::ActivityNotFound(activity.to_string()))?;

        if entry.has_participant(email) {
            return Err(RegistryError::AlreadySignedUp {
                activity: activity.to_string(),
                email: email.to_string(),
            });
        }

        entry.participants.push(email.to_string());
        debug!(
            activity,
            participants = entry.participants.len(),
            "Participant added"
        );
        Ok(())
    }

    /// Remove `email` from `activity`.
    pub fn unregister(&self, activity: &str, email: &str) -> Result<(), RegistryError> {
        let mut entry = self
            .activities
            .get_mut(activity)
            .ok_or_else(|| RegistryError::ActivityNotFound(activity.to_string()))?;

        let position = entry
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or_else(|| RegistryError::NotSignedUp {
                activity: activity.to_string(),
                email: email.to_string(),
            })?;

        entry.participants.remove(position);
        debug!(
            activity,
            participants = entry.participants.len(),
            "Participant removed"
        );
        Ok(())
    }

    /// Get a snapshot of one activity.
    pub fn get(&self, activity: &str) -> Option<Activity> {
        self.activities.get(activity).map(|a| a.value().clone())
    }

    pub fn contains(&self, activity: &str) -> bool {
        self.activities.contains_key(activity)
    }

    /// Check whether `email` is signed up for `activity`.
    ///
    /// Returns `false` for unknown activities.
    pub fn is_registered(&self, activity: &str, email: &str) -> bool {
        self.activities
            .get(activity)
            .is_some_and(|a| a.has_participant(email))
    }

    /// Activity names in seed order.
    pub fn names(&self) -> &[String] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl Default for ActivityRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn first_duplicate(participants: &[String]) -> Option<&str> {
    participants
        .iter()
        .enumerate()
        .find(|(i, p)| participants[..*i].contains(p))
        .map(|(_, p)| p.as_str())
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
