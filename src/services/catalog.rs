use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

use crate::error::{MatchError, Result};
use crate::models::{Availability, FacultyId, FacultyProfile, FacultyUpdate, NewFaculty};

/// Expertise assigned to an advisor created without any
pub const DEFAULT_EXPERTISE: &str = "AI";
/// Experience assigned to an advisor created without any
pub const DEFAULT_EXPERIENCE_YEARS: u32 = 1;
/// Starting rating before any feedback arrives
pub const DEFAULT_RATING: f64 = 4.0;

/// Source of advisor profiles
///
/// Reads may run concurrently; writes are exclusive per implementation.
#[async_trait]
pub trait FacultyCatalog: Send + Sync {
    /// All advisors in ascending id order
    async fn list_all(&self) -> Result<Vec<FacultyProfile>>;

    async fn get_by_id(&self, id: FacultyId) -> Result<FacultyProfile>;

    /// Overwrite the rating field only
    async fn update_rating(&self, id: FacultyId, rating: f64) -> Result<()>;

    /// Apply a partial update; rating is left untouched
    async fn update_fields(&self, id: FacultyId, update: FacultyUpdate) -> Result<FacultyProfile>;

    /// Add an advisor, assigning the next id
    async fn create(&self, new_faculty: NewFaculty) -> Result<FacultyProfile>;
}

/// In-memory catalog indexed by faculty id
pub struct InMemoryFacultyCatalog {
    profiles: RwLock<BTreeMap<FacultyId, FacultyProfile>>,
    next_id: AtomicU64,
}

impl InMemoryFacultyCatalog {
    pub fn new() -> Self {
        Self {
            profiles: RwLock::new(BTreeMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Build a catalog from existing profiles, keeping their ids
    ///
    /// Later profiles win when ids collide. New advisors are numbered after
    /// the highest seeded id.
    pub fn with_profiles(profiles: impl IntoIterator<Item = FacultyProfile>) -> Self {
        let profiles: BTreeMap<FacultyId, FacultyProfile> =
            profiles.into_iter().map(|p| (p.id, p)).collect();
        let next_id = profiles.keys().next_back().map_or(1, |max| max + 1);

        tracing::debug!("Seeded faculty catalog with {} profiles", profiles.len());

        Self {
            profiles: RwLock::new(profiles),
            next_id: AtomicU64::new(next_id),
        }
    }

    pub async fn len(&self) -> usize {
        self.profiles.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.profiles.read().await.is_empty()
    }
}

impl Default for InMemoryFacultyCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FacultyCatalog for InMemoryFacultyCatalog {
    async fn list_all(&self) -> Result<Vec<FacultyProfile>> {
        Ok(self.profiles.read().await.values().cloned().collect())
    }

    async fn get_by_id(&self, id: FacultyId) -> Result<FacultyProfile> {
        self.profiles
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| MatchError::faculty_not_found(id))
    }

    async fn update_rating(&self, id: FacultyId, rating: f64) -> Result<()> {
        let mut profiles = self.profiles.write().await;
        let profile = profiles
            .get_mut(&id)
            .ok_or_else(|| MatchError::faculty_not_found(id))?;

        tracing::debug!("Faculty {} rating {} -> {}", id, profile.rating, rating);
        profile.rating = rating;
        Ok(())
    }

    async fn update_fields(&self, id: FacultyId, update: FacultyUpdate) -> Result<FacultyProfile> {
        let mut profiles = self.profiles.write().await;
        let profile = profiles
            .get_mut(&id)
            .ok_or_else(|| MatchError::faculty_not_found(id))?;

        update.apply(profile);
        tracing::debug!("Updated faculty {}", id);
        Ok(profile.clone())
    }

    async fn create(&self, new_faculty: NewFaculty) -> Result<FacultyProfile> {
        if new_faculty.name.is_empty() {
            return Err(MatchError::invalid("name", "name is required"));
        }

        let mut profiles = self.profiles.write().await;
        // Taken under the write lock so ids follow insertion order
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);

        let profile = FacultyProfile {
            id,
            name: new_faculty.name,
            expertise_areas: new_faculty
                .expertise_areas
                .unwrap_or_else(|| vec![DEFAULT_EXPERTISE.to_string()]),
            experience_years: new_faculty
                .experience_years
                .unwrap_or(DEFAULT_EXPERIENCE_YEARS),
            rating: new_faculty.rating.unwrap_or(DEFAULT_RATING),
            availability: new_faculty.availability.unwrap_or(Availability::Available),
        };

        profiles.insert(id, profile.clone());
        tracing::debug!("Created faculty {} ({})", id, profile.name);
        Ok(profile)
    }
}
