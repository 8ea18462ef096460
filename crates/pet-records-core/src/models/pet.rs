//! Pet models.

use serde::{Deserialize, Serialize};

/// A pet registered by an owner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Pet {
    /// Local UUID
    pub id: String,
    /// Owning user (authenticated caller)
    pub owner_id: String,
    /// Pet name
    pub name: String,
    /// Species (e.g., "dog", "cat", "rabbit")
    pub species: String,
    /// Breed
    pub breed: Option<String>,
    /// Date of birth (YYYY-MM-DD)
    pub birth_date: Option<String>,
    /// Free-text notes
    pub notes: Option<String>,
    /// Creation timestamp
    pub created_at: String,
    /// Last update timestamp
    pub updated_at: String,
}

impl Pet {
    /// Create a new pet with required fields.
    pub fn new(owner_id: String, name: String, species: String) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            owner_id,
            name,
            species,
            breed: None,
            birth_date: None,
            notes: None,
            created_at: now.clone(),
            updated_at: now,
        }
    }

    /// Get the canonical species name (lowercase).
    pub fn canonical_species(&self) -> String {
        self.species.to_lowercase()
    }
}
