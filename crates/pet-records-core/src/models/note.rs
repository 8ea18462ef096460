//! Free-text notes kept against a pet.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NoteCategory {
    Behavior,
    Health,
    General,
    Emergency,
}

/// A note written by the owner about one of their pets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Note {
    pub id: String,
    pub owner_id: String,
    pub pet_id: String,
    pub title: String,
    pub content: String,
    pub category: Option<NoteCategory>,
    pub created_at: String,
    pub updated_at: String,
}

impl Note {
    pub fn new(owner_id: String, pet_id: String, title: String, content: String) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            owner_id,
            pet_id,
            title,
            content,
            category: None,
            created_at: now.clone(),
            updated_at: now,
        }
    }

    pub fn with_category(mut self, category: NoteCategory) -> Self {
        self.category = Some(category);
        self
    }
}

impl NoteCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoteCategory::Behavior => "behavior",
            NoteCategory::Health => "health",
            NoteCategory::General => "general",
            NoteCategory::Emergency => "emergency",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "behavior" | "behaviour" => Some(NoteCategory::Behavior),
            "health" => Some(NoteCategory::Health),
            "general" => Some(NoteCategory::General),
            "emergency" => Some(NoteCategory::Emergency),
            _ => None,
        }
    }
}
