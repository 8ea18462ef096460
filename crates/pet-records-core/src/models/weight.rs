//! Weight tracking models.

use serde::{Deserialize, Serialize};

const KG_PER_LB: f64 = 0.453_592_37;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WeightUnit {
    Kg,
    Lbs,
}

/// A single weigh-in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeightRecord {
    pub id: String,
    pub owner_id: String,
    pub pet_id: String,
    /// Calendar date of the weigh-in (YYYY-MM-DD)
    pub date: String,
    pub weight: f64,
    pub unit: WeightUnit,
    pub notes: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl WeightRecord {
    pub fn new(owner_id: String, pet_id: String, date: String, weight: f64, unit: WeightUnit) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            owner_id,
            pet_id,
            date,
            weight,
            unit,
            notes: None,
            created_at: now.clone(),
            updated_at: now,
        }
    }

    /// Weight normalized to kilograms.
    pub fn weight_kg(&self) -> f64 {
        match self.unit {
            WeightUnit::Kg => self.weight,
            WeightUnit::Lbs => self.weight * KG_PER_LB,
        }
    }
}

impl WeightUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeightUnit::Kg => "kg",
            WeightUnit::Lbs => "lbs",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "kg" => Some(WeightUnit::Kg),
            "lbs" | "lb" => Some(WeightUnit::Lbs),
            _ => None,
        }
    }
}
