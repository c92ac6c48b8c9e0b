use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A prescribed rep target: either a plain count or free text such as
/// "12-15", "Failure" or "5 minutes".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum RepTarget {
    Count(u32),
    Text(String),
}

impl From<u32> for RepTarget {
    fn from(count: u32) -> Self {
        Self::Count(count)
    }
}

impl From<&str> for RepTarget {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

/// Catalog entry recommending an exercise for a rotation day. Reference
/// data, loaded once.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub name: String,
    pub day_number: u8,
    pub equipment: String,
    pub location: String,
    /// Signed on purpose: the catalog uses a negative weight for
    /// machine-assisted movements (assistance, not load).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_reps: Option<RepTarget>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_sets: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Exercise {
    /// Catalog entry with no targets set.
    pub fn new(name: &str, day_number: u8, equipment: &str, location: &str) -> Self {
        Self {
            name: name.to_string(),
            day_number,
            equipment: equipment.to_string(),
            location: location.to_string(),
            target_weight: None,
            target_reps: None,
            target_sets: None,
            notes: None,
        }
    }

    pub fn with_target_weight(mut self, pounds: f64) -> Self {
        self.target_weight = Some(pounds);
        self
    }

    pub fn with_target_reps(mut self, reps: impl Into<RepTarget>) -> Self {
        self.target_reps = Some(reps.into());
        self
    }

    pub fn with_target_sets(mut self, sets: u32) -> Self {
        self.target_sets = Some(sets);
        self
    }

    pub fn with_notes(mut self, notes: &str) -> Self {
        self.notes = Some(notes.to_string());
        self
    }
}
