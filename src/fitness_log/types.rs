//! Workout record type definitions.
//!
//! A record is one logged activity: a shared set of descriptive fields plus a
//! variant payload for the kind of workout.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Advisory activity categories, shown as a hint when prompting.
///
/// Not enforced: any category string is accepted.
pub const FITNESS_CATEGORIES: &[&str] = &[
    "Cardio",
    "Strength",
    "Yoga",
    "Flexibility",
    "Running",
    "Walking",
];

/// Identifier of a workout record within a log store.
pub type WorkoutId = u32;

/// Descriptive fields shared by every workout variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutDetails {
    /// Name of the activity
    pub activity_name: String,
    /// Activity category (see [`FITNESS_CATEGORIES`])
    pub category: String,
    /// Duration in minutes
    pub duration: u32,
    /// Calories burned
    pub calories: u32,
}

impl WorkoutDetails {
    /// Create a new set of workout details.
    pub fn new(
        activity_name: impl Into<String>,
        category: impl Into<String>,
        duration: u32,
        calories: u32,
    ) -> Self {
        Self {
            activity_name: activity_name.into(),
            category: category.into(),
            duration,
            calories,
        }
    }
}

/// Variant payload of a workout record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkoutKind {
    /// Workout done outside
    Outdoor { weather_condition: String },
    /// Workout done at the gym
    Gym { equipment_used: String },
}

impl WorkoutKind {
    /// Get display name for the variant.
    pub fn display_name(&self) -> &'static str {
        match self {
            WorkoutKind::Outdoor { .. } => "Outdoor",
            WorkoutKind::Gym { .. } => "Gym",
        }
    }

    /// The variant-specific field value.
    pub fn detail(&self) -> &str {
        match self {
            WorkoutKind::Outdoor { weather_condition } => weather_condition,
            WorkoutKind::Gym { equipment_used } => equipment_used,
        }
    }

    /// Same variant as `self`, carrying a new detail value.
    pub fn with_detail(&self, detail: String) -> Self {
        match self {
            WorkoutKind::Outdoor { .. } => WorkoutKind::Outdoor {
                weather_condition: detail,
            },
            WorkoutKind::Gym { .. } => WorkoutKind::Gym {
                equipment_used: detail,
            },
        }
    }
}

impl std::fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A new workout, before the store assigns an id and date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutDraft {
    pub details: WorkoutDetails,
    pub kind: WorkoutKind,
}

impl WorkoutDraft {
    /// Draft an outdoor workout.
    pub fn outdoor(details: WorkoutDetails, weather_condition: impl Into<String>) -> Self {
        Self {
            details,
            kind: WorkoutKind::Outdoor {
                weather_condition: weather_condition.into(),
            },
        }
    }

    /// Draft a gym workout.
    pub fn gym(details: WorkoutDetails, equipment_used: impl Into<String>) -> Self {
        Self {
            details,
            kind: WorkoutKind::Gym {
                equipment_used: equipment_used.into(),
            },
        }
    }
}

/// Replacement values for an existing record.
///
/// The variant is not part of an update: `detail` is applied to whichever
/// variant the record already has.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutUpdate {
    pub details: WorkoutDetails,
    /// New weather condition or equipment, depending on the record's variant
    pub detail: String,
}

/// A logged workout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutRecord {
    /// Unique identifier within the store
    pub id: WorkoutId,
    /// Shared descriptive fields
    pub details: WorkoutDetails,
    /// Date the record was created or last fully updated
    pub date: NaiveDate,
    /// Variant payload
    pub kind: WorkoutKind,
}

impl WorkoutRecord {
    /// Create a record from a draft.
    pub fn from_draft(id: WorkoutId, draft: WorkoutDraft, date: NaiveDate) -> Self {
        Self {
            id,
            details: draft.details,
            date,
            kind: draft.kind,
        }
    }

    /// Duration in minutes.
    pub fn duration(&self) -> u32 {
        self.details.duration
    }

    pub fn is_outdoor(&self) -> bool {
        matches!(self.kind, WorkoutKind::Outdoor { .. })
    }

    pub fn is_gym(&self) -> bool {
        matches!(self.kind, WorkoutKind::Gym { .. })
    }

    /// Human-readable one-line summary.
    pub fn summary(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for WorkoutRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} | [{}] {} - {} - {} minutes - {} kcal",
            self.date.format("%Y-%m-%d"),
            self.id,
            self.details.activity_name,
            self.details.category,
            self.details.duration,
            self.details.calories,
        )?;

        match &self.kind {
            WorkoutKind::Outdoor { weather_condition } => {
                write!(f, " | Weather: {}", weather_condition)
            }
            WorkoutKind::Gym { equipment_used } => write!(f, " | Equipment: {}", equipment_used),
        }
    }
}
