//! Workout log module.
//!
//! Holds the workout record types and the in-memory store that owns them.

pub mod store;
pub mod types;

// Re-exports for convenience
pub use store::{Listing, LogStore, Summaries};
pub use types::{
    WorkoutDetails, WorkoutDraft, WorkoutId, WorkoutKind, WorkoutRecord, WorkoutUpdate,
    FITNESS_CATEGORIES,
};
