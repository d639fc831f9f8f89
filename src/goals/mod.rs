//! Weekly goals module.
//!
//! Weekly aggregation over the workout log and tracking against a
//! minutes-per-week goal.

pub mod aggregator;
pub mod types;

// Re-exports for convenience
pub use aggregator::{WeeklyAggregator, WEEK_DAYS};
pub use types::{GoalProgress, GoalUpdate, WeeklyGoal, WeeklySummary};
