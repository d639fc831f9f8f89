//! Fitlog - Personal Fitness Log Manager
//!
//! A console tool for recording outdoor and gym workouts, reviewing weekly
//! totals and tracking a weekly minutes goal, with a periodic reminder to
//! log activity.

pub mod app;
pub mod cli;
pub mod config;
pub mod fitness_log;
pub mod goals;
pub mod reminder;
pub mod session;

// Re-export commonly used types
pub use config::AppConfig;
pub use fitness_log::{LogStore, WorkoutRecord};
pub use goals::WeeklyAggregator;
pub use reminder::ReminderTicker;
pub use session::Session;
