//! Activity reminder module.

pub mod ticker;

pub use ticker::{
    ReminderError, ReminderHandle, ReminderNotice, ReminderTicker, DEFAULT_INTERVAL_SECS,
    DEFAULT_REMINDER_MESSAGE,
};
