//! Console session module.
//!
//! The menu loop that reads user choices and dispatches them to the workout
//! log and the weekly aggregator.

pub mod controller;
pub mod menu;
pub mod prompt;

pub use controller::{Session, SessionEnd};
pub use menu::MenuChoice;
pub use prompt::{InputError, Prompter};
