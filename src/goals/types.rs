//! Weekly goal type definitions.

use serde::{Deserialize, Serialize};

/// Weekly training goal in minutes.
///
/// A goal of 0 means unset. Once a non-zero goal is set it stays for the
/// rest of the session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyGoal {
    minutes: u32,
}

impl WeeklyGoal {
    /// Goal in minutes (0 = unset).
    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    pub fn is_set(&self) -> bool {
        self.minutes > 0
    }

    /// Set the goal if none is set yet.
    ///
    /// Setting 0 leaves the goal unset.
    pub fn set(&mut self, minutes: u32) -> GoalUpdate {
        if self.is_set() {
            tracing::debug!(
                "Ignoring goal of {} minutes, goal already set to {}",
                minutes,
                self.minutes
            );
            return GoalUpdate::AlreadySet(self.minutes);
        }

        self.minutes = minutes;
        tracing::info!("Weekly goal set to {} minutes", minutes);
        GoalUpdate::Set(minutes)
    }
}

/// Outcome of [`WeeklyGoal::set`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalUpdate {
    /// Goal now holds this value
    Set(u32),
    /// A goal was already set; it keeps this value
    AlreadySet(u32),
}

/// Minutes achieved this week against the goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalProgress {
    /// Minutes logged in the weekly window
    pub achieved: u64,
    /// Weekly goal in minutes (0 = unset)
    pub goal: u32,
}

impl GoalProgress {
    /// Get progress percentage (0-100), `None` while no goal is set.
    pub fn percent(&self) -> Option<f64> {
        if self.goal == 0 {
            return None;
        }
        Some((self.achieved as f64 / f64::from(self.goal) * 100.0).min(100.0))
    }

    /// Whether the goal is set and reached.
    pub fn is_reached(&self) -> bool {
        self.goal > 0 && self.achieved >= u64::from(self.goal)
    }

    /// Minutes still needed (0 once reached or when unset).
    pub fn remaining(&self) -> u64 {
        u64::from(self.goal).saturating_sub(self.achieved)
    }
}

/// Activity count and minutes over the weekly window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySummary {
    pub activities: usize,
    pub total_minutes: u64,
}
