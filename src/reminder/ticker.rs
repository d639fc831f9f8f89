//! Periodic activity reminder.
//!
//! The ticker runs as its own tokio task and shares nothing with the workout
//! log. It is stopped through a oneshot signal and joined at shutdown.

use std::time::Duration;

use thiserror::Error;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

/// Default reminder text.
pub const DEFAULT_REMINDER_MESSAGE: &str = "Reminder: Don’t forget to log your activity today!";

/// Default interval between reminders.
pub const DEFAULT_INTERVAL_SECS: u64 = 15;

/// Something the ticker wants shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReminderNotice {
    /// Periodic reminder
    Reminder(String),
    /// The ticker was cancelled and has stopped
    Stopped,
}

impl std::fmt::Display for ReminderNotice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReminderNotice::Reminder(message) => write!(f, "{}", message),
            ReminderNotice::Stopped => write!(f, "Daily reminder stopped."),
        }
    }
}

/// Reminder errors.
#[derive(Debug, Error)]
pub enum ReminderError {
    #[error("Reminder interval must be greater than zero")]
    InvalidInterval,

    #[error("Reminder task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Spawns reminder tasks.
#[derive(Debug, Clone)]
pub struct ReminderTicker {
    interval: Duration,
    message: String,
}

impl ReminderTicker {
    /// Create a ticker firing every `interval`.
    pub fn new(interval: Duration, message: impl Into<String>) -> Result<Self, ReminderError> {
        if interval.is_zero() {
            return Err(ReminderError::InvalidInterval);
        }

        Ok(Self {
            interval,
            message: message.into(),
        })
    }

    /// Start the ticker on the current runtime.
    ///
    /// `notify` receives every reminder and, last, a single
    /// [`ReminderNotice::Stopped`].
    pub fn spawn<F>(self, mut notify: F) -> ReminderHandle
    where
        F: FnMut(ReminderNotice) + Send + 'static,
    {
        let (cancel_tx, mut cancel_rx) = oneshot::channel::<()>();
        let period = self.interval;
        let message = self.message;

        let task = tokio::spawn(async move {
            // First reminder fires one full period after start
            let mut ticks = tokio::time::interval_at(Instant::now() + period, period);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    biased;
                    // A dropped sender also stops the ticker
                    _ = &mut cancel_rx => {
                        tracing::info!("Reminder ticker cancelled");
                        notify(ReminderNotice::Stopped);
                        break;
                    }
                    _ = ticks.tick() => {
                        notify(ReminderNotice::Reminder(message.clone()));
                    }
                }
            }
        });

        tracing::info!("Reminder ticker started with {}s interval", period.as_secs());

        ReminderHandle {
            cancel_tx: Some(cancel_tx),
            task,
        }
    }
}

/// Handle to a running reminder task.
#[derive(Debug)]
pub struct ReminderHandle {
    cancel_tx: Option<oneshot::Sender<()>>,
    task: JoinHandle<()>,
}

impl ReminderHandle {
    /// Ask the ticker to stop.
    pub fn cancel(&mut self) {
        if let Some(tx) = self.cancel_tx.take() {
            let _ = tx.send(());
        }
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Stop the ticker and wait until it has emitted its stop notice.
    pub async fn cancel_and_join(mut self) -> Result<(), ReminderError> {
        self.cancel();
        self.task.await?;
        Ok(())
    }
}
