//! Application wiring.
//!
//! Runs the console session in the foreground and the reminder ticker in the
//! background. The only coordination between them is the cancel-and-join
//! when the session ends.

use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, BufReader};

use crate::config::AppConfig;
use crate::reminder::{ReminderHandle, ReminderTicker};
use crate::session::{Session, SessionEnd};

/// Run a session on stdin/stdout.
pub async fn run(config: &AppConfig) -> Result<SessionEnd> {
    let stdin = BufReader::new(tokio::io::stdin());
    run_with_io(config, stdin, std::io::stdout()).await
}

/// Run a session over the given streams.
///
/// Reminders are printed to stdout regardless of `out`.
pub async fn run_with_io<R, W>(config: &AppConfig, input: R, out: W) -> Result<SessionEnd>
where
    R: AsyncBufRead + Unpin,
    W: std::io::Write,
{
    let reminder = start_reminder(config)?;

    let mut session = Session::new(input, out);
    let outcome = session.run().await;

    if let Some(handle) = reminder {
        handle
            .cancel_and_join()
            .await
            .context("Failed to stop reminder")?;
    }

    let end = outcome.context("Session ended with an input error")?;
    tracing::info!("Session ended: {:?}", end);
    Ok(end)
}

fn start_reminder(config: &AppConfig) -> Result<Option<ReminderHandle>> {
    if !config.reminder.enabled {
        tracing::info!("Reminder disabled");
        return Ok(None);
    }

    let ticker = ReminderTicker::new(config.reminder.interval(), config.reminder.message.clone())
        .context("Invalid reminder settings")?;

    Ok(Some(ticker.spawn(|notice| println!("\n{}", notice))))
}
