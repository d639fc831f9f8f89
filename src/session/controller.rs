//! Interactive menu loop over the workout log.

use std::io::Write;

use chrono::{Local, NaiveDate};
use tokio::io::AsyncBufRead;

use super::menu::{MenuChoice, MENU_TITLE};
use super::prompt::{InputError, Prompter};
use crate::fitness_log::{
    Listing, LogStore, WorkoutDetails, WorkoutDraft, WorkoutId, WorkoutKind, WorkoutUpdate,
    FITNESS_CATEGORIES,
};
use crate::goals::{GoalUpdate, WeeklyAggregator};

/// Why the session loop returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user chose Exit
    Exit,
    /// Input closed while waiting for a menu choice
    InputClosed,
}

/// Which kind of workout an add operation creates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NewWorkout {
    Outdoor,
    Gym,
}

/// Menu-driven session owning the workout log.
pub struct Session<R, W> {
    prompter: Prompter<R, W>,
    store: LogStore,
    pinned_date: Option<NaiveDate>,
}

impl<R, W> Session<R, W>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    /// Create a session with an empty log.
    pub fn new(reader: R, out: W) -> Self {
        Self::with_store(LogStore::new(), reader, out)
    }

    /// Create a session over an existing log.
    pub fn with_store(store: LogStore, reader: R, out: W) -> Self {
        Self {
            prompter: Prompter::new(reader, out),
            store,
            pinned_date: None,
        }
    }

    /// Use a fixed date for new records and weekly queries instead of today.
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.pinned_date = Some(date);
        self
    }

    pub fn store(&self) -> &LogStore {
        &self.store
    }

    pub fn output(&self) -> &W {
        self.prompter.output()
    }

    pub fn into_parts(self) -> (LogStore, W) {
        (self.store, self.prompter.into_output())
    }

    /// Run the menu loop until the user exits or input closes.
    ///
    /// Only output failures and unreadable menu input end the loop with an
    /// error; failed operations are reported and the menu is shown again.
    pub async fn run(&mut self) -> Result<SessionEnd, InputError> {
        tracing::info!("Session started");

        loop {
            self.show_menu()?;

            let choice = match self.prompter.read_line("Enter your Choice: ").await {
                Ok(line) => MenuChoice::parse(&line),
                Err(InputError::MissingInput) => {
                    tracing::info!("Input closed, ending session");
                    return Ok(SessionEnd::InputClosed);
                }
                Err(e) => return Err(e),
            };

            match choice {
                Some(MenuChoice::Exit) => {
                    self.prompter.say("Exit. Stay healthy......")?;
                    return Ok(SessionEnd::Exit);
                }
                Some(choice) => self.dispatch(choice).await?,
                None => self.prompter.say("Invalid Choice.")?,
            }
        }
    }

    async fn dispatch(&mut self, choice: MenuChoice) -> std::io::Result<()> {
        tracing::debug!("Menu choice: {}", choice.label());

        match choice {
            MenuChoice::AddOutdoor => self.add_workout(NewWorkout::Outdoor).await,
            MenuChoice::AddGym => self.add_workout(NewWorkout::Gym).await,
            MenuChoice::ListAll => self.display_logs(),
            MenuChoice::Update => self.update_workout().await,
            MenuChoice::Delete => self.delete_workout().await,
            MenuChoice::WeeklySummary => self.show_weekly_summary(),
            MenuChoice::Goal => self.set_and_track_goal().await,
            MenuChoice::Exit => Ok(()),
        }
    }

    fn show_menu(&mut self) -> std::io::Result<()> {
        self.prompter.say("")?;
        self.prompter.say(MENU_TITLE)?;
        for choice in MenuChoice::ALL {
            self.prompter.say(choice)?;
        }
        Ok(())
    }

    async fn add_workout(&mut self, kind: NewWorkout) -> std::io::Result<()> {
        match self.read_new_workout(kind).await {
            Ok(draft) => {
                let date = self.today();
                self.store.add_record_on(draft, date);
                self.prompter.say("Workout added.")
            }
            Err(InputError::Io(e)) => Err(e),
            Err(e) => self.prompter.say(format!("Error: {}", e)),
        }
    }

    async fn read_new_workout(&mut self, kind: NewWorkout) -> Result<WorkoutDraft, InputError> {
        let name = self.prompter.read_line("Activity Name: ").await?;
        let category_prompt = format!("Category ({}): ", FITNESS_CATEGORIES.join(", "));
        let category = self.prompter.read_line(&category_prompt).await?;
        let duration = self
            .prompter
            .read_number("Duration (minutes): ", "duration")
            .await?;
        let calories = self
            .prompter
            .read_number("Calories burned: ", "calories")
            .await?;
        let details = WorkoutDetails::new(name, category, duration, calories);

        Ok(match kind {
            NewWorkout::Outdoor => {
                let weather = self.prompter.read_line("Weather Condition: ").await?;
                WorkoutDraft::outdoor(details, weather)
            }
            NewWorkout::Gym => {
                let equipment = self.prompter.read_line("Gym Equipment Used: ").await?;
                WorkoutDraft::gym(details, equipment)
            }
        })
    }

    fn display_logs(&mut self) -> std::io::Result<()> {
        match self.store.list_records() {
            Listing::Empty => self.prompter.say("No logs."),
            Listing::Entries(summaries) => {
                for summary in summaries {
                    self.prompter.say(summary)?;
                }
                Ok(())
            }
        }
    }

    async fn update_workout(&mut self) -> std::io::Result<()> {
        let Some(id) = self.read_id("Enter log ID to update: ").await? else {
            return Ok(());
        };

        let Some(kind) = self.store.find_by_id(id).map(|r| r.kind.clone()) else {
            return self.prompter.say("Log not found.");
        };

        self.prompter.say(format!("Updating log ID {}", id))?;

        match self.read_update(&kind).await {
            Ok(update) => {
                let date = self.today();
                if self.store.update_by_id_on(id, update, date).is_some() {
                    self.prompter.say("Updated successfully.")
                } else {
                    self.prompter.say("Log not found.")
                }
            }
            Err(InputError::Io(e)) => Err(e),
            Err(e) => self.prompter.say(format!("Update failed: {}", e)),
        }
    }

    async fn read_update(&mut self, kind: &WorkoutKind) -> Result<WorkoutUpdate, InputError> {
        let name = self.prompter.read_line("New Activity Name: ").await?;
        let category = self.prompter.read_line("New Category: ").await?;
        let duration = self.prompter.read_number("New Duration: ", "duration").await?;
        let calories = self.prompter.read_number("New Calories: ", "calories").await?;

        let detail_prompt = match kind {
            WorkoutKind::Outdoor { .. } => "New Weather Condition: ",
            WorkoutKind::Gym { .. } => "New Gym Equipment: ",
        };
        let detail = self.prompter.read_line(detail_prompt).await?;

        Ok(WorkoutUpdate {
            details: WorkoutDetails::new(name, category, duration, calories),
            detail,
        })
    }

    async fn delete_workout(&mut self) -> std::io::Result<()> {
        let Some(id) = self.read_id("Enter log ID to delete: ").await? else {
            return Ok(());
        };

        match self.store.delete_by_id(id) {
            Some(_) => self.prompter.say("Deleted successfully."),
            None => self.prompter.say("Log not found."),
        }
    }

    /// Read a log id, reporting bad input. `None` when the operation should stop.
    async fn read_id(&mut self, prompt: &str) -> std::io::Result<Option<WorkoutId>> {
        match self.prompter.read_number(prompt, "log ID").await {
            Ok(id) => Ok(Some(id)),
            Err(InputError::Io(e)) => Err(e),
            Err(e) => {
                self.prompter.say(format!("Error: {}", e))?;
                Ok(None)
            }
        }
    }

    fn show_weekly_summary(&mut self) -> std::io::Result<()> {
        let summary = WeeklyAggregator::new(&self.store).weekly_summary(self.today());
        self.prompter.say(format!(
            "Weekly Summary: {} activities, {} minutes logged.",
            summary.activities, summary.total_minutes
        ))
    }

    async fn set_and_track_goal(&mut self) -> std::io::Result<()> {
        if !self.store.goal().is_set() {
            let minutes = match self
                .prompter
                .read_line("Set your weekly goal (in minutes): ")
                .await
            {
                // Anything that is not a number counts as no goal
                Ok(text) => text.trim().parse::<u32>().unwrap_or(0),
                Err(InputError::Io(e)) => return Err(e),
                Err(e) => return self.prompter.say(format!("Error: {}", e)),
            };

            if let GoalUpdate::Set(minutes) = self.store.goal_mut().set(minutes) {
                self.prompter.say(format!("Goal set to {} minutes.", minutes))?;
            }
        }

        let progress = WeeklyAggregator::new(&self.store).track_progress(self.today());
        self.prompter.say(format!(
            "You've achieved {}/{} minutes this week.",
            progress.achieved, progress.goal
        ))?;

        match progress.percent() {
            Some(_) if progress.is_reached() => self.prompter.say("Weekly goal reached!"),
            Some(percent) => self.prompter.say(format!(
                "Progress: {:.0}% ({} minutes to go).",
                percent,
                progress.remaining()
            )),
            None => Ok(()),
        }
    }

    fn today(&self) -> NaiveDate {
        self.pinned_date.unwrap_or_else(|| Local::now().date_naive())
    }
}
