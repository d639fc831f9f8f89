//! Main menu choices.

/// Title shown above the menu.
pub const MENU_TITLE: &str = "—— Daily Fitness Log Manager ——";

/// An entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddOutdoor,
    AddGym,
    ListAll,
    Update,
    Delete,
    WeeklySummary,
    Goal,
    Exit,
}

impl MenuChoice {
    /// All choices in menu order.
    pub const ALL: [MenuChoice; 8] = [
        MenuChoice::AddOutdoor,
        MenuChoice::AddGym,
        MenuChoice::ListAll,
        MenuChoice::Update,
        MenuChoice::Delete,
        MenuChoice::WeeklySummary,
        MenuChoice::Goal,
        MenuChoice::Exit,
    ];

    /// Menu number (1-8).
    pub fn number(&self) -> u8 {
        match self {
            MenuChoice::AddOutdoor => 1,
            MenuChoice::AddGym => 2,
            MenuChoice::ListAll => 3,
            MenuChoice::Update => 4,
            MenuChoice::Delete => 5,
            MenuChoice::WeeklySummary => 6,
            MenuChoice::Goal => 7,
            MenuChoice::Exit => 8,
        }
    }

    pub fn from_number(number: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.number() == number)
    }

    /// Parse a typed choice; anything but 1-8 is `None`.
    pub fn parse(input: &str) -> Option<Self> {
        input.trim().parse::<u8>().ok().and_then(Self::from_number)
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::AddOutdoor => "Add Outdoor Workout",
            MenuChoice::AddGym => "Add Gym Workout",
            MenuChoice::ListAll => "View All Logs",
            MenuChoice::Update => "Update Log",
            MenuChoice::Delete => "Delete Log",
            MenuChoice::WeeklySummary => "Show Weekly Summary",
            MenuChoice::Goal => "Set & Track Fitness Goals",
            MenuChoice::Exit => "Exit",
        }
    }
}

impl std::fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}. {}", self.number(), self.label())
    }
}
