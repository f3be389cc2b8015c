use crate::cli::commands::Commands;
use std::fmt;

/// Screen shown by the shell after a command runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Dashboard,
    NewTrade,
    History,
    Analytics,
}

impl View {
    pub fn for_command(cmd: &Commands) -> Self {
        match cmd {
            Commands::Dashboard => View::Dashboard,
            Commands::Add { .. } => View::NewTrade,
            Commands::History { .. } | Commands::Delete { .. } => View::History,
            Commands::Analytics => View::Analytics,
        }
    }

    /// Where the shell goes once a trade has been saved.
    pub fn after_submit(self) -> Self {
        match self {
            View::NewTrade => View::History,
            other => other,
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Dashboard => write!(f, "dashboard"),
            View::NewTrade => write!(f, "new"),
            View::History => write!(f, "history"),
            View::Analytics => write!(f, "analytics"),
        }
    }
}
