use std::fmt;

use serde::{Deserialize, Serialize};

use crate::book::CopyCount;

/// A successful change to a book's copy counts
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum CirculationEvent {
    /// A new title was placed on a shelf
    Shelved {
        /// Title of the book
        title: String,
        /// Copy counts after the change
        copies: CopyCount,
    },
    /// An already shelved title gained a copy
    CopyAdded {
        /// Title of the book
        title: String,
        /// Copy counts after the change
        copies: CopyCount,
    },
    /// A copy left the shelf
    CheckedOut {
        /// Title of the book
        title: String,
        /// Copy counts after the change
        copies: CopyCount,
    },
    /// A copy came back
    CheckedIn {
        /// Title of the book
        title: String,
        /// Copy counts after the change
        copies: CopyCount,
    },
}

impl CirculationEvent {
    /// Title of the book the event concerns
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Shelved { title, .. }
            | Self::CopyAdded { title, .. }
            | Self::CheckedOut { title, .. }
            | Self::CheckedIn { title, .. } => title,
        }
    }

    /// Copy counts after the event was applied
    #[must_use]
    pub fn copies(&self) -> CopyCount {
        match self {
            Self::Shelved { copies, .. }
            | Self::CopyAdded { copies, .. }
            | Self::CheckedOut { copies, .. }
            | Self::CheckedIn { copies, .. } => *copies,
        }
    }
}

impl fmt::Display for CirculationEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            Self::Shelved { .. } => "shelved",
            Self::CopyAdded { .. } => "copy added",
            Self::CheckedOut { .. } => "checked out",
            Self::CheckedIn { .. } => "checked in",
        };
        write!(f, "{} {verb} ({})", self.title(), self.copies())
    }
}
