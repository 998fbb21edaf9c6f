//! Sections, folder states, and outcome enums.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Section
// ---------------------------------------------------------------------------

/// One of the four student pages.
///
/// The id is used both as an HTML element id (`<section id="home">`) and as
/// the URL hash fragment (`#home`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Home,
    Profile,
    Calendar,
    Settings,
}

impl Section {
    /// Sections in document order.
    pub const ALL: [Self; 4] = [Self::Home, Self::Profile, Self::Calendar, Self::Settings];

    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Profile => "profile",
            Self::Calendar => "calendar",
            Self::Settings => "settings",
        }
    }

    /// Display name used in page titles.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Profile => "Profile",
            Self::Calendar => "Calendar",
            Self::Settings => "Settings",
        }
    }

    /// File name of the standalone page in the split layout.
    #[must_use]
    pub const fn page_file(self) -> &'static str {
        match self {
            Self::Home => "studentHome.html",
            Self::Profile => "studentProfile.html",
            Self::Calendar => "studentCalendar.html",
            Self::Settings => "studentSettings.html",
        }
    }

    /// Hash-fragment link target, e.g. `#calendar`.
    #[must_use]
    pub fn hash(self) -> String {
        format!("#{}", self.id())
    }

    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.id() == id)
    }

    /// Match a link target against the standalone page names.
    ///
    /// Accepts a leading `./`, as older copies of the pages use it.
    #[must_use]
    pub fn from_page_file(href: &str) -> Option<Self> {
        let name = href.strip_prefix("./").unwrap_or(href);
        Self::ALL.into_iter().find(|section| section.page_file() == name)
    }

    /// Match a `#id` link target.
    #[must_use]
    pub fn from_hash(href: &str) -> Option<Self> {
        href.strip_prefix('#').and_then(Self::from_id)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Section {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s).ok_or_else(|| CoreError::UnknownSection(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// FolderState
// ---------------------------------------------------------------------------

/// Which representation a student folder is currently in.
///
/// ```text
/// split  --merge-->  merged
/// merged --revert--> split
/// ```
///
/// `partial` and `empty` are never produced by the transforms themselves; they
/// show up when files were removed by hand or a transform crashed midway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FolderState {
    Split,
    Merged,
    Partial,
    Empty,
}

impl FolderState {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Split => "split",
            Self::Merged => "merged",
            Self::Partial => "partial",
            Self::Empty => "empty",
        }
    }
}

impl fmt::Display for FolderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// OutcomeStatus / BatchOperation
// ---------------------------------------------------------------------------

/// Result of running a transform over a single folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeStatus {
    Processed,
    Skipped,
}

impl OutcomeStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Processed => "processed",
            Self::Skipped => "skipped",
        }
    }
}

impl fmt::Display for OutcomeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The batch job a report belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchOperation {
    Merge,
    Revert,
}

impl BatchOperation {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Merge => "merge",
            Self::Revert => "revert",
        }
    }
}

impl fmt::Display for BatchOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
