use std::fmt;

use serde::Serialize;

/// Stable identifier for a catalog entry.
/// Doubles as the value of the `system` query parameter in share links.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Top-level classification of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Distributed,
    Networking,
    Storage,
    Analytics,
}

impl Category {
    /// All categories in display order.
    pub fn all() -> [Category; 4] {
        [
            Self::Distributed,
            Self::Networking,
            Self::Storage,
            Self::Analytics,
        ]
    }

    /// The exact label filters compare against.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Distributed => "Distributed",
            Self::Networking => "Networking",
            Self::Storage => "Storage",
            Self::Analytics => "Analytics",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Complexity {
    Medium,
    High,
    Critical,
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Medium => write!(f, "Medium"),
            Self::High => write!(f, "High"),
            Self::Critical => write!(f, "Critical"),
        }
    }
}

/// Publication state of a writeup. Only drives the status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    Drafting,
    Live,
    Concept,
}

impl Status {
    pub fn is_live(&self) -> bool {
        matches!(self, Self::Live)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Drafting => write!(f, "Drafting"),
            Self::Live => write!(f, "Live"),
            Self::Concept => write!(f, "Concept"),
        }
    }
}

/// Placeholder used by entries whose writeup or simulation is not published yet.
pub const PLACEHOLDER_LINK: &str = "#";

/// One documented system design.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SystemEntry {
    pub id: EntryId,
    pub title: String,
    pub category: Category,
    pub tags: Vec<String>,
    pub description: String,
    pub stack: Vec<String>,
    pub metrics: String,
    pub complexity: Complexity,
    pub status: Status,
    pub adr_link: String,
    pub sim_link: String,
}

impl SystemEntry {
    /// True if `label` names this entry's category or one of its tags.
    pub fn has_label(&self, label: &str) -> bool {
        self.category.as_str() == label || self.tags.iter().any(|t| t == label)
    }

    /// True if the lowercased `needle` occurs in the title, description, or
    /// any stack element.
    pub(crate) fn mentions_lowercase(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.stack.iter().any(|s| s.to_lowercase().contains(needle))
    }

    /// Stack rendered the way the cards show it.
    pub fn stack_line(&self) -> String {
        self.stack.join(" \u{2022} ")
    }
}

/// Whether a reference string points anywhere.
pub fn has_link(link: &str) -> bool {
    !link.is_empty() && link != PLACEHOLDER_LINK
}
