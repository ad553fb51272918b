//! Search policy types.

/// Search configuration.
///
/// There is no expansion budget or timeout: every search runs until the goal
/// is popped or the open list is exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchPolicy {
    /// Pop order among open-list entries with equal priority.
    pub tie_break: TieBreak,
}

impl SearchPolicy {
    #[must_use]
    pub fn with_tie_break(tie_break: TieBreak) -> Self {
        Self { tie_break }
    }
}

/// Secondary ordering key for open-list entries with equal `f_cost`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TieBreak {
    /// Earlier insertion pops first. Default.
    #[default]
    Fifo,
    /// Later insertion pops first (depth-first flavour on plateaus).
    Lifo,
}

impl TieBreak {
    /// Stable name used in traces and reports.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fifo => "fifo",
            Self::Lifo => "lifo",
        }
    }
}
