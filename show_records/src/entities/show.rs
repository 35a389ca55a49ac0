//! Show definitions.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Match, Promotion, WrestlerId};

/// One recorded event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Show {
    /// External identifiers, in recorded order. A taping carries one id per part.
    #[serde(alias = "id")]
    pub ids: Vec<String>,
    pub name: String,
    pub promotion: Promotion,
    pub arena: String,
    pub date: NaiveDate,

    /// Matches in recorded order.
    pub matches: Vec<Match>,

    /// The record is known to be incomplete.
    #[serde(default)]
    pub partial: bool,

    /// The record takes no part in routing or aggregation.
    #[serde(default)]
    pub exclude: bool,
}

impl Show {
    /// Create a new show with a single id and no matches.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        promotion: Promotion,
        date: NaiveDate,
    ) -> Self {
        Self {
            ids: vec![id.into()],
            name: name.into(),
            promotion,
            arena: String::new(),
            date,
            matches: Vec::new(),
            partial: false,
            exclude: false,
        }
    }

    /// Set the arena.
    pub fn with_arena(mut self, arena: impl Into<String>) -> Self {
        self.arena = arena.into();
        self
    }

    /// Append a match.
    pub fn with_match(mut self, m: Match) -> Self {
        self.matches.push(m);
        self
    }

    /// Append an additional external id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.ids.push(id.into());
        self
    }

    /// Mark the show as excluded from all derived output.
    pub fn excluded(mut self) -> Self {
        self.exclude = true;
        self
    }

    /// Check if any match has `id` in its wrestlers list.
    pub fn involves_wrestler(&self, id: WrestlerId) -> bool {
        self.matches.iter().any(|m| m.involves_wrestler(id))
    }

    /// File stem used for this show's page data, ids joined by `-`.
    pub fn file_stem(&self) -> String {
        self.ids.join("-")
    }
}
