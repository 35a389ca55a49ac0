//! Entity definitions for the record book.

mod bout;
mod show;

pub use bout::*;
pub use show::*;

use serde::{Deserialize, Serialize};
use std::num::ParseIntError;
use std::str::FromStr;

/// Stable identifier of a real-world wrestler (or team, or other profile).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WrestlerId(pub i64);

impl WrestlerId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for WrestlerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for WrestlerId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl From<i64> for WrestlerId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Identifier of a promotion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PromotionId(pub i64);

impl std::fmt::Display for PromotionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The promotion that ran a show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Promotion {
    pub id: PromotionId,
    pub name: String,
}

impl Promotion {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id: PromotionId(id),
            name: name.into(),
        }
    }
}

/// A participant as recorded on one match.
///
/// `text` is the name variant printed for that match and may differ between
/// matches for the same `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: WrestlerId,
    pub text: String,
}

impl Participant {
    pub fn new(id: i64, text: impl Into<String>) -> Self {
        Self {
            id: WrestlerId(id),
            text: text.into(),
        }
    }
}

/// The three participant lists carried by a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParticipantRole {
    /// Singles competitors.
    Wrestler,
    /// Tag teams and stables.
    Team,
    /// Non-competing appearances (managers, seconds).
    Appearance,
}

impl ParticipantRole {
    /// Field name of this list in the ingest schema.
    pub fn field_name(&self) -> &'static str {
        match self {
            ParticipantRole::Wrestler => "wrestlers",
            ParticipantRole::Team => "teams",
            ParticipantRole::Appearance => "appearances",
        }
    }
}

/// The only participant list that drives routing and aggregation.
///
/// Teams and appearances share the `Participant` shape but are carried
/// through to pages without being indexed.
pub const INDEXED_ROLE: ParticipantRole = ParticipantRole::Wrestler;
