//! Match definitions.

use serde::{Deserialize, Serialize};

use super::{Participant, ParticipantRole, WrestlerId};

/// One contest within a show.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    #[serde(rename = "type")]
    pub match_type: String,
    pub result: String,

    /// Wrestling Observer star rating.
    pub won: Option<f64>,
    /// Cagematch matchguide rating.
    pub cagematch: Option<f64>,

    #[serde(default)]
    pub wrestlers: Vec<Participant>,
    #[serde(default)]
    pub teams: Vec<Participant>,
    #[serde(default)]
    pub appearances: Vec<Participant>,
}

impl Match {
    /// Create a new match with no ratings and no participants.
    pub fn new(match_type: impl Into<String>, result: impl Into<String>) -> Self {
        Self {
            match_type: match_type.into(),
            result: result.into(),
            won: None,
            cagematch: None,
            wrestlers: Vec::new(),
            teams: Vec::new(),
            appearances: Vec::new(),
        }
    }

    /// Add a singles competitor.
    pub fn with_wrestler(mut self, participant: Participant) -> Self {
        self.wrestlers.push(participant);
        self
    }

    /// Add a team.
    pub fn with_team(mut self, participant: Participant) -> Self {
        self.teams.push(participant);
        self
    }

    /// Add a non-competing appearance.
    pub fn with_appearance(mut self, participant: Participant) -> Self {
        self.appearances.push(participant);
        self
    }

    /// Set the Wrestling Observer rating.
    pub fn with_won(mut self, rating: f64) -> Self {
        self.won = Some(rating);
        self
    }

    /// Set the Cagematch rating.
    pub fn with_cagematch(mut self, rating: f64) -> Self {
        self.cagematch = Some(rating);
        self
    }

    /// The participant list for a role.
    pub fn participants(&self, role: ParticipantRole) -> &[Participant] {
        match role {
            ParticipantRole::Wrestler => &self.wrestlers,
            ParticipantRole::Team => &self.teams,
            ParticipantRole::Appearance => &self.appearances,
        }
    }

    /// Find the first participant with `id` in the list for `role`.
    pub fn find_participant(&self, role: ParticipantRole, id: WrestlerId) -> Option<&Participant> {
        self.participants(role).iter().find(|p| p.id == id)
    }

    /// Check if `id` competes in this match as a singles wrestler.
    pub fn involves_wrestler(&self, id: WrestlerId) -> bool {
        self.find_participant(ParticipantRole::Wrestler, id).is_some()
    }
}
