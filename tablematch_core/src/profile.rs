//! Wrestler aggregation - the statistics at the top of a wrestler page.

use chrono::NaiveDate;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use show_records::{PromotionId, RecordStore, WrestlerId, INDEXED_ROLE};
use std::collections::HashSet;

use crate::ranking::{NameRanker, NameTally};

/// Derived summary of one wrestler. Recomputed on demand, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrestlerProfile {
    pub id: WrestlerId,

    /// Distinct recorded names, most frequent first.
    pub names: Vec<String>,

    pub match_count: usize,
    pub show_count: usize,
    pub promotion_count: usize,

    pub first_seen: Option<NaiveDate>,
    pub last_seen: Option<NaiveDate>,
}

impl WrestlerProfile {
    /// The profile of an id that appears nowhere.
    pub fn not_found(id: WrestlerId) -> Self {
        Self {
            id,
            names: Vec::new(),
            match_count: 0,
            show_count: 0,
            promotion_count: 0,
            first_seen: None,
            last_seen: None,
        }
    }

    /// Check if the id was found in any match.
    pub fn is_found(&self) -> bool {
        self.match_count > 0
    }

    /// The best display name.
    pub fn display_name(&self) -> Option<&str> {
        self.names.first().map(String::as_str)
    }
}

/// Computes wrestler profiles from a record store.
pub struct WrestlerAggregator<'a> {
    store: &'a RecordStore,
}

impl<'a> WrestlerAggregator<'a> {
    /// Create a new aggregator over `store`.
    pub fn new(store: &'a RecordStore) -> Self {
        Self { store }
    }

    /// Compute the profile of `id`.
    ///
    /// # Algorithm
    ///
    /// 1. Walk shows by ascending date, matches in recorded order
    /// 2. For each match listing `id` among its wrestlers, record the show's
    ///    promotion and date and the text printed for `id`
    /// 3. Rank the recorded texts; count matches, shows and promotions
    ///
    /// An id listed twice in one match counts once, under its first text.
    pub fn profile(&self, id: WrestlerId) -> WrestlerProfile {
        self.profile_with_names(id).0
    }

    /// Compute the profile of `id` together with the tally behind its
    /// `names`, in the same rank order.
    pub fn profile_with_names(&self, id: WrestlerId) -> (WrestlerProfile, Vec<NameTally>) {
        let mut profile = WrestlerProfile::not_found(id);
        let mut names = NameRanker::new();
        let mut promotions: HashSet<PromotionId> = HashSet::new();

        for show in self.store.all_shows() {
            let mut contributed = false;

            for m in &show.matches {
                if let Some(participant) = m.find_participant(INDEXED_ROLE, id) {
                    names.record(&participant.text, profile.match_count);
                    profile.match_count += 1;
                    contributed = true;
                }
            }

            if contributed {
                profile.show_count += 1;
                promotions.insert(show.promotion.id);
                profile.first_seen.get_or_insert(show.date);
                profile.last_seen = Some(show.date);
            }
        }

        let tallies = names.ranked_with_counts();
        profile.names = tallies.iter().map(|t| t.text.clone()).collect();
        profile.promotion_count = promotions.len();
        (profile, tallies)
    }

    /// Compute many profiles in parallel, in the order of `ids`.
    pub fn profiles(&self, ids: &[WrestlerId]) -> Vec<WrestlerProfile> {
        ids.par_iter().map(|id| self.profile(*id)).collect()
    }
}
