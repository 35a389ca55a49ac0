//! Path enumeration - the set of pages a build produces.
//!
//! Every non-excluded show gets one page, addressed by its id list. Every id
//! that appears in some match's `wrestlers` list gets one page. Both lists are
//! fully materialised before any page is built.

mod token;

pub use token::*;

use show_records::{RecordStore, WrestlerId, INDEXED_ROLE};
use std::collections::{BTreeSet, HashSet};
use tracing::debug;

/// Enumerates routable entities from a record store.
pub struct PathEnumerator<'a> {
    store: &'a RecordStore,
}

impl<'a> PathEnumerator<'a> {
    /// Create a new enumerator over `store`.
    pub fn new(store: &'a RecordStore) -> Self {
        Self { store }
    }

    /// One route per distinct show id sequence, in store order.
    pub fn distinct_show_routes(&self) -> Vec<ShowRoute> {
        let mut seen: HashSet<&[String]> = HashSet::new();
        self.store
            .all_shows()
            .iter()
            .filter(|show| seen.insert(show.ids.as_slice()))
            .map(|show| ShowRoute::new(show.ids.clone()))
            .collect()
    }

    /// Every id found in a `wrestlers` list, once each, ascending.
    pub fn distinct_wrestler_ids(&self) -> Vec<WrestlerId> {
        let ids: BTreeSet<WrestlerId> = self
            .store
            .all_shows()
            .iter()
            .flat_map(|show| &show.matches)
            .flat_map(|m| m.participants(INDEXED_ROLE))
            .map(|p| p.id)
            .collect();
        ids.into_iter().collect()
    }

    /// All routes: shows first, then wrestlers.
    pub fn all_routes(&self) -> Vec<Route> {
        let shows = self.distinct_show_routes();
        let wrestlers = self.distinct_wrestler_ids();
        debug!(
            shows = shows.len(),
            wrestlers = wrestlers.len(),
            "enumerated routes"
        );

        shows
            .into_iter()
            .map(Route::Show)
            .chain(wrestlers.into_iter().map(Route::Wrestler))
            .collect()
    }
}
