//! Page resolution - the data handed to whatever renders a page.
//!
//! A route that names nothing in the store resolves to [`Page::NotFound`];
//! missing entities are ordinary results here, not errors.

use serde::{Deserialize, Serialize};
use show_records::{RecordStore, Show, WrestlerId};
use tracing::debug;

use crate::history::HistoryBuilder;
use crate::profile::{WrestlerAggregator, WrestlerProfile};
use crate::ranking::NameTally;
use crate::routes::{Route, ShowRoute};

/// Everything a show page renders: the validated record, unmodified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShowDetail {
    pub show: Show,
}

/// Everything a wrestler page renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WrestlerPage {
    pub profile: WrestlerProfile,
    /// How often each of `profile.names` was recorded, in the same order.
    pub name_counts: Vec<NameTally>,
    pub history: Vec<Show>,
}

impl WrestlerPage {
    /// Check if the wrestler was found anywhere in the store.
    pub fn is_found(&self) -> bool {
        self.profile.is_found()
    }
}

/// A resolved route.
#[derive(Debug, Clone, PartialEq)]
pub enum Page {
    Show(ShowDetail),
    Wrestler(WrestlerPage),
    NotFound(Route),
}

/// Resolves routes against a record store.
pub struct PageResolver<'a> {
    store: &'a RecordStore,
}

impl<'a> PageResolver<'a> {
    /// Create a new resolver over `store`.
    pub fn new(store: &'a RecordStore) -> Self {
        Self { store }
    }

    /// The show whose id sequence matches `route` exactly.
    pub fn show_detail(&self, route: &ShowRoute) -> Option<ShowDetail> {
        self.store.show_by_ids(&route.ids).map(|show| ShowDetail { show: show.clone() })
    }

    /// Profile and history of `id`. Unknown ids give an empty profile and
    /// an empty history.
    pub fn wrestler_page(&self, id: WrestlerId) -> WrestlerPage {
        let (profile, name_counts) = WrestlerAggregator::new(self.store).profile_with_names(id);
        WrestlerPage {
            profile,
            name_counts,
            history: HistoryBuilder::new(self.store).history(id),
        }
    }

    /// Resolve any route.
    pub fn resolve(&self, route: &Route) -> Page {
        let page = match route {
            Route::Show(show) => self.show_detail(show).map(Page::Show),
            Route::Wrestler(id) => Some(self.wrestler_page(*id))
                .filter(WrestlerPage::is_found)
                .map(Page::Wrestler),
        };
        page.unwrap_or_else(|| {
            debug!(route = %route, "route resolved to nothing");
            Page::NotFound(route.clone())
        })
    }
}
