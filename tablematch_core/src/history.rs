//! History building - a wrestler's shows, each cut down to their matches.

use show_records::{Match, RecordStore, Show, WrestlerId};

/// Builds wrestler histories from a record store.
pub struct HistoryBuilder<'a> {
    store: &'a RecordStore,
}

impl<'a> HistoryBuilder<'a> {
    /// Create a new history builder over `store`.
    pub fn new(store: &'a RecordStore) -> Self {
        Self { store }
    }

    /// The shows `id` wrestled on, ascending by date, each holding only the
    /// matches with `id` in its wrestlers list.
    pub fn history(&self, id: WrestlerId) -> Vec<Show> {
        filter_history(self.store.all_shows(), id)
    }
}

/// Filter `shows` down to the matches involving `id`.
///
/// Shows without such a match are dropped rather than kept empty; every other
/// show field passes through untouched. The result is sorted by date (stable),
/// and applying the filter to its own output changes nothing.
pub fn filter_history(shows: &[Show], id: WrestlerId) -> Vec<Show> {
    let mut history: Vec<Show> = shows
        .iter()
        .filter_map(|show| {
            let matches: Vec<_> = show
                .matches
                .iter()
                .filter(|m| m.involves_wrestler(id))
                .cloned()
                .collect();
            if matches.is_empty() {
                return None;
            }
            Some(with_matches(show, matches))
        })
        .collect();
    history.sort_by_key(|show| show.date);
    history
}

/// Copy every field of `show` except its match list.
fn with_matches(show: &Show, matches: Vec<Match>) -> Show {
    Show {
        ids: show.ids.clone(),
        name: show.name.clone(),
        promotion: show.promotion.clone(),
        arena: show.arena.clone(),
        date: show.date,
        matches,
        partial: show.partial,
        exclude: show.exclude,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use show_records::{Participant, Promotion};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn singles(id: i64, text: &str, result: &str) -> Match {
        Match::new("Singles", result).with_wrestler(Participant::new(id, text))
    }

    fn two_show_store() -> RecordStore {
        let s1 = Show::new("S1", "Show One", Promotion::new(1, "P1"), date(2020, 1, 1))
            .with_arena("Arena One")
            .with_match(singles(7, "Rey", "s1-m1"));
        let s2 = Show::new("S2", "Show Two", Promotion::new(2, "P2"), date(2020, 2, 1))
            .with_match(singles(7, "Rey Jr", "s2-m1"))
            .with_match(singles(9, "Other", "s2-m2"));
        RecordStore::from_shows(vec![s2, s1])
    }

    #[test]
    fn test_two_show_history() {
        let store = two_show_store();
        let history = HistoryBuilder::new(&store).history(WrestlerId(7));

        assert_eq!(history.len(), 2);
        assert_eq!(history[0].ids, vec!["S1"]);
        assert_eq!(history[0].matches.len(), 1);
        assert_eq!(history[1].ids, vec!["S2"]);
        assert_eq!(history[1].matches.len(), 1);
        assert_eq!(history[1].matches[0].result, "s2-m1");
    }

    #[test]
    fn test_other_fields_pass_through() {
        let store = two_show_store();
        let history = HistoryBuilder::new(&store).history(WrestlerId(7));

        let original = &store.all_shows()[0];
        assert_eq!(
            Show {
                matches: original.matches.clone(),
                ..history[0].clone()
            },
            *original
        );
        assert_eq!(history[0].arena, "Arena One");
    }

    #[test]
    fn test_shows_without_matches_omitted() {
        let store = two_show_store();
        let history = HistoryBuilder::new(&store).history(WrestlerId(9));

        assert_eq!(history.len(), 1);
        assert_eq!(history[0].ids, vec!["S2"]);
    }

    #[test]
    fn test_unknown_id_empty_history() {
        let store = two_show_store();
        assert!(HistoryBuilder::new(&store).history(WrestlerId(404)).is_empty());
    }

    #[test]
    fn test_team_listing_does_not_qualify() {
        let store = RecordStore::from_shows(vec![Show::new("1", "A", Promotion::new(1, "P"), date(2020, 1, 1))
            .with_match(Match::new("Tag", "x").with_team(Participant::new(7, "Team")))]);
        assert!(HistoryBuilder::new(&store).history(WrestlerId(7)).is_empty());
    }

    #[test]
    fn test_excluded_show_not_in_history() {
        let store = RecordStore::from_shows(vec![
            Show::new("1", "A", Promotion::new(1, "P"), date(2020, 1, 1))
                .with_match(singles(7, "Rey", "x"))
                .excluded(),
        ]);
        assert!(HistoryBuilder::new(&store).history(WrestlerId(7)).is_empty());
    }

    #[test]
    fn test_filter_history_is_idempotent() {
        let store = two_show_store();
        let once = HistoryBuilder::new(&store).history(WrestlerId(7));
        let twice = filter_history(&once, WrestlerId(7));
        assert_eq!(once, twice);
    }

    proptest! {
        #[test]
        fn history_idempotent_and_sorted(
            cards in prop::collection::vec(
                (1u32..28, prop::collection::vec(prop::collection::vec(0i64..5, 0..3), 0..4)),
                0..8,
            ),
            target in 0i64..5,
        ) {
            let shows: Vec<_> = cards
                .iter()
                .enumerate()
                .map(|(i, (day, matches))| {
                    matches.iter().fold(
                        Show::new(i.to_string(), "S", Promotion::new(1, "P"), date(2020, 1, *day)),
                        |show, ids| {
                            let m = ids.iter().fold(Match::new("M", "x"), |m, id| {
                                m.with_wrestler(Participant::new(*id, "W"))
                            });
                            show.with_match(m)
                        },
                    )
                })
                .collect();
            let store = RecordStore::from_shows(shows);
            let id = WrestlerId(target);

            let history = HistoryBuilder::new(&store).history(id);
            prop_assert_eq!(&filter_history(&history, id), &history);
            for pair in history.windows(2) {
                prop_assert!(pair[0].date <= pair[1].date);
            }
            for show in &history {
                prop_assert!(!show.matches.is_empty());
                prop_assert!(show.matches.iter().all(|m| m.involves_wrestler(id)));
            }
        }
    }
}
