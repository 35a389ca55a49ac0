//! Record composition - tapings, partial shows and squashed matches.
//!
//! Input lists can describe a show as more than one source page (a taping),
//! as a page with some matches cut (a partial show), or as a page where a run
//! of matches should read as one (a squash). These operate on shows that have
//! already been parsed. Match positions are 1-based, as written in input files.

use std::str::FromStr;

use crate::entities::{Match, Participant, Show};
use crate::error::CompositionError;

/// Merge the parts of a taping into one show.
///
/// The first part is the base. Its name gets a `" Taping"` suffix unless an
/// explicit `name` is given. Ids and matches of the remaining parts are
/// appended in order.
pub fn merge_taping(
    parts: impl IntoIterator<Item = Show>,
    name: Option<String>,
) -> Result<Show, CompositionError> {
    let mut parts = parts.into_iter();
    let mut taping = parts.next().ok_or(CompositionError::EmptyTaping)?;

    taping.name = match name {
        Some(name) => name,
        None => format!("{} Taping", taping.name),
    };
    for part in parts {
        taping.ids.extend(part.ids);
        taping.matches.extend(part.matches);
    }
    Ok(taping)
}

/// Drop the matches at the given 1-based positions and flag the show partial.
///
/// `exclude_from_count` marks the whole show excluded from derived output.
pub fn mark_partial(
    mut show: Show,
    excluded: &[usize],
    exclude_from_count: bool,
) -> Result<Show, CompositionError> {
    let len = show.matches.len();
    if let Some(&position) = excluded.iter().find(|&&p| p == 0 || p > len) {
        return Err(CompositionError::MatchOutOfRange { position, len });
    }

    show.matches = show
        .matches
        .into_iter()
        .enumerate()
        .filter(|(i, _)| !excluded.contains(&(i + 1)))
        .map(|(_, m)| m)
        .collect();
    show.partial = true;
    show.exclude = exclude_from_count;
    Ok(show)
}

/// An inclusive, 1-based run of matches, written `start-end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchRange {
    pub start: usize,
    pub end: usize,
}

impl MatchRange {
    pub fn new(start: usize, end: usize) -> Result<Self, CompositionError> {
        if start == 0 || start > end {
            return Err(CompositionError::InvalidRange(format!("{start}-{end}")));
        }
        Ok(Self { start, end })
    }
}

impl FromStr for MatchRange {
    type Err = CompositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CompositionError::InvalidRange(s.to_string());
        let (start, end) = s.split_once('-').ok_or_else(invalid)?;
        let start = start.trim().parse().map_err(|_| invalid())?;
        let end = end.trim().parse().map_err(|_| invalid())?;
        Self::new(start, end).map_err(|_| invalid())
    }
}

/// Replace each range of matches with a single combined match.
///
/// The combined match sits where the range started. Its result joins the
/// recorded results with `", "`, it carries no type and no ratings, and each
/// participant list keeps one entry per id (first-seen position, last text).
pub fn squash_matches(mut show: Show, ranges: &[MatchRange]) -> Result<Show, CompositionError> {
    let len = show.matches.len();
    let mut slots: Vec<Option<Match>> = show.matches.into_iter().map(Some).collect();

    for range in ranges {
        if range.start == 0 || range.start > range.end {
            return Err(CompositionError::InvalidRange(format!(
                "{}-{}",
                range.start, range.end
            )));
        }
        if range.end > len {
            return Err(CompositionError::MatchOutOfRange {
                position: range.end,
                len,
            });
        }

        let mut combined = Match::new("", "");
        let mut results = Vec::new();
        for slot in &mut slots[range.start - 1..range.end] {
            // Overlapping ranges see already-squashed slots as empty.
            if let Some(m) = slot.take() {
                results.push(m.result);
                merge_participants(&mut combined.wrestlers, m.wrestlers);
                merge_participants(&mut combined.teams, m.teams);
                merge_participants(&mut combined.appearances, m.appearances);
            }
        }
        combined.result = results.join(", ");
        slots[range.start - 1] = Some(combined);
    }

    show.matches = slots.into_iter().flatten().collect();
    Ok(show)
}

fn merge_participants(into: &mut Vec<Participant>, from: Vec<Participant>) {
    for participant in from {
        match into.iter_mut().find(|p| p.id == participant.id) {
            Some(existing) => existing.text = participant.text,
            None => into.push(participant),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Promotion, WrestlerId};
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn show(id: &str, name: &str, results: &[&str]) -> Show {
        let date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        results.iter().fold(
            Show::new(id, name, Promotion::new(1, "P"), date),
            |show, result| show.with_match(Match::new("Singles", *result)),
        )
    }

    fn results(show: &Show) -> Vec<&str> {
        show.matches.iter().map(|m| m.result.as_str()).collect()
    }

    #[test]
    fn test_merge_taping_default_name() {
        let taping = merge_taping(
            vec![show("1", "Dark", &["a"]), show("2", "Main", &["b", "c"])],
            None,
        )
        .unwrap();

        assert_eq!(taping.name, "Dark Taping");
        assert_eq!(taping.ids, vec!["1", "2"]);
        assert_eq!(results(&taping), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_merge_taping_explicit_name() {
        let taping = merge_taping(vec![show("1", "Dark", &[])], Some("TV Taping".into())).unwrap();
        assert_eq!(taping.name, "TV Taping");
    }

    #[test]
    fn test_merge_taping_empty() {
        assert_eq!(
            merge_taping(Vec::new(), None).unwrap_err(),
            CompositionError::EmptyTaping
        );
    }

    #[test]
    fn test_mark_partial() {
        let partial = mark_partial(show("1", "S", &["a", "b", "c", "d"]), &[1, 3], false).unwrap();
        assert_eq!(results(&partial), vec!["b", "d"]);
        assert!(partial.partial);
        assert!(!partial.exclude);

        let excluded = mark_partial(show("1", "S", &["a"]), &[], true).unwrap();
        assert!(excluded.exclude);
    }

    #[test]
    fn test_mark_partial_out_of_range() {
        let err = mark_partial(show("1", "S", &["a", "b"]), &[3], false).unwrap_err();
        assert_eq!(err, CompositionError::MatchOutOfRange { position: 3, len: 2 });
    }

    #[test]
    fn test_match_range_parse() {
        assert_eq!("2-4".parse::<MatchRange>().unwrap(), MatchRange { start: 2, end: 4 });
        assert!("4-2".parse::<MatchRange>().is_err());
        assert!("0-2".parse::<MatchRange>().is_err());
        assert!("3".parse::<MatchRange>().is_err());
    }

    #[test]
    fn test_squash_matches() {
        let mut base = show("1", "S", &["a", "b", "c", "d"]);
        base.matches[1].wrestlers = vec![Participant::new(7, "Rey"), Participant::new(8, "Eddie")];
        base.matches[1].won = Some(3.0);
        base.matches[2].wrestlers = vec![Participant::new(7, "Rey Jr"), Participant::new(9, "Dean")];

        let squashed = squash_matches(base, &[MatchRange::new(2, 3).unwrap()]).unwrap();
        assert_eq!(results(&squashed), vec!["a", "b, c", "d"]);

        let combined = &squashed.matches[1];
        assert_eq!(combined.match_type, "");
        assert_eq!(combined.won, None);
        let ids: Vec<_> = combined.wrestlers.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![WrestlerId(7), WrestlerId(8), WrestlerId(9)]);
        assert_eq!(combined.wrestlers[0].text, "Rey Jr");
    }

    #[test]
    fn test_squash_out_of_range() {
        let err = squash_matches(show("1", "S", &["a"]), &[MatchRange::new(1, 2).unwrap()]).unwrap_err();
        assert_eq!(err, CompositionError::MatchOutOfRange { position: 2, len: 1 });
    }
}
