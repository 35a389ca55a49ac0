//! Rating and name text: star ratings, matchguide scores, show name fixes.
//!
//! The two rating scales are independent. Nothing here converts between them
//! or combines them.

/// Convert a Wrestling Observer star rating such as `****1/4` to a number.
///
/// A leading `-` negates. Stars only count when the rating starts with one,
/// so `3/4*` is `0.75`. `DUD` and anything unrecognised count as zero.
pub fn parse_won_rating(rating: &str) -> f64 {
    let rating = rating.trim();
    let (negate, rest) = match rating.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, rating),
    };

    let stars = if rest.starts_with('*') {
        rest.matches('*').count() as f64
    } else {
        0.0
    };
    let fraction = match rest.replace('*', "").as_str() {
        "1/4" => 0.25,
        "1/2" => 0.5,
        "3/4" => 0.75,
        _ => 0.0,
    };

    let value = stars + fraction;
    if negate {
        -value
    } else {
        value
    }
}

/// Extract the score from a `Matchguide Rating: 8.41 based on 120 votes` line.
pub fn parse_cagematch_rating(line: &str) -> Option<f64> {
    const PREFIX: &str = "Matchguide Rating: ";
    const SUFFIX: &str = " based on ";

    let start = line.find(PREFIX)? + PREFIX.len();
    let end = line.rfind(SUFFIX)?;
    if end <= start {
        return None;
    }
    line[start..end].trim().parse().ok()
}

/// Rewrite German `Tag <n>` day markers in show names to `Day <n>`.
pub fn translate_show_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut rest = name;

    while let Some(pos) = rest.find("Tag ") {
        let after = &rest[pos + 4..];
        let digits = after.chars().take_while(char::is_ascii_digit).count();
        out.push_str(&rest[..pos]);
        if digits > 0 {
            out.push_str("Day ");
        } else {
            out.push_str("Tag ");
        }
        rest = after;
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_won_rating_stars_and_fractions() {
        assert_eq!(parse_won_rating("*****"), 5.0);
        assert_eq!(parse_won_rating("****1/4"), 4.25);
        assert_eq!(parse_won_rating("***1/2"), 3.5);
        assert_eq!(parse_won_rating("**3/4"), 2.75);
    }

    #[test]
    fn test_won_rating_negative_and_dud() {
        assert_eq!(parse_won_rating("-*"), -1.0);
        assert_eq!(parse_won_rating("-**1/2"), -2.5);
        assert_eq!(parse_won_rating("DUD"), 0.0);
        assert_eq!(parse_won_rating("3/4*"), 0.75);
    }

    #[test]
    fn test_cagematch_rating() {
        assert_eq!(
            parse_cagematch_rating("Matchguide Rating: 8.41 based on 120 votes"),
            Some(8.41)
        );
        assert_eq!(parse_cagematch_rating("WON: ****"), None);
        assert_eq!(parse_cagematch_rating("Matchguide Rating: n/a based on 0 votes"), None);
    }

    #[test]
    fn test_translate_show_name() {
        assert_eq!(translate_show_name("G1 Climax Tag 3"), "G1 Climax Day 3");
        assert_eq!(translate_show_name("Tag 1 & Tag 12"), "Day 1 & Day 12");
        assert_eq!(translate_show_name("Tag Team Turmoil"), "Tag Team Turmoil");
    }
}
