use crate::models::ShowtimeInterval;

/// Wave dash and its ASCII tilde variant, both seen as range separators
/// in the wild.
const RANGE_SEPARATORS: [char; 2] = ['～', '~'];

/// A raw showtime as it comes off a schedule page: either a single
/// "11:45～14:50" range string, or start and end already split into
/// separate elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawShowtime<'a> {
    Range(&'a str),
    Pair(&'a str, &'a str),
}

/// Turn a raw showtime into a start/end interval. A range string with no
/// recognized separator yields `None`; the caller drops that entry and
/// keeps going, so one malformed time never sinks the whole listing.
pub fn normalize_showtime(raw: &RawShowtime<'_>) -> Option<ShowtimeInterval> {
    match raw {
        RawShowtime::Range(text) => split_time_range(text),
        RawShowtime::Pair(start, end) => Some(ShowtimeInterval::new(
            strip_separators(start),
            strip_separators(end),
        )),
    }
}

/// Pair up parallel start/end sequences by index. Unequal lengths are
/// truncated to the shorter side rather than treated as an error.
pub fn pair_showtimes(starts: &[String], ends: &[String]) -> Vec<ShowtimeInterval> {
    starts
        .iter()
        .zip(ends.iter())
        .filter_map(|(start, end)| normalize_showtime(&RawShowtime::Pair(start, end)))
        .collect()
}

fn split_time_range(raw: &str) -> Option<ShowtimeInterval> {
    let raw = raw.trim();
    let index = raw.find(&RANGE_SEPARATORS[..])?;
    let (start, rest) = raw.split_at(index);
    let end = rest.trim_start_matches(&RANGE_SEPARATORS[..]);
    Some(ShowtimeInterval::new(start.trim(), end.trim()))
}

fn strip_separators(text: &str) -> String {
    text.replace(&RANGE_SEPARATORS[..], "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn splits_wave_dash_range() {
        assert_eq!(
            normalize_showtime(&RawShowtime::Range("11:45～14:50")),
            Some(ShowtimeInterval::new("11:45", "14:50"))
        );
    }

    #[test]
    fn splits_range_with_fullwidth_space_after_separator() {
        assert_eq!(
            normalize_showtime(&RawShowtime::Range("11:45～　14:50")),
            Some(ShowtimeInterval::new("11:45", "14:50"))
        );
    }

    #[test]
    fn accepts_ascii_tilde_separator() {
        assert_eq!(
            normalize_showtime(&RawShowtime::Range("09:10~11:20")),
            Some(ShowtimeInterval::new("09:10", "11:20"))
        );
    }

    #[test]
    fn range_without_separator_is_dropped() {
        assert_eq!(normalize_showtime(&RawShowtime::Range("11:45")), None);
        assert_eq!(normalize_showtime(&RawShowtime::Range("")), None);
    }

    #[test]
    fn pair_is_trimmed_and_stripped_of_stray_separators() {
        assert_eq!(
            normalize_showtime(&RawShowtime::Pair(" 11:45 ", "～14:50")),
            Some(ShowtimeInterval::new("11:45", "14:50"))
        );
        assert_eq!(
            normalize_showtime(&RawShowtime::Pair("09:00", "~11:30")),
            Some(ShowtimeInterval::new("09:00", "11:30"))
        );
    }

    #[test]
    fn parallel_sequences_truncate_to_the_shorter() {
        let starts = vec!["09:00".to_string(), "12:00".to_string(), "15:00".to_string()];
        let ends = vec!["11:30".to_string(), "14:30".to_string()];
        let intervals = pair_showtimes(&starts, &ends);
        assert_eq!(
            intervals,
            vec![
                ShowtimeInterval::new("09:00", "11:30"),
                ShowtimeInterval::new("12:00", "14:30"),
            ]
        );
    }

    #[test]
    fn empty_sequences_pair_to_nothing() {
        assert_eq!(pair_showtimes(&[], &[]), Vec::<ShowtimeInterval>::new());
    }
}
