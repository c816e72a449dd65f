//! Day bucketing and ordering of expanded occurrences.
//!
//! Views consume occurrences one calendar day at a time, with each day's
//! list ordered by start time. The `HH:MM` strings are fixed-width and
//! zero-padded, so lexicographic comparison is chronological comparison.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::occurrence::Occurrence;

/// Weekday display labels, Sunday first to match the weekday indices.
pub const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Display label for a weekday index; a legacy 7 wraps around to Sunday.
pub fn day_label(weekday: u8) -> &'static str {
    DAY_NAMES[usize::from(weekday % 7)]
}

/// Group occurrences by calendar day, each day ordered by start time.
///
/// The per-day sort is stable, so occurrences sharing a start time keep the
/// order they were produced in.
pub fn bucket_by_day<'a>(
    occurrences: &[Occurrence<'a>],
) -> BTreeMap<NaiveDate, Vec<Occurrence<'a>>> {
    let mut buckets: BTreeMap<NaiveDate, Vec<Occurrence<'a>>> = BTreeMap::new();
    for occurrence in occurrences {
        buckets.entry(occurrence.date).or_default().push(*occurrence);
    }
    for day_list in buckets.values_mut() {
        day_list.sort_by(|a, b| a.task.start_time.cmp(&b.task.start_time));
    }
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::occurrence::expand_all;
    use crate::task::{TaskDefinition, TaskKind};
    use crate::window::Window;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ad_hoc(id: &str, date: NaiveDate, start_time: &str) -> TaskDefinition {
        TaskDefinition {
            id: id.to_string(),
            kind: TaskKind::AdHoc,
            date: Some(date),
            start_time: start_time.to_string(),
            ..TaskDefinition::new(id)
        }
    }

    #[test]
    fn test_day_labels() {
        assert_eq!(day_label(0), "Sunday");
        assert_eq!(day_label(6), "Saturday");
        assert_eq!(day_label(7), "Sunday");
    }

    #[test]
    fn test_buckets_sorted_by_start_time() {
        let target = day(2024, 3, 14);
        let snapshot = vec![
            ad_hoc("late", target, "16:00"),
            ad_hoc("early", target, "08:30"),
            ad_hoc("mid", target, "12:00"),
        ];
        let occurrences = expand_all(&snapshot, &Window::day(target));
        let buckets = bucket_by_day(&occurrences);

        let ids: Vec<_> = buckets[&target].iter().map(|o| o.task.id.as_str()).collect();
        assert_eq!(ids, vec!["early", "mid", "late"]);
    }

    #[test]
    fn test_equal_start_times_keep_input_order() {
        let target = day(2024, 3, 14);
        let snapshot = vec![
            ad_hoc("first", target, "09:00"),
            ad_hoc("second", target, "09:00"),
            ad_hoc("third", target, "09:00"),
        ];
        let occurrences = expand_all(&snapshot, &Window::day(target));
        let buckets = bucket_by_day(&occurrences);

        let ids: Vec<_> = buckets[&target].iter().map(|o| o.task.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_buckets_are_keyed_by_day_in_order() {
        let snapshot = vec![
            ad_hoc("b", day(2024, 3, 15), "09:00"),
            ad_hoc("a", day(2024, 3, 11), "09:00"),
        ];
        let occurrences = expand_all(&snapshot, &Window::week(day(2024, 3, 14)));
        let buckets = bucket_by_day(&occurrences);

        let days: Vec<_> = buckets.keys().copied().collect();
        assert_eq!(days, vec![day(2024, 3, 11), day(2024, 3, 15)]);
    }
}
