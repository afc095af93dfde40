//! Per-event standings
//!
//! Groups joined result rows by event and assigns standard competition
//! ranks ("1, 1, 3") to completed entries. Races rank ascending, field
//! events descending. Entries without a value, or whose status is not
//! `Completed`, follow the ranked ones with no rank.
//!
//! Values are compared in hundredths, the precision results are recorded
//! at, so `12.34` entered twice always ties even if one copy went through
//! floating-point arithmetic.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::{
    constants::RESULT_PRECISION_SCALE,
    models::{ResultRow, is_time_based},
};

/// One entry in an event's standings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry {
    pub row: ResultRow,
    /// `None` for disqualified, unstarted or valueless entries
    pub rank: Option<u32>,
}

/// Standings of a single event
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventStanding {
    pub event_id: String,
    pub event_name: String,
    /// "Boys A" style label
    pub category: String,
    pub time_based: bool,
    pub entries: Vec<RankedEntry>,
}

/// Comparison key of a result value, in whole hundredths.
///
/// Kept as `f64` so large values stay distinct instead of saturating.
pub fn result_key(value: f64) -> f64 {
    (value * RESULT_PRECISION_SCALE).round()
}

/// Group rows by event and rank each group. Output is ordered by event ID.
pub fn rank_results(rows: Vec<ResultRow>) -> Vec<EventStanding> {
    let mut groups: BTreeMap<String, Vec<ResultRow>> = BTreeMap::new();
    for row in rows {
        groups.entry(row.event_id.clone()).or_default().push(row);
    }

    groups
        .into_iter()
        .filter_map(|(event_id, rows)| {
            let first = rows.first()?;
            let event_name = first.event.clone();
            let category = format!("{} {}", first.event_sex, first.event_grade);
            let time_based = is_time_based(&event_name);

            Some(EventStanding {
                event_id,
                event_name,
                category,
                time_based,
                entries: rank_entries(rows, time_based),
            })
        })
        .collect()
}

/// Rank the rows of one event
pub fn rank_entries(rows: Vec<ResultRow>, time_based: bool) -> Vec<RankedEntry> {
    let mut valid = Vec::with_capacity(rows.len());
    let mut invalid = Vec::new();

    for row in rows {
        match row.result {
            Some(value) if row.status.is_rankable() && value.is_finite() => {
                valid.push((result_key(value), row));
            }
            _ => invalid.push(row),
        }
    }

    if time_based {
        valid.sort_by(|(a, _), (b, _)| a.total_cmp(b));
    } else {
        valid.sort_by(|(a, _), (b, _)| b.total_cmp(a));
    }

    let mut entries = Vec::with_capacity(valid.len() + invalid.len());
    let mut rank = 0u32;
    let mut previous: Option<f64> = None;

    for (position, (key, row)) in valid.into_iter().enumerate() {
        if previous != Some(key) {
            rank = position as u32 + 1;
            previous = Some(key);
        }
        entries.push(RankedEntry { row, rank: Some(rank) });
    }

    entries.extend(invalid.into_iter().map(|row| RankedEntry { row, rank: None }));
    entries
}

/// Keep only entries matching `keep`, dropping standings left empty.
/// Ranks are not recomputed.
pub fn retain_entries<F>(standings: Vec<EventStanding>, keep: F) -> Vec<EventStanding>
where
    F: Fn(&RankedEntry) -> bool,
{
    standings
        .into_iter()
        .filter_map(|mut standing| {
            standing.entries.retain(|entry| keep(entry));
            (!standing.entries.is_empty()).then_some(standing)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EventStatus, Grade, ResultStatus, Sex};

    fn row(result_id: i64, event_id: &str, event: &str, result: Option<f64>, status: ResultStatus) -> ResultRow {
        ResultRow {
            result_id,
            result,
            status,
            athlete_id: format!("ATH{result_id:03}"),
            name: format!("Athlete {result_id}"),
            house: "Red".to_string(),
            athlete_sex: Sex::Boys,
            athlete_grade: Grade::A,
            event_id: event_id.to_string(),
            event: event.to_string(),
            event_sex: Sex::Boys,
            event_grade: Grade::A,
            event_status: EventStatus::Completed,
        }
    }

    fn done(result_id: i64, event: &str, value: f64) -> ResultRow {
        row(result_id, "EV0001", event, Some(value), ResultStatus::Completed)
    }

    fn ranks(entries: &[RankedEntry]) -> Vec<Option<u32>> {
        entries.iter().map(|e| e.rank).collect()
    }

    fn ids(entries: &[RankedEntry]) -> Vec<i64> {
        entries.iter().map(|e| e.row.result_id).collect()
    }

    #[test]
    fn test_tied_times_share_rank_and_next_skips() {
        let rows = vec![
            done(1, "100 meters", 12.50),
            done(2, "100 meters", 12.34),
            done(3, "100 meters", 12.34),
        ];

        let entries = rank_entries(rows, true);

        assert_eq!(ranks(&entries), vec![Some(1), Some(1), Some(3)]);
        assert_eq!(ids(&entries), vec![2, 3, 1]);
    }

    #[test]
    fn test_field_events_rank_descending() {
        let rows = vec![
            done(1, "Long Jump", 4.10),
            done(2, "Long Jump", 5.25),
            done(3, "Long Jump", 4.80),
        ];

        let entries = rank_entries(rows, false);

        assert_eq!(ids(&entries), vec![2, 3, 1]);
        assert_eq!(ranks(&entries), vec![Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn test_invalid_entries_follow_unranked() {
        let rows = vec![
            row(1, "EV0001", "High Jump", Some(1.90), ResultStatus::Disqualification),
            row(2, "EV0001", "High Jump", None, ResultStatus::Completed),
            done(3, "High Jump", 1.40),
            row(4, "EV0001", "High Jump", None, ResultStatus::NotYetStart),
        ];

        let entries = rank_entries(rows, false);

        assert_eq!(ids(&entries), vec![3, 1, 2, 4]);
        assert_eq!(ranks(&entries), vec![Some(1), None, None, None]);
    }

    #[test]
    fn test_empty_and_all_invalid_groups() {
        assert!(rank_entries(Vec::new(), true).is_empty());

        let rows = vec![
            row(1, "EV0001", "Shot Put", None, ResultStatus::NotYetStart),
            row(2, "EV0001", "Shot Put", Some(8.0), ResultStatus::Disqualification),
        ];
        let entries = rank_entries(rows, false);
        assert_eq!(ranks(&entries), vec![None, None]);
    }

    #[test]
    fn test_ties_are_detected_in_hundredths() {
        let summed = 0.1 + 0.2;
        let rows = vec![done(1, "Javelin", summed), done(2, "Javelin", 0.3)];

        let entries = rank_entries(rows, false);

        assert_eq!(ranks(&entries), vec![Some(1), Some(1)]);
    }

    #[test]
    fn test_large_distinct_values_do_not_tie() {
        let rows = vec![done(1, "Softball", 1e17), done(2, "Softball", 9e17)];

        let entries = rank_entries(rows, false);

        assert_eq!(ids(&entries), vec![2, 1]);
        assert_eq!(ranks(&entries), vec![Some(1), Some(2)]);
    }

    #[test]
    fn test_ranks_never_decrease_down_the_table() {
        let values = [14.2, 13.9, 14.2, 15.0, 13.9, 13.1, 14.2];
        let rows = values
            .iter()
            .enumerate()
            .map(|(i, v)| done(i as i64 + 1, "200 meters", *v))
            .collect();

        let entries = rank_entries(rows, true);

        let ranks: Vec<u32> = entries.iter().filter_map(|e| e.rank).collect();
        assert!(ranks.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(ranks, vec![1, 2, 2, 4, 4, 4, 7]);
    }

    #[test]
    fn test_rank_results_groups_by_event_in_id_order() {
        let rows = vec![
            row(1, "EV0002", "Shot Put", Some(7.5), ResultStatus::Completed),
            row(2, "EV0001", "60 meters", Some(9.1), ResultStatus::Completed),
            row(3, "EV0002", "Shot Put", Some(8.2), ResultStatus::Completed),
        ];

        let standings = rank_results(rows);

        assert_eq!(standings.len(), 2);
        assert_eq!(standings[0].event_id, "EV0001");
        assert!(standings[0].time_based);
        assert_eq!(standings[0].category, "Boys A");
        assert_eq!(standings[1].event_name, "Shot Put");
        assert!(!standings[1].time_based);
        assert_eq!(ids(&standings[1].entries), vec![3, 1]);
    }

    #[test]
    fn test_retain_entries_keeps_original_ranks() {
        let rows = vec![
            row(1, "EV0001", "100 meters", Some(12.0), ResultStatus::Completed),
            row(2, "EV0001", "100 meters", Some(12.5), ResultStatus::Completed),
            row(3, "EV0002", "Long Jump", Some(4.0), ResultStatus::Completed),
        ];
        let standings = rank_results(rows);

        let filtered = retain_entries(standings, |entry| entry.row.athlete_id == "ATH002");

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].entries.len(), 1);
        assert_eq!(filtered[0].entries[0].rank, Some(2));
    }
}
