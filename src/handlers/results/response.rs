//! Result pages and their view models

use askama::Template;

use crate::{
    handlers::page::{PageContext, SelectOption},
    models::ResultDetail,
    ranking::{EventStanding, RankedEntry},
};

/// Table row of the ranked listing
#[derive(Debug, Clone)]
pub struct EntryView {
    pub result_id: i64,
    /// Rank, or "-" when unranked
    pub rank: String,
    pub athlete_id: String,
    pub name: String,
    pub house: String,
    pub value: String,
    pub status: String,
}

impl From<RankedEntry> for EntryView {
    fn from(entry: RankedEntry) -> Self {
        let row = entry.row;
        Self {
            result_id: row.result_id,
            rank: entry.rank.map_or_else(|| "-".to_string(), |r| r.to_string()),
            athlete_id: row.athlete_id,
            name: row.name,
            house: row.house,
            value: format_value(row.result),
            status: row.status.to_string(),
        }
    }
}

/// One event's table
#[derive(Debug, Clone)]
pub struct StandingView {
    pub event_id: String,
    pub event_name: String,
    pub category: String,
    pub order: &'static str,
    pub entries: Vec<EntryView>,
}

impl From<EventStanding> for StandingView {
    fn from(standing: EventStanding) -> Self {
        Self {
            event_id: standing.event_id,
            event_name: standing.event_name,
            category: standing.category,
            order: if standing.time_based { "lowest first" } else { "highest first" },
            entries: standing.entries.into_iter().map(EntryView::from).collect(),
        }
    }
}

#[derive(Template)]
#[template(path = "list_results.html")]
pub struct ListResultsTemplate {
    pub page: PageContext,
    pub standings: Vec<StandingView>,
    pub entry_count: usize,
    pub event_options: Vec<SelectOption>,
    pub sex_options: Vec<SelectOption>,
    pub grade_options: Vec<SelectOption>,
    pub status_options: Vec<SelectOption>,
    /// Current athlete filter
    pub athlete: String,
}

#[derive(Template)]
#[template(path = "add_result.html")]
pub struct AddResultTemplate {
    pub page: PageContext,
    pub status_options: Vec<SelectOption>,
}

#[derive(Template)]
#[template(path = "edit_result.html")]
pub struct EditResultTemplate {
    pub page: PageContext,
    pub result_id: i64,
    pub athlete_id: String,
    pub athlete_name: String,
    pub event_id: String,
    pub event_name: String,
    pub event_status: String,
    pub value: String,
    pub status_options: Vec<SelectOption>,
}

impl EditResultTemplate {
    pub fn new(page: PageContext, detail: ResultDetail, status_options: Vec<SelectOption>) -> Self {
        Self {
            page,
            result_id: detail.result_id,
            athlete_id: detail.athlete_id,
            athlete_name: detail.athlete_name,
            event_id: detail.event_id,
            event_name: detail.event_name,
            event_status: detail.event_status.to_string(),
            value: detail.result.map(|v| format!("{v:.2}")).unwrap_or_default(),
            status_options,
        }
    }
}

/// Two decimals, or "-" for no value
pub fn format_value(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.2}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(Some(12.3)), "12.30");
        assert_eq!(format_value(Some(4.5)), "4.50");
        assert_eq!(format_value(None), "-");
    }
}
