use serde::Deserialize;

/// `/events` query string
#[derive(Debug, Default, Deserialize)]
pub struct EventsQuery {
    pub sex: Option<String>,
    pub grade: Option<String>,
    pub status: Option<String>,
}
