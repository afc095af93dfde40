use serde::Deserialize;

/// `/athletes` query string
#[derive(Debug, Default, Deserialize)]
pub struct AthletesQuery {
    pub house: Option<String>,
    pub sex: Option<String>,
    pub grade: Option<String>,
}
