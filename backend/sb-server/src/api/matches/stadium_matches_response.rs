use sb_catalog::MatchRecord;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct StadiumMatchesResponse {
    pub stadium_id: String,
    pub matches: Vec<MatchRecord>,
}
