// Endpoint paths of the statistics server, relative to the configured base URL.

pub const API_PREFIX: &str = "/api/v1";

pub const CURRENT_PATCH: &str = "/champions/current-patch";
pub const CHAMPION_STATS: &str = "/stats/champions";
pub const PROCESSED_MATCHES: &str = "/stats/processed-matches";
pub const CHAMPIONS: &str = "/champions";

pub fn matchup(champion_a: &str, champion_b: &str) -> String {
    format!(
        "/stats/matchups/{}/{}",
        urlencoding::encode(champion_a),
        urlencoding::encode(champion_b)
    )
}

pub fn champion(id: &str) -> String {
    format!("{}/{}", CHAMPIONS, urlencoding::encode(id))
}

pub fn champions_by_role(label: &str) -> String {
    format!("{}/role/{}", CHAMPIONS, urlencoding::encode(label))
}
