use crate::roles::Lane;
use serde::{Deserialize, Deserializer, Serialize};

/// Reads an explicit `null` as the field's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// Current patch response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchInfo {
    pub patch: String,
    #[serde(default)]
    pub full_version: String,
}

#[derive(Debug, Deserialize)]
pub struct PatchListDto {
    #[serde(default)]
    pub patches: Vec<PatchInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChampionImages {
    pub square: String,
    pub loading: String,
    pub splash: String,
}

// Champion stats response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChampionStat {
    #[serde(rename = "championId")]
    pub id: i64,
    #[serde(rename = "championName", alias = "name")]
    pub name: String,
    pub win_rate: f64,
    pub games_played: u64,
    #[serde(default)]
    pub wins: u64,
    #[serde(default)]
    pub losses: u64,
    #[serde(default)]
    pub ban_rate: f64,
    #[serde(default)]
    pub kda: f64,
    #[serde(default)]
    pub dpm: f64,
    #[serde(default)]
    pub cspm: f64,
    #[serde(default)]
    pub gpm: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tier: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rank: u32,
    #[serde(default)]
    pub primary_role: Option<String>,
    #[serde(default)]
    pub images: ChampionImages,
}

impl ChampionStat {
    /// Backend lane of the champion, `None` when absent or not a known lane.
    pub fn primary_lane(&self) -> Option<Lane> {
        self.primary_role.as_deref().and_then(Lane::from_backend)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChampionPage {
    #[serde(default)]
    pub data: Vec<ChampionStat>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub limit: u32,
}

// Matchup response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchupSide {
    pub name: String,
    #[serde(default)]
    pub images: ChampionImages,
    #[serde(default)]
    pub wins: u64,
    pub win_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchupResult {
    pub champion_a: MatchupSide,
    pub champion_b: MatchupSide,
    pub games_played: u64,
    pub patch: String,
    pub role: String,
}

impl MatchupResult {
    /// Whether both win rates add up to 100 within `tolerance` percentage points.
    pub fn win_rates_consistent(&self, tolerance: f64) -> bool {
        (self.champion_a.win_rate + self.champion_b.win_rate - 100.0).abs() <= tolerance
    }
}

#[derive(Debug, Deserialize)]
pub struct ProcessedMatchesDto {
    pub count: u64,
}

// Champion catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogChampion {
    pub id: String,
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub tier: String,
    #[serde(default)]
    pub win_rate: f64,
    #[serde(default)]
    pub pick_rate: f64,
    #[serde(default)]
    pub ban_rate: f64,
    #[serde(default)]
    pub matches: u64,
    #[serde(default)]
    pub image: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    #[default]
    WinRate,
    GamesPlayed,
    ChampionName,
    BanRate,
    Kda,
    Dpm,
    Cspm,
    Gpm,
}

impl SortBy {
    pub const ALL: [SortBy; 8] = [
        SortBy::WinRate,
        SortBy::GamesPlayed,
        SortBy::ChampionName,
        SortBy::BanRate,
        SortBy::Kda,
        SortBy::Dpm,
        SortBy::Cspm,
        SortBy::Gpm,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortBy::WinRate => "winRate",
            SortBy::GamesPlayed => "gamesPlayed",
            SortBy::ChampionName => "championName",
            SortBy::BanRate => "banRate",
            SortBy::Kda => "kda",
            SortBy::Dpm => "dpm",
            SortBy::Cspm => "cspm",
            SortBy::Gpm => "gpm",
        }
    }

    pub fn parse(value: &str) -> Option<SortBy> {
        SortBy::ALL
            .into_iter()
            .find(|s| s.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

/// Paging and ordering of a `/stats/champions` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchParams {
    pub page: u32,
    pub limit: u32,
    pub order: SortOrder,
    pub sort_by: SortBy,
}

impl Default for FetchParams {
    fn default() -> Self {
        FetchParams {
            page: 1,
            limit: 20,
            order: SortOrder::Desc,
            sort_by: SortBy::WinRate,
        }
    }
}

impl FetchParams {
    pub fn top_by(sort_by: SortBy) -> Self {
        FetchParams {
            page: 1,
            limit: 1,
            order: SortOrder::Desc,
            sort_by,
        }
    }

    pub fn to_query(self, patch: &str) -> Vec<(&'static str, String)> {
        vec![
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
            ("patch", patch.to_string()),
            ("order", self.order.as_str().to_string()),
            ("sortBy", self.sort_by.as_str().to_string()),
        ]
    }
}
