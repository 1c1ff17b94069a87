use crate::api::client::{get_json, StatsApi};
use crate::api::endpoints;
use crate::api::models::{ChampionPage, ChampionStat, FetchParams, PatchInfo, ProcessedMatchesDto, SortBy};
use crate::error::StatsError;
use std::sync::Arc;
use std::thread;
use tracing::debug;

/// Headline numbers of the landing view.
#[derive(Debug, Clone, PartialEq)]
pub struct HeroStats {
    pub total_matches: u64,
    pub most_picked_champion: String,
    pub most_picked_games: u64,
    pub biggest_win_rate_champion: String,
    pub biggest_win_rate: f64,
    pub patch: String,
    pub full_version: String,
}

pub struct SummaryService {
    api: Arc<dyn StatsApi>,
}

impl SummaryService {
    pub fn new(api: Arc<dyn StatsApi>) -> Self {
        SummaryService { api }
    }

    /// Runs the three summary queries concurrently and waits for all of them.
    /// Fails as a whole if any of them fails.
    pub fn hero_stats(&self, patch: &PatchInfo) -> Result<HeroStats, StatsError> {
        let (total, most_picked, best_win_rate) = thread::scope(|s| {
            let total = s.spawn(|| self.processed_matches());
            let most_picked = s.spawn(|| self.top_champion(&patch.patch, SortBy::GamesPlayed));
            let best_win_rate = s.spawn(|| self.top_champion(&patch.patch, SortBy::WinRate));

            (join(total), join(most_picked), join(best_win_rate))
        });

        let total_matches = total.map_err(|e| StatsError::fetch("summary statistics", e))?;
        let most_picked = most_picked.map_err(|e| StatsError::fetch("summary statistics", e))?;
        let best_win_rate = best_win_rate.map_err(|e| StatsError::fetch("summary statistics", e))?;

        debug!(patch = %patch.patch, total_matches, "summary statistics loaded");

        Ok(HeroStats {
            total_matches,
            most_picked_champion: most_picked.name,
            most_picked_games: most_picked.games_played,
            biggest_win_rate_champion: best_win_rate.name,
            biggest_win_rate: best_win_rate.win_rate,
            patch: patch.patch.clone(),
            full_version: patch.full_version.clone(),
        })
    }

    fn processed_matches(&self) -> Result<u64, StatsError> {
        let dto: ProcessedMatchesDto = get_json(self.api.as_ref(), endpoints::PROCESSED_MATCHES, &[])?;
        Ok(dto.count)
    }

    fn top_champion(&self, patch: &str, sort_by: SortBy) -> Result<ChampionStat, StatsError> {
        let query = FetchParams::top_by(sort_by).to_query(patch);
        let page: ChampionPage = get_json(self.api.as_ref(), endpoints::CHAMPION_STATS, &query)?;
        page.data
            .into_iter()
            .next()
            .ok_or_else(|| StatsError::FetchError {
                what: "top champion",
                reason: format!("no rows for patch {} sorted by {}", patch, sort_by.as_str()),
            })
    }
}

fn join<T>(handle: thread::ScopedJoinHandle<'_, Result<T, StatsError>>) -> Result<T, StatsError> {
    handle
        .join()
        .unwrap_or_else(|_| {
            Err(StatsError::FetchError {
                what: "summary statistics",
                reason: "query thread panicked".to_string(),
            })
        })
}
