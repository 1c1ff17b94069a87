use crate::analysis::champion_stats::{build_view, ChampionFilter, TierListView};
use crate::api::client::{get_json, StatsApi};
use crate::api::endpoints;
use crate::api::models::{ChampionPage, FetchParams};
use crate::error::StatsError;
use std::sync::Arc;
use tracing::debug;

pub struct ChampionAggregator {
    api: Arc<dyn StatsApi>,
}

impl ChampionAggregator {
    pub fn new(api: Arc<dyn StatsApi>) -> Self {
        ChampionAggregator { api }
    }

    /// One page of champion statistics for `patch`, ordered by the server.
    /// Every failure is reported as `FetchError`.
    pub fn fetch_ranked(&self, patch: &str, params: FetchParams) -> Result<ChampionPage, StatsError> {
        let query = params.to_query(patch);
        let page: ChampionPage = get_json(self.api.as_ref(), endpoints::CHAMPION_STATS, &query)
            .map_err(|e| StatsError::fetch("champion statistics", e))?;

        debug!(
            patch,
            rows = page.data.len(),
            total = page.total,
            "fetched champion statistics"
        );
        Ok(page)
    }

    /// Fetches a page and derives the filtered tier-list view from it.
    pub fn tier_list(
        &self,
        patch: &str,
        params: FetchParams,
        filter: &ChampionFilter,
    ) -> Result<TierListView, StatsError> {
        let page = self.fetch_ranked(patch, params)?;
        Ok(build_view(&page.data, filter))
    }
}
