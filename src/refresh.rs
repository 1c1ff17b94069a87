//! Refresh boards: one per view, re-run whenever the view's inputs change.
//!
//! Boards are shared by reference between the threads that trigger refreshes.
//! Overlapping refreshes are allowed; the display slot keeps the result of the
//! most recently started one.

use crate::analysis::champion_stats::{build_view, ChampionFilter, TierListView};
use crate::api::client::StatsApi;
use crate::api::models::{ChampionPage, FetchParams, MatchupResult};
use crate::roles::Role;
use crate::services::champions::ChampionAggregator;
use crate::services::matchup::MatchupResolver;
use crate::view_state::{LatestWins, ViewState};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchupInputs {
    pub champion_a: String,
    pub champion_b: String,
    pub patch: String,
    pub role: Role,
}

pub struct MatchupBoard {
    resolver: MatchupResolver,
    display: LatestWins<MatchupResult>,
}

impl MatchupBoard {
    pub fn new(api: Arc<dyn StatsApi>) -> Self {
        MatchupBoard {
            resolver: MatchupResolver::new(api),
            display: LatestWins::new(),
        }
    }

    /// Issues one matchup request. Returns whether its result was displayed.
    pub fn refresh(&self, inputs: &MatchupInputs) -> bool {
        let ticket = self.display.begin();
        let result = self.resolver.resolve_matchup(
            &inputs.champion_a,
            &inputs.champion_b,
            &inputs.patch,
            inputs.role,
        );
        self.display.complete(ticket, result)
    }

    pub fn state(&self) -> ViewState<MatchupResult> {
        self.display.state()
    }
}

pub struct TierListBoard {
    aggregator: ChampionAggregator,
    fetched: LatestWins<ChampionPage>,
}

impl TierListBoard {
    pub fn new(api: Arc<dyn StatsApi>) -> Self {
        TierListBoard {
            aggregator: ChampionAggregator::new(api),
            fetched: LatestWins::new(),
        }
    }

    /// Refetches the champion page for `patch`.
    pub fn refresh(&self, patch: &str, params: FetchParams) -> bool {
        let ticket = self.fetched.begin();
        let result = self.aggregator.fetch_ranked(patch, params);
        self.fetched.complete(ticket, result)
    }

    /// Derives the displayed tier list from the last applied fetch.
    /// Filter changes only need this, not a new request.
    pub fn view(&self, filter: &ChampionFilter) -> ViewState<TierListView> {
        self.fetched
            .with_state(|state| state.as_ref().map(|page| build_view(&page.data, filter)))
    }
}
