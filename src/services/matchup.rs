use crate::api::client::{get_json, StatsApi};
use crate::api::endpoints;
use crate::api::models::MatchupResult;
use crate::error::StatsError;
use crate::roles::Role;
use std::sync::Arc;
use tracing::{debug, warn};

pub struct MatchupResolver {
    api: Arc<dyn StatsApi>,
}

impl MatchupResolver {
    pub fn new(api: Arc<dyn StatsApi>) -> Self {
        MatchupResolver { api }
    }

    /// Head-to-head statistics of `champion_a` against `champion_b` in `role`.
    ///
    /// A 404 from the server means the pair has no recorded games for this
    /// role and patch, and is reported as `MatchupNotFound`.
    pub fn resolve_matchup(
        &self,
        champion_a: &str,
        champion_b: &str,
        patch: &str,
        role: Role,
    ) -> Result<MatchupResult, StatsError> {
        let champion_a = required(champion_a, "first champion")?;
        let champion_b = required(champion_b, "second champion")?;
        let patch = required(patch, "patch")?;
        let lane = role.lane();

        let path = endpoints::matchup(champion_a, champion_b);
        let query = [
            ("patch", patch.to_string()),
            ("role", lane.as_str().to_string()),
        ];

        match get_json::<MatchupResult>(self.api.as_ref(), &path, &query) {
            Ok(result) => {
                debug!(champion_a, champion_b, games = result.games_played, "matchup resolved");
                if !result.win_rates_consistent(1.0) {
                    warn!(
                        champion_a,
                        champion_b,
                        a = result.champion_a.win_rate,
                        b = result.champion_b.win_rate,
                        "matchup win rates do not add up to 100"
                    );
                }
                Ok(result)
            }
            Err(e) if e.is_not_found() => Err(StatsError::MatchupNotFound {
                champion_a: champion_a.to_string(),
                champion_b: champion_b.to_string(),
                role: lane.as_str().to_string(),
                patch: patch.to_string(),
            }),
            Err(e) => Err(e),
        }
    }
}

fn required<'a>(value: &'a str, what: &str) -> Result<&'a str, StatsError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(StatsError::InvalidInput(format!("{} is required", what)))
    } else {
        Ok(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::{not_found, FakeStatsApi};
    use serde_json::json;

    fn matchup_body() -> serde_json::Value {
        json!({
            "championA": {"name": "Aatrox", "images": {"square": "a.png", "loading": "", "splash": ""},
                          "wins": 65, "winRate": 65.0},
            "championB": {"name": "Renekton", "wins": 35, "winRate": 35.0},
            "gamesPlayed": 100,
            "patch": "15.19",
            "role": "TOP"
        })
    }

    #[test]
    fn test_resolves_with_backend_role() {
        let fake = Arc::new(FakeStatsApi::new(|_| Ok(matchup_body())));
        let resolver = MatchupResolver::new(fake.clone());

        let result = resolver
            .resolve_matchup(" Aatrox ", "Renekton", "15.19", Role::Top)
            .unwrap();

        assert_eq!(result.games_played, 100);
        assert_eq!(result.champion_a.images.square, "a.png");
        let call = &fake.calls()[0];
        assert_eq!(call.path, "/stats/matchups/Aatrox/Renekton");
        assert_eq!(call.param("role"), Some("TOP"));
        assert_eq!(call.param("patch"), Some("15.19"));
    }

    #[test]
    fn test_support_label_maps_to_utility() {
        let fake = Arc::new(FakeStatsApi::new(|_| Ok(matchup_body())));
        let resolver = MatchupResolver::new(fake.clone());

        resolver
            .resolve_matchup("Thresh", "Nautilus", "15.19", Role::Support)
            .unwrap();

        assert_eq!(fake.calls()[0].param("role"), Some("UTILITY"));
    }

    #[test]
    fn test_404_is_matchup_not_found() {
        let fake = Arc::new(FakeStatsApi::new(|_| Err(not_found())));
        let resolver = MatchupResolver::new(fake);

        let err = resolver
            .resolve_matchup("Teemo", "Yuumi", "15.19", Role::Mid)
            .unwrap_err();

        match err {
            StatsError::MatchupNotFound {
                champion_a,
                champion_b,
                role,
                patch,
            } => {
                assert_eq!(champion_a, "Teemo");
                assert_eq!(champion_b, "Yuumi");
                assert_eq!(role, "MIDDLE");
                assert_eq!(patch, "15.19");
            }
            other => panic!("expected MatchupNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_other_failures_surface_unchanged() {
        let fake = Arc::new(FakeStatsApi::new(|_| Err(StatsError::TimeoutError(10))));
        let resolver = MatchupResolver::new(fake);

        let err = resolver
            .resolve_matchup("Ahri", "Zed", "15.19", Role::Mid)
            .unwrap_err();
        assert!(matches!(err, StatsError::TimeoutError(10)));
        assert!(!err.user_message().is_empty());
    }

    #[test]
    fn test_blank_champion_is_rejected_without_request() {
        let fake = Arc::new(FakeStatsApi::new(|_| Ok(matchup_body())));
        let resolver = MatchupResolver::new(fake.clone());

        assert!(matches!(
            resolver.resolve_matchup("  ", "Zed", "15.19", Role::Mid),
            Err(StatsError::InvalidInput(_))
        ));
        assert!(fake.calls().is_empty());
    }
}
