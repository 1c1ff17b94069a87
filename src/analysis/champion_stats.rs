use crate::api::models::ChampionStat;
use crate::roles::RoleFilter;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Known tiers, best first. Anything else sorts after `F`.
pub const TIER_ORDER: [&str; 8] = ["S+", "S", "A", "B", "C", "D", "E", "F"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChampionFilter {
    pub role: RoleFilter,
    pub name: String,
}

impl ChampionFilter {
    pub fn new(role: RoleFilter, name: &str) -> Self {
        ChampionFilter {
            role,
            name: name.to_string(),
        }
    }

    pub fn matches(&self, stat: &ChampionStat) -> bool {
        let role_matches = match self.role.lane() {
            None => true,
            Some(lane) => stat.primary_lane() == Some(lane),
        };

        let needle = self.name.trim().to_lowercase();
        let name_matches = needle.is_empty() || stat.name.to_lowercase().contains(&needle);

        role_matches && name_matches
    }

    /// Returns the matching champions in their fetched order.
    pub fn apply(&self, stats: &[ChampionStat]) -> Vec<ChampionStat> {
        stats.iter().filter(|s| self.matches(s)).cloned().collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankedChampion {
    pub stat: ChampionStat,
    /// Share of the filtered population's games, in percent.
    pub pick_rate: f64,
}

pub fn pick_rate(games_played: u64, total_games: u64) -> f64 {
    if total_games == 0 {
        0.0
    } else {
        (games_played as f64 / total_games as f64) * 100.0
    }
}

/// Pairs every champion with its pick rate relative to `filtered` itself.
pub fn with_pick_rates(filtered: &[ChampionStat]) -> Vec<RankedChampion> {
    let total_games: u64 = filtered.iter().map(|s| s.games_played).sum();

    filtered
        .iter()
        .map(|stat| RankedChampion {
            stat: stat.clone(),
            pick_rate: pick_rate(stat.games_played, total_games),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct TierGroup {
    pub tier: String,
    pub champions: Vec<ChampionStat>,
}

pub fn tier_precedence(tier: &str) -> usize {
    TIER_ORDER
        .iter()
        .position(|known| *known == tier)
        .unwrap_or(TIER_ORDER.len())
}

fn compare_tiers(a: &str, b: &str) -> Ordering {
    tier_precedence(a)
        .cmp(&tier_precedence(b))
        .then_with(|| a.cmp(b))
}

/// Partitions champions by tier. Groups follow [`TIER_ORDER`], champions
/// inside a group follow `rank` ascending.
pub fn group_by_tier(stats: &[ChampionStat]) -> Vec<TierGroup> {
    let mut by_tier: HashMap<&str, Vec<ChampionStat>> = HashMap::new();
    for stat in stats {
        by_tier.entry(stat.tier.as_str()).or_default().push(stat.clone());
    }

    let mut groups: Vec<TierGroup> = by_tier
        .into_iter()
        .map(|(tier, mut champions)| {
            champions.sort_by_key(|c| c.rank);
            TierGroup {
                tier: tier.to_string(),
                champions,
            }
        })
        .collect();

    groups.sort_by(|a, b| compare_tiers(&a.tier, &b.tier));
    groups
}

/// Everything the tier list shows for one filter selection.
#[derive(Debug, Clone, PartialEq)]
pub struct TierListView {
    pub champions: Vec<RankedChampion>,
    pub groups: Vec<TierGroup>,
}

pub fn build_view(fetched: &[ChampionStat], filter: &ChampionFilter) -> TierListView {
    let filtered = filter.apply(fetched);
    TierListView {
        champions: with_pick_rates(&filtered),
        groups: group_by_tier(&filtered),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::ChampionImages;
    use crate::roles::Role;

    fn champion(name: &str, games: u64, tier: &str, rank: u32, role: Option<&str>) -> ChampionStat {
        ChampionStat {
            id: name.len() as i64,
            name: name.to_string(),
            win_rate: 50.0,
            games_played: games,
            wins: games / 2,
            losses: games - games / 2,
            ban_rate: 1.0,
            kda: 2.0,
            dpm: 600.0,
            cspm: 6.0,
            gpm: 400.0,
            tier: tier.to_string(),
            rank,
            primary_role: role.map(str::to_string),
            images: ChampionImages::default(),
        }
    }

    fn sample() -> Vec<ChampionStat> {
        vec![
            champion("Aatrox", 4500, "S", 2, Some("TOP")),
            champion("Ahri", 3200, "A", 1, Some("MIDDLE")),
            champion("Lee Sin", 8000, "S+", 1, Some("JUNGLE")),
            champion("Thresh", 3800, "A", 2, Some("UTILITY")),
            champion("Kai'Sa", 9100, "S", 1, Some("BOTTOM")),
            champion("Darius", 2900, "A", 3, Some("TOP")),
            champion("Bard", 700, "Unknown", 0, None),
        ]
    }

    #[test]
    fn test_pick_rates_sum_to_hundred() {
        let ranked = with_pick_rates(&sample());
        let sum: f64 = ranked.iter().map(|r| r.pick_rate).sum();
        assert!((sum - 100.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_games_gives_zero_pick_rates() {
        let stats = vec![
            champion("Annie", 0, "B", 1, Some("MIDDLE")),
            champion("Zed", 0, "B", 2, Some("MIDDLE")),
        ];
        let ranked = with_pick_rates(&stats);
        assert!(ranked.iter().all(|r| r.pick_rate == 0.0));
    }

    #[test]
    fn test_pick_rate_uses_filtered_denominator() {
        let filter = ChampionFilter::new(RoleFilter::Only(Role::Top), "");
        let view = build_view(&sample(), &filter);
        assert_eq!(view.champions.len(), 2);
        let aatrox = &view.champions[0];
        assert_eq!(aatrox.stat.name, "Aatrox");
        assert!((aatrox.pick_rate - 4500.0 / 7400.0 * 100.0).abs() < 1e-9);
        let sum: f64 = view.champions.iter().map(|r| r.pick_rate).sum();
        assert!((sum - 100.0).abs() < 1e-6);
    }

    #[test]
    fn test_tier_group_order() {
        let stats = vec![
            champion("One", 1, "S+", 1, None),
            champion("Two", 1, "A", 1, None),
            champion("Three", 1, "S", 1, None),
            champion("Four", 1, "Unknown", 1, None),
        ];
        let tiers: Vec<String> = group_by_tier(&stats).into_iter().map(|g| g.tier).collect();
        assert_eq!(tiers, vec!["S+", "S", "A", "Unknown"]);
    }

    #[test]
    fn test_unknown_tiers_sorted_lexicographically_after_known() {
        let stats = vec![
            champion("One", 1, "Z", 1, None),
            champion("Two", 1, "F", 1, None),
            champion("Three", 1, "N/A", 1, None),
        ];
        let tiers: Vec<String> = group_by_tier(&stats).into_iter().map(|g| g.tier).collect();
        assert_eq!(tiers, vec!["F", "N/A", "Z"]);
    }

    #[test]
    fn test_rank_order_within_tier() {
        let stats = vec![
            champion("Second", 1, "S+", 2, None),
            champion("First", 1, "S+", 1, None),
            champion("Unranked", 1, "S+", 0, None),
        ];
        let groups = group_by_tier(&stats);
        assert_eq!(groups.len(), 1);
        let names: Vec<&str> = groups[0].champions.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Unranked", "First", "Second"]);
    }

    #[test]
    fn test_all_role_filter_is_identity() {
        let stats = sample();
        let filtered = ChampionFilter::new(RoleFilter::All, "").apply(&stats);
        assert_eq!(filtered, stats);
    }

    #[test]
    fn test_role_filter_excludes_champions_without_role() {
        let filter = ChampionFilter::new(RoleFilter::Only(Role::Support), "");
        let names: Vec<String> = filter.apply(&sample()).into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Thresh"]);
    }

    #[test]
    fn test_name_filter_is_trimmed_and_case_insensitive() {
        let filter = ChampionFilter::new(RoleFilter::All, "  I'S ");
        let names: Vec<String> = filter.apply(&sample()).into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Kai'Sa"]);
    }

    #[test]
    fn test_build_view_groups_filtered_set() {
        let filter = ChampionFilter::new(RoleFilter::All, "a");
        let view = build_view(&sample(), &filter);
        let tiers: Vec<&str> = view.groups.iter().map(|g| g.tier.as_str()).collect();
        assert_eq!(tiers, vec!["S", "A", "Unknown"]);
        assert_eq!(view.groups[0].champions[0].name, "Kai'Sa");
    }
}
