use colored::*;
use lol_stats::analysis::champion_stats::TierListView;
use lol_stats::api::models::{CatalogChampion, MatchupResult, PatchInfo};
use lol_stats::services::summary::HeroStats;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct ChampionRow {
    #[tabled(rename = "#")]
    position: String,
    tier: String,
    champion: String,
    role: String,
    win_rate: String,
    pick_rate: String,
    ban_rate: String,
    games: String,
    kda: String,
}

#[derive(Tabled)]
struct MatchupRow {
    champion: String,
    wins: String,
    win_rate: String,
}

fn colored_tier(tier: &str) -> String {
    match tier {
        "S+" | "S" => tier.yellow().bold().to_string(),
        "A" => tier.blue().to_string(),
        "" => "-".dimmed().to_string(),
        _ => tier.to_string(),
    }
}

pub fn display_patch(patch: &PatchInfo) {
    println!(
        "{} {} ({})",
        "📦 Patch:".bold(),
        patch.patch.cyan().bold(),
        if patch.full_version.is_empty() {
            "unknown build"
        } else {
            patch.full_version.as_str()
        }
    );
}

pub fn display_summary(stats: &HeroStats) {
    println!("\n{}", format!("📊 PATCH {} OVERVIEW", stats.patch).bold().cyan());
    println!("{}\n", "=".repeat(60).cyan());
    println!("{} {}", "Matches analysed:".bold(), stats.total_matches.to_string().green());
    println!(
        "{} {} ({} games)",
        "Most picked:".bold(),
        stats.most_picked_champion,
        stats.most_picked_games
    );
    println!(
        "{} {} ({:.2}% WR)",
        "Highest win rate:".bold(),
        stats.biggest_win_rate_champion,
        stats.biggest_win_rate
    );
    if !stats.full_version.is_empty() {
        println!("{} {}", "Build:".bold(), stats.full_version.dimmed());
    }
    println!();
}

pub fn display_tier_list(view: &TierListView, patch: &str) {
    println!("\n{}", format!("🏆 TIER LIST (Patch {})", patch).bold().cyan());
    println!("{}\n", "=".repeat(80).cyan());

    if view.champions.is_empty() {
        println!("{}", "No champions match the current filters".yellow());
        return;
    }

    let mut rows = vec![];
    for (idx, ranked) in view.champions.iter().enumerate() {
        let stat = &ranked.stat;
        rows.push(ChampionRow {
            position: format!("{}", idx + 1),
            tier: colored_tier(&stat.tier),
            champion: stat.name.clone(),
            role: stat
                .primary_lane()
                .map(|lane| lane.role().label().to_string())
                .unwrap_or_else(|| "-".to_string()),
            win_rate: format!("{:.2}%", stat.win_rate),
            pick_rate: format!("{:.2}%", ranked.pick_rate),
            ban_rate: format!("{:.2}%", stat.ban_rate),
            games: stat.games_played.to_string(),
            kda: format!("{:.2}", stat.kda),
        });
    }

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);

    println!("\n{}", "Tiers".bold().yellow());
    for group in &view.groups {
        let names: Vec<&str> = group.champions.iter().map(|c| c.name.as_str()).collect();
        let label = if group.tier.is_empty() { "-" } else { group.tier.as_str() };
        println!("  {:<8} {}", colored_tier(label), names.join(", "));
    }
    println!();
}

pub fn display_matchup(result: &MatchupResult) {
    println!(
        "\n{}",
        format!(
            "⚔️  {} vs {} ({}, patch {})",
            result.champion_a.name, result.champion_b.name, result.role, result.patch
        )
        .bold()
        .cyan()
    );
    println!("{}\n", "=".repeat(60).cyan());

    let rows = [&result.champion_a, &result.champion_b]
        .iter()
        .map(|side| MatchupRow {
            champion: side.name.clone(),
            wins: side.wins.to_string(),
            win_rate: format!("{:.2}%", side.win_rate),
        })
        .collect::<Vec<_>>();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);
    println!("{} {}\n", "Games played:".bold(), result.games_played);

    let diff = result.champion_a.win_rate - result.champion_b.win_rate;
    if diff.abs() >= 4.0 {
        let favoured = if diff > 0.0 {
            &result.champion_a.name
        } else {
            &result.champion_b.name
        };
        println!("  {} {} is favoured in this lane\n", "🔥".red(), favoured);
    }
}

pub fn display_catalog_champion(champion: &CatalogChampion) {
    println!(
        "\n{} {} ({}, tier {})",
        "🛡️".cyan(),
        champion.name.bold(),
        champion.role,
        colored_tier(&champion.tier)
    );
    println!(
        "  Win rate {:.1}% · Pick rate {:.1}% · Ban rate {:.1}% · {} matches\n",
        champion.win_rate, champion.pick_rate, champion.ban_rate, champion.matches
    );
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}
