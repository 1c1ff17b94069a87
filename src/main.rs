mod display;

use anyhow::Context;
use clap::{Parser, Subcommand};
use display::output::{
    display_catalog_champion, display_error, display_info, display_matchup, display_patch,
    display_summary, display_tier_list,
};
use indicatif::ProgressBar;
use lol_stats::analysis::champion_stats::ChampionFilter;
use lol_stats::api::models::{FetchParams, PatchInfo, SortBy, SortOrder};
use lol_stats::config::Config;
use lol_stats::roles::{Role, RoleFilter};
use lol_stats::services::catalog::ChampionCatalog;
use lol_stats::services::champions::ChampionAggregator;
use lol_stats::services::matchup::MatchupResolver;
use lol_stats::services::patch::PatchResolver;
use lol_stats::services::summary::SummaryService;
use lol_stats::{logging, HttpStatsClient, StatsApi, StatsError};
use std::sync::Arc;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "lol-stats")]
#[command(about = "Champion tier lists, matchups and patch statistics", long_about = None)]
struct Args {
    /// Statistics server base URL (overrides STATS_API_URL)
    #[arg(long)]
    api_url: Option<String>,

    /// Use this patch instead of resolving the newest one with data
    #[arg(long, global = true)]
    patch: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the newest patch that has statistics
    Patch,

    /// Show total matches, most picked and highest win rate champion
    Summary,

    /// Show the champion tier list
    Tiers {
        /// Role filter: All, Top, Jungle, Mid, Bot or Support
        #[arg(short, long, default_value = "All")]
        role: String,

        /// Only champions whose name contains this text
        #[arg(short, long, default_value = "")]
        name: String,

        /// winRate, gamesPlayed, championName, banRate, kda, dpm, cspm or gpm
        #[arg(long, default_value = "winRate")]
        sort_by: String,

        /// Sort ascending instead of descending
        #[arg(long)]
        asc: bool,

        #[arg(long, default_value = "1")]
        page: u32,

        #[arg(short, long, default_value = "20")]
        limit: u32,
    },

    /// Compare two champions head to head
    Matchup {
        champion_a: String,
        champion_b: String,

        /// Top, Jungle, Mid, Bot or Support
        #[arg(short, long, default_value = "Mid")]
        role: String,
    },

    /// Look up a champion in the catalog
    Champion { id: String },
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        match e.downcast_ref::<StatsError>() {
            Some(stats_err) => {
                tracing::debug!(error = %stats_err, "command failed");
                display_error(&stats_err.user_message());
            }
            None => display_error(&format!("{:#}", e)),
        }
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = Config::from_env(args.api_url.as_deref())?;
    logging::setup_logging(&config.log_level);

    let api: Arc<dyn StatsApi> = Arc::new(HttpStatsClient::new(&config));

    match args.command {
        Command::Patch => {
            let patch = resolve_patch(&api, args.patch)?;
            display_patch(&patch);
        }
        Command::Summary => {
            let patch = resolve_patch(&api, args.patch)?;
            let stats = SummaryService::new(api.clone()).hero_stats(&patch)?;
            display_summary(&stats);
        }
        Command::Tiers {
            role,
            name,
            sort_by,
            asc,
            page,
            limit,
        } => {
            let role: RoleFilter = role.parse()?;
            let sort_by = SortBy::parse(&sort_by)
                .with_context(|| format!("unknown sort field \"{}\"", sort_by))?;
            let params = FetchParams {
                page,
                limit,
                order: if asc { SortOrder::Asc } else { SortOrder::Desc },
                sort_by,
            };

            let patch = resolve_patch(&api, args.patch)?;
            let filter = ChampionFilter::new(role, &name);
            let view = ChampionAggregator::new(api.clone()).tier_list(&patch.patch, params, &filter)?;
            display_tier_list(&view, &patch.patch);
        }
        Command::Matchup {
            champion_a,
            champion_b,
            role,
        } => {
            let role = Role::from_label(&role)?;
            let patch = resolve_patch(&api, args.patch)?;
            let result = MatchupResolver::new(api.clone()).resolve_matchup(
                &champion_a,
                &champion_b,
                &patch.patch,
                role,
            )?;
            display_matchup(&result);
        }
        Command::Champion { id } => {
            let champion = ChampionCatalog::new(api.clone()).by_id(&id)?;
            display_catalog_champion(&champion);
        }
    }

    Ok(())
}

fn resolve_patch(api: &Arc<dyn StatsApi>, explicit: Option<String>) -> Result<PatchInfo, StatsError> {
    if let Some(patch) = explicit {
        display_info(&format!("Using patch {}", patch));
        return Ok(PatchInfo {
            patch,
            full_version: String::new(),
        });
    }

    let pb = ProgressBar::new_spinner();
    pb.set_message("Looking for the newest patch with statistics");
    pb.enable_steady_tick(Duration::from_millis(100));

    let resolved = PatchResolver::new(api.clone()).resolve_patch_with_data();
    pb.finish_and_clear();

    resolved
}
