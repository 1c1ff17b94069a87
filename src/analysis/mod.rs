pub mod champion_stats;
