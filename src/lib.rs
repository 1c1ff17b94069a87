//! Client-side data layer for champion statistics: patch resolution,
//! ranked and tiered champion views, and head-to-head matchups.

pub mod analysis;
pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod refresh;
pub mod roles;
pub mod services;
pub mod view_state;

pub use api::client::{HttpStatsClient, StatsApi};
pub use error::StatsError;
