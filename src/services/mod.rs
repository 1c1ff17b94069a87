pub mod catalog;
pub mod champions;
pub mod matchup;
pub mod patch;
pub mod summary;
