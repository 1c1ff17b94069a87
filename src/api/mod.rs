pub mod client;
pub mod endpoints;
#[cfg(test)]
pub mod fake;
pub mod models;
