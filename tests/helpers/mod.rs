//! Shared test helpers

pub mod fact_assertions;
pub mod tree_fixtures;
