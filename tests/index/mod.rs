//! Fact emission tests

pub mod tests_emission;
pub mod tests_parallel;
