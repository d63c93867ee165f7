//! Matcher and query tests over realistic trees

pub mod tests_queries;
