//! Kind taxonomy and tree model tests

pub mod tests_kinds;
pub mod tests_tree;
