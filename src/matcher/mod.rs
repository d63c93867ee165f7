//! Matcher layer: composable predicates and traversal over a syntax tree
//!
//! Build a [`Matcher`] from the free functions in this module, validate it
//! into a [`Query`], then run it over a tree:
//!
//! ```
//! use hdlkit::matcher::{Query, TraversalOrder, has_descendant, node};
//! use hdlkit::syntax::NodeKind;
//! # use hdlkit::syntax::TreeBuilder;
//! # let tree = TreeBuilder::new("").finish(None).unwrap();
//!
//! let query = Query::new(
//!     node(NodeKind::MODULE_DECLARATION)
//!         .bind("module")
//!         .and(has_descendant(node(NodeKind::ALWAYS_STATEMENT))),
//! )
//! .unwrap();
//! for found in query.search(&tree, TraversalOrder::PreOrder) {
//!     let _module = found.node("module");
//! }
//! ```
//!
//! Depends on [`crate::syntax`].

mod pattern;
mod query;
mod search;
pub mod verilog;

pub use pattern::{
    Matcher, Step, all_of, any, any_of, child, has_ancestor, has_child, has_descendant, leaf,
    min_children, node, path, path_to, preprocessing, unless, unwrap_identifier,
};
pub use query::{MatchResult, MatcherError, Query};
pub use search::{Matches, TraversalOrder};
