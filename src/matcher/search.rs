//! Lazy traversal that yields matches

use std::iter::FusedIterator;

use tracing::trace;

use super::query::{MatchResult, Query};
use crate::syntax::{Postorder, Preorder, Symbol};

/// Order in which a search visits symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TraversalOrder {
    /// Parents before children.
    #[default]
    PreOrder,
    /// Children before parents.
    PostOrder,
}

#[derive(Debug, Clone)]
enum Walk<'t> {
    Pre(Preorder<'t>),
    Post(Postorder<'t>),
    Done,
}

/// Matches of one [`Query`], produced on demand.
///
/// Dropping the iterator early stops the traversal; nothing past the last
/// yielded match has been visited.
#[derive(Debug, Clone)]
pub struct Matches<'q, 't> {
    query: &'q Query,
    walk: Walk<'t>,
}

impl<'q, 't> Matches<'q, 't> {
    pub(crate) fn new(query: &'q Query, start: Option<Symbol<'t>>, order: TraversalOrder) -> Self {
        let walk = match (start, order) {
            (None, _) => Walk::Done,
            (Some(start), TraversalOrder::PreOrder) => Walk::Pre(start.preorder()),
            (Some(start), TraversalOrder::PostOrder) => Walk::Post(start.postorder()),
        };
        Self { query, walk }
    }
}

impl<'t> Iterator for Matches<'_, 't> {
    type Item = MatchResult<'t>;

    fn next(&mut self) -> Option<MatchResult<'t>> {
        loop {
            let symbol = match &mut self.walk {
                Walk::Pre(walk) => walk.next(),
                Walk::Post(walk) => walk.next(),
                Walk::Done => None,
            };
            let Some(symbol) = symbol else {
                self.walk = Walk::Done;
                return None;
            };
            if let Some(result) = self.query.matches(symbol) {
                trace!(symbol = ?symbol, bindings = result.len(), "matched");
                return Some(result);
            }
        }
    }
}

impl FusedIterator for Matches<'_, '_> {}
