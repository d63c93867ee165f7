//! Append-only construction of a [`SyntaxTree`]
//!
//! The external parser drives a [`TreeBuilder`] bottom-up, the way a shift/reduce
//! parser builds its value stack: tokens become leaves, each reduction becomes
//! a node that adopts already-built children. A symbol can be adopted once.

use std::sync::Arc;

use smol_str::SmolStr;
use thiserror::Error;
use tracing::trace;

use super::tree::{Leaf, LeafId, NodeData, NodeId, SymbolId, SyntaxTree};
use super::{NodeKind, TokenKind};
use crate::base::{TextRange, TextSize};

/// Contract violations while building a tree.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("symbol {0:?} was not created by this builder")]
    UnknownSymbol(SymbolId),

    #[error("symbol {0:?} already has a parent")]
    AlreadyAttached(SymbolId),

    #[error("symbol {0:?} appears twice among the children of one node")]
    DuplicateChild(SymbolId),

    #[error("range {range:?} is outside the source text (length {len:?}) or splits a character")]
    RangeOutsideSource { range: TextRange, len: TextSize },

    #[error("root symbol {0:?} is a child of another node")]
    RootHasParent(SymbolId),

    #[error("tree has more than u32::MAX elements")]
    TooLarge,
}

impl TreeError {
    pub fn range_outside_source(range: TextRange, len: TextSize) -> Self {
        Self::RangeOutsideSource { range, len }
    }
}

/// Builder for one file's tree.
#[derive(Debug, Clone)]
pub struct TreeBuilder {
    source: Arc<str>,
    leaves: Vec<Leaf>,
    nodes: Vec<NodeData>,
    slots: Vec<Option<SymbolId>>,
    leaf_parents: Vec<Option<NodeId>>,
    node_parents: Vec<Option<NodeId>>,
    /// A leaf did not fit the arena; nothing built from here on is valid.
    too_large: bool,
}

/// `len` as a 32-bit arena index or count.
pub(super) fn arena_index(len: usize) -> Result<u32, TreeError> {
    u32::try_from(len).map_err(|_| TreeError::TooLarge)
}

impl TreeBuilder {
    pub fn new(source: impl Into<Arc<str>>) -> Self {
        Self {
            source: source.into(),
            leaves: Vec::new(),
            nodes: Vec::new(),
            slots: Vec::new(),
            leaf_parents: Vec::new(),
            node_parents: Vec::new(),
            too_large: false,
        }
    }

    /// The source text being described.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Append a leaf exactly as the lexer reported it.
    ///
    /// The range is not checked against the source: token streams from
    /// macro expansion or a mismatched lexer may carry ranges that do not
    /// fit, and consumers that need valid ranges report them downstream.
    ///
    /// A leaf past `u32::MAX` is not stored; every later [`node`](Self::node)
    /// and [`finish`](Self::finish) then fails with [`TreeError::TooLarge`].
    pub fn leaf(&mut self, kind: TokenKind, range: TextRange, text: impl Into<SmolStr>) -> SymbolId {
        let Ok(index) = arena_index(self.leaves.len()) else {
            self.too_large = true;
            return SymbolId::Leaf(LeafId(u32::MAX));
        };
        let id = LeafId(index);
        self.leaves.push(Leaf {
            kind,
            range,
            text: text.into(),
        });
        self.leaf_parents.push(None);
        SymbolId::Leaf(id)
    }

    /// Append a leaf whose range starts at `start` and spans `text`.
    pub fn token(&mut self, kind: TokenKind, start: u32, text: &str) -> SymbolId {
        let range = TextRange::at(TextSize::from(start), TextSize::of(text));
        self.leaf(kind, range, text)
    }

    /// Append a leaf whose text is sliced out of the source.
    pub fn source_leaf(&mut self, kind: TokenKind, range: TextRange) -> Result<SymbolId, TreeError> {
        let len = TextSize::of(&*self.source);
        let text = self
            .source
            .get(std::ops::Range::<usize>::from(range))
            .map(SmolStr::new)
            .ok_or_else(|| TreeError::range_outside_source(range, len))?;
        Ok(self.leaf(kind, range, text))
    }

    /// Append a node that adopts `children` in order. `None` is an elided slot.
    ///
    /// Fails without modifying the builder if a child is foreign, already
    /// adopted, or listed twice.
    pub fn node<I>(&mut self, kind: NodeKind, children: I) -> Result<SymbolId, TreeError>
    where
        I: IntoIterator<Item = Option<SymbolId>>,
    {
        if self.too_large {
            return Err(TreeError::TooLarge);
        }
        let children: Vec<Option<SymbolId>> = children.into_iter().collect();
        for (index, child) in children.iter().enumerate() {
            let Some(child) = *child else { continue };
            if !self.contains(child) {
                return Err(TreeError::UnknownSymbol(child));
            }
            if self.parent_slot(child).is_some() {
                return Err(TreeError::AlreadyAttached(child));
            }
            if children[..index].contains(&Some(child)) {
                return Err(TreeError::DuplicateChild(child));
            }
        }

        let id = NodeId(arena_index(self.nodes.len())?);
        let first_child = arena_index(self.slots.len())?;
        let child_count = arena_index(children.len())?;

        for child in children.iter().flatten() {
            match *child {
                SymbolId::Leaf(leaf) => self.leaf_parents[leaf.index()] = Some(id),
                SymbolId::Node(node) => self.node_parents[node.index()] = Some(id),
            }
        }
        self.slots.extend(children);
        self.nodes.push(NodeData {
            kind,
            first_child,
            child_count,
        });
        self.node_parents.push(None);
        trace!(kind = %kind, children = child_count, "reduced node");
        Ok(SymbolId::Node(id))
    }

    /// Freeze the tree. `root` must be a parentless symbol of this builder;
    /// `None` produces an empty tree.
    pub fn finish(self, root: Option<SymbolId>) -> Result<SyntaxTree, TreeError> {
        if self.too_large {
            return Err(TreeError::TooLarge);
        }
        if let Some(root) = root {
            if !self.contains(root) {
                return Err(TreeError::UnknownSymbol(root));
            }
            if self.parent_slot(root).is_some() {
                return Err(TreeError::RootHasParent(root));
            }
        }
        Ok(SyntaxTree {
            source: self.source,
            leaves: self.leaves,
            nodes: self.nodes,
            slots: self.slots,
            leaf_parents: self.leaf_parents,
            node_parents: self.node_parents,
            root,
        })
    }

    fn contains(&self, id: SymbolId) -> bool {
        match id {
            SymbolId::Leaf(leaf) => leaf.index() < self.leaves.len(),
            SymbolId::Node(node) => node.index() < self.nodes.len(),
        }
    }

    fn parent_slot(&self, id: SymbolId) -> Option<NodeId> {
        match id {
            SymbolId::Leaf(leaf) => self.leaf_parents[leaf.index()],
            SymbolId::Node(node) => self.node_parents[node.index()],
        }
    }
}
