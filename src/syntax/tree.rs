//! Arena-backed concrete syntax tree
//!
//! Every leaf and node of one source file lives in flat vectors owned by a
//! single [`SyntaxTree`]. Children are referred to by index, never by owning
//! pointer, and a node's children occupy one contiguous run of child slots in
//! the order the parser attached them. A slot may be empty when the grammar
//! rule has an optional element that was elided.
//!
//! The tree is immutable once [`TreeBuilder::finish`](super::TreeBuilder::finish)
//! returns it. Readers get lightweight [`Symbol`] views that borrow the tree,
//! so nothing derived from a tree can outlive it.

use std::fmt;
use std::sync::Arc;

use smol_str::SmolStr;

use super::{NodeKind, TokenKind};
use crate::base::{TextRange, TextSize};

// ============================================================================
// IDS
// ============================================================================

/// Index of a node in its tree's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) u32);

/// Index of a leaf in its tree's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LeafId(pub(crate) u32);

/// Either kind of tree element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SymbolId {
    Leaf(LeafId),
    Node(NodeId),
}

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl LeafId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<NodeId> for SymbolId {
    fn from(id: NodeId) -> Self {
        SymbolId::Node(id)
    }
}

impl From<LeafId> for SymbolId {
    fn from(id: LeafId) -> Self {
        SymbolId::Leaf(id)
    }
}

// ============================================================================
// STORAGE
// ============================================================================

/// One token: kind, byte range in the source, and its text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Leaf {
    pub kind: TokenKind,
    pub range: TextRange,
    pub text: SmolStr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NodeData {
    pub(crate) kind: NodeKind,
    pub(crate) first_child: u32,
    pub(crate) child_count: u32,
}

/// A complete, read-only concrete syntax tree for one source file.
#[derive(Clone, PartialEq, Eq)]
pub struct SyntaxTree {
    pub(crate) source: Arc<str>,
    pub(crate) leaves: Vec<Leaf>,
    pub(crate) nodes: Vec<NodeData>,
    pub(crate) slots: Vec<Option<SymbolId>>,
    pub(crate) leaf_parents: Vec<Option<NodeId>>,
    pub(crate) node_parents: Vec<Option<NodeId>>,
    pub(crate) root: Option<SymbolId>,
}

impl SyntaxTree {
    /// The source text the leaves' ranges refer to.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Shared handle to the source text.
    pub fn source_arc(&self) -> Arc<str> {
        Arc::clone(&self.source)
    }

    /// Length of the source text in bytes.
    pub fn source_len(&self) -> TextSize {
        TextSize::of(&*self.source)
    }

    pub fn leaf_count(&self) -> usize {
        self.leaves.len()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The root symbol, if the tree is not empty.
    pub fn root(&self) -> Option<Symbol<'_>> {
        self.root.and_then(|id| self.symbol(id))
    }

    /// View of an arbitrary symbol. `None` for ids that do not belong here.
    pub fn symbol(&self, id: SymbolId) -> Option<Symbol<'_>> {
        match id {
            SymbolId::Leaf(id) => self.leaf(id).map(Symbol::Leaf),
            SymbolId::Node(id) => self.node(id).map(Symbol::Node),
        }
    }

    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_>> {
        (id.index() < self.nodes.len()).then_some(NodeRef { tree: self, id })
    }

    pub fn leaf(&self, id: LeafId) -> Option<LeafRef<'_>> {
        (id.index() < self.leaves.len()).then_some(LeafRef { tree: self, id })
    }

    /// All leaves in creation order (the parser's token order).
    pub fn leaves(&self) -> impl Iterator<Item = LeafRef<'_>> {
        (0..self.leaves.len() as u32).map(move |index| LeafRef {
            tree: self,
            id: LeafId(index),
        })
    }

    pub(crate) fn node_data(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.index()]
    }

    pub(crate) fn parent_of(&self, id: SymbolId) -> Option<NodeId> {
        match id {
            SymbolId::Leaf(id) => self.leaf_parents.get(id.index()).copied().flatten(),
            SymbolId::Node(id) => self.node_parents.get(id.index()).copied().flatten(),
        }
    }
}

impl fmt::Debug for SyntaxTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyntaxTree")
            .field("source_len", &self.source.len())
            .field("leaves", &self.leaves.len())
            .field("nodes", &self.nodes.len())
            .field("root", &self.root)
            .finish()
    }
}

// ============================================================================
// VIEWS
// ============================================================================

/// Borrowed view of a node.
#[derive(Clone, Copy)]
pub struct NodeRef<'t> {
    tree: &'t SyntaxTree,
    id: NodeId,
}

/// Borrowed view of a leaf.
#[derive(Clone, Copy)]
pub struct LeafRef<'t> {
    tree: &'t SyntaxTree,
    id: LeafId,
}

/// A located tree element: a leaf or a node.
///
/// Every traversal site matches on both variants, so a new kind of element
/// cannot be skipped by accident.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Symbol<'t> {
    Leaf(LeafRef<'t>),
    Node(NodeRef<'t>),
}

impl<'t> NodeRef<'t> {
    pub fn id(self) -> NodeId {
        self.id
    }

    pub fn tree(self) -> &'t SyntaxTree {
        self.tree
    }

    pub fn kind(self) -> NodeKind {
        self.tree.node_data(self.id).kind
    }

    /// Number of child slots, elided ones included.
    pub fn child_count(self) -> usize {
        self.tree.node_data(self.id).child_count as usize
    }

    fn slots(self) -> &'t [Option<SymbolId>] {
        let data = self.tree.node_data(self.id);
        let start = data.first_child as usize;
        &self.tree.slots[start..start + data.child_count as usize]
    }

    /// Child slots in attachment order; `None` marks an elided slot.
    pub fn children(self) -> impl DoubleEndedIterator<Item = Option<Symbol<'t>>> + 't {
        let tree = self.tree;
        self.slots()
            .iter()
            .map(move |slot| slot.and_then(|id| tree.symbol(id)))
    }

    /// Present children only, in attachment order.
    pub fn present_children(self) -> impl DoubleEndedIterator<Item = Symbol<'t>> + 't {
        self.children().flatten()
    }

    /// Child in slot `index`. `None` if the slot is elided or out of range.
    pub fn child(self, index: usize) -> Option<Symbol<'t>> {
        self.slots()
            .get(index)
            .copied()
            .flatten()
            .and_then(|id| self.tree.symbol(id))
    }

    pub fn parent(self) -> Option<NodeRef<'t>> {
        self.tree
            .parent_of(SymbolId::Node(self.id))
            .and_then(|id| self.tree.node(id))
    }

    pub fn symbol(self) -> Symbol<'t> {
        Symbol::Node(self)
    }
}

impl<'t> LeafRef<'t> {
    pub fn id(self) -> LeafId {
        self.id
    }

    pub fn tree(self) -> &'t SyntaxTree {
        self.tree
    }

    pub fn data(self) -> &'t Leaf {
        &self.tree.leaves[self.id.index()]
    }

    pub fn kind(self) -> TokenKind {
        self.data().kind
    }

    pub fn range(self) -> TextRange {
        self.data().range
    }

    pub fn text(self) -> &'t str {
        self.data().text.as_str()
    }

    pub fn parent(self) -> Option<NodeRef<'t>> {
        self.tree
            .parent_of(SymbolId::Leaf(self.id))
            .and_then(|id| self.tree.node(id))
    }

    pub fn symbol(self) -> Symbol<'t> {
        Symbol::Leaf(self)
    }
}

impl<'t> Symbol<'t> {
    pub fn id(self) -> SymbolId {
        match self {
            Symbol::Leaf(leaf) => SymbolId::Leaf(leaf.id),
            Symbol::Node(node) => SymbolId::Node(node.id),
        }
    }

    pub fn tree(self) -> &'t SyntaxTree {
        match self {
            Symbol::Leaf(leaf) => leaf.tree,
            Symbol::Node(node) => node.tree,
        }
    }

    pub fn parent(self) -> Option<NodeRef<'t>> {
        match self {
            Symbol::Leaf(leaf) => leaf.parent(),
            Symbol::Node(node) => node.parent(),
        }
    }

    pub fn as_node(self) -> Option<NodeRef<'t>> {
        match self {
            Symbol::Node(node) => Some(node),
            Symbol::Leaf(_) => None,
        }
    }

    pub fn as_leaf(self) -> Option<LeafRef<'t>> {
        match self {
            Symbol::Leaf(leaf) => Some(leaf),
            Symbol::Node(_) => None,
        }
    }

    /// Node kind, or `None` for a leaf.
    pub fn node_kind(self) -> Option<NodeKind> {
        self.as_node().map(NodeRef::kind)
    }

    /// Token kind, or `None` for a node.
    pub fn token_kind(self) -> Option<TokenKind> {
        self.as_leaf().map(LeafRef::kind)
    }

    /// Enclosing nodes, innermost first.
    pub fn ancestors(self) -> impl Iterator<Item = NodeRef<'t>> {
        std::iter::successors(self.parent(), |node| node.parent())
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl Eq for NodeRef<'_> {}

impl PartialEq for LeafRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl Eq for LeafRef<'_> {}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.kind(), self.id.0)
    }
}

impl fmt::Debug for LeafRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{:?} {:?}", self.kind(), self.range(), self.text())
    }
}

impl fmt::Debug for Symbol<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Leaf(leaf) => leaf.fmt(f),
            Symbol::Node(node) => node.fmt(f),
        }
    }
}
