//! Matcher expressions
//!
//! A [`Matcher`] is a tree of predicates over one [`Symbol`](crate::syntax::Symbol).
//! Primitive predicates test the symbol itself (kind, child count,
//! preprocessing class); combinators compose matchers or move the test to
//! children, descendants or ancestors. Any matcher may carry a binding name:
//! when it succeeds, the symbol it tested is recorded under that name.
//!
//! Matchers are plain values. They are checked and turned into something
//! runnable by [`Query::new`](super::Query::new).

use smol_str::SmolStr;

use crate::syntax::{NodeKind, TokenKind};

/// One step of a [`path`]: the kind a direct child must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    Node(NodeKind),
    Leaf(TokenKind),
}

impl From<NodeKind> for Step {
    fn from(kind: NodeKind) -> Self {
        Step::Node(kind)
    }
}

impl From<TokenKind> for Step {
    fn from(kind: TokenKind) -> Self {
        Step::Leaf(kind)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Predicate {
    Any,
    Node(NodeKind),
    Leaf(TokenKind),
    Preprocessing,
    MinChildren(usize),
    Child(usize, Box<Matcher>),
    Path(Vec<Step>, Option<Box<Matcher>>),
    AllOf(Vec<Matcher>),
    AnyOf(Vec<Matcher>),
    Unless(Box<Matcher>),
    HasChild(Box<Matcher>),
    HasDescendant(Box<Matcher>),
    HasAncestor(Box<Matcher>),
    Identifier(Box<Matcher>),
}

/// A composable predicate with an optional binding name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matcher {
    pub(crate) predicate: Predicate,
    pub(crate) binding: Option<SmolStr>,
}

impl Matcher {
    fn new(predicate: Predicate) -> Self {
        Self {
            predicate,
            binding: None,
        }
    }

    /// Record the matched symbol under `name`.
    pub fn bind(mut self, name: impl Into<SmolStr>) -> Self {
        self.binding = Some(name.into());
        self
    }

    /// Conjunction with another matcher on the same symbol.
    pub fn and(self, other: Matcher) -> Self {
        match self {
            Matcher {
                predicate: Predicate::AllOf(mut parts),
                binding: None,
            } => {
                parts.push(other);
                Matcher::new(Predicate::AllOf(parts))
            }
            this => all_of([this, other]),
        }
    }

    pub fn binding(&self) -> Option<&str> {
        self.binding.as_deref()
    }
}

// ============================================================================
// PRIMITIVES
// ============================================================================

/// Matches every symbol.
pub fn any() -> Matcher {
    Matcher::new(Predicate::Any)
}

/// Node of kind `kind`.
pub fn node(kind: NodeKind) -> Matcher {
    Matcher::new(Predicate::Node(kind))
}

/// Leaf of kind `kind`.
pub fn leaf(kind: TokenKind) -> Matcher {
    Matcher::new(Predicate::Leaf(kind))
}

/// Node whose kind is a preprocessing directive.
pub fn preprocessing() -> Matcher {
    Matcher::new(Predicate::Preprocessing)
}

/// Node with at least `count` child slots (elided slots count).
pub fn min_children(count: usize) -> Matcher {
    Matcher::new(Predicate::MinChildren(count))
}

/// Node whose child in slot `index` is present and matches `inner`.
pub fn child(index: usize, inner: Matcher) -> Matcher {
    Matcher::new(Predicate::Child(index, Box::new(inner)))
}

/// Node from which `steps` can be followed through direct children.
pub fn path(steps: impl IntoIterator<Item = Step>) -> Matcher {
    Matcher::new(Predicate::Path(steps.into_iter().collect(), None))
}

/// Like [`path`], but the symbol reached by the last step must also match
/// `inner`. The first endpoint (in child order) that does is the one bound.
pub fn path_to(steps: impl IntoIterator<Item = Step>, inner: Matcher) -> Matcher {
    Matcher::new(Predicate::Path(
        steps.into_iter().collect(),
        Some(Box::new(inner)),
    ))
}

// ============================================================================
// COMBINATORS
// ============================================================================

/// Every matcher succeeds on the same symbol.
pub fn all_of(matchers: impl IntoIterator<Item = Matcher>) -> Matcher {
    Matcher::new(Predicate::AllOf(matchers.into_iter().collect()))
}

/// At least one matcher succeeds; only the first success binds.
pub fn any_of(matchers: impl IntoIterator<Item = Matcher>) -> Matcher {
    Matcher::new(Predicate::AnyOf(matchers.into_iter().collect()))
}

/// `inner` does not succeed. Bindings inside `inner` are never kept.
pub fn unless(inner: Matcher) -> Matcher {
    Matcher::new(Predicate::Unless(Box::new(inner)))
}

/// Some present direct child matches `inner`.
pub fn has_child(inner: Matcher) -> Matcher {
    Matcher::new(Predicate::HasChild(Box::new(inner)))
}

/// Some proper descendant, at any depth, matches `inner`.
pub fn has_descendant(inner: Matcher) -> Matcher {
    Matcher::new(Predicate::HasDescendant(Box::new(inner)))
}

/// Some proper ancestor matches `inner`.
pub fn has_ancestor(inner: Matcher) -> Matcher {
    Matcher::new(Predicate::HasAncestor(Box::new(inner)))
}

/// The name leaf of an identifier-shaped symbol matches `inner`.
///
/// An identifier leaf is its own name; an unqualified id names itself by its
/// first child; a qualified id `a::b` is named by its last part.
pub fn unwrap_identifier(inner: Matcher) -> Matcher {
    Matcher::new(Predicate::Identifier(Box::new(inner)))
}
