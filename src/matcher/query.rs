//! Validated queries and their results

use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use smol_str::SmolStr;
use thiserror::Error;

use super::pattern::{Matcher, Predicate, Step};
use super::search::{Matches, TraversalOrder};
use crate::syntax::{LeafRef, NodeKind, NodeRef, Symbol, SyntaxTree, TokenKind};

/// Malformed matcher expressions, reported when a [`Query`] is built.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatcherError {
    #[error("binding name '{0}' is used more than once in one matcher")]
    DuplicateBinding(SmolStr),

    #[error("binding name must not be empty")]
    EmptyBinding,

    #[error("contradictory predicates: {left} and {right} can never hold for the same symbol")]
    Contradiction { left: String, right: String },

    #[error("any_of needs at least one alternative")]
    EmptyAnyOf,

    #[error("path needs at least one step")]
    EmptyPath,
}

impl MatcherError {
    pub fn contradiction(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self::Contradiction {
            left: left.into(),
            right: right.into(),
        }
    }
}

// ============================================================================
// MATCH RESULT
// ============================================================================

pub(crate) type Bindings<'t> = IndexMap<SmolStr, Symbol<'t>>;

/// One successful match: the symbol tested at the top level plus every
/// binding recorded on the way, in the order they were made.
#[derive(Debug, Clone)]
pub struct MatchResult<'t> {
    symbol: Symbol<'t>,
    bindings: Bindings<'t>,
}

impl<'t> MatchResult<'t> {
    pub fn symbol(&self) -> Symbol<'t> {
        self.symbol
    }

    pub fn get(&self, name: &str) -> Option<Symbol<'t>> {
        self.bindings.get(name).copied()
    }

    /// Bound symbol as a node, if it is one.
    pub fn node(&self, name: &str) -> Option<NodeRef<'t>> {
        self.get(name).and_then(Symbol::as_node)
    }

    /// Bound symbol as a leaf, if it is one.
    pub fn leaf(&self, name: &str) -> Option<LeafRef<'t>> {
        self.get(name).and_then(Symbol::as_leaf)
    }

    pub fn bindings(&self) -> impl Iterator<Item = (&str, Symbol<'t>)> + '_ {
        self.bindings
            .iter()
            .map(|(name, symbol)| (name.as_str(), *symbol))
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl PartialEq for MatchResult<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.symbol == other.symbol && self.bindings().eq(other.bindings())
    }
}

impl Eq for MatchResult<'_> {}

// ============================================================================
// QUERY
// ============================================================================

/// A checked matcher, ready to run against trees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    matcher: Matcher,
    binding_names: Vec<SmolStr>,
}

impl Query {
    /// Check `matcher` for duplicate bindings and impossible conjunctions.
    pub fn new(matcher: Matcher) -> Result<Self, MatcherError> {
        let mut seen = FxHashSet::default();
        let mut binding_names = Vec::new();
        validate(&matcher, &mut seen, &mut binding_names)?;
        Ok(Self {
            matcher,
            binding_names,
        })
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    /// Every binding name the matcher can produce, in expression order.
    pub fn binding_names(&self) -> impl Iterator<Item = &str> {
        self.binding_names.iter().map(SmolStr::as_str)
    }

    /// Test a single symbol.
    pub fn matches<'t>(&self, symbol: Symbol<'t>) -> Option<MatchResult<'t>> {
        let mut bindings = Bindings::default();
        evaluate(&self.matcher, symbol, &mut bindings).then_some(MatchResult { symbol, bindings })
    }

    /// Lazily test every symbol of `tree` in the given order.
    pub fn search<'q, 't>(&'q self, tree: &'t SyntaxTree, order: TraversalOrder) -> Matches<'q, 't> {
        Matches::new(self, tree.root(), order)
    }

    /// Lazily test `symbol` and its descendants in the given order.
    pub fn search_within<'q, 't>(&'q self, symbol: Symbol<'t>, order: TraversalOrder) -> Matches<'q, 't> {
        Matches::new(self, Some(symbol), order)
    }

    /// First match in the given order; the rest of the tree is not visited.
    pub fn first<'t>(&self, tree: &'t SyntaxTree, order: TraversalOrder) -> Option<MatchResult<'t>> {
        self.search(tree, order).next()
    }
}

// ============================================================================
// VALIDATION
// ============================================================================

fn validate(
    matcher: &Matcher,
    seen: &mut FxHashSet<SmolStr>,
    names: &mut Vec<SmolStr>,
) -> Result<(), MatcherError> {
    if let Some(name) = &matcher.binding {
        if name.is_empty() {
            return Err(MatcherError::EmptyBinding);
        }
        if !seen.insert(name.clone()) {
            return Err(MatcherError::DuplicateBinding(name.clone()));
        }
    }

    match &matcher.predicate {
        Predicate::Any
        | Predicate::Node(_)
        | Predicate::Leaf(_)
        | Predicate::Preprocessing
        | Predicate::MinChildren(_) => {}
        Predicate::AllOf(parts) => {
            let mut conjunction = Conjunction::default();
            conjunction.add(matcher)?;
            for part in parts {
                validate(part, seen, names)?;
            }
        }
        Predicate::AnyOf(parts) => {
            if parts.is_empty() {
                return Err(MatcherError::EmptyAnyOf);
            }
            for part in parts {
                validate(part, seen, names)?;
            }
        }
        Predicate::Path(steps, inner) => {
            if steps.is_empty() {
                return Err(MatcherError::EmptyPath);
            }
            if let Some(inner) = inner {
                validate(inner, seen, names)?;
            }
        }
        Predicate::Child(_, inner)
        | Predicate::Unless(inner)
        | Predicate::HasChild(inner)
        | Predicate::HasDescendant(inner)
        | Predicate::HasAncestor(inner)
        | Predicate::Identifier(inner) => validate(inner, seen, names)?,
    }

    // Outer names follow inner ones, matching the order bindings are made.
    if let Some(name) = &matcher.binding {
        names.push(name.clone());
    }
    Ok(())
}

/// What a flattened conjunction requires of a single symbol.
#[derive(Default)]
struct Conjunction {
    node: Option<NodeKind>,
    leaf: Option<TokenKind>,
    children: bool,
    preprocessing: bool,
}

const CHILDREN: &str = "a child requirement";
const PREPROCESSING: &str = "the preprocessing predicate";

impl Conjunction {
    fn add(&mut self, matcher: &Matcher) -> Result<(), MatcherError> {
        match &matcher.predicate {
            Predicate::AllOf(parts) => parts.iter().try_for_each(|part| self.add(part)),
            Predicate::Node(kind) => self.add_node(*kind),
            Predicate::Leaf(kind) => self.add_leaf(*kind),
            Predicate::Preprocessing => self.add_preprocessing(),
            Predicate::MinChildren(0) => Ok(()),
            Predicate::MinChildren(_)
            | Predicate::Child(..)
            | Predicate::Path(..)
            | Predicate::HasChild(_)
            | Predicate::HasDescendant(_) => self.add_children(),
            Predicate::Any
            | Predicate::AnyOf(_)
            | Predicate::Unless(_)
            | Predicate::HasAncestor(_)
            | Predicate::Identifier(_) => Ok(()),
        }
    }

    fn add_node(&mut self, kind: NodeKind) -> Result<(), MatcherError> {
        let this = format!("node kind {kind}");
        if let Some(existing) = self.node.filter(|existing| *existing != kind) {
            return Err(MatcherError::contradiction(format!("node kind {existing}"), this));
        }
        if let Some(leaf) = self.leaf {
            return Err(MatcherError::contradiction(format!("leaf kind {leaf}"), this));
        }
        if self.preprocessing && !kind.is_preprocessing() {
            return Err(MatcherError::contradiction(PREPROCESSING, this));
        }
        self.node = Some(kind);
        Ok(())
    }

    fn add_leaf(&mut self, kind: TokenKind) -> Result<(), MatcherError> {
        let this = format!("leaf kind {kind}");
        if let Some(existing) = self.leaf.filter(|existing| *existing != kind) {
            return Err(MatcherError::contradiction(format!("leaf kind {existing}"), this));
        }
        if let Some(node) = self.node {
            return Err(MatcherError::contradiction(format!("node kind {node}"), this));
        }
        if self.children {
            return Err(MatcherError::contradiction(CHILDREN, this));
        }
        if self.preprocessing {
            return Err(MatcherError::contradiction(PREPROCESSING, this));
        }
        self.leaf = Some(kind);
        Ok(())
    }

    fn add_preprocessing(&mut self) -> Result<(), MatcherError> {
        if let Some(leaf) = self.leaf {
            return Err(MatcherError::contradiction(format!("leaf kind {leaf}"), PREPROCESSING));
        }
        if let Some(node) = self.node.filter(|node| !node.is_preprocessing()) {
            return Err(MatcherError::contradiction(format!("node kind {node}"), PREPROCESSING));
        }
        self.preprocessing = true;
        Ok(())
    }

    fn add_children(&mut self) -> Result<(), MatcherError> {
        if let Some(leaf) = self.leaf {
            return Err(MatcherError::contradiction(format!("leaf kind {leaf}"), CHILDREN));
        }
        self.children = true;
        Ok(())
    }
}

// ============================================================================
// EVALUATION
// ============================================================================

/// Test `matcher` against `symbol`. On failure `bindings` is left exactly as
/// it was on entry.
pub(crate) fn evaluate<'t>(matcher: &Matcher, symbol: Symbol<'t>, bindings: &mut Bindings<'t>) -> bool {
    let mark = bindings.len();
    let matched = match &matcher.predicate {
        Predicate::Any => true,
        Predicate::Node(kind) => symbol.node_kind() == Some(*kind),
        Predicate::Leaf(kind) => symbol.token_kind() == Some(*kind),
        Predicate::Preprocessing => symbol.node_kind().is_some_and(NodeKind::is_preprocessing),
        Predicate::MinChildren(count) => child_count(symbol) >= *count,
        Predicate::Child(index, inner) => symbol
            .as_node()
            .and_then(|node| node.child(*index))
            .is_some_and(|child| evaluate(inner, child, bindings)),
        Predicate::Path(steps, inner) => follow(symbol, steps, inner.as_deref(), bindings),
        Predicate::AllOf(parts) => parts.iter().all(|part| evaluate(part, symbol, bindings)),
        Predicate::AnyOf(parts) => parts.iter().any(|part| evaluate(part, symbol, bindings)),
        Predicate::Unless(inner) => {
            let matched = evaluate(inner, symbol, bindings);
            bindings.truncate(mark);
            !matched
        }
        Predicate::HasChild(inner) => symbol.as_node().is_some_and(|node| {
            node.present_children()
                .any(|child| evaluate(inner, child, bindings))
        }),
        Predicate::HasDescendant(inner) => symbol
            .descendants()
            .any(|descendant| evaluate(inner, descendant, bindings)),
        Predicate::HasAncestor(inner) => symbol
            .ancestors()
            .any(|ancestor| evaluate(inner, ancestor.symbol(), bindings)),
        Predicate::Identifier(inner) => {
            name_leaf(symbol).is_some_and(|name| evaluate(inner, name.symbol(), bindings))
        }
    };

    if !matched {
        bindings.truncate(mark);
        return false;
    }
    if let Some(name) = &matcher.binding {
        bindings.insert(name.clone(), symbol);
    }
    true
}

fn child_count(symbol: Symbol<'_>) -> usize {
    match symbol {
        Symbol::Node(node) => node.child_count(),
        Symbol::Leaf(_) => 0,
    }
}

/// Identifier leaf naming `symbol`, looking through unqualified and
/// qualified ids.
fn name_leaf(symbol: Symbol<'_>) -> Option<LeafRef<'_>> {
    match symbol {
        Symbol::Leaf(leaf) => leaf.kind().is_identifier().then_some(leaf),
        Symbol::Node(node) if node.kind() == NodeKind::UNQUALIFIED_ID => {
            node.child(0).and_then(name_leaf)
        }
        Symbol::Node(node) if node.kind() == NodeKind::QUALIFIED_ID => {
            node.present_children().next_back().and_then(name_leaf)
        }
        Symbol::Node(_) => None,
    }
}

fn step_matches(step: Step, symbol: Symbol<'_>) -> bool {
    match step {
        Step::Node(kind) => symbol.node_kind() == Some(kind),
        Step::Leaf(kind) => symbol.token_kind() == Some(kind),
    }
}

/// Depth-first over direct children along `steps`; the first complete path
/// whose endpoint satisfies `inner` wins.
fn follow<'t>(
    symbol: Symbol<'t>,
    steps: &[Step],
    inner: Option<&Matcher>,
    bindings: &mut Bindings<'t>,
) -> bool {
    let Some((step, rest)) = steps.split_first() else {
        return inner.is_none_or(|inner| evaluate(inner, symbol, bindings));
    };
    let Symbol::Node(node) = symbol else {
        return false;
    };
    node.present_children()
        .any(|child| step_matches(*step, child) && follow(child, rest, inner, bindings))
}
