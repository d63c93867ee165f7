//! Symbol resolution input
//!
//! Name resolution happens outside this crate. The emitter asks a
//! [`SymbolResolver`] about every declaration and reference site it extracts;
//! `None` means "unresolved", which is a normal outcome and never an error.

use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use super::extract::Role;
use super::vname::VName;
use crate::base::TextRange;
use crate::syntax::{LeafRef, NodeRef};

/// A declaration or reference found in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Site<'t> {
    pub role: Role,
    /// Leaf carrying the name.
    pub leaf: LeafRef<'t>,
    /// Node the extraction rule fired on.
    pub owner: NodeRef<'t>,
    /// Names of the enclosing definitions, outermost first. Anonymous
    /// blocks appear as `$` followed by their child-slot path.
    pub scope: Vec<SmolStr>,
}

impl<'t> Site<'t> {
    pub fn name(&self) -> &'t str {
        self.leaf.text()
    }

    pub fn range(&self) -> TextRange {
        self.leaf.range()
    }

    pub fn is_declaration(&self) -> bool {
        matches!(self.role, Role::Declares(_))
    }
}

/// Supplies resolved identities for extracted sites.
///
/// For a reference, the answer is the entity it names. For a declaration,
/// an answer different from the declaration's own identity is the entity it
/// overrides (an out-of-line definition's prototype, an overridden method).
pub trait SymbolResolver: Send + Sync {
    fn resolve(&self, site: &Site<'_>) -> Option<VName>;
}

/// Resolves nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unresolved;

impl SymbolResolver for Unresolved {
    fn resolve(&self, _site: &Site<'_>) -> Option<VName> {
        None
    }
}

/// Resolutions keyed by the byte range of the name leaf.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolutionMap {
    by_range: FxHashMap<TextRange, VName>,
}

impl ResolutionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, range: TextRange, target: VName) -> Option<VName> {
        self.by_range.insert(range, target)
    }

    pub fn get(&self, range: TextRange) -> Option<&VName> {
        self.by_range.get(&range)
    }

    pub fn len(&self) -> usize {
        self.by_range.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_range.is_empty()
    }
}

impl FromIterator<(TextRange, VName)> for ResolutionMap {
    fn from_iter<I: IntoIterator<Item = (TextRange, VName)>>(iter: I) -> Self {
        Self {
            by_range: iter.into_iter().collect(),
        }
    }
}

impl SymbolResolver for ResolutionMap {
    fn resolve(&self, site: &Site<'_>) -> Option<VName> {
        self.get(site.range()).cloned()
    }
}

impl<F> SymbolResolver for F
where
    F: Fn(&Site<'_>) -> Option<VName> + Send + Sync,
{
    fn resolve(&self, site: &Site<'_>) -> Option<VName> {
        self(site)
    }
}
