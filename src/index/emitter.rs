//! Fact emission for one file
//!
//! The emitter walks the tree once in pre-order. Every node is looked up in
//! the extraction table; each site found becomes an anchor plus node and edge
//! facts. Declarations that open a scope are recorded as the walk passes
//! them, so nested sites see their enclosing definitions. Blocks that
//! declare nothing (`begin ... end`, loops, generate branches) still scope
//! their contents under a name built from their position in the tree.
//!
//! Output is a set. Identities depend only on the file identity, names and
//! tree shape, so the same input always produces the same set.

use std::collections::BTreeSet;

use rustc_hash::{FxHashMap, FxHashSet};
use smol_str::SmolStr;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

use super::diagnostics::DiagnosticCollector;
use super::extract::{Declaration, Role, rules_for};
use super::facts::{FileFacts, IndexFact};
use super::resolve::{Site, SymbolResolver, Unresolved};
use super::schema::{EdgeKind, EntityKind, LANGUAGE};
use super::vname::{FileIdentity, Signature, VName};
use crate::base::{LineIndex, TextSize};
use crate::syntax::{LeafId, LeafRef, NodeId, NodeKind, NodeRef, Symbol, SyntaxTree};

/// Emission failures that discard a whole file's output.
#[derive(Debug, Error)]
pub enum EmitError {
    #[error("emission of '{0}' was cancelled")]
    Cancelled(SmolStr),

    #[cfg(feature = "json")]
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl EmitError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, EmitError::Cancelled(_))
    }
}

/// Emitter configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitOptions {
    /// Language tag of semantic and anchor VNames.
    pub language: SmolStr,
    /// Attach the file contents to the file node.
    pub emit_file_text: bool,
    /// Emit `childof` edges from members to their enclosing definition.
    pub emit_child_of: bool,
    /// Warn about node and token kinds missing from the taxonomy.
    pub report_unknown_kinds: bool,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            language: SmolStr::new_static(LANGUAGE),
            emit_file_text: true,
            emit_child_of: true,
            report_unknown_kinds: true,
        }
    }
}

impl EmitOptions {
    pub fn with_language(mut self, language: impl Into<SmolStr>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_file_text(mut self, enabled: bool) -> Self {
        self.emit_file_text = enabled;
        self
    }

    pub fn with_child_of(mut self, enabled: bool) -> Self {
        self.emit_child_of = enabled;
        self
    }

    pub fn with_unknown_kind_reports(mut self, enabled: bool) -> Self {
        self.report_unknown_kinds = enabled;
        self
    }
}

/// Turns syntax trees into index facts.
#[derive(Debug, Clone, Default)]
pub struct Emitter {
    options: EmitOptions,
}

impl Emitter {
    pub fn new(options: EmitOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &EmitOptions {
        &self.options
    }

    /// Emit all facts for `tree`. Malformed input is reported in the
    /// returned diagnostics, never as an error.
    pub fn emit(&self, tree: &SyntaxTree, file: &FileIdentity, resolver: &dyn SymbolResolver) -> FileFacts {
        // A token nobody else holds is never cancelled.
        self.emit_cancellable(tree, file, resolver, &CancellationToken::new())
            .unwrap_or_else(|_| FileFacts::new(file.clone()))
    }

    /// Like [`emit`](Self::emit), but abandons the file as soon as `cancel`
    /// fires. Nothing produced for the file before that point is returned.
    pub fn emit_cancellable(
        &self,
        tree: &SyntaxTree,
        file: &FileIdentity,
        resolver: &dyn SymbolResolver,
        cancel: &CancellationToken,
    ) -> Result<FileFacts, EmitError> {
        let lines = LineIndex::new(tree.source());
        let mut emission = FileEmission {
            options: &self.options,
            resolver,
            file,
            source_len: tree.source_len(),
            facts: BTreeSet::new(),
            diagnostics: DiagnosticCollector::new(file.path.clone(), &lines),
            scopes: FxHashMap::default(),
            claimed: FxHashSet::default(),
            unknown_nodes: FxHashSet::default(),
            unknown_tokens: FxHashSet::default(),
        };

        let cancelled = || {
            debug!(file = %file, "emission cancelled");
            EmitError::Cancelled(file.path.clone())
        };
        if cancel.is_cancelled() {
            return Err(cancelled());
        }
        emission.file_node(tree);
        for symbol in tree.root().into_iter().flat_map(Symbol::preorder) {
            if cancel.is_cancelled() {
                return Err(cancelled());
            }
            emission.visit(symbol);
        }

        let skipped = emission.diagnostics.error_count();
        let facts = FileFacts {
            file: file.clone(),
            facts: emission.facts,
            diagnostics: emission.diagnostics.finish(),
        };
        debug!(file = %file, facts = facts.len(), skipped, "emitted facts");
        Ok(facts)
    }
}

/// Convenience wrapper: default options, no cancellation.
pub fn emit(tree: &SyntaxTree, file: &FileIdentity, resolver: &dyn SymbolResolver) -> FileFacts {
    Emitter::default().emit(tree, file, resolver)
}

/// Emit with nothing resolved: anchors and declarations only.
pub fn emit_unresolved(tree: &SyntaxTree, file: &FileIdentity) -> FileFacts {
    emit(tree, file, &Unresolved)
}

// ============================================================================
// PER-FILE STATE
// ============================================================================

/// A declaration or anonymous block that encloses later sites.
struct Scope {
    /// Signature components added for names inside, outermost first.
    names: Vec<SmolStr>,
    /// Declared entity; `None` for anonymous blocks.
    vname: Option<VName>,
}

/// Blocks that scope the names declared in them without declaring anything.
const ANONYMOUS_SCOPES: &[NodeKind] = &[
    NodeKind::SEQ_BLOCK,
    NodeKind::PAR_BLOCK,
    NodeKind::GENERATE_BLOCK,
    NodeKind::LOOP_GENERATE_CONSTRUCT,
    NodeKind::GENERATE_IF_CLAUSE,
    NodeKind::GENERATE_ELSE_BODY,
    NodeKind::IF_CLAUSE,
    NodeKind::ELSE_CLAUSE,
    NodeKind::INITIAL_STATEMENT,
    NodeKind::FINAL_STATEMENT,
    NodeKind::FOR_LOOP_STATEMENT,
    NodeKind::DO_WHILE_LOOP_STATEMENT,
    NodeKind::WHILE_LOOP_STATEMENT,
    NodeKind::FOREACH_LOOP_STATEMENT,
    NodeKind::REPEAT_LOOP_STATEMENT,
    NodeKind::FOREVER_LOOP_STATEMENT,
];

struct FileEmission<'e> {
    options: &'e EmitOptions,
    resolver: &'e dyn SymbolResolver,
    file: &'e FileIdentity,
    source_len: TextSize,
    facts: BTreeSet<IndexFact>,
    diagnostics: DiagnosticCollector<'e>,
    scopes: FxHashMap<NodeId, Scope>,
    claimed: FxHashSet<LeafId>,
    unknown_nodes: FxHashSet<u16>,
    unknown_tokens: FxHashSet<u16>,
}

impl<'e> FileEmission<'e> {
    fn file_node(&mut self, tree: &SyntaxTree) {
        let text = self.options.emit_file_text.then(|| tree.source_arc());
        self.facts.insert(IndexFact::Node {
            vname: self.file.vname(),
            kind: EntityKind::File,
            subkind: None,
            definition: false,
            text,
        });
    }

    fn visit(&mut self, symbol: Symbol<'_>) {
        match symbol {
            Symbol::Leaf(leaf) => {
                let kind = leaf.kind();
                if self.options.report_unknown_kinds && !kind.is_known() && self.unknown_tokens.insert(kind.raw()) {
                    self.diagnostics.unknown_token_kind(kind, leaf.range().start());
                }
            }
            Symbol::Node(node) => {
                let kind = node.kind();
                if self.options.report_unknown_kinds && !kind.is_known() && self.unknown_nodes.insert(kind.raw()) {
                    let offset = node.text_range().map(|range| range.start()).unwrap_or_default();
                    self.diagnostics.unknown_node_kind(kind, offset);
                }
                if ANONYMOUS_SCOPES.contains(&kind) {
                    let name = self.anonymous_name(node);
                    self.scopes.insert(
                        node.id(),
                        Scope {
                            names: vec![name],
                            vname: None,
                        },
                    );
                }
                for rule in rules_for(kind) {
                    let Some(leaf) = rule.name_leaf(node) else { continue };
                    if !self.claimed.insert(leaf.id()) {
                        continue;
                    }
                    let site = Site {
                        role: rule.role,
                        leaf,
                        owner: node,
                        scope: self.scope_names(node),
                    };
                    trace!(kind = %kind, name = site.name(), role = ?site.role, "site");
                    self.site(&site);
                }
            }
        }
    }

    /// Enclosing scope declarations of `node`, innermost first.
    fn enclosing<'s>(&'s self, node: NodeRef<'_>) -> impl Iterator<Item = &'s Scope> + 's {
        let ancestors: Vec<NodeId> = node.symbol().ancestors().map(|ancestor| ancestor.id()).collect();
        ancestors.into_iter().filter_map(|id| self.scopes.get(&id))
    }

    /// Nearest enclosing declared entity, skipping anonymous blocks.
    fn enclosing_definition(&self, node: NodeRef<'_>) -> Option<VName> {
        self.enclosing(node).find_map(|scope| scope.vname.clone())
    }

    fn scope_names(&self, node: NodeRef<'_>) -> Vec<SmolStr> {
        let mut scopes: Vec<&Scope> = self.enclosing(node).collect();
        scopes.reverse();
        scopes
            .into_iter()
            .flat_map(|scope| scope.names.iter().cloned())
            .collect()
    }

    /// `$` followed by the child slots leading from the nearest enclosing
    /// scope (or the root) down to `node`, joined by `.`.
    fn anonymous_name(&self, node: NodeRef<'_>) -> SmolStr {
        let mut slots = Vec::new();
        let mut current = node;
        while let Some(parent) = current.parent() {
            let slot = parent
                .children()
                .position(|child| child == Some(current.symbol()))
                .unwrap_or_default();
            slots.push(slot.to_string());
            if self.scopes.contains_key(&parent.id()) {
                break;
            }
            current = parent;
        }
        slots.reverse();
        SmolStr::new(format!("${}", slots.join(".")))
    }

    fn site(&mut self, site: &Site<'_>) {
        match site.role {
            Role::Declares(declaration) => self.declare(site, declaration),
            Role::References(edge) => self.reference(site, edge),
            Role::Port => {
                if follows_port_declaration(site.owner) {
                    self.declare(site, Declaration::member(EntityKind::Variable));
                } else {
                    self.reference(site, EdgeKind::Ref);
                }
            }
            Role::Extends => {
                let anchor = self.anchor(site.leaf);
                let Some(target) = self.resolver.resolve(site) else { return };
                if let Some(anchor) = anchor {
                    self.facts.insert(IndexFact::edge(anchor, EdgeKind::Ref, target.clone()));
                }
                if let Some(class) = self.enclosing_definition(site.owner) {
                    self.facts.insert(IndexFact::edge(class, EdgeKind::Extends, target));
                }
            }
            Role::EndLabel => {
                let declared = site
                    .owner
                    .parent()
                    .and_then(|parent| self.scopes.get(&parent.id()))
                    .and_then(|scope| scope.vname.clone());
                // Labels that do not close a declaration (begin/end blocks) carry no facts.
                let Some(declared) = declared else { return };
                if let Some(anchor) = self.anchor(site.leaf) {
                    self.facts.insert(IndexFact::edge(anchor, EdgeKind::Ref, declared));
                }
            }
        }
    }

    fn reference(&mut self, site: &Site<'_>, edge: EdgeKind) {
        let anchor = self.anchor(site.leaf);
        if let (Some(anchor), Some(target)) = (anchor, self.resolver.resolve(site)) {
            self.facts.insert(IndexFact::edge(anchor, edge, target));
        }
    }

    fn declare(&mut self, site: &Site<'_>, declaration: Declaration) {
        let qualifiers = qualifiers(site.leaf);
        let mut scope: Vec<SmolStr> = if declaration.scoped { site.scope.clone() } else { Vec::new() };
        scope.extend(qualifiers.iter().cloned());
        let vname = self.entity(&scope, site.name());

        self.facts.insert(IndexFact::Node {
            vname: vname.clone(),
            kind: declaration.kind,
            subkind: declaration.subkind,
            definition: true,
            text: None,
        });
        if let Some(anchor) = self.anchor(site.leaf) {
            self.facts
                .insert(IndexFact::edge(anchor, EdgeKind::DefinesBinding, vname.clone()));
        }
        if self.options.emit_child_of && declaration.scoped {
            // `C::f` belongs to `C`, wherever its body is written.
            let parent = match scope.split_last() {
                Some((owner, outer)) if !qualifiers.is_empty() => Some(self.entity(outer, owner)),
                _ => self.enclosing_definition(site.owner),
            };
            if let Some(parent) = parent {
                self.facts
                    .insert(IndexFact::edge(vname.clone(), EdgeKind::ChildOf, parent));
            }
        }
        if let Some(target) = self.resolver.resolve(site).filter(|target| *target != vname) {
            self.facts
                .insert(IndexFact::edge(vname.clone(), EdgeKind::Overrides, target));
        }
        if declaration.opens_scope {
            let mut names = qualifiers;
            names.push(SmolStr::new(site.name()));
            self.scopes.insert(
                site.owner.id(),
                Scope {
                    names,
                    vname: Some(vname),
                },
            );
        }
    }

    fn entity(&self, scope: &[SmolStr], name: &str) -> VName {
        let signature = Signature::new(self.file, scope.iter().map(SmolStr::as_str), name);
        VName::entity(self.file, signature).with_language(self.options.language.clone())
    }

    /// Anchor fact for `leaf`, or a diagnostic if its range is unusable.
    fn anchor(&mut self, leaf: LeafRef<'_>) -> Option<VName> {
        let range = leaf.range();
        if range.end() > self.source_len {
            self.diagnostics.anchor_out_of_bounds(range, leaf.text());
            return None;
        }
        if range.is_empty() {
            self.diagnostics.empty_anchor(range, leaf.text());
            return None;
        }
        let (start, end) = (u32::from(range.start()), u32::from(range.end()));
        let vname = VName::anchor(self.file, start, end).with_language(self.options.language.clone());
        self.facts.insert(IndexFact::Anchor {
            vname: vname.clone(),
            start,
            end,
            text: leaf.data().text.clone(),
        });
        Some(vname)
    }
}

/// Leading parts of a qualified name: `["C"]` for the `f` in `C::f`.
fn qualifiers(leaf: LeafRef<'_>) -> Vec<SmolStr> {
    let Some(id) = leaf.parent().filter(|parent| parent.kind() == NodeKind::UNQUALIFIED_ID) else {
        return Vec::new();
    };
    let Some(qualified) = id.parent().filter(|parent| parent.kind() == NodeKind::QUALIFIED_ID) else {
        return Vec::new();
    };
    qualified
        .present_children()
        .take_while(|part| *part != id.symbol())
        .filter_map(Symbol::as_node)
        .filter(|part| part.kind() == NodeKind::UNQUALIFIED_ID)
        .filter_map(|part| part.child(0).and_then(Symbol::as_leaf))
        .map(|name| SmolStr::new(name.text()))
        .collect()
}

/// A port in a header list declares its name once an earlier port in the
/// list gave a direction or type (`module m(input a, b)`); until then it
/// only names a port declared in the body (`module m(a); input a;`).
fn follows_port_declaration(port: NodeRef<'_>) -> bool {
    let Some(list) = port.parent() else { return false };
    list.present_children()
        .take_while(|sibling| *sibling != port.symbol())
        .any(|sibling| sibling.node_kind() == Some(NodeKind::PORT_DECLARATION))
}
