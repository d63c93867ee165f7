//! Index facts and their flattened entry form

use std::collections::BTreeSet;
use std::sync::Arc;

use smol_str::SmolStr;

use super::diagnostics::{Diagnostic, Severity};
use super::schema::{
    COMPLETE_DEFINITION, EDGE_FACT_NAME, EdgeKind, EntityKind, FACT_COMPLETE, FACT_LOC_END,
    FACT_LOC_START, FACT_NODE_KIND, FACT_SUBKIND, FACT_TEXT, Subkind,
};
use super::vname::{FileIdentity, VName};

/// One atomic unit of the cross-reference graph.
///
/// The derived ordering is total, so a [`BTreeSet`] of facts iterates the
/// same way for set-equal inputs.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IndexFact {
    /// An entity and its kind.
    Node {
        vname: VName,
        kind: EntityKind,
        subkind: Option<Subkind>,
        /// Carries `/kythe/complete = definition`.
        definition: bool,
        /// File contents, on file nodes only.
        text: Option<Arc<str>>,
    },
    /// A byte range `[start, end)` of a file with its literal text.
    Anchor {
        vname: VName,
        start: u32,
        end: u32,
        text: SmolStr,
    },
    /// A labeled relation between two entities.
    Edge {
        source: VName,
        kind: EdgeKind,
        target: VName,
    },
}

impl IndexFact {
    pub fn node(vname: VName, kind: EntityKind) -> Self {
        IndexFact::Node {
            vname,
            kind,
            subkind: None,
            definition: false,
            text: None,
        }
    }

    pub fn edge(source: VName, kind: EdgeKind, target: VName) -> Self {
        IndexFact::Edge {
            source,
            kind,
            target,
        }
    }

    /// The VName the fact is about (the source, for edges).
    pub fn vname(&self) -> &VName {
        match self {
            IndexFact::Node { vname, .. } | IndexFact::Anchor { vname, .. } => vname,
            IndexFact::Edge { source, .. } => source,
        }
    }

    /// Flatten into Kythe entries.
    pub fn entries(&self) -> Vec<Entry> {
        match self {
            IndexFact::Node {
                vname,
                kind,
                subkind,
                definition,
                text,
            } => {
                let mut entries = vec![Entry::fact(vname, FACT_NODE_KIND, kind.as_str())];
                if let Some(subkind) = subkind {
                    entries.push(Entry::fact(vname, FACT_SUBKIND, subkind.as_str()));
                }
                if *definition {
                    entries.push(Entry::fact(vname, FACT_COMPLETE, COMPLETE_DEFINITION));
                }
                if let Some(text) = text {
                    entries.push(Entry::fact(vname, FACT_TEXT, text));
                }
                entries
            }
            IndexFact::Anchor {
                vname,
                start,
                end,
                text,
            } => vec![
                Entry::fact(vname, FACT_NODE_KIND, EntityKind::Anchor.as_str()),
                Entry::fact(vname, FACT_LOC_START, &start.to_string()),
                Entry::fact(vname, FACT_LOC_END, &end.to_string()),
                Entry::fact(vname, FACT_TEXT, text),
            ],
            IndexFact::Edge {
                source,
                kind,
                target,
            } => vec![Entry {
                source: source.clone(),
                edge_kind: Some(kind.as_str()),
                target: Some(target.clone()),
                fact_name: EDGE_FACT_NAME,
                fact_value: Vec::new(),
            }],
        }
    }
}

/// A single Kythe entry: a fact on a node, or an edge.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Entry {
    pub source: VName,
    pub edge_kind: Option<&'static str>,
    pub target: Option<VName>,
    pub fact_name: &'static str,
    pub fact_value: Vec<u8>,
}

impl Entry {
    fn fact(source: &VName, name: &'static str, value: &str) -> Self {
        Self {
            source: source.clone(),
            edge_kind: None,
            target: None,
            fact_name: name,
            fact_value: value.as_bytes().to_vec(),
        }
    }
}

/// Everything emitted for one file: the fact set and the problems found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFacts {
    pub file: FileIdentity,
    pub facts: BTreeSet<IndexFact>,
    pub diagnostics: Vec<Diagnostic>,
}

impl FileFacts {
    pub fn new(file: FileIdentity) -> Self {
        Self {
            file,
            facts: BTreeSet::new(),
            diagnostics: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &IndexFact> {
        self.facts
            .iter()
            .filter(|fact| matches!(fact, IndexFact::Node { .. }))
    }

    pub fn anchors(&self) -> impl Iterator<Item = &IndexFact> {
        self.facts
            .iter()
            .filter(|fact| matches!(fact, IndexFact::Anchor { .. }))
    }

    pub fn edges(&self) -> impl Iterator<Item = &IndexFact> {
        self.facts
            .iter()
            .filter(|fact| matches!(fact, IndexFact::Edge { .. }))
    }

    /// Edges of one kind as `(source, target)` pairs.
    pub fn edges_of(&self, kind: EdgeKind) -> impl Iterator<Item = (&VName, &VName)> {
        self.facts.iter().filter_map(move |fact| match fact {
            IndexFact::Edge {
                source,
                kind: edge,
                target,
            } if *edge == kind => Some((source, target)),
            _ => None,
        })
    }

    /// All facts flattened into entries, in fact order.
    pub fn entries(&self) -> impl Iterator<Item = Entry> + '_ {
        self.facts.iter().flat_map(IndexFact::entries)
    }

    /// Facts that were dropped because their input was malformed.
    pub fn skipped_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|diagnostic| diagnostic.severity == Severity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|diagnostic| diagnostic.severity == Severity::Warning)
            .count()
    }
}
