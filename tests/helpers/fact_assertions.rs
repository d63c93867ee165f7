//! Fact lookup and assertion helpers for emitter tests.

use std::collections::BTreeSet;

use hdlkit::SyntaxTree;
use hdlkit::index::{EdgeKind, EntityKind, FileFacts, FileIdentity, IndexFact, Signature, VName};

/// VName of a declaration named `name` inside `scope` of `file`.
pub fn entity(file: &FileIdentity, scope: &[&str], name: &str) -> VName {
    VName::entity(file, Signature::new(file, scope.iter().copied(), name))
}

/// VName of the anchor over the `nth` leaf spelled `text`.
pub fn anchor(tree: &SyntaxTree, file: &FileIdentity, text: &str, nth: usize) -> VName {
    let range = tree
        .leaves()
        .filter(|leaf| leaf.text() == text)
        .nth(nth)
        .unwrap_or_else(|| panic!("no leaf #{nth} spelled '{text}'"))
        .range();
    VName::anchor(file, range.start().into(), range.end().into())
}

/// Edges of one kind as owned pairs.
pub fn edges(facts: &FileFacts, kind: EdgeKind) -> BTreeSet<(VName, VName)> {
    facts
        .edges_of(kind)
        .map(|(source, target)| (source.clone(), target.clone()))
        .collect()
}

/// Assert a definition node of the given kind exists.
pub fn assert_defined(facts: &FileFacts, vname: &VName, kind: EntityKind) {
    let found = facts.facts.iter().any(|fact| {
        matches!(
            fact,
            IndexFact::Node { vname: v, kind: k, definition: true, .. } if v == vname && *k == kind
        )
    });
    assert!(
        found,
        "Expected a {kind} definition for {vname}, got:\n{}",
        facts
            .nodes()
            .map(|fact| format!("  {:?}", fact))
            .collect::<Vec<_>>()
            .join("\n")
    );
}

/// Assert every anchor lies inside the file and spells its source text.
pub fn assert_anchors_within(facts: &FileFacts, tree: &SyntaxTree) {
    let len = u32::from(tree.source_len());
    for fact in facts.anchors() {
        if let IndexFact::Anchor { start, end, text, .. } = fact {
            assert!(start < end && *end <= len, "anchor {start}..{end} outside 0..{len}");
            assert_eq!(&tree.source()[*start as usize..*end as usize], text.as_str());
        }
    }
}
