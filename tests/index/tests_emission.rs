//! Emission over the chip fixture: declarations, references and malformed
//! input.

use std::collections::BTreeSet;

use rstest::rstest;

use hdlkit::index::{
    EdgeKind, EntityKind, FileIdentity, IndexFact, Role, Severity, Site, VName, codes, emit,
    emit_unresolved,
};
use hdlkit::{NodeKind, TextRange, TextSize, TokenKind, TreeBuilder};

use crate::helpers::fact_assertions::{
    anchor, assert_anchors_within, assert_defined, edges, entity,
};
use crate::helpers::tree_fixtures::{CHIP_PATH, chip_tree, empty_module};

fn chip_file() -> FileIdentity {
    FileIdentity::new(CHIP_PATH)
}

#[rstest]
#[case(&[], "DRIVE", EntityKind::Macro)]
#[case(&[], "pkg", EntityKind::Package)]
#[case(&["pkg"], "byte_t", EntityKind::TypeAlias)]
#[case(&["pkg"], "DEPTH", EntityKind::Constant)]
#[case(&[], "bus_if", EntityKind::Interface)]
#[case(&[], "prog", EntityKind::Record)]
#[case(&[], "top", EntityKind::Record)]
#[case(&["top"], "tick", EntityKind::Function)]
#[case(&["top"], "IDLE", EntityKind::Constant)]
#[case(&["top"], "BUSY", EntityKind::Constant)]
#[case(&["top"], "state", EntityKind::Variable)]
#[case(&["top"], "g1", EntityKind::Variable)]
#[case(&["top"], "u_sub", EntityKind::Variable)]
fn test_chip_declarations(#[case] scope: &[&str], #[case] name: &str, #[case] kind: EntityKind) {
    let tree = chip_tree();
    let file = chip_file();
    let facts = emit_unresolved(&tree, &file);
    let vname = entity(&file, scope, name);
    assert_defined(&facts, &vname, kind);
    assert!(
        edges(&facts, EdgeKind::DefinesBinding).contains(&(anchor(&tree, &file, name, 0), vname))
    );
}

#[test]
fn test_chip_scoping() {
    let tree = chip_tree();
    let file = chip_file();
    let facts = emit_unresolved(&tree, &file);
    let pkg = entity(&file, &[], "pkg");
    let top = entity(&file, &[], "top");
    let expected: BTreeSet<(VName, VName)> = [
        (entity(&file, &["pkg"], "byte_t"), pkg.clone()),
        (entity(&file, &["pkg"], "DEPTH"), pkg),
        (entity(&file, &["top"], "tick"), top.clone()),
        (entity(&file, &["top"], "IDLE"), top.clone()),
        (entity(&file, &["top"], "BUSY"), top.clone()),
        (entity(&file, &["top"], "state"), top.clone()),
        (entity(&file, &["top"], "g1"), top.clone()),
        (entity(&file, &["top"], "u_sub"), top),
    ]
    .into_iter()
    .collect();
    assert_eq!(edges(&facts, EdgeKind::ChildOf), expected);
}

#[test]
fn test_chip_anchors() {
    let tree = chip_tree();
    let facts = emit_unresolved(&tree, &chip_file());
    assert_anchors_within(&facts, &tree);
    assert_eq!(facts.anchors().count(), 22);
    assert!(facts.diagnostics.is_empty());
}

#[test]
fn test_chip_resolved_references() {
    let tree = chip_tree();
    let file = chip_file();
    let sub = FileIdentity::new("rtl/sub.sv");
    let header = FileIdentity::new("defs.svh").vname();

    let resolver = |site: &Site<'_>| -> Option<VName> {
        match (site.role, site.name()) {
            (Role::References(EdgeKind::RefIncludes), _) => Some(header.clone()),
            (Role::References(EdgeKind::RefImports), "pkg") => Some(entity(&file, &[], "pkg")),
            (Role::References(EdgeKind::RefExpands), name) => {
                Some(entity(&file, &[], name.trim_start_matches('`')))
            }
            (Role::References(EdgeKind::Ref), "DEPTH") => Some(entity(&file, &["pkg"], "DEPTH")),
            (Role::References(EdgeKind::Ref), "sub") => Some(entity(&sub, &[], "sub")),
            (Role::References(EdgeKind::Ref), "clk")
                if site.owner.kind() == NodeKind::ACTUAL_NAMED_PORT =>
            {
                Some(entity(&sub, &["sub"], "clk"))
            }
            _ => None,
        }
    };
    let facts = emit(&tree, &file, &resolver);

    assert_eq!(
        edges(&facts, EdgeKind::RefIncludes),
        BTreeSet::from([(anchor(&tree, &file, "\"defs.svh\"", 0), header.clone())])
    );
    assert_eq!(
        edges(&facts, EdgeKind::RefImports),
        BTreeSet::from([(anchor(&tree, &file, "pkg", 1), entity(&file, &[], "pkg"))])
    );
    assert_eq!(
        edges(&facts, EdgeKind::RefExpands),
        BTreeSet::from([(anchor(&tree, &file, "`DRIVE", 0), entity(&file, &[], "DRIVE"))])
    );
    assert_eq!(
        edges(&facts, EdgeKind::Ref),
        BTreeSet::from([
            (anchor(&tree, &file, "DEPTH", 1), entity(&file, &["pkg"], "DEPTH")),
            (anchor(&tree, &file, "sub", 0), entity(&sub, &[], "sub")),
            (anchor(&tree, &file, "clk", 0), entity(&sub, &["sub"], "clk")),
            (anchor(&tree, &file, "tick", 1), entity(&file, &["top"], "tick")),
        ])
    );
    // The unresolved `clk` and `y` references still have anchors.
    assert_eq!(facts.anchors().count(), 22);
}

#[test]
fn test_identical_modules_in_two_files() {
    let tree = empty_module("core");
    let left = FileIdentity::new("a/core.sv");
    let right = FileIdentity::new("b/core.sv");
    let left_facts = emit_unresolved(&tree, &left);
    let right_facts = emit_unresolved(&tree, &right);

    let left_core = entity(&left, &[], "core");
    let right_core = entity(&right, &[], "core");
    assert_ne!(left_core, right_core);
    assert_defined(&left_facts, &left_core, EntityKind::Record);
    assert_defined(&right_facts, &right_core, EntityKind::Record);

    let anchor_texts = |facts: &hdlkit::index::FileFacts| -> Vec<String> {
        facts
            .anchors()
            .filter_map(|fact| match fact {
                IndexFact::Anchor { text, .. } => Some(text.to_string()),
                _ => None,
            })
            .collect()
    };
    assert_eq!(anchor_texts(&left_facts), ["core"]);
    assert_eq!(anchor_texts(&right_facts), ["core"]);
}

#[test]
fn test_bad_range_skips_one_fact_only() {
    let source = "module m; endmodule";
    let mut b = TreeBuilder::new(source);
    let kw = b.token(TokenKind::MODULE_KW, 0, "module");
    let m = b.token(TokenKind::SYMBOL_IDENTIFIER, 7, "m");
    let semi = b.token(TokenKind::char(b';'), 8, ";");
    let header = b
        .node(NodeKind::MODULE_HEADER, [Some(kw), Some(m), Some(semi)])
        .unwrap();
    let ghost = b.leaf(
        TokenKind::SYMBOL_IDENTIFIER,
        TextRange::at(TextSize::from(100), TextSize::from(5)),
        "ghost",
    );
    let ghost = b.node(NodeKind::UNQUALIFIED_ID, [Some(ghost)]).unwrap();
    let items = b.node(NodeKind::MODULE_ITEM_LIST, [Some(ghost)]).unwrap();
    let end = b.token(TokenKind::ENDMODULE_KW, 10, "endmodule");
    let module = b
        .node(
            NodeKind::MODULE_DECLARATION,
            [Some(header), Some(items), Some(end)],
        )
        .unwrap();
    let tree = b.finish(Some(module)).unwrap();

    let file = FileIdentity::new("m.sv");
    let facts = emit_unresolved(&tree, &file);

    assert_defined(&facts, &entity(&file, &[], "m"), EntityKind::Record);
    assert_eq!(facts.anchors().count(), 1);
    assert_eq!(facts.skipped_count(), 1);
    let report = facts.diagnostics[0].to_string();
    assert!(report.starts_with("m.sv:"), "{report}");
    assert!(report.contains(codes::ANCHOR_OUT_OF_BOUNDS), "{report}");
    assert!(report.contains("ghost"), "{report}");
}

#[test]
fn test_unknown_node_kind_does_not_stop_emission() {
    let mut b = TreeBuilder::new("module m; endmodule");
    let kw = b.token(TokenKind::MODULE_KW, 0, "module");
    let m = b.token(TokenKind::SYMBOL_IDENTIFIER, 7, "m");
    let header = b.node(NodeKind::MODULE_HEADER, [Some(kw), Some(m)]).unwrap();
    let module = b.node(NodeKind::MODULE_DECLARATION, [Some(header)]).unwrap();
    let wrapper = b.node(NodeKind::from_raw(4242), [Some(module)]).unwrap();
    let tree = b.finish(Some(wrapper)).unwrap();

    let file = FileIdentity::new("m.sv");
    let facts = emit_unresolved(&tree, &file);

    assert_defined(&facts, &entity(&file, &[], "m"), EntityKind::Record);
    assert_eq!(facts.warning_count(), 1);
    let warning = &facts.diagnostics[0];
    assert_eq!(warning.severity, Severity::Warning);
    assert_eq!(warning.code(), Some(codes::UNKNOWN_NODE_KIND));
    assert!(warning.message.contains("4242"));
}
