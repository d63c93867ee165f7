//! Emitting many files at once.

use std::collections::BTreeSet;

use tokio_util::sync::CancellationToken;

use hdlkit::SyntaxTree;
use hdlkit::index::{
    EmitJob, Emitter, FileIdentity, IndexFact, MemorySink, Unresolved, emit_all, emit_unresolved,
};

use crate::helpers::tree_fixtures::{chip_tree, empty_module};

fn workload() -> (Vec<SyntaxTree>, Vec<FileIdentity>) {
    let mut trees = vec![chip_tree()];
    let mut files = vec![FileIdentity::new("rtl/chip.sv")];
    for index in 0..16 {
        trees.push(empty_module(&format!("unit{index}")));
        files.push(FileIdentity::new(format!("rtl/unit{index}.sv")));
    }
    (trees, files)
}

fn jobs<'a>(trees: &'a [SyntaxTree], files: &'a [FileIdentity]) -> Vec<EmitJob<'a>> {
    trees
        .iter()
        .zip(files)
        .map(|(tree, file)| EmitJob {
            tree,
            file,
            resolver: &Unresolved,
        })
        .collect()
}

#[test]
fn test_parallel_emission_matches_serial() {
    let (trees, files) = workload();
    let serial: BTreeSet<IndexFact> = trees
        .iter()
        .zip(&files)
        .flat_map(|(tree, file)| emit_unresolved(tree, file).facts)
        .collect();

    let sink = MemorySink::new();
    let summary = emit_all(
        &Emitter::default(),
        &jobs(&trees, &files),
        &sink,
        &CancellationToken::new(),
    );

    assert_eq!(summary.published, trees.len());
    assert_eq!(sink.facts(), serial);
}

#[test]
fn test_parallel_emission_is_repeatable() {
    let (trees, files) = workload();
    let run = || {
        let sink = MemorySink::new();
        emit_all(
            &Emitter::default(),
            &jobs(&trees, &files),
            &sink,
            &CancellationToken::new(),
        );
        sink.into_files()
    };
    assert_eq!(run(), run());
}

#[test]
fn test_cancelled_files_are_never_published() {
    let (trees, files) = workload();
    let sink = MemorySink::new();
    let cancel = CancellationToken::new();
    cancel.cancel();

    let summary = emit_all(&Emitter::default(), &jobs(&trees, &files), &sink, &cancel);

    assert_eq!(summary.cancelled, trees.len());
    assert_eq!(summary.published, 0);
    assert!(sink.is_empty());
}
