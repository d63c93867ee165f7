//! Collecting facts from many files
//!
//! Files are independent: each tree is read-only and each emission owns its
//! state, so files are emitted in parallel. The sink is the only shared
//! piece; it accepts whole files in any order.

use std::collections::BTreeSet;

use parking_lot::Mutex;
use rayon::prelude::*;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use super::emitter::{EmitError, Emitter};
use super::facts::{FileFacts, IndexFact};
use super::resolve::SymbolResolver;
use super::vname::FileIdentity;
use crate::syntax::SyntaxTree;

/// Destination for completed files.
///
/// A file is published exactly once and only when its emission finished;
/// cancelled files never reach the sink.
pub trait FactSink: Send + Sync {
    fn publish(&self, facts: FileFacts) -> Result<(), EmitError>;
}

/// Keeps every published file in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    files: Mutex<Vec<FileFacts>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.files.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.lock().is_empty()
    }

    /// Published files ordered by identity, independent of arrival order.
    pub fn into_files(self) -> Vec<FileFacts> {
        let mut files = self.files.into_inner();
        files.sort_by(|a, b| a.file.cmp(&b.file));
        files
    }

    /// Union of all published fact sets.
    pub fn facts(&self) -> BTreeSet<IndexFact> {
        self.files
            .lock()
            .iter()
            .flat_map(|file| file.facts.iter().cloned())
            .collect()
    }
}

impl FactSink for MemorySink {
    fn publish(&self, facts: FileFacts) -> Result<(), EmitError> {
        self.files.lock().push(facts);
        Ok(())
    }
}

/// One file to emit.
#[derive(Clone, Copy)]
pub struct EmitJob<'a> {
    pub tree: &'a SyntaxTree,
    pub file: &'a FileIdentity,
    pub resolver: &'a dyn SymbolResolver,
}

/// Outcome of [`emit_all`].
#[derive(Debug, Default)]
pub struct EmitSummary {
    pub published: usize,
    pub cancelled: usize,
    /// Diagnostics across all published files.
    pub diagnostics: usize,
    /// Files the sink refused.
    pub failed: Vec<(FileIdentity, EmitError)>,
}

enum Outcome {
    Published(usize),
    Cancelled,
    Failed(FileIdentity, EmitError),
}

/// Emit every job in parallel and publish each finished file to `sink`.
pub fn emit_all<S>(emitter: &Emitter, jobs: &[EmitJob<'_>], sink: &S, cancel: &CancellationToken) -> EmitSummary
where
    S: FactSink + ?Sized,
{
    let outcomes: Vec<Outcome> = jobs
        .par_iter()
        .map(|job| {
            match emitter.emit_cancellable(job.tree, job.file, job.resolver, cancel) {
                Ok(facts) => {
                    let diagnostics = facts.diagnostics.len();
                    match sink.publish(facts) {
                        Ok(()) => Outcome::Published(diagnostics),
                        Err(err) => {
                            warn!(file = %job.file, %err, "sink rejected file");
                            Outcome::Failed(job.file.clone(), err)
                        }
                    }
                }
                Err(err) if err.is_cancelled() => Outcome::Cancelled,
                Err(err) => Outcome::Failed(job.file.clone(), err),
            }
        })
        .collect();

    let mut summary = EmitSummary::default();
    for outcome in outcomes {
        match outcome {
            Outcome::Published(diagnostics) => {
                summary.published += 1;
                summary.diagnostics += diagnostics;
            }
            Outcome::Cancelled => summary.cancelled += 1,
            Outcome::Failed(file, err) => summary.failed.push((file, err)),
        }
    }
    debug!(
        published = summary.published,
        cancelled = summary.cancelled,
        failed = summary.failed.len(),
        "emitted files"
    );
    summary
}
