//! Kythe JSON entry stream
//!
//! One JSON object per line, in the layout Kythe's `write_entries` tooling
//! reads: `source`, optional `edge_kind`/`target`, `fact_name`, and a
//! base64-encoded `fact_value`.

use std::io::Write;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use parking_lot::Mutex;
use serde::Serialize;

use super::emitter::EmitError;
use super::facts::{Entry, FileFacts};
use super::sink::FactSink;
use super::vname::VName;

#[derive(Serialize)]
struct JsonEntry<'a> {
    source: &'a VName,
    #[serde(skip_serializing_if = "Option::is_none")]
    edge_kind: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    target: Option<&'a VName>,
    fact_name: &'a str,
    #[serde(skip_serializing_if = "String::is_empty")]
    fact_value: String,
}

impl<'a> From<&'a Entry> for JsonEntry<'a> {
    fn from(entry: &'a Entry) -> Self {
        Self {
            source: &entry.source,
            edge_kind: entry.edge_kind,
            target: entry.target.as_ref(),
            fact_name: entry.fact_name,
            fact_value: STANDARD.encode(&entry.fact_value),
        }
    }
}

/// Write every entry of `facts` as a JSON line. Returns the entry count.
pub fn write_entries<W: Write>(writer: &mut W, facts: &FileFacts) -> Result<usize, EmitError> {
    let mut count = 0;
    for entry in facts.entries() {
        serde_json::to_writer(&mut *writer, &JsonEntry::from(&entry))?;
        writer.write_all(b"\n")?;
        count += 1;
    }
    Ok(count)
}

/// A sink that streams each published file to a writer.
///
/// Files arrive in completion order; each file's entries are written as one
/// uninterrupted block.
#[derive(Debug)]
pub struct JsonSink<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send> JsonSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl<W: Write + Send> FactSink for JsonSink<W> {
    fn publish(&self, facts: FileFacts) -> Result<(), EmitError> {
        let mut writer = self.writer.lock();
        write_entries(&mut *writer, &facts)?;
        writer.flush()?;
        Ok(())
    }
}
