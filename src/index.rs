//! Recomputation boundary for consumers.
//!
//! [`DocumentIndex`] is what a navigation panel or TOC block holds on to. On
//! every change notification (or a manual refresh) it recomputes everything
//! from scratch. When the new input cannot be loaded it logs the failure and
//! keeps serving the last good [`Snapshot`], so the user never sees a blank
//! outline because of one bad update.

use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::ids::assign_ids_in_place;
use crate::model::Document;
use crate::numbering::{Captions, HeadingNumbers, number_captions, number_headings};
use crate::outline::{OutlineConfig, OutlineItem, extract_outline_with_config};
use crate::toc::{DEFAULT_TOC_DEPTH, TocEntry, TocNode, generate_toc, nest_toc};
use crate::xref::{Reference, resolve_reference};

/// Configuration for a [`DocumentIndex`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IndexConfig {
    /// Deepest heading level shown in the TOC (clamped to 1..=3).
    pub toc_depth: u8,
    pub outline: OutlineConfig,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            toc_depth: DEFAULT_TOC_DEPTH,
            outline: OutlineConfig::default(),
        }
    }
}

/// Everything derived from one version of a document.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// The document with ids assigned. Callers persist this so the next
    /// pass keeps the same ids.
    pub document: Document,
    pub outline: Vec<OutlineItem>,
    pub headings: HeadingNumbers,
    pub captions: Captions,
    pub toc: Vec<TocEntry>,
    /// Number of successful rebuilds that produced this snapshot.
    pub generation: u64,
    /// Ids written by the ID pass for this snapshot.
    pub ids_assigned: usize,
}

impl Snapshot {
    /// Run the full pipeline over `doc`.
    pub fn compute(doc: &Document, config: &IndexConfig) -> Self {
        let mut document = doc.clone();
        let ids_assigned = assign_ids_in_place(&mut document);

        let headings = number_headings(&document);
        let captions = number_captions(&document);
        let outline = extract_outline_with_config(&document, &config.outline);
        let toc = generate_toc(&headings, config.toc_depth);

        Self {
            document,
            outline,
            headings,
            captions,
            toc,
            generation: 0,
            ids_assigned,
        }
    }

    /// Resolve a cross-reference against this snapshot.
    pub fn resolve(&self, id: &str) -> Option<Reference> {
        resolve_reference(id, &self.headings, &self.captions)
    }

    /// The TOC as a hierarchy.
    pub fn nested_toc(&self) -> Vec<TocNode> {
        nest_toc(&self.toc)
    }
}

/// Holds the latest good snapshot and rebuilds it on demand.
#[derive(Debug, Default)]
pub struct DocumentIndex {
    config: IndexConfig,
    current: Option<Snapshot>,
    generation: u64,
}

impl DocumentIndex {
    /// Create an index with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an index with the specified configuration.
    pub fn with_config(config: IndexConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// The last good snapshot, if any rebuild has succeeded.
    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.current.as_ref()
    }

    /// Number of successful rebuilds so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Recompute everything from `doc`.
    pub fn rebuild(&mut self, doc: &Document) -> &Snapshot {
        let mut snapshot = Snapshot::compute(doc, &self.config);
        self.generation += 1;
        snapshot.generation = self.generation;

        log::debug!(
            "rebuilt document index (generation {}): {} outline items, {} headings, {} captions, {} toc entries, {} ids assigned",
            snapshot.generation,
            snapshot.outline.len(),
            snapshot.headings.len(),
            snapshot.captions.len(),
            snapshot.toc.len(),
            snapshot.ids_assigned,
        );

        self.current.insert(snapshot)
    }

    /// Parse `json` and rebuild.
    ///
    /// On failure the previous snapshot is kept and the error returned.
    pub fn refresh_from_json(&mut self, json: &str) -> Result<&Snapshot> {
        let loaded = Document::from_json(json);
        self.refresh_with(loaded)
    }

    /// Read a JSON document from `reader` and rebuild.
    ///
    /// On failure the previous snapshot is kept and the error returned.
    pub fn refresh_from_reader<R: Read>(&mut self, reader: R) -> Result<&Snapshot> {
        let loaded = Document::from_reader(reader);
        self.refresh_with(loaded)
    }

    fn refresh_with(&mut self, loaded: Result<Document>) -> Result<&Snapshot> {
        match loaded {
            Ok(doc) => Ok(self.rebuild(&doc)),
            Err(err) => {
                log::warn!(
                    "document refresh failed, keeping generation {}: {err}",
                    self.generation
                );
                Err(err)
            }
        }
    }

    /// Resolve a cross-reference against the current snapshot.
    pub fn resolve(&self, id: &str) -> Option<Reference> {
        self.current.as_ref()?.resolve(id)
    }
}
