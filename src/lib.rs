//! # folio
//!
//! Outline, numbering and table-of-contents engine for rich document trees.
//!
//! ## Features
//!
//! - Stable ids for headings, figures and tables that survive re-edits
//! - Zone-aware hierarchical heading numbers (`1`, `1.2`, `1.2.3`)
//! - Independent figure and table caption numbering
//! - A flat navigation outline mixing headings, tables, images, code blocks
//!   and break markers
//! - Depth-filtered table of contents, flat or nested
//!
//! Every engine is a pure function of an immutable [`Document`]; counters
//! live for one call and nothing is cached between edits.
//!
//! ## Quick Start
//!
//! ```
//! use folio::{Document, Node, assign_ids, generate_toc, number_headings};
//!
//! let doc = Document::from_blocks(vec![
//!     Node::heading(1, "Introduction"),
//!     Node::heading(2, "Scope"),
//!     Node::heading(1, "Method"),
//! ]);
//!
//! let doc = assign_ids(&doc);
//! let headings = number_headings(&doc);
//! assert_eq!(headings.number_of("heading-2"), Some("1.1"));
//!
//! let toc = generate_toc(&headings, 1);
//! assert_eq!(toc.len(), 2);
//! ```
//!
//! ## Loading JSON
//!
//! Documents load from the editor's JSON, either a root node or an explicit
//! front/middle/back split:
//!
//! ```
//! use folio::{Document, extract_outline};
//!
//! let doc = Document::from_json(r#"{
//!     "front": [{"type": "heading", "attrs": {"level": 1}, "content": [{"type": "text", "text": "Preface"}]}],
//!     "middle": [{"type": "heading", "attrs": {"level": 1}, "content": [{"type": "text", "text": "Chapter"}]}]
//! }"#).unwrap();
//!
//! let outline = extract_outline(&doc);
//! assert_eq!(outline[1].text, "Chapter");
//! ```

pub mod error;
pub mod ids;
pub mod index;
pub mod model;
pub mod numbering;
pub mod outline;
pub mod toc;
pub(crate) mod util;
pub mod xref;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{Error, Result};
pub use ids::{IdKind, assign_ids, assign_ids_in_place};
pub use index::{DocumentIndex, IndexConfig, Snapshot};
pub use model::{Attrs, Document, Node, Regions, Role, Zone};
pub use numbering::{
    CaptionInfo, CaptionKind, Captions, HeadingNumber, HeadingNumbers, number_captions,
    number_headings,
};
pub use outline::{
    OutlineConfig, OutlineItem, OutlineKind, extract_outline, extract_outline_with_config,
};
pub use toc::{TocEntry, TocNode, apply_pages, generate_toc, nest_toc};
pub use xref::{Reference, ReferenceKind, resolve_reference};
