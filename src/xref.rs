//! Cross-reference resolution.
//!
//! Turns a node id into the label a reference to it should display:
//! `"Section 1.2"`, `"Figure 3"` or `"Table 1"`. Because ids are stable,
//! references keep pointing at the same node while its number changes.

use serde::Serialize;

use crate::model::Zone;
use crate::numbering::{CaptionKind, Captions, HeadingNumbers};

/// What a reference points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceKind {
    Section,
    Figure,
    Table,
}

impl From<CaptionKind> for ReferenceKind {
    fn from(kind: CaptionKind) -> Self {
        match kind {
            CaptionKind::Figure => ReferenceKind::Figure,
            CaptionKind::Table => ReferenceKind::Table,
        }
    }
}

/// A resolved cross-reference target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reference {
    pub id: String,
    pub kind: ReferenceKind,
    /// Number as displayed (`"1.2"`, `"3"`); empty for unnumbered sections.
    pub number: String,
    /// Text to render in place of the reference.
    pub label: String,
}

/// Resolve `id` against computed heading and caption numbers.
///
/// Front and back matter headings have no number and resolve to their own
/// text. Ids that belong to neither set resolve to `None`.
pub fn resolve_reference(
    id: &str,
    headings: &HeadingNumbers,
    captions: &Captions,
) -> Option<Reference> {
    if let Some(heading) = headings.get(id) {
        let label = match heading.zone {
            Zone::Middle => format!("Section {}", heading.number),
            Zone::Front | Zone::Back => heading.text.clone(),
        };
        return Some(Reference {
            id: id.to_string(),
            kind: ReferenceKind::Section,
            number: heading.number.clone(),
            label,
        });
    }

    captions.get(id).map(|caption| Reference {
        id: id.to_string(),
        kind: caption.kind.into(),
        number: caption.number.to_string(),
        label: format!("{} {}", caption.kind.label(), caption.number),
    })
}
