//! Stable identifier assignment.
//!
//! Headings, images and tables need identifiers so numbers and
//! cross-references survive re-edits. Nodes that already carry an id keep it
//! verbatim; the rest receive `heading-N`, `figure-N` or `table-N` from a
//! per-prefix counter that only advances for unassigned nodes.
//!
//! The counters live for one call. Callers persist the returned tree so the
//! next pass sees the ids and leaves them alone.

use std::collections::HashSet;

use crate::model::{Document, Node, Role};

/// Kinds of node that receive identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdKind {
    Heading,
    Figure,
    Table,
}

impl IdKind {
    /// Id kind for a role, or `None` for roles that are never assigned ids.
    pub fn for_role(role: Role) -> Option<Self> {
        match role {
            Role::Heading(_) => Some(IdKind::Heading),
            Role::Image => Some(IdKind::Figure),
            Role::Table => Some(IdKind::Table),
            Role::CodeBlock | Role::PageBreak | Role::Text | Role::Container => None,
        }
    }

    pub fn prefix(self) -> &'static str {
        match self {
            IdKind::Heading => "heading",
            IdKind::Figure => "figure",
            IdKind::Table => "table",
        }
    }
}

/// Return a copy of `doc` in which every heading, image and table has an id.
///
/// The input is not modified. Running this on its own output returns an
/// identical document.
pub fn assign_ids(doc: &Document) -> Document {
    let mut out = doc.clone();
    assign_ids_in_place(&mut out);
    out
}

/// Assign ids in place, returning how many were written.
pub fn assign_ids_in_place(doc: &mut Document) -> usize {
    let mut taken = HashSet::new();
    for (_, block) in doc.blocks() {
        collect_ids(block, &mut taken);
    }

    let mut state = IdState {
        taken,
        counters: [0; 3],
        assigned: 0,
    };
    for block in doc.blocks_mut() {
        assign_recursive(block, &mut state);
    }
    state.assigned
}

struct IdState {
    /// Every id present in the input plus those handed out so far.
    taken: HashSet<String>,
    /// Next counter value per kind, indexed by `IdKind as usize`.
    counters: [u32; 3],
    assigned: usize,
}

impl IdState {
    fn next_id(&mut self, kind: IdKind) -> String {
        let counter = &mut self.counters[kind as usize];
        loop {
            *counter += 1;
            let candidate = format!("{}-{}", kind.prefix(), counter);
            if self.taken.insert(candidate.clone()) {
                return candidate;
            }
        }
    }
}

/// Add every stored id in `node`'s subtree to `taken`.
pub(crate) fn collect_ids(node: &Node, taken: &mut HashSet<String>) {
    if let Some(id) = node.id() {
        taken.insert(id.to_string());
    }
    for child in &node.content {
        collect_ids(child, taken);
    }
}

fn assign_recursive(node: &mut Node, state: &mut IdState) {
    if let Some(kind) = IdKind::for_role(node.role)
        && node.id().is_none()
    {
        let id = state.next_id(kind);
        log::trace!("assigned id {id}");
        node.attrs.id = Some(id);
        state.assigned += 1;
    }

    for child in &mut node.content {
        assign_recursive(child, state);
    }
}
