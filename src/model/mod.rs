//! Content tree model.
//!
//! This module contains:
//! - Node roles and attributes (the closed set the engines dispatch on)
//! - Documents, regions and zone classification
//! - The JSON shape nodes are loaded from and written back to

mod document;
mod json;
mod node;

pub use document::{Document, Regions, Zone};
pub use node::{Attrs, Node, Role};
