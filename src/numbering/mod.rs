//! Numbering engines.
//!
//! - Heading numbers: hierarchical, zone-gated (`1`, `1.2`, `1.2.3`)
//! - Caption numbers: flat per-kind counters for figures and tables
//!
//! Both are pure functions of a document. Counters live for one call.

pub mod caption;
pub mod heading;

pub use caption::{CaptionInfo, CaptionKind, Captions, caption_text, number_captions};
pub use heading::{
    HeadingCounters, HeadingNumber, HeadingNumbers, MAX_NUMBERED_LEVEL, number_headings,
};
