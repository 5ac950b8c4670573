//! Error types for folio operations.
//!
//! The numbering and outline engines are total over the document shape and
//! never fail. Errors only arise at the edges: reading and parsing input.

use thiserror::Error;

/// Errors that can occur while loading or serializing a document.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
