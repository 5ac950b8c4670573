//! WASM bindings for browser-based editors.
//!
//! Each function takes the document as JSON (a root node or a
//! `{front, middle, back}` split) and returns its result as JSON.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::ids::assign_ids;
use crate::model::Document;
use crate::numbering::{number_captions, number_headings};
use crate::outline::extract_outline;
use crate::toc::generate_toc;

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "wasm")]
    console_error_panic_hook::set_once();
}

fn load(json: &str) -> Result<Document, JsValue> {
    Document::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Return the document with ids assigned to headings, images and tables.
#[wasm_bindgen(js_name = assignIds)]
pub fn assign_ids_json(json: &str) -> Result<String, JsValue> {
    let doc = load(json)?;
    to_json(&assign_ids(&doc))
}

/// Flat navigation outline.
#[wasm_bindgen(js_name = outline)]
pub fn outline_json(json: &str) -> Result<String, JsValue> {
    let doc = load(json)?;
    to_json(&extract_outline(&doc))
}

/// Heading numbers for every zone, in document order.
#[wasm_bindgen(js_name = headingNumbers)]
pub fn heading_numbers_json(json: &str) -> Result<String, JsValue> {
    let doc = load(json)?;
    to_json(number_headings(&doc).entries())
}

/// Captioned figures and tables, in document order.
#[wasm_bindgen(js_name = captions)]
pub fn captions_json(json: &str) -> Result<String, JsValue> {
    let doc = load(json)?;
    to_json(number_captions(&doc).items())
}

/// Table of contents down to `depth` (1-3).
#[wasm_bindgen(js_name = toc)]
pub fn toc_json(json: &str, depth: u8) -> Result<String, JsValue> {
    let doc = load(json)?;
    to_json(&generate_toc(&number_headings(&doc), depth))
}
