//! Benchmarks for the full recomputation pipeline.
//!
//! Run with: cargo bench

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use folio::{
    Document, DocumentIndex, Node, assign_ids, extract_outline, number_captions, number_headings,
};

/// Build a synthetic document of `chapters` chapters with sections,
/// figures, tables and code.
fn sample_document(chapters: usize) -> Document {
    let mut blocks = Vec::new();
    for c in 0..chapters {
        blocks.push(Node::heading(1, format!("Chapter {c}")));
        for s in 0..5 {
            blocks.push(Node::heading(2, format!("Section {c}.{s}")));
            blocks.push(Node::paragraph("Lorem ipsum dolor sit amet, consectetur adipiscing elit."));
            blocks.push(Node::heading(3, "Details"));
            blocks.push(Node::image().with_caption("Figure caption"));
            blocks.push(Node::table([["Key", "Value"], ["a", "1"], ["b", "2"]]).with_caption("Data"));
            blocks.push(Node::code_block(Some("rust"), "fn main() {\n    let x = 1;\n    println!(\"{x}\");\n}"));
            blocks.push(Node::container("blockquote", vec![Node::paragraph("Quoted")]));
        }
        blocks.push(Node::page_break());
    }
    Document::from_blocks(blocks)
}

fn bench_assign_ids(c: &mut Criterion) {
    let doc = sample_document(50);
    c.bench_function("assign_ids", |b| {
        b.iter(|| assign_ids(black_box(&doc)));
    });
}

fn bench_engines(c: &mut Criterion) {
    let doc = assign_ids(&sample_document(50));
    c.bench_function("number_headings", |b| {
        b.iter(|| number_headings(black_box(&doc)));
    });
    c.bench_function("number_captions", |b| {
        b.iter(|| number_captions(black_box(&doc)));
    });
    c.bench_function("extract_outline", |b| {
        b.iter(|| extract_outline(black_box(&doc)));
    });
}

fn bench_rebuild(c: &mut Criterion) {
    let doc = sample_document(50);
    let mut index = DocumentIndex::new();
    c.bench_function("index_rebuild", |b| {
        b.iter(|| {
            index.rebuild(black_box(&doc));
        });
    });
}

fn bench_json(c: &mut Criterion) {
    let json = sample_document(50).to_json().unwrap();
    c.bench_function("document_from_json", |b| {
        b.iter(|| Document::from_json(black_box(&json)).unwrap());
    });
}

criterion_group!(benches, bench_assign_ids, bench_engines, bench_rebuild, bench_json);
criterion_main!(benches);
