//! Benchmark suite for comment tokenizing and type formatting

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use docket_core::types::{Param, RecordField};
use docket_core::{format, summarize, tokenize, SymbolIndex, SymbolKind, TypeNode};

fn build_index() -> SymbolIndex {
    let mut index = SymbolIndex::new();
    index.register("app", SymbolKind::Namespace);
    for i in 0..100 {
        index.register(format!("app.Type{i}"), SymbolKind::Class);
    }
    index
}

/// Generate comment text with the given number of sentences
fn generate_comment(sentences: usize) -> String {
    (0..sentences)
        .map(|i| {
            format!(
                "Sentence {i} mentions {{@link app.Type{} the type}} and {{@code value{i}}}. ",
                i % 100
            )
        })
        .collect()
}

fn generate_signature(params: usize) -> TypeNode {
    let params = (0..params)
        .map(|i| {
            let ty = TypeNode::union([
                TypeNode::instance(format!("app.Type{}", i % 100)),
                TypeNode::String,
                TypeNode::Void,
            ]);
            if i % 2 == 0 {
                Param::optional(ty)
            } else {
                Param::new(ty)
            }
        })
        .collect();
    TypeNode::function(
        params,
        Some(TypeNode::record(vec![
            RecordField::new("ok", TypeNode::Boolean),
            RecordField::new("value", TypeNode::union([TypeNode::Number, TypeNode::Null])),
        ])),
    )
}

fn bench_tokenize(c: &mut Criterion) {
    let index = build_index();
    let mut group = c.benchmark_group("tokenize");
    for sentences in [10, 100, 1000] {
        let text = generate_comment(sentences);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(sentences), &text, |b, text| {
            b.iter(|| tokenize(black_box(text), &index));
        });
    }
    group.finish();
}

fn bench_summarize(c: &mut Criterion) {
    let text = generate_comment(100);
    c.bench_function("summarize", |b| b.iter(|| summarize(black_box(&text))));
}

fn bench_format(c: &mut Criterion) {
    let index = build_index();
    let mut group = c.benchmark_group("format");
    for params in [1, 10, 50] {
        let ty = generate_signature(params);
        group.bench_with_input(BenchmarkId::from_parameter(params), &ty, |b, ty| {
            b.iter(|| format(black_box(ty), &index).expect("well-formed type"));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_tokenize, bench_summarize, bench_format);
criterion_main!(benches);
