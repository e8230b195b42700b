//! Criterion benchmarks for the Bhasha normalization pipeline.
//!
//! Covers the individual stages and whole-pipeline runs:
//! - Tokenization and punctuation filtering
//! - Porter and suffix stemming
//! - Single and batch normalization

use std::hint::black_box;
use std::sync::Arc;

use bhasha::analysis::tokenizer::{Tokenizer, WordTokenizer};
use bhasha::language::{LanguageRegistry, Selector};
use bhasha::pipeline::Normalizer;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};

/// Generate test documents from a word list.
fn generate_test_documents(words: &[&str], count: usize) -> Vec<String> {
    let mut documents = Vec::with_capacity(count);
    for i in 0..count {
        let doc_length = 20 + (i % 40); // Variable length documents
        let mut doc_words = Vec::with_capacity(doc_length);

        for j in 0..doc_length {
            let word_idx = (i * 7 + j * 13) % words.len(); // Pseudo-random distribution
            doc_words.push(words[word_idx]);
        }

        documents.push(doc_words.join(" "));
    }

    documents
}

const ENGLISH_WORDS: &[&str] = &[
    "the", "children", "were", "running", "towards", "churches", "and", "houses,", "while",
    "relational", "databases", "don't", "generalize", "boxes", "of", "ponies!", "happily",
    "agreed", "it's", "motoring",
];

const TELUGU_WORDS: &[&str] = &[
    "వాడుగా", "పుస్తకం", "ఇంటికి", "బల్లమీద", "మరియు", "ఒక", "నేను", "చాలా", "ఊరులో",
    "రామును", "వచ్చాడు.",
];

fn normalizer() -> Normalizer {
    let registry = LanguageRegistry::with_defaults().expect("default registry");
    Normalizer::new(Arc::new(registry))
}

/// Benchmark the individual stages.
fn bench_stages(c: &mut Criterion) {
    let mut group = c.benchmark_group("stages");

    let normalizer = normalizer();
    let registry = Arc::clone(normalizer.registry());
    let english = registry.resolve(&Selector::Index(1)).expect("english");
    let telugu = registry.resolve(&Selector::Index(2)).expect("telugu");
    let english_docs = generate_test_documents(ENGLISH_WORDS, 100);
    let telugu_docs = generate_test_documents(TELUGU_WORDS, 100);
    let tokenizer = WordTokenizer::new();

    group.bench_function("tokenize", |b| {
        b.iter(|| {
            let tokens: Vec<_> = tokenizer
                .tokenize(black_box(&english_docs[0]))
                .expect("tokenize")
                .collect();
            black_box(tokens)
        })
    });

    group.bench_function("filter_punctuation", |b| {
        b.iter(|| black_box(normalizer.filter_punctuation(black_box(&english_docs[0]))))
    });

    group.bench_function("porter_stem", |b| {
        b.iter(|| black_box(normalizer.stem(black_box(&english_docs[0]), english)))
    });

    group.bench_function("suffix_stem", |b| {
        b.iter(|| black_box(normalizer.stem(black_box(&telugu_docs[0]), telugu)))
    });

    group.bench_function("english_lemmatize", |b| {
        b.iter(|| black_box(normalizer.lemmatize(black_box(&english_docs[0]), english)))
    });

    group.finish();
}

/// Benchmark whole-pipeline runs.
fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");

    let normalizer = normalizer();
    let english_docs = generate_test_documents(ENGLISH_WORDS, 1000);
    let telugu_docs = generate_test_documents(TELUGU_WORDS, 1000);

    group.bench_function("run_english", |b| {
        b.iter(|| black_box(normalizer.run(&Selector::Index(1), black_box(&english_docs[0]))))
    });

    group.bench_function("run_telugu", |b| {
        b.iter(|| black_box(normalizer.run(&Selector::Index(2), black_box(&telugu_docs[0]))))
    });

    group.throughput(Throughput::Elements(english_docs.len() as u64));
    group.bench_function("run_batch_english", |b| {
        b.iter(|| black_box(normalizer.run_batch(&Selector::Index(1), black_box(&english_docs))))
    });

    group.bench_function("run_sequential_english", |b| {
        b.iter(|| {
            for text in &english_docs {
                let _ = black_box(normalizer.run(&Selector::Index(1), black_box(text)));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_stages, bench_pipeline);
criterion_main!(benches);
