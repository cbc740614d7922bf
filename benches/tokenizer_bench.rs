//! Criterion benchmarks for the built-in tokenizers.

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use fts_tokenizers::fts::TokenizerModule;
use std::hint::black_box;

const WORDS: &[&str] = &[
    "search", "Engine", "café", "indexing", "Tokenizers", "unites", "repentance",
    "naïve", "résumé", "stemming", "Unicode", "boundaries", "東京", "Straße",
];

/// Generate plain-text documents from a fixed vocabulary.
fn generate_text(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            let len = 50 + (i % 100);
            (0..len)
                .map(|j| WORDS[(i * 7 + j * 13) % WORDS.len()])
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Wrap each document's words in markup and entities.
fn generate_html(texts: &[String]) -> Vec<String> {
    texts
        .iter()
        .map(|text| {
            let body: String = text
                .split(' ')
                .enumerate()
                .map(|(i, word)| match i % 4 {
                    0 => format!("<b>{word}</b> "),
                    1 => format!("<a href=\"/{i}\">{word}</a> "),
                    2 => format!("{word}&nbsp;"),
                    _ => format!("{word} "),
                })
                .collect();
            format!("<html><head><script>var x = 1;</script></head><body><p>{body}</p></body></html>")
        })
        .collect()
}

fn run(module: TokenizerModule, args: &[&str], docs: &[String]) -> usize {
    let instance = module.create(args).unwrap();
    let mut count = 0;
    for doc in docs {
        let mut cursor = instance.open(black_box(doc.as_bytes())).unwrap();
        while let Some(token) = cursor.next().unwrap() {
            black_box(token);
            count += 1;
        }
    }
    count
}

fn bench_tokenizers(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenizers");

    let texts = generate_text(100);
    let html = generate_html(&texts);
    let bytes: usize = texts.iter().map(String::len).sum();
    let html_bytes: usize = html.iter().map(String::len).sum();

    group.throughput(Throughput::Bytes(bytes as u64));
    group.bench_function("character", |b| {
        b.iter(|| run(TokenizerModule::character(), &[], &texts))
    });
    group.bench_function("unicodesn_default", |b| {
        b.iter(|| run(TokenizerModule::unicode_stemming(), &[], &texts))
    });
    group.bench_function("unicodesn_english", |b| {
        b.iter(|| run(TokenizerModule::unicode_stemming(), &["stemmer=english"], &texts))
    });

    group.throughput(Throughput::Bytes(html_bytes as u64));
    group.bench_function("html_english", |b| {
        b.iter(|| run(TokenizerModule::html(), &["stemmer=english"], &html))
    });

    group.finish();
}

criterion_group!(benches, bench_tokenizers);
criterion_main!(benches);
