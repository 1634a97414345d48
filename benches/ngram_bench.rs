// benches/ngram_bench.rs
// Per-call building blocks: normalisation, extraction, character filter, scoring.

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use lingdet::{
    DEU, ENG, FRA, FrequencyTable, JPN, KOR, LanguageSet, NgramOrder, RUS, SPA, UKR, ZHO, filter,
    ngram::{ExtractedNgrams, NormalizedText},
    score::Scorer,
};
use std::hint::black_box;
use std::sync::Arc;

const SAMPLES: &[(&str, &str)] = &[
    ("ascii", "The quick brown fox jumps over the lazy dog while the children are playing."),
    ("latin_diacritics", "Größe Straße Fußball, déjà vu café naïve, mañana está jardín."),
    ("cyrillic", "Дети играют во дворе школы, пока родители ждут у ворот."),
    ("cjk", "你好，世界！日本語のテキストと한국어 문장"),
];

fn bench_normalize_and_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("ngram");
    for (name, text) in SAMPLES {
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_function(format!("normalize/{name}"), |b| {
            b.iter(|| NormalizedText::new(black_box(text)))
        });
        group.bench_function(format!("extract_all/{name}"), |b| {
            b.iter(|| ExtractedNgrams::extract(black_box(text), &NgramOrder::ALL))
        });
        group.bench_function(format!("extract_trigrams/{name}"), |b| {
            b.iter(|| ExtractedNgrams::extract(black_box(text), &[NgramOrder::Trigram]))
        });
    }
    group.finish();
}

fn bench_filter(c: &mut Criterion) {
    let all = LanguageSet::all();
    let few = [ENG, FRA, DEU, SPA, RUS, UKR, ZHO, JPN, KOR];
    let mut group = c.benchmark_group("filter");
    for (name, text) in SAMPLES {
        let normalized = NormalizedText::new(text);
        group.bench_function(format!("all_languages/{name}"), |b| {
            b.iter(|| filter::narrow(black_box(normalized.as_str()), all.as_slice()))
        });
        group.bench_function(format!("nine_languages/{name}"), |b| {
            b.iter(|| filter::narrow(black_box(normalized.as_str()), &few))
        });
    }
    group.finish();
}

fn bench_score(c: &mut Criterion) {
    let text = SAMPLES[0].1;
    let tables: Vec<Arc<FrequencyTable>> = NgramOrder::ALL
        .iter()
        .map(|&order| Arc::new(FrequencyTable::from_corpus(ENG, order, text)))
        .collect();
    let ngrams = ExtractedNgrams::extract(text, &NgramOrder::ALL);
    let scorer = Scorer::default();
    c.bench_function("score/all_orders", |b| {
        b.iter(|| scorer.score(black_box(&ngrams), black_box(&tables)))
    });
}

criterion_group!(benches, bench_normalize_and_extract, bench_filter, bench_score);
criterion_main!(benches);
