use criterion::{criterion_group, criterion_main, Criterion};
use search_core::tokenizer::tokenize;
use search_core::{DocumentStatus, SearchServer};

const WORDS: &[&str] = &[
    "white", "cat", "fashionable", "collar", "fluffy", "tail", "groomed", "dog", "expressive", "eyes",
    "starling", "box", "city", "sleep", "in", "the", "and", "on",
];

fn corpus_text(seed: usize, len: usize) -> String {
    (0..len).map(|i| WORDS[(seed * 7 + i * 13) % WORDS.len()]).collect::<Vec<_>>().join(" ")
}

fn build_server(docs: usize) -> SearchServer {
    let mut server = SearchServer::with_stop_words("in the and on");
    for id in 0..docs {
        let ratings = [(id % 10) as i32, -((id % 3) as i32)];
        let status = if id % 5 == 0 { DocumentStatus::Banned } else { DocumentStatus::Actual };
        let _ = server.add_document(id as i32, &corpus_text(id, 40), status, &ratings);
    }
    server
}

fn bench_tokenize(c: &mut Criterion) {
    let text = corpus_text(1, 2_000);
    c.bench_function("tokenize_2k_words", |b| b.iter(|| tokenize(&text).count()));
}

fn bench_find_top(c: &mut Criterion) {
    let server = build_server(2_000);
    c.bench_function("find_top_documents_2k_docs", |b| {
        b.iter(|| server.find_top_documents("fluffy groomed cat -collar"))
    });
    c.bench_function("match_document_2k_docs", |b| b.iter(|| server.match_document("fluffy groomed cat", 1_001)));
}

criterion_group!(benches, bench_tokenize, bench_find_top);
criterion_main!(benches);
