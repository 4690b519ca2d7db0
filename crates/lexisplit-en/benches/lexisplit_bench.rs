// Criterion benchmarks for lexisplit-en.
//
// Uses the fixture dictionary in tests/data/words.json.
//
// Run:
//   cargo bench -p lexisplit-en --features handle

use criterion::{Criterion, criterion_group, criterion_main};

use lexisplit_en::handle::LexHandle;

const TEXT: &str = "The children left their boxes by the houseboat. Cats, leaves and \
    knives; unkind overtime, kindness and handful. Moonlight, sunshine, rainbows, \
    waterfalls and fireplaces. Zzz quickly.";

fn load_handle() -> LexHandle {
    let path = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/words.json");
    let data = std::fs::read(&path).expect("failed to read words.json");
    LexHandle::from_json(&data).expect("LexHandle")
}

fn bench_tokenize(c: &mut Criterion) {
    let handle = load_handle();
    c.bench_function("tokenize_paragraph", |b| {
        b.iter(|| std::hint::black_box(handle.tokenize(std::hint::black_box(TEXT))));
    });
}

fn bench_split_words(c: &mut Criterion) {
    let handle = load_handle();
    let tokens = handle.tokenize(TEXT);
    c.bench_function("split_paragraph_tokens", |b| {
        b.iter(|| {
            for token in &tokens {
                std::hint::black_box(handle.split_word(token));
            }
        });
    });
}

/// Tokens that fall through every rule exercise the full compound scan.
fn bench_unknown_words(c: &mut Criterion) {
    let handle = load_handle();
    let words = ["quickly", "zzzzzzzzzzzz", "antidisestablishmentarianism"];
    c.bench_function("split_unknown_words", |b| {
        b.iter(|| {
            for word in words {
                std::hint::black_box(handle.split_word(word));
            }
        });
    });
}

fn bench_load_dictionary(c: &mut Criterion) {
    let path = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/words.json");
    let data = std::fs::read(&path).expect("failed to read words.json");
    c.bench_function("load_dictionary", |b| {
        b.iter(|| std::hint::black_box(LexHandle::from_json(&data).expect("LexHandle")));
    });
}

criterion_group!(
    benches,
    bench_tokenize,
    bench_split_words,
    bench_unknown_words,
    bench_load_dictionary
);
criterion_main!(benches);
