// Criterion benchmarks for caretspell-engine.
//
// Lookups run against a generated dictionary so no data files are needed.
//
// Run:
//   cargo bench -p caretspell-engine

use std::rc::Rc;

use caretspell_engine::matcher::default_strategy;
use caretspell_engine::session::{EditingSession, SessionOptions, TextBuffer};
use caretspell_engine::{Dictionary, SpellChecker};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

// ---------------------------------------------------------------------------
// Dictionary generation
// ---------------------------------------------------------------------------

const SYLLABLES: &[&str] = &[
    "ka", "lo", "mi", "ne", "su", "ta", "ri", "vo", "pe", "da", "\u{00E7}\u{00E3}", "\u{00E9}",
];

/// Deterministic pseudo-words built from syllables.
fn generate_words(count: usize) -> Vec<String> {
    let n = SYLLABLES.len();
    (0..count)
        .map(|i| {
            let mut word = String::new();
            let mut k = i;
            loop {
                word.push_str(SYLLABLES[k % n]);
                k /= n;
                if k == 0 {
                    break;
                }
            }
            word
        })
        .collect()
}

const LOOKUP_WORDS: &[&str] = &["kalo", "kalx", "klao", "mineta", "a\u{00E7}\u{00E3}o", "zzzzzz"];

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// Look up a fixed set of words in dictionaries of growing size.
fn bench_find_suggestions(c: &mut Criterion) {
    let strategy = default_strategy();
    let mut group = c.benchmark_group("find_suggestions");
    for size in [1_000usize, 10_000, 50_000] {
        let dictionary = Dictionary::from_words(generate_words(size));
        group.bench_with_input(BenchmarkId::from_parameter(size), &dictionary, |b, dict| {
            b.iter(|| {
                for word in LOOKUP_WORDS {
                    std::hint::black_box(strategy.find(word, dict));
                }
            });
        });
    }
    group.finish();
}

/// Build a dictionary: key precomputation for every entry.
fn bench_dictionary_build(c: &mut Criterion) {
    let words = generate_words(10_000);
    c.bench_function("dictionary_build_10000", |b| {
        b.iter(|| std::hint::black_box(Dictionary::from_words(words.iter().map(String::as_str))));
    });
}

/// Type a short sentence through a session, firing the boundary path.
fn bench_typing(c: &mut Criterion) {
    let checker = Rc::new(SpellChecker::new(Dictionary::from_words(generate_words(10_000))));
    let sentence = "kalx mineta klao suta vope ";

    c.bench_function("type_sentence_10000", |b| {
        b.iter(|| {
            let mut session = EditingSession::new(
                "bench",
                TextBuffer::new(""),
                Rc::clone(&checker),
                SessionOptions::default(),
            );
            for ch in sentence.chars() {
                session.surface_mut().insert(ch);
                std::hint::black_box(session.key_typed(ch));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_find_suggestions,
    bench_dictionary_build,
    bench_typing
);
criterion_main!(benches);
