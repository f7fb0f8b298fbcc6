use countdown::{best_words, is_valid, score_round, Board, Guess, Wordlist};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::convert::TryFrom;

const WORDS: &[&str] = &[
    "cat", "cats", "act", "acts", "dog", "dogs", "god", "gods", "cog", "cogs", "rod", "rods",
    "road", "roads", "toad", "toads", "dart", "darts", "cart", "carts", "coat", "coats", "coast",
    "coated", "coasted", "dogcartse",
];

fn bench_is_valid(c: &mut Criterion) {
    let board = Board::try_from("CATDOGRSE").unwrap();
    let wordlist = Wordlist::from_words(WORDS);
    c.bench_function("validate.is_valid", |b| {
        b.iter(|| {
            for word in WORDS {
                black_box(is_valid(word, &board, &wordlist));
            }
        })
    });
}

fn bench_score_round(c: &mut Criterion) {
    let board = Board::try_from("CATDOGRSE").unwrap();
    let wordlist = Wordlist::from_words(WORDS);
    let guesses = [
        Guess::new(0, "coasted"),
        Guess::new(1, "dogcartse"),
        Guess::new(2, "cc"),
        Guess::new(3, "roads"),
    ];
    c.bench_function("score.score_round", |b| {
        b.iter(|| score_round(&guesses, 4, &board, &wordlist).unwrap())
    });
}

fn bench_best_words(c: &mut Criterion) {
    let board = Board::try_from("CATDOGRSE").unwrap();
    let wordlist = Wordlist::from_words(WORDS);
    c.bench_function("ai.best_words", |b| {
        b.iter(|| best_words(&board, &wordlist, 5))
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(60);
    targets = bench_is_valid, bench_score_round, bench_best_words
}

criterion_main!(benches);
