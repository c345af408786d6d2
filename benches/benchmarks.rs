criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        ranking_full_deck,
        unranking_full_deck,
        building_codebooks,
        encoding_short_message,
        decoding_encoded_deck,
        decoding_random_deck,
}

fn ranking_full_deck(c: &mut criterion::Criterion) {
    let deck = Deck::random();
    c.bench_function("rank a 52-card ordering", |b| {
        b.iter(|| Lehmer::rank(deck.cards()))
    });
}

fn unranking_full_deck(c: &mut criterion::Criterion) {
    let ref deck = Deck::random();
    let ref num = Lehmer::rank(deck.cards());
    c.bench_function("unrank a 52-card ordering", |b| {
        b.iter(|| Lehmer::unrank(num, deck.cards()))
    });
}

fn building_codebooks(c: &mut criterion::Criterion) {
    c.bench_function("build the ALL domain Huffman code", |b| {
        b.iter(|| Codebook::from(Domain::All))
    });
}

fn encoding_short_message(c: &mut criterion::Criterion) {
    let ref deck = Deck::random();
    c.bench_function("encode a short mixed-case message", |b| {
        b.iter(|| Codec::encode("Hello, World!", deck))
    });
}

fn decoding_encoded_deck(c: &mut criterion::Criterion) {
    let ref deck = Codec::encode("Hello, World!", &Deck::random()).unwrap();
    c.bench_function("decode a deck carrying a message", |b| {
        b.iter(|| Codec::decode(deck))
    });
}

fn decoding_random_deck(c: &mut criterion::Criterion) {
    let ref deck = Deck::random();
    c.bench_function("decode a random deck", |b| b.iter(|| Codec::decode(deck)));
}

use deckcode::Arbitrary;
use deckcode::Codebook;
use deckcode::Codec;
use deckcode::Deck;
use deckcode::Domain;
use deckcode::Lehmer;
