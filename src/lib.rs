//! Encode short text messages as orderings of a standard 52-card deck.
//!
//! A message is classified into a character [`Domain`], entropy coded with that
//! domain's static Huffman table, framed and checksummed, and the resulting
//! integer is written onto the deck as a permutation rank (Lehmer code).
//! Decoding reads the three card groups back, verifies the checksum, and
//! returns the message or `None`.
//!
//! ## Core Types
//!
//! - [`Card`] — A single face value in `0..52`
//! - [`Deck`] — A validated ordering of all 52 cards
//! - [`Domain`] — Character-frequency profile selected per message
//! - [`Bits`] — Big-endian bit string with lossless integer conversion
//! - [`Codebook`] — Deterministic Huffman code for one domain
//! - [`Messenger`] — Seeded entry point for `encode` / `decode`
pub mod bits;
pub mod cards;
pub mod checksum;
pub mod codec;
pub mod domain;
pub mod error;
pub mod huffman;
pub mod lehmer;
pub mod messenger;

pub use bits::*;
pub use cards::*;
pub use checksum::*;
pub use codec::*;
pub use domain::*;
pub use error::*;
pub use huffman::*;
pub use lehmer::*;
pub use messenger::*;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and fuzzing.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// DECK LAYOUT
// Face-value ranges are fixed; only the payload range floats with message size.
// ============================================================================
/// Number of distinct cards in a deck.
pub const DECK_SIZE: usize = 52;
/// Cards 0..=5 carry the payload start index (6! = 720 ranks).
pub const START_CARDS: std::ops::RangeInclusive<u8> = 0..=5;
/// Cards 6..=8 carry the domain tag (3! = 6 ranks, one per Domain).
pub const DOMAIN_CARDS: std::ops::RangeInclusive<u8> = 6..=8;
/// Lowest card the payload range may start at without overlapping metadata.
pub const MIN_START_INDEX: usize = 9;
/// Largest payload group, i.e. 43 cards (43! ≈ 2^175).
pub const MAX_PAYLOAD_CARDS: usize = DECK_SIZE - MIN_START_INDEX;

// ============================================================================
// PAYLOAD FRAMING
// ============================================================================
/// Width of the trailing checksum field.
pub const CHECKSUM_BITS: usize = 8;
/// Rendering of the "no message" decode outcome.
pub const NO_MESSAGE: &str = "NULL";

// ============================================================================
// RUNTIME
// ============================================================================
/// Seed for the deck generator when none is supplied.
pub const DEFAULT_SEED: u64 = 42;

/// Initialize terminal logging at the given level.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
