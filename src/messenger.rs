use crate::cards::Deck;
use crate::codec::Codec;
use crate::error::Result;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Encode/decode entry point.
///
/// Owns the only state that outlives a call: the seeded generator that
/// deals the deck each message is laid onto.
#[derive(Debug, Clone)]
pub struct Messenger {
    rng: SmallRng,
}

impl Default for Messenger {
    fn default() -> Self {
        Self::from(crate::DEFAULT_SEED)
    }
}

impl From<u64> for Messenger {
    fn from(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Messenger {
    /// Deal a fresh deck and write `message` onto it.
    pub fn encode(&mut self, message: &str) -> Result<Deck> {
        let ref deck = Deck::shuffle(&mut self.rng);
        Codec::encode(message, deck)
    }
    /// Read a message off `deck`. `None` means the deck carries none.
    pub fn decode(&self, deck: &Deck) -> Option<String> {
        Codec::decode(deck)
    }
}
