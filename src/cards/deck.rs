use super::card::Card;
use crate::Arbitrary;
use crate::error::CodecError;
use rand::Rng;
use rand::seq::SliceRandom;

/// An ordering of all 52 cards.
///
/// Every constructor checks that each face value appears exactly once, so
/// any `Deck` in hand is a valid permutation. Encoding produces one; decoding
/// accepts any.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cli", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "cli", serde(try_from = "Vec<Card>", into = "Vec<Card>"))]
pub struct Deck(Vec<Card>);

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// The sorted deck, 0 through 51.
    pub fn new() -> Self {
        Self(Card::all().collect())
    }
    /// Uniformly random ordering drawn from `rng`.
    pub fn shuffle<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = Card::all().collect::<Vec<_>>();
        cards.shuffle(rng);
        Self(cards)
    }
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
    /// Cards whose face value lies in `range`, read from the bottom of the
    /// deck upward.
    pub fn tail(&self, range: std::ops::RangeInclusive<u8>) -> Vec<Card> {
        self.0
            .iter()
            .rev()
            .filter(|c| range.contains(&u8::from(**c)))
            .copied()
            .collect()
    }
    /// Cards whose face value lies in `range`, in deck order.
    pub fn within(&self, range: std::ops::RangeInclusive<u8>) -> Vec<Card> {
        self.0
            .iter()
            .filter(|c| range.contains(&u8::from(**c)))
            .copied()
            .collect()
    }
}

/// Vec<Card> isomorphism, checked
impl TryFrom<Vec<Card>> for Deck {
    type Error = CodecError;
    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        if cards.len() != crate::DECK_SIZE {
            return Err(CodecError::Deck(format!(
                "expected {} cards, found {}",
                crate::DECK_SIZE,
                cards.len()
            )));
        }
        let mut seen = 0u64;
        for card in cards.iter() {
            let bit = 1u64 << u8::from(*card);
            if seen & bit != 0 {
                return Err(CodecError::Deck(format!("duplicate card {}", card)));
            }
            seen |= bit;
        }
        Ok(Self(cards))
    }
}
impl From<Deck> for Vec<Card> {
    fn from(deck: Deck) -> Self {
        deck.0
    }
}

/// Vec<u8> isomorphism, checked
impl TryFrom<Vec<u8>> for Deck {
    type Error = CodecError;
    fn try_from(values: Vec<u8>) -> Result<Self, Self::Error> {
        values
            .into_iter()
            .map(Card::try_from)
            .collect::<Result<Vec<Card>, _>>()
            .and_then(Self::try_from)
    }
}
impl From<&Deck> for Vec<u8> {
    fn from(deck: &Deck) -> Self {
        deck.0.iter().copied().map(u8::from).collect()
    }
}

/// str isomorphism: 52 cards separated by whitespace or commas,
/// optionally wrapped in brackets
impl TryFrom<&str> for Deck {
    type Error = CodecError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.trim()
            .trim_start_matches('[')
            .trim_end_matches(']')
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
            .map(Card::try_from)
            .collect::<Result<Vec<Card>, _>>()
            .and_then(Self::try_from)
    }
}

impl Arbitrary for Deck {
    fn random() -> Self {
        Self::shuffle(&mut rand::rng())
    }
}

impl std::fmt::Display for Deck {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let cards = self.0.iter().map(|c| c.to_string()).collect::<Vec<_>>();
        write!(f, "{}", cards.join(" "))
    }
}
