use crate::error::CodecError;

/// A playing card identified by its face value.
///
/// The 52 cards are bijectively mapped to `0..52`. Only identity and the
/// natural order of face values matter to the codec; the `rank * 4 + suit`
/// reading is kept for display.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "cli", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "cli", serde(try_from = "u8", into = "u8"))]
pub struct Card(u8);

impl Card {
    const RANKS: [char; 13] = [
        '2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K', 'A',
    ];
    const SUITS: [char; 4] = ['c', 'd', 'h', 's'];

    /// Rank character, 2 through Ace.
    pub fn rank(&self) -> char {
        Self::RANKS[(self.0 / 4) as usize]
    }
    /// Suit character, clubs through spades.
    pub fn suit(&self) -> char {
        Self::SUITS[(self.0 % 4) as usize]
    }
    /// Every card in ascending face-value order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..crate::DECK_SIZE as u8).map(Self)
    }
}

/// u8 isomorphism
/// each card is its location in a sorted deck 0-51
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}
impl TryFrom<u8> for Card {
    type Error = CodecError;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n as usize {
            n if n < crate::DECK_SIZE => Ok(Self(n as u8)),
            _ => Err(CodecError::Deck(format!("face value {} out of range", n))),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

/// str isomorphism, either a face value ("35") or poker notation ("Ts")
impl TryFrom<&str> for Card {
    type Error = CodecError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        if let Ok(n) = s.parse::<u8>() {
            return Self::try_from(n);
        }
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(s), None) => {
                let rank = Self::RANKS.iter().position(|&c| c == r.to_ascii_uppercase());
                let suit = Self::SUITS.iter().position(|&c| c == s.to_ascii_lowercase());
                match (rank, suit) {
                    (Some(r), Some(s)) => Ok(Self((r * 4 + s) as u8)),
                    _ => Err(CodecError::Deck(format!("unknown card {}{}", r, s))),
                }
            }
            _ => Err(CodecError::Deck(format!("unparseable card {:?}", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        for card in Card::all() {
            assert!(card == Card::try_from(u8::from(card)).unwrap());
        }
    }

    #[test]
    fn bijective_str() {
        for card in Card::all() {
            assert!(card == Card::try_from(card.to_string().as_str()).unwrap());
        }
    }

    #[test]
    fn parse_face_value() {
        assert!(Card::try_from("35").unwrap() == Card::try_from("Ts").unwrap());
        assert!(Card::try_from("39").unwrap() == Card::try_from("js").unwrap());
        assert!(Card::try_from("0").unwrap().to_string() == "2c");
        assert!(Card::try_from("51").unwrap().to_string() == "As");
    }

    #[test]
    fn reject_out_of_range() {
        assert!(Card::try_from(52u8).is_err());
        assert!(Card::try_from("Xz").is_err());
        assert!(Card::try_from("").is_err());
    }
}
