use crate::domain::Domain;

/// Errors that can occur while encoding or decoding a deck.
///
/// A deck that simply carries no message is not an error; decoding
/// reports that as `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The framed payload needs more cards than the layout leaves free.
    Overflow { bits: usize },
    /// A permutation rank outside `[0, n!)` was requested.
    Rank { n: usize },
    /// A domain tag with no matching Domain.
    Tag { n: usize },
    /// The message contains a character missing from its domain table.
    Unencodable { ch: char, domain: Domain },
    /// The bits end in the middle of a codeword.
    Malformed,
    /// Empty messages cannot be told apart from "no message".
    Empty,
    /// The input is not a permutation of the 52 face values.
    Deck(String),
}

impl std::fmt::Display for CodecError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Overflow { bits } => write!(
                f,
                "payload of {} bits exceeds {}! card orderings",
                bits,
                crate::MAX_PAYLOAD_CARDS
            ),
            Self::Rank { n } => write!(f, "rank out of range for {} symbols", n),
            Self::Tag { n } => write!(f, "undefined domain tag {}", n),
            Self::Unencodable { ch, domain } => {
                write!(f, "character {:?} not in {} table", ch, domain)
            }
            Self::Malformed => write!(f, "bits do not parse into codewords"),
            Self::Empty => write!(f, "empty message"),
            Self::Deck(s) => write!(f, "invalid deck: {}", s),
        }
    }
}

impl std::error::Error for CodecError {}

pub type Result<T> = std::result::Result<T, CodecError>;
