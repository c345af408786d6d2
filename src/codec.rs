use crate::bits::Bits;
use crate::cards::Card;
use crate::cards::Deck;
use crate::checksum::Checksum;
use crate::domain::Domain;
use crate::error::CodecError;
use crate::error::Result;
use crate::huffman::Codebook;
use crate::lehmer::Lehmer;
use crate::CHECKSUM_BITS;
use crate::DECK_SIZE;
use crate::DOMAIN_CARDS;
use crate::MAX_PAYLOAD_CARDS;
use crate::MIN_START_INDEX;
use crate::START_CARDS;
use num_bigint::BigUint;
use num_traits::ToPrimitive;

/// Message bits plus their trailing checksum.
///
/// The message is framed with a leading `1` so that codewords starting with
/// `0` survive the trip through an integer. The checksum covers the framed
/// bits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    framed: Bits,
    checksum: u8,
}

impl Payload {
    /// Framed message bits, checksum excluded.
    pub fn framed(&self) -> &Bits {
        &self.framed
    }
    pub fn checksum(&self) -> u8 {
        self.checksum
    }
    /// Entropy-coded message with the frame bit removed.
    pub fn message(&self) -> Bits {
        self.framed.clone().behead()
    }
    /// Whether the stored checksum matches the framed bits.
    pub fn verified(&self) -> bool {
        self.framed.first() == Some(true) && Checksum::digest(&self.framed) == self.checksum
    }
    /// The integer written onto the payload cards.
    pub fn value(&self) -> BigUint {
        let mut bits = self.framed.clone();
        bits.extend(&Bits::byte(self.checksum));
        BigUint::from(&bits)
    }
}

/// frame raw message bits and checksum them
impl From<Bits> for Payload {
    fn from(message: Bits) -> Self {
        let mut framed = Bits::from(vec![true]);
        framed.extend(&message);
        let checksum = Checksum::digest(&framed);
        Self { framed, checksum }
    }
}

/// split a ranked integer back into framed bits and checksum
impl TryFrom<&BigUint> for Payload {
    type Error = CodecError;
    fn try_from(value: &BigUint) -> Result<Self> {
        match Bits::from(value).split_tail(CHECKSUM_BITS) {
            Some((framed, checksum)) if !framed.is_empty() => Ok(Self {
                checksum: u8::from(&checksum),
                framed,
            }),
            _ => Err(CodecError::Malformed),
        }
    }
}

/// Summary of how a message would be laid out on a deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub domain: Domain,
    pub message_bits: usize,
    pub checksum: u8,
    pub payload_bits: usize,
    pub payload_cards: Option<usize>,
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "domain        {}", self.domain)?;
        writeln!(f, "message bits  {}", self.message_bits)?;
        writeln!(f, "checksum      {:#04x}", self.checksum)?;
        writeln!(f, "payload bits  {}", self.payload_bits)?;
        match self.payload_cards {
            Some(n) => write!(f, "payload cards {} of {}", n, MAX_PAYLOAD_CARDS),
            None => write!(f, "payload cards overflow (max {})", MAX_PAYLOAD_CARDS),
        }
    }
}

/// Places a message onto a deck and reads it back.
///
/// Cards are grouped by face value, not by position:
///
/// ```text
/// 0..=5        start index of the payload range
/// 6..=8        domain tag
/// start..=51   payload (framed message bits + checksum)
/// otherwise    filler
/// ```
///
/// The encoded deck lists filler ascending, then the payload, domain, and
/// start groups, each in reverse unranked order. Reading a group from the
/// bottom of the deck upward therefore recovers its unranked order.
pub struct Codec;

impl Codec {
    pub fn encode(message: &str, deck: &Deck) -> Result<Deck> {
        if message.is_empty() {
            return Err(CodecError::Empty);
        }
        let domain = Domain::from(message);
        let payload = Payload::from(Codebook::of(domain).encode(message)?);
        let value = payload.value();
        let n = Lehmer::capacity(&value)
            .filter(|n| *n <= MAX_PAYLOAD_CARDS)
            .ok_or(CodecError::Overflow {
                bits: value.bits() as usize,
            })?;
        let start = DECK_SIZE - n;
        log::debug!(
            "{} message: {} framed bits + checksum {:#04x} on {} cards from {}",
            domain,
            payload.framed().len(),
            payload.checksum(),
            n,
            start
        );
        let groups = [
            Self::place(&value, &deck.within((start as u8)..=(DECK_SIZE as u8 - 1)))?,
            Self::place(&BigUint::from(usize::from(domain)), &deck.within(DOMAIN_CARDS))?,
            Self::place(&BigUint::from(start), &deck.within(START_CARDS))?,
        ]
        .concat();
        Deck::try_from(
            Card::all()
                .filter(|c| !groups.contains(c))
                .chain(groups.iter().copied())
                .collect::<Vec<_>>(),
        )
    }

    /// `None` is the ordinary "no message" outcome.
    pub fn decode(deck: &Deck) -> Option<String> {
        let start = Lehmer::rank(&deck.tail(START_CARDS)).to_usize()?;
        let tag = Lehmer::rank(&deck.tail(DOMAIN_CARDS)).to_usize()?;
        if !(MIN_START_INDEX..DECK_SIZE).contains(&start) {
            log::debug!("start index {} outside payload range", start);
            return None;
        }
        let value = Lehmer::rank(&deck.tail((start as u8)..=(DECK_SIZE as u8 - 1)));
        let payload = Payload::try_from(&value).ok()?;
        let domain = Domain::try_from(tag).ok()?;
        if !payload.verified() {
            log::debug!("checksum mismatch on {} payload bits", payload.framed().len());
            return None;
        }
        let text = Codebook::of(domain).decode(&payload.message()).ok()?;
        Self::plausible(&text, domain).then_some(text)
    }

    /// Layout summary without touching a deck.
    pub fn inspect(message: &str) -> Result<Report> {
        if message.is_empty() {
            return Err(CodecError::Empty);
        }
        let domain = Domain::from(message);
        let bits = Codebook::of(domain).encode(message)?;
        let message_bits = bits.len();
        let payload = Payload::from(bits);
        let value = payload.value();
        Ok(Report {
            domain,
            message_bits,
            checksum: payload.checksum(),
            payload_bits: value.bits() as usize,
            payload_cards: Lehmer::capacity(&value).filter(|n| *n <= MAX_PAYLOAD_CARDS),
        })
    }

    /// unrank onto the candidates, bottom card first
    fn place(value: &BigUint, candidates: &[Card]) -> Result<Vec<Card>> {
        let mut cards = Lehmer::unrank(value, candidates)?;
        cards.reverse();
        Ok(cards)
    }

    fn plausible(text: &str, domain: Domain) -> bool {
        match domain {
            _ if text.is_empty() => false,
            Domain::All => text
                .chars()
                .all(|c| c.is_ascii_graphic() || matches!(c, ' ' | '\t' | '\n')),
            _ => true,
        }
    }
}
