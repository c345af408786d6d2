use crate::error::CodecError;
use std::sync::LazyLock;

/// Character-frequency profile used to parameterize entropy coding.
///
/// The discriminant is the tag written onto the domain cards, so the
/// numbering is part of the deck format.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Domain {
    All = 0,
    Num = 1,
    Lower = 2,
    LowerAndUpper = 3,
    LettersNumbers = 4,
    LatLong = 5,
}

impl Domain {
    pub const fn all() -> [Self; 6] {
        [
            Self::All,
            Self::Num,
            Self::Lower,
            Self::LowerAndUpper,
            Self::LettersNumbers,
            Self::LatLong,
        ]
    }

    /// Static character weights for this domain. Weights are relative; only
    /// their order of magnitude against each other shapes the code.
    pub fn table(&self) -> &'static [(char, u32)] {
        TABLES[*self as usize].as_slice()
    }

    /// Whether every character of `text` has a codeword in this domain.
    pub fn covers(&self, text: &str) -> bool {
        let table = self.table();
        text.chars().all(|ch| table.iter().any(|(c, _)| *c == ch))
    }

    fn is_lat_long(text: &str) -> bool {
        text.chars()
            .all(|c| c.is_ascii_digit() || matches!(c, ',' | '.' | 'N' | 'E' | 'S' | 'W'))
    }

    /// first matching rule wins, evaluated on the text with all whitespace removed
    fn literal(text: &str) -> Self {
        let ref clean = text.chars().filter(|c| !c.is_whitespace()).collect::<String>();
        if clean.chars().all(|c| c.is_ascii_digit()) {
            Self::Num
        } else if clean.chars().all(|c| c.is_ascii_lowercase()) {
            Self::Lower
        } else if clean.chars().all(|c| c.is_ascii_alphabetic()) {
            Self::LowerAndUpper
        } else if clean.chars().all(|c| c.is_ascii_alphanumeric()) {
            Self::LettersNumbers
        } else if Self::is_lat_long(clean) {
            Self::LatLong
        } else {
            Self::All
        }
    }
}

/// Classification. Whitespace is ignored when picking the rule but not when
/// checking coverage: a domain whose table lacks some character of the raw
/// text falls back to All. Whitespace-only (and empty) text is Num.
impl From<&str> for Domain {
    fn from(text: &str) -> Self {
        match Self::literal(text) {
            domain if domain.covers(text) => domain,
            _ => Self::All,
        }
    }
}

/// usize isomorphism, checked
impl TryFrom<usize> for Domain {
    type Error = CodecError;
    fn try_from(n: usize) -> Result<Self, Self::Error> {
        Self::all()
            .into_iter()
            .find(|d| *d as usize == n)
            .ok_or(CodecError::Tag { n })
    }
}
impl From<Domain> for usize {
    fn from(d: Domain) -> usize {
        d as usize
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::All => "ALL",
                Self::Num => "NUM",
                Self::Lower => "LOWER",
                Self::LowerAndUpper => "LOWER_AND_UPPER",
                Self::LettersNumbers => "LETTERS_NUMBERS",
                Self::LatLong => "LAT_LONG",
            }
        )
    }
}

// ============================================================================
// FREQUENCY TABLES
// English letter frequencies in thousandths of a percent. Capitals are
// weighted at a tenth of their lowercase counterparts.
// ============================================================================
#[rustfmt::skip]
const LOWERCASE: [(char, u32); 26] = [
    ('a', 8120), ('b', 1490), ('c', 2710), ('d', 4320), ('e', 12020), ('f', 2300),
    ('g', 2030), ('h', 5920), ('i', 7310), ('j', 100), ('k', 690), ('l', 3980),
    ('m', 2610), ('n', 6950), ('o', 7680), ('p', 1820), ('q', 110), ('r', 6020),
    ('s', 6280), ('t', 9100), ('u', 2880), ('v', 1110), ('w', 2090), ('x', 170),
    ('y', 2110), ('z', 70),
];
#[rustfmt::skip]
const UPPERCASE: [(char, u32); 26] = [
    ('A', 812), ('B', 149), ('C', 271), ('D', 432), ('E', 1202), ('F', 230),
    ('G', 203), ('H', 592), ('I', 731), ('J', 10), ('K', 69), ('L', 398),
    ('M', 261), ('N', 695), ('O', 768), ('P', 182), ('Q', 11), ('R', 602),
    ('S', 628), ('T', 910), ('U', 288), ('V', 111), ('W', 209), ('X', 17),
    ('Y', 211), ('Z', 7),
];
#[rustfmt::skip]
const DIGITS: [(char, u32); 10] = [
    ('0', 90), ('1', 80), ('2', 70), ('3', 60), ('4', 50),
    ('5', 40), ('6', 30), ('7', 20), ('8', 10), ('9', 5),
];
#[rustfmt::skip]
const PUNCTUATION: [(char, u32); 11] = [
    (' ', 110), ('\t', 100), ('.', 6970), (',', 5930), ('\'', 1530), ('"', 1330),
    (':', 900), ('-', 770), (';', 740), ('?', 430), ('!', 390),
];
/// rest of printable ascii, so that All accepts any ascii text
#[rustfmt::skip]
const SYMBOLS: [(char, u32); 24] = [
    ('\n', 10), ('(', 10), (')', 10), ('[', 10), (']', 10), ('{', 10),
    ('}', 10), ('<', 10), ('>', 10), ('/', 10), ('\\', 10), ('|', 10),
    ('@', 10), ('#', 10), ('$', 10), ('%', 10), ('^', 10), ('&', 10),
    ('*', 10), ('_', 10), ('+', 10), ('=', 10), ('`', 10), ('~', 10),
];
#[rustfmt::skip]
const COORDINATES: [(char, u32); 17] = [
    ('0', 186), ('1', 342), ('2', 223), ('3', 334), ('4', 208), ('5', 215),
    ('6', 233), ('7', 211), ('8', 173), ('9', 168), ('N', 169), ('E', 164),
    ('S', 31), ('W', 36), (',', 200), ('.', 400), (' ', 600),
];
/// word separators for the letter domains
const SPACE_WORDS: [(char, u32); 1] = [(' ', 18000)];
const SPACE_DIGITS: [(char, u32); 1] = [(' ', 20)];

static TABLES: LazyLock<[Vec<(char, u32)>; 6]> = LazyLock::new(|| {
    [
        [
            LOWERCASE.as_slice(),
            PUNCTUATION.as_slice(),
            DIGITS.as_slice(),
            UPPERCASE.as_slice(),
            SYMBOLS.as_slice(),
        ]
        .concat(),
        [DIGITS.as_slice(), SPACE_DIGITS.as_slice()].concat(),
        [LOWERCASE.as_slice(), SPACE_WORDS.as_slice()].concat(),
        [LOWERCASE.as_slice(), UPPERCASE.as_slice(), SPACE_WORDS.as_slice()].concat(),
        [
            LOWERCASE.as_slice(),
            UPPERCASE.as_slice(),
            DIGITS.as_slice(),
            SPACE_WORDS.as_slice(),
        ]
        .concat(),
        COORDINATES.to_vec(),
    ]
});
