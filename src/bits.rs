use num_bigint::BigUint;
use num_traits::Zero;

/// An ordered string of binary digits, most significant first.
///
/// Unlike the integer it converts into, a `Bits` remembers its leading
/// zeros. Conversions through [`BigUint`] drop them, which is why payloads
/// are framed with a leading one before they are ranked.
#[derive(Debug, Clone, Default, Hash, PartialEq, Eq)]
pub struct Bits(Vec<bool>);

impl Bits {
    pub fn empty() -> Self {
        Self(Vec::new())
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn push(&mut self, bit: bool) {
        self.0.push(bit);
    }
    pub fn extend(&mut self, other: &Self) {
        self.0.extend_from_slice(&other.0);
    }
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.iter().copied()
    }
    pub fn first(&self) -> Option<bool> {
        self.0.first().copied()
    }
    /// Splits off the last `n` bits. Returns `None` if there are fewer.
    pub fn split_tail(mut self, n: usize) -> Option<(Self, Self)> {
        if self.0.len() < n {
            return None;
        }
        let tail = self.0.split_off(self.0.len() - n);
        Some((self, Self(tail)))
    }
    /// Drops the first bit.
    pub fn behead(mut self) -> Self {
        if !self.0.is_empty() {
            self.0.remove(0);
        }
        self
    }
    /// Fixed-width big-endian rendering of a byte.
    pub fn byte(value: u8) -> Self {
        Self((0..8).rev().map(|i| value >> i & 1 == 1).collect())
    }
}

/// BigUint isomorphism (up to leading zeros).
/// zero renders as the single bit "0"
impl From<&BigUint> for Bits {
    fn from(n: &BigUint) -> Self {
        if n.is_zero() {
            return Self(vec![false]);
        }
        Self((0..n.bits()).rev().map(|i| n.bit(i)).collect())
    }
}
impl From<&Bits> for BigUint {
    fn from(bits: &Bits) -> Self {
        bits.iter().fold(BigUint::zero(), |acc, bit| {
            let acc = acc << 1u32;
            if bit { acc + 1u32 } else { acc }
        })
    }
}

/// u8 reading of the low bits
impl From<&Bits> for u8 {
    fn from(bits: &Bits) -> u8 {
        bits.iter().fold(0u8, |acc, bit| acc << 1 | bit as u8)
    }
}

impl From<Vec<bool>> for Bits {
    fn from(bits: Vec<bool>) -> Self {
        Self(bits)
    }
}

/// str isomorphism over '0' and '1'
impl TryFrom<&str> for Bits {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                _ => Err(format!("not a bit: {:?}", c)),
            })
            .collect::<Result<Vec<bool>, _>>()
            .map(Self)
    }
}

impl std::fmt::Display for Bits {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        self.0
            .iter()
            .map(|b| write!(f, "{}", if *b { '1' } else { '0' }))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_drops_leading_zeros() {
        let bits = Bits::try_from("000101").unwrap();
        let n = BigUint::from(&bits);
        assert!(n == BigUint::from(5u32));
        assert!(Bits::from(&n).to_string() == "101");
    }

    #[test]
    fn integer_zero() {
        assert!(Bits::from(&BigUint::zero()).to_string() == "0");
        assert!(BigUint::from(&Bits::empty()) == BigUint::zero());
    }

    #[test]
    fn integer_wide() {
        let text = format!("1{}", "01".repeat(120));
        let bits = Bits::try_from(text.as_str()).unwrap();
        assert!(Bits::from(&BigUint::from(&bits)) == bits);
    }

    #[test]
    fn split_tail() {
        let bits = Bits::try_from("1101100111").unwrap();
        let (head, tail) = bits.split_tail(8).unwrap();
        assert!(head.to_string() == "11");
        assert!(tail.to_string() == "01100111");
        assert!(Bits::try_from("1011").unwrap().split_tail(8).is_none());
    }

    #[test]
    fn byte_is_fixed_width() {
        assert!(Bits::byte(5).to_string() == "00000101");
        assert!(u8::from(&Bits::byte(0xA7)) == 0xA7);
    }

    #[test]
    fn behead() {
        assert!(Bits::try_from("1001").unwrap().behead().to_string() == "001");
        assert!(Bits::empty().behead().is_empty());
    }
}
