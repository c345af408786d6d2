use crate::bits::Bits;
use num_bigint::BigUint;

/// One-byte Pearson hash over the decimal rendering of a bit string.
///
/// This guards against decks that happen to parse but were never encoded,
/// not against deliberate forgery.
pub struct Checksum;

impl Checksum {
    /// Substitution table from RFC 3074.
    const TABLE: [u8; 256] = [
        98, 6, 85, 150, 36, 23, 112, 164, 135, 207, 169, 5, 26, 64, 165, 219, //
        61, 20, 68, 89, 130, 63, 52, 102, 24, 229, 132, 245, 80, 216, 195, 115, //
        90, 168, 156, 203, 177, 120, 2, 190, 188, 7, 100, 185, 174, 243, 162, 10, //
        237, 18, 253, 225, 8, 208, 172, 244, 255, 126, 101, 79, 145, 235, 228, 121, //
        123, 251, 67, 250, 161, 0, 107, 97, 241, 111, 181, 82, 249, 33, 69, 55, //
        59, 153, 29, 9, 213, 167, 84, 93, 30, 46, 94, 75, 151, 114, 73, 222, //
        197, 96, 210, 45, 16, 227, 248, 202, 51, 152, 252, 125, 81, 206, 215, 186, //
        39, 158, 178, 187, 131, 136, 1, 49, 50, 17, 141, 91, 47, 129, 60, 99, //
        154, 35, 86, 171, 105, 34, 38, 200, 147, 58, 77, 118, 173, 246, 76, 254, //
        133, 232, 196, 144, 198, 124, 53, 4, 108, 74, 223, 234, 134, 230, 157, 139, //
        189, 205, 199, 128, 176, 19, 211, 236, 127, 192, 231, 70, 233, 88, 146, 44, //
        183, 201, 22, 83, 13, 214, 116, 109, 159, 32, 95, 226, 140, 220, 57, 12, //
        221, 31, 209, 182, 143, 92, 149, 184, 148, 62, 113, 65, 37, 27, 106, 166, //
        3, 14, 204, 72, 21, 41, 56, 66, 28, 193, 40, 217, 25, 54, 179, 117, //
        238, 87, 240, 155, 180, 170, 242, 212, 191, 163, 78, 218, 137, 194, 175, 110, //
        43, 119, 224, 71, 122, 142, 42, 160, 104, 48, 247, 103, 15, 11, 138, 239, //
    ];

    /// Pearson hash of raw bytes.
    pub fn pearson(bytes: &[u8]) -> u8 {
        bytes
            .iter()
            .fold(0u8, |h, b| Self::TABLE[(h ^ b) as usize])
    }

    /// Digest of the integer value of `bits`, rendered in base 10.
    pub fn digest(bits: &Bits) -> u8 {
        Self::pearson(BigUint::from(bits).to_string().as_bytes())
    }

    /// Digest as a fixed 8-bit field.
    pub fn bits(bits: &Bits) -> Bits {
        Bits::byte(Self::digest(bits))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_permutation() {
        let mut table = Checksum::TABLE.to_vec();
        table.sort();
        assert!(table == (0..=255).collect::<Vec<u8>>());
    }

    #[test]
    fn known_values() {
        assert!(Checksum::pearson(b"") == 0);
        assert!(Checksum::pearson(b"1") == 18);
        assert!(Checksum::pearson(b"12345") == 25);
        assert!(Checksum::pearson(b"123456789") == 158);
    }

    #[test]
    fn digest_reads_integer_value() {
        let bits = Bits::try_from("11000000111001").unwrap();
        assert!(Checksum::digest(&bits) == Checksum::pearson(b"12345"));
        let padded = Bits::try_from("0011000000111001").unwrap();
        assert!(Checksum::digest(&padded) == Checksum::digest(&bits));
    }

    #[test]
    fn digest_is_deterministic() {
        let bits = Bits::try_from("1011011101111").unwrap();
        assert!(Checksum::digest(&bits) == Checksum::digest(&bits.clone()));
        assert!(Checksum::bits(&bits).len() == 8);
    }

    #[test]
    fn digest_sees_single_flips() {
        let text = "1011001110001111000011111000001111110000000111111110";
        let base = Bits::try_from(text).unwrap();
        let digest = Checksum::digest(&base);
        let differing = (0..text.len())
            .map(|i| {
                let mut flipped = text.chars().collect::<Vec<_>>();
                flipped[i] = if flipped[i] == '0' { '1' } else { '0' };
                flipped.into_iter().collect::<String>()
            })
            .map(|s| Bits::try_from(s.as_str()).unwrap())
            .filter(|b| Checksum::digest(b) != digest)
            .count();
        assert!(differing == text.len());
    }
}
