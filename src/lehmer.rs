use crate::error::CodecError;
use crate::error::Result;
use num_bigint::BigUint;
use num_traits::One;
use num_traits::ToPrimitive;
use num_traits::Zero;
use std::sync::LazyLock;

/// `0!` through `52!`.
static FACTORIALS: LazyLock<Vec<BigUint>> = LazyLock::new(|| {
    (1..=crate::DECK_SIZE as u32).fold(vec![BigUint::one()], |mut acc, n| {
        let next = acc.last().expect("seeded with 0!") * n;
        acc.push(next);
        acc
    })
});

/// Bijection between `[0, n!)` and the orderings of `n` distinct symbols.
///
/// Each position contributes a digit in the factorial number system: the
/// index of its symbol among the symbols not yet placed. The ordering that
/// is already sorted has rank zero.
pub struct Lehmer;

impl Lehmer {
    /// `n!` for `n <= 52`.
    pub fn factorial(n: usize) -> &'static BigUint {
        &FACTORIALS[n]
    }

    /// Smallest number of symbols whose orderings can express `value`,
    /// i.e. the least `n` with `n! > value`.
    pub fn capacity(value: &BigUint) -> Option<usize> {
        (1..=crate::DECK_SIZE).find(|n| Self::factorial(*n) > value)
    }

    /// Rank of an ordering of distinct symbols.
    pub fn rank<T: Ord + Copy>(ordered: &[T]) -> BigUint {
        let mut remaining = ordered.to_vec();
        remaining.sort();
        debug_assert!(remaining.windows(2).all(|w| w[0] < w[1]));
        ordered.iter().fold(BigUint::zero(), |acc, symbol| {
            let radix = remaining.len();
            let digit = remaining.partition_point(|s| s < symbol);
            remaining.remove(digit);
            acc * radix + digit
        })
    }

    /// Ordering of `candidates` with the given rank. Fails unless
    /// `num < candidates.len()!`.
    pub fn unrank<T: Ord + Copy>(num: &BigUint, candidates: &[T]) -> Result<Vec<T>> {
        let n = candidates.len();
        if n > crate::DECK_SIZE || num >= Self::factorial(n) {
            return Err(CodecError::Rank { n });
        }
        let mut remaining = candidates.to_vec();
        remaining.sort();
        let mut num = num.clone();
        let mut ordered = Vec::with_capacity(n);
        for place in (0..n).rev() {
            let radix = Self::factorial(place);
            let digit = (&num / radix).to_usize().ok_or(CodecError::Rank { n })?;
            num %= radix;
            ordered.push(remaining.remove(digit));
        }
        Ok(ordered)
    }
}
