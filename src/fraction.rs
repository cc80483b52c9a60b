//! Zigzag diagonal enumeration of the positive rationals.
//!
//! Walk the infinite fraction grid one anti-diagonal (a "line") at a time:
//! line `k` holds the `k` fractions whose numerator and denominator sum to
//! `k + 1`. Odd lines are walked top-to-bottom (numerator decreasing), even
//! lines bottom-to-top (numerator increasing), so consecutive lines join
//! without a jump:
//!
//! ```text
//! 1/1, 1/2, 2/1, 3/1, 2/2, 1/3, 1/4, 2/3, 3/2, 4/1, ...
//! ```
//!
//! [`zigzag_fraction`] maps a 1-based index in this sequence to its fraction.
//! Fractions are reported unreduced (2/2 stays 2/2), as the sequence defines.
//! Finding the line is O(1) via an integer square root.

use std::fmt;

/// An unreduced fraction from the zigzag sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fraction {
    pub numerator: u64,
    pub denominator: u64,
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// The k-th triangular number, widened so it cannot overflow.
fn triangular(k: u64) -> u128 {
    let k = k as u128;
    k * (k + 1) / 2
}

/// Returns the fraction at the given 1-based position of the zigzag walk.
///
/// Valid for every `index >= 1` up to `u64::MAX`.
pub fn zigzag_fraction(index: u64) -> Fraction {
    debug_assert!(index >= 1);

    // Line k ends at the k-th triangular number, so the target line is the
    // smallest k with k(k+1)/2 >= index. The quadratic-formula estimate
    // from the integer square root never overshoots; at most two upward
    // corrections absorb the isqrt truncation. All intermediates are u128
    // because 8 * index + 1 can exceed u64::MAX.
    let scaled = 8u128 * index as u128 + 1;
    let mut line = ((scaled.isqrt() - 1) / 2) as u64;
    while triangular(line) < index as u128 {
        line += 1;
    }

    let end = triangular(line);
    // end - line < index <= u64::MAX, so the offset fits back in u64.
    let position = index - (end - line as u128) as u64; // 1-based within the line

    if line % 2 == 1 {
        // Odd lines descend: numerator shrinks, denominator grows.
        Fraction {
            numerator: line - position + 1,
            denominator: position,
        }
    } else {
        Fraction {
            numerator: position,
            denominator: line - position + 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn first_terms() {
        let expected = [
            (1, 1),
            (1, 2),
            (2, 1),
            (3, 1),
            (2, 2),
            (1, 3),
            (1, 4),
            (2, 3),
            (3, 2),
            (4, 1),
        ];
        for (i, &(numerator, denominator)) in expected.iter().enumerate() {
            let fraction = zigzag_fraction(i as u64 + 1);
            assert_eq!((fraction.numerator, fraction.denominator), (numerator, denominator));
        }
    }

    #[test]
    fn worked_example() {
        assert_eq!(zigzag_fraction(14).to_string(), "2/4");
    }

    proptest! {
        /// Numerator and denominator of the index-th term sum to line + 1,
        /// and the index falls inside that line's triangular-number range.
        #[test]
        fn lies_on_its_line(index in 1u64..100_000) {
            let fraction = zigzag_fraction(index);
            prop_assert!(fraction.numerator >= 1);
            prop_assert!(fraction.denominator >= 1);

            let line = fraction.numerator + fraction.denominator - 1;
            let end = line * (line + 1) / 2;
            let start = end - line + 1;
            prop_assert!(start <= index && index <= end);
        }

        /// Adjacent indices yield distinct fractions.
        #[test]
        fn consecutive_terms_differ(index in 1u64..100_000) {
            prop_assert_ne!(zigzag_fraction(index), zigzag_fraction(index + 1));
        }
    }

    #[test]
    fn handles_maximum_index() {
        let fraction = zigzag_fraction(u64::MAX);
        assert!(fraction.numerator >= 1);
        assert!(fraction.denominator >= 1);

        let line = (fraction.numerator + fraction.denominator - 1) as u128;
        let end = line * (line + 1) / 2;
        let start = end - line + 1;
        let index = u64::MAX as u128;
        assert!(start <= index && index <= end);
    }

    #[test]
    fn display_format() {
        let fraction = Fraction {
            numerator: 3,
            denominator: 7,
        };
        assert_eq!(fraction.to_string(), "3/7");
    }
}
