/// Exact fraction arithmetic for verdict comparison
///
/// Equivalence is reduce-then-compare: each pair is divided by its own
/// greatest common divisor and the reduced pairs must match componentwise.
/// Exact integer arithmetic only; floating point would lose precision near
/// the fraction bound.
use std::fmt;

/// Upper bound (exclusive) for fraction components on both streams.
pub const FRACTION_LIMIT: i64 = 1_000_000;

/// A claimed fraction as it appears on the wire: numerator then denominator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fraction {
    pub numerator: i64,
    pub denominator: i64,
}

impl Fraction {
    pub fn new(numerator: i64, denominator: i64) -> Self {
        Fraction {
            numerator,
            denominator,
        }
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.numerator, self.denominator)
    }
}

/// Greatest common divisor by Euclid's algorithm, on magnitudes.
pub fn gcd(a: i128, b: i128) -> i128 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Reduce-then-compare fraction equivalence.
///
/// Wide registers: the left side carries the instance target `c / 10^n`,
/// whose components can exceed 64 bits. A zero pair reduces by 1 so the
/// comparison stays total even for degenerate untrusted input.
pub fn comp_fraction(a1: i128, b1: i128, a2: i128, b2: i128) -> bool {
    let g1 = gcd(a1, b1).max(1);
    let g2 = gcd(a2, b2).max(1);
    a1 / g1 == a2 / g2 && b1 / g1 == b2 / g2
}
