/// Instance reconstruction
///
/// The instance stream carries `n` (digit count, divisor is 10^n), an
/// end-of-line marker, and a decimal-digit string giving the integer `c`.
/// Together they define the target rational `c / 10^n`. The engine trusts
/// the instance to be well-formed and does not validate the digit string's
/// content; like the original pipeline it takes the leading run of decimal
/// digits. Values that do not fit exact 128-bit arithmetic are a defect in
/// the instance data, reported as internal-failure.
use crate::stream::Source;
use crate::verdict::outcome::Rejection;

/// A parsed instance: `n` and `c`, defining the target `c / 10^n`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instance {
    pub n: i32,
    pub c: i128,
}

impl Instance {
    /// Read `n`, an end-of-line marker, then the digit string.
    pub fn read(source: &mut Source) -> Result<Self, Rejection> {
        let n = source.read_int("n")?;
        if n < 0 {
            return Err(Rejection::internal(format!(
                "instance digit count n = {} is negative",
                n
            )));
        }
        source.read_eoln()?;
        let s = source.read_line("s")?;
        let c = parse_leading_digits(&s)
            .ok_or_else(|| Rejection::internal("instance value c does not fit exact arithmetic"))?;
        Ok(Instance { n, c })
    }

    /// Target value as a raw pair `(c, 10^n)`. The divisor is built by
    /// repeated multiplication, checked so an oversized `n` surfaces as a
    /// data defect instead of wrapping.
    pub fn target(&self) -> Result<(i128, i128), Rejection> {
        let mut b: i128 = 1;
        for _ in 0..self.n {
            b = b.checked_mul(10).ok_or_else(|| {
                Rejection::internal(format!(
                    "instance divisor 10^{} does not fit exact arithmetic",
                    self.n
                ))
            })?;
        }
        Ok((self.c, b))
    }
}

/// Leading decimal digits of the (blank-trimmed) string, as an integer.
/// `None` when the value overflows 128 bits.
fn parse_leading_digits(s: &str) -> Option<i128> {
    let mut c: i128 = 0;
    for ch in s.trim_start().chars() {
        let Some(digit) = ch.to_digit(10) else {
            break;
        };
        c = c.checked_mul(10)?.checked_add(digit as i128)?;
    }
    Some(c)
}
