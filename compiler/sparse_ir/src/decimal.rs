//! Fixed-point decimal numbers.
//!
//! A `Decimal` is `mantissa / 10^scale` with `scale <= 28`. Values are kept
//! normalized (no trailing fractional zeros), so `1.50` and `1.5` are the same
//! value and derived equality is numeric equality.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Decimal-like numeric value.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Decimal {
    mantissa: i128,
    scale: u8,
}

/// Failure to read a decimal literal.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseDecimalError {
    #[error("empty decimal literal")]
    Empty,
    #[error("invalid digit in decimal literal")]
    InvalidDigit,
    #[error("decimal literal out of range")]
    Overflow,
}

impl Decimal {
    /// Largest number of fractional digits kept.
    pub const MAX_SCALE: u8 = 28;

    pub const ZERO: Decimal = Decimal {
        mantissa: 0,
        scale: 0,
    };

    pub const ONE: Decimal = Decimal {
        mantissa: 1,
        scale: 0,
    };

    /// Build `mantissa / 10^scale`, or `None` when `scale` exceeds
    /// [`Decimal::MAX_SCALE`].
    pub fn new(mantissa: i128, scale: u8) -> Option<Self> {
        (scale <= Self::MAX_SCALE).then(|| Self::normalized(mantissa, scale))
    }

    fn normalized(mut mantissa: i128, mut scale: u8) -> Self {
        while scale > 0 && mantissa % 10 == 0 {
            mantissa /= 10;
            scale -= 1;
        }
        Decimal { mantissa, scale }
    }

    #[inline]
    pub const fn mantissa(self) -> i128 {
        self.mantissa
    }

    #[inline]
    pub const fn scale(self) -> u8 {
        self.scale
    }

    /// Significant digits kept when converting from `f64`.
    pub const F64_DIGITS: u32 = 15;

    /// Convert a finite float, rounded to [`Decimal::F64_DIGITS`] significant
    /// digits, so `0.1 + 0.2` becomes `0.3`.
    ///
    /// Returns `None` for NaN, infinities and magnitudes beyond the mantissa
    /// range. Fractional digits past [`Decimal::MAX_SCALE`] are truncated.
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        // `{:.14e}` rounds to exactly 15 significant digits: "-3.00000000000000e-1".
        let precision = Self::F64_DIGITS as usize - 1;
        let formatted = format!("{value:.precision$e}");
        let (digits, exponent) = formatted.split_once('e')?;
        let exponent: i32 = exponent.parse().ok()?;
        let mut mantissa: i128 = digits.replace('.', "").parse().ok()?;

        // value == mantissa * 10^shift
        let shift = exponent - i32::try_from(precision).ok()?;
        if shift >= 0 {
            mantissa = mantissa.checked_mul(10i128.checked_pow(shift.unsigned_abs())?)?;
            return Some(Self::normalized(mantissa, 0));
        }
        let mut scale = shift.unsigned_abs();
        let max_scale = u32::from(Self::MAX_SCALE);
        if scale > max_scale {
            mantissa /= 10i128.checked_pow(scale - max_scale).unwrap_or(i128::MAX);
            scale = max_scale;
        }
        Self::new(mantissa, u8::try_from(scale).ok()?)
    }

    #[expect(
        clippy::cast_precision_loss,
        reason = "lossy by definition, mirrors numeric widening to float"
    )]
    pub fn to_f64(self) -> f64 {
        self.mantissa as f64 / 10f64.powi(i32::from(self.scale))
    }
}

impl From<i64> for Decimal {
    fn from(value: i64) -> Self {
        Decimal {
            mantissa: i128::from(value),
            scale: 0,
        }
    }
}

impl From<i32> for Decimal {
    fn from(value: i32) -> Self {
        Decimal::from(i64::from(value))
    }
}

impl From<u64> for Decimal {
    fn from(value: u64) -> Self {
        Decimal {
            mantissa: i128::from(value),
            scale: 0,
        }
    }
}

impl FromStr for Decimal {
    type Err = ParseDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (negative, body) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            Some(_) => (false, s),
            None => return Err(ParseDecimalError::Empty),
        };
        let (int_part, frac_part) = body.split_once('.').unwrap_or((body, ""));
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(ParseDecimalError::Empty);
        }

        let mut mantissa: i128 = 0;
        let mut scale: u8 = 0;
        let push = |mantissa: i128, byte: u8| -> Result<i128, ParseDecimalError> {
            if !byte.is_ascii_digit() {
                return Err(ParseDecimalError::InvalidDigit);
            }
            mantissa
                .checked_mul(10)
                .and_then(|m| m.checked_add(i128::from(byte - b'0')))
                .ok_or(ParseDecimalError::Overflow)
        };

        for &byte in int_part.as_bytes() {
            mantissa = push(mantissa, byte)?;
        }
        for &byte in frac_part.as_bytes() {
            if scale == Self::MAX_SCALE {
                // Digits past the maximum scale are dropped, but must still be digits.
                if !byte.is_ascii_digit() {
                    return Err(ParseDecimalError::InvalidDigit);
                }
                continue;
            }
            mantissa = push(mantissa, byte)?;
            scale += 1;
        }

        if negative {
            mantissa = -mantissa;
        }
        Ok(Self::normalized(mantissa, scale))
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.mantissa < 0 { "-" } else { "" };
        let digits = self.mantissa.unsigned_abs().to_string();
        let scale = usize::from(self.scale);
        if scale == 0 {
            return write!(f, "{sign}{digits}");
        }
        let padded = if digits.len() <= scale {
            format!("{}{digits}", "0".repeat(scale + 1 - digits.len()))
        } else {
            digits
        };
        let (int_part, frac_part) = padded.split_at(padded.len() - scale);
        write!(f, "{sign}{int_part}.{frac_part}")
    }
}

impl fmt::Debug for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Decimal({self})")
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "test assertions use unwrap for clarity"
)]
mod tests;
