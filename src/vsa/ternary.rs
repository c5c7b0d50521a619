//! Balanced Ternary Digit
//!
//! The single-trit layer every vector representation is built on.
//!
//! # Representation
//!
//! Single Trit: {N, Z, P} = {-1, 0, +1}
//! - N (Negative): -1
//! - Z (Zero): 0
//! - P (Positive): +1
//!
//! # Algebraic Properties
//!
//! ## Multiplication (Bind primitive)
//! - Commutative: a × b = b × a
//! - Associative: (a × b) × c = a × (b × c)
//! - Identity: a × P = a
//! - Self-inverse: a × a = P (for non-zero)
//! - Zero annihilator: a × Z = Z
//!
//! ## Negation
//! - Involution: -(-a) = a
//! - Fixed point: -Z = Z

use crate::error::{Result, VsaError};
use std::fmt;

/// Single balanced ternary digit.
///
/// `#[repr(i8)]` with discriminants equal to the numeric value, so a slice of
/// `i8` holding only -1, 0 and 1 has the same layout as a slice of `Trit`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[repr(i8)]
pub enum Trit {
    /// Negative: -1
    N = -1,
    /// Zero: 0
    #[default]
    Z = 0,
    /// Positive: +1
    P = 1,
}

impl fmt::Debug for Trit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trit::N => write!(f, "N"),
            Trit::Z => write!(f, "Z"),
            Trit::P => write!(f, "P"),
        }
    }
}

impl fmt::Display for Trit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trit::N => write!(f, "-"),
            Trit::Z => write!(f, "0"),
            Trit::P => write!(f, "+"),
        }
    }
}

impl Trit {
    /// All possible trit values in order
    pub const ALL: [Trit; 3] = [Trit::N, Trit::Z, Trit::P];

    /// Convert from i8 with clamping
    #[inline]
    pub const fn from_i8_clamped(v: i8) -> Self {
        match v {
            i8::MIN..=-1 => Trit::N,
            0 => Trit::Z,
            1..=i8::MAX => Trit::P,
        }
    }

    /// Quantize any signed integer to its sign: >0 → P, <0 → N, 0 → Z.
    #[inline]
    pub const fn clamp(v: i64) -> Self {
        if v > 0 {
            Trit::P
        } else if v < 0 {
            Trit::N
        } else {
            Trit::Z
        }
    }

    /// Convert from i8, returning None if out of range
    #[inline]
    pub const fn from_i8_exact(v: i8) -> Option<Self> {
        match v {
            -1 => Some(Trit::N),
            0 => Some(Trit::Z),
            1 => Some(Trit::P),
            _ => None,
        }
    }

    /// Map a raw generator draw onto a trit as `draw % 3 - 1`.
    #[inline]
    pub const fn from_draw(draw: u64) -> Self {
        match draw % 3 {
            0 => Trit::N,
            1 => Trit::Z,
            _ => Trit::P,
        }
    }

    /// Decode a (pos, neg) bit pair. The invalid pair (1, 1) decodes to Z.
    #[inline]
    pub const fn from_planes(pos: bool, neg: bool) -> Self {
        match (pos, neg) {
            (true, false) => Trit::P,
            (false, true) => Trit::N,
            _ => Trit::Z,
        }
    }

    /// Convert to i8
    #[inline]
    pub const fn to_i8(self) -> i8 {
        self as i8
    }

    /// Negate: -N = P, -Z = Z, -P = N
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub const fn neg(self) -> Trit {
        match self {
            Trit::N => Trit::P,
            Trit::Z => Trit::Z,
            Trit::P => Trit::N,
        }
    }

    /// Is zero?
    #[inline]
    pub const fn is_zero(self) -> bool {
        matches!(self, Trit::Z)
    }

    /// Is non-zero?
    #[inline]
    pub const fn is_nonzero(self) -> bool {
        !self.is_zero()
    }

    /// Trit multiplication (bind operation)
    ///
    /// Truth table:
    /// ```text
    ///   × | N  Z  P
    /// ----+--------
    ///   N | P  Z  N
    ///   Z | Z  Z  Z
    ///   P | N  Z  P
    /// ```
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub const fn mul(self, other: Trit) -> Trit {
        match (self, other) {
            (Trit::Z, _) | (_, Trit::Z) => Trit::Z,
            (Trit::P, Trit::P) | (Trit::N, Trit::N) => Trit::P,
            (Trit::P, Trit::N) | (Trit::N, Trit::P) => Trit::N,
        }
    }
}

impl std::ops::Neg for Trit {
    type Output = Trit;
    #[inline]
    fn neg(self) -> Trit {
        Trit::neg(self)
    }
}

impl std::ops::Mul for Trit {
    type Output = Trit;
    #[inline]
    fn mul(self, rhs: Trit) -> Trit {
        Trit::mul(self, rhs)
    }
}

impl std::ops::MulAssign for Trit {
    #[inline]
    fn mul_assign(&mut self, rhs: Trit) {
        *self = *self * rhs;
    }
}

impl From<Trit> for i8 {
    #[inline]
    fn from(t: Trit) -> i8 {
        t.to_i8()
    }
}

impl From<Trit> for i64 {
    #[inline]
    fn from(t: Trit) -> i64 {
        i64::from(t.to_i8())
    }
}

impl TryFrom<i8> for Trit {
    type Error = VsaError;

    fn try_from(v: i8) -> Result<Self> {
        Trit::from_i8_exact(v).ok_or(VsaError::InvalidTritValue { value: i64::from(v) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trit_multiplication_truth_table() {
        assert_eq!(Trit::N * Trit::N, Trit::P, "N × N = P");
        assert_eq!(Trit::N * Trit::Z, Trit::Z, "N × Z = Z");
        assert_eq!(Trit::N * Trit::P, Trit::N, "N × P = N");
        assert_eq!(Trit::Z * Trit::N, Trit::Z, "Z × N = Z");
        assert_eq!(Trit::Z * Trit::Z, Trit::Z, "Z × Z = Z");
        assert_eq!(Trit::Z * Trit::P, Trit::Z, "Z × P = Z");
        assert_eq!(Trit::P * Trit::N, Trit::N, "P × N = N");
        assert_eq!(Trit::P * Trit::Z, Trit::Z, "P × Z = Z");
        assert_eq!(Trit::P * Trit::P, Trit::P, "P × P = P");
    }

    #[test]
    fn test_trit_multiplication_matches_integers() {
        for &a in &Trit::ALL {
            for &b in &Trit::ALL {
                assert_eq!((a * b).to_i8(), a.to_i8() * b.to_i8(), "{:?} × {:?}", a, b);
            }
        }
    }

    #[test]
    fn test_trit_negation() {
        assert_eq!(-Trit::N, Trit::P);
        assert_eq!(-Trit::Z, Trit::Z);
        assert_eq!(-Trit::P, Trit::N);

        for &t in &Trit::ALL {
            assert_eq!(-(-t), t, "Double negation of {:?}", t);
        }
    }

    #[test]
    fn test_clamping() {
        assert_eq!(Trit::from_i8_clamped(i8::MIN), Trit::N);
        assert_eq!(Trit::from_i8_clamped(-7), Trit::N);
        assert_eq!(Trit::from_i8_clamped(0), Trit::Z);
        assert_eq!(Trit::from_i8_clamped(42), Trit::P);
        assert_eq!(Trit::clamp(i64::MIN), Trit::N);
        assert_eq!(Trit::clamp(0), Trit::Z);
        assert_eq!(Trit::clamp(i64::MAX), Trit::P);
    }

    #[test]
    fn test_exact_conversion() {
        assert_eq!(Trit::try_from(-1i8).unwrap(), Trit::N);
        assert_eq!(Trit::try_from(0i8).unwrap(), Trit::Z);
        assert_eq!(Trit::try_from(1i8).unwrap(), Trit::P);
        let err = Trit::try_from(2i8).unwrap_err();
        assert!(matches!(err, VsaError::InvalidTritValue { value: 2 }));
        assert_eq!(err.to_string(), "invalid trit value 2 (expected -1, 0 or +1)");
        assert!(matches!(
            Trit::try_from(i8::MIN),
            Err(VsaError::InvalidTritValue { value: -128 })
        ));
    }

    #[test]
    fn test_from_draw() {
        assert_eq!(Trit::from_draw(0), Trit::N);
        assert_eq!(Trit::from_draw(1), Trit::Z);
        assert_eq!(Trit::from_draw(2), Trit::P);
        assert_eq!(Trit::from_draw(u64::MAX), Trit::N); // u64::MAX % 3 == 0
    }

    #[test]
    fn test_from_planes() {
        assert_eq!(Trit::from_planes(true, false), Trit::P);
        assert_eq!(Trit::from_planes(false, true), Trit::N);
        assert_eq!(Trit::from_planes(false, false), Trit::Z);
        assert_eq!(Trit::from_planes(true, true), Trit::Z);
    }

    #[test]
    fn test_display() {
        let s: String = Trit::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(s, "-0+");
    }
}
