// Exact counter values in steps of one half

use std::fmt;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

use crate::character::HALF_MARK;
use crate::numeral::NumeralParseError;

/// A counter value that is either whole or lies exactly half-way between two
/// whole numbers.
///
/// Stored as the floor of the value plus a half flag, so `2½` is
/// `{ floor: 2, half: true }` and `-½` is `{ floor: -1, half: true }`.
/// Derived ordering is therefore numeric ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct HalfInteger {
    floor: i64,
    half: bool,
}

impl HalfInteger {
    pub const ZERO: Self = Self::new(0, false);
    pub const HALF: Self = Self::new(0, true);
    pub const ONE: Self = Self::new(1, false);

    /// Create a value of `floor`, plus one half if `half` is set.
    pub const fn new(floor: i64, half: bool) -> Self {
        Self { floor, half }
    }

    /// Create a whole value.
    pub const fn whole(value: i64) -> Self {
        Self::new(value, false)
    }

    /// The largest whole number not greater than this value. This is what
    /// numeral fragments render.
    pub fn floor(self) -> i64 {
        self.floor
    }

    /// Whether the value lies half-way between two whole numbers.
    pub fn is_half(self) -> bool {
        self.half
    }

    /// Sum of two values. Two halves carry into the whole part.
    ///
    /// Saturates at the bounds of `i64` instead of wrapping, so a counter
    /// that runs long enough stops at the largest value.
    pub fn add(self, other: Self) -> Self {
        let halves = u8::from(self.half) + u8::from(other.half);
        Self {
            floor: self
                .floor
                .saturating_add(other.floor)
                .saturating_add(i64::from(halves / 2)),
            half: halves % 2 == 1,
        }
    }
}

impl Add for HalfInteger {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        HalfInteger::add(self, rhs)
    }
}

impl AddAssign for HalfInteger {
    fn add_assign(&mut self, rhs: Self) {
        *self = HalfInteger::add(*self, rhs);
    }
}

impl From<i64> for HalfInteger {
    fn from(value: i64) -> Self {
        Self::whole(value)
    }
}

/// Canonical text form: `n` for whole values, `n½` for half values, where `n`
/// is the whole part nearest to zero (`-½` prints as `-0½`).
impl fmt::Display for HalfInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.half, self.floor < 0) {
            (false, _) => write!(f, "{}", self.floor),
            (true, false) => write!(f, "{}{HALF_MARK}", self.floor),
            (true, true) => write!(f, "-{}{HALF_MARK}", -(self.floor + 1)),
        }
    }
}

/// Parses the canonical text form written by `Display`. A bare `½` is
/// accepted as one half.
impl FromStr for HalfInteger {
    type Err = NumeralParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || NumeralParseError::InvalidHalfInteger(s.to_string());
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(NumeralParseError::Empty);
        }

        let (digits, half) = match trimmed.strip_suffix(HALF_MARK) {
            Some(rest) => (rest, true),
            None => (trimmed, false),
        };
        let (negative, magnitude) = match digits.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, digits),
        };

        let magnitude: i64 = if magnitude.is_empty() && half {
            0
        } else if !magnitude.is_empty() && magnitude.chars().all(|c| c.is_ascii_digit()) {
            magnitude.parse().map_err(|_| invalid())?
        } else {
            return Err(invalid());
        };

        Ok(match (negative, half) {
            (false, _) => Self::new(magnitude, half),
            (true, false) => Self::whole(-magnitude),
            (true, true) => Self::new(-magnitude - 1, true),
        })
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for HalfInteger {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for HalfInteger {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- arithmetic --

    #[test]
    fn whole_plus_whole() {
        assert_eq!(HalfInteger::whole(3) + HalfInteger::whole(4), HalfInteger::whole(7));
    }

    #[test]
    fn two_halves_carry() {
        let v = HalfInteger::new(1, true) + HalfInteger::HALF;
        assert_eq!(v, HalfInteger::whole(2));
        assert!(!v.is_half());
    }

    #[test]
    fn half_steps_alternate() {
        let mut v = HalfInteger::whole(1);
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push((v.floor(), v.is_half()));
            v += HalfInteger::HALF;
        }
        assert_eq!(seen, vec![(1, false), (1, true), (2, false), (2, true)]);
    }

    #[test]
    fn addition_saturates() {
        let max = HalfInteger::whole(i64::MAX);
        assert_eq!(max + HalfInteger::ONE, max);
        assert_eq!(HalfInteger::new(i64::MAX, true) + HalfInteger::HALF, max);
        assert_eq!(
            HalfInteger::whole(i64::MIN) + HalfInteger::whole(-5),
            HalfInteger::whole(i64::MIN)
        );
    }

    #[test]
    fn negative_addition() {
        let v = HalfInteger::whole(2) + HalfInteger::whole(-3);
        assert_eq!(v, HalfInteger::whole(-1));
        let v = HalfInteger::ZERO + HalfInteger::new(-1, true);
        assert_eq!(v.floor(), -1);
        assert!(v.is_half());
    }

    // -- ordering --

    #[test]
    fn ordering_is_numeric() {
        let mut values = vec![
            HalfInteger::new(2, false),
            HalfInteger::new(-1, true),
            HalfInteger::new(1, true),
            HalfInteger::ZERO,
        ];
        values.sort();
        let text: Vec<String> = values.iter().map(ToString::to_string).collect();
        assert_eq!(text, vec!["-0\u{00BD}", "0", "1\u{00BD}", "2"]);
    }

    // -- text form --

    #[test]
    fn display_canonical_form() {
        assert_eq!(HalfInteger::whole(7).to_string(), "7");
        assert_eq!(HalfInteger::new(7, true).to_string(), "7\u{00BD}");
        assert_eq!(HalfInteger::new(-2, true).to_string(), "-1\u{00BD}");
        assert_eq!(HalfInteger::whole(-4).to_string(), "-4");
    }

    #[test]
    fn parse_canonical_form() {
        assert_eq!("12".parse::<HalfInteger>().unwrap(), HalfInteger::whole(12));
        assert_eq!("3\u{00BD}".parse::<HalfInteger>().unwrap(), HalfInteger::new(3, true));
        assert_eq!("\u{00BD}".parse::<HalfInteger>().unwrap(), HalfInteger::HALF);
        assert_eq!("-1\u{00BD}".parse::<HalfInteger>().unwrap(), HalfInteger::new(-2, true));
        assert_eq!("-0\u{00BD}".parse::<HalfInteger>().unwrap(), HalfInteger::new(-1, true));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!("".parse::<HalfInteger>(), Err(NumeralParseError::Empty));
        assert!("1.5".parse::<HalfInteger>().is_err());
        assert!("x".parse::<HalfInteger>().is_err());
        assert!("-".parse::<HalfInteger>().is_err());
        assert!("\u{00BD}1".parse::<HalfInteger>().is_err());
    }

    #[test]
    fn text_form_survives_reparse() {
        for v in [
            HalfInteger::whole(0),
            HalfInteger::new(0, true),
            HalfInteger::new(-1, true),
            HalfInteger::new(-7, true),
            HalfInteger::whole(4711),
        ] {
            assert_eq!(v.to_string().parse::<HalfInteger>().unwrap(), v);
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_text_form() {
        let json = serde_json::to_string(&HalfInteger::new(2, true)).unwrap();
        assert_eq!(json, "\"2\u{00BD}\"");
        let back: HalfInteger = serde_json::from_str(&json).unwrap();
        assert_eq!(back, HalfInteger::new(2, true));
    }
}
