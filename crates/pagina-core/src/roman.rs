// Roman numeral codec

use crate::numeral::{MAX_NUMERAL, NumeralParseError};

/// Largest value written in Roman letters. Larger values are written as
/// decimal digits, which keeps a formatted numeral under a thousand `M`s.
pub const MAX_ROMAN: i64 = 999_999;

/// Subtractive notation table, largest value first.
const NOTATION: [(i64, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Value of a single Roman digit, either case.
fn digit_value(c: char) -> Option<i64> {
    match c.to_ascii_uppercase() {
        'I' => Some(1),
        'V' => Some(5),
        'X' => Some(10),
        'L' => Some(50),
        'C' => Some(100),
        'D' => Some(500),
        'M' => Some(1000),
        _ => None,
    }
}

/// Write `value` as a Roman numeral.
///
/// Uses subtractive notation (4 = IV). Values of 4000 and more repeat `M`.
/// Values below 1 or above [`MAX_ROMAN`] are written as decimal digits
/// instead.
pub fn encode(value: i64, uppercase: bool) -> String {
    if !(1..=MAX_ROMAN).contains(&value) {
        return value.to_string();
    }

    let mut remaining = value;
    let mut out = String::new();
    for &(step, symbol) in &NOTATION {
        while remaining >= step {
            out.push_str(symbol);
            remaining -= step;
        }
    }

    if uppercase {
        out
    } else {
        out.to_ascii_lowercase()
    }
}

/// Read a Roman numeral, either case.
///
/// Scans right to left: a digit smaller than the largest digit already seen is
/// subtracted, any other digit is added. The scan is lenient about
/// non-canonical forms (`IIII` reads as 4, `IC` as 99). Totals above
/// [`MAX_NUMERAL`] are rejected.
pub fn decode(text: &str) -> Result<i64, NumeralParseError> {
    if text.is_empty() {
        return Err(NumeralParseError::Empty);
    }

    let mut total: i64 = 0;
    let mut largest: i64 = 0;
    for ch in text.chars().rev() {
        let value = digit_value(ch).ok_or_else(|| NumeralParseError::InvalidDigit {
            text: text.to_string(),
            ch,
        })?;
        if value < largest {
            total -= value;
        } else {
            total += value;
            if total > MAX_NUMERAL {
                return Err(NumeralParseError::Overflow(text.to_string()));
            }
            largest = value;
        }
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- encode --

    #[test]
    fn encode_small_values() {
        let expected = ["I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X"];
        for (i, want) in expected.iter().enumerate() {
            assert_eq!(encode(i as i64 + 1, true), *want);
        }
    }

    #[test]
    fn encode_subtractive_pairs() {
        assert_eq!(encode(40, true), "XL");
        assert_eq!(encode(48, true), "XLVIII");
        assert_eq!(encode(90, true), "XC");
        assert_eq!(encode(400, true), "CD");
        assert_eq!(encode(1990, true), "MCMXC");
        assert_eq!(encode(3999, true), "MMMCMXCIX");
    }

    #[test]
    fn encode_repeats_thousands() {
        assert_eq!(encode(4000, true), "MMMM");
        assert_eq!(encode(6001, true), "MMMMMMI");
    }

    #[test]
    fn encode_large_values_as_digits() {
        assert_eq!(encode(MAX_ROMAN, true), format!("{}CMXCIX", "M".repeat(999)));
        assert_eq!(encode(MAX_ROMAN + 1, true), "1000000");
        assert_eq!(encode(i64::MAX, false), i64::MAX.to_string());
    }

    #[test]
    fn encode_lowercase() {
        assert_eq!(encode(14, false), "xiv");
        assert_eq!(encode(67, false), "lxvii");
    }

    #[test]
    fn encode_non_positive_falls_back_to_digits() {
        assert_eq!(encode(0, true), "0");
        assert_eq!(encode(-3, false), "-3");
    }

    // -- decode --

    #[test]
    fn decode_canonical() {
        assert_eq!(decode("IV"), Ok(4));
        assert_eq!(decode("IX"), Ok(9));
        assert_eq!(decode("XLIX"), Ok(49));
        assert_eq!(decode("LXVIII"), Ok(68));
        assert_eq!(decode("MCMXC"), Ok(1990));
    }

    #[test]
    fn decode_is_case_insensitive() {
        assert_eq!(decode("xiv"), Ok(14));
        assert_eq!(decode("XiV"), Ok(14));
    }

    #[test]
    fn decode_lenient_forms() {
        assert_eq!(decode("IIII"), Ok(4));
        assert_eq!(decode("MMMM"), Ok(4000));
    }

    #[test]
    fn decode_rejects_foreign_characters() {
        assert_eq!(
            decode("XIZ"),
            Err(NumeralParseError::InvalidDigit {
                text: "XIZ".to_string(),
                ch: 'Z'
            })
        );
        assert_eq!(decode(""), Err(NumeralParseError::Empty));
    }

    #[test]
    fn decode_rejects_totals_past_the_bound() {
        let huge = "M".repeat(2_147_484);
        assert_eq!(decode(&huge), Err(NumeralParseError::Overflow(huge.clone())));
        assert_eq!(decode(&"M".repeat(2_147_483)), Ok(2_147_483_000));
    }

    #[test]
    fn decode_reads_what_encode_writes() {
        for value in [1, 4, 9, 14, 40, 99, 444, 1994, 2024, 3888, 5000] {
            assert_eq!(decode(&encode(value, true)), Ok(value));
            assert_eq!(decode(&encode(value, false)), Ok(value));
        }
    }
}
