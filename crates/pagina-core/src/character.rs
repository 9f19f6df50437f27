// Code point classification for pagination specifications

use unicode_general_category::{GeneralCategory, get_general_category};

// ---------------------------------------------------------------------------
// Reserved characters
// ---------------------------------------------------------------------------

/// Opens and closes a literal (escaped) section.
pub const ESCAPE: char = '`';

/// Restricts the next fragment to recto (whole counter value) pages.
pub const FULL_PAGE_MARK: char = '\u{00A1}'; // ¡

/// Restricts the next fragment to verso (half counter value) pages.
pub const HALF_PAGE_MARK: char = '\u{00BF}'; // ¿

/// Leading marker that starts the sequence on a half value. Inside the
/// specification the same character is an increment mark.
pub const HALF_MARK: char = '\u{00BD}'; // ½

/// Characters that set the increment of the preceding fragment.
pub const INCREMENT_MARKS: &[char] = &[
    '\u{00B0}', // ° DEGREE SIGN
    '\u{00B9}', // ¹ SUPERSCRIPT ONE
    '\u{00B2}', // ² SUPERSCRIPT TWO
    '\u{00B3}', // ³ SUPERSCRIPT THREE
    HALF_MARK,
];

// ---------------------------------------------------------------------------
// Code point classes
// ---------------------------------------------------------------------------

/// Symbolic class of a code point in a pagination specification.
///
/// `Empty` and `End` are never returned by [`classify`]: `Empty` is the class
/// of an empty parser buffer and `End` is the sentinel the parser feeds
/// itself after the last character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodePointClass {
    /// ASCII digit.
    Decimal,
    /// One of `C D I L M V X`.
    UppercaseRoman,
    /// One of `c d i l m v x`.
    LowercaseRoman,
    /// Any other letter (general categories Lu, Ll, Lt, Lm, Lo) or a
    /// non-spacing mark (Mn).
    Text,
    /// Anything not covered by another class.
    Symbol,
    /// One of [`INCREMENT_MARKS`].
    IncrementMark,
    /// [`FULL_PAGE_MARK`].
    FullPageMark,
    /// [`HALF_PAGE_MARK`].
    HalfPageMark,
    /// [`ESCAPE`].
    Escape,
    /// Buffer is empty.
    Empty,
    /// End of input.
    End,
}

impl CodePointClass {
    /// Whether this is one of the two Roman numeral classes.
    pub fn is_roman(self) -> bool {
        matches!(self, Self::UppercaseRoman | Self::LowercaseRoman)
    }

    /// Whether this is one of the two page restriction marks.
    pub fn is_page_mark(self) -> bool {
        matches!(self, Self::FullPageMark | Self::HalfPageMark)
    }
}

/// Returns the class of a single code point.
///
/// Total: every character maps to exactly one class. The reserved characters
/// are checked before the general category test, so `¡`, `¿` and the
/// increment marks never count as text. Letter numbers such as `Ⅻ` (Nl) are
/// symbols.
pub fn classify(c: char) -> CodePointClass {
    match c {
        '0'..='9' => CodePointClass::Decimal,
        'C' | 'D' | 'I' | 'L' | 'M' | 'V' | 'X' => CodePointClass::UppercaseRoman,
        'c' | 'd' | 'i' | 'l' | 'm' | 'v' | 'x' => CodePointClass::LowercaseRoman,
        ESCAPE => CodePointClass::Escape,
        FULL_PAGE_MARK => CodePointClass::FullPageMark,
        HALF_PAGE_MARK => CodePointClass::HalfPageMark,
        c if is_increment_mark(c) => CodePointClass::IncrementMark,
        c if is_text(c) => CodePointClass::Text,
        _ => CodePointClass::Symbol,
    }
}

fn is_text(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
            | GeneralCategory::NonspacingMark
    )
}

/// Check whether a character is one of the increment marks.
pub fn is_increment_mark(c: char) -> bool {
    INCREMENT_MARKS.contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- classify --

    #[test]
    fn digits_are_decimal() {
        for c in '0'..='9' {
            assert_eq!(classify(c), CodePointClass::Decimal);
        }
    }

    #[test]
    fn roman_letters_keep_their_case() {
        for c in "CDILMVX".chars() {
            assert_eq!(classify(c), CodePointClass::UppercaseRoman, "{c}");
        }
        for c in "cdilmvx".chars() {
            assert_eq!(classify(c), CodePointClass::LowercaseRoman, "{c}");
        }
    }

    #[test]
    fn other_letters_are_text() {
        assert_eq!(classify('a'), CodePointClass::Text);
        assert_eq!(classify('r'), CodePointClass::Text);
        assert_eq!(classify('S'), CodePointClass::Text);
        assert_eq!(classify('\u{00E4}'), CodePointClass::Text); // ä
        assert_eq!(classify('\u{03B1}'), CodePointClass::Text); // α
        assert_eq!(classify('\u{05D0}'), CodePointClass::Text); // א
    }

    #[test]
    fn letter_categories_and_nonspacing_marks_are_text() {
        assert_eq!(classify('\u{01C5}'), CodePointClass::Text); // ǅ, Lt
        assert_eq!(classify('\u{02B0}'), CodePointClass::Text); // ʰ, Lm
        assert_eq!(classify('\u{0301}'), CodePointClass::Text); // combining acute, Mn
        assert_eq!(classify('\u{05B4}'), CodePointClass::Text); // hiriq, Mn
    }

    #[test]
    fn letter_numbers_and_other_marks_are_symbols() {
        assert_eq!(classify('\u{216B}'), CodePointClass::Symbol); // Ⅻ, Nl
        assert_eq!(classify('\u{2160}'), CodePointClass::Symbol); // Ⅰ, Nl
        assert_eq!(classify('\u{0903}'), CodePointClass::Symbol); // visarga, Mc
        assert_eq!(classify('\u{20DD}'), CodePointClass::Symbol); // enclosing circle, Me
    }

    #[test]
    fn reserved_marks() {
        assert_eq!(classify('`'), CodePointClass::Escape);
        assert_eq!(classify('\u{00A1}'), CodePointClass::FullPageMark);
        assert_eq!(classify('\u{00BF}'), CodePointClass::HalfPageMark);
        for &c in INCREMENT_MARKS {
            assert_eq!(classify(c), CodePointClass::IncrementMark);
        }
    }

    #[test]
    fn everything_else_is_symbol() {
        for c in [' ', '.', '[', ']', '-', '/', '(', '#', '\u{2013}'] {
            assert_eq!(classify(c), CodePointClass::Symbol, "{c:?}");
        }
    }

    #[test]
    fn classifier_never_yields_parser_states() {
        for c in ['\0', 'a', '1', '`', '\u{00BD}', ' '] {
            let class = classify(c);
            assert_ne!(class, CodePointClass::Empty);
            assert_ne!(class, CodePointClass::End);
        }
    }

    // -- helpers --

    #[test]
    fn roman_and_page_mark_predicates() {
        assert!(CodePointClass::UppercaseRoman.is_roman());
        assert!(CodePointClass::LowercaseRoman.is_roman());
        assert!(!CodePointClass::Text.is_roman());
        assert!(CodePointClass::FullPageMark.is_page_mark());
        assert!(CodePointClass::HalfPageMark.is_page_mark());
        assert!(!CodePointClass::IncrementMark.is_page_mark());
    }
}
