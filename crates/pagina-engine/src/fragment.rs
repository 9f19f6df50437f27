// Fragments: the formattable pieces a page label is made of

use std::fmt;

use pagina_core::HalfInteger;
use pagina_core::enums::PageRestriction;
use pagina_core::roman;

/// One piece of a page label.
///
/// Every fragment formats the shared counter value and then advances it by
/// its increment. After a [`Paginator`](crate::Paginator) is built, every
/// numeral fragment has an increment; a free-text fragment without one
/// advances the counter by zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// Constant text, optionally shown only on recto or verso pages.
    FreeText {
        text: String,
        restriction: PageRestriction,
        increment: Option<HalfInteger>,
    },
    /// The whole part of the counter in decimal digits.
    DecimalNumeral {
        initial_value: i64,
        increment: Option<HalfInteger>,
    },
    /// The whole part of the counter as a Roman numeral in a fixed case.
    RomanNumeral {
        initial_value: i64,
        uppercase: bool,
        increment: Option<HalfInteger>,
    },
}

impl Fragment {
    pub fn free_text(text: impl Into<String>, restriction: PageRestriction) -> Self {
        Fragment::FreeText {
            text: text.into(),
            restriction,
            increment: None,
        }
    }

    pub fn decimal(initial_value: i64) -> Self {
        Fragment::DecimalNumeral {
            initial_value,
            increment: None,
        }
    }

    pub fn roman(initial_value: i64, uppercase: bool) -> Self {
        Fragment::RomanNumeral {
            initial_value,
            uppercase,
            increment: None,
        }
    }

    /// Render this fragment for the counter value `value`.
    pub fn format(&self, value: HalfInteger) -> String {
        match self {
            Fragment::FreeText {
                text, restriction, ..
            } => {
                if restriction.admits(value.is_half()) {
                    text.clone()
                } else {
                    String::new()
                }
            }
            Fragment::DecimalNumeral { .. } => value.floor().to_string(),
            Fragment::RomanNumeral { uppercase, .. } => roman::encode(value.floor(), *uppercase),
        }
    }

    /// The value written in the specification, for numeral fragments.
    pub fn numeric_value(&self) -> Option<i64> {
        match self {
            Fragment::FreeText { .. } => None,
            Fragment::DecimalNumeral { initial_value, .. }
            | Fragment::RomanNumeral { initial_value, .. } => Some(*initial_value),
        }
    }

    pub fn increment(&self) -> Option<HalfInteger> {
        match self {
            Fragment::FreeText { increment, .. }
            | Fragment::DecimalNumeral { increment, .. }
            | Fragment::RomanNumeral { increment, .. } => *increment,
        }
    }

    pub fn set_increment(&mut self, step: HalfInteger) {
        match self {
            Fragment::FreeText { increment, .. }
            | Fragment::DecimalNumeral { increment, .. }
            | Fragment::RomanNumeral { increment, .. } => *increment = Some(step),
        }
    }

    /// The amount this fragment advances the counter by.
    pub fn step(&self) -> HalfInteger {
        self.increment().unwrap_or(HalfInteger::ZERO)
    }
}

/// Debug-style summary: kind, initial value or text, and increment if set.
impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fragment::FreeText {
                text, restriction, ..
            } => {
                write!(f, "text {text:?}")?;
                match restriction {
                    PageRestriction::None => {}
                    PageRestriction::RectoOnly => f.write_str(" recto")?,
                    PageRestriction::VersoOnly => f.write_str(" verso")?,
                }
            }
            Fragment::DecimalNumeral { initial_value, .. } => {
                write!(f, "decimal {initial_value}")?;
            }
            Fragment::RomanNumeral {
                initial_value,
                uppercase,
                ..
            } => {
                write!(f, "roman {}", roman::encode(*initial_value, *uppercase))?;
            }
        }
        if let Some(step) = self.increment() {
            write!(f, " +{step}")?;
        }
        Ok(())
    }
}
