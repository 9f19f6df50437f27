// Shared enums: page restrictions, numbering kinds, pagination modes

use std::fmt;
use std::str::FromStr;

use crate::numeral::NumeralParseError;

/// Which side of a leaf a free-text fragment is printed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PageRestriction {
    /// Printed on every page.
    #[default]
    None,
    /// Printed only while the counter is whole (right-hand page).
    RectoOnly,
    /// Printed only while the counter is a half value (left-hand page).
    VersoOnly,
}

impl PageRestriction {
    /// Whether a fragment with this restriction shows for the given counter
    /// half flag.
    pub fn admits(self, half: bool) -> bool {
        match self {
            PageRestriction::None => true,
            PageRestriction::RectoOnly => !half,
            PageRestriction::VersoOnly => half,
        }
    }
}

/// How the start value typed by a user is to be numbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum NumberingKind {
    /// Decimal digits (the value may be typed as a Roman numeral).
    Arabic,
    /// Uppercase Roman numerals (the value may be typed in decimal).
    Roman,
    /// The value repeated verbatim on every page.
    FreeText,
    /// The fixed marker `uncounted`; the value is ignored.
    Uncounted,
    /// The value is already a pagination specification.
    Advanced,
}

/// How many labels one scanned image carries and how they advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PaginationMode {
    /// One page per image, counting by one.
    Pages,
    /// One image shows two columns, counting by two.
    Columns,
    /// Leaves counted once for recto and verso.
    Foliation,
    /// Leaves counted once, labelled with `r` and `v`.
    RectoVersoFoliation,
    /// One image shows a verso and the following recto.
    RectoVerso,
    /// One image shows two consecutive pages.
    DoublePages,
}

/// Generates `as_str`, `Display` and `FromStr` over a fixed name table.
macro_rules! named_enum {
    ($ty:ident, $err:ident, { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $ty {
            /// All variants, in declaration order.
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            /// The lowercase name used on command lines and in bindings.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($ty::$variant => $name),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = NumeralParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let lower = s.trim().to_ascii_lowercase().replace('-', "_");
                match lower.as_str() {
                    $($name => Ok($ty::$variant),)+
                    _ => Err(NumeralParseError::$err(s.to_string())),
                }
            }
        }
    };
}

named_enum!(NumberingKind, UnknownKind, {
    Arabic => "arabic",
    Roman => "roman",
    FreeText => "free_text",
    Uncounted => "uncounted",
    Advanced => "advanced",
});

named_enum!(PaginationMode, UnknownMode, {
    Pages => "pages",
    Columns => "columns",
    Foliation => "foliation",
    RectoVersoFoliation => "recto_verso_foliation",
    RectoVerso => "recto_verso",
    DoublePages => "double_pages",
});
