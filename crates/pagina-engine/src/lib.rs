//! Pagination sequence engine.
//!
//! Turns a compact pagination specification such as `"1"`, `"[IV]"`,
//! `` "1°¡r¿`v`½" `` or `"2 1"` into a list of formattable fragments and an
//! unbounded generator of page labels.
//!
//! # Architecture
//!
//! - [`parser`] -- Classified state loop building the fragment list
//! - [`fragment`] -- Free text, decimal and Roman numeral fragments
//! - [`options`] -- Increment mark table and strictness settings
//! - [`inference`] -- Missing increments and counting direction
//! - [`paginator`] -- The label generator
//! - [`encoder`] -- Numbering kind and mode to specification text (feature `encode`)
//! - [`apply`] -- Writing labels into page entries (feature `apply`)
//!
//! # Example
//!
//! ```
//! use pagina_engine::Paginator;
//!
//! let mut paginator = Paginator::new("1\u{00BD}").unwrap();
//! let labels: Vec<String> = paginator.by_ref().take(4).collect();
//! assert_eq!(labels, ["1", "1", "2", "2"]);
//! ```

#[cfg(feature = "apply")]
pub mod apply;
#[cfg(feature = "encode")]
pub mod encoder;
pub mod fragment;
pub mod inference;
pub mod options;
pub mod paginator;
pub mod parser;

#[cfg(feature = "apply")]
pub use apply::{ApplyScope, PageEntry, continue_after_last_label};
#[cfg(feature = "encode")]
pub use encoder::encode;
pub use fragment::Fragment;
pub use options::{IncrementTable, PaginatorOptions};
pub use paginator::Paginator;

use pagina_core::NumeralParseError;

/// Label for pages that carry no number.
pub const UNCOUNTED: &str = "uncounted";

/// Error type for building paginators and applying labels.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaginationError {
    /// A numeral in the specification could not be read.
    #[error(transparent)]
    Numeral(#[from] NumeralParseError),

    /// An increment mark with no fragment before it to apply to.
    #[error("increment mark at position {position} has no preceding fragment")]
    OrphanIncrement { position: usize },

    /// An increment mark run contains a character the increment table does
    /// not map.
    #[error("unknown increment mark {0:?}")]
    UnknownIncrementMark(String),

    /// More than two counters whose initial values do not run in one
    /// direction.
    #[error("counters are not monotonic: {values:?}")]
    NonMonotonic { values: Vec<i64> },

    /// A value or separator handed to the encoder contains the escape
    /// character and cannot be quoted.
    #[error("text {0:?} contains a backtick and cannot be escaped")]
    LiteralBacktick(String),

    #[error("no page entries selected")]
    EmptySelection,

    #[error("entry index {index} out of range for {len} entries")]
    EntryOutOfRange { index: usize, len: usize },

    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),
}

