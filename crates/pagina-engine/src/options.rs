// Paginator configuration: increment mark table and strictness

use std::collections::BTreeMap;

use pagina_core::HalfInteger;
use pagina_core::character::HALF_MARK;

use crate::PaginationError;

/// Maps increment mark characters to the counter step they stand for.
///
/// A run of marks such as `²½` steps by the sum of its marks.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct IncrementTable {
    steps: BTreeMap<char, HalfInteger>,
}

impl IncrementTable {
    /// A table that maps nothing.
    pub fn empty() -> Self {
        Self {
            steps: BTreeMap::new(),
        }
    }

    /// Add or replace the step for `mark`.
    pub fn insert(&mut self, mark: char, step: HalfInteger) -> Option<HalfInteger> {
        self.steps.insert(mark, step)
    }

    /// Step for a single mark.
    pub fn get(&self, mark: char) -> Option<HalfInteger> {
        self.steps.get(&mark).copied()
    }

    /// Step for a run of marks: the sum of each mark's step.
    pub fn lookup(&self, marks: &str) -> Result<HalfInteger, PaginationError> {
        marks.chars().try_fold(HalfInteger::ZERO, |sum, mark| {
            self.get(mark)
                .map(|step| sum + step)
                .ok_or_else(|| PaginationError::UnknownIncrementMark(marks.to_string()))
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, HalfInteger)> + '_ {
        self.steps.iter().map(|(&mark, &step)| (mark, step))
    }
}

/// `°` = 0, `¹` = 1, `²` = 2, `³` = 3, `½` = one half.
impl Default for IncrementTable {
    fn default() -> Self {
        let mut table = Self::empty();
        table.insert('\u{00B0}', HalfInteger::ZERO);
        table.insert('\u{00B9}', HalfInteger::ONE);
        table.insert('\u{00B2}', HalfInteger::whole(2));
        table.insert('\u{00B3}', HalfInteger::whole(3));
        table.insert(HALF_MARK, HalfInteger::HALF);
        table
    }
}

/// Options for building a [`Paginator`](crate::Paginator).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PaginatorOptions {
    /// Increment mark characters and their steps.
    pub increments: IncrementTable,

    /// Accept specifications the strict parser rejects: increment marks with
    /// nothing before them are dropped with a warning and counters need not
    /// be monotonic.
    pub lenient: bool,
}

impl PaginatorOptions {
    pub fn lenient() -> Self {
        Self {
            lenient: true,
            ..Self::default()
        }
    }
}
