// Paginator: unbounded page label generator
//
// Construction parses the specification, infers missing increments and the
// counting direction, then fixes the start value. From then on each call to
// `next_label` formats every fragment with the running counter value and
// advances the counter by the fragment's increment. There is no rewind.

use std::fmt;

use pagina_core::HalfInteger;
use pagina_core::character::HALF_MARK;
use tracing::debug;

use crate::PaginationError;
use crate::fragment::Fragment;
use crate::inference::infer;
use crate::options::PaginatorOptions;
use crate::parser::parse;

/// Generates the page labels of a pagination specification, one per call.
///
/// The sequence never ends: [`has_next`](Self::has_next) is always true and
/// the [`Iterator`] implementation never returns `None`, so bound it with
/// `take` or similar.
///
/// ```
/// use pagina_engine::Paginator;
///
/// let mut paginator = Paginator::new("2 1").unwrap();
/// assert_eq!(paginator.next_label(), "2 1");
/// assert_eq!(paginator.next_label(), "4 3");
/// ```
#[derive(Debug, Clone)]
pub struct Paginator {
    fragments: Vec<Fragment>,
    reverse: bool,
    value: HalfInteger,
}

impl Paginator {
    /// Build a paginator with the default increment table, rejecting
    /// ambiguous specifications.
    pub fn new(spec: &str) -> Result<Self, PaginationError> {
        Self::with_options(spec, &PaginatorOptions::default())
    }

    /// Build a paginator with explicit options.
    ///
    /// A leading `½` is not an increment: it starts the sequence one half
    /// above the first counter's value (on the verso of that leaf).
    pub fn with_options(spec: &str, options: &PaginatorOptions) -> Result<Self, PaginationError> {
        let (body, start_on_half) = match spec.strip_prefix(HALF_MARK) {
            Some(rest) => (rest, true),
            None => (spec, false),
        };

        let mut fragments = parse(body, options)?;
        let inferred = infer(&mut fragments, start_on_half, options.lenient)?;

        debug!(
            spec,
            fragments = fragments.len(),
            reverse = inferred.reverse,
            start = %inferred.start,
            "built paginator"
        );

        Ok(Self {
            fragments,
            reverse: inferred.reverse,
            value: inferred.start,
        })
    }

    /// Always true: a pagination sequence does not run out.
    pub fn has_next(&self) -> bool {
        true
    }

    /// Produce the next label and advance the counter.
    pub fn next_label(&mut self) -> String {
        let mut label = String::new();
        if self.reverse {
            // Build right to left; each piece goes in front of the previous.
            for fragment in self.fragments.iter().rev() {
                label.insert_str(0, &fragment.format(self.value));
                self.value += fragment.step();
            }
        } else {
            for fragment in &self.fragments {
                label.push_str(&fragment.format(self.value));
                self.value += fragment.step();
            }
        }
        label
    }

    /// Labels cannot be removed from a sequence.
    pub fn remove(&mut self) -> Result<(), PaginationError> {
        Err(PaginationError::Unsupported("Paginator::remove"))
    }

    /// Whether the counters were declared right to left.
    pub fn is_reverse(&self) -> bool {
        self.reverse
    }

    /// Counter value the next label will start from.
    pub fn current_value(&self) -> HalfInteger {
        self.value
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }
}

impl Iterator for Paginator {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        Some(self.next_label())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl std::iter::FusedIterator for Paginator {}

/// `value[, reversed], [fragment, ...]`
impl fmt::Display for Paginator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)?;
        if self.reverse {
            f.write_str(", reversed")?;
        }
        f.write_str(", [")?;
        for (i, fragment) in self.fragments.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{fragment}")?;
        }
        f.write_str("]")
    }
}
