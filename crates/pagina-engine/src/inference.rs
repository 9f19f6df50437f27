// Increment and direction inference
//
// Runs once after parsing. Counters (numeral fragments) without an explicit
// increment get one derived from the distance to their neighbour, and the
// order of the first and last counter decides whether the label is built
// left to right or right to left.

use pagina_core::HalfInteger;

use crate::PaginationError;
use crate::fragment::Fragment;

/// Where the generator starts and which way it walks the fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Inferred {
    pub start: HalfInteger,
    pub reverse: bool,
}

/// Fill in missing counter increments and find the start value.
///
/// - No counters: start at 0.
/// - One counter: start at its value; default increment 1.
/// - First counter not above the last: left to right. Each counter gets the
///   distance to the next counter, the last gets the average distance.
/// - First counter above the last: right to left, mirrored.
///
/// With more than two counters the values must run in one direction unless
/// `lenient` is set. `start_on_half` adds one half to the start value.
pub fn infer(
    fragments: &mut [Fragment],
    start_on_half: bool,
    lenient: bool,
) -> Result<Inferred, PaginationError> {
    let counters: Vec<(usize, i64)> = fragments
        .iter()
        .enumerate()
        .filter_map(|(i, f)| f.numeric_value().map(|v| (i, v)))
        .collect();

    let (start, reverse) = match counters.as_slice() {
        [] => (0, false),
        [(index, value)] => {
            if fragments[*index].increment().is_none() {
                fragments[*index].set_increment(HalfInteger::ONE);
            }
            (*value, false)
        }
        [(_, first), .., (_, last)] => {
            let reverse = first > last;
            if !lenient && counters.len() > 2 && !is_monotonic(&counters, reverse) {
                return Err(PaginationError::NonMonotonic {
                    values: counters.iter().map(|&(_, v)| v).collect(),
                });
            }
            if reverse {
                infer_right_to_left(fragments, &counters);
                (*last, true)
            } else {
                infer_left_to_right(fragments, &counters);
                (*first, false)
            }
        }
    };

    Ok(Inferred {
        start: HalfInteger::new(start, start_on_half),
        reverse,
    })
}

fn is_monotonic(counters: &[(usize, i64)], descending: bool) -> bool {
    counters.windows(2).all(|pair| {
        let (a, b) = (pair[0].1, pair[1].1);
        if descending { a >= b } else { a <= b }
    })
}

/// Average distance between the outermost counters, truncated toward zero.
fn average_step(from: i64, to: i64, count: usize) -> HalfInteger {
    let gaps = (count - 1) as i64;
    HalfInteger::whole((to - from) / gaps)
}

fn infer_left_to_right(fragments: &mut [Fragment], counters: &[(usize, i64)]) {
    for pair in counters.windows(2) {
        let ((earlier, from), (_, to)) = (pair[0], pair[1]);
        if fragments[earlier].increment().is_none() {
            fragments[earlier].set_increment(HalfInteger::whole(to - from));
        }
    }
    let (first, last) = (counters[0], counters[counters.len() - 1]);
    if fragments[last.0].increment().is_none() {
        fragments[last.0].set_increment(average_step(first.1, last.1, counters.len()));
    }
}

fn infer_right_to_left(fragments: &mut [Fragment], counters: &[(usize, i64)]) {
    for pair in counters.windows(2).rev() {
        let ((_, to), (later, from)) = (pair[0], pair[1]);
        if fragments[later].increment().is_none() {
            fragments[later].set_increment(HalfInteger::whole(to - from));
        }
    }
    let (first, last) = (counters[0], counters[counters.len() - 1]);
    if fragments[first.0].increment().is_none() {
        fragments[first.0].set_increment(average_step(last.1, first.1, counters.len()));
    }
}
