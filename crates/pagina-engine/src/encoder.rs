// Initializer encoder: numbering kind and pagination mode to specification text
//
// The encoder is the inverse of what a user would otherwise type by hand. It
// takes the start value as entered ("7", "vii", "Hello world!") and produces
// the specification that makes a `Paginator` yield labels in the requested
// layout.

use pagina_core::character::{ESCAPE, FULL_PAGE_MARK, HALF_MARK, HALF_PAGE_MARK};
use pagina_core::enums::{NumberingKind, PaginationMode};
use pagina_core::numeral::{NumeralParseError, parse_numeral};
use pagina_core::roman;

use crate::{PaginationError, UNCOUNTED};

const STEP_ZERO: char = '\u{00B0}'; // °
const STEP_TWO: char = '\u{00B2}'; // ²

/// Build the specification text for a numbering kind and mode.
///
/// - `value` is the start value. Arabic and Roman accept it in either
///   notation; free text is repeated verbatim; uncounted ignores it;
///   advanced returns it unchanged as a ready-made specification.
/// - `fictitious` puts each number in square brackets, marking it as not
///   printed in the book.
/// - `separator` goes between the two labels of one image in the recto/verso
///   and double page modes and is ignored otherwise.
///
/// Free text and separators are quoted with backticks, so they may not
/// contain one.
pub fn encode(
    kind: NumberingKind,
    mode: PaginationMode,
    value: &str,
    fictitious: bool,
    separator: &str,
) -> Result<String, PaginationError> {
    let (current, next) = match kind {
        NumberingKind::Advanced => return Ok(value.to_string()),
        NumberingKind::Arabic => {
            let n = parse_numeral(value)?;
            (n.to_string(), successor(n, value)?.to_string())
        }
        NumberingKind::Roman => {
            let n = parse_numeral(value)?;
            (roman::encode(n, true), roman::encode(successor(n, value)?, true))
        }
        NumberingKind::FreeText => {
            let quoted = quote(value)?;
            (quoted.clone(), quoted)
        }
        NumberingKind::Uncounted => {
            let quoted = quote(UNCOUNTED)?;
            (quoted.clone(), quoted)
        }
    };

    let (l, r) = if fictitious { ("[", "]") } else { ("", "") };
    let v = current;
    let n = next;

    Ok(match mode {
        PaginationMode::Pages => format!("{l}{v}{r}"),
        PaginationMode::Columns => format!("{l}{v}{STEP_TWO}{r}"),
        PaginationMode::Foliation => format!("{l}{v}{HALF_MARK}{r}"),
        PaginationMode::RectoVersoFoliation => format!(
            "{l}{v}{STEP_ZERO}{r}{FULL_PAGE_MARK}r{HALF_PAGE_MARK}{ESCAPE}v{ESCAPE}{HALF_MARK}"
        ),
        PaginationMode::RectoVerso => {
            let sep = check_literal(separator)?;
            format!("{l}{v}{ESCAPE}{r}v{sep}{l}{ESCAPE}{n}{STEP_ZERO}{r}r")
        }
        PaginationMode::DoublePages => {
            let sep = check_literal(separator)?;
            format!("{l}{v}{r}{ESCAPE}{sep}{ESCAPE}{l}{n}{r}")
        }
    })
}

fn successor(n: i64, text: &str) -> Result<i64, NumeralParseError> {
    n.checked_add(1)
        .ok_or_else(|| NumeralParseError::Overflow(text.to_string()))
}

fn check_literal(text: &str) -> Result<&str, PaginationError> {
    if text.contains(ESCAPE) {
        Err(PaginationError::LiteralBacktick(text.to_string()))
    } else {
        Ok(text)
    }
}

fn quote(text: &str) -> Result<String, PaginationError> {
    let text = check_literal(text)?;
    Ok(format!("{ESCAPE}{text}{ESCAPE}"))
}
