// Buffer merge rules for the specification parser

use pagina_core::character::CodePointClass;

/// Decide whether a character of class `incoming` extends a buffer of class
/// `buffer`.
///
/// Returns the class the buffer has after the character is appended, or
/// `None` if the buffer must be flushed first and a new buffer started.
/// Escapes and page marks are dealt with by the parser loop before merging
/// is considered.
///
/// - The end of input merges with nothing.
/// - An empty buffer takes any class.
/// - Equal classes merge.
/// - Text and symbols mix freely; the buffer takes the incoming class.
/// - Text and Roman numeral letters mix into text, so the `C` in `Chapter`
///   does not start a counter.
pub fn merge(buffer: CodePointClass, incoming: CodePointClass) -> Option<CodePointClass> {
    use CodePointClass::*;

    match (buffer, incoming) {
        (_, End) => None,
        (Empty, _) => Some(incoming),
        (b, i) if b == i => Some(incoming),
        (Text, Symbol) | (Symbol, Text) => Some(incoming),
        (Text, i) if i.is_roman() => Some(Text),
        (b, Text) if b.is_roman() => Some(Text),
        _ => None,
    }
}
