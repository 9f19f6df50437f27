// Pagination specification parser
//
// A single left-to-right scan over classified code points. Characters collect
// in a buffer while their classes merge (see `transition::merge`); when they
// stop merging, the buffer is flushed into a fragment. Two pieces of state sit
// beside the buffer:
//
// - a pending page restriction, set by `¡` or `¿`, which turns whatever is
//   flushed next into restricted free text;
// - escape mode, entered and left with a backtick, in which every character
//   is taken literally.
//
// Increment mark runs do not become fragments of their own. When flushed they
// set the increment of the fragment just before them.

pub mod transition;

use pagina_core::character::{CodePointClass, classify};
use pagina_core::enums::PageRestriction;
use pagina_core::numeral::parse_decimal;
use pagina_core::roman;
use tracing::{trace, warn};

use crate::PaginationError;
use crate::fragment::Fragment;
use crate::options::PaginatorOptions;

/// Parse a specification (with any leading half mark already removed) into
/// its fragments, in declaration order.
///
/// Increments are only present where the specification spells them out;
/// inference fills in the rest.
pub fn parse(spec: &str, options: &PaginatorOptions) -> Result<Vec<Fragment>, PaginationError> {
    let mut parser = Parser::new(options);
    for (position, ch) in spec.chars().enumerate() {
        parser.feed(position, ch)?;
    }
    parser.finish()
}

// ---------------------------------------------------------------------------
// Parser state
// ---------------------------------------------------------------------------

struct Parser<'a> {
    options: &'a PaginatorOptions,
    fragments: Vec<Fragment>,

    /// Characters not yet turned into a fragment.
    buffer: String,
    /// Class of the buffer content, `Empty` if there is none.
    class: CodePointClass,
    /// Character position where the buffer content starts.
    start: usize,

    /// Set by a page mark, consumed by the next flush.
    restriction: Option<PageRestriction>,
    /// Inside a backtick-quoted literal.
    escaped: bool,
}

impl<'a> Parser<'a> {
    fn new(options: &'a PaginatorOptions) -> Self {
        Self {
            options,
            fragments: Vec::new(),
            buffer: String::new(),
            class: CodePointClass::Empty,
            start: 0,
            restriction: None,
            escaped: false,
        }
    }

    fn feed(&mut self, position: usize, ch: char) -> Result<(), PaginationError> {
        let class = classify(ch);

        if class == CodePointClass::Escape {
            if self.escaped {
                self.flush_literal();
            } else {
                // Opening on an empty buffer keeps a pending restriction for
                // the literal; otherwise the restriction goes to the buffer.
                if self.class != CodePointClass::Empty {
                    self.flush()?;
                }
                self.escaped = true;
                self.start = position + 1;
            }
            return Ok(());
        }

        if self.escaped {
            self.buffer.push(ch);
            return Ok(());
        }

        if class.is_page_mark() {
            if self.class != CodePointClass::Empty {
                self.flush()?;
            }
            self.restriction = Some(if class == CodePointClass::FullPageMark {
                PageRestriction::RectoOnly
            } else {
                PageRestriction::VersoOnly
            });
            return Ok(());
        }

        match transition::merge(self.class, class) {
            Some(merged) => {
                if self.class == CodePointClass::Empty {
                    self.start = position;
                }
                self.class = merged;
            }
            None => {
                self.flush()?;
                self.start = position;
                self.class = class;
            }
        }
        self.buffer.push(ch);
        Ok(())
    }

    /// End of input. An unterminated literal is closed implicitly.
    fn finish(mut self) -> Result<Vec<Fragment>, PaginationError> {
        if self.escaped {
            self.flush_literal();
        } else if transition::merge(self.class, CodePointClass::End).is_none() {
            self.flush()?;
        }
        Ok(self.fragments)
    }

    /// Turn the buffer into a fragment according to its class and any pending
    /// restriction.
    fn flush(&mut self) -> Result<(), PaginationError> {
        let text = std::mem::take(&mut self.buffer);
        let class = std::mem::replace(&mut self.class, CodePointClass::Empty);
        let restriction = self.restriction.take();

        let fragment = match (class, restriction) {
            (CodePointClass::Empty, _) => return Ok(()),
            (CodePointClass::IncrementMark, _) => return self.apply_increment(&text, self.start),
            (_, Some(restriction)) => Fragment::free_text(text, restriction),
            (CodePointClass::Decimal, None) => Fragment::decimal(parse_decimal(&text)?),
            (CodePointClass::UppercaseRoman, None) => Fragment::roman(roman::decode(&text)?, true),
            (CodePointClass::LowercaseRoman, None) => {
                Fragment::roman(roman::decode(&text)?, false)
            }
            (_, None) => Fragment::free_text(text, PageRestriction::None),
        };
        self.push(fragment);
        Ok(())
    }

    /// Close a literal: its content becomes free text, restricted if a page
    /// mark came right before the opening backtick.
    fn flush_literal(&mut self) {
        let text = std::mem::take(&mut self.buffer);
        let restriction = self.restriction.take().unwrap_or_default();
        self.escaped = false;
        self.class = CodePointClass::Empty;
        self.push(Fragment::free_text(text, restriction));
    }

    /// Set the increment of the most recent fragment from a run of increment
    /// marks.
    fn apply_increment(&mut self, marks: &str, position: usize) -> Result<(), PaginationError> {
        let step = self.options.increments.lookup(marks)?;
        match self.fragments.last_mut() {
            Some(fragment) => {
                fragment.set_increment(step);
                trace!(%step, fragment = %fragment, "applied increment");
                Ok(())
            }
            None if self.options.lenient => {
                warn!(position, marks, "ignoring increment mark with no preceding fragment");
                Ok(())
            }
            None => Err(PaginationError::OrphanIncrement { position }),
        }
    }

    fn push(&mut self, fragment: Fragment) {
        trace!(fragment = %fragment, "flushed fragment");
        self.fragments.push(fragment);
    }
}
