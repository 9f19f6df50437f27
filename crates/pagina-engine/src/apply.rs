// Bulk application of labels to page entries

use tracing::debug;

use crate::options::PaginatorOptions;
use crate::paginator::Paginator;
use crate::{PaginationError, UNCOUNTED};

/// Anything that carries a page label, such as a scanned image in a
/// document's physical structure.
pub trait PageEntry {
    /// The current label, if the entry has one.
    fn label(&self) -> Option<&str>;

    fn set_label(&mut self, label: String);
}

impl PageEntry for Option<String> {
    fn label(&self) -> Option<&str> {
        self.as_deref()
    }

    fn set_label(&mut self, label: String) {
        *self = Some(label);
    }
}

/// Which entries a selection-based apply writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ApplyScope {
    /// From the first selected entry to the last entry.
    #[default]
    FromFirstSelected,
    /// Only the selected entries, in selection order.
    SelectedOnly,
}

impl Paginator {
    /// Label every entry, in order. Returns the number of entries labelled.
    pub fn apply<E: PageEntry>(&mut self, entries: &mut [E]) -> usize {
        for entry in entries.iter_mut() {
            entry.set_label(self.next_label());
        }
        entries.len()
    }

    /// Label the entries picked by `selection` and `scope`.
    ///
    /// The selection holds entry indices. With
    /// [`FromFirstSelected`](ApplyScope::FromFirstSelected) only its first
    /// index matters. All indices are checked before any label is written.
    pub fn apply_selected<E: PageEntry>(
        &mut self,
        entries: &mut [E],
        selection: &[usize],
        scope: ApplyScope,
    ) -> Result<usize, PaginationError> {
        let len = entries.len();
        let &first = selection.first().ok_or(PaginationError::EmptySelection)?;

        match scope {
            ApplyScope::FromFirstSelected => {
                if first >= len {
                    return Err(PaginationError::EntryOutOfRange { index: first, len });
                }
                Ok(self.apply(&mut entries[first..]))
            }
            ApplyScope::SelectedOnly => {
                if let Some(&index) = selection.iter().find(|&&i| i >= len) {
                    return Err(PaginationError::EntryOutOfRange { index, len });
                }
                for &index in selection {
                    entries[index].set_label(self.next_label());
                }
                Ok(selection.len())
            }
        }
    }
}

/// Carry the numbering on past the last labelled entry.
///
/// The last entry that has a label is read as a pagination specification;
/// the entries after it get the labels that follow it. Afterwards every entry
/// still without a label is marked `uncounted`. Returns the number of entries
/// that received a counted label.
pub fn continue_after_last_label<E: PageEntry>(
    entries: &mut [E],
    options: &PaginatorOptions,
) -> Result<usize, PaginationError> {
    let last = entries
        .iter()
        .rposition(|e| e.label().is_some())
        .and_then(|i| entries[i].label().map(|label| (i, label.to_string())));

    let counted = match last {
        Some((index, label)) => {
            let mut paginator = Paginator::with_options(&label, options)?;
            paginator.next_label();
            let counted = paginator.apply(&mut entries[index + 1..]);
            debug!(from = %label, index, counted, "continued pagination");
            counted
        }
        None => 0,
    };

    for entry in entries.iter_mut().filter(|e| e.label().is_none()) {
        entry.set_label(UNCOUNTED.to_string());
    }
    Ok(counted)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank(n: usize) -> Vec<Option<String>> {
        vec![None; n]
    }

    fn labels(entries: &[Option<String>]) -> Vec<&str> {
        entries.iter().map(|e| e.as_deref().unwrap_or("-")).collect()
    }

    // -- apply --

    #[test]
    fn apply_labels_in_order() {
        let mut entries = blank(3);
        let n = Paginator::new("50").unwrap().apply(&mut entries);
        assert_eq!(n, 3);
        assert_eq!(labels(&entries), ["50", "51", "52"]);
    }

    #[test]
    fn apply_overwrites_existing_labels() {
        let mut entries = vec![Some("x".to_string()), None];
        Paginator::new("II").unwrap().apply(&mut entries);
        assert_eq!(labels(&entries), ["II", "III"]);
    }

    // -- apply_selected --

    #[test]
    fn from_first_selected_runs_to_the_end() {
        let mut entries = blank(5);
        let n = Paginator::new("1")
            .unwrap()
            .apply_selected(&mut entries, &[2, 0], ApplyScope::FromFirstSelected)
            .unwrap();
        assert_eq!(n, 3);
        assert_eq!(labels(&entries), ["-", "-", "1", "2", "3"]);
    }

    #[test]
    fn selected_only_follows_selection_order() {
        let mut entries = blank(5);
        let n = Paginator::new("1")
            .unwrap()
            .apply_selected(&mut entries, &[3, 1, 4], ApplyScope::SelectedOnly)
            .unwrap();
        assert_eq!(n, 3);
        assert_eq!(labels(&entries), ["-", "2", "-", "1", "3"]);
    }

    #[test]
    fn empty_selection_is_an_error() {
        let mut entries = blank(2);
        assert_eq!(
            Paginator::new("1")
                .unwrap()
                .apply_selected(&mut entries, &[], ApplyScope::SelectedOnly),
            Err(PaginationError::EmptySelection)
        );
    }

    #[test]
    fn out_of_range_writes_nothing() {
        let mut entries = blank(3);
        let mut paginator = Paginator::new("1").unwrap();
        assert_eq!(
            paginator.apply_selected(&mut entries, &[0, 7], ApplyScope::SelectedOnly),
            Err(PaginationError::EntryOutOfRange { index: 7, len: 3 })
        );
        assert_eq!(labels(&entries), ["-", "-", "-"]);
        assert_eq!(
            paginator.apply_selected(&mut entries, &[3], ApplyScope::FromFirstSelected),
            Err(PaginationError::EntryOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(paginator.next_label(), "1");
    }

    // -- continue_after_last_label --

    #[test]
    fn continues_from_last_label() {
        let mut entries = vec![
            None,
            Some("1".to_string()),
            Some("2".to_string()),
            None,
            None,
        ];
        let n = continue_after_last_label(&mut entries, &PaginatorOptions::default()).unwrap();
        assert_eq!(n, 2);
        assert_eq!(labels(&entries), ["uncounted", "1", "2", "3", "4"]);
    }

    #[test]
    fn continues_roman_labels() {
        let mut entries = vec![Some("iv".to_string()), None, None];
        continue_after_last_label(&mut entries, &PaginatorOptions::default()).unwrap();
        assert_eq!(labels(&entries), ["iv", "v", "vi"]);
    }

    #[test]
    fn nothing_labelled_marks_all_uncounted() {
        let mut entries = blank(2);
        let n = continue_after_last_label(&mut entries, &PaginatorOptions::default()).unwrap();
        assert_eq!(n, 0);
        assert_eq!(labels(&entries), ["uncounted", "uncounted"]);
    }

    #[test]
    fn unreadable_last_label_is_an_error() {
        let mut entries = vec![Some("1 9 3".to_string()), None];
        assert!(matches!(
            continue_after_last_label(&mut entries, &PaginatorOptions::default()),
            Err(PaginationError::NonMonotonic { .. })
        ));
    }
}
