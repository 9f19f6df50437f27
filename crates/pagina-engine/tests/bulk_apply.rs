//! Encoding a numbering choice and writing the labels into page entries.

use pagina_core::enums::{NumberingKind, PaginationMode};
use pagina_engine::{ApplyScope, PageEntry, Paginator, PaginatorOptions, continue_after_last_label, encode};

#[derive(Debug, Default)]
struct Page {
    image: String,
    order_label: Option<String>,
}

impl PageEntry for Page {
    fn label(&self) -> Option<&str> {
        self.order_label.as_deref()
    }

    fn set_label(&mut self, label: String) {
        self.order_label = Some(label);
    }
}

fn pages(count: usize) -> Vec<Page> {
    (1..=count)
        .map(|i| Page {
            image: format!("{i:08}.tif"),
            order_label: None,
        })
        .collect()
}

fn order_labels(pages: &[Page]) -> Vec<&str> {
    pages.iter().map(|p| p.label().unwrap_or("")).collect()
}

fn paginate(
    kind: NumberingKind,
    mode: PaginationMode,
    value: &str,
    entries: &mut [Page],
    selection: &[usize],
    scope: ApplyScope,
) -> usize {
    let spec = encode(kind, mode, value, false, " ").unwrap();
    Paginator::new(&spec)
        .unwrap()
        .apply_selected(entries, selection, scope)
        .unwrap()
}

#[test]
fn arabic_pages_from_first_selected() {
    let mut entries = pages(3);
    paginate(NumberingKind::Arabic, PaginationMode::Pages, "50", &mut entries, &[0], ApplyScope::FromFirstSelected);
    assert_eq!(order_labels(&entries), ["50", "51", "52"]);
}

#[test]
fn roman_pages_start_value_in_roman() {
    let mut entries = pages(3);
    paginate(NumberingKind::Roman, PaginationMode::Pages, "II", &mut entries, &[0], ApplyScope::FromFirstSelected);
    assert_eq!(order_labels(&entries), ["II", "III", "IV"]);
}

#[test]
fn columns_count_by_two() {
    let mut entries = pages(3);
    paginate(NumberingKind::Arabic, PaginationMode::Columns, "1", &mut entries, &[0], ApplyScope::FromFirstSelected);
    assert_eq!(order_labels(&entries), ["1", "3", "5"]);
}

#[test]
fn foliation_counts_leaves() {
    let mut entries = pages(4);
    paginate(NumberingKind::Arabic, PaginationMode::Foliation, "1", &mut entries, &[0], ApplyScope::FromFirstSelected);
    assert_eq!(order_labels(&entries), ["1", "1", "2", "2"]);
}

#[test]
fn recto_verso_foliation_on_selected_pages() {
    let mut entries = pages(4);
    let n = paginate(
        NumberingKind::Arabic,
        PaginationMode::RectoVersoFoliation,
        "1",
        &mut entries,
        &[0, 1, 2, 3],
        ApplyScope::SelectedOnly,
    );
    assert_eq!(n, 4);
    assert_eq!(order_labels(&entries), ["1r", "1v", "2r", "2v"]);
}

#[test]
fn recto_verso_on_single_image() {
    let mut entries = pages(1);
    paginate(NumberingKind::Arabic, PaginationMode::RectoVerso, "1", &mut entries, &[0], ApplyScope::FromFirstSelected);
    assert_eq!(order_labels(&entries), ["1v 2r"]);
}

#[test]
fn uncounted_ignores_start_value() {
    let mut entries = pages(3);
    paginate(NumberingKind::Uncounted, PaginationMode::Pages, "Foo", &mut entries, &[0, 1, 2], ApplyScope::SelectedOnly);
    assert_eq!(order_labels(&entries), ["uncounted", "uncounted", "uncounted"]);
}

#[test]
fn selection_skips_unselected_pages() {
    let mut entries = pages(4);
    entries[0].set_label("uncounted".to_string());
    paginate(NumberingKind::Arabic, PaginationMode::Pages, "1", &mut entries, &[1, 2, 3], ApplyScope::SelectedOnly);
    assert_eq!(order_labels(&entries), ["uncounted", "1", "2", "3"]);
    assert_eq!(entries[3].image, "00000004.tif");
}

#[test]
fn new_images_continue_the_numbering() {
    let mut entries = pages(6);
    paginate(NumberingKind::Roman, PaginationMode::Pages, "1", &mut entries[..4], &[1], ApplyScope::FromFirstSelected);
    assert_eq!(order_labels(&entries), ["", "I", "II", "III", "", ""]);

    let counted = continue_after_last_label(&mut entries, &PaginatorOptions::default()).unwrap();
    assert_eq!(counted, 2);
    assert_eq!(order_labels(&entries), ["uncounted", "I", "II", "III", "IV", "V"]);
}
