// Callers must ensure pointer validity; the contracts are documented per
// function.
#![allow(clippy::missing_safety_doc)]

// pagina-ffi: C-compatible FFI layer for the paginator and encoder.
//
// Memory management rules:
// - Opaque `Paginator` pointer: created by `pagina_new`, freed by `pagina_free`.
// - Returned strings: caller must free with `pagina_free_str`.
// - Returned string arrays: caller must free with `pagina_free_str_array`.
// - All input strings are UTF-8 encoded, null-terminated C strings.

use std::ffi::{CStr, CString, c_char, c_int};
use std::ptr;

use pagina_core::enums::{NumberingKind, PaginationMode};
use pagina_engine::{Paginator, PaginatorOptions};

// ── Paginator lifecycle ─────────────────────────────────────────

/// Build a paginator from a pagination specification.
///
/// A non-zero `lenient` accepts orphan increment marks and counters in no
/// particular order.
///
/// Returns an opaque pointer on success, NULL on failure. On failure, if
/// `error_out` is non-NULL, it receives a heap-allocated error string that
/// the caller must free with `pagina_free_str`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn pagina_new(
    spec: *const c_char,
    lenient: c_int,
    error_out: *mut *mut c_char,
) -> *mut Paginator {
    let Some(spec) = cstr_to_str(spec) else {
        set_error(error_out, "spec is null or not UTF-8");
        return ptr::null_mut();
    };

    let options = if lenient != 0 {
        PaginatorOptions::lenient()
    } else {
        PaginatorOptions::default()
    };

    match Paginator::with_options(spec, &options) {
        Ok(paginator) => Box::into_raw(Box::new(paginator)),
        Err(e) => {
            set_error(error_out, &e.to_string());
            ptr::null_mut()
        }
    }
}

/// Free a paginator created by `pagina_new`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn pagina_free(paginator: *mut Paginator) {
    if !paginator.is_null() {
        drop(unsafe { Box::from_raw(paginator) });
    }
}

// ── Label generation ────────────────────────────────────────────

/// The next page label.
///
/// Returns a heap-allocated C string. Caller must free with `pagina_free_str`.
/// Returns NULL if `paginator` is NULL.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn pagina_next(paginator: *mut Paginator) -> *mut c_char {
    let Some(paginator) = (unsafe { paginator.as_mut() }) else {
        return ptr::null_mut();
    };
    str_to_c(&paginator.next_label())
}

/// The next `count` page labels.
///
/// Returns a NULL-terminated array of C strings. Caller must free with
/// `pagina_free_str_array`. Returns NULL if `paginator` is NULL.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn pagina_take(paginator: *mut Paginator, count: usize) -> *mut *mut c_char {
    let Some(paginator) = (unsafe { paginator.as_mut() }) else {
        return ptr::null_mut();
    };
    labels_to_c_array((0..count).map(|_| paginator.next_label()))
}

/// Whether the counters were declared right to left.
/// Returns 1 for reverse, 0 for forward, -1 on error.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn pagina_is_reverse(paginator: *const Paginator) -> c_int {
    let Some(paginator) = (unsafe { paginator.as_ref() }) else {
        return -1;
    };
    if paginator.is_reverse() { 1 } else { 0 }
}

// ── Encoding ────────────────────────────────────────────────────

/// Encode a numbering choice as a pagination specification.
///
/// `kind` and `mode` take the snake_case names (`"arabic"`, `"free_text"`,
/// `"recto_verso_foliation"`, ...). A non-zero `fictitious` brackets the
/// numbering.
///
/// Returns a heap-allocated C string. Caller must free with `pagina_free_str`.
/// Returns NULL on failure, with the message in `error_out` as for
/// `pagina_new`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn pagina_encode(
    kind: *const c_char,
    mode: *const c_char,
    value: *const c_char,
    fictitious: c_int,
    separator: *const c_char,
    error_out: *mut *mut c_char,
) -> *mut c_char {
    let (Some(kind), Some(mode), Some(value), Some(separator)) = (
        cstr_to_str(kind),
        cstr_to_str(mode),
        cstr_to_str(value),
        cstr_to_str(separator),
    ) else {
        set_error(error_out, "argument is null or not UTF-8");
        return ptr::null_mut();
    };

    let kind: NumberingKind = match kind.parse() {
        Ok(kind) => kind,
        Err(e) => {
            set_error(error_out, &e.to_string());
            return ptr::null_mut();
        }
    };
    let mode: PaginationMode = match mode.parse() {
        Ok(mode) => mode,
        Err(e) => {
            set_error(error_out, &e.to_string());
            return ptr::null_mut();
        }
    };

    match pagina_engine::encode(kind, mode, value, fictitious != 0, separator) {
        Ok(spec) => str_to_c(&spec),
        Err(e) => {
            set_error(error_out, &e.to_string());
            ptr::null_mut()
        }
    }
}

// ── Memory ──────────────────────────────────────────────────────

/// Free a heap-allocated C string returned by pagina functions.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn pagina_free_str(s: *mut c_char) {
    free_c_str(s);
}

/// Free a NULL-terminated array of C strings.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn pagina_free_str_array(arr: *mut *mut c_char) {
    free_null_terminated_array(arr);
}

// ── Internal helpers ────────────────────────────────────────────

/// Borrow a C string argument as UTF-8. NULL and invalid UTF-8 give `None`.
fn cstr_to_str<'a>(s: *const c_char) -> Option<&'a str> {
    if s.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(s) }.to_str().ok()
}

/// Hand a string to the caller. Interior NULs become U+FFFD instead of
/// emptying the whole string.
fn str_to_c(s: &str) -> *mut c_char {
    let owned = if s.contains('\0') {
        CString::new(s.replace('\0', "\u{FFFD}"))
    } else {
        CString::new(s)
    };
    owned.unwrap_or_default().into_raw()
}

fn set_error(out: *mut *mut c_char, msg: &str) {
    if let Some(out) = unsafe { out.as_mut() } {
        *out = str_to_c(msg);
    }
}

fn free_c_str(s: *mut c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s) });
    }
}

/// Leak `labels` as a boxed slice of C strings with a trailing NULL.
fn labels_to_c_array(labels: impl Iterator<Item = String>) -> *mut *mut c_char {
    let slots: Box<[*mut c_char]> = labels
        .map(|label| str_to_c(&label))
        .chain(std::iter::once(ptr::null_mut()))
        .collect();
    Box::into_raw(slots).cast::<*mut c_char>()
}

/// Free an array from `labels_to_c_array`. Its length is recovered from the
/// NULL terminator.
fn free_null_terminated_array(arr: *mut *mut c_char) {
    if arr.is_null() {
        return;
    }
    let mut len = 0;
    while !unsafe { *arr.add(len) }.is_null() {
        len += 1;
    }
    let slots = unsafe { Box::from_raw(ptr::slice_from_raw_parts_mut(arr, len + 1)) };
    for &label in &slots[..len] {
        free_c_str(label);
    }
}
