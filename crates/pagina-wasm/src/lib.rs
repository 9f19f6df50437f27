// WASM bindings for pagination sequences.
//
// Provides a `WasmPaginator` class exported via wasm-bindgen that wraps
// the `Paginator` from pagina-engine. Fragment descriptions and options
// cross the boundary as plain JavaScript objects through
// serde-wasm-bindgen.
//
// Usage from JavaScript:
//
//   const p = new WasmPaginator("1`v ; `2°r");
//   p.next();                 // => "1v ; 2r"
//   p.take(2);                // => ["2v ; 3r", "3v ; 4r"]
//   p.isReverse();            // => false
//   p.fragments();            // => [{ kind: "decimal", value: 2, ... }, ...]
//   WasmPaginator.encode("roman", "pages", "4", false, " ");  // => "IV"

use serde::Serialize;
use wasm_bindgen::prelude::*;

use pagina_core::enums::{NumberingKind, PaginationMode};
use pagina_engine::{Fragment, PaginationError, Paginator, PaginatorOptions};

// ============================================================================
// DTO types for JS interop
// ============================================================================

/// Serializable description of one fragment.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsFragment {
    kind: &'static str,
    text: Option<String>,
    value: Option<i64>,
    uppercase: Option<bool>,
    restriction: Option<&'static str>,
    increment: Option<String>,
}

impl From<&Fragment> for JsFragment {
    fn from(fragment: &Fragment) -> Self {
        let increment = fragment.increment().map(|step| step.to_string());
        match fragment {
            Fragment::FreeText { text, restriction, .. } => JsFragment {
                kind: "text",
                text: Some(text.clone()),
                value: None,
                uppercase: None,
                restriction: Some(restriction_name(*restriction)),
                increment,
            },
            Fragment::DecimalNumeral { initial_value, .. } => JsFragment {
                kind: "decimal",
                text: None,
                value: Some(*initial_value),
                uppercase: None,
                restriction: None,
                increment,
            },
            Fragment::RomanNumeral { initial_value, uppercase, .. } => JsFragment {
                kind: "roman",
                text: None,
                value: Some(*initial_value),
                uppercase: Some(*uppercase),
                restriction: None,
                increment,
            },
        }
    }
}

// ============================================================================
// Conversion helpers
// ============================================================================

fn restriction_name(restriction: pagina_core::enums::PageRestriction) -> &'static str {
    use pagina_core::enums::PageRestriction;
    match restriction {
        PageRestriction::None => "none",
        PageRestriction::RectoOnly => "rectoOnly",
        PageRestriction::VersoOnly => "versoOnly",
    }
}

fn pagination_error_to_js(e: PaginationError) -> JsError {
    JsError::new(&e.to_string())
}

/// Read options from a JS object; `undefined` and `null` give the defaults.
fn options_from_js(options: JsValue) -> Result<PaginatorOptions, JsError> {
    if options.is_undefined() || options.is_null() {
        return Ok(PaginatorOptions::default());
    }
    serde_wasm_bindgen::from_value(options).map_err(|e| JsError::new(&e.to_string()))
}

// ============================================================================
// WasmPaginator
// ============================================================================

/// Page label generator for WebAssembly.
#[wasm_bindgen]
pub struct WasmPaginator {
    paginator: Paginator,
}

#[wasm_bindgen]
impl WasmPaginator {
    /// Build a paginator from a pagination specification.
    ///
    /// `options` is an optional object `{ increments: { "²": "2", ... },
    /// lenient: false }`; missing fields keep their defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(spec: &str, options: JsValue) -> Result<WasmPaginator, JsError> {
        let options = options_from_js(options)?;
        let paginator = Paginator::with_options(spec, &options).map_err(pagination_error_to_js)?;
        Ok(WasmPaginator { paginator })
    }

    /// The next page label. The sequence never ends.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> String {
        self.paginator.next_label()
    }

    /// The next `count` page labels as a JavaScript array of strings.
    pub fn take(&mut self, count: usize) -> js_sys::Array {
        let labels = js_sys::Array::new();
        for _ in 0..count {
            labels.push(&JsValue::from_str(&self.paginator.next_label()));
        }
        labels
    }

    /// Whether the counters were declared right to left.
    #[wasm_bindgen(js_name = "isReverse")]
    pub fn is_reverse(&self) -> bool {
        self.paginator.is_reverse()
    }

    /// The current counter value in its text form, e.g. `"3½"`.
    #[wasm_bindgen(js_name = "currentValue")]
    pub fn current_value(&self) -> String {
        self.paginator.current_value().to_string()
    }

    /// The parsed fragments as an array of objects with fields `kind`
    /// ("text", "decimal", "roman"), `text`, `value`, `uppercase`,
    /// `restriction` and `increment`.
    pub fn fragments(&self) -> Result<JsValue, JsError> {
        let fragments: Vec<JsFragment> = self.paginator.fragments().iter().map(JsFragment::from).collect();
        serde_wasm_bindgen::to_value(&fragments).map_err(|e| JsError::new(&e.to_string()))
    }

    /// Encode a numbering choice as a pagination specification.
    ///
    /// `kind` and `mode` take the snake_case names, e.g. `"free_text"` and
    /// `"recto_verso_foliation"`.
    pub fn encode(
        kind: &str,
        mode: &str,
        value: &str,
        fictitious: bool,
        separator: &str,
    ) -> Result<String, JsError> {
        let kind: NumberingKind = kind.parse().map_err(|e| JsError::new(&format!("{e}")))?;
        let mode: PaginationMode = mode.parse().map_err(|e| JsError::new(&format!("{e}")))?;
        pagina_engine::encode(kind, mode, value, fictitious, separator).map_err(pagination_error_to_js)
    }

    /// Human-readable summary of direction and fragments.
    pub fn describe(&self) -> String {
        self.paginator.to_string()
    }

    /// Release resources held by this instance.
    pub fn terminate(self) {}
}
