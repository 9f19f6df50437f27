// pagina-cli: shared utilities for CLI tools.

use std::path::PathBuf;
use std::process;

use pagina_engine::{PageEntry, PaginatorOptions};
use serde_json::{Map, Value};
use tracing_subscriber::EnvFilter;

/// Environment variable naming an options JSON file.
pub const OPTIONS_ENV: &str = "PAGINA_OPTIONS";

/// Environment variable holding the log filter (`warn` if unset).
pub const LOG_ENV: &str = "PAGINA_LOG";

/// Key of the label in the page objects read by `pagina-apply`.
pub const LABEL_KEY: &str = "label";

/// Install a stderr log subscriber filtered by `PAGINA_LOG`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
}

/// Load paginator options.
///
/// Search order:
/// 1. `options_path` argument (if provided)
/// 2. `PAGINA_OPTIONS` environment variable
/// 3. Built-in defaults
///
/// `lenient` overrides the file's setting when true.
pub fn load_options(options_path: Option<&str>, lenient: bool) -> Result<PaginatorOptions, String> {
    let path = options_path
        .map(PathBuf::from)
        .or_else(|| std::env::var(OPTIONS_ENV).ok().map(PathBuf::from));

    let mut options = match path {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
            serde_json::from_str(&text)
                .map_err(|e| format!("invalid options file {}: {}", path.display(), e))?
        }
        None => PaginatorOptions::default(),
    };
    if lenient {
        options.lenient = true;
    }
    tracing::debug!(lenient = options.lenient, "loaded options");
    Ok(options)
}

/// Parse an `--options=PATH` or `-o PATH` argument from command line args.
///
/// Returns `(options_path, remaining_args)`.
pub fn parse_options_path(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut options_path = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix("--options=") {
            options_path = Some(val.to_string());
        } else if arg == "--options" || arg == "-o" {
            if i + 1 < args.len() {
                options_path = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                fatal(&format!("{arg} requires a value"));
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (options_path, remaining)
}

/// The argument after flag `args[i]`, or exit with an error.
pub fn flag_value(args: &[String], i: usize) -> String {
    match args.get(i + 1) {
        Some(value) => value.clone(),
        None => fatal(&format!("{} requires a value", args[i])),
    }
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

/// A page read from JSON: any object, labelled through its `label` field.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct JsonPage(pub Map<String, Value>);

impl PageEntry for JsonPage {
    fn label(&self) -> Option<&str> {
        self.0.get(LABEL_KEY).and_then(Value::as_str)
    }

    fn set_label(&mut self, label: String) {
        self.0.insert(LABEL_KEY.to_string(), Value::String(label));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn options_path_forms() {
        let (path, rest) = parse_options_path(&args(&["-o", "a.json", "1"]));
        assert_eq!(path.as_deref(), Some("a.json"));
        assert_eq!(rest, ["1"]);

        let (path, rest) = parse_options_path(&args(&["--options=b.json", "-n", "3"]));
        assert_eq!(path.as_deref(), Some("b.json"));
        assert_eq!(rest, ["-n", "3"]);

        let (path, _) = parse_options_path(&args(&["I"]));
        assert_eq!(path, None);
    }

    #[test]
    fn json_page_label_field() {
        let mut page: JsonPage = serde_json::from_str(r#"{"image": "0001.tif"}"#).unwrap();
        assert_eq!(page.label(), None);
        page.set_label("IV".to_string());
        assert_eq!(page.label(), Some("IV"));
        assert_eq!(
            serde_json::to_string(&page).unwrap(),
            r#"{"image":"0001.tif","label":"IV"}"#
        );
    }

    #[test]
    fn non_string_label_counts_as_missing() {
        let page: JsonPage = serde_json::from_str(r#"{"label": null}"#).unwrap();
        assert_eq!(page.label(), None);
    }

    #[test]
    fn options_file_is_read() {
        let path = std::env::temp_dir().join(format!("pagina-options-{}.json", process::id()));
        std::fs::write(&path, r#"{ "increments": { "\u00b2": "5" } }"#).unwrap();
        let options = load_options(path.to_str(), true).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert!(options.lenient);
        assert_eq!(
            options.increments.get('\u{00B2}'),
            Some(pagina_core::HalfInteger::whole(5))
        );
        assert_eq!(options.increments.get('\u{00B3}'), None);
    }

    #[test]
    fn missing_options_file_is_an_error() {
        let err = load_options(Some("/nonexistent/pagina.json"), false).unwrap_err();
        assert!(err.contains("failed to read"));
    }
}
