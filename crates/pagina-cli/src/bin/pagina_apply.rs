// pagina-apply: Write page labels into a JSON array of pages.
//
// Reads a JSON array of page objects from stdin, sets their "label"
// field and writes the array back to stdout.
//
// Usage:
//   pagina-apply --spec SPEC [--select I,J,...] [--only-selected] [OPTIONS]
//   pagina-apply --continue [OPTIONS]
//
// Options:
//   --spec SPEC            Pagination specification to apply
//   --continue             Continue the numbering after the last labelled page
//   --select I,J,...       Zero-based page indices (default: 0)
//   --only-selected        Label only the selected pages, in selection order
//   -o, --options PATH     Options JSON file
//   --lenient              Accept orphan increment marks and unordered counters
//   --compact              Write the array on a single line
//   -h, --help             Print help

use std::io::{self, Read, Write};

use pagina_cli::JsonPage;
use pagina_engine::{ApplyScope, Paginator, continue_after_last_label};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (options_path, args) = pagina_cli::parse_options_path(&args);

    if pagina_cli::wants_help(&args) {
        println!("pagina-apply: Write page labels into a JSON array of pages.");
        println!();
        println!("Usage: pagina-apply --spec SPEC [--select I,J,...] [--only-selected] [OPTIONS]");
        println!("       pagina-apply --continue [OPTIONS]");
        println!();
        println!("Options:");
        println!("  --spec SPEC            Pagination specification to apply");
        println!("  --continue             Continue the numbering after the last labelled page");
        println!("  --select I,J,...       Zero-based page indices (default: 0)");
        println!("  --only-selected        Label only the selected pages, in selection order");
        println!("  -o, --options PATH     Options JSON file (default: $PAGINA_OPTIONS)");
        println!("  --lenient              Accept orphan increment marks and unordered counters");
        println!("  --compact              Write the array on a single line");
        println!("  -h, --help             Print this help");
        return;
    }

    pagina_cli::init_tracing();

    let mut spec: Option<String> = None;
    let mut continue_numbering = false;
    let mut selection: Vec<usize> = vec![0];
    let mut scope = ApplyScope::FromFirstSelected;
    let mut lenient = false;
    let mut compact = false;
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        match arg.as_str() {
            "--spec" => {
                spec = Some(pagina_cli::flag_value(&args, i));
                skip_next = true;
            }
            "--continue" => continue_numbering = true,
            "--select" => {
                selection = parse_selection(&pagina_cli::flag_value(&args, i))
                    .unwrap_or_else(|e| pagina_cli::fatal(&e));
                skip_next = true;
            }
            "--only-selected" => scope = ApplyScope::SelectedOnly,
            "--lenient" => lenient = true,
            "--compact" => compact = true,
            s => pagina_cli::fatal(&format!("unknown option {s}")),
        }
    }

    if spec.is_some() == continue_numbering {
        pagina_cli::fatal("exactly one of --spec and --continue is required");
    }

    let options = pagina_cli::load_options(options_path.as_deref(), lenient)
        .unwrap_or_else(|e| pagina_cli::fatal(&e));

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .unwrap_or_else(|e| pagina_cli::fatal(&format!("error reading stdin: {e}")));
    let mut pages: Vec<JsonPage> = serde_json::from_str(&input)
        .unwrap_or_else(|e| pagina_cli::fatal(&format!("invalid page array: {e}")));

    let labelled = match spec {
        Some(spec) => Paginator::with_options(&spec, &options)
            .and_then(|mut paginator| paginator.apply_selected(&mut pages, &selection, scope)),
        None => continue_after_last_label(&mut pages, &options),
    }
    .unwrap_or_else(|e| pagina_cli::fatal(&e.to_string()));
    tracing::info!(labelled, pages = pages.len(), "applied labels");

    let json = if compact {
        serde_json::to_string(&pages)
    } else {
        serde_json::to_string_pretty(&pages)
    }
    .unwrap_or_else(|e| pagina_cli::fatal(&e.to_string()));

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let _ = writeln!(out, "{json}");
}

/// Parse a comma-separated list of page indices.
fn parse_selection(list: &str) -> Result<Vec<usize>, String> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse().map_err(|_| format!("invalid page index {s:?}")))
        .collect()
}
