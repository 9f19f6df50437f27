// pagina-encode: Build a pagination specification from a numbering choice.
//
// Prints the encoded specification, optionally followed by a preview of
// the labels it produces.
//
// Usage:
//   pagina-encode --kind KIND --mode MODE [OPTIONS] VALUE
//
// Options:
//   -k, --kind KIND        arabic, roman, advanced, free_text or uncounted
//   -m, --mode MODE        pages, columns, foliation, recto_verso_foliation,
//                          recto_verso or double_pages
//   --fictitious           Mark the numbering as fictitious (brackets)
//   -s, --separator SEP    Separator between the two labels of an image
//                          (default: " ")
//   -p, --preview N        Also print the first N labels
//   -h, --help             Print help

use std::io::{self, Write};

use pagina_core::enums::{NumberingKind, PaginationMode};
use pagina_engine::{Paginator, encode};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if pagina_cli::wants_help(&args) {
        println!("pagina-encode: Build a pagination specification from a numbering choice.");
        println!();
        println!("Usage: pagina-encode --kind KIND --mode MODE [OPTIONS] VALUE");
        println!();
        println!("Options:");
        println!("  -k, --kind KIND        arabic, roman, advanced, free_text or uncounted");
        println!("  -m, --mode MODE        pages, columns, foliation, recto_verso_foliation,");
        println!("                         recto_verso or double_pages");
        println!("  --fictitious           Mark the numbering as fictitious");
        println!("  -s, --separator SEP    Separator between two labels (default: \" \")");
        println!("  -p, --preview N        Also print the first N labels");
        println!("  -h, --help             Print this help");
        return;
    }

    pagina_cli::init_tracing();

    let mut kind: Option<NumberingKind> = None;
    let mut mode: Option<PaginationMode> = None;
    let mut fictitious = false;
    let mut separator = String::from(" ");
    let mut preview: usize = 0;
    let mut value: Option<String> = None;
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        match arg.as_str() {
            "-k" | "--kind" => {
                let name = pagina_cli::flag_value(&args, i);
                kind = Some(
                    name.parse()
                        .unwrap_or_else(|e| pagina_cli::fatal(&format!("{e}"))),
                );
                skip_next = true;
            }
            "-m" | "--mode" => {
                let name = pagina_cli::flag_value(&args, i);
                mode = Some(
                    name.parse()
                        .unwrap_or_else(|e| pagina_cli::fatal(&format!("{e}"))),
                );
                skip_next = true;
            }
            "--fictitious" => fictitious = true,
            "-s" | "--separator" => {
                separator = pagina_cli::flag_value(&args, i);
                skip_next = true;
            }
            "-p" | "--preview" => {
                preview = pagina_cli::flag_value(&args, i)
                    .parse()
                    .unwrap_or_else(|_| pagina_cli::fatal("invalid number for --preview"));
                skip_next = true;
            }
            s if s.starts_with('-') && value.is_none() && s.len() > 1 && !is_number(s) => {
                pagina_cli::fatal(&format!("unknown option {s}"))
            }
            _ if value.is_none() => value = Some(arg.clone()),
            s => pagina_cli::fatal(&format!("unexpected argument {s}")),
        }
    }

    let kind = kind.unwrap_or_else(|| pagina_cli::fatal("--kind is required"));
    let mode = mode.unwrap_or_else(|| pagina_cli::fatal("--mode is required"));
    let value = value.unwrap_or_default();

    let spec = encode(kind, mode, &value, fictitious, &separator)
        .unwrap_or_else(|e| pagina_cli::fatal(&e.to_string()));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let _ = writeln!(out, "{spec}");

    if preview > 0 {
        let paginator = Paginator::new(&spec).unwrap_or_else(|e| pagina_cli::fatal(&e.to_string()));
        for label in paginator.take(preview) {
            let _ = writeln!(out, "  {label}");
        }
    }
    let _ = out.flush();
}

/// Negative start values are values, not options.
fn is_number(arg: &str) -> bool {
    arg[1..].chars().all(|c| c.is_ascii_digit())
}
