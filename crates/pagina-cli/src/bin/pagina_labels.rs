// pagina-labels: Print the page labels of pagination specifications.
//
// Each specification yields COUNT labels, one per line. With several
// specifications the blocks are separated by an empty line.
//
// Usage:
//   pagina-labels [-o OPTIONS] [OPTIONS] [SPEC...]
//
// Options:
//   -o, --options PATH   Options JSON file (increment table, leniency)
//   -n, --count N        Number of labels per specification (default: 10)
//   --lenient            Accept orphan increment marks and unordered counters
//   --describe           Print the parsed fragments before the labels
//   -h, --help           Print help

use std::io::{self, BufRead, Write};

use pagina_engine::{Paginator, PaginatorOptions};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (options_path, args) = pagina_cli::parse_options_path(&args);

    if pagina_cli::wants_help(&args) {
        println!("pagina-labels: Print the page labels of pagination specifications.");
        println!();
        println!("Usage: pagina-labels [-o OPTIONS] [OPTIONS] [SPEC...]");
        println!();
        println!("If SPEC arguments are given, prints labels for each one.");
        println!("Otherwise reads specifications from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -o, --options PATH   Options JSON file (default: $PAGINA_OPTIONS)");
        println!("  -n, --count N        Number of labels per specification (default: 10)");
        println!("  --lenient            Accept orphan increment marks and unordered counters");
        println!("  --describe           Print the parsed fragments before the labels");
        println!("  -h, --help           Print this help");
        return;
    }

    pagina_cli::init_tracing();

    let mut count: usize = 10;
    let mut lenient = false;
    let mut describe = false;
    let mut specs: Vec<String> = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        match arg.as_str() {
            "-n" | "--count" => {
                count = pagina_cli::flag_value(&args, i)
                    .parse()
                    .unwrap_or_else(|_| pagina_cli::fatal("invalid number for --count"));
                skip_next = true;
            }
            "--lenient" => lenient = true,
            "--describe" => describe = true,
            s if !s.starts_with('-') || s.len() == 1 => specs.push(arg.clone()),
            s => pagina_cli::fatal(&format!("unknown option {s}")),
        }
    }

    let options = pagina_cli::load_options(options_path.as_deref(), lenient)
        .unwrap_or_else(|e| pagina_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut failed = false;

    let source: Box<dyn Iterator<Item = String>> = if specs.is_empty() {
        Box::new(io::stdin().lock().lines().map_while(|line| match line {
            Ok(l) => Some(l),
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                None
            }
        }))
    } else {
        Box::new(specs.into_iter())
    };

    for (n, spec) in source.filter(|s| !s.trim().is_empty()).enumerate() {
        if n > 0 {
            let _ = writeln!(out);
        }
        let spec = spec.trim_end_matches('\r');
        if !print_labels(spec, count, describe, &options, &mut out) {
            failed = true;
        }
    }

    let _ = out.flush();
    if failed {
        std::process::exit(1);
    }
}

/// Print `count` labels of `spec`. Returns false if the specification is
/// rejected.
fn print_labels(
    spec: &str,
    count: usize,
    describe: bool,
    options: &PaginatorOptions,
    out: &mut impl Write,
) -> bool {
    let paginator = match Paginator::with_options(spec, options) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("error: {spec:?}: {e}");
            return false;
        }
    };

    if describe {
        let _ = writeln!(out, "# {paginator}");
    }
    for label in paginator.take(count) {
        let _ = writeln!(out, "{label}");
    }
    true
}
