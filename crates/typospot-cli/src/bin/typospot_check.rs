// typospot-check: Check single words from stdin against the dictionaries.
//
// Reads words from stdin (one per line) and reports whether each word is
// a known misspelling:
//   C: word    (not a known misspelling)
//   W: word    (known misspelling)
//   S: text    (suggested corrections, after each W line)
//   R: text    (rationale, when the record carries one)
//
// Usage:
//   typospot-check [OPTIONS]
//
// Options:
//   --builtin NAMES       Comma-separated built-in dictionaries to load
//                          (default: clear,rare; use "none" for no built-ins)
//   -D, --dictionary FILE Extra dictionary file, may be repeated
//   -h, --help            Print help

use std::io::{self, BufRead, Write};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if typospot_cli::wants_help(&args) {
        println!("typospot-check: Check words from stdin against the dictionaries.");
        println!();
        println!("Usage: typospot-check [OPTIONS]");
        println!();
        println!("Reads words from stdin (one per line). Prints:");
        println!("  C: word    (not a known misspelling)");
        println!("  W: word    (known misspelling)");
        println!("  S: text    (suggested corrections)");
        println!("  R: text    (rationale, when present)");
        println!();
        println!("Options:");
        println!("  --builtin NAMES       Built-in dictionaries to load (default: clear,rare;");
        println!("                         \"none\" for no built-ins)");
        println!("  -D, --dictionary FILE Extra dictionary file, may be repeated");
        println!("  -h, --help            Print this help");
        return;
    }

    let common = typospot_cli::parse_common_args(&args);
    if let Some(unknown) = common.rest.first() {
        typospot_cli::fatal(&format!("unknown argument: {unknown}"));
    }

    let checker = typospot_cli::build_spellchecker(&common)
        .unwrap_or_else(|e| typospot_cli::fatal(&e.to_string()));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        let word = line.trim();
        if word.is_empty() {
            continue;
        }

        match checker.check_lower_cased_word(&word.to_lowercase()) {
            Some(misspelling) => {
                let _ = writeln!(out, "W: {word}");
                for candidate in &misspelling.candidates {
                    let _ = writeln!(out, "S: {candidate}");
                }
                if !misspelling.reason.is_empty() {
                    let _ = writeln!(out, "R: {}", misspelling.reason);
                }
            }
            None => {
                let _ = writeln!(out, "C: {word}");
            }
        }
    }
}
