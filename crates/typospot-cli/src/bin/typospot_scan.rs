// typospot-scan: Scan text from stdin for known misspellings.
//
// Reads lines from stdin and reports one line per detected issue:
//   LINE:COL: WORD ==> CANDIDATE[, CANDIDATE ...]
// with the record's reason appended in parentheses when present.
// Exits with status 1 when at least one issue was found.
//
// Usage:
//   typospot-scan [OPTIONS]
//
// Options:
//   --builtin NAMES       Comma-separated built-in dictionaries to load
//                          (default: clear,rare; use "none" for no built-ins)
//   -D, --dictionary FILE Extra dictionary file, may be repeated;
//                          loaded after the built-ins
//   --ignore WORDS        Comma-separated words to skip while scanning
//   -h, --help            Print help

use std::io::{self, BufRead, Write};
use std::process;

use typospot_core::token::Token;
use typospot_dict::tokenizer::word_tokens;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if typospot_cli::wants_help(&args) {
        println!("typospot-scan: Scan text from stdin for known misspellings.");
        println!();
        println!("Usage: typospot-scan [OPTIONS]");
        println!();
        println!("Reads lines from stdin. Prints one line per issue:");
        println!("  LINE:COL: WORD ==> CANDIDATE[, CANDIDATE ...]  (reason)");
        println!();
        println!("Options:");
        println!("  --builtin NAMES       Built-in dictionaries to load (default: clear,rare;");
        println!("                         \"none\" for no built-ins)");
        println!("  -D, --dictionary FILE Extra dictionary file, may be repeated");
        println!("  --ignore WORDS        Comma-separated words to skip while scanning");
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
    let mut found_any = false;

    for (lineno, line) in stdin.lock().lines().enumerate() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        for issue in checker.spellcheck_line(&line, word_tokens, &common.ignore) {
            found_any = true;
            let col = issue.token.start() + 1;
            let candidates = issue.misspelling.candidates.join(", ");
            if issue.misspelling.reason.is_empty() {
                let _ = writeln!(out, "{}:{col}: {} ==> {candidates}", lineno + 1, issue.word);
            } else {
                let _ = writeln!(
                    out,
                    "{}:{col}: {} ==> {candidates}  ({})",
                    lineno + 1,
                    issue.word,
                    issue.misspelling.reason
                );
            }
        }
    }

    drop(out);
    if found_any {
        process::exit(1);
    }
}
