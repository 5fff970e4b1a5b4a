// typospot-dictionaries: List the built-in correction dictionaries.
//
// Prints one line per catalog entry: name, distributed file name,
// description and language restriction (if any).
//
// Usage:
//   typospot-dictionaries [-h]

use typospot_dict::builtin::{BUILTIN_DEFAULT, BUILTIN_DICTIONARIES};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if typospot_cli::wants_help(&args) {
        println!("typospot-dictionaries: List the built-in correction dictionaries.");
        println!();
        println!("Usage: typospot-dictionaries");
        return;
    }

    for entry in BUILTIN_DICTIONARIES {
        let default_marker = if BUILTIN_DEFAULT.contains(&entry.name) {
            "*"
        } else {
            " "
        };
        let languages = match entry.languages {
            Some(langs) => langs.join(", "),
            None => "any".to_string(),
        };
        println!(
            "{default_marker} {:16} {:36} {}  [{}]",
            entry.name,
            entry.file_name(),
            entry.description,
            languages
        );
    }
    println!();
    println!("* loaded by default");
}
