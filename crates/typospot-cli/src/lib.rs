// typospot-cli: shared utilities for the command-line tools.

use std::process;

use hashbrown::HashSet;
use typospot_dict::SpellcheckerError;
use typospot_dict::checker::Spellchecker;

/// Dictionary-related options shared by the scanning tools.
pub struct CommonArgs {
    /// Built-in bundles to load. `None` means the default set; an empty
    /// list means no built-ins at all (`--builtin none`).
    pub builtin: Option<Vec<String>>,

    /// Custom dictionary files, loaded after the built-ins in the order
    /// given.
    pub dictionaries: Vec<String>,

    /// Lowercased words to skip while scanning.
    pub ignore: HashSet<String>,

    /// Arguments that were not consumed.
    pub rest: Vec<String>,
}

/// Parse the dictionary options out of `args`.
///
/// Recognizes `--builtin NAMES` (comma separated, or the word `none`),
/// `-D FILE` / `--dictionary FILE` (repeatable) and `--ignore WORDS`
/// (comma separated). Everything else is returned in `rest`.
pub fn parse_common_args(args: &[String]) -> CommonArgs {
    let mut builtin: Option<Vec<String>> = None;
    let mut dictionaries = Vec::new();
    let mut ignore = HashSet::new();
    let mut rest = Vec::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if let Some(val) = arg.strip_prefix("--builtin=") {
            builtin = Some(split_names(val));
        } else if arg == "--builtin" {
            let val = expect_value(arg, iter.next());
            builtin = Some(split_names(&val));
        } else if let Some(val) = arg.strip_prefix("--dictionary=") {
            dictionaries.push(val.to_string());
        } else if arg == "--dictionary" || arg == "-D" {
            dictionaries.push(expect_value(arg, iter.next()));
        } else if let Some(val) = arg.strip_prefix("--ignore=") {
            ignore.extend(split_words(val));
        } else if arg == "--ignore" {
            let val = expect_value(arg, iter.next());
            ignore.extend(split_words(&val));
        } else {
            rest.push(arg.clone());
        }
    }

    CommonArgs {
        builtin,
        dictionaries,
        ignore,
        rest,
    }
}

/// Build a spellchecker from parsed options.
pub fn build_spellchecker(common: &CommonArgs) -> Result<Spellchecker, SpellcheckerError> {
    let mut checker = match &common.builtin {
        None => Spellchecker::new()?,
        Some(names) => {
            let refs: Vec<&str> = names.iter().map(String::as_str).collect();
            Spellchecker::with_builtin_dictionaries(&refs)?
        }
    };
    let no_ignore = HashSet::new();
    for path in &common.dictionaries {
        checker.load_dictionary_from_file(path, &no_ignore)?;
    }
    Ok(checker)
}

/// Split a comma-separated bundle list; `none` selects no bundles.
fn split_names(val: &str) -> Vec<String> {
    if val == "none" {
        return Vec::new();
    }
    val.split(',')
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split a comma-separated word list, lowercased.
fn split_words(val: &str) -> Vec<String> {
    val.split(',')
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect()
}

fn expect_value(flag: &str, value: Option<&String>) -> String {
    match value {
        Some(v) => v.clone(),
        None => {
            eprintln!("error: {flag} requires a value");
            process::exit(1);
        }
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

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CommonArgs {
        let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
        parse_common_args(&args)
    }

    #[test]
    fn no_args_means_default_builtins() {
        let common = parse(&[]);
        assert!(common.builtin.is_none());
        assert!(common.dictionaries.is_empty());
        assert!(common.rest.is_empty());
    }

    #[test]
    fn builtin_list_is_comma_split() {
        let common = parse(&["--builtin", "clear,informal"]);
        let names = common.builtin.expect("builtin selection");
        assert_eq!(names, ["clear", "informal"]);
    }

    #[test]
    fn builtin_none_selects_no_bundles() {
        let common = parse(&["--builtin=none"]);
        assert_eq!(common.builtin.as_deref(), Some(&[][..]));
    }

    #[test]
    fn dictionaries_repeat_and_keep_order() {
        let common = parse(&["-D", "a.txt", "--dictionary=b.txt", "-D", "c.txt"]);
        assert_eq!(common.dictionaries, ["a.txt", "b.txt", "c.txt"]);
    }

    #[test]
    fn ignore_words_are_lowercased() {
        let common = parse(&["--ignore", "Teh,tpyo"]);
        assert!(common.ignore.contains("teh"));
        assert!(common.ignore.contains("tpyo"));
    }

    #[test]
    fn unknown_args_pass_through() {
        let common = parse(&["--builtin", "clear", "--verbose"]);
        assert_eq!(common.rest, ["--verbose"]);
    }
}
