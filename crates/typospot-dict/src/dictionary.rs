// Dictionary record parsing and table merge rules.
//
// A dictionary source is line-oriented UTF-8. Each non-empty line is one
// record: the text before the first "->" is the misspelled key, the text
// after it describes the corrections. Keys and data are lowercased on
// load. Records for a key already in the table overwrite it; this
// last-write-wins rule is the only merge law and holds across sources.

use std::io::BufRead;
use std::path::PathBuf;

use hashbrown::{HashMap, HashSet};
use typospot_core::misspelling::Misspelling;

use crate::SpellcheckerError;

/// The in-memory misspelling table: lowercased typo to current record.
pub(crate) type MisspellingTable = HashMap<String, Misspelling>;

/// Character substitution pairs applied to every record on load. For
/// each pair, a key containing the source character also produces an
/// alternate record with the target character substituted in both key
/// and data, so one source line covers both the straight and the
/// typographic spelling of a contraction.
const ALT_CHARS: &[(char, char)] = &[('\'', '\u{2019}')];

/// Parse and merge a dictionary source into `table`.
///
/// `source_name` identifies the source in errors. Keys listed in
/// `ignore_words` are skipped entirely, including their alternate
/// expansions; an alternate key listed there is likewise not created.
///
/// Fails with [`SpellcheckerError::MalformedEntry`] on a line without
/// "->". The table may already contain earlier records from this source
/// when that happens.
pub(crate) fn load_from_reader<R: BufRead>(
    table: &mut MisspellingTable,
    reader: R,
    source_name: &str,
    ignore_words: &HashSet<String>,
) -> Result<(), SpellcheckerError> {
    for line in reader.lines() {
        let line = line.map_err(|e| SpellcheckerError::Io {
            path: PathBuf::from(source_name),
            source: e,
        })?;
        if line.trim().is_empty() {
            continue;
        }
        let Some((key, data)) = line.split_once("->") else {
            return Err(SpellcheckerError::MalformedEntry {
                source_name: source_name.to_string(),
                line,
            });
        };
        let key = key.to_lowercase();
        let data = data.to_lowercase();
        if ignore_words.contains(&key) {
            continue;
        }
        add_misspelling(table, key.clone(), &data);
        for &(from, to) in ALT_CHARS {
            if !key.contains(from) {
                continue;
            }
            let alt_key = substitute(&key, from, to);
            if ignore_words.contains(&alt_key) {
                continue;
            }
            let alt_data = substitute(&data, from, to);
            add_misspelling(table, alt_key, &alt_data);
        }
    }
    Ok(())
}

/// Parse the data half of a record and store it at `key`.
///
/// Data with no comma is a single confident candidate. Otherwise the
/// text after the last comma is the reason (possibly empty, for lines
/// ending in a bare trailing comma) and the earlier segments are the
/// candidates, none of which may be auto-applied.
fn add_misspelling(table: &mut MisspellingTable, key: String, data: &str) {
    let data = data.trim();
    let misspelling = match data.rsplit_once(',') {
        Some((candidates, reason)) => Misspelling::new(
            candidates.split(',').map(|c| c.trim().to_string()).collect(),
            false,
            reason.trim_start(),
        ),
        None => Misspelling::new(vec![data.to_string()], true, ""),
    };
    table.insert(key, misspelling);
}

/// Replace every occurrence of `from` with `to`.
fn substitute(s: &str, from: char, to: char) -> String {
    s.chars().map(|c| if c == from { to } else { c }).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(source: &str, ignore: &[&str]) -> MisspellingTable {
        let mut table = MisspellingTable::new();
        let ignore: HashSet<String> = ignore.iter().map(|w| w.to_string()).collect();
        load_from_reader(&mut table, source.as_bytes(), "test", &ignore).expect("load");
        table
    }

    // -- Record parsing tests --

    #[test]
    fn single_candidate_is_confident() {
        let table = load("tpyo->typo\n", &[]);
        let m = &table["tpyo"];
        assert_eq!(m.candidates, ["typo"]);
        assert!(m.fix);
        assert_eq!(m.reason, "");
    }

    #[test]
    fn text_after_last_comma_is_the_reason() {
        let table = load("foo->bar, baz, this is why\n", &[]);
        let m = &table["foo"];
        assert_eq!(m.candidates, ["bar", "baz"]);
        assert!(!m.fix);
        assert_eq!(m.reason, "this is why");
    }

    #[test]
    fn trailing_comma_means_empty_reason() {
        let table = load("touple->tuple, couple, topple, toupee,\n", &[]);
        let m = &table["touple"];
        assert_eq!(m.candidates, ["tuple", "couple", "topple", "toupee"]);
        assert!(!m.fix);
        assert_eq!(m.reason, "");
    }

    #[test]
    fn keys_and_data_are_lowercased() {
        let table = load("Teh->The\n", &[]);
        let m = &table["teh"];
        assert_eq!(m.candidates, ["the"]);
    }

    #[test]
    fn candidates_are_whitespace_trimmed() {
        let table = load("ot->to , of ,or , not,\n", &[]);
        let m = &table["ot"];
        assert_eq!(m.candidates, ["to", "of", "or", "not"]);
    }

    #[test]
    fn empty_lines_are_skipped() {
        let table = load("teh->the\n\n   \ntpyo->typo\n", &[]);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn missing_separator_is_malformed() {
        let mut table = MisspellingTable::new();
        let err = load_from_reader(
            &mut table,
            "teh->the\nnot a record\n".as_bytes(),
            "custom.txt",
            &HashSet::new(),
        )
        .expect_err("should fail");
        match err {
            SpellcheckerError::MalformedEntry { source_name, line } => {
                assert_eq!(source_name, "custom.txt");
                assert_eq!(line, "not a record");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn splits_on_first_separator_occurrence() {
        let table = load("ab->cd->ef\n", &[]);
        let m = &table["ab"];
        assert_eq!(m.candidates, ["cd->ef"]);
    }

    // -- Merge tests --

    #[test]
    fn last_write_wins_within_one_source() {
        let table = load("wich->which\nwich->which, wish,\n", &[]);
        let m = &table["wich"];
        assert_eq!(m.candidates, ["which", "wish"]);
        assert!(!m.fix);
    }

    #[test]
    fn last_write_wins_across_sources() {
        let mut table = MisspellingTable::new();
        let none = HashSet::new();
        load_from_reader(&mut table, "teh->the\n".as_bytes(), "a", &none).expect("load a");
        load_from_reader(&mut table, "teh->tea\n".as_bytes(), "b", &none).expect("load b");
        assert_eq!(table["teh"].candidates, ["tea"]);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn ignored_keys_are_skipped() {
        let table = load("teh->the\ntpyo->typo\n", &["teh"]);
        assert!(!table.contains_key("teh"));
        assert!(table.contains_key("tpyo"));
    }

    // -- Alternate expansion tests --

    #[test]
    fn apostrophe_keys_expand_to_typographic_quote() {
        let table = load("don't->do not\n", &[]);
        assert_eq!(table["don't"].candidates, ["do not"]);
        assert_eq!(table["don\u{2019}t"].candidates, ["do not"]);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn expansion_substitutes_in_data_too() {
        let table = load("doens't->doesn't\n", &[]);
        assert_eq!(table["doens\u{2019}t"].candidates, ["doesn\u{2019}t"]);
    }

    #[test]
    fn ignoring_the_key_suppresses_its_alternate() {
        let table = load("don't->do not\n", &["don't"]);
        assert!(table.is_empty());
    }

    #[test]
    fn ignoring_only_the_alternate_keeps_the_base_key() {
        let table = load("don't->do not\n", &["don\u{2019}t"]);
        assert!(table.contains_key("don't"));
        assert!(!table.contains_key("don\u{2019}t"));
    }

    #[test]
    fn keys_without_alt_chars_do_not_expand() {
        let table = load("dont->don't, do not,\n", &[]);
        assert_eq!(table.len(), 1);
    }
}
