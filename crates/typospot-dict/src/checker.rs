// Spellchecker: dictionary state and the line matcher.
//
// The engine owns the misspelling table and the load protocol around it.
// Loads happen up front, single threaded; scanning is read only, so one
// populated engine can be shared for lookups as long as no further loads
// run concurrently. There is no internal locking.
//
// Load order is the whole story for conflicting keys: the last loaded
// record for a typo wins. The bulk built-in load may run at most once
// per engine so that manual load order, once chosen, cannot be reshuffled
// by a stray second call.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use hashbrown::HashSet;
use typospot_core::misspelling::{DetectedMisspelling, Misspelling};
use typospot_core::token::Token;

use crate::builtin::{self, BUILTIN_DEFAULT};
use crate::dictionary;
use crate::SpellcheckerError;

/// Letters that name single-character string escapes: bell, backspace,
/// form feed, newline, carriage return, tab, vertical tab.
const ESCAPE_LETTERS: [char; 7] = ['a', 'b', 'f', 'n', 'r', 't', 'v'];

/// The correction-dictionary engine.
///
/// Maintains the table of known typos and their corrections plus the
/// engine-level ignore list, and scans tokenized lines against it. See
/// [`Spellchecker::spellcheck_line`] for the matching rules.
pub struct Spellchecker {
    /// Lowercased typo to its current correction record.
    misspellings: dictionary::MisspellingTable,

    /// Whether the one permitted bulk built-in load has completed.
    builtin_loaded: bool,

    /// Words skipped during scanning by exact, case-sensitive match.
    ignore_words_cased: HashSet<String>,
}

impl Spellchecker {
    /// Create an engine with the default built-in dictionaries loaded.
    ///
    /// The engine is sealed: a further bulk built-in load is rejected.
    pub fn new() -> Result<Self, SpellcheckerError> {
        Self::with_builtin_dictionaries(BUILTIN_DEFAULT)
    }

    /// Create an engine with the given built-in dictionaries loaded.
    ///
    /// The names may be given in any order and may repeat; they are
    /// de-duplicated and loaded in lexicographic order so that two
    /// callers requesting the same set always end up with the same
    /// table. A non-empty selection seals the engine. An empty slice
    /// behaves like [`Spellchecker::empty`].
    pub fn with_builtin_dictionaries(names: &[&str]) -> Result<Self, SpellcheckerError> {
        let mut checker = Self::empty();
        if !names.is_empty() {
            checker.load_builtin_dictionaries(names, &HashSet::new())?;
        }
        Ok(checker)
    }

    /// Create an engine with no dictionaries loaded.
    ///
    /// The engine starts unsealed so the caller can interleave custom
    /// dictionary loads with one bulk built-in load in a controlled
    /// order:
    ///
    /// 1. `let mut s = Spellchecker::empty();`
    /// 2. any number of `s.load_dictionary_from_file(...)` calls
    /// 3. optionally one `s.load_builtin_dictionaries(...)` call
    pub fn empty() -> Self {
        Self {
            misspellings: dictionary::MisspellingTable::new(),
            builtin_loaded: false,
            ignore_words_cased: HashSet::new(),
        }
    }

    /// Replace the engine-level ignore list. Entries match token text
    /// exactly, case included, before any dictionary lookup happens.
    pub fn set_ignore_words_cased(&mut self, words: HashSet<String>) {
        self.ignore_words_cased = words;
    }

    /// Look up a lower-cased word in the table.
    pub fn check_lower_cased_word(&self, word: &str) -> Option<&Misspelling> {
        self.misspellings.get(word)
    }

    /// Load built-in dictionaries by name.
    ///
    /// Permitted once per engine; a second call fails with
    /// [`SpellcheckerError::BuiltinDictionariesAlreadyLoaded`] and leaves
    /// the table untouched. Unknown names are rejected before anything
    /// is merged. Names are de-duplicated and processed in lexicographic
    /// order regardless of the order given, so conflicting keys resolve
    /// the same way for every caller.
    ///
    /// Keys in `ignore_words` (lowercased) are skipped on load.
    pub fn load_builtin_dictionaries(
        &mut self,
        names: &[&str],
        ignore_words: &HashSet<String>,
    ) -> Result<(), SpellcheckerError> {
        if self.builtin_loaded {
            return Err(SpellcheckerError::BuiltinDictionariesAlreadyLoaded);
        }
        let mut sorted: Vec<&str> = names.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        let mut resolved = Vec::with_capacity(sorted.len());
        for name in sorted {
            let entry = builtin::find_builtin(name)
                .ok_or_else(|| SpellcheckerError::UnknownBuiltinDictionary(name.to_string()))?;
            resolved.push(entry);
        }
        for entry in resolved {
            dictionary::load_from_reader(
                &mut self.misspellings,
                entry.source().as_bytes(),
                &entry.file_name(),
                ignore_words,
            )?;
        }
        self.builtin_loaded = true;
        Ok(())
    }

    /// Parse a dictionary file and merge it into the table.
    ///
    /// Allowed in both the sealed and unsealed state; custom dictionaries
    /// loaded after the built-ins override them key by key. Keys in
    /// `ignore_words` (lowercased) are skipped.
    pub fn load_dictionary_from_file(
        &mut self,
        path: impl AsRef<Path>,
        ignore_words: &HashSet<String>,
    ) -> Result<(), SpellcheckerError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| SpellcheckerError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let label = path.display().to_string();
        dictionary::load_from_reader(
            &mut self.misspellings,
            BufReader::new(file),
            &label,
            ignore_words,
        )
    }

    /// Merge a dictionary from any buffered reader.
    ///
    /// `source_name` identifies the source in error messages.
    pub fn load_dictionary_from_reader<R: BufRead>(
        &mut self,
        reader: R,
        source_name: &str,
        ignore_words: &HashSet<String>,
    ) -> Result<(), SpellcheckerError> {
        dictionary::load_from_reader(&mut self.misspellings, reader, source_name, ignore_words)
    }

    /// Tokenize a line and scan it for known misspellings.
    ///
    /// The tokenizer is any callable producing tokens over `line`; the
    /// bundled [`crate::tokenizer::word_tokens`] works for plain text.
    /// Issues come back lazily, in token order. Per token:
    ///
    /// 1. Tokens on the engine-level ignore list (exact case) are skipped.
    /// 2. The lowercased token is looked up in the table; unknown words
    ///    and words in `extra_words_to_ignore` (lowercased, per call,
    ///    e.g. from an inline suppression comment) are skipped.
    /// 3. A match directly preceded by a backslash, starting with one of
    ///    the single-letter escape names (`a b f n r t v`) and whose
    ///    remainder after the first letter is not itself a known
    ///    misspelling is treated as a string escape sequence that
    ///    happens to spell a dictionary word, and skipped.
    ///
    /// Scanning never mutates the engine, so repeated calls over the
    /// same line yield the same issues.
    pub fn spellcheck_line<'s, 'l, T, I>(
        &'s self,
        line: &'l str,
        tokenizer: impl FnOnce(&'l str) -> I,
        extra_words_to_ignore: &HashSet<String>,
    ) -> impl Iterator<Item = DetectedMisspelling<'s, T>>
    where
        T: Token,
        I: Iterator<Item = T>,
    {
        let bytes = line.as_bytes();
        tokenizer(line).filter_map(move |token| {
            let text = token.text();
            if self.ignore_words_cased.contains(text) {
                return None;
            }
            let lword = text.to_lowercase();
            let misspelling = self.misspellings.get(&lword)?;
            if extra_words_to_ignore.contains(&lword) {
                return None;
            }
            let start = token.start();
            if start > 0
                && bytes.get(start - 1) == Some(&b'\\')
                && text.starts_with(ESCAPE_LETTERS)
                && !self.misspellings.contains_key(&lword[1..])
            {
                return None;
            }
            let word = text.to_string();
            Some(DetectedMisspelling::new(word, lword, misspelling, token))
        })
    }
}

impl Default for Spellchecker {
    fn default() -> Self {
        Self::empty()
    }
}
