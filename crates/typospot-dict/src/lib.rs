//! Correction dictionaries and the typospot spellchecking engine.
//!
//! The engine detects known misspellings in lines of text using static
//! correction dictionaries; there is no statistical model, no fuzzy
//! matching and no ranking. Dictionaries are plain UTF-8 text, one
//! record per line in the form `typo->correction` or
//! `typo->alt1, alt2, ..., reason text`, merged into an in-memory table
//! where the last load of a key always wins.
//!
//! # Architecture
//!
//! - [`builtin`] -- static catalog of the bundled correction dictionaries
//! - [`checker`] -- the [`checker::Spellchecker`] engine and line matcher
//! - [`tokenizer`] -- default word tokenizer for callers without their own
//!
//! Record parsing and table merge rules live in a private `dictionary`
//! module; they are exercised through the load methods on
//! [`checker::Spellchecker`].

pub mod builtin;
pub mod checker;
mod dictionary;
pub mod tokenizer;

use std::path::PathBuf;

/// Error type for dictionary loading and engine construction.
#[derive(Debug, thiserror::Error)]
pub enum SpellcheckerError {
    /// A requested built-in dictionary name has no catalog entry.
    #[error("unknown built-in dictionary: {0}")]
    UnknownBuiltinDictionary(String),

    /// The bulk built-in load was invoked on an already sealed engine.
    /// Loading the bundles twice would silently reorder precedence, so
    /// the second call is rejected and the table is left untouched.
    #[error("built-in dictionaries were already loaded")]
    BuiltinDictionariesAlreadyLoaded,

    /// A dictionary line is missing the `->` separator. The table may
    /// have consumed part of the source already; callers should discard
    /// the engine or reload from scratch.
    #[error("malformed entry in {source_name}: missing \"->\" in line {line:?}")]
    MalformedEntry {
        /// Identity of the dictionary source (file path or label).
        source_name: String,
        /// The offending line, verbatim.
        line: String,
    },

    /// A dictionary source could not be read.
    #[error("failed to read dictionary {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
