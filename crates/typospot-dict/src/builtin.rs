// Static catalog of the bundled correction dictionaries.
//
// The catalog is a compile-time constant table; resolution is a pure
// lookup and there is no mutable global state. Each entry names one
// bundled dictionary, carries its human-readable description and the
// file suffix used for its distributed form, and embeds the dictionary
// text itself so the engine needs no filesystem access to load it.

/// Natural languages the English dictionaries apply to.
pub const SUPPORTED_LANGUAGES_EN: &[&str] = &["en", "en_AU", "en_CA", "en_GB", "en_US"];

/// Built-in dictionaries loaded when no explicit selection is made.
pub const BUILTIN_DEFAULT: &[&str] = &["clear", "rare"];

/// Catalog entry for one bundled correction dictionary.
#[derive(Debug)]
pub struct BuiltinDictionary {
    /// Unique catalog key.
    pub name: &'static str,

    /// What kind of corrections the dictionary holds.
    pub description: &'static str,

    /// Suffix of the distributed dictionary file; the full file name is
    /// `dictionary{suffix}.txt`.
    pub suffix: &'static str,

    /// Languages the entries apply to, when restricted. Not consulted by
    /// the matching engine; surrounding tooling uses it for validation
    /// and help text.
    pub languages: Option<&'static [&'static str]>,

    /// Embedded dictionary text.
    source: &'static str,
}

impl BuiltinDictionary {
    /// The file name this dictionary is distributed under.
    pub fn file_name(&self) -> String {
        format!("dictionary{}.txt", self.suffix)
    }

    /// The embedded dictionary text.
    pub(crate) fn source(&self) -> &'static str {
        self.source
    }
}

/// The bundled dictionaries, in catalog order.
pub const BUILTIN_DICTIONARIES: &[BuiltinDictionary] = &[
    BuiltinDictionary {
        name: "clear",
        description: "for unambiguous errors",
        suffix: "",
        languages: Some(SUPPORTED_LANGUAGES_EN),
        source: include_str!("../data/dictionary.txt"),
    },
    BuiltinDictionary {
        name: "rare",
        description: "for rare (but valid) words that are likely to be errors",
        suffix: "_rare",
        languages: None,
        source: include_str!("../data/dictionary_rare.txt"),
    },
    BuiltinDictionary {
        name: "informal",
        description: "for making informal words more formal",
        suffix: "_informal",
        languages: Some(SUPPORTED_LANGUAGES_EN),
        source: include_str!("../data/dictionary_informal.txt"),
    },
    BuiltinDictionary {
        name: "usage",
        description: "for replacing phrasing with recommended terms",
        suffix: "_usage",
        languages: None,
        source: include_str!("../data/dictionary_usage.txt"),
    },
    BuiltinDictionary {
        name: "code",
        description: "for words from code and/or mathematics that are likely to be typos in other contexts",
        suffix: "_code",
        languages: None,
        source: include_str!("../data/dictionary_code.txt"),
    },
    BuiltinDictionary {
        name: "names",
        description: "for valid proper names that might be typos",
        suffix: "_names",
        languages: None,
        source: include_str!("../data/dictionary_names.txt"),
    },
    BuiltinDictionary {
        name: "en-GB_to_en-US",
        description: "for corrections from en-GB to en-US",
        suffix: "_en-GB_to_en-US",
        languages: Some(&["en_GB"]),
        source: include_str!("../data/dictionary_en-GB_to_en-US.txt"),
    },
];

/// Look up a catalog entry by name.
pub fn find_builtin(name: &str) -> Option<&'static BuiltinDictionary> {
    BUILTIN_DICTIONARIES.iter().find(|d| d.name == name)
}
