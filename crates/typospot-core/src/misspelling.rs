// Correction record and detected-issue types.

/// The known corrections for one misspelled word.
///
/// A record is immutable once built. The candidate order is the order
/// the source dictionary listed them in; callers that auto-apply a
/// correction use the first candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Misspelling {
    /// Suggested replacements, never empty. A record with no candidates
    /// is malformed input, not a valid state.
    pub candidates: Vec<String>,

    /// True when the source record carried no rationale annotation and
    /// the single candidate is safe to apply automatically.
    pub fix: bool,

    /// Free-text rationale for why the correction needs review. Empty
    /// when `fix` is true. Also empty for multi-candidate records whose
    /// source line ended in a bare trailing comma.
    pub reason: String,
}

impl Misspelling {
    /// Create a new correction record.
    pub fn new(candidates: Vec<String>, fix: bool, reason: impl Into<String>) -> Self {
        Self {
            candidates,
            fix,
            reason: reason.into(),
        }
    }
}

/// One issue found while scanning a line.
///
/// Borrows the matched [`Misspelling`] from the dictionary table and
/// carries the token that produced the match, so callers can recover the
/// position and any tokenizer-specific context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedMisspelling<'d, T> {
    /// The token text exactly as it appeared in the line.
    pub word: String,

    /// Lowercased form of `word`, the dictionary key that matched.
    pub lword: String,

    /// The matched correction record.
    pub misspelling: &'d Misspelling,

    /// The token that produced this match.
    pub token: T,
}

impl<'d, T> DetectedMisspelling<'d, T> {
    /// Create a new detected issue.
    pub fn new(
        word: impl Into<String>,
        lword: impl Into<String>,
        misspelling: &'d Misspelling,
        token: T,
    ) -> Self {
        Self {
            word: word.into(),
            lword: lword.into(),
            misspelling,
            token,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Misspelling tests --

    #[test]
    fn misspelling_new() {
        let m = Misspelling::new(vec!["typo".to_string()], true, "");
        assert_eq!(m.candidates, ["typo"]);
        assert!(m.fix);
        assert!(m.reason.is_empty());
    }

    #[test]
    fn misspelling_with_reason() {
        let m = Misspelling::new(
            vec!["which".to_string(), "wish".to_string()],
            false,
            "ambiguous",
        );
        assert_eq!(m.candidates.len(), 2);
        assert!(!m.fix);
        assert_eq!(m.reason, "ambiguous");
    }

    #[test]
    fn misspelling_clone_eq() {
        let m = Misspelling::new(vec!["the".to_string()], true, "");
        assert_eq!(m, m.clone());
    }

    // -- DetectedMisspelling tests --

    #[test]
    fn detected_misspelling_new() {
        let m = Misspelling::new(vec!["the".to_string()], true, "");
        let issue = DetectedMisspelling::new("Teh", "teh", &m, 4usize);
        assert_eq!(issue.word, "Teh");
        assert_eq!(issue.lword, "teh");
        assert_eq!(issue.misspelling.candidates, ["the"]);
        assert_eq!(issue.token, 4);
    }
}
