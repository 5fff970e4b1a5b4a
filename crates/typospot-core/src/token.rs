// Token capability consumed by the line matcher.
//
// The matcher never tokenizes text itself. Callers supply a tokenizer as
// a plain callable from a line to an iterator of tokens, and anything
// exposing the matched substring plus its start offset qualifies as a
// token. This keeps the matcher agnostic to tokenization rules (simple
// word splitting, language-aware scanners, regex matches wrapped in a
// newtype, and so on).

/// A token produced by a line tokenizer.
///
/// Implementations expose the exact matched substring and its zero-based
/// byte offset within the scanned line. The offset must index into the
/// same line string that was handed to the tokenizer; the matcher uses it
/// to inspect the character immediately preceding the token.
pub trait Token {
    /// The exact matched substring, original casing preserved.
    fn text(&self) -> &str;

    /// Zero-based byte offset of the first character within the line.
    fn start(&self) -> usize;
}

impl<T: Token + ?Sized> Token for &T {
    fn text(&self) -> &str {
        (**self).text()
    }

    fn start(&self) -> usize {
        (**self).start()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Plain {
        text: &'static str,
        start: usize,
    }

    impl Token for Plain {
        fn text(&self) -> &str {
            self.text
        }

        fn start(&self) -> usize {
            self.start
        }
    }

    #[test]
    fn token_exposes_text_and_offset() {
        let tok = Plain {
            text: "touple",
            start: 2,
        };
        assert_eq!(tok.text(), "touple");
        assert_eq!(tok.start(), 2);
    }

    #[test]
    fn token_impl_for_references() {
        let tok = Plain {
            text: "tpyo",
            start: 9,
        };
        let by_ref: &Plain = &tok;
        assert_eq!(by_ref.text(), "tpyo");
        assert_eq!(by_ref.start(), 9);
    }
}
