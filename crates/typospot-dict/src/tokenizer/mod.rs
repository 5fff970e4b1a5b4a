// Default word tokenizer.
//
// The engine is agnostic to tokenization and accepts any callable that
// yields tokens; this module provides the scanner used by the bundled
// tools and tests. A word starts at an alphanumeric or underscore
// character and continues over that class. Apostrophes (straight or
// typographic) and hyphens join a word only when the next character is
// again a word character, so contractions and hyphenated compounds stay
// whole while quotes and dashes at word edges are left out.

use typospot_core::token::Token;

/// A word found in a line, borrowing the line's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordToken<'a> {
    /// The word text, original casing preserved.
    pub text: &'a str,

    /// Zero-based byte offset of the word within the line.
    pub start: usize,
}

impl Token for WordToken<'_> {
    fn text(&self) -> &str {
        self.text
    }

    fn start(&self) -> usize {
        self.start
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_word_joiner(c: char) -> bool {
    matches!(c, '\'' | '\u{2019}' | '-')
}

/// Iterator over the words of a line. See [`word_tokens`].
#[derive(Debug, Clone)]
pub struct WordTokens<'a> {
    line: &'a str,
    pos: usize,
}

/// Tokenize a line into words.
///
/// Returns a lazy iterator of [`WordToken`]s with byte offsets into
/// `line`, suitable for passing directly to
/// [`Spellchecker::spellcheck_line`](crate::checker::Spellchecker::spellcheck_line).
pub fn word_tokens(line: &str) -> WordTokens<'_> {
    WordTokens { line, pos: 0 }
}

impl<'a> Iterator for WordTokens<'a> {
    type Item = WordToken<'a>;

    fn next(&mut self) -> Option<WordToken<'a>> {
        let line = self.line;
        let start = line[self.pos..]
            .char_indices()
            .find(|&(_, c)| is_word_char(c))
            .map(|(i, _)| self.pos + i)?;

        let mut end = start;
        let mut chars = line[start..].char_indices().peekable();
        while let Some((i, c)) = chars.next() {
            if is_word_char(c) {
                end = start + i + c.len_utf8();
                continue;
            }
            let joins = is_word_joiner(c)
                && matches!(chars.peek(), Some(&(_, next)) if is_word_char(next));
            if joins {
                end = start + i + c.len_utf8();
                continue;
            }
            break;
        }
        self.pos = end;
        Some(WordToken {
            text: &line[start..end],
            start,
        })
    }
}
