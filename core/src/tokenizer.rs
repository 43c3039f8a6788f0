use lazy_static::lazy_static;
use regex::{Matches, Regex};
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    // A letter followed by letters or combining marks is a token; everything else separates.
    static ref LETTERS: Regex = Regex::new(r"\p{L}[\p{L}\p{M}]*").expect("valid regex");
}

// Uppercasing can decompose a letter (e.g. U+01F0 -> "J" + combining caron), so
// compose again afterwards.
fn normalize(text: &str) -> String {
    text.nfkc().collect::<String>().to_uppercase().nfkc().collect()
}

/// Normalize a single word the way document text is normalized: trimmed, NFKC, uppercase.
pub fn normalize_term(word: &str) -> String {
    normalize(word.trim())
}

/// Tokenize text into uppercase alphabetic terms.
///
/// The returned [`Tokens`] owns the normalized text and can be iterated any
/// number of times; tokens are produced lazily on each pass.
pub fn tokenize(text: &str) -> Tokens {
    Tokens { normalized: normalize(text) }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokens {
    normalized: String,
}

impl Tokens {
    pub fn iter(&self) -> TokenIter<'_> {
        TokenIter { inner: LETTERS.find_iter(&self.normalized) }
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

impl<'a> IntoIterator for &'a Tokens {
    type Item = &'a str;
    type IntoIter = TokenIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct TokenIter<'a> {
    inner: Matches<'static, 'a>,
}

impl<'a> Iterator for TokenIter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        self.inner.next().map(|m| m.as_str())
    }
}
