//! # Token Normalizer
//!
//! Derives the two canonical forms of a raw address token that the feature
//! extractor works with:
//!
//! - the *clean* form, used for casing and shape checks
//! - the *abbreviation* form, used as the literal value of `word=`,
//!   `prev_word=` and `next_word=` features

/// Tokens that are kept verbatim instead of being stripped to nothing.
pub const STANDALONE_SYMBOLS: &[&str] = &["&", "#", "½"];

/// Word characters are letters, digits and underscore.
#[inline]
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// A token together with its clean and abbreviation forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedToken<'a> {
    clean: &'a str,
    abbrev: String,
}

impl<'a> NormalizedToken<'a> {
    /// Normalize a raw token.
    pub fn new(token: &'a str) -> Self {
        let clean = clean_form(token);
        let abbrev = clean.to_lowercase().replace('.', "");
        Self { clean, abbrev }
    }

    /// The punctuation-stripped, case-preserving form.
    pub fn clean(&self) -> &'a str {
        self.clean
    }

    /// The lowercase, period-free form.
    pub fn abbrev(&self) -> &str {
        &self.abbrev
    }

    /// Consume the token and return its abbreviation form.
    pub fn into_abbrev(self) -> String {
        self.abbrev
    }
}

/// Normalize a raw token into its clean and abbreviation forms.
///
/// # Examples
/// ```
/// use usaddr_core::features::normalize;
///
/// let norm = normalize("(St.),");
/// assert_eq!(norm.clean(), "St.");
/// assert_eq!(norm.abbrev(), "st");
/// ```
pub fn normalize(token: &str) -> NormalizedToken<'_> {
    NormalizedToken::new(token)
}

/// Shorthand for the abbreviation form of a token.
pub fn abbreviate(token: &str) -> String {
    NormalizedToken::new(token).into_abbrev()
}

/// Trim a token to its word-character core plus the run of periods that
/// directly follows that core.
///
/// The trailing period run only affects the clean form: it is removed again
/// when the abbreviation is built, so abbreviations are exactly the
/// lowercased word core with interior periods deleted.
fn clean_form(token: &str) -> &str {
    if STANDALONE_SYMBOLS.contains(&token) {
        return token;
    }

    let front = token.trim_start_matches(|c: char| !is_word_char(c));
    let core = front.trim_end_matches(|c: char| !is_word_char(c));
    if core.is_empty() {
        return core;
    }

    let rest = &front[core.len()..];
    let periods = rest.len() - rest.trim_start_matches('.').len();
    &front[..core.len() + periods]
}
