use std::fmt;

use crate::header::parsing::{by_quality_then_position, from_comma_delimited, rank_by, Params};
use crate::header::{eq_ascii, Header, Negotiate, PreferenceList, Term, DEFAULT_QUALITY};

/// The charset that is acceptable unless listed or covered by `*`.
const ISO_8859_1: &str = "iso-8859-1";

/// `Accept-Charset` header, defined in
/// [RFC2616](https://tools.ietf.org/html/rfc2616#section-14.2)
///
/// The `Accept-Charset` header field can be sent by a user agent to
/// indicate what charsets are acceptable in textual response content.
///
/// ISO-8859-1 gets a quality of 1 unless it is mentioned explicitly or a
/// `*` is present. A request without the header accepts any charset.
///
/// # ABNF
/// ```plain
/// Accept-Charset = 1#( ( charset / "*" ) [ weight ] )
/// ```
///
/// # Example values
/// * `iso-8859-5, unicode-1-1;q=0.8`
///
/// # Examples
/// ```
/// use accept_negotiation::header::{AcceptCharset, Header, Negotiate};
///
/// let charset = AcceptCharset::parse_header("iso-8859-5, unicode-1-1;q=0.8");
/// assert_eq!(charset.preferred(), Some("iso-8859-5"));
/// assert!(charset.accepts("ISO-8859-1"));
/// assert!(!charset.accepts("utf-8"));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AcceptCharset {
    raw: String,
    ranked: PreferenceList,
}

impl AcceptCharset {
    /// Creates an `AcceptCharset` that was never parsed, accepting anything.
    pub fn new() -> AcceptCharset {
        AcceptCharset::default()
    }

    /// The lower-cased charsets, most preferred first.
    pub fn all(&self) -> Vec<&str> {
        self.ranked.keys().collect()
    }

    /// The quality given to a charset, if it is listed.
    pub fn quality(&self, charset: &str) -> Option<f32> {
        self.ranked
            .get(&charset.to_ascii_lowercase())
            .map(|pref| pref.quality)
    }

    /// The ranked charsets.
    pub fn preferences(&self) -> &PreferenceList {
        &self.ranked
    }

    /// Returns true if no charset is listed.
    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }
}

impl Header for AcceptCharset {
    fn header_name() -> &'static str {
        "Accept-Charset"
    }

    fn parse_header(raw: &str) -> AcceptCharset {
        let mut charset = AcceptCharset::new();
        charset.parse(raw);
        charset
    }

    fn raw_value(&self) -> &str {
        &self.raw
    }
}

impl Negotiate for AcceptCharset {
    fn parse(&mut self, raw: &str) {
        trace_span!("parse_accept_charset");
        let mut terms = from_comma_delimited(raw, Params::QualityOnly);
        let implicit = !terms
            .iter()
            .any(|term| term.subject == "*" || eq_ascii(&term.subject, ISO_8859_1));
        if implicit {
            trace!("Accept-Charset: adding implicit {}", ISO_8859_1);
            let position = terms.len();
            terms.push(Term::new(ISO_8859_1, DEFAULT_QUALITY, position));
        }
        self.ranked = rank_by(terms, by_quality_then_position).into_iter().collect();
        self.raw = raw.to_owned();
    }

    fn preferred(&self) -> Option<&str> {
        self.ranked.first().map(|(key, _)| key)
    }

    /// Returns true if the client accepts `charset`.
    ///
    /// A listed charset is accepted when its quality is above zero. An
    /// unlisted one is accepted whenever `*` is listed, whatever the quality
    /// of the `*`.
    fn accepts(&self, charset: &str) -> bool {
        if self.ranked.is_empty() {
            return true;
        }
        match self.ranked.get(&charset.to_ascii_lowercase()) {
            Some(pref) => pref.quality > 0.0,
            None => self.ranked.contains("*"),
        }
    }
}

impl fmt::Display for AcceptCharset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_header(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rfc_example() {
        let charset = AcceptCharset::parse_header("iso-8859-5, unicode-1-1;q=0.8");
        assert_eq!(charset.preferred(), Some("iso-8859-5"));
        assert_eq!(charset.all(), vec!["iso-8859-5", "iso-8859-1", "unicode-1-1"]);
        assert!(charset.accepts("iso-8859-1"));
        assert!(charset.accepts("unicode-1-1"));
        assert!(!charset.accepts("utf-8"));
    }

    #[test]
    fn test_never_parsed_accepts_anything() {
        let charset = AcceptCharset::new();
        assert!(charset.accepts("utf-8"));
        assert!(charset.accepts("anything"));
        assert_eq!(charset.preferred(), None);
    }

    #[test]
    fn test_empty_value_gets_implicit_default() {
        let charset = AcceptCharset::parse_header("");
        assert_eq!(charset.all(), vec!["iso-8859-1"]);
        assert!(charset.accepts("iso-8859-1"));
        assert!(!charset.accepts("utf-8"));
    }

    #[test]
    fn test_explicit_iso_8859_1_not_duplicated() {
        let charset = AcceptCharset::parse_header("utf-8, ISO-8859-1;q=0");
        assert_eq!(charset.all(), vec!["utf-8", "iso-8859-1"]);
        assert!(!charset.accepts("iso-8859-1"));
        assert_eq!(charset.quality("iso-8859-1"), Some(0.0));
    }

    #[test]
    fn test_wildcard_suppresses_implicit_default() {
        let charset = AcceptCharset::parse_header("utf-8, *;q=0.5");
        assert_eq!(charset.all(), vec!["utf-8", "*"]);
        assert!(charset.accepts("iso-8859-1"));
    }

    #[test]
    fn test_wildcard_accepts_regardless_of_quality() {
        let charset = AcceptCharset::parse_header("utf-8, *;q=0");
        assert!(charset.accepts("koi8-r"));
        assert!(charset.accepts("utf-8"));
    }

    #[test]
    fn test_implicit_default_ranks_after_equal_quality() {
        let charset = AcceptCharset::parse_header("utf-8;q=0.9, koi8-r");
        assert_eq!(charset.all(), vec!["koi8-r", "iso-8859-1", "utf-8"]);
    }

    #[test]
    fn test_duplicate_keeps_first_slot_last_value() {
        let charset = AcceptCharset::parse_header("UTF-8, koi8-r;q=0.5, utf-8;q=0");
        assert_eq!(charset.preferred(), Some("utf-8"));
        assert!(!charset.accepts("utf-8"));
        assert_eq!(charset.all(), vec!["utf-8", "iso-8859-1", "koi8-r"]);
        assert_eq!(charset.quality("UTF-8"), Some(0.0));
    }

    #[test]
    fn test_preferred_is_lower_cased() {
        let charset = AcceptCharset::parse_header("UTF-8");
        assert_eq!(charset.preferred(), Some("utf-8"));
        assert_eq!(charset.preferences().get("utf-8").unwrap().value, "UTF-8");
    }

    #[test]
    fn test_idempotent() {
        let mut charset = AcceptCharset::parse_header("utf-8;q=0.7, *;q=0.1");
        let once = charset.clone();
        charset.parse("utf-8;q=0.7, *;q=0.1");
        assert_eq!(charset, once);
    }
}
