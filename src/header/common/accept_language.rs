use std::fmt;

use crate::header::internals::VecMap;
use crate::header::parsing::{by_quality_then_position, from_comma_delimited, rank_by, Params};
use crate::header::{Header, Negotiate, PreferenceList, Term};

/// `Accept-Language` header, defined in
/// [RFC2616](https://tools.ietf.org/html/rfc2616#section-14.4)
///
/// The `Accept-Language` header field can be used by user agents to
/// indicate the set of natural languages that are preferred in the
/// response.
///
/// A language range matches a tag when it equals the tag, or when it is a
/// prefix of the tag followed by `-`: `en` matches `en-GB`. A repeated range
/// replaces the earlier one. Without any range, any language will do.
///
/// # ABNF
/// ```plain
/// Accept-Language = 1#( language-range [ weight ] )
/// language-range  = <language-range, see [RFC4647], Section 2.1>
/// ```
///
/// # Example values
/// * `da, en-gb;q=0.8, en;q=0.7`
/// * `en-us;q=1.0, en;q=0.5, fr`
///
/// # Examples
/// ```
/// use accept_negotiation::header::{AcceptLanguage, Header, Negotiate};
///
/// let lang = AcceptLanguage::parse_header("da, en-gb;q=0.8, en;q=0.7");
/// assert_eq!(lang.preferred(), Some("da"));
/// assert!(lang.accepts("en-US"));
/// assert!(!lang.accepts("fr"));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AcceptLanguage {
    raw: String,
    ranked: PreferenceList,
}

impl AcceptLanguage {
    /// Creates an `AcceptLanguage` that was never parsed.
    pub fn new() -> AcceptLanguage {
        AcceptLanguage::default()
    }

    /// The language ranges as written, most preferred first.
    pub fn all(&self) -> Vec<&str> {
        self.ranked.values().collect()
    }

    /// The quality given to a language range, if it is listed.
    pub fn quality(&self, range: &str) -> Option<f32> {
        self.ranked
            .get(&range.to_ascii_lowercase())
            .map(|pref| pref.quality)
    }

    /// The ranked language ranges.
    pub fn preferences(&self) -> &PreferenceList {
        &self.ranked
    }

    /// Returns true if no language range is listed.
    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }
}

impl Header for AcceptLanguage {
    fn header_name() -> &'static str {
        "Accept-Language"
    }

    fn parse_header(raw: &str) -> AcceptLanguage {
        let mut lang = AcceptLanguage::new();
        lang.parse(raw);
        lang
    }

    fn raw_value(&self) -> &str {
        &self.raw
    }
}

impl Negotiate for AcceptLanguage {
    fn parse(&mut self, raw: &str) {
        trace_span!("parse_accept_language");
        let mut latest: VecMap<String, Term> = VecMap::new();
        for term in from_comma_delimited(raw, Params::QualityOnly) {
            latest.insert(term.subject.to_ascii_lowercase(), term);
        }
        let terms: Vec<Term> = latest.into_iter().map(|(_, term)| term).collect();
        self.ranked = rank_by(terms, by_quality_then_position).into_iter().collect();
        trace!("Accept-Language: {} ranges", self.ranked.len());
        self.raw = raw.to_owned();
    }

    /// The most preferred language range with a quality above zero.
    ///
    /// Without any range this is `*`.
    fn preferred(&self) -> Option<&str> {
        if self.ranked.is_empty() {
            return Some("*");
        }
        self.ranked
            .iter()
            .find(|&(_, pref)| pref.quality > 0.0)
            .map(|(_, pref)| pref.value.as_str())
    }

    /// Returns true if the client accepts the language `tag`.
    ///
    /// The longest listed range matching the tag decides; `*` only counts
    /// when no range matches.
    fn accepts(&self, tag: &str) -> bool {
        let tag = tag.to_ascii_lowercase();
        let mut range = tag.as_str();
        loop {
            if let Some(pref) = self.ranked.get(range) {
                return pref.quality > 0.0;
            }
            match range.rfind('-') {
                Some(idx) => range = &range[..idx],
                None => break,
            }
        }
        match self.ranked.get("*") {
            Some(pref) => pref.quality > 0.0,
            None => false,
        }
    }
}

impl fmt::Display for AcceptLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_header(f)
    }
}
