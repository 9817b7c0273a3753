use std::cmp::Ordering;
use std::fmt;

use crate::header::parsing::{by_quality, from_comma_delimited, rank_by, Params};
use crate::header::{eq_ascii, Header, Negotiate, PreferenceList, Term};

/// `Accept` header, defined in
/// [RFC2616](https://tools.ietf.org/html/rfc2616#section-14.1)
///
/// The `Accept` header field can be used by user agents to specify
/// response media types that are acceptable.  Accept header fields can
/// be used to indicate that the request is specifically limited to a
/// small set of desired types, as in the case of a request for an
/// in-line image
///
/// # ABNF
/// ```plain
/// Accept = #( media-range [ accept-params ] )
///
/// media-range    = ( "*/*"
///                  / ( type "/" "*" )
///                  / ( type "/" subtype )
///                  ) *( OWS ";" OWS parameter )
/// accept-params  = weight *( accept-ext )
/// accept-ext = OWS ";" OWS token [ "=" ( token / quoted-string ) ]
/// ```
///
/// # Ranking
///
/// Media ranges are ordered by quality. Among equal qualities, ranges of the
/// same major type put a concrete subtype before `*`, and a range with more
/// parameters before a less specific one. Anything else keeps the order of
/// the header.
///
/// # Example values
/// * `audio/*; q=0.2, audio/basic`
/// * `text/plain; q=0.5, text/html, text/x-dvi; q=0.8, text/x-c`
///
/// # Examples
/// ```
/// use accept_negotiation::header::{Accept, Header, Negotiate};
///
/// let accept = Accept::parse_header(
///     "text/*;q=0.3, text/html;q=0.7, text/html;level=1, text/html;level=2;q=0.4, */*;q=0.5");
///
/// assert_eq!(accept.preferred(), Some("text/html;level=1"));
/// assert!(accept.accepts("image/png"));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Accept {
    raw: String,
    ranked: PreferenceList,
}

impl Accept {
    /// Creates an `Accept` header that was never parsed.
    ///
    /// It prefers nothing and accepts nothing.
    pub fn new() -> Accept {
        Accept::default()
    }

    /// The media ranges in their display form, most preferred first.
    pub fn all(&self) -> Vec<&str> {
        self.ranked.values().collect()
    }

    /// The ranked media ranges, keyed by their lower-cased form.
    pub fn preferences(&self) -> &PreferenceList {
        &self.ranked
    }

    /// Returns true if no media range is listed.
    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }
}

impl Header for Accept {
    fn header_name() -> &'static str {
        "Accept"
    }

    fn parse_header(raw: &str) -> Accept {
        let mut accept = Accept::new();
        accept.parse(raw);
        accept
    }

    fn raw_value(&self) -> &str {
        &self.raw
    }
}

impl Negotiate for Accept {
    fn parse(&mut self, raw: &str) {
        trace_span!("parse_accept");
        let terms = from_comma_delimited(raw, Params::Extend);
        trace!("Accept: {} media ranges", terms.len());
        self.ranked = rank_by(terms, cmp_media_range).into_iter().collect();
        self.raw = raw.to_owned();
    }

    fn preferred(&self) -> Option<&str> {
        self.ranked.first().map(|(_, pref)| pref.value.as_str())
    }

    /// Returns true if the client accepts the media type `candidate`.
    ///
    /// The most specific listed range decides: the exact type, then
    /// `major/*`, then `*/*`. It accepts when its quality is above zero.
    fn accepts(&self, candidate: &str) -> bool {
        let candidate = candidate.to_ascii_lowercase();
        if let Some(pref) = self.ranked.get(&candidate) {
            return pref.quality > 0.0;
        }

        let mut parts = candidate.splitn(2, '/');
        let major = match (parts.next(), parts.next()) {
            (Some(major), Some(_)) => major,
            // not a `major/minor` pair, so no wildcard can match it
            _ => return false,
        };
        match self
            .ranked
            .get(&format!("{}/*", major))
            .or_else(|| self.ranked.get("*/*"))
        {
            Some(pref) => pref.quality > 0.0,
            None => false,
        }
    }
}

impl fmt::Display for Accept {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_header(f)
    }
}

/// Splits `type/subtype;params` into `type` and `subtype;params`.
fn split_media_range(subject: &str) -> (&str, &str) {
    match subject.find('/') {
        Some(idx) => (&subject[..idx], &subject[idx + 1..]),
        None => (subject, ""),
    }
}

fn base_subtype(subtype: &str) -> &str {
    match subtype.find(';') {
        Some(idx) => &subtype[..idx],
        None => subtype,
    }
}

/// Orders two media ranges, more preferred first.
fn cmp_media_range(a: &Term, b: &Term) -> Ordering {
    let by_q = by_quality(a.quality, b.quality);
    if by_q != Ordering::Equal {
        return by_q;
    }

    let by_position = a.position.cmp(&b.position);
    let (a_major, a_sub) = split_media_range(&a.subject);
    let (b_major, b_sub) = split_media_range(&b.subject);
    if !eq_ascii(a_major, b_major) {
        return by_position;
    }

    let a_base = base_subtype(a_sub);
    let b_base = base_subtype(b_sub);
    match (a_base == "*", b_base == "*") {
        (true, false) => return Ordering::Greater,
        (false, true) => return Ordering::Less,
        _ => (),
    }

    if !eq_ascii(a_base, b_base) {
        return by_position;
    }

    b.extensions
        .len()
        .cmp(&a.extensions.len())
        .then(by_position)
}
