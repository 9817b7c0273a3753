use std::fmt;

use crate::header::internals::VecMap;
use crate::header::parsing::{by_quality, from_comma_delimited, rank_by, Params};
use crate::header::{Header, Negotiate};

/// The content-codings tracked for every `Accept-Encoding` value.
const KNOWN_CODINGS: [&str; 4] = ["gzip", "compress", "deflate", "identity"];

const IDENTITY: &str = "identity";

/// `Accept-Encoding` header, defined in
/// [RFC2616](https://tools.ietf.org/html/rfc2616#section-14.3)
///
/// The `Accept-Encoding` header field can be used by user agents to
/// indicate what response content-codings are
/// acceptable in the response.  An  `identity` token is used as a synonym
/// for "no encoding" in order to communicate when no encoding is
/// preferred.
///
/// `x-gzip` and `x-compress` are read as `gzip` and `compress`. A coding
/// that is neither listed nor covered by `*` gets a quality of 0, except
/// `identity`, which stays acceptable with a quality of 1. A missing or
/// empty value means `identity`.
///
/// # ABNF
/// ```plain
/// Accept-Encoding  = #( codings [ weight ] )
/// codings          = content-coding / "identity" / "*"
/// ```
///
/// # Example values
/// * `compress, gzip`
/// * ``
/// * `*`
/// * `compress;q=0.5, gzip;q=1`
/// * `gzip;q=1.0, identity; q=0.5, *;q=0`
///
/// # Examples
/// ```
/// use accept_negotiation::header::{AcceptEncoding, Header, Negotiate};
///
/// let encoding = AcceptEncoding::parse_header("compress;q=0.5, x-gzip");
/// assert_eq!(encoding.preferred(), Some("gzip"));
/// assert_eq!(encoding.all(), vec![
///     ("gzip", 1.0),
///     ("identity", 1.0),
///     ("compress", 0.5),
///     ("deflate", 0.0),
/// ]);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AcceptEncoding {
    raw: String,
    codings: VecMap<String, f32>,
}

impl AcceptEncoding {
    /// Creates an `AcceptEncoding` that was never parsed.
    ///
    /// It prefers `identity` and treats every coding like `identity`.
    pub fn new() -> AcceptEncoding {
        AcceptEncoding::default()
    }

    /// The codings with their resolved qualities, most preferred first.
    ///
    /// Codings of equal quality keep the order `gzip`, `compress`,
    /// `deflate`, `identity`, followed by other codings as first listed.
    pub fn all(&self) -> Vec<(&str, f32)> {
        self.codings
            .iter()
            .map(|&(ref coding, quality)| (coding.as_str(), quality))
            .collect()
    }

    /// The resolved quality of a coding, if it was tracked.
    pub fn quality(&self, coding: &str) -> Option<f32> {
        self.codings.get(unalias(&coding.to_ascii_lowercase())).copied()
    }

    /// Returns true if nothing was parsed.
    pub fn is_empty(&self) -> bool {
        self.codings.is_empty()
    }

    fn identity_quality(&self) -> f32 {
        self.codings.get(IDENTITY).copied().unwrap_or(1.0)
    }
}

impl Header for AcceptEncoding {
    fn header_name() -> &'static str {
        "Accept-Encoding"
    }

    fn parse_header(raw: &str) -> AcceptEncoding {
        let mut encoding = AcceptEncoding::new();
        encoding.parse(raw);
        encoding
    }

    fn raw_value(&self) -> &str {
        &self.raw
    }
}

impl Negotiate for AcceptEncoding {
    fn parse(&mut self, raw: &str) {
        trace_span!("parse_accept_encoding");
        let value = if raw.trim().is_empty() { IDENTITY } else { raw };

        // `None` until a term sets the coding, explicitly or through `*`
        let mut codings: VecMap<String, Option<f32>> = VecMap::with_capacity(KNOWN_CODINGS.len());
        for &coding in KNOWN_CODINGS.iter() {
            codings.insert(coding.to_owned(), None);
        }

        for term in from_comma_delimited(value, Params::QualityOnly) {
            let coding = term.subject.to_ascii_lowercase();
            if coding == "*" {
                for entry in codings.iter_mut() {
                    if entry.1.is_none() {
                        entry.1 = Some(term.quality);
                    }
                }
            } else {
                codings.insert(unalias(&coding).to_owned(), Some(term.quality));
            }
        }

        let resolved: Vec<(String, f32)> = codings
            .into_iter()
            .map(|(coding, quality)| {
                let quality = quality.unwrap_or(if coding == IDENTITY { 1.0 } else { 0.0 });
                (coding, quality)
            })
            .collect();

        self.codings = VecMap::new();
        for (coding, quality) in rank_by(resolved, |a, b| by_quality(a.1, b.1)) {
            self.codings.insert(coding, quality);
        }
        trace!("Accept-Encoding: {:?}", self.codings);
        self.raw = raw.to_owned();
    }

    fn preferred(&self) -> Option<&str> {
        match self.codings.first() {
            None => Some(IDENTITY),
            Some(&(ref coding, quality)) if quality > 0.0 => Some(coding.as_str()),
            Some(_) => None,
        }
    }

    /// Returns true if the client accepts `coding`.
    ///
    /// A coding that was never tracked is as acceptable as `identity`.
    fn accepts(&self, coding: &str) -> bool {
        let coding = coding.to_ascii_lowercase();
        match self.codings.get(unalias(&coding)) {
            Some(&quality) => quality > 0.0,
            None => self.identity_quality() > 0.0,
        }
    }
}

impl fmt::Display for AcceptEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_header(f)
    }
}

fn unalias(coding: &str) -> &str {
    match coding {
        "x-gzip" => "gzip",
        "x-compress" => "compress",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_prefers_identity() {
        let encoding = AcceptEncoding::parse_header("");
        assert_eq!(encoding.preferred(), Some("identity"));
        assert!(encoding.accepts("identity"));
        assert!(!encoding.accepts("gzip"));
        assert_eq!(encoding.raw_value(), "");
    }

    #[test]
    fn test_never_parsed() {
        let encoding = AcceptEncoding::new();
        assert!(encoding.is_empty());
        assert_eq!(encoding.preferred(), Some("identity"));
        assert!(encoding.accepts("gzip"));
    }

    #[test]
    fn test_rfc_example() {
        let encoding = AcceptEncoding::parse_header("gzip;q=1.0, identity; q=0.5, *;q=0");
        assert_eq!(encoding.preferred(), Some("gzip"));
        assert!(encoding.accepts("gzip"));
        assert!(encoding.accepts("identity"));
        assert!(!encoding.accepts("compress"));
        assert!(!encoding.accepts("deflate"));
        assert_eq!(
            encoding.all(),
            vec![("gzip", 1.0), ("identity", 0.5), ("compress", 0.0), ("deflate", 0.0)]
        );
    }

    #[test]
    fn test_wildcard_does_not_override_earlier_mention() {
        let encoding = AcceptEncoding::parse_header("deflate;q=0.2, *;q=0.7");
        assert_eq!(encoding.quality("deflate"), Some(0.2));
        assert_eq!(encoding.quality("gzip"), Some(0.7));
        assert_eq!(encoding.quality("identity"), Some(0.7));
    }

    #[test]
    fn test_later_mention_overrides_wildcard() {
        let encoding = AcceptEncoding::parse_header("*;q=0.7, gzip;q=0.1, gzip;q=0.3");
        assert_eq!(encoding.quality("gzip"), Some(0.3));
        assert_eq!(encoding.quality("compress"), Some(0.7));
    }

    #[test]
    fn test_aliases() {
        let encoding = AcceptEncoding::parse_header("x-gzip;q=0.8, X-Compress;q=0.4");
        assert_eq!(encoding.quality("gzip"), Some(0.8));
        assert_eq!(encoding.quality("x-gzip"), Some(0.8));
        assert_eq!(encoding.quality("compress"), Some(0.4));
        assert!(encoding.accepts("x-compress"));
    }

    #[test]
    fn test_identity_refused() {
        let encoding = AcceptEncoding::parse_header("identity;q=0");
        assert_eq!(encoding.preferred(), None);
        assert!(!encoding.accepts("identity"));
        assert!(!encoding.accepts("br"));
    }

    #[test]
    fn test_unseen_coding_follows_identity() {
        let encoding = AcceptEncoding::parse_header("gzip, identity;q=0.5");
        assert!(encoding.accepts("br"));
        assert_eq!(encoding.quality("br"), None);

        let encoding = AcceptEncoding::parse_header("gzip, *;q=0");
        assert!(!encoding.accepts("br"));
    }

    #[test]
    fn test_other_codings_tracked() {
        let encoding = AcceptEncoding::parse_header("br, gzip;q=0.5");
        assert_eq!(encoding.preferred(), Some("identity"));
        assert_eq!(
            encoding.all(),
            vec![
                ("identity", 1.0),
                ("br", 1.0),
                ("gzip", 0.5),
                ("compress", 0.0),
                ("deflate", 0.0),
            ]
        );
    }

    #[test]
    fn test_idempotent() {
        let mut encoding = AcceptEncoding::parse_header("deflate, gzip;q=0.5");
        let once = encoding.clone();
        encoding.parse("deflate, gzip;q=0.5");
        assert_eq!(encoding, once);
        assert_eq!(encoding.to_header_line(), "Accept-Encoding: deflate, gzip;q=0.5");
    }
}
