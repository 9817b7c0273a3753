//! Typed request headers used for content negotiation.
//!
//! To read any header, a type must implement the `Header` trait from this
//! module. The weighted-preference headers, `Accept`, `AcceptCharset`,
//! `AcceptEncoding` and `AcceptLanguage`, additionally implement `Negotiate`,
//! which answers which subject the client prefers and whether a candidate
//! is acceptable. Simple headers such as `Host`, `Referer` and `UserAgent`
//! only store their raw value.
//!
//! # Why Typed?
//!
//! Each header family has its own defaulting and ranking rules. Keeping them
//! behind a type per header means a `Accept-Charset` value is never ranked
//! with the `Accept-Language` rules by mistake.
//!
//! ```
//! use accept_negotiation::header::{AcceptEncoding, Header, Negotiate};
//!
//! let mut encoding = AcceptEncoding::new();
//! encoding.parse("gzip;q=1.0, identity; q=0.5, *;q=0");
//!
//! assert_eq!(encoding.preferred(), Some("gzip"));
//! assert!(!encoding.accepts("compress"));
//! assert_eq!(encoding.to_header_line(), "Accept-Encoding: gzip;q=1.0, identity; q=0.5, *;q=0");
//! ```
use std::fmt;

pub use self::common::*;
pub use self::shared::*;

mod common;
mod internals;
pub mod parsing;
mod shared;

/// A trait for any object that will represent a header field and value.
///
/// Parsing never fails: every header family degrades malformed input to a
/// documented default instead.
pub trait Header: Clone + fmt::Debug + Send + Sync {
    /// Returns the name of the header field this belongs to.
    fn header_name() -> &'static str;

    /// Parse a header from its raw value, the text after the colon.
    fn parse_header(raw: &str) -> Self;

    /// The original, unparsed header value.
    fn raw_value(&self) -> &str;

    /// Format the header value to be output on the wire.
    ///
    /// This method is not allowed to introduce an Err not produced
    /// by the passed-in Formatter.
    fn fmt_header(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw_value())
    }

    /// Formats the whole field line, `"<name>: <value>"`.
    fn to_header_line(&self) -> String {
        HeaderLine(self).to_string()
    }
}

/// A header carrying weighted client preferences.
pub trait Negotiate: Header {
    /// Replaces all state with the result of parsing `raw`.
    fn parse(&mut self, raw: &str);

    /// The most preferred subject, or `None` if nothing is acceptable.
    fn preferred(&self) -> Option<&str>;

    /// Returns true if the client accepts `candidate`.
    fn accepts(&self, candidate: &str) -> bool;
}

/// A wrapper to format a header as a full field line.
///
/// ```
/// use accept_negotiation::header::{Header, HeaderLine, UserAgent};
///
/// let ua = UserAgent::parse_header("curl/7.64.1");
/// assert_eq!(HeaderLine(&ua).to_string(), "User-Agent: curl/7.64.1");
/// ```
#[derive(Debug)]
pub struct HeaderLine<'a, H: Header>(pub &'a H);

impl<'a, H: Header> fmt::Display for HeaderLine<'a, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", H::header_name())?;
        self.0.fmt_header(f)
    }
}

/// A wrapper to format only a header's value.
#[derive(Debug)]
pub struct HeaderFormatter<'a, H: Header>(pub &'a H);

impl<'a, H: Header> fmt::Display for HeaderFormatter<'a, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt_header(f)
    }
}

#[inline]
pub(crate) fn eq_ascii(left: &str, right: &str) -> bool {
    left.eq_ignore_ascii_case(right)
}
