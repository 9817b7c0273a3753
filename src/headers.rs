//! Picking a typed header by field name.
//!
//! The HTTP layer hands over field names and values; `RequestHeader` turns
//! each one into the matching typed header, and `Headers` does the same for
//! a whole `http::HeaderMap`.

use std::fmt;

use http::header::{HeaderMap, HeaderName, HeaderValue};

use crate::header::{
    eq_ascii, Accept, AcceptCharset, AcceptEncoding, AcceptLanguage, Header, HeaderLine, Host,
    Negotiate, Referer, UserAgent,
};

/// A parsed request header, selected by its field name.
///
/// ```
/// use accept_negotiation::RequestHeader;
///
/// let header = RequestHeader::parse("accept-encoding", "gzip, *;q=0");
/// assert_eq!(header.header_name(), "Accept-Encoding");
/// assert_eq!(header.preferred(), Some(Some("gzip")));
/// assert_eq!(header.accepts("br"), Some(false));
///
/// let header = RequestHeader::parse("X-Request-Id", "abc");
/// assert_eq!(header.to_header_line(), "X-Request-Id: abc");
/// assert_eq!(header.accepts("abc"), None);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum RequestHeader {
    /// `Accept`
    Accept(Accept),
    /// `Accept-Charset`
    AcceptCharset(AcceptCharset),
    /// `Accept-Encoding`
    AcceptEncoding(AcceptEncoding),
    /// `Accept-Language`
    AcceptLanguage(AcceptLanguage),
    /// `Host`
    Host(Host),
    /// `Referer`
    Referer(Referer),
    /// `User-Agent`
    UserAgent(UserAgent),
    /// Any other header, stored as written.
    Other {
        /// The field name, as given.
        name: String,
        /// The raw field value.
        value: String,
    },
}

impl RequestHeader {
    /// Parses a field value into the header type named by `name`.
    ///
    /// Names are matched without regard to case. This never fails; an
    /// unknown name gives `RequestHeader::Other`.
    pub fn parse(name: &str, value: &str) -> RequestHeader {
        if eq_ascii(name, Accept::header_name()) {
            RequestHeader::Accept(Accept::parse_header(value))
        } else if eq_ascii(name, AcceptCharset::header_name()) {
            RequestHeader::AcceptCharset(AcceptCharset::parse_header(value))
        } else if eq_ascii(name, AcceptEncoding::header_name()) {
            RequestHeader::AcceptEncoding(AcceptEncoding::parse_header(value))
        } else if eq_ascii(name, AcceptLanguage::header_name()) {
            RequestHeader::AcceptLanguage(AcceptLanguage::parse_header(value))
        } else if eq_ascii(name, Host::header_name()) {
            RequestHeader::Host(Host::parse_header(value))
        } else if eq_ascii(name, Referer::header_name()) {
            RequestHeader::Referer(Referer::parse_header(value))
        } else if eq_ascii(name, UserAgent::header_name()) {
            RequestHeader::UserAgent(UserAgent::parse_header(value))
        } else {
            trace!("untyped header {:?}", name);
            RequestHeader::Other {
                name: name.to_owned(),
                value: value.to_owned(),
            }
        }
    }

    /// Parses a header from the `http` crate's name and value types.
    ///
    /// Fails if the value is not visible ASCII.
    pub fn from_http(name: &HeaderName, value: &HeaderValue) -> crate::Result<RequestHeader> {
        let value = value.to_str().map_err(|err| {
            debug!("header {:?} is not visible ASCII", name);
            crate::Error::from(err)
        })?;
        Ok(RequestHeader::parse(name.as_str(), value))
    }

    /// The canonical name of the header field.
    ///
    /// For `Other` this is the name as given.
    pub fn header_name(&self) -> &str {
        match *self {
            RequestHeader::Accept(_) => Accept::header_name(),
            RequestHeader::AcceptCharset(_) => AcceptCharset::header_name(),
            RequestHeader::AcceptEncoding(_) => AcceptEncoding::header_name(),
            RequestHeader::AcceptLanguage(_) => AcceptLanguage::header_name(),
            RequestHeader::Host(_) => Host::header_name(),
            RequestHeader::Referer(_) => Referer::header_name(),
            RequestHeader::UserAgent(_) => UserAgent::header_name(),
            RequestHeader::Other { ref name, .. } => name.as_str(),
        }
    }

    /// The original, unparsed value.
    pub fn raw_value(&self) -> &str {
        match *self {
            RequestHeader::Accept(ref h) => h.raw_value(),
            RequestHeader::AcceptCharset(ref h) => h.raw_value(),
            RequestHeader::AcceptEncoding(ref h) => h.raw_value(),
            RequestHeader::AcceptLanguage(ref h) => h.raw_value(),
            RequestHeader::Host(ref h) => h.raw_value(),
            RequestHeader::Referer(ref h) => h.raw_value(),
            RequestHeader::UserAgent(ref h) => h.raw_value(),
            RequestHeader::Other { ref value, .. } => value.as_str(),
        }
    }

    /// Formats the whole field line, `"<name>: <value>"`.
    pub fn to_header_line(&self) -> String {
        self.to_string()
    }

    /// The most preferred subject of a weighted header.
    ///
    /// `None` for headers that carry no preferences.
    pub fn preferred(&self) -> Option<Option<&str>> {
        self.negotiator().map(|n| match n {
            Negotiator::Accept(h) => h.preferred(),
            Negotiator::AcceptCharset(h) => h.preferred(),
            Negotiator::AcceptEncoding(h) => h.preferred(),
            Negotiator::AcceptLanguage(h) => h.preferred(),
        })
    }

    /// Whether a weighted header accepts `candidate`.
    ///
    /// `None` for headers that carry no preferences.
    pub fn accepts(&self, candidate: &str) -> Option<bool> {
        self.negotiator().map(|n| match n {
            Negotiator::Accept(h) => h.accepts(candidate),
            Negotiator::AcceptCharset(h) => h.accepts(candidate),
            Negotiator::AcceptEncoding(h) => h.accepts(candidate),
            Negotiator::AcceptLanguage(h) => h.accepts(candidate),
        })
    }

    fn negotiator(&self) -> Option<Negotiator<'_>> {
        match *self {
            RequestHeader::Accept(ref h) => Some(Negotiator::Accept(h)),
            RequestHeader::AcceptCharset(ref h) => Some(Negotiator::AcceptCharset(h)),
            RequestHeader::AcceptEncoding(ref h) => Some(Negotiator::AcceptEncoding(h)),
            RequestHeader::AcceptLanguage(ref h) => Some(Negotiator::AcceptLanguage(h)),
            _ => None,
        }
    }
}

/// Borrowed view of the weighted variants.
enum Negotiator<'a> {
    Accept(&'a Accept),
    AcceptCharset(&'a AcceptCharset),
    AcceptEncoding(&'a AcceptEncoding),
    AcceptLanguage(&'a AcceptLanguage),
}

impl fmt::Display for RequestHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            RequestHeader::Accept(ref h) => write!(f, "{}", HeaderLine(h)),
            RequestHeader::AcceptCharset(ref h) => write!(f, "{}", HeaderLine(h)),
            RequestHeader::AcceptEncoding(ref h) => write!(f, "{}", HeaderLine(h)),
            RequestHeader::AcceptLanguage(ref h) => write!(f, "{}", HeaderLine(h)),
            RequestHeader::Host(ref h) => write!(f, "{}", HeaderLine(h)),
            RequestHeader::Referer(ref h) => write!(f, "{}", HeaderLine(h)),
            RequestHeader::UserAgent(ref h) => write!(f, "{}", HeaderLine(h)),
            RequestHeader::Other {
                ref name,
                ref value,
            } => write!(f, "{}: {}", name, value),
        }
    }
}

/// The typed headers of one request.
///
/// ```
/// use accept_negotiation::Headers;
/// use accept_negotiation::header::Negotiate;
/// use http::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE};
///
/// let mut map = HeaderMap::new();
/// map.append(ACCEPT_LANGUAGE, HeaderValue::from_static("da"));
/// map.append(ACCEPT_LANGUAGE, HeaderValue::from_static("en;q=0.7"));
///
/// let headers = Headers::from_map(&map).unwrap();
/// let lang = headers.accept_language().unwrap();
/// assert_eq!(lang.all(), vec!["da", "en"]);
/// assert!(lang.accepts("en-GB"));
/// assert!(headers.accept().is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Headers {
    items: Vec<RequestHeader>,
}

impl Headers {
    /// Creates a new, empty collection.
    pub fn new() -> Headers {
        Headers::default()
    }

    /// Reads every field of a `HeaderMap`.
    ///
    /// Repeated fields of one name are combined with `", "` before parsing,
    /// as [RFC7230](https://tools.ietf.org/html/rfc7230#section-3.2.2)
    /// allows for list-valued fields.
    pub fn from_map(map: &HeaderMap<HeaderValue>) -> crate::Result<Headers> {
        let mut headers = Headers::new();
        for name in map.keys() {
            let mut joined = String::new();
            for value in map.get_all(name) {
                let value = value.to_str()?;
                if !joined.is_empty() {
                    joined.push_str(", ");
                }
                joined.push_str(value);
            }
            headers.set_raw(name.as_str(), &joined);
        }
        Ok(headers)
    }

    /// Parses and stores a field, replacing any field of the same name.
    pub fn set_raw(&mut self, name: &str, value: &str) {
        let header = RequestHeader::parse(name, value);
        match self
            .items
            .iter()
            .position(|h| eq_ascii(h.header_name(), name))
        {
            Some(pos) => self.items[pos] = header,
            None => self.items.push(header),
        }
    }

    /// Get a header field by name, ignoring case.
    pub fn get_raw(&self, name: &str) -> Option<&RequestHeader> {
        self.items.iter().find(|h| eq_ascii(h.header_name(), name))
    }

    /// The `Accept` header, if present.
    pub fn accept(&self) -> Option<&Accept> {
        self.items.iter().find_map(|h| match *h {
            RequestHeader::Accept(ref v) => Some(v),
            _ => None,
        })
    }

    /// The `Accept-Charset` header, if present.
    pub fn accept_charset(&self) -> Option<&AcceptCharset> {
        self.items.iter().find_map(|h| match *h {
            RequestHeader::AcceptCharset(ref v) => Some(v),
            _ => None,
        })
    }

    /// The `Accept-Encoding` header, if present.
    pub fn accept_encoding(&self) -> Option<&AcceptEncoding> {
        self.items.iter().find_map(|h| match *h {
            RequestHeader::AcceptEncoding(ref v) => Some(v),
            _ => None,
        })
    }

    /// The `Accept-Language` header, if present.
    pub fn accept_language(&self) -> Option<&AcceptLanguage> {
        self.items.iter().find_map(|h| match *h {
            RequestHeader::AcceptLanguage(ref v) => Some(v),
            _ => None,
        })
    }

    /// The `Host` header, if present.
    pub fn host(&self) -> Option<&Host> {
        self.items.iter().find_map(|h| match *h {
            RequestHeader::Host(ref v) => Some(v),
            _ => None,
        })
    }

    /// The `Referer` header, if present.
    pub fn referer(&self) -> Option<&Referer> {
        self.items.iter().find_map(|h| match *h {
            RequestHeader::Referer(ref v) => Some(v),
            _ => None,
        })
    }

    /// The `User-Agent` header, if present.
    pub fn user_agent(&self) -> Option<&UserAgent> {
        self.items.iter().find_map(|h| match *h {
            RequestHeader::UserAgent(ref v) => Some(v),
            _ => None,
        })
    }

    /// Iterates over the parsed headers in the order they were set.
    pub fn iter(&self) -> ::std::slice::Iter<'_, RequestHeader> {
        self.items.iter()
    }

    /// The number of distinct fields.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if no field was set.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl fmt::Display for Headers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for header in &self.items {
            write!(f, "{}\r\n", header)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Headers {
    type Item = &'a RequestHeader;
    type IntoIter = ::std::slice::Iter<'a, RequestHeader>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
