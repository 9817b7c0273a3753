#![doc(html_root_url = "https://docs.rs/accept-negotiation/0.1.0")]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

//! # accept-negotiation
//!
//! Typed request headers for HTTP content negotiation.
//!
//! The four weighted-preference headers, `Accept`, `Accept-Charset`,
//! `Accept-Encoding` and `Accept-Language`, are parsed into a ranked
//! preference list following the rules of
//! [RFC 2616 section 14](https://tools.ietf.org/html/rfc2616#section-14).
//! Each of them answers two questions for a server picking a
//! representation: what does the client prefer most, and is a given
//! candidate acceptable at all.
//!
//! ```
//! use accept_negotiation::header::{AcceptLanguage, Header, Negotiate};
//!
//! let lang = AcceptLanguage::parse_header("da, en-gb;q=0.8, en;q=0.7");
//! assert_eq!(lang.preferred(), Some("da"));
//! assert!(lang.accepts("en-US"));
//! assert_eq!(lang.to_header_line(), "Accept-Language: da, en-gb;q=0.8, en;q=0.7");
//! ```
//!
//! A whole request's headers can be collected from an `http::HeaderMap`
//! with [`Headers::from_map`](headers/struct.Headers.html#method.from_map).

pub use crate::error::{Error, Result};
pub use crate::headers::{Headers, RequestHeader};

#[macro_use]
mod trace;
#[macro_use]
mod macros;

mod error;
pub mod header;
pub mod headers;
