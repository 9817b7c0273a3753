//! A collection of the request headers used in content negotiation.
//!
//! The weighted ones implement `Negotiate` on top of `Header`; the rest
//! store their raw value.

pub use self::accept::Accept;
pub use self::accept_charset::AcceptCharset;
pub use self::accept_encoding::AcceptEncoding;
pub use self::accept_language::AcceptLanguage;
pub use self::host::Host;
pub use self::referer::Referer;
pub use self::user_agent::UserAgent;

mod accept;
mod accept_charset;
mod accept_encoding;
mod accept_language;
mod host;
mod referer;
mod user_agent;
