use std::fmt;

use crate::header::Header;

/// The `Host` header.
///
/// HTTP/1.1 requires that all requests include a `Host` header. The value
/// is kept as written; `hostname` and `port` split it on demand.
///
/// ```
/// use accept_negotiation::header::{Header, Host};
///
/// let host = Host::parse_header("example.org:8080");
/// assert_eq!(host.hostname(), "example.org");
/// assert_eq!(host.port(), Some(8080));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Host(pub String);

__negotiation__deref!(Host => String);

impl Host {
    /// The host name, without any port.
    pub fn hostname(&self) -> &str {
        match self.split_port() {
            Some((host, _)) => host,
            None => &self.0,
        }
    }

    /// The port, if one was given and is numeric.
    pub fn port(&self) -> Option<u16> {
        self.split_port().and_then(|(_, port)| port.parse().ok())
    }

    fn split_port(&self) -> Option<(&str, &str)> {
        let idx = self.0.rfind(':')?;
        // an IPv6 literal without a port, such as `[::1]`
        if self.0[idx..].contains(']') {
            return None;
        }
        Some((&self.0[..idx], &self.0[idx + 1..]))
    }
}

impl Header for Host {
    fn header_name() -> &'static str {
        "Host"
    }

    fn parse_header(raw: &str) -> Host {
        Host(raw.trim().to_owned())
    }

    fn raw_value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_header(f)
    }
}
