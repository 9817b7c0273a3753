//! Error and Result module.
use std::error::Error as StdError;
use std::fmt;

/// Result type often returned from methods that can have `Error`s.
pub type Result<T> = ::std::result::Result<T, Error>;

type Cause = Box<dyn StdError + Send + Sync>;

/// Represents errors that can occur turning raw header fields into typed headers.
///
/// Ranking preferences never fails; a malformed term degrades to a default
/// instead. The only failures happen at the boundary, where a field value
/// handed over by the HTTP layer cannot be read as text.
pub struct Error {
    inner: Box<ErrorImpl>,
}

struct ErrorImpl {
    kind: Kind,
    cause: Option<Cause>,
}

#[derive(Debug, PartialEq)]
pub(crate) enum Kind {
    Parse(Parse),
}

#[derive(Debug, PartialEq)]
pub(crate) enum Parse {
    /// A header value contained bytes other than visible ASCII.
    Header,
}

impl Error {
    /// Returns true if this was a header parse error.
    pub fn is_header(&self) -> bool {
        match self.inner.kind {
            Kind::Parse(Parse::Header) => true,
        }
    }

    /// Consumes the error, returning its cause.
    pub fn into_cause(self) -> Option<Box<dyn StdError + Send + Sync>> {
        self.inner.cause
    }

    pub(crate) fn new(kind: Kind, cause: Option<Cause>) -> Error {
        Error {
            inner: Box::new(ErrorImpl { kind, cause }),
        }
    }

    pub(crate) fn new_header<E: Into<Cause>>(cause: E) -> Error {
        Error::new(Kind::Parse(Parse::Header), Some(cause.into()))
    }

    fn description(&self) -> &str {
        match self.inner.kind {
            Kind::Parse(Parse::Header) => "invalid Header provided",
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_struct("Error");
        f.field("kind", &self.inner.kind);
        if let Some(ref cause) = self.inner.cause {
            f.field("cause", cause);
        }
        f.finish()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref cause) = self.inner.cause {
            write!(f, "{}: {}", self.description(), cause)
        } else {
            f.write_str(self.description())
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner
            .cause
            .as_ref()
            .map(|cause| &**cause as &(dyn StdError + 'static))
    }
}

impl From<http::header::ToStrError> for Error {
    fn from(err: http::header::ToStrError) -> Error {
        Error::new_header(err)
    }
}
