//! Provides a struct for weighted header terms.
//!
//! [RFC2616 Section 3.9](https://tools.ietf.org/html/rfc2616#section-3.9)
//! gives more information on quality values in HTTP header fields.

/// One comma-separated entry of a weighted header value, such as
/// `text/html;level=1;q=0.7`.
#[derive(Clone, Debug, PartialEq)]
pub struct Term {
    /// The media range, charset, content-coding or language tag, as written.
    ///
    /// For media ranges every parameter other than `q` is appended back onto
    /// the subject (`text/html;level=1`), because it changes specificity.
    pub subject: String,
    /// The quality (client preference) for the subject, in `[0, 1]`.
    pub quality: f32,
    /// Zero-based index of the term within its header value.
    pub position: usize,
    /// Parameters other than `q`, in order of appearance.
    pub extensions: Vec<(String, String)>,
}

impl Term {
    /// Creates a new `Term` without extension parameters.
    pub fn new<S: Into<String>>(subject: S, quality: f32, position: usize) -> Term {
        Term {
            subject: subject.into(),
            quality,
            position,
            extensions: Vec::new(),
        }
    }
}

/// The quality assumed when a term carries no `q` parameter.
pub const DEFAULT_QUALITY: f32 = 1.0;

/// Parses the value of a `q` parameter.
///
/// Anything that is not a finite number within `[0, 1]` is treated as
/// malformed and reads as `1.0`; a bad weight never rejects the term.
pub fn parse_quality(s: &str) -> f32 {
    match s.trim().parse::<f32>() {
        Ok(q) if q.is_finite() && (0.0..=1.0).contains(&q) => q,
        _ => {
            debug!("malformed quality value {:?}, using {}", s, DEFAULT_QUALITY);
            DEFAULT_QUALITY
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quality() {
        assert_eq!(parse_quality("0.5"), 0.5);
        assert_eq!(parse_quality(" 0.273 "), 0.273);
        assert_eq!(parse_quality("1"), 1.0);
        assert_eq!(parse_quality("0"), 0.0);
    }

    #[test]
    fn test_parse_quality_malformed() {
        assert_eq!(parse_quality(""), 1.0);
        assert_eq!(parse_quality("high"), 1.0);
        assert_eq!(parse_quality("-0.5"), 1.0);
        assert_eq!(parse_quality("1.5"), 1.0);
        assert_eq!(parse_quality("NaN"), 1.0);
        assert_eq!(parse_quality("inf"), 1.0);
    }
}
