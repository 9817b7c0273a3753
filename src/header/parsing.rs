//! Utility functions for Header implementations.

use std::cmp::Ordering;

use crate::header::shared::{parse_quality, Term, DEFAULT_QUALITY};

/// How the parameters trailing a term's subject are treated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Params {
    /// Every parameter other than `q` is kept as an extension and appended
    /// back onto the subject. Used for media ranges.
    Extend,
    /// Only `q` is recognized; anything else after the subject is ignored.
    QualityOnly,
}

/// Reads a comma-delimited raw header value into its terms.
///
/// Each term has the shape `subject *( ";" name [ "=" value ] )`. Whitespace
/// around terms and parameters is trimmed, and empty terms are skipped. The
/// terms come back in their original order with `position` counting the
/// terms kept.
///
/// There is no failure path: a missing or malformed `q` reads as `1.0`.
pub fn from_comma_delimited(raw: &str, params: Params) -> Vec<Term> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .filter_map(|part| from_one_term(part, params))
        .enumerate()
        .map(|(position, mut term)| {
            term.position = position;
            term
        })
        .collect()
}

fn from_one_term(part: &str, params: Params) -> Option<Term> {
    let mut pieces = part.split(';').map(str::trim);
    let subject = pieces.next().filter(|s| !s.is_empty())?;

    let mut quality = DEFAULT_QUALITY;
    let mut extensions = Vec::new();
    for piece in pieces.filter(|piece| !piece.is_empty()) {
        let (name, value) = match piece.find('=') {
            Some(idx) => (piece[..idx].trim(), piece[idx + 1..].trim()),
            None => (piece, ""),
        };
        if name.eq_ignore_ascii_case("q") {
            quality = parse_quality(value);
        } else if params == Params::Extend {
            extensions.push((name.to_owned(), value.to_owned()));
        }
    }

    let mut subject = subject.to_owned();
    for &(ref name, ref value) in &extensions {
        subject.push(';');
        subject.push_str(name);
        if !value.is_empty() {
            subject.push('=');
            subject.push_str(value);
        }
    }

    Some(Term {
        subject,
        quality,
        position: 0,
        extensions,
    })
}

/// Orders items by a ranking comparator, best first.
///
/// Items are taken in their original order, and each one is placed ahead
/// of the first already placed item it ranks strictly before. For a total
/// order this is a stable sort. The media range rules are not transitive
/// across unrelated major types, which would upset `slice::sort_by`; this
/// pass stays deterministic anyway.
pub fn rank_by<T, F>(items: Vec<T>, mut cmp: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut ranked: Vec<T> = Vec::with_capacity(items.len());
    for item in items {
        let at = ranked
            .iter()
            .position(|placed| cmp(&item, placed) == Ordering::Less)
            .unwrap_or(ranked.len());
        ranked.insert(at, item);
    }
    ranked
}

/// Compares two qualities, higher first.
pub fn by_quality(a: f32, b: f32) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

/// Compares two terms by quality, higher first, then by position.
pub fn by_quality_then_position(a: &Term, b: &Term) -> Ordering {
    by_quality(a.quality, b.quality).then(a.position.cmp(&b.position))
}
