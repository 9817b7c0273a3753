use std::iter::FromIterator;

use crate::header::internals::VecMap;
use crate::header::shared::Term;

/// A ranked entry of a `PreferenceList`.
#[derive(Clone, Debug, PartialEq)]
pub struct Preference {
    /// The subject in its display form, as written in the header.
    pub value: String,
    /// The quality the subject was given.
    pub quality: f32,
}

/// The ranked, deduplicated result of parsing one header's terms.
///
/// Keys are the lower-cased subjects, and iteration follows descending
/// preference. A list is built from terms that are already ranked: each
/// term is folded in with "last write wins", so when two terms share a
/// key, the key keeps the slot of the better-ranked one while the value is
/// overwritten by the worse-ranked one.
///
/// ```
/// use accept_negotiation::header::{PreferenceList, Term};
///
/// let list: PreferenceList = vec![
///     Term::new("TEXT/HTML", 1.0, 0),
///     Term::new("text/plain", 0.5, 1),
///     Term::new("text/html", 0.2, 2),
/// ].into_iter().collect();
///
/// let first = list.first().unwrap();
/// assert_eq!(first.0, "text/html");
/// assert_eq!(first.1.value, "text/html");
/// assert_eq!(first.1.quality, 0.2);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PreferenceList {
    entries: VecMap<String, Preference>,
}

impl PreferenceList {
    /// Creates an empty list.
    pub fn new() -> PreferenceList {
        PreferenceList {
            entries: VecMap::new(),
        }
    }

    /// Folds a ranked term into the list.
    pub fn push(&mut self, term: Term) {
        let key = term.subject.to_ascii_lowercase();
        self.entries.insert(
            key,
            Preference {
                value: term.subject,
                quality: term.quality,
            },
        );
    }

    /// Gets the entry for an already lower-cased key.
    pub fn get(&self, key: &str) -> Option<&Preference> {
        self.entries.get(key)
    }

    /// Returns true if the lower-cased key is present.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// The most preferred entry, with its key.
    pub fn first(&self) -> Option<(&str, &Preference)> {
        self.entries.first().map(|&(ref k, ref v)| (k.as_str(), v))
    }

    /// Iterates over keys and entries, most preferred first.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Preference)> {
        self.entries.iter().map(|&(ref k, ref v)| (k.as_str(), v))
    }

    /// Iterates over the lower-cased keys, most preferred first.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|&(ref k, _)| k.as_str())
    }

    /// Iterates over the display values, most preferred first.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|&(_, ref v)| v.value.as_str())
    }

    /// The number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing was folded in.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<Term> for PreferenceList {
    fn from_iter<I: IntoIterator<Item = Term>>(iter: I) -> PreferenceList {
        let mut list = PreferenceList::new();
        for term in iter {
            list.push(term);
        }
        list
    }
}
