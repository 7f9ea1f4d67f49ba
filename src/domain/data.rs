//! Dotted identifier lists for the prerelease and metadata segments.
//!
//! Both segments share one representation: an ordered sequence of
//! identifiers, each either a non-negative integer or an opaque string.
//! The ordering rule implemented by [`Data::compare`] is NOT semver.org
//! precedence; read the comments on `compare` and the regression tests
//! before changing anything there.

use std::cmp::Ordering;
use std::fmt;

/// A single dot-separated token: numeric if it parses as a base-10
/// non-negative integer, text otherwise. The kind is fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identifier {
    Numeric(u64),
    Text(String),
}

impl Identifier {
    /// Classify one raw token, integer parse first, text as the fallback
    pub fn from_token(token: &str) -> Self {
        match token.parse::<u64>() {
            Ok(value) => Identifier::Numeric(value),
            Err(_) => Identifier::Text(token.to_string()),
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Numeric(value) => write!(f, "{}", value),
            Identifier::Text(text) => write!(f, "{}", text),
        }
    }
}

/// An ordered, possibly-empty identifier list. Blank tokens are dropped at
/// construction, so an empty `Data` is the canonical "segment absent" state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Data {
    identifiers: Vec<Identifier>,
}

impl Data {
    /// Create an empty list
    pub fn new() -> Self {
        Data::default()
    }

    /// Build a list from raw tokens, dropping blank ones
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let identifiers = tokens
            .into_iter()
            .filter(|token| !token.as_ref().trim().is_empty())
            .map(|token| Identifier::from_token(token.as_ref()))
            .collect();
        Data { identifiers }
    }

    /// Split a raw segment on `.` and build a list from the pieces
    pub fn parse(segment: &str) -> Self {
        Data::from_tokens(segment.split('.'))
    }

    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.identifiers.len()
    }

    pub fn get(&self, index: usize) -> Option<&Identifier> {
        self.identifiers.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Identifier> {
        self.identifiers.iter()
    }

    /// Append one raw token; blank tokens are ignored
    pub fn push(&mut self, token: &str) {
        if !token.trim().is_empty() {
            self.identifiers.push(Identifier::from_token(token));
        }
    }

    /// Compare two identifier lists.
    ///
    /// Rules, in order:
    /// 1. If either side is empty the result is the reversed length
    ///    comparison: an empty list is greater than a non-empty one
    ///    (a release outranks any prerelease).
    /// 2. Otherwise pair elements positionally, padding the shorter side
    ///    with missing markers. The first deciding pair wins:
    ///    - same kind: numeric compare for numbers, byte-wise compare for
    ///      text; an equal pair defers to the next one.
    ///    - mixed kinds (a missing marker counts as a kind): text on the
    ///      left wins, anything else on the left loses. Only the LEFT
    ///      element's kind is inspected, so a present trailing number loses
    ///      to a missing marker no matter which side it is on:
    ///      `[1] vs [1,2]` and `[1,2] vs [1]` are both `Less`.
    ///
    /// The mixed-kind rule makes the relation non-antisymmetric, which is
    /// why `Data` does not implement `Ord`.
    pub fn compare(&self, other: &Data) -> Ordering {
        if self.is_empty() || other.is_empty() {
            return other.len().cmp(&self.len());
        }

        let pairs = self.len().max(other.len());
        for index in 0..pairs {
            let step = match (self.get(index), other.get(index)) {
                (Some(Identifier::Numeric(mine)), Some(Identifier::Numeric(theirs))) => {
                    mine.cmp(theirs)
                }
                (Some(Identifier::Text(mine)), Some(Identifier::Text(theirs))) => {
                    mine.cmp(theirs)
                }
                (Some(Identifier::Text(_)), _) => return Ordering::Greater,
                _ => return Ordering::Less,
            };
            if step != Ordering::Equal {
                return step;
            }
        }

        Ordering::Equal
    }
}

impl fmt::Display for Data {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .identifiers
            .iter()
            .map(|identifier| identifier.to_string())
            .collect::<Vec<_>>()
            .join(".");
        write!(f, "{}", joined)
    }
}
