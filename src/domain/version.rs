//! The composite version value: numeric core plus prerelease and metadata
//! identifier lists, with parsing, formatting, ordering, and bumping.

use crate::domain::data::Data;
use crate::domain::number::{Change, Level, Number};
use crate::error::{Result, VerfileError};
use regex::Regex;
use std::cmp::Ordering;
use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// Which volatile segments a bump should keep. By default a bump clears
/// both prerelease and metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Preserve {
    pub prerelease: bool,
    pub meta: bool,
}

impl Preserve {
    pub const NONE: Preserve = Preserve {
        prerelease: false,
        meta: false,
    };
    pub const PRERELEASE: Preserve = Preserve {
        prerelease: true,
        meta: false,
    };
    pub const META: Preserve = Preserve {
        prerelease: false,
        meta: true,
    };
    pub const ALL: Preserve = Preserve {
        prerelease: true,
        meta: true,
    };
}

/// A semantic version: `MAJOR.MINOR.PATCH[-PRERELEASE][+META]`.
///
/// Owns its numeric core and both identifier lists; an empty list is the
/// canonical "segment absent" state. Metadata never participates in
/// ordering, so versions differing only in metadata compare equal.
#[derive(Debug, Clone, Default)]
pub struct Version {
    number: Number,
    prerelease: Data,
    meta: Data,
}

fn pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?P<number>\d+\.\d+\.\d+)(?:-(?P<prerelease>[^+\s]+))?(?:\+(?P<meta>\S+))?")
            .expect("version pattern is valid")
    })
}

impl Version {
    /// Assemble a version from its parts
    pub fn new(number: Number, prerelease: Data, meta: Data) -> Self {
        Version {
            number,
            prerelease,
            meta,
        }
    }

    /// Parse a version string.
    ///
    /// The numeric core is mandatory; prerelease and metadata are optional
    /// and split on `.` into identifier lists. The match is unanchored, so
    /// surrounding junk is tolerated as long as a core is present.
    pub fn parse(input: &str) -> Result<Self> {
        let captures = pattern().captures(input).ok_or_else(|| {
            VerfileError::format(format!(
                "'{}' does not contain a MAJOR.MINOR.PATCH version",
                input
            ))
        })?;

        let number = Number::parse(&captures["number"])?;
        let prerelease = captures
            .name("prerelease")
            .map(|m| Data::parse(m.as_str()))
            .unwrap_or_default();
        let meta = captures
            .name("meta")
            .map(|m| Data::parse(m.as_str()))
            .unwrap_or_default();

        Ok(Version::new(number, prerelease, meta))
    }

    /// Read and parse a version file.
    ///
    /// Edge whitespace is stripped and internal whitespace runs collapse to
    /// single spaces before parsing, so a trailing newline never breaks the
    /// round-trip.
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let mut collapsed = String::with_capacity(raw.len());
        let mut in_whitespace = false;
        for c in raw.trim().chars() {
            if c.is_whitespace() {
                if !in_whitespace {
                    collapsed.push(' ');
                }
                in_whitespace = true;
            } else {
                collapsed.push(c);
                in_whitespace = false;
            }
        }
        Version::parse(&collapsed)
    }

    pub fn number(&self) -> &Number {
        &self.number
    }

    pub fn prerelease(&self) -> &Data {
        &self.prerelease
    }

    pub fn meta(&self) -> &Data {
        &self.meta
    }

    // Read-through accessors to the numeric core.

    pub fn major(&self) -> u64 {
        self.number.major
    }

    pub fn minor(&self) -> u64 {
        self.number.minor
    }

    pub fn patch(&self) -> u64 {
        self.number.patch
    }

    pub fn stable(&self) -> bool {
        self.number.stable()
    }

    pub fn has_prerelease(&self) -> bool {
        !self.prerelease.is_empty()
    }

    pub fn has_meta(&self) -> bool {
        !self.meta.is_empty()
    }

    /// Replace the prerelease segment; blank tokens are dropped and an
    /// empty result clears the segment to absent.
    pub fn set_prerelease<I, S>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.prerelease = Data::from_tokens(tokens);
    }

    /// Replace the metadata segment; same canonicalization as prerelease
    pub fn set_meta<I, S>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.meta = Data::from_tokens(tokens);
    }

    pub fn clear_prerelease(&mut self) {
        self.prerelease = Data::new();
    }

    pub fn clear_meta(&mut self) {
        self.meta = Data::new();
    }

    /// Append one identifier to the prerelease segment
    pub fn push_prerelease(&mut self, token: &str) {
        self.prerelease.push(token);
    }

    /// Append one identifier to the metadata segment
    pub fn push_meta(&mut self, token: &str) {
        self.meta.push(token);
    }

    /// Bump the numeric core in place, then clear prerelease and metadata
    /// unless `preserve` keeps them.
    pub fn bump_mut(&mut self, level: Level, change: Change, preserve: Preserve) -> Result<()> {
        self.number.bump_mut(level, change)?;
        if !preserve.prerelease {
            self.clear_prerelease();
        }
        if !preserve.meta {
            self.clear_meta();
        }
        Ok(())
    }

    /// Non-mutating form of [`bump_mut`](Version::bump_mut); returns a new
    /// independent version.
    pub fn bump(&self, level: Level, change: Change, preserve: Preserve) -> Result<Self> {
        let mut bumped = self.clone();
        bumped.bump_mut(level, change, preserve)?;
        Ok(bumped)
    }

    fn precedence(&self, other: &Version) -> Ordering {
        self.number
            .cmp(&other.number)
            .then_with(|| self.prerelease.compare(&other.prerelease))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number)?;
        if self.has_prerelease() {
            write!(f, "-{}", self.prerelease)?;
        }
        if self.has_meta() {
            write!(f, "+{}", self.meta)?;
        }
        Ok(())
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.precedence(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.precedence(other)
    }
}
