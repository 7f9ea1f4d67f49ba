use crate::error::{Result, VerfileError};
use std::fmt;

/// The mandatory numeric core of a semantic version (major.minor.patch).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Number {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

/// The numeric-core field targeted by a bump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Major,
    Minor,
    Patch,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Major => write!(f, "major"),
            Level::Minor => write!(f, "minor"),
            Level::Patch => write!(f, "patch"),
        }
    }
}

/// How a bump changes the targeted field: add a signed delta, or overwrite
/// with an absolute value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    By(i64),
    To(u64),
}

impl Default for Change {
    fn default() -> Self {
        Change::By(1)
    }
}

impl Number {
    /// Create a new numeric core
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Number {
            major,
            minor,
            patch,
        }
    }

    /// Parse a numeric core from a "X.Y.Z" string
    pub fn parse(core: &str) -> Result<Self> {
        let parts: Vec<&str> = core.split('.').collect();
        if parts.len() != 3 {
            return Err(VerfileError::format(format!(
                "Invalid numeric core: '{}' - expected X.Y.Z",
                core
            )));
        }

        let major = parts[0]
            .parse::<u64>()
            .map_err(|_| VerfileError::format(format!("Invalid major version: {}", parts[0])))?;
        let minor = parts[1]
            .parse::<u64>()
            .map_err(|_| VerfileError::format(format!("Invalid minor version: {}", parts[1])))?;
        let patch = parts[2]
            .parse::<u64>()
            .map_err(|_| VerfileError::format(format!("Invalid patch version: {}", parts[2])))?;

        Ok(Number::new(major, minor, patch))
    }

    /// True once the major version has left zero
    pub fn stable(&self) -> bool {
        self.major > 0
    }

    /// Bump one field in place. Sibling fields are never touched: bumping
    /// minor does not reset patch. A `By` delta that would take a field
    /// below zero is rejected.
    pub fn bump_mut(&mut self, level: Level, change: Change) -> Result<()> {
        let field = match level {
            Level::Major => &mut self.major,
            Level::Minor => &mut self.minor,
            Level::Patch => &mut self.patch,
        };

        match change {
            Change::To(value) => *field = value,
            Change::By(delta) => {
                let current = *field;
                *field = current.checked_add_signed(delta).ok_or_else(|| {
                    VerfileError::format(format!(
                        "Bumping {} by {} would leave {}, which is not a non-negative integer",
                        level,
                        delta,
                        current as i128 + delta as i128
                    ))
                })?;
            }
        }

        Ok(())
    }

    /// Non-mutating form of [`bump_mut`](Number::bump_mut)
    pub fn bump(&self, level: Level, change: Change) -> Result<Self> {
        let mut bumped = *self;
        bumped.bump_mut(level, change)?;
        Ok(bumped)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
