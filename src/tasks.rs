//! Task-level operations on a loaded version.
//!
//! The CLI (or any other caller) holds a [`Context`] with the loaded version
//! and its source path, applies [`Operation`]s to it, and persists the
//! result. This is deliberately explicit state passed around by the caller;
//! there is no process-wide "current version" anywhere.

use crate::config::Config;
use crate::domain::{Change, Level, Preserve, Version};
use crate::error::{Result, VerfileError};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming the version file, checked before discovery
pub const VERSION_FILE_ENV: &str = "VERSION_FILE";

/// One named, independently invokable mutation of a version
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Bump or overwrite one numeric-core field
    Bump {
        level: Level,
        change: Change,
        preserve: Preserve,
    },
    /// Clear the prerelease if present, otherwise bump patch
    Release,
    SetPrerelease(Vec<String>),
    ClearPrerelease,
    AppendPrerelease(String),
    SetMeta(Vec<String>),
    ClearMeta,
    AppendMeta(String),
}

/// Caller-held state: the loaded version (if any) and where it came from
#[derive(Debug, Clone, Default)]
pub struct Context {
    version: Option<Version>,
    path: Option<PathBuf>,
}

impl Context {
    /// Empty context: no version, no source
    pub fn new() -> Self {
        Context::default()
    }

    /// Load from an explicit version string; no source path attached
    pub fn from_value(value: &str) -> Result<Self> {
        Ok(Context {
            version: Some(Version::parse(value)?),
            path: None,
        })
    }

    /// Load strictly from a file; read or parse failures propagate
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let version = Version::read(&path)?;
        Ok(Context {
            version: Some(version),
            path: Some(path),
        })
    }

    /// Probe an optional file: a failed read becomes "no version loaded"
    /// while the path is kept for a later `install`.
    pub fn probe_file(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let version = Version::read(&path).ok();
        Context {
            version,
            path: Some(path),
        }
    }

    /// The loaded version, or a configuration error if none was supplied
    pub fn version(&self) -> Result<&Version> {
        self.version
            .as_ref()
            .ok_or_else(|| VerfileError::config("No version value or version file supplied"))
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn set_version(&mut self, version: Version) {
        self.version = Some(version);
    }

    /// Apply one operation, store the result, and return it
    pub fn apply(&mut self, operation: &Operation) -> Result<&Version> {
        let current = self.version()?;
        let updated = apply_to(current, operation)?;
        self.version = Some(updated);
        self.version()
    }

    /// Write the canonical string back to the source path
    pub fn persist(&self) -> Result<()> {
        let version = self.version()?;
        let path = self
            .path
            .as_ref()
            .ok_or_else(|| VerfileError::config("No version file to write to"))?;
        fs::write(path, version.to_string())?;
        Ok(())
    }
}

/// Compute the successor of `version` under `operation` without touching
/// the input.
pub fn apply_to(version: &Version, operation: &Operation) -> Result<Version> {
    match operation {
        Operation::Bump {
            level,
            change,
            preserve,
        } => version.bump(*level, *change, *preserve),
        Operation::Release => {
            if version.has_prerelease() {
                let mut released = version.clone();
                released.clear_prerelease();
                Ok(released)
            } else {
                version.bump(Level::Patch, Change::default(), Preserve::NONE)
            }
        }
        Operation::SetPrerelease(tokens) => {
            let mut updated = version.clone();
            updated.set_prerelease(tokens);
            Ok(updated)
        }
        Operation::ClearPrerelease => {
            let mut updated = version.clone();
            updated.clear_prerelease();
            Ok(updated)
        }
        Operation::AppendPrerelease(token) => {
            let mut updated = version.clone();
            updated.push_prerelease(token);
            Ok(updated)
        }
        Operation::SetMeta(tokens) => {
            let mut updated = version.clone();
            updated.set_meta(tokens);
            Ok(updated)
        }
        Operation::ClearMeta => {
            let mut updated = version.clone();
            updated.clear_meta();
            Ok(updated)
        }
        Operation::AppendMeta(token) => {
            let mut updated = version.clone();
            updated.push_meta(token);
            Ok(updated)
        }
    }
}

/// Outcome of looking for a version file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Discovery {
    Found(PathBuf),
    /// Several `*.version` candidates; the caller decides (e.g. a prompt)
    Ambiguous(Vec<PathBuf>),
    NotFound,
}

impl Discovery {
    /// Collapse into a path, turning the other outcomes into typed errors
    /// for non-interactive callers.
    pub fn require(self) -> Result<PathBuf> {
        match self {
            Discovery::Found(path) => Ok(path),
            Discovery::Ambiguous(candidates) => Err(VerfileError::config(format!(
                "Multiple version files found: {}",
                candidates
                    .iter()
                    .map(|p| p.display().to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            ))),
            Discovery::NotFound => Err(VerfileError::config(
                "No version file found (set VERSION_FILE or create a *.version file)",
            )),
        }
    }
}

/// Locate the version file to operate on.
///
/// Precedence: explicit path, then the `VERSION_FILE` environment variable,
/// then the configured `version_file`, then a scan of `search_dir` for
/// `*.version` files.
pub fn discover_version_file(
    config: &Config,
    explicit: Option<&Path>,
    search_dir: &Path,
) -> Result<Discovery> {
    if let Some(path) = explicit {
        return Ok(Discovery::Found(path.to_path_buf()));
    }

    if let Ok(path) = env::var(VERSION_FILE_ENV) {
        if !path.trim().is_empty() {
            return Ok(Discovery::Found(PathBuf::from(path)));
        }
    }

    if let Some(path) = &config.version_file {
        return Ok(Discovery::Found(PathBuf::from(path)));
    }

    let mut candidates = scan_candidates(search_dir)?;
    match candidates.len() {
        0 => Ok(Discovery::NotFound),
        1 => Ok(Discovery::Found(candidates.remove(0))),
        _ => Ok(Discovery::Ambiguous(candidates)),
    }
}

/// List `*.version` files in `dir`, sorted for stable prompts
pub fn scan_candidates(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut candidates = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "version") {
            candidates.push(path);
        }
    }
    candidates.sort();
    Ok(candidates)
}

/// Seed a new version file with `value` (validated and canonicalized first)
pub fn install(path: &Path, value: &str) -> Result<Version> {
    let version = Version::parse(value)?;
    fs::write(path, version.to_string())?;
    Ok(version)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn context_for(value: &str) -> Context {
        Context::from_value(value).unwrap()
    }

    #[test]
    fn test_from_value() {
        let ctx = context_for("1.2.3-rc.1");
        assert_eq!(ctx.version().unwrap().to_string(), "1.2.3-rc.1");
        assert!(ctx.path().is_none());
    }

    #[test]
    fn test_from_value_invalid() {
        assert!(Context::from_value("nope").is_err());
    }

    #[test]
    fn test_empty_context_has_no_version() {
        let ctx = Context::new();
        let err = ctx.version().unwrap_err();
        assert!(matches!(err, VerfileError::Config(_)));
    }

    #[test]
    fn test_probe_swallows_read_failure() {
        let ctx = Context::probe_file("/no/such/file.version");
        assert!(ctx.version().is_err());
        assert!(ctx.path().is_some());
    }

    #[test]
    fn test_apply_bump() {
        let mut ctx = context_for("1.2.3-beta");
        let op = Operation::Bump {
            level: Level::Minor,
            change: Change::default(),
            preserve: Preserve::NONE,
        };
        assert_eq!(ctx.apply(&op).unwrap().to_string(), "1.3.3");
    }

    #[test]
    fn test_release_clears_prerelease_first() {
        let v = Version::parse("1.2.3-rc.1+b").unwrap();
        let released = apply_to(&v, &Operation::Release).unwrap();
        // only the prerelease goes; meta and patch stay
        assert_eq!(released.to_string(), "1.2.3+b");
    }

    #[test]
    fn test_release_bumps_patch_when_stable() {
        let v = Version::parse("1.2.3+b").unwrap();
        let released = apply_to(&v, &Operation::Release).unwrap();
        // the default patch bump clears meta too
        assert_eq!(released.to_string(), "1.2.4");
    }

    #[test]
    fn test_set_and_append_operations() {
        let v = Version::parse("1.2.3").unwrap();
        let v = apply_to(&v, &Operation::SetPrerelease(vec!["rc".into()])).unwrap();
        let v = apply_to(&v, &Operation::AppendPrerelease("1".into())).unwrap();
        let v = apply_to(&v, &Operation::SetMeta(vec!["build".into(), "7".into()])).unwrap();
        assert_eq!(v.to_string(), "1.2.3-rc.1+build.7");
        let v = apply_to(&v, &Operation::ClearMeta).unwrap();
        let v = apply_to(&v, &Operation::ClearPrerelease).unwrap();
        assert_eq!(v.to_string(), "1.2.3");
    }

    #[test]
    fn test_set_with_blank_tokens_clears() {
        let v = Version::parse("1.2.3-rc").unwrap();
        let v = apply_to(&v, &Operation::SetPrerelease(vec!["".into()])).unwrap();
        assert_eq!(v.to_string(), "1.2.3");
    }

    #[test]
    fn test_persist_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.version");
        std::fs::File::create(&path)
            .unwrap()
            .write_all(b"1.2.3\n")
            .unwrap();

        let mut ctx = Context::from_file(&path).unwrap();
        ctx.apply(&Operation::Bump {
            level: Level::Patch,
            change: Change::default(),
            preserve: Preserve::NONE,
        })
        .unwrap();
        ctx.persist().unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "1.2.4");
    }

    #[test]
    fn test_persist_without_path_fails() {
        let ctx = context_for("1.2.3");
        assert!(matches!(
            ctx.persist().unwrap_err(),
            VerfileError::Config(_)
        ));
    }

    #[test]
    fn test_scan_candidates_sorted() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.version", "a.version", "notes.txt"] {
            std::fs::write(dir.path().join(name), "0.1.0").unwrap();
        }
        let found = scan_candidates(dir.path()).unwrap();
        assert_eq!(found.len(), 2);
        assert!(found[0].ends_with("a.version"));
        assert!(found[1].ends_with("b.version"));
    }

    #[test]
    fn test_install_writes_canonical_form() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("new.version");
        let version = install(&path, "0.1.0-rc.1").unwrap();
        assert_eq!(version.to_string(), "0.1.0-rc.1");
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "0.1.0-rc.1");
    }

    #[test]
    fn test_install_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("new.version");
        assert!(install(&path, "not-a-version").is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_discovery_require() {
        assert!(Discovery::Found(PathBuf::from("a.version")).require().is_ok());
        assert!(Discovery::NotFound.require().is_err());
        assert!(Discovery::Ambiguous(vec![
            PathBuf::from("a.version"),
            PathBuf::from("b.version")
        ])
        .require()
        .is_err());
    }
}
