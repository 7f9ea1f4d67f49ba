//! Terminal output and the interactive prompts used when the version file
//! cannot be determined automatically.

use anyhow::Result;
use console::style;
use std::io::{self, Write};
use std::path::PathBuf;

pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Render an old → new version line before persisting
pub fn display_version_change(old: &str, new: &str) {
    println!("\n{}", style("Version Change:").bold());
    println!("  From: {}", style(old).red());
    println!("  To:   {}", style(new).green());
}

/// Prompts user to select a version file from the discovered candidates.
///
/// If only one candidate exists, returns it directly without prompting.
/// Otherwise displays a numbered list and accepts a 1-based index, with the
/// first candidate as the default on plain Enter.
pub fn select_version_file(candidates: &[PathBuf]) -> Result<PathBuf> {
    if candidates.len() == 1 {
        return Ok(candidates[0].clone());
    }

    println!("\n{}", style("Multiple version files found:").bold());
    for (i, candidate) in candidates.iter().enumerate() {
        println!("  {}. {}", i + 1, candidate.display());
    }

    print!("\nSelect a version file (1-{}) [default: 1]: ", candidates.len());
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    let selection = input.trim();

    let index = if selection.is_empty() {
        1
    } else {
        selection.parse::<usize>().unwrap_or(0)
    };

    if index > 0 && index <= candidates.len() {
        println!("(Set VERSION_FILE or version_file in verfile.toml to skip this prompt.)");
        Ok(candidates[index - 1].clone())
    } else {
        Err(anyhow::anyhow!("Invalid selection"))
    }
}

/// Prompts for a version-file path when no candidate was found
pub fn prompt_version_file() -> Result<PathBuf> {
    println!("No version file found.");
    println!("(Run `verfile install`, set VERSION_FILE, or add version_file to verfile.toml.)");
    print!("Specify a version file to read from: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    let path = input.trim();

    if path.is_empty() {
        Err(anyhow::anyhow!("No version file specified"))
    } else {
        Ok(PathBuf::from(path))
    }
}
