use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

use verfile::config;
use verfile::domain::{Change, Level, Preserve};
use verfile::tasks::{self, Context, Discovery, Operation};
use verfile::ui;

#[derive(Parser)]
#[command(
    name = "verfile",
    about = "Read, bump, and write semantic version files"
)]
struct Args {
    #[arg(short, long, global = true, help = "Version file to operate on")]
    file: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Custom configuration file path")]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Show the current version (the default command)
    Show,
    /// Show only the numeric core
    Number,
    /// Bump one numeric-core field by a delta (default: patch by 1)
    Bump {
        #[arg(value_enum, default_value_t = LevelArg::Patch)]
        level: LevelArg,

        #[arg(long, default_value_t = 1, allow_hyphen_values = true)]
        by: i64,

        #[arg(long, value_enum, help = "Keep prerelease and/or metadata")]
        preserve: Vec<PreserveArg>,
    },
    /// Set one numeric-core field to an absolute value
    Jump {
        #[arg(value_enum)]
        level: LevelArg,

        #[arg(long)]
        to: u64,

        #[arg(long, value_enum, help = "Keep prerelease and/or metadata")]
        preserve: Vec<PreserveArg>,
    },
    /// Remove prerelease data, or bump the patch level if there is none
    Release,
    /// Show or edit the prerelease segment
    Prerelease {
        #[command(subcommand)]
        action: Option<SegmentCommand>,
    },
    /// Show or edit the metadata segment
    Meta {
        #[command(subcommand)]
        action: Option<SegmentCommand>,
    },
    /// Create a version file seeded with VERSION or the configured default
    Install { version: Option<String> },
}

#[derive(Subcommand)]
enum SegmentCommand {
    /// Print the segment (blank when absent)
    Show,
    /// Clear the segment
    Clear,
    /// Replace the segment with a dot-separated identifier list
    Set { value: String },
    /// Append one identifier to the segment
    Append { value: String },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LevelArg {
    Major,
    Minor,
    Patch,
}

impl From<LevelArg> for Level {
    fn from(level: LevelArg) -> Self {
        match level {
            LevelArg::Major => Level::Major,
            LevelArg::Minor => Level::Minor,
            LevelArg::Patch => Level::Patch,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PreserveArg {
    Prerelease,
    Meta,
    All,
}

fn preserve_from_args(args: &[PreserveArg]) -> Preserve {
    let mut preserve = Preserve::NONE;
    for arg in args {
        match arg {
            PreserveArg::Prerelease => preserve.prerelease = true,
            PreserveArg::Meta => preserve.meta = true,
            PreserveArg::All => preserve = Preserve::ALL,
        }
    }
    preserve
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    if let Some(Command::Install { version }) = &args.command {
        let target = args.file.clone().unwrap_or_else(|| PathBuf::from(".version"));
        let value = version.clone().unwrap_or_else(|| config.default_version.clone());
        match tasks::install(&target, &value) {
            Ok(installed) => {
                ui::display_success(&format!("Wrote {} to {}", installed, target.display()));
                return Ok(());
            }
            Err(e) => {
                ui::display_error(&e.to_string());
                std::process::exit(1);
            }
        }
    }

    // Every other command needs a loaded version file.
    let path = match tasks::discover_version_file(&config, args.file.as_deref(), Path::new("."))? {
        Discovery::Found(path) => path,
        Discovery::Ambiguous(candidates) => ui::select_version_file(&candidates)?,
        Discovery::NotFound => ui::prompt_version_file()?,
    };

    let mut context = match Context::from_file(&path) {
        Ok(context) => context,
        Err(e) => {
            ui::display_error(&format!("Cannot load '{}': {}", path.display(), e));
            std::process::exit(1);
        }
    };

    let operation = match args.command.unwrap_or(Command::Show) {
        Command::Show => {
            println!("{}", context.version()?);
            return Ok(());
        }
        Command::Number => {
            println!("{}", context.version()?.number());
            return Ok(());
        }
        Command::Prerelease { action: None } | Command::Prerelease { action: Some(SegmentCommand::Show) } => {
            println!("{}", context.version()?.prerelease());
            return Ok(());
        }
        Command::Meta { action: None } | Command::Meta { action: Some(SegmentCommand::Show) } => {
            println!("{}", context.version()?.meta());
            return Ok(());
        }
        Command::Bump { level, by, preserve } => Operation::Bump {
            level: level.into(),
            change: Change::By(by),
            preserve: preserve_from_args(&preserve),
        },
        Command::Jump { level, to, preserve } => Operation::Bump {
            level: level.into(),
            change: Change::To(to),
            preserve: preserve_from_args(&preserve),
        },
        Command::Release => Operation::Release,
        Command::Prerelease { action: Some(action) } => match action {
            SegmentCommand::Clear => Operation::ClearPrerelease,
            SegmentCommand::Set { value } => {
                Operation::SetPrerelease(value.split('.').map(str::to_string).collect())
            }
            SegmentCommand::Append { value } => Operation::AppendPrerelease(value),
            SegmentCommand::Show => unreachable!("handled above"),
        },
        Command::Meta { action: Some(action) } => match action {
            SegmentCommand::Clear => Operation::ClearMeta,
            SegmentCommand::Set { value } => {
                Operation::SetMeta(value.split('.').map(str::to_string).collect())
            }
            SegmentCommand::Append { value } => Operation::AppendMeta(value),
            SegmentCommand::Show => unreachable!("handled above"),
        },
        Command::Install { .. } => unreachable!("handled above"),
    };

    let old = context.version()?.to_string();
    let new = match context.apply(&operation) {
        Ok(updated) => updated.to_string(),
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    ui::display_version_change(&old, &new);
    context.persist()?;
    ui::display_success(&format!("Wrote {} to {}", new, path.display()));

    Ok(())
}
