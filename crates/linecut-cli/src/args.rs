//! Command-line arguments
//!
//! Builds the `clap` command and turns matches into an [`Invocation`]. The
//! plan is resolved in layers: built-in default, then `--plan`, then flags.

use anyhow::{bail, Context};
use clap::error::ErrorKind;
use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use linecut_buffer::{BoundsPolicy, ContentHash, LineRange};
use linecut_layer::EditPlan;
use std::path::PathBuf;

/// How the final report is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// The one-line summary
    Text,
    /// The full report as pretty JSON
    Json,
}

/// Log verbosity requested on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// `-q`: errors only
    Quiet,
    /// Warnings and errors
    Normal,
    /// `-v`
    Verbose,
    /// `-vv` and up
    Debug,
}

impl Verbosity {
    /// Default `EnvFilter` directive for this level
    #[must_use]
    pub fn directive(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "info",
            Self::Debug => "debug",
        }
    }
}

/// Per-field overrides taken from flags
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    /// `FILE`
    pub target: Option<PathBuf>,
    /// `RANGE` or `--lines`
    pub range: Option<LineRange>,
    /// `--strict`
    pub strict: bool,
    /// `--expect-hash`
    pub expect_hash: Option<ContentHash>,
    /// `--output`
    pub output: Option<PathBuf>,
    /// `--dry-run`
    pub dry_run: bool,
}

impl Overrides {
    fn apply_to(&self, plan: &mut EditPlan) {
        if let Some(target) = &self.target {
            plan.target.clone_from(target);
        }
        if let Some(range) = self.range {
            plan.range = range;
        }
        if self.strict {
            plan.bounds = BoundsPolicy::Strict;
        }
        if let Some(hash) = self.expect_hash {
            plan.expect_hash = Some(hash);
        }
        if let Some(output) = &self.output {
            plan.output = Some(output.clone());
        }
        if self.dry_run {
            plan.dry_run = true;
        }
    }
}

/// Parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// `--plan`
    pub plan_file: Option<PathBuf>,
    /// Flags layered over the plan
    pub overrides: Overrides,
    /// `--json` selects [`OutputFormat::Json`]
    pub format: OutputFormat,
    /// From `-q` and repeated `-v`
    pub verbosity: Verbosity,
}

impl Invocation {
    /// Parse from process arguments
    ///
    /// `--help` and `--version` exit with 0; any usage error is printed and
    /// exits with [`USAGE_EXIT_CODE`].
    #[must_use]
    pub fn from_env() -> Self {
        match command().try_get_matches() {
            Ok(matches) => Self::from_matches(&matches),
            Err(err) if is_informational(&err) => err.exit(),
            Err(err) => {
                let _ = err.print();
                std::process::exit(USAGE_EXIT_CODE)
            }
        }
    }

    /// Parse from an explicit argument list
    ///
    /// # Errors
    /// Returns the clap error for invalid usage (including `--help`)
    pub fn try_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Ok(Self::from_matches(&command().try_get_matches_from(args)?))
    }

    fn from_matches(matches: &ArgMatches) -> Self {
        let range = matches
            .get_one::<LineRange>("range")
            .or_else(|| matches.get_one::<LineRange>("lines"))
            .copied();

        let verbosity = if matches.get_flag("quiet") {
            Verbosity::Quiet
        } else {
            match matches.get_count("verbose") {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::Debug,
            }
        };

        Self {
            plan_file: matches.get_one::<PathBuf>("plan").cloned(),
            overrides: Overrides {
                target: matches.get_one::<PathBuf>("file").cloned(),
                range,
                strict: matches.get_flag("strict"),
                expect_hash: matches.get_one::<ContentHash>("expect-hash").copied(),
                output: matches.get_one::<PathBuf>("output").cloned(),
                dry_run: matches.get_flag("dry-run"),
            },
            format: if matches.get_flag("json") {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            },
            verbosity,
        }
    }

    /// Build the plan this invocation runs
    ///
    /// Naming a file without any range (no RANGE, `--lines` or `--plan`) is
    /// refused rather than falling back to the built-in range.
    ///
    /// # Errors
    /// Fails if the plan file cannot be loaded or the range is missing
    pub async fn resolve_plan(&self) -> anyhow::Result<EditPlan> {
        let mut plan = match &self.plan_file {
            Some(path) => EditPlan::load(path)
                .await
                .with_context(|| format!("failed to load plan {}", path.display()))?,
            None => {
                if self.overrides.target.is_some() && self.overrides.range.is_none() {
                    bail!("a RANGE or --lines is required when FILE is given");
                }
                EditPlan::default()
            }
        };
        self.overrides.apply_to(&mut plan);
        Ok(plan)
    }
}

/// Exit status for usage errors, the same as for failed edits
pub const USAGE_EXIT_CODE: i32 = 1;

/// Help and version output are clap "errors" that are not failures
fn is_informational(err: &clap::Error) -> bool {
    matches!(
        err.kind(),
        ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
    )
}

/// Parse `--lines FIRST-LAST`
fn parse_one_based(text: &str) -> Result<LineRange, String> {
    let (first, last) = text
        .split_once('-')
        .ok_or_else(|| format!("expected FIRST-LAST, got '{text}'"))?;
    let first = first.trim().parse::<usize>().map_err(|e| e.to_string())?;
    let last = last.trim().parse::<usize>().map_err(|e| e.to_string())?;
    LineRange::from_one_based_inclusive(first, last).map_err(|e| e.to_string())
}

/// The `linecut` command definition
#[must_use]
pub fn command() -> Command {
    Command::new("linecut")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Delete a half-open range of lines from a file and write it back")
        .long_about(
            "Delete a half-open range of lines from a file and write it back.\n\n\
             Without arguments, deletes lines 823-1404 of App.tsx in the current directory.",
        )
        .arg(
            Arg::new("file")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("File to edit"),
        )
        .arg(
            Arg::new("range")
                .value_name("RANGE")
                .value_parser(value_parser!(LineRange))
                .help("Lines to delete: START..END (zero-based, end excluded) or FIRST-LAST (one-based, inclusive)"),
        )
        .arg(
            Arg::new("lines")
                .long("lines")
                .value_name("FIRST-LAST")
                .value_parser(parse_one_based)
                .conflicts_with("range")
                .help("Lines to delete, one-based and inclusive"),
        )
        .arg(
            Arg::new("plan")
                .long("plan")
                .value_name("PLAN")
                .value_parser(value_parser!(PathBuf))
                .help("TOML plan file; flags override its values"),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .action(ArgAction::SetTrue)
                .help("Fail instead of clamping when the range runs past the end of the file"),
        )
        .arg(
            Arg::new("expect-hash")
                .long("expect-hash")
                .value_name("HEX")
                .value_parser(value_parser!(ContentHash))
                .help("Refuse to edit unless the file's blake3 hash matches"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf))
                .help("Write the result here instead of overwriting FILE"),
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .short('n')
                .action(ArgAction::SetTrue)
                .help("Report what would be deleted without writing"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Output the report as JSON"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::Count)
                .help("More logging on stderr (-v info, -vv debug)"),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .action(ArgAction::SetTrue)
                .conflicts_with("verbose")
                .help("Only log errors"),
        )
}
