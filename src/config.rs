use clap::{builder::RangedU64ValueParser, Arg, ArgAction, ArgMatches};

use crate::parse::DEFAULT_MAX_ARGS;

pub const DEFAULT_PROMPT: &str = ": ";

/// Startup options, fixed for the life of the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellOpts {
	pub prompt: String,
	pub max_args: usize,
	pub use_editor: bool,
}

impl Default for ShellOpts {
	fn default() -> Self {
		Self {
			prompt: DEFAULT_PROMPT.into(),
			max_args: DEFAULT_MAX_ARGS,
			use_editor: true,
		}
	}
}

pub fn cli() -> clap::Command {
	clap::Command::new("smallsh")
		.about("A small shell with foreground-only mode and background jobs")
		.arg(
			Arg::new("prompt")
				.long("prompt")
				.value_name("STR")
				.default_value(DEFAULT_PROMPT)
				.help("Text shown before each input line")
		)
		.arg(
			Arg::new("max-args")
				.long("max-args")
				.value_name("N")
				// One slot is reserved, so anything under two could never hold a command
				.value_parser(RangedU64ValueParser::<usize>::new().range(2..))
				.default_value("512")
				.help("Argument slots per command; extra words are dropped")
		)
		.arg(
			Arg::new("no-editor")
				.long("no-editor")
				.action(ArgAction::SetTrue)
				.help("Read plain lines from stdin even on a terminal")
		)
}

impl ShellOpts {
	pub fn from_args() -> Self {
		Self::from_matches(&cli().get_matches())
	}

	pub fn from_matches(matches: &ArgMatches) -> Self {
		let defaults = Self::default();
		Self {
			prompt: matches.get_one::<String>("prompt").cloned().unwrap_or(defaults.prompt),
			max_args: matches.get_one::<usize>("max-args").copied().unwrap_or(defaults.max_args),
			use_editor: !matches.get_flag("no-editor"),
		}
	}
}
