use crate::{expand::{expand_pid, tokenize}, prelude::*};

/// Argument slots per command, the last one is reserved for the exec terminator
pub const DEFAULT_MAX_ARGS: usize = 512;

/// Comments start with this, but only in the command name position
pub const COMMENT: char = '#';

/// One parsed input line, ready for dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
	argv: Vec<String>,
	input: Option<PathBuf>,
	output: Option<PathBuf>,
	background: bool,
}

impl Command {
	pub fn new(argv: Vec<String>) -> Self {
		Self { argv, input: None, output: None, background: false }
	}
	pub fn with_input(mut self, path: impl Into<PathBuf>) -> Self {
		self.input = Some(path.into());
		self
	}
	pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
		self.output = Some(path.into());
		self
	}
	pub fn in_background(mut self, background: bool) -> Self {
		self.background = background;
		self
	}
	pub fn name(&self) -> &str {
		self.argv.first().map(String::as_str).unwrap_or_default()
	}
	pub fn argv(&self) -> &[String] {
		&self.argv
	}
	pub fn input(&self) -> Option<&Path> {
		self.input.as_deref()
	}
	pub fn output(&self) -> Option<&Path> {
		self.output.as_deref()
	}
	pub fn is_background(&self) -> bool {
		self.background
	}
	/// The argument vector as C strings, built before forking so the child doesn't have to
	pub fn c_argv(&self) -> ShResult<Vec<CString>> {
		self.argv.iter()
			.map(|arg| CString::new(arg.as_str()).map_err(ShErr::from))
			.collect()
	}
}

/// Parse one input line into a `Command`.
///
/// Returns `None` for blank lines and comments. `<` and `>` take the next word as a path,
/// `&` is never an argument and only requests the background when it is the last word and
/// the shell is not in foreground-only mode. Words past `max_args - 1` are dropped.
pub fn parse_line(line: &str, mode: &ShellMode, pid: Pid, max_args: usize) -> Option<Command> {
	let arg_limit = max_args.saturating_sub(1);
	let mut cmd = Command::new(vec![]);
	let mut words = tokenize(line).peekable();

	while let Some(word) = words.next() {
		if cmd.argv.len() >= arg_limit {
			warn!("argument limit of {} reached, dropping the rest of the line",arg_limit);
			break
		}
		match word {
			"<" => cmd.input = words.next().map(|path| PathBuf::from(expand_pid(path, pid))),
			">" => cmd.output = words.next().map(|path| PathBuf::from(expand_pid(path, pid))),
			"&" => {
				if words.peek().is_none() && !mode.is_fg_only() {
					cmd.background = true;
				}
			}
			_ => cmd.argv.push(expand_pid(word, pid)),
		}
	}

	if cmd.argv.is_empty() || cmd.name().starts_with(COMMENT) {
		return None
	}
	debug!("parsed command: {:?}",cmd);
	Some(cmd)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn pid() -> Pid {
		Pid::from_raw(777)
	}

	fn parse(line: &str) -> Option<Command> {
		parse_line(line, &ShellMode::new(), pid(), DEFAULT_MAX_ARGS)
	}

	fn argv(cmd: &Command) -> Vec<&str> {
		cmd.argv().iter().map(String::as_str).collect()
	}

	#[test]
	fn simple_command() {
		let cmd = parse("ls -la /tmp").unwrap();
		assert_eq!(argv(&cmd), ["ls", "-la", "/tmp"]);
		assert_eq!(cmd.input(), None);
		assert_eq!(cmd.output(), None);
		assert!(!cmd.is_background());
	}

	#[test]
	fn redirections_are_not_arguments() {
		let cmd = parse("sort < in.txt > out.txt").unwrap();
		assert_eq!(argv(&cmd), ["sort"]);
		assert_eq!(cmd.input(), Some(Path::new("in.txt")));
		assert_eq!(cmd.output(), Some(Path::new("out.txt")));
	}

	#[test]
	fn redirection_paths_expand_pid() {
		let cmd = parse("echo hi > out$$").unwrap();
		assert_eq!(cmd.output(), Some(Path::new("out777")));
	}

	#[test]
	fn trailing_redirect_without_path() {
		let cmd = parse("cat <").unwrap();
		assert_eq!(argv(&cmd), ["cat"]);
		assert_eq!(cmd.input(), None);
	}

	#[test]
	fn final_ampersand_requests_background() {
		let cmd = parse("sleep 5 &").unwrap();
		assert_eq!(argv(&cmd), ["sleep", "5"]);
		assert!(cmd.is_background());
	}

	#[test]
	fn non_final_ampersand_is_dropped() {
		let cmd = parse("echo & hello").unwrap();
		assert_eq!(argv(&cmd), ["echo", "hello"]);
		assert!(!cmd.is_background());

		let cmd = parse("echo a & &").unwrap();
		assert_eq!(argv(&cmd), ["echo", "a"]);
		assert!(cmd.is_background());
	}

	#[test]
	fn ampersand_ignored_in_fg_only_mode() {
		let mode = ShellMode::new();
		mode.toggle_fg_only();
		let cmd = parse_line("sleep 5 &", &mode, pid(), DEFAULT_MAX_ARGS).unwrap();
		assert_eq!(argv(&cmd), ["sleep", "5"]);
		assert!(!cmd.is_background());
	}

	#[test]
	fn background_does_not_leak_between_lines() {
		assert!(parse("sleep 1 &").unwrap().is_background());
		assert!(!parse("sleep 1").unwrap().is_background());
	}

	#[test]
	fn blank_and_comment_lines_are_skipped() {
		assert_eq!(parse(""), None);
		assert_eq!(parse("    \t "), None);
		assert_eq!(parse("# a comment"), None);
		assert_eq!(parse("#echo hi > file"), None);
		assert_eq!(parse("&"), None);
		assert_eq!(parse("> out.txt"), None);
	}

	#[test]
	fn hash_inside_arguments_is_literal() {
		let cmd = parse("echo #not-a-comment").unwrap();
		assert_eq!(argv(&cmd), ["echo", "#not-a-comment"]);
	}

	#[test]
	fn arguments_expand_pid() {
		let cmd = parse("echo $$ pid$$").unwrap();
		assert_eq!(argv(&cmd), ["echo", "777", "pid777"]);
	}

	#[test]
	fn argument_overflow_truncates() {
		let line = (0..10).map(|n| n.to_string()).collect::<Vec<_>>().join(" ") + " &";
		let cmd = parse_line(&line, &ShellMode::new(), pid(), 5).unwrap();
		assert_eq!(argv(&cmd), ["0", "1", "2", "3"]);
		assert!(!cmd.is_background());
	}

	#[test]
	fn c_argv_rejects_nul_bytes() {
		let cmd = Command::new(vec!["echo".into(), "a\0b".into()]);
		assert!(matches!(cmd.c_argv(), Err(ShErr::BadArg(_))));
		let cmd = Command::new(vec!["echo".into(), "ok".into()]);
		assert_eq!(cmd.c_argv().unwrap().len(), 2);
	}
}
