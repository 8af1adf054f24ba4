use std::io::{BufRead, IsTerminal};

use rustyline::{error::ReadlineError, DefaultEditor};

use crate::{config::ShellOpts, prelude::*};

/// Where input lines come from.
///
/// A terminal gets a line editor, anything else (pipes, files) is read line by line with
/// the prompt written straight to stdout.
pub enum LineReader {
	Editor(Box<DefaultEditor>),
	Plain(Box<dyn BufRead>),
}

/// One attempt at reading a line
#[derive(Debug, PartialEq, Eq)]
pub enum Input {
	Line(String),
	/// Ctrl-C at the prompt, the partial line is thrown away
	Interrupted,
	Eof,
}

impl LineReader {
	pub fn new(opts: &ShellOpts) -> ShResult<Self> {
		if opts.use_editor && io::stdin().is_terminal() {
			let editor = DefaultEditor::new()
				.map_err(|e| ShErr::InternalErr(format!("failed to initialize line editor: {}",e)))?;
			debug!("reading input with the line editor");
			Ok(Self::Editor(Box::new(editor)))
		} else {
			debug!("reading plain lines from stdin");
			Ok(Self::Plain(Box::new(io::stdin().lock())))
		}
	}

	pub fn from_reader<R: BufRead + 'static>(reader: R) -> Self {
		Self::Plain(Box::new(reader))
	}

	pub fn read_line(&mut self, prompt: &str) -> ShResult<Input> {
		match self {
			Self::Editor(editor) => match editor.readline(prompt) {
				Ok(line) => Ok(Input::Line(line)),
				Err(ReadlineError::Interrupted) => Ok(Input::Interrupted),
				Err(ReadlineError::Eof) => Ok(Input::Eof),
				Err(ReadlineError::Utf8Error) => Err(ShErr::BadEncoding),
				Err(ReadlineError::Io(e)) => Err(e.into()),
				Err(e) => Err(ShErr::InternalErr(e.to_string()))
			},
			Self::Plain(reader) => {
				let mut stdout = io::stdout();
				write!(stdout,"{}",prompt)?;
				stdout.flush()?;
				let mut bytes = vec![];
				loop {
					match reader.read_until(b'\n', &mut bytes) {
						Ok(0) => return Ok(Input::Eof),
						Ok(_) => break,
						Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
						Err(e) => return Err(e.into())
					}
				}
				// The whole line is consumed either way, so the next read starts clean
				let mut line = String::from_utf8(bytes).map_err(|_| ShErr::BadEncoding)?;
				let trimmed = line.trim_end_matches(['\n', '\r']).len();
				line.truncate(trimmed);
				Ok(Input::Line(line))
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn plain_reader_strips_newlines() {
		let mut reader = LineReader::from_reader(io::Cursor::new("echo hi\r\nls\n"));
		assert_eq!(reader.read_line("").unwrap(), Input::Line("echo hi".into()));
		assert_eq!(reader.read_line("").unwrap(), Input::Line("ls".into()));
		assert_eq!(reader.read_line("").unwrap(), Input::Eof);
	}

	#[test]
	fn undecodable_line_is_skipped() {
		let mut reader = LineReader::from_reader(io::Cursor::new(b"echo \xff\nstatus\n".to_vec()));
		assert!(matches!(reader.read_line(""), Err(ShErr::BadEncoding)));
		assert_eq!(reader.read_line("").unwrap(), Input::Line("status".into()));
		assert_eq!(reader.read_line("").unwrap(), Input::Eof);
	}

	#[test]
	fn last_line_without_newline() {
		let mut reader = LineReader::from_reader(io::Cursor::new("status"));
		assert_eq!(reader.read_line("").unwrap(), Input::Line("status".into()));
		assert_eq!(reader.read_line("").unwrap(), Input::Eof);
	}
}
