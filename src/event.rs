use crate::{config::ShellOpts, execute::dispatch_exec, prelude::*, prompt::{Input, LineReader}};

/// What the loop should do after handling one line
#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
	Continue,
	Exit(i32),
}

pub struct EventLoop {
	shenv: ShellEnv,
	reader: LineReader,
}

impl EventLoop {
	pub fn new(opts: ShellOpts) -> ShResult<Self> {
		let reader = LineReader::new(&opts)?;
		Ok(Self::with_reader(ShellEnv::new(opts), reader))
	}

	pub fn with_reader(shenv: ShellEnv, reader: LineReader) -> Self {
		Self { shenv, reader }
	}

	pub fn shenv(&self) -> &ShellEnv {
		&self.shenv
	}

	/// Run until `exit` or end of input. Returns the shell's exit code.
	pub fn listen(&mut self) -> ShResult<i32> {
		self.shenv.mode().install_handlers()?;
		debug!("Event loop started.");
		let result = self.event_listen();
		self.shenv.shutdown()?;
		result
	}

	fn event_listen(&mut self) -> ShResult<i32> {
		loop {
			self.shenv.reap_and_report(&mut io::stdout())?;

			let prompt = self.shenv.opts().prompt.clone();
			let line = match self.reader.read_line(&prompt) {
				Ok(Input::Line(line)) => line,
				Ok(Input::Interrupted) => continue,
				Ok(Input::Eof) => {
					debug!("end of input");
					return Ok(0)
				}
				Err(e @ ShErr::BadEncoding) => {
					report(&e)?;
					continue
				}
				Err(e) => return Err(e)
			};

			if let Flow::Exit(code) = self.handle_input(&line)? {
				return Ok(code)
			}
		}
	}

	/// Parse and run one line. Recoverable errors are reported here and swallowed.
	pub fn handle_input(&mut self, line: &str) -> ShResult<Flow> {
		let Some(cmd) = self.shenv.parse(line) else {
			return Ok(Flow::Continue)
		};
		match dispatch_exec(&cmd, &mut self.shenv) {
			Ok(()) => Ok(Flow::Continue),
			Err(ShErr::CleanExit(code)) => Ok(Flow::Exit(code)),
			Err(e) if e.is_fatal() => Err(e),
			Err(e) => {
				report(&e)?;
				Ok(Flow::Continue)
			}
		}
	}
}

/// One diagnostic line on stderr for an error the shell survives
fn report(err: &ShErr) -> ShResult<()> {
	writeln!(io::stderr(),"smallsh: {}",err)?;
	Ok(())
}
