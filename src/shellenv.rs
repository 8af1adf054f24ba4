use crate::{config::ShellOpts, parse::parse_line, prelude::*};

/// Everything the main loop threads through parsing and execution.
#[derive(Debug)]
pub struct ShellEnv {
	pid: Pid,
	mode: ShellMode,
	jobs: JobTable,
	opts: ShellOpts,
}

impl ShellEnv {
	pub fn new(opts: ShellOpts) -> Self {
		Self {
			pid: getpid(),
			mode: ShellMode::new(),
			jobs: JobTable::new(),
			opts,
		}
	}

	pub fn pid(&self) -> Pid {
		self.pid
	}

	pub fn mode(&self) -> &ShellMode {
		&self.mode
	}

	pub fn mode_mut(&mut self) -> &mut ShellMode {
		&mut self.mode
	}

	pub fn jobs(&self) -> &JobTable {
		&self.jobs
	}

	pub fn jobs_mut(&mut self) -> &mut JobTable {
		&mut self.jobs
	}

	pub fn opts(&self) -> &ShellOpts {
		&self.opts
	}

	pub fn parse(&self, line: &str) -> Option<Command> {
		parse_line(line, &self.mode, self.pid, self.opts.max_args)
	}

	/// Collect finished background children and announce them, unless in foreground-only mode.
	pub fn reap_and_report<W: Write>(&mut self, out: &mut W) -> ShResult<Vec<(Pid, ExitOutcome)>> {
		let done = self.jobs.reap()?;
		JobTable::report(&done, self.mode.is_fg_only(), out)?;
		Ok(done)
	}

	/// Leave nothing running behind us.
	pub fn shutdown(&mut self) -> ShResult<()> {
		self.jobs.kill_all()?;
		Ok(())
	}
}
