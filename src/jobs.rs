use nix::sys::{signal::kill, wait::waitpid};

use crate::prelude::*;

/// How a child finished. Exactly one of the two, never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitOutcome {
	Exited(i32),
	Signaled(i32),
}

impl ExitOutcome {
	/// Interpret a wait status. Stops and continues aren't terminations, so they give `None`.
	pub fn from_wait(status: WaitStatus) -> Option<(Pid, Self)> {
		match status {
			WaitStatus::Exited(pid, code) => Some((pid, Self::Exited(code))),
			WaitStatus::Signaled(pid, sig, _) => Some((pid, Self::Signaled(sig as i32))),
			_ => None
		}
	}
	pub fn is_signaled(&self) -> bool {
		matches!(self, Self::Signaled(_))
	}
}

impl Default for ExitOutcome {
	fn default() -> Self {
		Self::Exited(0)
	}
}

impl Display for ExitOutcome {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Exited(code) => write!(f,"exit value {}",code),
			Self::Signaled(sig) => write!(f,"terminated by signal {}",sig),
		}
	}
}

/// Background children the shell has launched and not yet collected.
///
/// The kernel's process table is the real source of truth; completions are discovered with
/// a non-blocking wait on any child. The pids are kept so shutdown knows who to kill.
#[derive(Debug, Default)]
pub struct JobTable {
	running: HashSet<Pid>,
}

impl JobTable {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn track(&mut self, pid: Pid) {
		trace!("tracking background pid {}",pid);
		self.running.insert(pid);
	}

	pub fn running(&self) -> &HashSet<Pid> {
		&self.running
	}

	pub fn is_tracked(&self, pid: Pid) -> bool {
		self.running.contains(&pid)
	}

	pub fn len(&self) -> usize {
		self.running.len()
	}

	pub fn is_empty(&self) -> bool {
		self.running.is_empty()
	}

	/// Collect every child that has already finished, without blocking.
	pub fn reap(&mut self) -> ShResult<Vec<(Pid, ExitOutcome)>> {
		let mut done = vec![];
		loop {
			match waitpid(None, Some(WaitPidFlag::WNOHANG)) {
				Ok(WaitStatus::StillAlive) => break,
				Ok(status) => {
					if let Some((pid, outcome)) = ExitOutcome::from_wait(status) {
						debug!("reaped pid {}: {}",pid,outcome);
						self.running.remove(&pid);
						done.push((pid, outcome));
					}
				}
				Err(Errno::ECHILD) => break, // No children left at all
				Err(Errno::EINTR) => continue,
				Err(e) => return Err(e.into())
			}
		}
		Ok(done)
	}

	/// Announce finished background children. Suppressed entirely in foreground-only mode.
	pub fn report<W: Write>(done: &[(Pid, ExitOutcome)], fg_only: bool, out: &mut W) -> io::Result<()> {
		if fg_only {
			return Ok(())
		}
		for (pid, outcome) in done {
			writeln!(out,"background pid {} is done: {}",pid,outcome)?;
		}
		out.flush()
	}

	/// Kill and collect every child still alive. Returns how many were killed.
	pub fn kill_all(&mut self) -> ShResult<usize> {
		self.reap()?;
		let mut killed = 0;
		for pid in self.running.drain() {
			match kill(pid, Signal::SIGKILL) {
				Ok(()) => killed += 1,
				Err(Errno::ESRCH) => {}
				Err(e) => return Err(e.into())
			}
			loop {
				match waitpid(pid, None) {
					Err(Errno::EINTR) => continue,
					Ok(_) | Err(Errno::ECHILD) => break,
					Err(e) => return Err(e.into())
				}
			}
		}
		// Anything that finished while we were busy killing
		self.reap()?;
		if killed > 0 {
			info!("killed {} background process(es) on shutdown",killed);
		}
		Ok(killed)
	}
}
