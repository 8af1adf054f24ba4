use nix::sys::signal::{sigaction, signal, SaFlags, SigAction, SigSet};

use crate::prelude::*;

pub const FG_ONLY_ENTER: &str = "\nEntering foreground-only mode (& is now ignored)\n";
pub const FG_ONLY_EXIT: &str = "\nExiting foreground-only mode\n";

/// Flip the foreground-only flag and return the notice for the new state.
///
/// This is the only place the flag is ever written. It is a single atomic op with no
/// allocation so it can run from inside the SIGTSTP handler.
fn toggle(flag: &AtomicBool) -> &'static str {
	if flag.fetch_xor(true, Ordering::SeqCst) {
		FG_ONLY_EXIT
	} else {
		FG_ONLY_ENTER
	}
}

/// Shell-wide mode state.
///
/// `fg_only` is shared with the SIGTSTP handler, everything else only ever changes on the main loop.
#[derive(Debug)]
pub struct ShellMode {
	fg_only: Arc<AtomicBool>,
	last_status: ExitOutcome,
}

impl ShellMode {
	pub fn new() -> Self {
		Self {
			fg_only: Arc::new(AtomicBool::new(false)),
			last_status: ExitOutcome::default(),
		}
	}

	pub fn is_fg_only(&self) -> bool {
		self.fg_only.load(Ordering::SeqCst)
	}

	pub fn toggle_fg_only(&self) -> &'static str {
		toggle(&self.fg_only)
	}

	pub fn last_status(&self) -> ExitOutcome {
		self.last_status
	}

	pub fn set_last_status(&mut self, status: ExitOutcome) {
		debug!("last foreground status is now {:?}",status);
		self.last_status = status;
	}

	/// Install the shell's own signal dispositions. Called once at startup.
	///
	/// SIGINT is ignored outright. SIGTSTP toggles foreground-only mode and announces it
	/// with a raw write to stdout.
	pub fn install_handlers(&self) -> ShResult<()> {
		unsafe {
			signal(Signal::SIGINT, SigHandler::SigIgn)?;
		}
		let flag = Arc::clone(&self.fg_only);
		let on_sigtstp = move || {
			let notice = toggle(&flag);
			let stdout = unsafe { BorrowedFd::borrow_raw(STDOUT_FILENO) };
			let _ = nix::unistd::write(stdout, notice.as_bytes());
		};
		unsafe {
			signal_hook::low_level::register(signal_hook::consts::SIGTSTP, on_sigtstp)?;
		}
		info!("signal handlers installed");
		Ok(())
	}
}

impl Default for ShellMode {
	fn default() -> Self {
		Self::new()
	}
}

/// Signal dispositions for a freshly forked child, applied before exec.
///
/// Foreground children die on SIGINT, background children ignore it. Ctrl-Z belongs to
/// the shell alone, so every child ignores SIGTSTP.
pub fn child_dispositions(background: bool) -> ShResult<()> {
	let on_sigint = if background { SigHandler::SigIgn } else { SigHandler::SigDfl };
	let sigint = SigAction::new(on_sigint, SaFlags::empty(), SigSet::empty());
	let sigtstp = SigAction::new(SigHandler::SigIgn, SaFlags::empty(), SigSet::empty());
	unsafe {
		sigaction(Signal::SIGINT, &sigint)?;
		sigaction(Signal::SIGTSTP, &sigtstp)?;
	}
	Ok(())
}
