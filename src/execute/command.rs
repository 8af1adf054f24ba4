use std::convert::Infallible;

use nix::sys::wait::waitpid;

use crate::{prelude::*, signal::child_dispositions};

use super::redirect::{redirect, Stream};

/// Run an external command in a child process.
///
/// Background requests are dropped while foreground-only mode is on. Only fork failure is
/// returned as an error; anything that goes wrong after the fork stays inside the child and
/// shows up as its exit status.
pub fn exec_cmd(cmd: &Command, shenv: &mut ShellEnv) -> ShResult<()> {
	let background = cmd.is_background() && !shenv.mode().is_fg_only();
	let argv = cmd.c_argv()?;

	// Anything still buffered would otherwise be written twice
	io::stdout().flush()?;

	match unsafe { fork() } {
		Ok(ForkResult::Child) => exec_child(cmd, &argv, background),
		Ok(ForkResult::Parent { child }) => handle_parent(child, background, shenv),
		Err(errno) => Err(ShErr::ForkFailed(errno))
	}
}

fn exec_child(cmd: &Command, argv: &[CString], background: bool) -> ! {
	let err = match setup_and_exec(cmd, argv, background) {
		Ok(never) => match never {},
		Err(err) => err
	};
	let _ = writeln!(io::stderr(),"{}",err);
	// Exit hooks and buffers belong to the parent
	unsafe { libc::_exit(1) }
}

fn setup_and_exec(cmd: &Command, argv: &[CString], background: bool) -> ShResult<Infallible> {
	child_dispositions(background)?;
	redirect(Stream::Stdin, cmd.input(), background)?;
	redirect(Stream::Stdout, cmd.output(), background)?;
	let program = argv.first().ok_or_else(|| ShErr::InternalErr("empty argv".into()))?;
	execvp(program, argv).map_err(|errno| ShErr::ExecFailed { cmd: cmd.name().to_string(), errno })
}

fn handle_parent(child: Pid, background: bool, shenv: &mut ShellEnv) -> ShResult<()> {
	if background {
		shenv.jobs_mut().track(child);
		let mut stdout = io::stdout();
		writeln!(stdout,"background pid is {}",child)?;
		stdout.flush()?;
		return Ok(())
	}

	let outcome = wait_fg(child)?;
	shenv.mode_mut().set_last_status(outcome);
	if outcome.is_signaled() {
		let mut stdout = io::stdout();
		writeln!(stdout,"{}",outcome)?;
		stdout.flush()?;
	}
	Ok(())
}

/// Block until `child` terminates.
pub fn wait_fg(child: Pid) -> ShResult<ExitOutcome> {
	debug!("waiting on foreground pid {}",child);
	loop {
		match waitpid(child, None) {
			Ok(status) => {
				if let Some((_, outcome)) = ExitOutcome::from_wait(status) {
					return Ok(outcome)
				}
			}
			Err(Errno::EINTR) => continue,
			Err(e) => return Err(e.into())
		}
	}
}
