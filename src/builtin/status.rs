use crate::prelude::*;

pub fn execute<W: Write>(shenv: &ShellEnv, out: &mut W) -> ShResult<()> {
	writeln!(out,"{}",shenv.mode().last_status())?;
	out.flush()?;
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::ShellOpts;

	fn status_line(shenv: &ShellEnv) -> String {
		let mut out = Vec::<u8>::new();
		execute(shenv, &mut out).unwrap();
		String::from_utf8(out).unwrap()
	}

	#[test]
	fn reports_exit_value_before_anything_ran() {
		let shenv = ShellEnv::new(ShellOpts::default());
		assert_eq!(status_line(&shenv), "exit value 0\n");
	}

	#[test]
	fn reports_signal() {
		let mut shenv = ShellEnv::new(ShellOpts::default());
		shenv.mode_mut().set_last_status(ExitOutcome::Signaled(2));
		assert_eq!(status_line(&shenv), "terminated by signal 2\n");
	}
}
