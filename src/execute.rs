pub mod command;
pub mod redirect;

use crate::{builtin, prelude::*};

/// Route a parsed command to the builtin it names, or out to an external program.
pub fn dispatch_exec(cmd: &Command, shenv: &mut ShellEnv) -> ShResult<()> {
	if builtin::is_builtin(cmd.name()) {
		trace!("dispatching builtin: {}",cmd.name());
		builtin::exec_builtin(cmd, shenv)
	} else {
		command::exec_cmd(cmd, shenv)
	}
}
