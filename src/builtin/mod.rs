pub mod cd;
pub mod control;
pub mod status;

use crate::prelude::*;

pub const BUILTINS: [&str; 3] = [
	"exit", "cd", "status",
];

pub fn is_builtin(name: &str) -> bool {
	BUILTINS.contains(&name)
}

/// Builtins run inside the shell itself; redirections and `&` don't apply to them.
pub fn exec_builtin(cmd: &Command, shenv: &mut ShellEnv) -> ShResult<()> {
	match cmd.name() {
		"exit" => control::exit(),
		"cd" => cd::execute(cmd),
		"status" => status::execute(shenv, &mut io::stdout()),
		name => Err(ShErr::InternalErr(format!("`{}` is not a builtin",name)))
	}
}
