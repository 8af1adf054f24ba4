use std::{env, fs, path::PathBuf};

use smallsh::{config::ShellOpts, execute::{command::exec_cmd, dispatch_exec}, prelude::*};

// Forking from a multi-threaded harness is only safe with one thread, so everything that
// spawns lives in this one test. Every wait here targets a specific foreground pid.

fn scratch_dir(name: &str) -> PathBuf {
	let dir = env::temp_dir().join(format!("smallsh-exec-{}-{}",std::process::id(),name));
	fs::create_dir_all(&dir).unwrap();
	dir
}

fn cmd(argv: &[&str]) -> Command {
	Command::new(argv.iter().map(|arg| arg.to_string()).collect())
}

fn shell() -> ShellEnv {
	ShellEnv::new(ShellOpts::default())
}

#[test]
fn foreground_execution() {
	let dir = scratch_dir("fg");
	let out = dir.join("out.txt");

	// Output redirection into a fresh file
	let mut shenv = shell();
	exec_cmd(&cmd(&["echo", "hi"]).with_output(&out), &mut shenv).unwrap();
	assert_eq!(fs::read_to_string(&out).unwrap(), "hi\n");
	assert_eq!(shenv.mode().last_status(), ExitOutcome::Exited(0));
	assert!(shenv.jobs().is_empty());

	// An existing output file is truncated
	fs::write(&out, "a much longer line that should disappear\n").unwrap();
	exec_cmd(&cmd(&["echo", "short"]).with_output(&out), &mut shenv).unwrap();
	assert_eq!(fs::read_to_string(&out).unwrap(), "short\n");

	// Both redirections at once
	let input = dir.join("in.txt");
	let copy = dir.join("copy.txt");
	fs::write(&input, "line one\nline two\n").unwrap();
	exec_cmd(&cmd(&["cat"]).with_input(&input).with_output(&copy), &mut shenv).unwrap();
	assert_eq!(fs::read_to_string(&copy).unwrap(), "line one\nline two\n");
	assert_eq!(shenv.mode().last_status(), ExitOutcome::Exited(0));

	// A missing input file fails inside the child, before the output file is created
	let never = dir.join("never.txt");
	let result = exec_cmd(&cmd(&["cat"]).with_input(dir.join("nope.txt")).with_output(&never), &mut shenv);
	assert!(result.is_ok());
	assert_eq!(shenv.mode().last_status(), ExitOutcome::Exited(1));
	assert!(!never.exists());

	// Unknown program
	exec_cmd(&cmd(&["smallsh-no-such-command-here"]), &mut shenv).unwrap();
	assert_eq!(shenv.mode().last_status(), ExitOutcome::Exited(1));

	// Exit codes and signal deaths are both recorded
	exec_cmd(&cmd(&["sh", "-c", "exit 3"]), &mut shenv).unwrap();
	assert_eq!(shenv.mode().last_status(), ExitOutcome::Exited(3));
	exec_cmd(&cmd(&["sh", "-c", "kill -TERM $$"]), &mut shenv).unwrap();
	assert_eq!(shenv.mode().last_status(), ExitOutcome::Signaled(15));

	// Foreground-only mode ignores the background request
	let mut shenv = shell();
	shenv.mode().toggle_fg_only();
	exec_cmd(&cmd(&["sh", "-c", "exit 4"]).in_background(true), &mut shenv).unwrap();
	assert!(shenv.jobs().is_empty());
	assert_eq!(shenv.mode().last_status(), ExitOutcome::Exited(4));

	// Builtins run in the shell and leave the status alone
	let mut shenv = shell();
	shenv.mode_mut().set_last_status(ExitOutcome::Exited(7));
	dispatch_exec(&cmd(&["status"]), &mut shenv).unwrap();
	assert_eq!(shenv.mode().last_status(), ExitOutcome::Exited(7));
	assert!(matches!(dispatch_exec(&cmd(&["exit"]), &mut shenv), Err(ShErr::CleanExit(0))));

	fs::remove_dir_all(dir).unwrap();
}
