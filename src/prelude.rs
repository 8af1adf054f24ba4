pub use std::{
	collections::HashSet,
	env,
	ffi::CString,
	fmt::{
		self,
		Display
	},
	io::{
		self,
		Write
	},
	os::fd::{
		AsRawFd,
		BorrowedFd,
		RawFd
	},
	path::{
		Path,
		PathBuf
	},
	sync::{
		atomic::{
			AtomicBool,
			Ordering
		},
		Arc
	}
};

pub use libc::{
	STDIN_FILENO,
	STDOUT_FILENO,
	STDERR_FILENO
};
pub use nix::{
	errno::Errno,
	fcntl::{
		open,
		OFlag
	},
	sys::{
		signal::{
			Signal,
			SigHandler
		},
		stat::Mode,
		wait::{
			WaitPidFlag,
			WaitStatus
		}
	},
	unistd::{
		close,
		dup2,
		execvp,
		fork,
		getpid,
		ForkResult,
		Pid
	}
};
pub use log::{
	debug,
	info,
	trace,
	warn
};
pub use crate::{
	error::{
		ShErr,
		ShResult
	},
	parse::Command,
	shellenv::ShellEnv,
	signal::ShellMode,
	jobs::{
		ExitOutcome,
		JobTable
	},
};
