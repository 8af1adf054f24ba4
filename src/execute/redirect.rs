use crate::{prelude::*, utils::RustFd};

/// Where backgrounded commands read from and write to when nothing else was asked for
pub const DEV_NULL: &str = "/dev/null";

/// Permission bits for files created by `>`
pub const CREATE_MODE: u32 = 0o644;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
	Stdin,
	Stdout,
}

impl Stream {
	pub fn fd(self) -> RawFd {
		match self {
			Stream::Stdin => STDIN_FILENO,
			Stream::Stdout => STDOUT_FILENO,
		}
	}
	pub fn flags(self) -> OFlag {
		match self {
			Stream::Stdin => OFlag::O_RDONLY,
			Stream::Stdout => OFlag::O_WRONLY | OFlag::O_CREAT | OFlag::O_TRUNC,
		}
	}
	pub fn label(self) -> &'static str {
		match self {
			Stream::Stdin => "input",
			Stream::Stdout => "output",
		}
	}
}

/// Pick the file a stream should be rebound to, if any.
///
/// An explicit path always wins. Without one, background commands get the null device so
/// they never sit on the terminal.
pub fn target(path: Option<&Path>, background: bool) -> Option<&Path> {
	match path {
		Some(path) => Some(path),
		None if background => Some(Path::new(DEV_NULL)),
		None => None
	}
}

/// Rebind `stream` in the current process. Only ever called in a forked child.
///
/// The opened file is closed on every path out of here, including a failed dup2.
pub fn redirect(stream: Stream, path: Option<&Path>, background: bool) -> ShResult<()> {
	let Some(path) = target(path, background) else {
		return Ok(())
	};
	let file = RustFd::open(path, stream.flags(), Mode::from_bits_truncate(CREATE_MODE))
		.map_err(|errno| ShErr::OpenFailed { path: path.display().to_string(), stream: stream.label(), errno })?;
	file.dup2(&stream.fd())
		.map_err(|errno| ShErr::DupFailed { stream: stream.label(), errno })?;
	Ok(())
}
