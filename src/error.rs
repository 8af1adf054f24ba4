use std::{ffi::NulError, fmt::Display, io};

use nix::errno::Errno;

pub type ShResult<T> = Result<T, ShErr>;

#[derive(Debug)]
pub enum ShErr {
	IoError(io::Error),
	ErrNo(Errno),
	/// A NUL byte showed up inside a word, so it can't be handed to exec
	BadArg(String),
	/// An input line that isn't valid UTF-8
	BadEncoding,
	/// `cd` could not enter the requested directory
	CdFailed { path: String, cause: io::Error },
	/// The child could not open its redirection target
	OpenFailed { path: String, stream: &'static str, errno: Errno },
	/// The child could not move a descriptor onto stdin/stdout
	DupFailed { stream: &'static str, errno: Errno },
	ExecFailed { cmd: String, errno: Errno },
	ForkFailed(Errno),
	InternalErr(String),

	// Not an actual error, used to unwind out of the main loop from `exit`
	CleanExit(i32),
}

impl ShErr {
	/// Errors that leave the shell unable to run anything else.
	pub fn is_fatal(&self) -> bool {
		match self {
			ShErr::ForkFailed(..) |
			ShErr::InternalErr(..) => true,
			ShErr::IoError(..) |
			ShErr::ErrNo(..) |
			ShErr::BadArg(..) |
			ShErr::BadEncoding |
			ShErr::CdFailed { .. } |
			ShErr::OpenFailed { .. } |
			ShErr::DupFailed { .. } |
			ShErr::ExecFailed { .. } |
			ShErr::CleanExit(..) => false,
		}
	}
}

impl Display for ShErr {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			ShErr::IoError(error) => write!(f,"I/O Error: {}",error),
			ShErr::ErrNo(no) => write!(f,"{}",no.desc()),
			ShErr::BadArg(word) => write!(f,"{}: argument contains a nul byte",word.escape_debug()),
			ShErr::BadEncoding => write!(f,"input is not valid UTF-8, line skipped"),
			ShErr::CdFailed { path, cause } => write!(f,"cd: {}: {}",path,cause),
			ShErr::OpenFailed { path, stream, errno } => write!(f,"cannot open {} for {}: {}",path,stream,errno.desc()),
			ShErr::DupFailed { stream, errno } => write!(f,"dup2 {}: {}",stream,errno.desc()),
			ShErr::ExecFailed { cmd, errno } => write!(f,"{}: {}",cmd,errno.desc()),
			ShErr::ForkFailed(errno) => write!(f,"fork: {}",errno.desc()),
			ShErr::InternalErr(msg) => write!(f,"Internal Error: {}",msg),
			ShErr::CleanExit(_) => write!(f, ""),
		}
	}
}

impl std::error::Error for ShErr {}

impl From<io::Error> for ShErr {
	fn from(value: io::Error) -> Self {
		ShErr::IoError(value)
	}
}

impl From<Errno> for ShErr {
	fn from(value: Errno) -> Self {
		ShErr::ErrNo(value)
	}
}

impl From<NulError> for ShErr {
	fn from(value: NulError) -> Self {
		let bytes = value.into_vec();
		ShErr::BadArg(String::from_utf8_lossy(&bytes).into_owned())
	}
}
