use crate::prelude::*;

/// Owned file descriptor that closes itself when dropped.
///
/// Standard streams are never closed through this type, even if one ends up wrapped.
#[derive(Eq, PartialEq, Debug)]
pub struct RustFd {
	fd: RawFd,
}

impl RustFd {
	/// Open `path` with the given flags. New files get `mode` permission bits.
	pub fn open(path: &Path, flags: OFlag, mode: Mode) -> nix::Result<Self> {
		let fd = open(path, flags | OFlag::O_CLOEXEC, mode)?;
		trace!("opened {} as fd {}",path.display(),fd);
		Ok(Self { fd })
	}

	/// Duplicate this descriptor onto `target`, replacing whatever `target` pointed at.
	///
	/// The duplicate doesn't inherit close-on-exec, so it survives into the exec'd program.
	pub fn dup2<T: AsRawFd>(&self, target: &T) -> nix::Result<()> {
		let target_fd = target.as_raw_fd();
		if self.fd == target_fd {
			return Ok(())
		}
		dup2(self.fd, target_fd)?;
		Ok(())
	}

	pub fn close(&mut self) -> nix::Result<()> {
		if !self.is_valid() {
			return Ok(())
		}
		let fd = std::mem::replace(&mut self.fd, -1);
		if matches!(fd, STDIN_FILENO | STDOUT_FILENO | STDERR_FILENO) {
			return Ok(())
		}
		close(fd)
	}

	pub fn is_valid(&self) -> bool {
		self.fd >= 0
	}
}

impl AsRawFd for RustFd {
	fn as_raw_fd(&self) -> RawFd {
		self.fd
	}
}

impl Drop for RustFd {
	fn drop(&mut self) {
		let _ = self.close();
	}
}
