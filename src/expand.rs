use crate::prelude::*;

/// The marker that expands to the shell's pid
pub const PID_MARKER: &str = "$$";

/// Expand the first `$$` in `token` to `pid`.
///
/// Only one occurrence per word is substituted; anything after it is left as written.
/// Words without the marker come back as an owned copy, untouched.
pub fn expand_pid(token: &str, pid: Pid) -> String {
	if !token.contains(PID_MARKER) {
		return token.to_string()
	}
	let expanded = token.replacen(PID_MARKER, &pid.as_raw().to_string(), 1);
	trace!("expanded {} to {}",token,expanded);
	expanded
}

/// Split a raw input line into whitespace-delimited words. No quoting, no escapes.
pub fn tokenize(line: &str) -> impl Iterator<Item = &str> {
	line.split_whitespace()
}
