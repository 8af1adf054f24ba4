use crate::prelude::*;

/// Where `cd` goes with no argument: `$HOME`, or `/` if that's unset
pub fn default_dir() -> PathBuf {
	env::var("HOME").unwrap_or("/".into()).into()
}

pub fn execute(cmd: &Command) -> ShResult<()> {
	let new_pwd = cmd.argv().get(1).map(PathBuf::from).unwrap_or_else(default_dir);
	env::set_current_dir(&new_pwd)
		.map_err(|cause| ShErr::CdFailed { path: new_pwd.display().to_string(), cause })?;
	if let Ok(pwd) = env::current_dir() {
		env::set_var("PWD", pwd);
	}
	debug!("changed directory to {}",new_pwd.display());
	Ok(())
}
