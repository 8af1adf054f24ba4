use std::io::{self, Write};

use log::{debug, error};

use smallsh::{config::ShellOpts, event::EventLoop};

fn main() {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();
	let opts = ShellOpts::from_args();
	debug!("starting with {:?}",opts);

	let code = match EventLoop::new(opts).and_then(|mut event_loop| event_loop.listen()) {
		Ok(code) => code,
		Err(e) => {
			error!("fatal: {:?}",e);
			let _ = writeln!(io::stderr(),"smallsh: {}",e);
			1
		}
	};
	std::process::exit(code)
}
