use env_logger::Env;

const DEFAULT_LOG_FILTER: &str = "warn";

pub fn setup(verbose: u8) {
	let filter = match verbose {
		0 => DEFAULT_LOG_FILTER,
		1 => "info",
		2 => "debug",
		_ => "trace",
	};

	env_logger::Builder::from_env(Env::default().default_filter_or(filter))
		.format_target(false)
		.init();
}
