use anyhow::{Context as _, Result};
use clap::Parser as _;
use cli::Cli;
use config::Config;
use std::io::{self, BufWriter, Write as _};

mod cli;
mod config;
mod lines;
mod listing;
mod trace;

fn main() -> Result<()> {
	let cli = Cli::parse();

	trace::setup(cli.verbose);

	let config = Config::read(cli.config.as_deref()).with_cli(&cli);

	match run(&cli, &config) {
		Err(e) if is_broken_pipe(&e) => Ok(()),
		result => result,
	}
}

fn run(cli: &Cli, config: &Config) -> Result<()> {
	let mut out = BufWriter::new(io::stdout().lock());

	if let Some(dir) = &cli.list {
		let entries = listing::list(dir, cli.recursive, config)?;
		listing::write_all(&entries, &mut out)?;
	} else {
		let mut lines = lines::read_all(&cli.files)?;
		lines::sort(&mut lines, config);
		lines::write_all(&lines, &mut out)?;
	}

	out.flush().context("can't write output")
}

fn is_broken_pipe(e: &anyhow::Error) -> bool {
	e.chain()
		.filter_map(|e| e.downcast_ref::<io::Error>())
		.any(|e| e.kind() == io::ErrorKind::BrokenPipe)
}
