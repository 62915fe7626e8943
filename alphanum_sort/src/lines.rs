use crate::config::Config;
use alphanum::{AlphanumSortExt as _, alphanum_cmp};
use anyhow::{Context as _, Result};
use log::{debug, info};
use std::{
	cmp::Ordering,
	fs::File,
	io::{self, BufRead, BufReader, Write},
	path::{Path, PathBuf},
};

/// Reads every line of `inputs` in order. No inputs, or `-`, means stdin.
pub fn read_all(inputs: &[PathBuf]) -> Result<Vec<String>> {
	let mut lines = Vec::new();

	if inputs.is_empty() {
		read_from(io::stdin().lock(), "stdin", &mut lines)?;
	}

	for input in inputs {
		if input == Path::new("-") {
			read_from(io::stdin().lock(), "stdin", &mut lines)?;
		} else {
			let file = File::open(input).with_context(|| format!("can't open {}", input.display()))?;
			read_from(BufReader::new(file), &input.display().to_string(), &mut lines)?;
		}
	}

	info!("read {} lines from {} inputs", lines.len(), inputs.len().max(1));

	Ok(lines)
}

fn read_from(reader: impl BufRead, name: &str, lines: &mut Vec<String>) -> Result<()> {
	debug!("reading {name}");

	for line in reader.lines() {
		lines.push(line.with_context(|| format!("can't read {name}"))?);
	}

	Ok(())
}

pub fn sort(lines: &mut Vec<String>, config: &Config) {
	if config.skip_blank {
		lines.retain(|line| !line.trim().is_empty());
	}

	if config.reverse {
		lines.sort_by(|a, b| alphanum_cmp(b, a));
	} else {
		lines.alphanum_sort();
	}

	if config.unique {
		let before = lines.len();
		lines.dedup_by(|a, b| alphanum_cmp(a, b) == Ordering::Equal);
		debug!("dropped {} duplicate lines", before - lines.len());
	}
}

pub fn write_all(lines: &[String], mut out: impl Write) -> Result<()> {
	for line in lines {
		writeln!(out, "{line}").context("can't write output")?;
	}

	Ok(())
}
