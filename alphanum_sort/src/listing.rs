use crate::config::Config;
use alphanum::alphanum_cmp_bytes;
use anyhow::{Context as _, Result, ensure};
use log::{info, trace};
use std::{
	cmp::Ordering,
	fs,
	io::Write,
	path::{Path, PathBuf},
};
use walkdir::{DirEntry, WalkDir};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Entry {
	/// Relative to the listed directory.
	pub path: PathBuf,
	pub is_dir: bool,
}

/// Entries of `dir` sorted by file name. With `recursive`, every directory is
/// followed by its own sorted entries.
pub fn list(dir: &Path, recursive: bool, config: &Config) -> Result<Vec<Entry>> {
	let Config {
		reverse,
		files_first,
		..
	} = *config;

	let metadata = fs::metadata(dir).with_context(|| format!("can't list {}", dir.display()))?;
	ensure!(
		metadata.is_dir(),
		"can't list {}: not a directory",
		dir.display()
	);

	let walk = WalkDir::new(dir)
		.min_depth(1)
		.max_depth(if recursive { usize::MAX } else { 1 })
		.sort_by(move |a, b| entry_cmp(a, b, reverse, files_first));

	let mut entries = Vec::new();

	for entry in walk {
		let entry = entry.with_context(|| format!("can't list {}", dir.display()))?;
		trace!("{}", entry.path().display());

		let path = entry
			.path()
			.strip_prefix(dir)
			.unwrap_or_else(|_| entry.path())
			.to_path_buf();

		entries.push(Entry {
			path,
			is_dir: entry.file_type().is_dir(),
		});
	}

	info!("listed {} entries in {}", entries.len(), dir.display());

	Ok(entries)
}

fn entry_cmp(a: &DirEntry, b: &DirEntry, reverse: bool, files_first: bool) -> Ordering {
	let kind = a.file_type().is_dir().cmp(&b.file_type().is_dir());
	let kind = if files_first { kind } else { kind.reverse() };

	let name = alphanum_cmp_bytes(
		a.file_name().as_encoded_bytes(),
		b.file_name().as_encoded_bytes(),
	);
	let name = if reverse { name.reverse() } else { name };

	kind.then(name)
}

pub fn write_all(entries: &[Entry], mut out: impl Write) -> Result<()> {
	for entry in entries {
		let slash = if entry.is_dir { "/" } else { "" };
		writeln!(out, "{}{slash}", entry.path.display()).context("can't write output")?;
	}

	Ok(())
}
