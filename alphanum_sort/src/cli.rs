use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Sort lines or directory entries in alphanumeric order, so that "item2" comes before
/// "item10".
#[derive(Debug, Parser)]
#[command(name = "alphanum-sort", version)]
pub struct Cli {
	/// Files to sort line by line; reads stdin when empty or "-"
	pub files: Vec<PathBuf>,

	/// List the entries of a directory instead of sorting lines
	#[arg(short, long, value_name = "DIR", conflicts_with = "files")]
	pub list: Option<PathBuf>,

	/// Descend into subdirectories when listing
	#[arg(short = 'R', long, requires = "list")]
	pub recursive: bool,

	/// Reverse the order
	#[arg(short, long)]
	pub reverse: bool,

	/// Keep only the first of lines that compare equal
	#[arg(short, long, conflicts_with = "list")]
	pub unique: bool,

	/// Drop lines that are empty or whitespace only
	#[arg(long, conflicts_with = "list")]
	pub skip_blank: bool,

	/// List files before directories
	#[arg(long)]
	pub files_first: bool,

	/// Read options from this file instead of the default config
	#[arg(long, value_name = "PATH")]
	pub config: Option<PathBuf>,

	/// More logging; repeat for more detail
	#[arg(short, long, action = ArgAction::Count)]
	pub verbose: u8,
}
