use crate::cli::Cli;
use log::{debug, info, warn};
use serde::Deserialize;
use std::{
	fs::read_to_string,
	io,
	path::{Path, PathBuf},
	sync::LazyLock,
};

pub static CONFIG_PATH: LazyLock<Option<PathBuf>> = LazyLock::new(|| {
	dirs::config_dir()
		.or_else(|| {
			warn!("can't find the system's config dir!");
			None
		})
		.map(|path| path.join("alphanum_sort.toml"))
});

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub struct Config {
	pub reverse: bool,
	pub unique: bool,
	pub skip_blank: bool,
	pub files_first: bool,
}

impl Config {
	/// Reads `path`, or the default config when `None`. Never fails: problems are
	/// logged and the defaults are used instead.
	#[must_use]
	pub fn read(path: Option<&Path>) -> Self {
		let explicit = path.is_some();
		let Some(path) = path.or(CONFIG_PATH.as_deref()) else {
			return Self::default();
		};

		match read_to_string(path) {
			Ok(config) => Self::parse(&config, path),
			Err(e) if e.kind() == io::ErrorKind::NotFound && !explicit => {
				debug!("no config at {}", path.display());
				Self::default()
			}
			Err(e) => {
				warn!("can't read config {}: {e}", path.display());
				Self::default()
			}
		}
	}

	fn parse(config: &str, path: &Path) -> Self {
		toml::from_str::<Self>(config).map_or_else(
			|e| {
				warn!("ignoring invalid config {}: {e}", path.display());
				Self::default()
			},
			|config| {
				info!("loaded config from {}", path.display());
				config
			},
		)
	}

	/// Flags on the command line switch options on, never off.
	#[must_use]
	pub fn with_cli(self, cli: &Cli) -> Self {
		Self {
			reverse: self.reverse || cli.reverse,
			unique: self.unique || cli.unique,
			skip_blank: self.skip_blank || cli.skip_blank,
			files_first: self.files_first || cli.files_first,
		}
	}
}
