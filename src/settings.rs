/*!
# HTMLPress: Settings.
*/

use argyle::Argument;
use crate::{
	Profile,
	PressError,
};
use std::path::{
	Path,
	PathBuf,
};



/// # Default Input.
const DEFAULT_INPUT: &str = "index.html";

/// # Default Output Directory.
const DEFAULT_OUTPUT_DIR: &str = "docs";

/// # Output File Name.
const OUTPUT_FILE: &str = "index.html";



#[derive(Debug, Clone, Eq, PartialEq)]
/// # Run Settings.
///
/// Paths are relative to the working directory unless absolute.
pub(super) struct Settings {
	/// # Source Document.
	input: PathBuf,

	/// # Output Directory.
	output_dir: PathBuf,

	/// # Rule Set.
	profile: Profile,
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			input: PathBuf::from(DEFAULT_INPUT),
			output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
			profile: Profile::default(),
		}
	}
}

impl Settings {
	#[cfg(test)]
	#[must_use]
	/// # New.
	pub(super) const fn new(input: PathBuf, output_dir: PathBuf, profile: Profile) -> Self {
		Self { input, output_dir, profile }
	}

	/// # From CLI.
	///
	/// ## Errors
	///
	/// Returns an error for unknown arguments or profiles, and the help and
	/// version pseudo-errors when those were requested.
	pub(super) fn from_cli() -> Result<Self, PressError> {
		let args = argyle::args()
			.with_keywords(include!(concat!(env!("OUT_DIR"), "/argyle.rs")));

		let mut out = Self::default();
		for arg in args { out.push(arg)?; }
		Ok(out)
	}

	/// # Apply Argument.
	fn push(&mut self, arg: Argument) -> Result<(), PressError> {
		match arg {
			Argument::Key("-h" | "--help") => return Err(PressError::PrintHelp),
			Argument::Key("-V" | "--version") => return Err(PressError::PrintVersion),

			Argument::KeyWithValue("-i" | "--input", s) => {
				self.input = PathBuf::from(s);
			},
			Argument::KeyWithValue("-o" | "--output", s) => {
				self.output_dir = PathBuf::from(s);
			},
			Argument::KeyWithValue("--profile", s) => {
				self.profile = Profile::try_from(s.as_str())?;
			},

			// There's nothing else we accept.
			_ => return Err(PressError::InvalidCli),
		}

		Ok(())
	}

	#[must_use]
	/// # Source Document.
	pub(super) fn input(&self) -> &Path { &self.input }

	#[must_use]
	/// # Output Directory.
	pub(super) fn output_dir(&self) -> &Path { &self.output_dir }

	#[must_use]
	/// # Output File.
	pub(super) fn output_file(&self) -> PathBuf { self.output_dir.join(OUTPUT_FILE) }

	#[must_use]
	/// # Rule Set.
	pub(super) const fn profile(&self) -> Profile { self.profile }
}



#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn t_default() {
		let settings = Settings::default();
		assert_eq!(settings.input(), Path::new("index.html"));
		assert_eq!(settings.output_dir(), Path::new("docs"));
		assert_eq!(settings.output_file(), Path::new("docs").join("index.html"));
		assert_eq!(settings.profile(), Profile::Structured);
	}

	#[test]
	fn t_push() {
		let mut settings = Settings::default();
		for arg in [
			Argument::KeyWithValue("-i", "src/page.html".to_owned()),
			Argument::KeyWithValue("--output", "/tmp/out".to_owned()),
			Argument::KeyWithValue("--profile", "aggressive".to_owned()),
		] {
			assert!(settings.push(arg).is_ok());
		}

		assert_eq!(settings.input(), Path::new("src/page.html"));
		assert_eq!(settings.output_file(), Path::new("/tmp/out/index.html"));
		assert_eq!(settings.profile(), Profile::Aggressive);
	}

	#[test]
	fn t_push_errors() {
		let mut settings = Settings::default();
		assert_eq!(
			settings.push(Argument::Key("--help")),
			Err(PressError::PrintHelp),
		);
		assert_eq!(
			settings.push(Argument::Key("-V")),
			Err(PressError::PrintVersion),
		);
		assert_eq!(
			settings.push(Argument::KeyWithValue("--profile", "lossy".to_owned())),
			Err(PressError::InvalidProfile),
		);
		assert_eq!(
			settings.push(Argument::Other("index.html".to_owned())),
			Err(PressError::InvalidCli),
		);

		// Nothing should have changed.
		assert_eq!(settings, Settings::default());
	}
}
