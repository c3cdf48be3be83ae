/*!
# HTMLPress: Minification.
*/

use crate::{
	pipeline,
	PressError,
	Settings,
	Stats,
};
use dactyl::traits::SaturatingFrom;
use std::{
	fs,
	num::NonZeroU64,
	path::Path,
};



/// # Minify a Document.
///
/// Make sure the output directory exists, read the source document, run it
/// through the pipeline, and save the result, returning the before/after
/// sizes.
///
/// ## Errors
///
/// This will return an error if the output directory cannot be created, the
/// source is unreadable or empty, or the result cannot be saved.
pub(super) fn minify(settings: &Settings) -> Result<Stats, PressError> {
	ensure_dir(settings.output_dir())?;

	// Load the file.
	let raw = read_text(settings.input())?;
	let before = NonZeroU64::new(u64::saturating_from(raw.len()))
		.ok_or(PressError::EmptyFile)?;

	// Crunch and save.
	let out = pipeline::minify(&raw, settings.profile());
	write_text(&settings.output_file(), &out)?;

	Ok(Stats::new(before, u64::saturating_from(out.len())))
}



/// # Read Text.
fn read_text(src: &Path) -> Result<String, PressError> {
	fs::read_to_string(src).map_err(|e| PressError::Read(e.kind()))
}

/// # Ensure Directory.
///
/// Create the directory, along with any missing parents, unless it
/// already exists.
fn ensure_dir(src: &Path) -> Result<(), PressError> {
	if src.is_dir() { Ok(()) }
	else {
		fs::create_dir_all(src).map_err(|e| PressError::Mkdir(e.kind()))
	}
}

/// # Write Text.
///
/// The file is written atomically, replacing whatever was there before.
fn write_text(dst: &Path, data: &str) -> Result<(), PressError> {
	write_atomic::write_file(dst, data.as_bytes())
		.map_err(|e| PressError::Write(e.kind()))
}
