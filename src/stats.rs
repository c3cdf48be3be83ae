/*!
# HTMLPress: Statistics.
*/

use dactyl::NiceU64;
use std::num::NonZeroU64;



#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// # Before/After Sizes.
///
/// UTF-8 byte lengths of the original and minified documents.
pub(super) struct Stats {
	/// # Original Size.
	before: NonZeroU64,

	/// # Minified Size.
	after: u64,
}

impl Stats {
	#[must_use]
	/// # New.
	pub(super) const fn new(before: NonZeroU64, after: u64) -> Self {
		Self { before, after }
	}

	#[must_use]
	/// # Original Size.
	pub(super) const fn before(self) -> u64 { self.before.get() }

	#[must_use]
	/// # Minified Size.
	pub(super) const fn after(self) -> u64 { self.after }

	#[expect(clippy::cast_precision_loss, reason = "Documents aren't that big.")]
	#[must_use]
	/// # Compression Ratio.
	///
	/// The percentage of the original size that was saved. This would only
	/// be negative if the "minified" document somehow came out bigger.
	pub(super) fn ratio(self) -> f64 {
		let before = self.before.get() as f64;
		(before - self.after as f64) / before * 100.0
	}

	#[must_use]
	/// # Report Lines.
	///
	/// Return the human-readable size/ratio summary, one line per entry:
	/// original size, minified size, and compression ratio.
	pub(super) fn report(self) -> [String; 3] {
		[
			format!(
				"Original size:   {} KiB ({} bytes)",
				kib(self.before()),
				NiceU64::from(self.before()).as_str(),
			),
			format!(
				"Compressed size: {} KiB ({} bytes)",
				kib(self.after()),
				NiceU64::from(self.after()).as_str(),
			),
			format!("Compression ratio: {:.2}%", self.ratio()),
		]
	}
}



#[expect(clippy::cast_precision_loss, reason = "Documents aren't that big.")]
/// # Kibibytes.
///
/// Format a byte count as KiB with two decimal places.
fn kib(bytes: u64) -> String { format!("{:.2}", bytes as f64 / 1024.0) }
