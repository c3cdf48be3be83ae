/*!
# HTMLPress: Profiles.
*/

use crate::PressError;
use std::fmt;



#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
/// # Rule Set.
///
/// The two profiles apply different rules in a different order, and do not
/// produce equivalent output, so the caller has to pick one.
pub(super) enum Profile {
	#[default]
	/// # Structured.
	///
	/// Conditional comments survive, and script bodies keep their line
	/// structure (and any trailing `//` comments that follow code).
	Structured,

	/// # Aggressive.
	///
	/// All comments go, and every whitespace run in the document is flattened
	/// to a single space.
	Aggressive,
}

impl fmt::Display for Profile {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl TryFrom<&str> for Profile {
	type Error = PressError;

	fn try_from(src: &str) -> Result<Self, Self::Error> {
		let src = src.trim();
		if src.eq_ignore_ascii_case("structured") {
			Ok(Self::Structured)
		}
		else if src.eq_ignore_ascii_case("aggressive") {
			Ok(Self::Aggressive)
		}
		else { Err(PressError::InvalidProfile) }
	}
}

impl Profile {
	#[must_use]
	/// # As Str.
	pub(super) const fn as_str(self) -> &'static str {
		match self {
			Self::Structured => "structured",
			Self::Aggressive => "aggressive",
		}
	}
}
