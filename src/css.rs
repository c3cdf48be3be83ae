/*!
# HTMLPress: Inline CSS.
*/

use crate::pipeline::{
	replace_all,
	trim,
};
use regex::Regex;
use std::sync::LazyLock;



/// # Block Comment.
static RE_COMMENT: LazyLock<Regex> = LazyLock::new(||
	Regex::new(r"(?s)/\*.*?\*/").expect("Invalid regex.")
);

/// # Two or More Whitespaces.
static RE_WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(||
	Regex::new(r"\s{2,}").expect("Invalid regex.")
);

/// # Any Whitespace.
static RE_WHITESPACE: LazyLock<Regex> = LazyLock::new(||
	Regex::new(r"\s+").expect("Invalid regex.")
);

/// # Indentation.
static RE_INDENT: LazyLock<Regex> = LazyLock::new(||
	Regex::new(r"\n\s+").expect("Invalid regex.")
);

/// # Semicolon, Line Break.
static RE_SEMI_BREAK: LazyLock<Regex> = LazyLock::new(||
	Regex::new(r";\s*\n").expect("Invalid regex.")
);

/// # Open Brace, Whitespace.
static RE_OPEN_BRACE: LazyLock<Regex> = LazyLock::new(||
	Regex::new(r"\{\s*").expect("Invalid regex.")
);

/// # Whitespace, Close Brace.
static RE_CLOSE_BRACE: LazyLock<Regex> = LazyLock::new(||
	Regex::new(r"\s*\}").expect("Invalid regex.")
);

/// # Colon, Whitespace.
static RE_COLON: LazyLock<Regex> = LazyLock::new(||
	Regex::new(r":\s*").expect("Invalid regex.")
);

/// # Last Semicolon in a Rule.
static RE_LAST_SEMI: LazyLock<Regex> = LazyLock::new(||
	Regex::new(r"\s*;\s*\}").expect("Invalid regex.")
);

/// # Whitespace Around Punctuation.
static RE_PUNCT: LazyLock<Regex> = LazyLock::new(||
	Regex::new(r"\s*([{};:])\s*").expect("Invalid regex.")
);



#[must_use]
/// # Minify CSS (Structured).
///
/// Comments are stripped and whitespace trimmed around braces and colons.
/// Space _before_ a colon or semicolon is left alone.
pub(super) fn minify_structured(src: &str) -> String {
	let mut out = src.to_owned();
	replace_all(&mut out, &RE_COMMENT, "");
	replace_all(&mut out, &RE_WHITESPACE_RUN, " ");
	replace_all(&mut out, &RE_INDENT, "\n");
	replace_all(&mut out, &RE_SEMI_BREAK, ";");
	replace_all(&mut out, &RE_OPEN_BRACE, "{");
	replace_all(&mut out, &RE_CLOSE_BRACE, "}");
	replace_all(&mut out, &RE_COLON, ":");
	trim(&mut out);
	out
}

#[must_use]
/// # Minify CSS (Aggressive).
///
/// Same idea, but whitespace is squashed on both sides of all the usual
/// punctuation, and the redundant semicolon closing out each rule is
/// dropped.
pub(super) fn minify_aggressive(src: &str) -> String {
	let mut out = src.to_owned();
	replace_all(&mut out, &RE_COMMENT, "");
	replace_all(&mut out, &RE_WHITESPACE, " ");
	replace_all(&mut out, &RE_LAST_SEMI, "}");
	replace_all(&mut out, &RE_PUNCT, "$1");
	trim(&mut out);
	out
}
