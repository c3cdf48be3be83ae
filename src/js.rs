/*!
# HTMLPress: Inline JS.

There's no tokenizer here, so comment detection is purely textual. The
structured rules only strip `//` comments that sit on a line by themselves,
which keeps URLs and regex literals intact; the aggressive rules strip
everything from `//` to the end of the line, and do not.
*/

use crate::pipeline::{
	replace_all,
	trim,
};
use regex::Regex;
use std::sync::LazyLock;



/// # Block Comment.
static RE_BLOCK_COMMENT: LazyLock<Regex> = LazyLock::new(||
	Regex::new(r"(?s)/\*.*?\*/").expect("Invalid regex.")
);

/// # Comment-Only Line.
static RE_LINE_COMMENT_ALONE: LazyLock<Regex> = LazyLock::new(||
	Regex::new(r"(?m)^\s*//.*$").expect("Invalid regex.")
);

/// # Comment Through End of Line.
static RE_LINE_COMMENT: LazyLock<Regex> = LazyLock::new(||
	Regex::new(r"//.*").expect("Invalid regex.")
);

/// # Two or More Line Breaks.
static RE_BLANK_LINES: LazyLock<Regex> = LazyLock::new(||
	Regex::new(r"\n{2,}").expect("Invalid regex.")
);

/// # Any Whitespace.
static RE_WHITESPACE: LazyLock<Regex> = LazyLock::new(||
	Regex::new(r"\s+").expect("Invalid regex.")
);

/// # Semicolon, Close Brace.
static RE_SEMI_BRACE: LazyLock<Regex> = LazyLock::new(||
	Regex::new(r";\s*\}").expect("Invalid regex.")
);



#[must_use]
/// # Minify JS (Structured).
///
/// Line breaks are kept, so ASI-dependent code keeps working.
pub(super) fn minify_structured(src: &str) -> String {
	let mut out = src.to_owned();
	replace_all(&mut out, &RE_BLOCK_COMMENT, "");
	replace_all(&mut out, &RE_LINE_COMMENT_ALONE, "");
	replace_all(&mut out, &RE_BLANK_LINES, "\n");
	trim(&mut out);
	out
}

#[must_use]
/// # Strip Line Comments.
///
/// Remove everything from `//` through the end of each line, URLs and all.
pub(super) fn strip_line_comments(src: &str) -> String {
	let mut out = src.to_owned();
	replace_all(&mut out, &RE_LINE_COMMENT, "");
	out
}

#[must_use]
/// # Minify JS (Aggressive).
pub(super) fn minify_aggressive(src: &str) -> String {
	let mut out = strip_line_comments(src);
	replace_all(&mut out, &RE_BLOCK_COMMENT, "");
	replace_all(&mut out, &RE_WHITESPACE, " ");
	replace_all(&mut out, &RE_SEMI_BRACE, ";}");
	trim(&mut out);
	out
}



#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn t_minify_structured() {
		for (raw, expected) in [
			("let x = 1; // keep\n", "let x = 1; // keep"),
			("// drop me\nlet x=1;", "let x=1;"),
			("\n  // one\n  // two\nfoo();\n\n\nbar();\n", "foo();\nbar();"),
			("/* a\n b */let y = 2;", "let y = 2;"),
			("const re = /https?:\\/\\//;", "const re = /https?:\\/\\//;"),
			("load('//cdn.example.com/x.js');", "load('//cdn.example.com/x.js');"),
			("", ""),
		] {
			assert_eq!(minify_structured(raw), expected, "{raw:?}");
		}
	}

	#[test]
	fn t_strip_line_comments() {
		assert_eq!(
			strip_line_comments("a(); // one\n// two\nb();"),
			"a(); \n\nb();",
		);

		// This is lossy!
		assert_eq!(
			strip_line_comments("go('https://example.com');"),
			"go('https:",
		);
	}

	#[test]
	fn t_minify_aggressive() {
		for (raw, expected) in [
			("\nlet a = 1; // one\nlet b = 2;\n", "let a = 1; let b = 2;"),
			("/* x */ if (a) {\n  b();\n}\n", "if (a) { b();}"),
			("f(); ;  }", "f(); ;}"),
			("", ""),
		] {
			assert_eq!(minify_aggressive(raw), expected, "{raw:?}");
		}
	}
}
