/*!
# HTMLPress: Pipeline.

Everything here is plain text substitution; there is no DOM. That keeps
things fast and simple, but also means markup that merely _looks_ like a tag
or comment will be treated like the real thing. A `"</script>"` inside a JS
string, for example, ends the script early.
*/

use crate::{
	css,
	js,
	Profile,
};
use regex::{
	Captures,
	NoExpand,
	Regex,
};
use std::{
	borrow::Cow,
	sync::LazyLock,
};



/// # HTML Comment Opener.
const COMMENT_OPEN: &str = "<!--";

/// # HTML Comment Closer.
const COMMENT_CLOSE: &str = "-->";

/// # Conditional Comment Opener.
const CONDITIONAL_OPEN: &str = "<!--[if";

/// # Byte Order Mark.
const BOM: char = '\u{feff}';

/// # Any HTML Comment.
static RE_COMMENT: LazyLock<Regex> = LazyLock::new(||
	Regex::new(r"(?s)<!--.*?-->").expect("Invalid regex.")
);

/// # Style Element.
static RE_STYLE: LazyLock<Regex> = LazyLock::new(||
	Regex::new(r"(?is)<style[^>]*>(.*?)</style>").expect("Invalid regex.")
);

/// # Script Element.
static RE_SCRIPT: LazyLock<Regex> = LazyLock::new(||
	Regex::new(r"(?is)<script[^>]*>(.*?)</script>").expect("Invalid regex.")
);

/// # Whitespace Between Tags.
static RE_TAG_GAP: LazyLock<Regex> = LazyLock::new(||
	Regex::new(r">\s+<").expect("Invalid regex.")
);

/// # Whitespace at Either End of a Line.
static RE_LINE_EDGES: LazyLock<Regex> = LazyLock::new(||
	Regex::new(r"(?m)^\s+|\s+$").expect("Invalid regex.")
);

/// # Two or More Line Breaks.
static RE_BLANK_LINES: LazyLock<Regex> = LazyLock::new(||
	Regex::new(r"\n{2,}").expect("Invalid regex.")
);

/// # Any Whitespace Run.
static RE_WHITESPACE: LazyLock<Regex> = LazyLock::new(||
	Regex::new(r"\s+").expect("Invalid regex.")
);



#[must_use]
/// # Minify HTML.
///
/// Run the source through the rule set for the given profile and return the
/// result. This never fails, though the output may well be broken if the
/// source is sufficiently weird.
///
/// A leading byte order mark is dropped; it counts as whitespace in the
/// browser, but not to `\s`.
pub(super) fn minify(src: &str, profile: Profile) -> String {
	let mut out = src.strip_prefix(BOM).unwrap_or(src).to_owned();
	match profile {
		Profile::Structured => minify_structured(&mut out),
		Profile::Aggressive => minify_aggressive(&mut out),
	}
	out
}

/// # Structured Rules.
fn minify_structured(src: &mut String) {
	strip_comments_structured(src);
	replace_blocks(src, &RE_STYLE, "style", css::minify_structured);
	replace_blocks(src, &RE_SCRIPT, "script", js::minify_structured);
	replace_all(src, &RE_TAG_GAP, "><");
	replace_all(src, &RE_LINE_EDGES, "");
	replace_all(src, &RE_BLANK_LINES, "\n");
	trim(src);
}

/// # Aggressive Rules.
///
/// Line comments are pulled from scripts before the whitespace is flattened;
/// afterward there'd be no way to tell where they end.
fn minify_aggressive(src: &mut String) {
	replace_all(src, &RE_COMMENT, "");
	replace_blocks(src, &RE_SCRIPT, "script", js::strip_line_comments);
	replace_all(src, &RE_WHITESPACE, " ");
	replace_all(src, &RE_TAG_GAP, "><");
	trim(src);
	replace_blocks(src, &RE_STYLE, "style", css::minify_aggressive);
	replace_blocks(src, &RE_SCRIPT, "script", js::minify_aggressive);
}



/// # Strip Comments (Except Conditional Ones).
///
/// The `regex` crate has no look-around, so this is done by hand: find each
/// opener, skip it if it starts a conditional comment, otherwise drop
/// everything through the next closer.
fn strip_comments_structured(src: &mut String) {
	let mut out = String::new();
	let mut from = 0; // Where to search next.
	let mut kept = 0; // Start of the not-yet-copied text.

	while let Some(idx) = src[from..].find(COMMENT_OPEN) {
		let start = from + idx;

		// Leave conditionals be, but keep looking from the next character.
		if src[start..].starts_with(CONDITIONAL_OPEN) {
			from = start + 1;
			continue;
		}

		// No closer means nothing further along can match either.
		let Some(end) = src[start + COMMENT_OPEN.len()..].find(COMMENT_CLOSE)
		else { break; };
		let end = start + COMMENT_OPEN.len() + end + COMMENT_CLOSE.len();

		out.push_str(&src[kept..start]);
		kept = end;
		from = end;
	}

	// Nothing was removed.
	if kept == 0 { return; }

	out.push_str(&src[kept..]);
	*src = out;
}

/// # Replace Blocks.
///
/// Run the body of each matching `<tag>…</tag>` block through the callback,
/// and rewrap the result in a bare (attribute-less) tag.
fn replace_blocks(src: &mut String, re: &Regex, tag: &str, cb: fn(&str) -> String) {
	let out = re.replace_all(src.as_str(), |caps: &Captures<'_>| {
		let body = cb(&caps[1]);
		let mut out = String::with_capacity(body.len() + tag.len() * 2 + 5);
		out.push('<');
		out.push_str(tag);
		out.push('>');
		out.push_str(&body);
		out.push_str("</");
		out.push_str(tag);
		out.push('>');
		out
	});

	if let Some(out) = owned(out) { *src = out; }
}

/// # Replace All (In Place).
///
/// This is a thin wrapper around `Regex::replace_all` that only reassigns
/// the source if something actually changed. The replacement is literal
/// unless it contains capture references.
pub(super) fn replace_all(src: &mut String, re: &Regex, rep: &str) {
	let out =
		if rep.contains('$') { re.replace_all(src.as_str(), rep) }
		else { re.replace_all(src.as_str(), NoExpand(rep)) };

	if let Some(out) = owned(out) { *src = out; }
}

/// # Trim (In Place).
pub(super) fn trim(src: &mut String) {
	let end = src.trim_end().len();
	src.truncate(end);

	let start = src.len() - src.trim_start().len();
	if start != 0 { src.drain(..start); }
}

/// # Owned Output.
///
/// Return the new string if the `Cow` is owned, i.e. a replacement was
/// made.
fn owned(src: Cow<'_, str>) -> Option<String> {
	match src {
		Cow::Owned(s) => Some(s),
		Cow::Borrowed(_) => None,
	}
}



#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn t_strip_comments_structured() {
		for (raw, expected) in [
			("<p>a</p><!-- gone --><p>b</p>", "<p>a</p><p>b</p>"),
			("<!--\nmulti\nline\n--><p>x</p>", "<p>x</p>"),
			("<!-- one --><!-- two -->", ""),
			("<!---->", ""),
			(
				"<!--[if IE]><p>old</p><![endif]--><!-- gone -->",
				"<!--[if IE]><p>old</p><![endif]-->",
			),
			// An unclosed comment is left as-is.
			("<p>a</p><!-- dangling", "<p>a</p><!-- dangling"),
			("no comments here", "no comments here"),
		] {
			let mut s = raw.to_owned();
			strip_comments_structured(&mut s);
			assert_eq!(s, expected, "{raw:?}");
		}
	}

	#[test]
	fn t_structured_comments() {
		let raw = "<div><!-- note --></div><!--[if lt IE 9]><script src=\"x.js\"></script><![endif]-->";
		let out = minify(raw, Profile::Structured);
		assert!(! out.contains("<!-- note -->"));
		assert!(out.contains("<!--[if lt IE 9]>"));
		assert!(out.contains("<![endif]-->"));
	}

	#[test]
	fn t_aggressive_comments() {
		let raw = "<div><!-- note --></div><!--[if lt IE 9]><p>old</p><![endif]-->";
		let out = minify(raw, Profile::Aggressive);
		assert_eq!(out, "<div></div>");
	}

	#[test]
	fn t_tag_gap() {
		for profile in [Profile::Structured, Profile::Aggressive] {
			let out = minify("<ul>\n\t<li>One</li>   <li>Two</li>\n</ul>", profile);
			assert_eq!(out, "<ul><li>One</li><li>Two</li></ul>", "{profile}");
		}
	}

	#[test]
	fn t_structured_lines() {
		// Text keeps its line breaks, minus the padding.
		let out = minify("  <p>\n   Hello\n   World  \n</p>  \n\n", Profile::Structured);
		assert_eq!(out, "<p>\nHello\nWorld\n</p>");

		// Blank lines are swallowed whole, break and all, by the line-edge
		// trim.
		let out = minify("<p>\nHello\n\n\n   World\n</p>", Profile::Structured);
		assert_eq!(out, "<p>\nHelloWorld\n</p>");
	}

	#[test]
	fn t_aggressive_lines() {
		// Line structure does not survive.
		let out = minify("  <p>\n   Hello\n\n\n   World  \n</p>  \n\n", Profile::Aggressive);
		assert_eq!(out, "<p> Hello World </p>");
	}

	#[test]
	fn t_style() {
		let out = minify("<style> body {  color: red ; } </style>", Profile::Structured);
		assert_eq!(out, "<style>body {color:red ;}</style>");
		assert!(! out.contains("  "));
		assert!(! out.contains("{ "));
		assert!(! out.contains(": "));
		assert!(! out.contains(" }"));

		let out = minify("<style> body {  color: red ; } </style>", Profile::Aggressive);
		assert_eq!(out, "<style>body{color:red}</style>");
	}

	#[test]
	fn t_style_attributes() {
		// Attributes on the opening tag are dropped, and matching ignores
		// case.
		let out = minify("<STYLE media=\"screen\">\na { b: c; }\n</STYLE>", Profile::Structured);
		assert_eq!(out, "<style>a {b:c;}</style>");
	}

	#[test]
	fn t_script_comments() {
		// Trailing comments stay.
		let out = minify("<script>let x = 1; // keep\n</script>", Profile::Structured);
		assert!(out.contains("// keep"));
		assert_eq!(out, "<script>let x = 1; // keep</script>");

		// Full-line comments go.
		let out = minify("<script>// drop me\nlet x=1;</script>", Profile::Structured);
		assert!(! out.contains("// drop me"));
		assert_eq!(out, "<script>let x=1;</script>");

		// URLs in code are fine too.
		let out = minify("<script>\n  fetch('https://example.com');\n</script>", Profile::Structured);
		assert_eq!(out, "<script>fetch('https://example.com');</script>");
	}

	#[test]
	fn t_script_aggressive() {
		// Line comments must not swallow the statements that follow them.
		let raw = "<script type=\"module\">\n// setup\nlet a = 1; // one\n/* block */\nlet b = 2;\nif (a) { b(); }\n</script>";
		let out = minify(raw, Profile::Aggressive);
		assert_eq!(out, "<script>let a = 1; let b = 2; if (a) { b();}</script>");
	}

	#[test]
	fn t_fixture() {
		let raw = include_str!("../skel/test-assets/index.html");

		let a = minify(raw, Profile::Structured);
		assert!(a.len() < raw.len());
		assert!(! a.contains("<!-- Site header -->"));
		assert!(a.contains("<!--[if lt IE 9]>"));
		assert!(! a.contains("/* Layout */"));
		assert!(! a.contains("// Boot the menu."));
		assert!(a.contains("// inline note"));
		assert!(! a.contains(">\n<"));
		assert!(! a.contains("\n\n"));

		let b = minify(raw, Profile::Aggressive);
		assert!(b.len() < a.len());
		assert!(! b.contains("<!--"));
		assert!(! b.contains('\n'));
		assert!(! b.contains("// inline note"));
	}

	#[test]
	fn t_idempotence() {
		let raw = include_str!("../skel/test-assets/index.html");
		let once = minify(raw, Profile::Structured);
		let twice = minify(&once, Profile::Structured);

		// A second pass has nothing left to strip.
		assert!(twice.len() <= once.len());
		assert!(! twice.contains("/*"));
		assert_eq!(
			once.matches("<!--").count(),
			twice.matches("<!--").count(),
		);
	}

	#[test]
	fn t_determinism() {
		let raw = include_str!("../skel/test-assets/index.html");
		for profile in [Profile::Structured, Profile::Aggressive] {
			assert_eq!(minify(raw, profile), minify(raw, profile));
		}
	}

	#[test]
	fn t_trim() {
		for (raw, expected) in [
			("", ""),
			("   ", ""),
			("\n\tabc \n", "abc"),
			("abc", "abc"),
			(" a b ", "a b"),
		] {
			let mut s = raw.to_owned();
			trim(&mut s);
			assert_eq!(s, expected);
		}
	}

	#[test]
	fn t_bom() {
		let raw = "\u{feff}<!DOCTYPE html>\n<p>x</p>\n";
		for profile in [Profile::Structured, Profile::Aggressive] {
			assert_eq!(minify(raw, profile), "<!DOCTYPE html><p>x</p>", "{profile}");
		}
		assert_eq!(
			minify("\u{feff}<p>\nHello\n</p>", Profile::Structured),
			"<p>\nHello\n</p>",
		);

		// Only a leading mark goes.
		assert_eq!(minify("\u{feff}", Profile::Structured), "");
	}

	#[test]
	fn t_empty() {
		assert_eq!(minify("", Profile::Structured), "");
		assert_eq!(minify("", Profile::Aggressive), "");
		assert_eq!(minify(" \n\t ", Profile::Structured), "");
	}
}
