/*!
# HTMLPress: Errors
*/

use std::{
	error::Error,
	fmt,
	io,
};



/// # Help Text.
const HELP: &str = concat!(r"
     __,---.__
  ,-'         `-.__
&/           `._\ _\
/               ''._    ", "\x1b[38;5;199mHTMLPress\x1b[0;38;5;69m v", env!("CARGO_PKG_VERSION"), "\x1b[0m", r#"
|   ,             (∞)   Squeeze one HTML
|__,'`-..--|__|--''     document, quickly.

USAGE:
    htmlpress [FLAGS] [OPTIONS]

FLAGS:
    -h, --help            Print help information and exit.
    -V, --version         Print program version and exit.

OPTIONS:
    -i, --input <FILE>    The HTML document to minify.
                          [default: index.html]
    -o, --output <DIR>    Directory to write the minified index.html to; it
                          will be created if missing. [default: docs]
        --profile <NAME>  Rule set to apply: "structured" keeps conditional
                          comments and line structure inside scripts;
                          "aggressive" flattens everything.
                          [default: structured]
"#);



#[derive(Debug, Copy, Clone, Eq, PartialEq)]
/// # Generic Error.
pub(super) enum PressError {
	/// # Empty Input.
	EmptyFile,

	/// # Bad CLI Argument.
	InvalidCli,

	/// # Bad Profile Name.
	InvalidProfile,

	/// # Unable to Create Output Directory.
	Mkdir(io::ErrorKind),

	/// # Unable to Read Input.
	Read(io::ErrorKind),

	/// # Unable to Write Output.
	Write(io::ErrorKind),

	/// # Print Help (Not an Error).
	PrintHelp,

	/// # Print Version (Not an Error).
	PrintVersion,
}

impl fmt::Display for PressError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Mkdir(kind) | Self::Read(kind) | Self::Write(kind) =>
				write!(f, "{} ({kind})", self.as_str()),
			_ => f.write_str(self.as_str()),
		}
	}
}

impl Error for PressError {}

impl PressError {
	/// # As Str.
	///
	/// The static part of the message; I/O variants get their error kind
	/// tacked on by `Display`.
	pub(super) const fn as_str(self) -> &'static str {
		match self {
			Self::EmptyFile => "The input document is empty.",
			Self::InvalidCli => "Invalid or unexpected CLI argument(s).",
			Self::InvalidProfile => r#"The profile must be "structured" or "aggressive"."#,
			Self::Mkdir(_) => "Unable to create the output directory.",
			Self::Read(_) => "Unable to read the input document.",
			Self::Write(_) => "Unable to write the minified document.",
			Self::PrintHelp => HELP,
			Self::PrintVersion => concat!("HTMLPress v", env!("CARGO_PKG_VERSION")),
		}
	}
}
