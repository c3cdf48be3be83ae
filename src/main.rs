/*!
# `HTMLPress`

`HTMLPress` squeezes a single HTML document. It strips comments, collapses
whitespace, and compacts inline `<style>` and `<script>` blocks, then writes
the result to an output directory and reports how much was saved.

There is no parser here. Minification is a fixed sequence of regular
expression substitutions, which is fast and predictable, but also means the
program will happily mangle a `<script>` containing the string `"</script>"`,
or CSS with a comment terminator inside a string. It is meant for a known,
well-behaved document, not arbitrary markup from the wild.



## Use

Run it from the directory containing `index.html`:
```bash
# Minify ./index.html to ./docs/index.html.
htmlpress

# Pick different paths, and the lossier rule set.
htmlpress -i site/home.html -o public --profile aggressive

# For a full list of options, run help:
htmlpress -h
```



## Profiles

Two rule sets are available, and they are _not_ equivalent:

* `structured` (default): removes comments but keeps conditional ones (`<!--[if …]>`); compacts CSS; drops `/* … */` and comment-only `//` lines from scripts but otherwise keeps their line structure; trims every line.
* `aggressive`: removes _all_ comments, flattens every whitespace run in the document to a single space, and strips `//` comments through end-of-line. This saves more bytes, and will break scripts with `//` inside strings or regular expressions (URLs, for example).
*/

#![deny(
	clippy::allow_attributes_without_reason,
	clippy::correctness,
	unreachable_pub,
	unsafe_code,
)]

#![warn(
	clippy::complexity,
	clippy::nursery,
	clippy::pedantic,
	clippy::perf,
	clippy::style,

	clippy::allow_attributes,
	clippy::clone_on_ref_ptr,
	clippy::create_dir,
	clippy::filetype_is_file,
	clippy::format_push_string,
	clippy::get_unwrap,
	clippy::impl_trait_in_params,
	clippy::lossy_float_literal,
	clippy::missing_assert_message,
	clippy::missing_docs_in_private_items,
	clippy::panic_in_result_fn,
	clippy::pub_without_shorthand,
	clippy::rest_pat_in_fully_bound_structs,
	clippy::semicolon_inside_block,
	clippy::str_to_string,
	clippy::string_to_string,
	clippy::todo,
	clippy::undocumented_unsafe_blocks,
	clippy::unneeded_field_pattern,
	clippy::unseparated_literal_suffix,
	clippy::unwrap_in_result,

	macro_use_extern_crate,
	missing_copy_implementations,
	missing_docs,
	non_ascii_idents,
	trivial_casts,
	trivial_numeric_casts,
	unused_crate_dependencies,
	unused_extern_crates,
	unused_import_braces,
)]



mod css;
mod error;
mod js;
mod minify;
mod pipeline;
mod profile;
mod settings;
mod stats;

use error::PressError;
use fyi_msg::Msg;
use profile::Profile;
use settings::Settings;
use stats::Stats;



/// # Main.
fn main() {
	match main__() {
		Ok(()) => {},
		Err(e @ (PressError::PrintHelp | PressError::PrintVersion)) => {
			println!("{}", e.as_str());
		},
		Err(e) => {
			Msg::error(e.to_string()).eprint();
			std::process::exit(1);
		},
	}
}

#[inline]
/// # Actual Main.
fn main__() -> Result<(), PressError> {
	let settings = Settings::from_cli()?;
	let stats = minify::minify(&settings)?;

	Msg::success("Minification complete.").with_newline(true).print();
	Msg::info(format!("Output directory: {}", settings.output_dir().display()))
		.with_newline(true)
		.print();
	for line in stats.report() {
		Msg::info(line).with_newline(true).print();
	}

	Ok(())
}
