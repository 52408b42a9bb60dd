//! Small getopt-style option parsing and usage rendering.
//!
//! Options are declared as [`OptionSpec`]s: a [`Trigger`] (`-v`, `--verbose`
//! or both) plus the exact number of parameters that must follow it.
//! [`Parser::parse`] splits an argument vector into recognized options and
//! positional arguments, or reports the first problem it finds.
//!
//! ```
//! use optkit::{OptionSpec, Parser, Trigger};
//!
//! let output = OptionSpec::new(Trigger::mixed('o', "output")).with_parameters(1);
//! let parser = Parser::new(vec![output.clone()]);
//!
//! let parsed = parser.parse(&["in.txt", "-o", "out.txt"]).unwrap();
//! assert_eq!(parsed.get(&output), Some(&["out.txt".to_string()][..]));
//! assert_eq!(parsed.positionals(), ["in.txt"]);
//!
//! let err = parser.parse(&["--output"]).unwrap_err();
//! assert_eq!(
//!     err.description(),
//!     "[-o|--output] requires 1 parameters, parameters [] are given"
//! );
//! ```
//!
//! What this crate does not do: `--` does not end option parsing, long options
//! are never abbreviated, and `--name=value` is not split.

mod error;
mod help;
mod normalize;
mod parser;
mod spec;
mod trigger;

pub use error::{OptionError, Result};
pub use help::{MAX_LINE_WIDTH, help_text, options_table};
pub use normalize::normalize;
pub use parser::{Parsed, ParsedOption, Parser};
pub use spec::OptionSpec;
pub use trigger::{Trigger, is_option_token};
