//! # specfmt
//!
//! A format-specification mini-language: parse compact specifier strings
//! like `">10"`, `"08d"`, or `"+#,.2f"` and render strings, integers, and
//! floats accordingly.
//!
//! ## What is a format spec?
//!
//! A spec is a small string describing how a value should look in a field:
//! fill and alignment, sign policy, minimum width, digit grouping, precision,
//! and a presentation type:
//!
//! ```text
//! [[fill]align][sign][#][0][width][,][.precision][type]
//! ```
//!
//! ## Key Features
//!
//! - **One grammar, three value kinds**: strings truncate and pad; integers
//!   render in bases 2/8/10/16 or as code points; floats render in fixed,
//!   scientific, general, or percent notation
//! - **Correctly rounded**: float digits come from an exact big-integer
//!   decimal expansion with ties to even, never from the binary value's
//!   approximations
//! - **No ambient state**: the locale-number group separator is an explicit
//!   option, so output is deterministic on every host
//! - **Typed failures**: malformed specs and inapplicable values surface as
//!   [`ParseError`] and [`RenderError`]; there is no fallback rendering
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! specfmt = "0.1"
//! ```
//!
//! ### One-shot formatting
//!
//! ```rust
//! use specfmt::format;
//!
//! assert_eq!(format(4.5, ".3f").unwrap(), "4.500");
//! assert_eq!(format("Jack", ">10").unwrap(), "      Jack");
//! assert_eq!(format(10145236, ",.2f").unwrap(), "10,145,236.00");
//! assert_eq!(format(3, "2d").unwrap(), " 3");
//! assert_eq!(format(-5, "08d").unwrap(), "-0000005");
//! assert_eq!(format(255, "#x").unwrap(), "0xff");
//! assert_eq!(format(0.25, ".0%").unwrap(), "25%");
//! ```
//!
//! ### Reusing parsed specs
//!
//! A spec is parsed once and rendered any number of times; [`SpecCache`]
//! memoizes the parsed form when the same spec strings recur:
//!
//! ```rust
//! use specfmt::{FormatSpec, Renderer, Value};
//!
//! let renderer = Renderer::new();
//! let spec = FormatSpec::parse("10,.1f").unwrap();
//!
//! let mut report = String::new();
//! for n in [4127, 4098, 7678, 998, 10103] {
//!     report.push_str(&renderer.render(&Value::Int(n), &spec).unwrap());
//!     report.push('\n');
//! }
//! assert!(report.starts_with("   4,127.0\n"));
//! ```
//!
//! ### An injected group separator
//!
//! The `n` presentation type groups digits with a separator supplied through
//! [`FormatOptions`] rather than the process locale:
//!
//! ```rust
//! use specfmt::{format_with_options, FormatOptions};
//!
//! let de = FormatOptions::new().with_group_separator('.');
//! assert_eq!(format_with_options(1234567, "n", &de).unwrap(), "1.234.567");
//! ```
//!
//! ### Exact rounding
//!
//! Rounding goes through the value a float actually stores, with ties to
//! even:
//!
//! ```rust
//! use specfmt::format;
//!
//! // 2.675 is stored as 2.67499999..., so it rounds down
//! assert_eq!(format(2.675, ".2f").unwrap(), "2.67");
//! // exact ties go to the even neighbor
//! assert_eq!(format(0.5, ".0f").unwrap(), "0");
//! assert_eq!(format(1.5, ".0f").unwrap(), "2");
//! ```
//!
//! ## Concurrency
//!
//! The engine is a pure function pair over immutable inputs: no I/O, no
//! shared mutable state, nothing to synchronize. A [`Renderer`] can be
//! shared or cloned freely across threads.
//!
//! ## Demos
//!
//! The `demos/` directory holds small runnable walkthroughs:
//!
//! - **`grocery_list.rs`** - lining up a receipt with widths and alignments
//! - **`number_table.rs`** - integer and float columns
//! - **`custom_separator.rs`** - locale-number grouping with an injected separator
//!
//! Run any demo with: `cargo run --example <name>`

pub mod cache;
pub mod error;
pub mod macros;
pub mod options;
pub mod render;
pub mod spec;
pub mod value;

mod decimal;
mod parse;

pub use cache::SpecCache;
pub use error::{Error, ParseError, ParseErrorKind, RenderError, Result};
pub use options::FormatOptions;
pub use render::Renderer;
pub use spec::{Align, FormatSpec, Grouping, Presentation, Sign};
pub use value::Value;

/// Parses a format spec string.
///
/// Equivalent to [`FormatSpec::parse`]; this free function reads better at
/// call sites that pair it with [`format`].
///
/// # Examples
///
/// ```rust
/// use specfmt::{parse, Align};
///
/// let spec = parse("a>10").unwrap();
/// assert_eq!(spec.fill(), Some('a'));
/// assert_eq!(spec.align(), Some(Align::Right));
/// assert_eq!(spec.width(), Some(10));
/// ```
///
/// # Errors
///
/// Returns a [`ParseError`] for malformed specs.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse(spec: &str) -> std::result::Result<FormatSpec, ParseError> {
    FormatSpec::parse(spec)
}

/// Renders `value` according to `spec` with default options.
///
/// Accepts anything convertible to a [`Value`]: string slices, the common
/// integer types, and floats.
///
/// # Examples
///
/// ```rust
/// use specfmt::format;
///
/// assert_eq!(format(65, "c").unwrap(), "A");
/// assert_eq!(format(42, "^8").unwrap(), "   42   ");
/// assert_eq!(format(3.14159, ".2e").unwrap(), "3.14e+00");
/// assert_eq!(format("hello", ".2").unwrap(), "he");
/// ```
///
/// # Errors
///
/// Returns an [`Error`] when the spec is malformed or does not apply to the
/// value.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn format<'a, V>(value: V, spec: &str) -> Result<String>
where
    V: Into<Value<'a>>,
{
    format_with_options(value, spec, &FormatOptions::default())
}

/// Renders `value` according to `spec` with the given options.
///
/// # Examples
///
/// ```rust
/// use specfmt::{format_with_options, FormatOptions};
///
/// let options = FormatOptions::new().with_group_separator('_');
/// assert_eq!(format_with_options(1234567, "n", &options).unwrap(), "1_234_567");
/// ```
///
/// # Errors
///
/// Returns an [`Error`] when the spec is malformed or does not apply to the
/// value.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn format_with_options<'a, V>(value: V, spec: &str, options: &FormatOptions) -> Result<String>
where
    V: Into<Value<'a>>,
{
    let parsed = FormatSpec::parse(spec)?;
    let renderer = Renderer::with_options(options.clone());
    Ok(renderer.render(&value.into(), &parsed)?)
}
