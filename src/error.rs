//! Error types for spec parsing and value rendering.
//!
//! The engine fails in exactly two ways:
//!
//! - [`ParseError`]: the spec string is syntactically invalid or combines
//!   incompatible flags (e.g. a precision with a hex type)
//! - [`RenderError`]: the spec is well-formed but cannot be applied to the
//!   supplied value (e.g. `c` with a code point outside Unicode, or a numeric
//!   type against a string)
//!
//! Both carry the original spec string and enough context to reproduce the
//! problem. The engine never logs, retries, or substitutes a fallback
//! rendering; every failure is returned to the caller as a typed value.
//!
//! The umbrella [`Error`] enum wraps both kinds for the convenience functions
//! in the crate root, which parse and render in one call.
//!
//! ## Examples
//!
//! ```rust
//! use specfmt::{format, Error};
//!
//! let result = format(4.5, ".3q");
//! assert!(matches!(result, Err(Error::Parse(_))));
//!
//! if let Err(err) = format(4.5, ".3q") {
//!     eprintln!("bad spec: {}", err);
//!     // Error messages include the spec string and the offending position
//! }
//! ```

use thiserror::Error;

/// What went wrong while parsing a format spec.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// The trailing type letter is not one of `sbcdoxXneEfFgG%`.
    #[error("unknown presentation type {0:?}")]
    UnknownType(char),

    /// A character was left over after the grammar was consumed.
    #[error("unexpected character {0:?}")]
    UnexpectedChar(char),

    /// A `.` was not followed by any digits.
    #[error("`.` must be followed by a precision")]
    MissingPrecision,

    /// Width or precision digits overflowed the platform integer.
    #[error("field number too large")]
    NumberOverflow,

    /// Precision given with a type that renders whole code points or digits.
    #[error("precision not allowed with type {0:?}")]
    PrecisionNotAllowed(char),

    /// `,` given with a type that never groups digits.
    #[error("grouping not allowed with type {0:?}")]
    GroupingNotAllowed(char),

    /// An explicit sign given with a non-numeric type.
    #[error("sign not allowed with type {0:?}")]
    SignNotAllowed(char),

    /// `#` given with a type that has no alternate form.
    #[error("alternate form not allowed with type {0:?}")]
    AlternateNotAllowed(char),

    /// `=` alignment given with the string type.
    #[error("'=' alignment not allowed with strings")]
    SignAwareAlignOnString,
}

/// A format spec that could not be parsed.
///
/// Carries the full spec string, the character position the parser stopped
/// at, and a typed [`ParseErrorKind`].
///
/// # Examples
///
/// ```rust
/// use specfmt::{FormatSpec, ParseErrorKind};
///
/// let err = FormatSpec::parse("10.q").unwrap_err();
/// assert_eq!(err.kind, ParseErrorKind::MissingPrecision);
/// assert_eq!(err.position, 3);
/// assert!(err.to_string().contains("10.q"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid format spec {spec:?} at position {position}: {kind}")]
pub struct ParseError {
    /// The spec string as given.
    pub spec: String,
    /// Character (not byte) offset of the problem.
    pub position: usize,
    /// What exactly was wrong.
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub(crate) fn new(spec: &str, position: usize, kind: ParseErrorKind) -> Self {
        ParseError {
            spec: spec.to_string(),
            position,
            kind,
        }
    }
}

/// A well-formed spec that cannot be applied to the supplied value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// The presentation type and the value kind do not match,
    /// e.g. `d` against a float or `s` against an integer.
    #[error("cannot format a {value_kind} value with type {type_char:?} (spec {spec:?})")]
    TypeMismatch {
        spec: String,
        type_char: char,
        value_kind: &'static str,
    },

    /// `c` was asked to render an integer that is not a Unicode scalar value.
    #[error("{code_point} is not a valid Unicode code point (spec {spec:?})")]
    InvalidCodePoint { spec: String, code_point: i64 },

    /// A sign policy was requested for a string value.
    #[error("sign not allowed when formatting a string (spec {spec:?})")]
    SignOnString { spec: String },

    /// Grouping was requested for a string value.
    #[error("grouping not allowed when formatting a string (spec {spec:?})")]
    GroupingOnString { spec: String },

    /// `=` alignment (or a leading `0` fill) was requested for a string value.
    #[error("'=' alignment not allowed when formatting a string (spec {spec:?})")]
    SignAwareOnString { spec: String },

    /// `#` was requested for a string value.
    #[error("alternate form not allowed when formatting a string (spec {spec:?})")]
    AlternateOnString { spec: String },

    /// A precision was requested while formatting an integer as a whole number.
    #[error("precision not allowed when formatting an integer (spec {spec:?})")]
    PrecisionOnInteger { spec: String },
}

impl RenderError {
    pub(crate) fn type_mismatch(spec: &str, type_char: char, value_kind: &'static str) -> Self {
        RenderError::TypeMismatch {
            spec: spec.to_string(),
            type_char,
            value_kind,
        }
    }

    pub(crate) fn invalid_code_point(spec: &str, code_point: i64) -> Self {
        RenderError::InvalidCodePoint {
            spec: spec.to_string(),
            code_point,
        }
    }
}

/// Either failure mode, for callers that parse and render in one step.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

pub type Result<T> = std::result::Result<T, Error>;
