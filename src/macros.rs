//! Convenience macro for literal specs.

/// Parses a format spec known at the call site to be valid.
///
/// This is sugar for [`FormatSpec::parse`](crate::FormatSpec::parse) followed
/// by an unwrap, meant for literal specs. For specs built at runtime, call
/// `parse` and handle the error.
///
/// # Panics
///
/// Panics if the spec string is malformed.
///
/// # Examples
///
/// ```rust
/// use specfmt::{spec, Renderer, Value};
///
/// let spec = spec!(">10,d");
/// let out = Renderer::new().render(&Value::Int(1234567), &spec).unwrap();
/// assert_eq!(out, " 1,234,567");
/// ```
#[macro_export]
macro_rules! spec {
    ($s:expr) => {
        match $crate::FormatSpec::parse($s) {
            Ok(parsed) => parsed,
            Err(err) => panic!("invalid format spec: {}", err),
        }
    };
}
