//! Rendering values against a parsed spec.
//!
//! [`Renderer`] dispatches on the presentation type, hands the digit work to
//! [`crate::decimal`] for floats, and funnels every result through one shared
//! padding routine so width, alignment, and sign-aware fill behave the same
//! for every presentation.
//!
//! ## Usage
//!
//! Most callers use the one-shot functions in the crate root. Holding a
//! `Renderer` pays off when the separator is customized or parsed specs are
//! reused:
//!
//! ```rust
//! use specfmt::{FormatSpec, Renderer, Value};
//!
//! let renderer = Renderer::new();
//! let spec = FormatSpec::parse("08.2f").unwrap();
//!
//! let out = renderer.render(&Value::Float(-3.5), &spec).unwrap();
//! assert_eq!(out, "-0003.50");
//! ```

use crate::decimal;
use crate::error::RenderError;
use crate::options::FormatOptions;
use crate::spec::{Align, FormatSpec, Grouping, Presentation, Sign};
use crate::value::Value;

/// Renders values against parsed specs.
///
/// A renderer is cheap to construct, holds only its [`FormatOptions`], and is
/// freely cloneable and shareable; `render` takes `&self` and touches no
/// other state.
#[derive(Clone, Debug, Default)]
pub struct Renderer {
    options: FormatOptions,
}

/// A number broken into the pieces padding cares about: the sign and base
/// prefix hug the left edge under `=` alignment, the integer digits may be
/// regrouped when zero padding meets a separator, and the tail (fraction,
/// exponent, percent sign) is already final.
struct NumberParts {
    sign: &'static str,
    prefix: &'static str,
    int_digits: String,
    tail: String,
    separator: Option<char>,
}

impl Renderer {
    /// Creates a renderer with default options.
    #[must_use]
    pub fn new() -> Self {
        Renderer {
            options: FormatOptions::default(),
        }
    }

    /// Creates a renderer with the given options.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use specfmt::{FormatOptions, FormatSpec, Renderer, Value};
    ///
    /// let renderer = Renderer::with_options(FormatOptions::new().with_group_separator('.'));
    /// let spec = FormatSpec::parse("n").unwrap();
    /// assert_eq!(renderer.render(&Value::Int(1234567), &spec).unwrap(), "1.234.567");
    /// ```
    #[must_use]
    pub fn with_options(options: FormatOptions) -> Self {
        Renderer { options }
    }

    /// The options this renderer was built with.
    #[must_use]
    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// Renders `value` according to `spec`.
    ///
    /// # Errors
    ///
    /// Returns a [`RenderError`] when the spec does not apply to the value's
    /// kind, or the value cannot be represented (e.g. `c` with an integer
    /// that is not a Unicode scalar).
    #[must_use = "this returns the result of the operation, errors must be handled"]
    pub fn render(&self, value: &Value<'_>, spec: &FormatSpec) -> Result<String, RenderError> {
        match *value {
            Value::Str(s) => self.render_str(s, spec),
            Value::Int(n) => self.render_int(n, spec),
            Value::Float(x) => self.render_float(x, spec),
        }
    }

    fn render_str(&self, s: &str, spec: &FormatSpec) -> Result<String, RenderError> {
        match spec.ptype {
            None | Some(Presentation::Str) => {}
            Some(other) => {
                return Err(RenderError::type_mismatch(
                    &spec.source,
                    other.as_char(),
                    "string",
                ))
            }
        }
        // An explicit `s` was validated at parse time; an untyped spec only
        // learns the value is a string here.
        if spec.sign.is_some() {
            return Err(RenderError::SignOnString {
                spec: spec.source.clone(),
            });
        }
        if spec.grouping == Grouping::Comma {
            return Err(RenderError::GroupingOnString {
                spec: spec.source.clone(),
            });
        }
        if spec.alternate {
            return Err(RenderError::AlternateOnString {
                spec: spec.source.clone(),
            });
        }
        if spec.align == Some(Align::SignAware) {
            return Err(RenderError::SignAwareOnString {
                spec: spec.source.clone(),
            });
        }

        let body: String = match spec.precision {
            Some(max) => s.chars().take(max).collect(),
            None => s.to_string(),
        };
        Ok(pad(
            body,
            0,
            spec.fill.unwrap_or(' '),
            spec.align.unwrap_or(Align::Left),
            spec.width.unwrap_or(0),
        ))
    }

    fn render_int(&self, n: i64, spec: &FormatSpec) -> Result<String, RenderError> {
        match spec.ptype {
            None => {
                if spec.precision.is_some() {
                    return Err(RenderError::PrecisionOnInteger {
                        spec: spec.source.clone(),
                    });
                }
                Ok(self.int_as(n, spec, Presentation::Decimal))
            }
            Some(Presentation::Str) => {
                Err(RenderError::type_mismatch(&spec.source, 's', "integer"))
            }
            Some(Presentation::Char) => self.char_value(n, spec),
            Some(Presentation::LocaleNumber) => {
                if spec.precision.is_some() {
                    return Err(RenderError::PrecisionOnInteger {
                        spec: spec.source.clone(),
                    });
                }
                Ok(self.int_as(n, spec, Presentation::LocaleNumber))
            }
            Some(
                ptype @ (Presentation::Decimal
                | Presentation::Binary
                | Presentation::Octal
                | Presentation::HexLower
                | Presentation::HexUpper),
            ) => Ok(self.int_as(n, spec, ptype)),
            // e, E, f, F, g, G, %: the integer formats through a float.
            Some(ptype) => Ok(self.float_as(n as f64, spec, ptype)),
        }
    }

    fn render_float(&self, x: f64, spec: &FormatSpec) -> Result<String, RenderError> {
        match spec.ptype {
            None => Ok(self.float_as(x, spec, Presentation::GeneralLower)),
            Some(Presentation::Str) => {
                Err(RenderError::type_mismatch(&spec.source, 's', "float"))
            }
            Some(
                other @ (Presentation::Binary
                | Presentation::Char
                | Presentation::Decimal
                | Presentation::Octal
                | Presentation::HexLower
                | Presentation::HexUpper),
            ) => Err(RenderError::type_mismatch(
                &spec.source,
                other.as_char(),
                "float",
            )),
            Some(ptype) => Ok(self.float_as(x, spec, ptype)),
        }
    }

    fn int_as(&self, n: i64, spec: &FormatSpec, ptype: Presentation) -> String {
        let magnitude = n.unsigned_abs();
        let (int_digits, prefix) = match ptype {
            Presentation::Binary => (format!("{magnitude:b}"), "0b"),
            Presentation::Octal => (format!("{magnitude:o}"), "0o"),
            Presentation::HexLower => (format!("{magnitude:x}"), "0x"),
            Presentation::HexUpper => (format!("{magnitude:X}"), "0X"),
            _ => (magnitude.to_string(), ""),
        };
        let separator = match ptype {
            Presentation::LocaleNumber => Some(self.options.group_separator),
            Presentation::Decimal if spec.grouping == Grouping::Comma => Some(','),
            _ => None,
        };
        self.finish(
            NumberParts {
                sign: sign_str(n < 0, spec.sign()),
                prefix: if spec.alternate { prefix } else { "" },
                int_digits,
                tail: String::new(),
                separator,
            },
            spec,
        )
    }

    fn char_value(&self, n: i64, spec: &FormatSpec) -> Result<String, RenderError> {
        let c = u32::try_from(n)
            .ok()
            .and_then(char::from_u32)
            .ok_or_else(|| RenderError::invalid_code_point(&spec.source, n))?;
        Ok(pad(
            c.to_string(),
            0,
            spec.fill.unwrap_or(' '),
            spec.align.unwrap_or(Align::Right),
            spec.width.unwrap_or(0),
        ))
    }

    fn float_as(&self, x: f64, spec: &FormatSpec, ptype: Presentation) -> String {
        // Percent scales first; an overflow to infinity renders as `inf%`.
        let x = if ptype == Presentation::Percent {
            x * 100.0
        } else {
            x
        };
        let upper = matches!(
            ptype,
            Presentation::FixedUpper | Presentation::ExpUpper | Presentation::GeneralUpper
        );
        // NaN never takes a minus sign; infinities keep theirs.
        let negative = x.is_sign_negative() && !x.is_nan();
        let sign = sign_str(negative, spec.sign());

        if !x.is_finite() {
            let body = match (x.is_nan(), upper) {
                (true, true) => "NAN",
                (true, false) => "nan",
                (false, true) => "INF",
                (false, false) => "inf",
            };
            let tail = if ptype == Presentation::Percent { "%" } else { "" };
            // Grouping never applies to `inf`/`nan`; zero fill pads plainly.
            return self.finish(
                NumberParts {
                    sign,
                    prefix: "",
                    int_digits: body.to_string(),
                    tail: tail.to_string(),
                    separator: None,
                },
                spec,
            );
        }

        let separator = match ptype {
            Presentation::LocaleNumber => Some(self.options.group_separator),
            _ if spec.grouping == Grouping::Comma => Some(','),
            _ => None,
        };
        let d = decimal::decompose(x);

        let (int_digits, tail) = match ptype {
            Presentation::Fixed | Presentation::FixedUpper | Presentation::Percent => {
                let precision = spec.precision.unwrap_or(6);
                let (int_digits, frac) = decimal::fixed(d.mantissa, d.exp, precision);
                let mut tail = String::new();
                if precision > 0 {
                    tail.push('.');
                    tail.push_str(&frac);
                } else if spec.alternate {
                    tail.push('.');
                }
                if ptype == Presentation::Percent {
                    tail.push('%');
                }
                (int_digits, tail)
            }
            Presentation::ExpLower | Presentation::ExpUpper => {
                let precision = spec.precision.unwrap_or(6);
                let (digits, e10) = decimal::scientific(d.mantissa, d.exp, precision);
                let mut tail = String::new();
                if precision > 0 {
                    tail.push('.');
                    tail.push_str(&digits[1..]);
                } else if spec.alternate {
                    tail.push('.');
                }
                push_exponent(&mut tail, e10, upper);
                (digits[..1].to_string(), tail)
            }
            // g, G, n: fixed or scientific by magnitude, trailing zeros
            // stripped unless the alternate form asks to keep them.
            _ => self.general(&d, spec, upper),
        };

        self.finish(
            NumberParts {
                sign,
                prefix: "",
                int_digits,
                tail,
                separator,
            },
            spec,
        )
    }

    fn general(&self, d: &decimal::Decomposed, spec: &FormatSpec, upper: bool) -> (String, String) {
        let p = spec.precision.unwrap_or(6).max(1);
        let (sci_digits, e10) = decimal::scientific(d.mantissa, d.exp, p - 1);

        if -4 <= e10 && e10 < p as i32 {
            let precision = (p as i32 - 1 - e10) as usize;
            let (int_digits, frac) = decimal::fixed(d.mantissa, d.exp, precision);
            let tail = fraction_tail(&frac, spec.alternate);
            (int_digits, tail)
        } else {
            let mut tail = fraction_tail(&sci_digits[1..], spec.alternate);
            push_exponent(&mut tail, e10, upper);
            (sci_digits[..1].to_string(), tail)
        }
    }

    /// Applies width, alignment, and grouping to an assembled number.
    fn finish(&self, parts: NumberParts, spec: &FormatSpec) -> String {
        let width = spec.width.unwrap_or(0);
        let fill = spec.fill.unwrap_or(' ');
        let align = spec.align.unwrap_or(Align::Right);

        // Zero padding participates in grouping: pad the raw digits, then
        // regroup, stopping as soon as the field is wide enough. The result
        // may overshoot the width rather than lead with a separator.
        if fill == '0' && align == Align::SignAware {
            if let Some(sep) = parts.separator {
                let fixed_len =
                    parts.sign.len() + parts.prefix.len() + parts.tail.chars().count();
                let mut digits = parts.int_digits;
                loop {
                    let grouped = group_digits(&digits, sep);
                    if fixed_len + grouped.chars().count() >= width {
                        return format!(
                            "{}{}{}{}",
                            parts.sign, parts.prefix, grouped, parts.tail
                        );
                    }
                    digits.insert(0, '0');
                }
            }
        }

        let grouped = match parts.separator {
            Some(sep) => group_digits(&parts.int_digits, sep),
            None => parts.int_digits,
        };
        let core = format!("{}{}{}{}", parts.sign, parts.prefix, grouped, parts.tail);
        let split = parts.sign.len() + parts.prefix.len();
        pad(core, split, fill, align, width)
    }
}

/// The fraction part of a float tail, with insignificant zeros stripped
/// unless the alternate form keeps them.
fn fraction_tail(frac: &str, alternate: bool) -> String {
    if alternate {
        return format!(".{frac}");
    }
    let stripped = frac.trim_end_matches('0');
    if stripped.is_empty() {
        String::new()
    } else {
        format!(".{stripped}")
    }
}

/// `e±dd`: the exponent always carries a sign and at least two digits.
fn push_exponent(tail: &mut String, e10: i32, upper: bool) {
    tail.push(if upper { 'E' } else { 'e' });
    tail.push(if e10 < 0 { '-' } else { '+' });
    let magnitude = e10.unsigned_abs();
    if magnitude < 10 {
        tail.push('0');
    }
    tail.push_str(&magnitude.to_string());
}

fn sign_str(negative: bool, sign: Sign) -> &'static str {
    match (negative, sign) {
        (true, _) => "-",
        (false, Sign::Always) => "+",
        (false, Sign::Space) => " ",
        (false, Sign::NegativeOnly) => "",
    }
}

/// Inserts `sep` between groups of three digits, counting from the right.
fn group_digits(digits: &str, sep: char) -> String {
    let count = digits.len();
    let mut out = String::with_capacity(count + (count / 3) * sep.len_utf8());
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (count - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(c);
    }
    out
}

/// Distributes fill characters around `core` to reach `width`. For
/// sign-aware alignment the fill goes at `split`, the single point between
/// the sign/prefix and the digits. Widths count characters, not bytes.
fn pad(core: String, split: usize, fill: char, align: Align, width: usize) -> String {
    let len = core.chars().count();
    if len >= width {
        return core;
    }
    let missing = width - len;
    let mut out = String::with_capacity(core.len() + missing * fill.len_utf8());
    match align {
        Align::Left => {
            out.push_str(&core);
            out.extend(std::iter::repeat(fill).take(missing));
        }
        Align::Right => {
            out.extend(std::iter::repeat(fill).take(missing));
            out.push_str(&core);
        }
        Align::Center => {
            let before = missing / 2;
            out.extend(std::iter::repeat(fill).take(before));
            out.push_str(&core);
            out.extend(std::iter::repeat(fill).take(missing - before));
        }
        Align::SignAware => {
            out.push_str(&core[..split]);
            out.extend(std::iter::repeat(fill).take(missing));
            out.push_str(&core[split..]);
        }
    }
    out
}
