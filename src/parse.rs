//! The spec-string parser.
//!
//! A single left-to-right pass over the grammar
//! `[[fill]align][sign][#][0][width][,][.precision][type]`, with no
//! backtracking beyond the two-character lookahead that disambiguates a fill
//! from an alignment. The cursor tracks its character position so errors can
//! point at the offending spot.

use crate::error::{ParseError, ParseErrorKind};
use crate::spec::{Align, FormatSpec, Grouping, Presentation, Sign};

struct Cursor<'a> {
    src: &'a str,
    rest: std::str::Chars<'a>,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(src: &'a str) -> Self {
        Cursor {
            src,
            rest: src.chars(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.rest.clone().next()
    }

    fn peek_second(&self) -> Option<char> {
        let mut ahead = self.rest.clone();
        ahead.next();
        ahead.next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.rest.next();
        if c.is_some() {
            self.pos += 1;
        }
        c
    }

    fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(self.src, self.pos, kind)
    }

    /// Consumes a maximal run of decimal digits, if any.
    fn digits(&mut self) -> Result<Option<usize>, ParseError> {
        let mut seen = false;
        let mut n: usize = 0;
        while let Some(d) = self.peek().and_then(|c| c.to_digit(10)) {
            seen = true;
            n = n
                .checked_mul(10)
                .and_then(|n| n.checked_add(d as usize))
                .ok_or_else(|| self.error(ParseErrorKind::NumberOverflow))?;
            self.bump();
        }
        Ok(if seen { Some(n) } else { None })
    }
}

pub(crate) fn parse_spec(src: &str) -> Result<FormatSpec, ParseError> {
    let mut cur = Cursor::new(src);
    let mut spec = FormatSpec {
        source: src.to_string(),
        ..FormatSpec::default()
    };

    // A fill is any character, but only when the next one is an alignment.
    if let (Some(fill), Some(align)) = (cur.peek(), cur.peek_second().and_then(Align::from_char)) {
        spec.fill = Some(fill);
        spec.align = Some(align);
        cur.bump();
        cur.bump();
    } else if let Some(align) = cur.peek().and_then(Align::from_char) {
        spec.align = Some(align);
        cur.bump();
    }

    match cur.peek() {
        Some('+') => {
            spec.sign = Some(Sign::Always);
            cur.bump();
        }
        Some('-') => {
            spec.sign = Some(Sign::NegativeOnly);
            cur.bump();
        }
        Some(' ') => {
            spec.sign = Some(Sign::Space);
            cur.bump();
        }
        _ => {}
    }

    if cur.peek() == Some('#') {
        spec.alternate = true;
        cur.bump();
    }

    // A leading zero is fill/alignment shorthand, not part of the width.
    if cur.peek() == Some('0') {
        cur.bump();
        if spec.fill.is_none() {
            spec.fill = Some('0');
        }
        if spec.align.is_none() {
            spec.align = Some(Align::SignAware);
        }
    }

    spec.width = cur.digits()?;

    if cur.peek() == Some(',') {
        spec.grouping = Grouping::Comma;
        cur.bump();
    }

    if cur.peek() == Some('.') {
        cur.bump();
        match cur.digits()? {
            Some(precision) => spec.precision = Some(precision),
            None => return Err(cur.error(ParseErrorKind::MissingPrecision)),
        }
    }

    if let Some(c) = cur.peek() {
        let ptype = Presentation::from_char(c)
            .ok_or_else(|| cur.error(ParseErrorKind::UnknownType(c)))?;
        cur.bump();
        spec.ptype = Some(ptype);
        if let Some(extra) = cur.peek() {
            return Err(cur.error(ParseErrorKind::UnexpectedChar(extra)));
        }
    }

    validate(&spec, &cur)?;
    Ok(spec)
}

/// Rejects flag combinations the grammar admits but the presentation forbids.
fn validate(spec: &FormatSpec, cur: &Cursor<'_>) -> Result<(), ParseError> {
    let Some(ptype) = spec.ptype else {
        // Untyped specs are checked against the value kind at render time.
        return Ok(());
    };
    let letter = ptype.as_char();
    // The type letter is always the last character.
    let at = |kind| ParseError::new(cur.src, cur.pos.saturating_sub(1), kind);

    if spec.precision.is_some() && ptype.is_integer() {
        return Err(at(ParseErrorKind::PrecisionNotAllowed(letter)));
    }

    let groups = matches!(
        ptype,
        Presentation::Decimal
            | Presentation::ExpLower
            | Presentation::ExpUpper
            | Presentation::Fixed
            | Presentation::FixedUpper
            | Presentation::GeneralLower
            | Presentation::GeneralUpper
            | Presentation::Percent
    );
    if spec.grouping == Grouping::Comma && !groups {
        return Err(at(ParseErrorKind::GroupingNotAllowed(letter)));
    }

    if matches!(ptype, Presentation::Str | Presentation::Char) {
        if spec.sign.is_some() {
            return Err(at(ParseErrorKind::SignNotAllowed(letter)));
        }
        if spec.alternate {
            return Err(at(ParseErrorKind::AlternateNotAllowed(letter)));
        }
    }
    if ptype == Presentation::Str && spec.align == Some(Align::SignAware) {
        return Err(at(ParseErrorKind::SignAwareAlignOnString));
    }

    Ok(())
}
