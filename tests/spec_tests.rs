//! Grammar-level tests for spec parsing: field extraction, defaults,
//! rejected flag combinations, and the canonical `Display` form.

use specfmt::{Align, FormatSpec, Grouping, ParseErrorKind, Presentation, Sign};

#[test]
fn empty_spec_is_all_defaults() {
    let spec = FormatSpec::parse("").unwrap();
    assert_eq!(spec.fill(), None);
    assert_eq!(spec.align(), None);
    assert_eq!(spec.sign(), Sign::NegativeOnly);
    assert!(!spec.alternate());
    assert_eq!(spec.width(), None);
    assert_eq!(spec.grouping(), Grouping::None);
    assert_eq!(spec.precision(), None);
    assert_eq!(spec.presentation(), None);
    assert_eq!(spec.source(), "");
}

#[test]
fn fill_is_recognized_only_before_an_alignment() {
    let spec = FormatSpec::parse("a>10").unwrap();
    assert_eq!(spec.fill(), Some('a'));
    assert_eq!(spec.align(), Some(Align::Right));
    assert_eq!(spec.width(), Some(10));

    // Without an alignment behind it, `a` is not a fill.
    let err = FormatSpec::parse("a10").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::UnknownType('a'));
    assert_eq!(err.position, 0);
}

#[test]
fn alignment_characters_map_to_variants() {
    assert_eq!(FormatSpec::parse("<").unwrap().align(), Some(Align::Left));
    assert_eq!(FormatSpec::parse(">").unwrap().align(), Some(Align::Right));
    assert_eq!(FormatSpec::parse("^").unwrap().align(), Some(Align::Center));
    assert_eq!(
        FormatSpec::parse("=").unwrap().align(),
        Some(Align::SignAware)
    );
}

#[test]
fn an_alignment_can_be_its_own_fill() {
    let spec = FormatSpec::parse("<<8").unwrap();
    assert_eq!(spec.fill(), Some('<'));
    assert_eq!(spec.align(), Some(Align::Left));
    assert_eq!(spec.width(), Some(8));
}

#[test]
fn multibyte_fill_characters_parse() {
    let spec = FormatSpec::parse("é^7").unwrap();
    assert_eq!(spec.fill(), Some('é'));
    assert_eq!(spec.align(), Some(Align::Center));
    assert_eq!(spec.width(), Some(7));
}

#[test]
fn sign_characters_map_to_policies() {
    assert_eq!(FormatSpec::parse("+d").unwrap().sign(), Sign::Always);
    assert_eq!(FormatSpec::parse(" d").unwrap().sign(), Sign::Space);
    assert_eq!(FormatSpec::parse("-d").unwrap().sign(), Sign::NegativeOnly);
    assert_eq!(FormatSpec::parse("d").unwrap().sign(), Sign::NegativeOnly);
}

#[test]
fn leading_minus_is_a_sign_not_a_fill() {
    let spec = FormatSpec::parse("-10").unwrap();
    assert_eq!(spec.fill(), None);
    assert_eq!(spec.sign(), Sign::NegativeOnly);
    assert_eq!(spec.width(), Some(10));

    let spec = FormatSpec::parse("->10").unwrap();
    assert_eq!(spec.fill(), Some('-'));
    assert_eq!(spec.align(), Some(Align::Right));
}

#[test]
fn zero_shorthand_sets_fill_and_sign_aware_alignment() {
    let spec = FormatSpec::parse("05").unwrap();
    assert_eq!(spec.fill(), Some('0'));
    assert_eq!(spec.align(), Some(Align::SignAware));
    assert_eq!(spec.width(), Some(5));
}

#[test]
fn zero_shorthand_defers_to_explicit_alignment_and_fill() {
    let spec = FormatSpec::parse("<05").unwrap();
    assert_eq!(spec.fill(), Some('0'));
    assert_eq!(spec.align(), Some(Align::Left));

    let spec = FormatSpec::parse("*=05").unwrap();
    assert_eq!(spec.fill(), Some('*'));
    assert_eq!(spec.align(), Some(Align::SignAware));
    assert_eq!(spec.width(), Some(5));
}

#[test]
fn zero_shorthand_is_separate_from_the_width() {
    let spec = FormatSpec::parse("008").unwrap();
    assert_eq!(spec.fill(), Some('0'));
    assert_eq!(spec.width(), Some(8));
}

#[test]
fn grouping_and_precision_fields() {
    let spec = FormatSpec::parse(",d").unwrap();
    assert_eq!(spec.grouping(), Grouping::Comma);

    let spec = FormatSpec::parse("10,.2f").unwrap();
    assert_eq!(spec.width(), Some(10));
    assert_eq!(spec.grouping(), Grouping::Comma);
    assert_eq!(spec.precision(), Some(2));
    assert_eq!(spec.presentation(), Some(Presentation::Fixed));

    let spec = FormatSpec::parse(".0f").unwrap();
    assert_eq!(spec.precision(), Some(0));
}

#[test]
fn every_presentation_letter_parses() {
    for (letter, expected) in [
        ('s', Presentation::Str),
        ('b', Presentation::Binary),
        ('c', Presentation::Char),
        ('d', Presentation::Decimal),
        ('o', Presentation::Octal),
        ('x', Presentation::HexLower),
        ('X', Presentation::HexUpper),
        ('n', Presentation::LocaleNumber),
        ('e', Presentation::ExpLower),
        ('E', Presentation::ExpUpper),
        ('f', Presentation::Fixed),
        ('F', Presentation::FixedUpper),
        ('g', Presentation::GeneralLower),
        ('G', Presentation::GeneralUpper),
        ('%', Presentation::Percent),
    ] {
        let spec = FormatSpec::parse(&letter.to_string()).unwrap();
        assert_eq!(spec.presentation(), Some(expected));
        assert_eq!(expected.as_char(), letter);
    }
}

#[test]
fn unknown_type_letter_is_rejected() {
    let err = FormatSpec::parse("q").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::UnknownType('q'));
    assert_eq!(err.position, 0);
    assert_eq!(err.spec, "q");
}

#[test]
fn trailing_characters_are_rejected() {
    let err = FormatSpec::parse("d5").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::UnexpectedChar('5'));
    assert_eq!(err.position, 1);
}

#[test]
fn dot_without_digits_is_rejected() {
    let err = FormatSpec::parse("10.").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::MissingPrecision);
    assert_eq!(err.position, 3);

    let err = FormatSpec::parse("10.f").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::MissingPrecision);
}

#[test]
fn oversized_widths_are_rejected() {
    let err = FormatSpec::parse("99999999999999999999999999d").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::NumberOverflow);
}

#[test]
fn precision_is_rejected_for_whole_number_types() {
    for spec in [".2b", ".2c", ".2d", ".2o", ".2x", ".2X"] {
        let err = FormatSpec::parse(spec).unwrap_err();
        assert!(
            matches!(err.kind, ParseErrorKind::PrecisionNotAllowed(_)),
            "{spec} parsed"
        );
    }
}

#[test]
fn grouping_is_rejected_where_digits_never_group() {
    for spec in [",s", ",b", ",c", ",o", ",x", ",X", ",n"] {
        let err = FormatSpec::parse(spec).unwrap_err();
        assert!(
            matches!(err.kind, ParseErrorKind::GroupingNotAllowed(_)),
            "{spec} parsed"
        );
    }
}

#[test]
fn string_type_rejects_numeric_flags() {
    let err = FormatSpec::parse("+s").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::SignNotAllowed('s'));

    let err = FormatSpec::parse("-s").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::SignNotAllowed('s'));

    let err = FormatSpec::parse("#s").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::AlternateNotAllowed('s'));

    let err = FormatSpec::parse("=s").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::SignAwareAlignOnString);

    let err = FormatSpec::parse("05s").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::SignAwareAlignOnString);
}

#[test]
fn char_type_rejects_sign_and_alternate() {
    let err = FormatSpec::parse("+c").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::SignNotAllowed('c'));

    let err = FormatSpec::parse("#c").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::AlternateNotAllowed('c'));
}

#[test]
fn from_str_matches_parse() {
    let via_parse = FormatSpec::parse(">10").unwrap();
    let via_from_str: FormatSpec = ">10".parse().unwrap();
    assert_eq!(via_parse, via_from_str);
}

#[test]
fn display_is_canonical_and_stable() {
    assert_eq!(FormatSpec::parse("+#10,.2f").unwrap().to_string(), "+#10,.2f");
    assert_eq!(FormatSpec::parse("a>10").unwrap().to_string(), "a>10");
    // Shorthands expand
    assert_eq!(FormatSpec::parse("05").unwrap().to_string(), "0=5");

    // Displaying and reparsing reaches a fixed point
    for source in ["", "05", "<05", "+#10,.2f", "é^7", " e", "008b"] {
        let once = FormatSpec::parse(source).unwrap().to_string();
        let twice = FormatSpec::parse(&once).unwrap().to_string();
        assert_eq!(once, twice, "display of {source:?} is not stable");
    }
}

#[test]
fn specs_round_trip_through_serde() {
    let spec = FormatSpec::parse("*^#20,.3G").unwrap();
    let json = serde_json::to_string(&spec).unwrap();
    let back: FormatSpec = serde_json::from_str(&json).unwrap();
    assert_eq!(spec, back);
}

#[test]
fn parse_is_deterministic() {
    let a = FormatSpec::parse("08.2f").unwrap();
    let b = FormatSpec::parse("08.2f").unwrap();
    assert_eq!(a, b);
}
