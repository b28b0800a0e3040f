use super::*;

#[test]
fn number_prefix_ignores_trailing_unit() {
    assert_eq!(parse_number_prefix("32px"), Some(32.0));
    assert_eq!(parse_number_prefix("  1.25rem"), Some(1.25));
    assert_eq!(parse_number_prefix("-40px"), Some(-40.0));
    assert_eq!(parse_number_prefix("+2"), Some(2.0));
    assert_eq!(parse_number_prefix(".5em"), Some(0.5));
    assert_eq!(parse_number_prefix("3."), Some(3.0));
    assert_eq!(parse_number_prefix("1e2px"), Some(100.0));
    assert_eq!(parse_number_prefix("2em"), Some(2.0));
    assert_eq!(parse_number_prefix("1.5.3"), Some(1.5));
}

#[test]
fn number_prefix_rejects_non_numbers() {
    assert_eq!(parse_number_prefix(""), None);
    assert_eq!(parse_number_prefix("px"), None);
    assert_eq!(parse_number_prefix("-"), None);
    assert_eq!(parse_number_prefix("."), None);
    assert_eq!(parse_number_prefix("abc12"), None);
    assert_eq!(parse_number_prefix("Infinity"), None);
    assert_eq!(parse_number_prefix("1e999"), None);
}

#[test]
fn length_parse_reads_suffix() {
    assert_eq!(Length::parse("20px"), Some(Length::Pixels(20.0)));
    assert_eq!(Length::parse("1.25rem"), Some(Length::Rem(1.25)));
    assert_eq!(Length::parse("75em"), Some(Length::Em(75.0)));
    assert_eq!(Length::parse("20pt"), None);
    assert_eq!(Length::parse("px"), None);
}

#[test]
fn length_to_px_scales_root_units() {
    assert_eq!(Length::Pixels(20.0).to_px(16.0), 20.0);
    assert_eq!(Length::Rem(1.25).to_px(16.0), 20.0);
    assert_eq!(Length::Em(75.0).to_px(16.0), 1200.0);
}

#[test]
fn operator_applies_sign() {
    assert_eq!(Operator::Plus.apply(2.0, 1.0), 3.0);
    assert_eq!(Operator::Minus.apply(2.0, 1.0), 1.0);
    assert_eq!(Operator::Minus.to_string(), "-");
}

#[test]
fn viewport_unit_follows_dimension_flag() {
    assert_eq!(ViewportUnit::for_two_dimensional(false), ViewportUnit::Vw);
    assert_eq!(ViewportUnit::for_two_dimensional(true), ViewportUnit::Vmin);
    assert_eq!(ViewportUnit::Vmin.to_string(), "vmin");
}

#[test]
fn unit_keywords_parse() {
    assert_eq!(Unit::parse("rem"), Some(Unit::Rem));
    assert_eq!(Unit::parse("px"), Some(Unit::Px));
    assert_eq!(Unit::parse("em"), None);
    assert_eq!(BreakpointUnit::parse("em"), Some(BreakpointUnit::Em));
    assert_eq!(BreakpointUnit::parse("vw"), None);
}
