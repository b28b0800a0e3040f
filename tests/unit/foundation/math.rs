use super::*;

#[test]
fn js_round_ties_go_up() {
    assert_eq!(js_round(2.5), 3.0);
    assert_eq!(js_round(-2.5), -2.0);
    assert_eq!(js_round(-2.6), -3.0);
    assert_eq!(js_round(0.49999999999999994), 0.0);
    assert!(js_round(f64::NAN).is_nan());
}

#[test]
fn to_fixed_keeps_requested_digits() {
    assert_eq!(to_fixed(1.23456789, 5), 1.23457);
    assert_eq!(to_fixed(21.2 / 16.0, 5), 1.325);
    assert_eq!(to_fixed(2.675, 2), 2.68);
    assert_eq!(to_fixed(0.9, 5), 0.9);
}

#[test]
fn to_fixed_truncates_the_extra_digit_first() {
    // 1.005 is stored just below itself, the extra digit is dropped before rounding.
    assert_eq!(to_fixed(1.005, 2), 1.0);
    assert_eq!(to_fixed(1.4999, 0), 1.0);
}

#[test]
fn to_fixed_negative_ties_round_up() {
    assert_eq!(to_fixed(-1.5, 0), -1.0);
    assert_eq!(to_fixed(-1.325, 5), -1.325);
}

#[test]
fn to_fixed_output_has_no_float_noise() {
    for (x, p) in [(0.1 + 0.2, 5u32), (1.0 / 3.0, 3), (22.8, 5), (10.8 * 100.0 / 1200.0, 5)] {
        let s = to_fixed(x, p).to_string();
        let frac = s.split_once('.').map_or(0, |(_, f)| f.len());
        assert!(frac <= p as usize, "{s} has more than {p} digits");
    }
}
