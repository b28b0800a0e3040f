use super::*;
use crate::foundation::core::ViewportUnit;
use crate::render::value::{PlainValue, TermKind};

fn px_opts() -> RfsOptions {
    RfsOptions::default().with_unit(Unit::Px)
}

fn fluid_of(raw: &str, opts: &RfsOptions) -> FluidValue {
    *process(raw, true, opts)
        .unwrap()
        .as_fluid()
        .unwrap_or_else(|| panic!("{raw} should be fluid"))
}

#[test]
fn rem_golden_values() {
    let opts = RfsOptions::default();

    let v = fluid_of("2", &opts);
    assert_eq!(v.fixed().value, 1.325);
    assert_eq!(v.viewport().value, 0.9);
    assert_eq!(v.operator(), Operator::Plus);
    assert_eq!(v.to_string(), "calc(1.325rem + 0.9vw)");

    let v = fluid_of("3rem", &opts);
    assert_eq!(v.to_string(), "calc(1.425rem + 2.1vw)");

    let v = fluid_of("2.5", &opts);
    assert_eq!(v.to_string(), "calc(1.375rem + 1.5vw)");
}

#[test]
fn px_golden_values() {
    let opts = px_opts();
    assert_eq!(fluid_of("32px", &opts).to_string(), "calc(21.2px + 0.9vw)");
    assert_eq!(fluid_of("40px", &opts).to_string(), "calc(22px + 1.5vw)");
    assert_eq!(fluid_of("64px", &opts).to_string(), "calc(24.4px + 3.3vw)");
}

#[test]
fn other_breakpoints_and_factors() {
    let opts = RfsOptions::default().with_breakpoint(crate::Length::Pixels(1000.0));
    assert_eq!(fluid_of("2", &opts).to_string(), "calc(1.325rem + 1.08vw)");

    let opts = RfsOptions::default().with_factor(5.0);
    assert_eq!(fluid_of("2", &opts).to_string(), "calc(1.4rem + 0.8vw)");
}

#[test]
fn two_dimensional_uses_vmin() {
    let opts = RfsOptions {
        two_dimensional: true,
        ..RfsOptions::default()
    };
    let v = fluid_of("2", &opts);
    assert_eq!(v.viewport().kind, TermKind::Viewport(ViewportUnit::Vmin));
    assert_eq!(v.to_string(), "calc(1.325rem + 0.9vmin)");
}

#[test]
fn negative_values_mirror_positive() {
    for opts in [RfsOptions::default(), px_opts()] {
        let pos = fluid_of("40px", &opts);
        let neg = fluid_of("-40px", &opts);
        assert_eq!(neg.fixed().value, -pos.fixed().value);
        assert_eq!(neg.viewport().value, pos.viewport().value);
        assert_eq!(pos.operator(), Operator::Plus);
        assert_eq!(neg.operator(), Operator::Minus);
    }
    assert_eq!(
        fluid_of("-2", &RfsOptions::default()).to_string(),
        "calc(-1.325rem - 0.9vw)"
    );
}

#[test]
fn values_at_or_below_base_stay_plain() {
    let opts = px_opts();
    for raw in ["20px", "12px", "-20px", "1px"] {
        let fluid = process(raw, true, &opts).unwrap();
        let plain = process(raw, false, &opts).unwrap();
        assert!(!fluid.is_fluid(), "{raw}");
        assert_eq!(fluid, plain);
    }
}

#[test]
fn disabled_scaling_degenerates_to_plain() {
    let low_factor = RfsOptions::default().with_factor(1.0);
    let off = RfsOptions {
        enable_rfs: false,
        ..RfsOptions::default()
    };
    for opts in [low_factor, off] {
        for raw in ["2", "3.5rem", "-4"] {
            assert_eq!(
                process(raw, true, &opts).unwrap(),
                process(raw, false, &opts).unwrap()
            );
        }
    }
}

#[test]
fn zero_is_unitless_on_both_paths() {
    let opts = RfsOptions::default();
    for raw in ["0px", "0", "-0rem"] {
        assert_eq!(
            process(raw, false, &opts).unwrap(),
            RenderedValue::Plain(PlainValue::Zero)
        );
        assert_eq!(
            process(raw, true, &opts).unwrap(),
            RenderedValue::Plain(PlainValue::Zero)
        );
    }
}

#[test]
fn plain_value_is_interpreted_in_configured_unit() {
    let opts = RfsOptions::default();
    // The suffix on the input is ignored, numbers are read as rem.
    assert_eq!(process("0.25px", false, &opts).unwrap().to_string(), "0.25rem");
    assert_eq!(process("2", false, &opts).unwrap().to_string(), "2rem");
    assert_eq!(process("32px", false, &px_opts()).unwrap().to_string(), "32px");
}

#[test]
fn fluid_terms_are_monotonic() {
    let opts = px_opts();
    let mut prev: Option<FluidValue> = None;
    for px in 21..=240 {
        let v = fluid_of(&format!("{px}px"), &opts);
        if let Some(p) = prev {
            assert!(v.fixed().value >= p.fixed().value, "fixed dropped at {px}");
            assert!(v.viewport().value >= p.viewport().value, "coef dropped at {px}");
        }
        prev = Some(v);
    }
}

#[test]
fn fluid_is_continuous_at_base() {
    let opts = px_opts();
    let v = fluid_of("20.0001px", &opts);
    assert!((v.fixed().value - opts.base_value).abs() < 1e-4);
    assert!(v.viewport().value.abs() < 1e-4);
}

#[test]
fn malformed_input_fails() {
    let opts = RfsOptions::default();
    for raw in ["", "px", "abc", "--2"] {
        let err = process(raw, true, &opts).unwrap_err();
        assert!(matches!(err, RfsError::InvalidValue(_)), "{raw}");
    }
}
