use crate::foundation::core::Unit;
use crate::foundation::math::to_fixed;
use crate::options::normalize::RfsOptions;
use crate::render::value::PlainValue;

/// Render a pixel magnitude in the configured output unit.
///
/// Zero (of either sign) renders as a bare `0`; anything else is rounded to
/// `unit_precision` digits in `rem` or `px`.
pub fn render_value(px: f64, opts: &RfsOptions) -> PlainValue {
    if px == 0.0 {
        return PlainValue::Zero;
    }
    let value = match opts.unit {
        Unit::Rem => to_fixed(px / opts.rem_value, opts.unit_precision),
        Unit::Px => to_fixed(px, opts.unit_precision),
    };
    PlainValue::Length {
        value,
        unit: opts.unit,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/unit.rs"]
mod tests;
