//! Fluid length transform.
//!
//! A length `v` above the base value is split into a fixed term and a viewport term:
//!
//! ```text
//! scaled = base + (|v| - base) / factor
//! diff   = |v| - scaled
//! calc(scaled ± diff * 100 / breakpoint vw)
//! ```
//!
//! At a viewport width equal to the breakpoint the two terms add up to `|v|` again.

use crate::foundation::core::{Operator, Unit, parse_number_prefix};
use crate::foundation::error::{RfsError, RfsResult};
use crate::foundation::math::to_fixed;
use crate::options::normalize::RfsOptions;
use crate::render::unit::render_value;
use crate::render::value::{FluidValue, RenderedValue};

/// Read the numeric prefix of `raw` as a length in the configured unit and return it in px.
///
/// Any unit suffix on `raw` is ignored.
pub fn parse_input_px(raw: &str, opts: &RfsOptions) -> RfsResult<f64> {
    let value = parse_number_prefix(raw)
        .ok_or_else(|| RfsError::invalid_value(format!("'{raw}' does not start with a number")))?;
    Ok(to_px(value, opts))
}

/// Convert a number expressed in the configured unit to px.
pub fn to_px(value: f64, opts: &RfsOptions) -> f64 {
    match opts.unit {
        Unit::Rem => value * opts.rem_value,
        Unit::Px => value,
    }
}

/// Whether `px` gets a fluid rendering under `opts`.
pub fn is_fluid_candidate(px: f64, opts: &RfsOptions) -> bool {
    opts.enable_rfs && opts.factor > 1.0 && opts.base_value < px.abs()
}

/// Transform `raw`, producing a fluid value when `fluid` is set and scaling applies.
pub fn process(raw: &str, fluid: bool, opts: &RfsOptions) -> RfsResult<RenderedValue> {
    let px = parse_input_px(raw, opts)?;
    Ok(process_px(px, fluid, opts))
}

/// Transform a length already resolved to px.
pub fn process_px(px: f64, fluid: bool, opts: &RfsOptions) -> RenderedValue {
    if !fluid || !is_fluid_candidate(px, opts) {
        return RenderedValue::Plain(render_value(px, opts));
    }

    let magnitude = px.abs();
    let mut scaled = opts.base_value + (magnitude - opts.base_value) / opts.factor;
    let diff = magnitude - scaled;
    if opts.unit == Unit::Rem {
        scaled /= opts.rem_value;
    }

    let fixed = to_fixed(scaled, opts.unit_precision);
    let coefficient = to_fixed(diff * 100.0 / opts.breakpoint, opts.unit_precision);
    let (fixed, operator) = if px > 0.0 {
        (fixed, Operator::Plus)
    } else {
        (-fixed, Operator::Minus)
    };

    RenderedValue::Fluid(FluidValue::new(
        fixed,
        opts.unit,
        coefficient,
        opts.viewport_unit(),
        operator,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/transform/fluid.rs"]
mod tests;
