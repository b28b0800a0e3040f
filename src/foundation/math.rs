/// Round half toward positive infinity, matching ECMAScript `Math.round`.
///
/// `f64::round` rounds half away from zero, which disagrees for negative ties (`-2.5`).
pub(crate) fn js_round(x: f64) -> f64 {
    let floor = x.floor();
    if x - floor >= 0.5 { floor + 1.0 } else { floor }
}

/// Round `number` to `precision` fractional digits.
///
/// Truncates at one extra digit first, then rounds that digit away. A single scale-and-round at
/// `precision` digits would carry binary representation error into the result.
pub fn to_fixed(number: f64, precision: u32) -> f64 {
    let exp = i32::try_from(precision.saturating_add(1)).unwrap_or(i32::MAX);
    let multiplier = 10f64.powi(exp);
    let whole = (number * multiplier).floor();
    js_round(whole / 10.0) * 10.0 / multiplier
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
