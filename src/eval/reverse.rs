use crate::foundation::core::Unit;
use crate::options::normalize::RfsOptions;
use crate::render::unit::render_value;
use crate::render::value::RenderedValue;
use crate::transform::fluid::to_px;

/// Size in px that `rendered` resolves to at a viewport `width` px wide.
///
/// Plain values are returned in their display unit, not px: they are re-rendered under `opts`
/// and their number read back. Fluid values re-render the fixed term the same way, scale it
/// back to px, then add or subtract `coefficient * width / 100`. `width` is truncated to whole
/// pixels.
pub fn pixel_value_at_screen_width(
    rendered: &RenderedValue,
    width: f64,
    opts: &RfsOptions,
) -> f64 {
    match rendered {
        RenderedValue::Plain(plain) => rerender(plain.number(), opts),
        RenderedValue::Fluid(fluid) => {
            let mut base = rerender(fluid.fixed().value, opts);
            if opts.unit == Unit::Rem {
                base *= opts.rem_value;
            }
            let width = width.trunc();
            fluid
                .operator()
                .apply(base, fluid.viewport().value * width / 100.0)
        }
    }
}

// Round-trip a display number through the plain renderer so previews match emitted CSS.
fn rerender(number: f64, opts: &RfsOptions) -> f64 {
    render_value(to_px(number, opts), opts).number()
}

#[cfg(test)]
#[path = "../../tests/unit/eval/reverse.rs"]
mod tests;
