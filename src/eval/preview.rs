use crate::engine::rfs::Rfs;
use crate::foundation::core::Unit;
use crate::foundation::error::RfsResult;
use crate::render::value::RenderedValue;

/// One row of a type-scale preview.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PreviewRow {
    /// Caller-supplied label, e.g. `h1` or `body`.
    pub label: String,
    /// Requested size in rem.
    pub size_rem: f64,
    /// CSS emitted for the size.
    pub css: String,
    /// Rendered size at the preview width, rounded up to whole px.
    pub px: f64,
}

/// Rendered size in whole px (rounded up) of a `size_rem` font size at `width` px.
///
/// The size goes through the fluid transform as `"<size_rem>rem"`, so it is read in the
/// engine's configured unit like any other input. Sizes left unscaled are converted back to px
/// before rounding.
pub fn size_at_width(rfs: &Rfs, size_rem: f64, width: f64) -> RfsResult<f64> {
    let (_, px) = render_at(rfs, size_rem, width)?;
    Ok(px)
}

fn render_at(rfs: &Rfs, size_rem: f64, width: f64) -> RfsResult<(RenderedValue, f64)> {
    let rendered = rfs.fluid_value(&format!("{size_rem}rem"))?;
    let opts = rfs.options();
    let mut px = rfs.pixel_value_at_screen_width(&rendered, width);
    // Plain results come back in the display unit.
    if !rendered.is_fluid() && opts.unit == Unit::Rem {
        px *= opts.rem_value;
    }
    Ok((rendered, px.ceil()))
}

/// Preview every `(label, size_rem)` pair at `width` px.
pub fn preview_scale<'a>(
    rfs: &Rfs,
    sizes: impl IntoIterator<Item = (&'a str, f64)>,
    width: f64,
) -> RfsResult<Vec<PreviewRow>> {
    sizes
        .into_iter()
        .map(|(label, size_rem)| {
            let (rendered, px) = render_at(rfs, size_rem, width)?;
            Ok(PreviewRow {
                label: label.to_string(),
                size_rem,
                css: rendered.to_string(),
                px,
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/eval/preview.rs"]
mod tests;
