use crate::eval::reverse;
use crate::foundation::error::RfsResult;
use crate::options::model::RfsOptionsDef;
use crate::options::normalize::RfsOptions;
use crate::render::value::RenderedValue;
use crate::transform::fluid;

/// Responsive font size engine bound to one set of options.
///
/// Options are validated once at construction. All operations take `&self`; changing options
/// goes through [`Rfs::reconfigure`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Rfs {
    opts: RfsOptions,
}

impl Rfs {
    /// Build an engine from caller options.
    ///
    /// # Errors
    /// Returns a configuration error if `baseValue`, `breakpoint`, `breakpointUnit` or `unit`
    /// is invalid. No engine is produced in that case.
    pub fn new(def: &RfsOptionsDef) -> RfsResult<Self> {
        Ok(Self::from_options(RfsOptions::from_def(def)?))
    }

    /// Build an engine from already validated options.
    pub fn from_options(opts: RfsOptions) -> Self {
        Self { opts }
    }

    /// Current options.
    pub fn options(&self) -> &RfsOptions {
        &self.opts
    }

    /// Swap in new options, returning the previous ones.
    pub fn reconfigure(&mut self, opts: RfsOptions) -> RfsOptions {
        tracing::debug!(
            breakpoint = opts.breakpoint,
            factor = opts.factor,
            unit = %opts.unit,
            "reconfigure rfs engine"
        );
        std::mem::replace(&mut self.opts, opts)
    }

    #[tracing::instrument(skip(self))]
    /// Render `input` without viewport scaling, e.g. `"1.25"` → `1.25rem`.
    pub fn value(&self, input: &str) -> RfsResult<RenderedValue> {
        fluid::process(input, false, &self.opts)
    }

    #[tracing::instrument(skip(self))]
    /// Render `input` as a fluid value when it exceeds the base value,
    /// e.g. `"2"` → `calc(1.325rem + 0.9vw)`.
    pub fn fluid_value(&self, input: &str) -> RfsResult<RenderedValue> {
        fluid::process(input, true, &self.opts)
    }

    /// Evaluate a previously rendered value at a viewport `width` in px.
    ///
    /// See [`crate::pixel_value_at_screen_width`] for the unit of plain results.
    pub fn pixel_value_at_screen_width(&self, rendered: &RenderedValue, width: f64) -> f64 {
        reverse::pixel_value_at_screen_width(rendered, width, &self.opts)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/rfs.rs"]
mod tests;
