use crate::foundation::core::{BreakpointUnit, Length, Unit, ViewportUnit};
use crate::foundation::error::{RfsError, RfsResult};
use crate::options::model::{LengthInput, RfsOptionsDef};

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
/// Validated engine options. Lengths are resolved to pixels.
pub struct RfsOptions {
    /// Minimum size in px below which no viewport scaling is applied.
    pub base_value: f64,
    /// Output unit.
    pub unit: Unit,
    /// Breakpoint in px.
    pub breakpoint: f64,
    /// Unit the breakpoint was declared in. Not used by the scaling formula.
    pub breakpoint_unit: BreakpointUnit,
    /// Scaling divisor; `<= 1` disables fluid values.
    pub factor: f64,
    /// Scale against `vmin` instead of `vw`.
    pub two_dimensional: bool,
    /// Fractional digits kept in rendered numbers.
    pub unit_precision: u32,
    /// Root font size in px.
    pub rem_value: f64,
    /// Name of the CSS function this engine stands in for.
    pub function_name: String,
    /// Global switch for fluid values.
    pub enable_rfs: bool,
}

impl Default for RfsOptions {
    fn default() -> Self {
        Self {
            base_value: 20.0,
            unit: Unit::Rem,
            breakpoint: 1200.0,
            breakpoint_unit: BreakpointUnit::Px,
            factor: 10.0,
            two_dimensional: false,
            unit_precision: 5,
            rem_value: 16.0,
            function_name: "rfs".to_string(),
            enable_rfs: true,
        }
    }
}

impl RfsOptions {
    /// Validate caller options and resolve lengths to pixels.
    ///
    /// # Errors
    /// Fails on a `baseValue` that is not `px`/`rem`, a `breakpoint` that is not
    /// `px`/`rem`/`em`, or an unknown `breakpointUnit` or `unit` keyword.
    pub fn from_def(def: &RfsOptionsDef) -> RfsResult<Self> {
        let rem_value = def.rem_value;

        let base_value = match resolve_length(&def.base_value) {
            Some(Length::Em(_)) | None => {
                return Err(RfsError::invalid_base_value(format!(
                    "{}, it should be set in `px` or `rem`",
                    describe(&def.base_value)
                )));
            }
            Some(len) => len.to_px(rem_value),
        };

        let breakpoint = resolve_length(&def.breakpoint)
            .map(|len| len.to_px(rem_value))
            .ok_or_else(|| {
                RfsError::invalid_breakpoint(format!(
                    "{}, it should be set in `px`, `rem` or `em`",
                    describe(&def.breakpoint)
                ))
            })?;

        let breakpoint_unit = BreakpointUnit::parse(&def.breakpoint_unit).ok_or_else(|| {
            RfsError::invalid_breakpoint_unit(format!(
                "'{}', it should be `px`, `rem` or `em`",
                def.breakpoint_unit
            ))
        })?;

        let unit = Unit::parse(&def.unit).ok_or_else(|| {
            RfsError::invalid_unit(format!("'{}', it should be `px` or `rem`", def.unit))
        })?;

        let opts = Self {
            base_value,
            unit,
            breakpoint,
            breakpoint_unit,
            factor: def.factor,
            two_dimensional: def.two_dimensional,
            unit_precision: def.unit_precision,
            rem_value,
            function_name: def.function_name.clone(),
            enable_rfs: def.enable_rfs,
        };
        tracing::debug!(
            base_value = opts.base_value,
            breakpoint = opts.breakpoint,
            unit = %opts.unit,
            factor = opts.factor,
            "normalized rfs options"
        );
        Ok(opts)
    }

    /// Viewport unit used for the scaling term.
    pub fn viewport_unit(&self) -> ViewportUnit {
        ViewportUnit::for_two_dimensional(self.two_dimensional)
    }

    /// Replace the breakpoint, resolving `len` against the current root font size.
    pub fn with_breakpoint(mut self, len: Length) -> Self {
        self.breakpoint = len.to_px(self.rem_value);
        self.breakpoint_unit = match len {
            Length::Pixels(_) => BreakpointUnit::Px,
            Length::Rem(_) => BreakpointUnit::Rem,
            Length::Em(_) => BreakpointUnit::Em,
        };
        self
    }

    /// Replace the scaling factor.
    pub fn with_factor(mut self, factor: f64) -> Self {
        self.factor = factor;
        self
    }

    /// Replace the output unit.
    pub fn with_unit(mut self, unit: Unit) -> Self {
        self.unit = unit;
        self
    }
}

fn resolve_length(input: &LengthInput) -> Option<Length> {
    match input {
        LengthInput::Px(px) => Some(Length::Pixels(*px)),
        LengthInput::Text(s) => Length::parse(s),
    }
}

fn describe(input: &LengthInput) -> String {
    match input {
        LengthInput::Px(px) => px.to_string(),
        LengthInput::Text(s) => format!("'{s}'"),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/options/normalize.rs"]
mod tests;
