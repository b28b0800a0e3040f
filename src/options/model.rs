use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::{RfsError, RfsResult};

/// A length option as written by the caller: a bare pixel number or a unit-suffixed string.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum LengthInput {
    /// Plain number, already in pixels.
    Px(f64),
    /// Unit-suffixed text such as `"20px"`, `"1.25rem"` or `"75em"`.
    Text(String),
}

impl From<f64> for LengthInput {
    fn from(px: f64) -> Self {
        Self::Px(px)
    }
}

impl From<&str> for LengthInput {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for LengthInput {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
/// Engine options as supplied by callers, before validation.
///
/// Every field has a default, so a partial JSON object (or `RfsOptionsDef { .. Default::default() }`)
/// overrides only the fields it names. Unknown keys are ignored.
///
/// Turn it into runtime options with [`crate::RfsOptions::from_def`] or [`crate::Rfs::new`].
pub struct RfsOptionsDef {
    /// Minimum size below which no viewport scaling is applied (`px` or `rem`).
    pub base_value: LengthInput,
    /// Output unit keyword (`rem` or `px`).
    pub unit: String,
    /// Viewport width where the fluid value reaches the requested size (`px`, `rem` or `em`).
    pub breakpoint: LengthInput,
    /// Unit the breakpoint is declared in (`px`, `rem` or `em`).
    pub breakpoint_unit: String,
    /// Scaling divisor; `<= 1` disables fluid values.
    pub factor: f64,
    /// Scale against `vmin` instead of `vw`.
    pub two_dimensional: bool,
    /// Fractional digits kept in rendered numbers.
    pub unit_precision: u32,
    /// Root font size in pixels.
    pub rem_value: f64,
    /// Name of the CSS function this engine stands in for.
    pub function_name: String,
    /// Global switch for fluid values.
    pub enable_rfs: bool,
}

impl Default for RfsOptionsDef {
    fn default() -> Self {
        Self {
            base_value: LengthInput::Px(20.0),
            unit: "rem".to_string(),
            breakpoint: LengthInput::Px(1200.0),
            breakpoint_unit: "px".to_string(),
            factor: 10.0,
            two_dimensional: false,
            unit_precision: 5,
            rem_value: 16.0,
            function_name: "rfs".to_string(),
            enable_rfs: true,
        }
    }
}

impl RfsOptionsDef {
    /// Parse options from a JSON reader; missing keys keep their defaults.
    pub fn from_reader<R: std::io::Read>(r: R) -> RfsResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| RfsError::serde(format!("parse options JSON: {e}")))
    }

    /// Parse options from a JSON string; missing keys keep their defaults.
    pub fn from_json_str(s: &str) -> RfsResult<Self> {
        serde_json::from_str(s).map_err(|e| RfsError::serde(format!("parse options JSON: {e}")))
    }

    /// Parse options from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> RfsResult<Self> {
        let path = path.as_ref();
        let f = File::open(path)
            .with_context(|| format!("open options JSON '{}'", path.display()))?;
        Self::from_reader(BufReader::new(f))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/options/model.rs"]
mod tests;
