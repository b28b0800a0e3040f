use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::foundation::core::{Operator, Unit, ViewportUnit};

/// A non-fluid rendered length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PlainValue {
    /// Zero, rendered without a unit.
    Zero,
    /// A rounded number in `unit`.
    Length {
        /// Rounded magnitude in `unit`.
        value: f64,
        /// Display unit.
        unit: Unit,
    },
}

impl PlainValue {
    /// Numeric magnitude in the display unit (`0` for [`PlainValue::Zero`]).
    pub fn number(self) -> f64 {
        match self {
            Self::Zero => 0.0,
            Self::Length { value, .. } => value,
        }
    }
}

impl fmt::Display for PlainValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zero => f.write_str("0"),
            Self::Length { value, unit } => write!(f, "{value}{unit}"),
        }
    }
}

impl Serialize for PlainValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Zero => serializer.serialize_u8(0),
            Self::Length { .. } => serializer.collect_str(self),
        }
    }
}

/// Which half of a fluid value a [`Term`] is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TermKind {
    /// Fixed size in the configured output unit.
    Fixed(Unit),
    /// Viewport-proportional coefficient.
    Viewport(ViewportUnit),
}

impl TermKind {
    /// CSS suffix of the term's unit.
    pub fn unit_str(self) -> &'static str {
        match self {
            Self::Fixed(unit) => unit.as_str(),
            Self::Viewport(unit) => unit.as_str(),
        }
    }
}

/// One unit-tagged number of a fluid value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Term {
    /// Unit tag.
    pub kind: TermKind,
    /// Rounded magnitude.
    pub value: f64,
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.kind.unit_str())
    }
}

/// A length split into a fixed term and a viewport term, joined by an operator.
///
/// The fixed term carries the sign of the original length; the viewport coefficient is always a
/// magnitude and `operator` says whether it is added or subtracted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FluidValue {
    fixed: f64,
    unit: Unit,
    coefficient: f64,
    viewport_unit: ViewportUnit,
    operator: Operator,
}

impl FluidValue {
    /// Assemble a fluid value from already rounded components.
    pub fn new(
        fixed: f64,
        unit: Unit,
        coefficient: f64,
        viewport_unit: ViewportUnit,
        operator: Operator,
    ) -> Self {
        Self {
            fixed,
            unit,
            coefficient,
            viewport_unit,
            operator,
        }
    }

    /// Fixed term, in the configured output unit.
    pub fn fixed(&self) -> Term {
        Term {
            kind: TermKind::Fixed(self.unit),
            value: self.fixed,
        }
    }

    /// Viewport term.
    pub fn viewport(&self) -> Term {
        Term {
            kind: TermKind::Viewport(self.viewport_unit),
            value: self.coefficient,
        }
    }

    /// Operator joining the two terms.
    pub fn operator(&self) -> Operator {
        self.operator
    }
}

impl fmt::Display for FluidValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "calc({} {} {})",
            self.fixed(),
            self.operator,
            self.viewport()
        )
    }
}

// Serialized as `{"rem": 1.325, "vw": 0.9, "operator": "+"}`, keyed by unit.
impl Serialize for FluidValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry(self.unit.as_str(), &self.fixed)?;
        map.serialize_entry(self.viewport_unit.as_str(), &self.coefficient)?;
        map.serialize_entry("operator", &self.operator)?;
        map.end()
    }
}

/// Output of the transformer: a plain length or a fluid one.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum RenderedValue {
    /// Plain length, no viewport scaling.
    Plain(PlainValue),
    /// Fluid length.
    Fluid(FluidValue),
}

impl RenderedValue {
    /// The fluid value, if any.
    pub fn as_fluid(&self) -> Option<&FluidValue> {
        match self {
            Self::Fluid(v) => Some(v),
            Self::Plain(_) => None,
        }
    }

    /// The plain value, if any.
    pub fn as_plain(&self) -> Option<PlainValue> {
        match self {
            Self::Plain(v) => Some(*v),
            Self::Fluid(_) => None,
        }
    }

    /// Whether viewport scaling was applied.
    pub fn is_fluid(&self) -> bool {
        matches!(self, Self::Fluid(_))
    }
}

impl From<PlainValue> for RenderedValue {
    fn from(v: PlainValue) -> Self {
        Self::Plain(v)
    }
}

impl From<FluidValue> for RenderedValue {
    fn from(v: FluidValue) -> Self {
        Self::Fluid(v)
    }
}

impl fmt::Display for RenderedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain(v) => fmt::Display::fmt(v, f),
            Self::Fluid(v) => fmt::Display::fmt(v, f),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/value.rs"]
mod tests;
