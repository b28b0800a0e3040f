use std::fmt;

/// Output unit for rendered lengths.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// Pixels.
    Px,
    /// Root ems, converted with the configured root font size.
    #[default]
    Rem,
}

impl Unit {
    /// CSS suffix for this unit.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Px => "px",
            Self::Rem => "rem",
        }
    }

    /// Parse a unit keyword (`px` or `rem`).
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "px" => Some(Self::Px),
            "rem" => Some(Self::Rem),
            _ => None,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unit the breakpoint was declared in. Informational only, the breakpoint itself is kept in px.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum BreakpointUnit {
    /// Pixels.
    #[default]
    Px,
    /// Root ems.
    Rem,
    /// Ems (treated as root ems).
    Em,
}

impl BreakpointUnit {
    /// Parse a breakpoint unit keyword (`px`, `rem` or `em`).
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "px" => Some(Self::Px),
            "rem" => Some(Self::Rem),
            "em" => Some(Self::Em),
            _ => None,
        }
    }

    /// CSS suffix for this unit.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Px => "px",
            Self::Rem => "rem",
            Self::Em => "em",
        }
    }
}

impl fmt::Display for BreakpointUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Viewport-relative unit used for the scaling term.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewportUnit {
    /// Percent of viewport width.
    Vw,
    /// Percent of the smaller viewport dimension.
    Vmin,
}

impl ViewportUnit {
    /// `vmin` when scaling in two dimensions, `vw` otherwise.
    pub fn for_two_dimensional(two_dimensional: bool) -> Self {
        if two_dimensional { Self::Vmin } else { Self::Vw }
    }

    /// CSS suffix for this unit.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Vw => "vw",
            Self::Vmin => "vmin",
        }
    }
}

impl fmt::Display for ViewportUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operator joining the fixed and viewport terms of a fluid value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Operator {
    /// `+`, used for positive lengths.
    #[serde(rename = "+")]
    Plus,
    /// `-`, used for negative lengths.
    #[serde(rename = "-")]
    Minus,
}

impl Operator {
    /// Apply the operator to `lhs` and `rhs`.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Plus => lhs + rhs,
            Self::Minus => lhs - rhs,
        }
    }

    /// Operator symbol.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A unit-tagged length read from an option string such as `"20px"` or `"75em"`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Length {
    /// Pixels.
    Pixels(f64),
    /// Root ems.
    Rem(f64),
    /// Ems, resolved against the root font size.
    Em(f64),
}

impl Length {
    /// Parse `<number><unit>` where unit is `px`, `rem` or `em`.
    ///
    /// Only the suffix and the leading number are inspected, anything in between is ignored.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        let value = parse_number_prefix(s)?;
        if s.ends_with("px") {
            Some(Self::Pixels(value))
        } else if s.ends_with("rem") {
            Some(Self::Rem(value))
        } else if s.ends_with("em") {
            Some(Self::Em(value))
        } else {
            None
        }
    }

    /// Resolve to pixels using `rem_value` px per (r)em.
    pub fn to_px(self, rem_value: f64) -> f64 {
        match self {
            Self::Pixels(v) => v,
            Self::Rem(v) | Self::Em(v) => v * rem_value,
        }
    }
}

/// Parse the longest leading decimal number of `s`, ignoring any trailing text.
///
/// Accepts leading whitespace, a sign, digits with an optional fraction, and an exponent.
/// Returns `None` when no digits are found or the number is not finite.
pub fn parse_number_prefix(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while bytes.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
        i
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_end = digits_from(end);
    let mut digits = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        let frac_digits = frac_end - (end + 1);
        if digits > 0 || frac_digits > 0 {
            digits += frac_digits;
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_start = end + 1;
        if matches!(bytes.get(exp_start), Some(b'+' | b'-')) {
            exp_start += 1;
        }
        let exp_end = digits_from(exp_start);
        if exp_end > exp_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
