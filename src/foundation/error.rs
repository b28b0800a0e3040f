/// Convenience result type used across the engine.
pub type RfsResult<T> = Result<T, RfsError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum RfsError {
    /// `baseValue` option carries a unit other than `px` or `rem`, or no number.
    #[error("invalid base value: {0}")]
    InvalidBaseValue(String),

    /// `breakpoint` option carries a unit other than `px`, `rem` or `em`, or no number.
    #[error("invalid breakpoint: {0}")]
    InvalidBreakpoint(String),

    /// `breakpointUnit` option is not one of `px`, `rem` or `em`.
    #[error("invalid breakpoint unit: {0}")]
    InvalidBreakpointUnit(String),

    /// `unit` option is not one of `px` or `rem`.
    #[error("invalid unit: {0}")]
    InvalidUnit(String),

    /// A value handed to the transformer has no parseable numeric prefix.
    #[error("invalid value: {0}")]
    InvalidValue(String),

    /// Errors when serializing or deserializing options or results.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RfsError {
    /// Build a [`RfsError::InvalidBaseValue`] value.
    pub fn invalid_base_value(msg: impl Into<String>) -> Self {
        Self::InvalidBaseValue(msg.into())
    }

    /// Build a [`RfsError::InvalidBreakpoint`] value.
    pub fn invalid_breakpoint(msg: impl Into<String>) -> Self {
        Self::InvalidBreakpoint(msg.into())
    }

    /// Build a [`RfsError::InvalidBreakpointUnit`] value.
    pub fn invalid_breakpoint_unit(msg: impl Into<String>) -> Self {
        Self::InvalidBreakpointUnit(msg.into())
    }

    /// Build a [`RfsError::InvalidUnit`] value.
    pub fn invalid_unit(msg: impl Into<String>) -> Self {
        Self::InvalidUnit(msg.into())
    }

    /// Build a [`RfsError::InvalidValue`] value.
    pub fn invalid_value(msg: impl Into<String>) -> Self {
        Self::InvalidValue(msg.into())
    }

    /// Build a [`RfsError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Whether this error is raised while normalizing options.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Self::InvalidBaseValue(_)
                | Self::InvalidBreakpoint(_)
                | Self::InvalidBreakpointUnit(_)
                | Self::InvalidUnit(_)
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
