//! `rfs` turns CSS lengths into responsive ("fluid") values.
//!
//! A length above a configured base value is split into a fixed term and a viewport term, so
//! `2rem` becomes `calc(1.325rem + 0.9vw)`: small on narrow screens, exactly `2rem` once the
//! viewport reaches the breakpoint. Lengths at or below the base value are rendered as-is.
//!
//! # Pipeline overview
//!
//! 1. **Normalize**: `RfsOptionsDef -> RfsOptions` (unit-suffixed lengths resolved to px, once)
//! 2. **Transform**: `&str -> RenderedValue` (plain length or fluid `calc()` value)
//! 3. **Evaluate** (optional): `RenderedValue + width -> f64` (what a preview would show)
//!
//! # Example
//!
//! ```
//! let rfs = rfs::Rfs::default();
//! let v = rfs.fluid_value("2").unwrap();
//! assert_eq!(v.to_string(), "calc(1.325rem + 0.9vw)");
//! assert_eq!(rfs.pixel_value_at_screen_width(&v, 1200.0), 32.0);
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod engine;
mod eval;
mod foundation;
mod options;
mod render;

/// Length transforms (plain and fluid).
pub mod transform;

pub use engine::rfs::Rfs;
pub use eval::preview::{PreviewRow, preview_scale, size_at_width};
pub use eval::reverse::pixel_value_at_screen_width;
pub use foundation::core::{
    BreakpointUnit, Length, Operator, Unit, ViewportUnit, parse_number_prefix,
};
pub use foundation::error::{RfsError, RfsResult};
pub use foundation::math::to_fixed;
pub use options::model::{LengthInput, RfsOptionsDef};
pub use options::normalize::RfsOptions;
pub use render::unit::render_value;
pub use render::value::{FluidValue, PlainValue, RenderedValue, Term, TermKind};
pub use transform::fluid::{is_fluid_candidate, parse_input_px, process, process_px, to_px};
