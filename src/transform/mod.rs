//! Length transforms: plain rendering and fluid viewport scaling.

pub mod fluid;
