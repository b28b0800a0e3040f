pub mod preview;
pub mod reverse;
