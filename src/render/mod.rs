pub mod unit;
pub mod value;
