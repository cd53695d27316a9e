pub mod address;
pub mod range;
