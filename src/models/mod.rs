pub mod data;

pub use data::{Gender, Region, ValidationResult};
