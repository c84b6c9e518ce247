pub mod identifier_validator;
pub mod models;
pub mod utils;
pub mod validation;

pub use identifier_validator::{is_valid_identifier, try_validate, validate, IdentifierValidator};
pub use models::{Gender, Region, ValidationResult};
pub use utils::IdentifierError;
