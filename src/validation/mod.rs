pub mod birth_date;
pub mod jmbg;
pub mod oib;

pub use birth_date::BirthDateValidator;
pub use jmbg::JmbgValidator;
pub use oib::OibValidator;
