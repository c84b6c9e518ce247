use crate::models::{Gender, Region, ValidationResult};
use crate::utils::IdentifierError;
use crate::validation::*;
use chrono::{Local, NaiveDate};
use log::debug;

/// Validates JMBG numbers and, when enabled, 11-digit OIB numbers.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentifierValidator {
    accept_oib: bool,
}

impl IdentifierValidator {
    /// Creates a validator that accepts only the 13-digit JMBG form.
    pub fn new() -> Self {
        IdentifierValidator { accept_oib: false }
    }

    pub fn with_oib(accept_oib: bool) -> Self {
        IdentifierValidator { accept_oib }
    }

    /// Whether 11-character values are checked as OIB.
    pub fn accepts_oib(&self) -> bool {
        self.accept_oib
    }

    pub fn validate(&self, value: &str) -> ValidationResult {
        let today = Local::now().naive_local().date();
        self.validate_on(value, today)
    }

    /// Validates `value`, judging birth date plausibility against `today`.
    pub fn validate_on(&self, value: &str, today: NaiveDate) -> ValidationResult {
        let chars: Vec<char> = value.chars().collect();

        if self.accept_oib && chars.len() == OibValidator::LENGTH {
            debug!("Validating {} character value as OIB", chars.len());
            return self.validate_oib(value, &chars);
        }

        self.validate_jmbg(value, &chars, today)
    }

    fn validate_oib(&self, value: &str, chars: &[char]) -> ValidationResult {
        ValidationResult {
            is_valid: OibValidator::validate(chars),
            ..ValidationResult::rejected(value)
        }
    }

    fn validate_jmbg(&self, value: &str, chars: &[char], today: NaiveDate) -> ValidationResult {
        // Step 1: Salvage the birth date regardless of what follows
        let birth_date = BirthDateValidator::extract(chars);
        let is_birth_date_valid = birth_date
            .map(|date| BirthDateValidator::is_plausible(date, today))
            .unwrap_or(false);

        // Step 2: Length, digits, checksum, region and gender
        let classification = JmbgValidator::classify(chars);
        let (region, gender) = classification.unwrap_or((Region::Unknown, Gender::Unknown));

        ValidationResult {
            raw_value: value.to_string(),
            birth_date,
            is_birth_date_valid,
            region,
            gender,
            is_valid: classification.is_some(),
        }
    }
}

/// Validates a JMBG, or also an OIB when `accept_alternate_form` is set.
pub fn validate(value: &str, accept_alternate_form: bool) -> ValidationResult {
    IdentifierValidator::with_oib(accept_alternate_form).validate(value)
}

pub fn is_valid_identifier(value: &str, accept_alternate_form: bool) -> bool {
    validate(value, accept_alternate_form).is_valid()
}

/// Like [`validate`], but reports a missing value as an error.
pub fn try_validate(
    value: Option<&str>,
    accept_alternate_form: bool,
) -> Result<ValidationResult, IdentifierError> {
    let value = value.ok_or(IdentifierError::MissingInput)?;
    Ok(validate(value, accept_alternate_form))
}
