use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::fmt;

/// Region of registration encoded in digits 8 and 9 of a JMBG.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Region {
    #[default]
    Unknown,
    BosniaAndHerzegovina,
    Montenegro,
    Croatia,
    Macedonia,
    Slovenia,
    Serbia,
    SerbiaVojvodina,
    RepublicOfKosovo,
    Foreign,
}

impl Region {
    pub fn code(&self) -> u8 {
        match self {
            Region::Unknown => 0,
            Region::BosniaAndHerzegovina => 1,
            Region::Montenegro => 2,
            Region::Croatia => 3,
            Region::Macedonia => 4,
            Region::Slovenia => 5,
            Region::Serbia => 7,
            Region::SerbiaVojvodina => 8,
            Region::RepublicOfKosovo => 9,
            Region::Foreign => 10,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Region::Unknown => "Unknown",
            Region::BosniaAndHerzegovina => "Bosnia and Herzegovina",
            Region::Montenegro => "Montenegro",
            Region::Croatia => "Croatia",
            Region::Macedonia => "Macedonia",
            Region::Slovenia => "Slovenia",
            Region::Serbia => "Serbia",
            Region::SerbiaVojvodina => "Vojvodina (Serbia)",
            Region::RepublicOfKosovo => "Republic of Kosovo",
            Region::Foreign => "Foreign",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.description())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Gender {
    #[default]
    Unknown,
    Male,
    Female,
}

impl Gender {
    pub fn code(&self) -> u8 {
        match self {
            Gender::Unknown => 0,
            Gender::Male => 1,
            Gender::Female => 2,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Gender::Unknown => "Unknown",
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Outcome of validating a single JMBG or OIB candidate.
///
/// Built once by the validator and read-only afterwards. A birth date is kept
/// even when a later stage rejects the identifier, so callers can still use
/// the salvageable prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub(crate) raw_value: String,
    pub(crate) birth_date: Option<NaiveDate>,
    pub(crate) is_birth_date_valid: bool,
    pub(crate) region: Region,
    pub(crate) gender: Gender,
    pub(crate) is_valid: bool,
}

impl ValidationResult {
    pub(crate) fn rejected(raw_value: &str) -> Self {
        ValidationResult {
            raw_value: raw_value.to_string(),
            birth_date: None,
            is_birth_date_valid: false,
            region: Region::Unknown,
            gender: Gender::Unknown,
            is_valid: false,
        }
    }

    /// The input exactly as given.
    pub fn raw_value(&self) -> &str {
        &self.raw_value
    }

    pub fn birth_date(&self) -> Option<NaiveDate> {
        self.birth_date
    }

    /// True when a birth date was extracted and it is not in the future.
    pub fn is_birth_date_valid(&self) -> bool {
        self.is_birth_date_valid
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Returns the identifier when valid, otherwise the `DDMMYYY` birth date
    /// prefix when that part alone is plausible, otherwise an empty string.
    pub fn format(&self) -> String {
        if self.is_valid {
            return self.raw_value.clone();
        }

        match self.birth_date {
            Some(date) if self.is_birth_date_valid => {
                format!("{}{:03}", date.format("%d%m"), date.year() % 1000)
            }
            _ => String::new(),
        }
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.format())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_with_date(raw: &str, date: NaiveDate, plausible: bool) -> ValidationResult {
        ValidationResult {
            birth_date: Some(date),
            is_birth_date_valid: plausible,
            ..ValidationResult::rejected(raw)
        }
    }

    #[test]
    fn test_region_codes_and_labels() {
        assert_eq!(Region::default(), Region::Unknown);
        assert_eq!(Region::Serbia.code(), 7);
        assert_eq!(Region::RepublicOfKosovo.code(), 9);
        assert_eq!(Region::Foreign.code(), 10);
        assert_eq!(Region::SerbiaVojvodina.to_string(), "Vojvodina (Serbia)");
        assert_eq!(Region::BosniaAndHerzegovina.description(), "Bosnia and Herzegovina");
    }

    #[test]
    fn test_gender_codes_and_labels() {
        assert_eq!(Gender::default(), Gender::Unknown);
        assert_eq!(Gender::Male.code(), 1);
        assert_eq!(Gender::Female.code(), 2);
        assert_eq!(Gender::Female.to_string(), "Female");
    }

    #[test]
    fn test_format_invalid_with_plausible_birth_date() {
        let date = NaiveDate::from_ymd_opt(1979, 1, 28).unwrap();
        let result = result_with_date("2801979330007", date, true);
        assert_eq!(result.format(), "2801979");
        assert_eq!(result.to_string(), "2801979");
    }

    #[test]
    fn test_format_pads_year_tail() {
        let date = NaiveDate::from_ymd_opt(2006, 1, 1).unwrap();
        let result = result_with_date("0101006", date, true);
        assert_eq!(result.format(), "0101006");
    }

    #[test]
    fn test_format_future_birth_date_is_empty() {
        let date = NaiveDate::from_ymd_opt(2799, 1, 1).unwrap();
        let result = result_with_date("0101799", date, false);
        assert_eq!(result.format(), "");
    }

    #[test]
    fn test_format_valid_returns_raw_value() {
        let result = ValidationResult {
            is_valid: true,
            ..ValidationResult::rejected("69435151530")
        };
        assert_eq!(result.format(), "69435151530");
    }

    #[test]
    fn test_serialize_birth_date_as_iso_8601() {
        let date = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap();
        let value = serde_json::to_value(result_with_date("0101990123456", date, true)).unwrap();
        assert_eq!(value["raw_value"], "0101990123456");
        assert_eq!(value["birth_date"], "1990-01-01");
        assert_eq!(value["is_birth_date_valid"], true);
        assert_eq!(value["region"], "Unknown");
        assert_eq!(value["gender"], "Unknown");
        assert_eq!(value["is_valid"], false);
    }

    #[test]
    fn test_serialize_missing_birth_date_as_null() {
        let value = serde_json::to_value(ValidationResult::rejected("12345678901")).unwrap();
        assert!(value["birth_date"].is_null());
        assert_eq!(value["region"], "Unknown");
    }

    #[test]
    fn test_format_rejected_without_date_is_empty() {
        assert_eq!(ValidationResult::rejected("abc").format(), "");
    }
}
