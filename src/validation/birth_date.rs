use chrono::NaiveDate;
use log::trace;

pub struct BirthDateValidator;

impl BirthDateValidator {
    /// Number of leading characters holding `DDMMYYY`.
    pub const PREFIX_LENGTH: usize = 7;

    /// Extracts the birth date from the `DDMMYYY` prefix of a JMBG.
    ///
    /// Three digit years below 800 belong to the 2000s, the rest to 1800-1999.
    pub fn extract(chars: &[char]) -> Option<NaiveDate> {
        if chars.len() < Self::PREFIX_LENGTH {
            return None;
        }
        let prefix: String = chars[..Self::PREFIX_LENGTH].iter().collect();

        let day = Self::parse_field(&chars[0..2])?;
        let month = Self::parse_field(&chars[2..4])?;
        let mut year = Self::parse_field(&chars[4..7])? as i32 + 1000;
        if year < 1800 {
            year += 1000;
        }

        let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
            trace!("Birth date rejected: {}-{}-{} is not a calendar date", year, month, day);
            return None;
        };

        // The date must print back to exactly the same seven characters
        let year_digits = date.format("%Y").to_string();
        let canonical = format!("{}{}", date.format("%d%m"), &year_digits[1..]);
        if canonical != prefix {
            trace!("Birth date rejected: {} does not round-trip to {}", prefix, canonical);
            return None;
        }

        Some(date)
    }

    /// A birth date is plausible when it is not later than `today`.
    pub fn is_plausible(date: NaiveDate, today: NaiveDate) -> bool {
        date <= today
    }

    fn parse_field(chars: &[char]) -> Option<u32> {
        chars.iter().collect::<String>().parse::<u32>().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(value: &str) -> Option<NaiveDate> {
        BirthDateValidator::extract(&value.chars().collect::<Vec<_>>())
    }

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_twentieth_century_year() {
        assert_eq!(extract("0101990123456"), Some(ymd(1990, 1, 1)));
        assert_eq!(extract("2801979"), Some(ymd(1979, 1, 28)));
    }

    #[test]
    fn test_year_disambiguation() {
        assert_eq!(extract("0101006"), Some(ymd(2006, 1, 1)));
        assert_eq!(extract("0101799"), Some(ymd(2799, 1, 1)));
        assert_eq!(extract("0101800"), Some(ymd(1800, 1, 1)));
        assert_eq!(extract("0101000"), Some(ymd(2000, 1, 1)));
    }

    #[test]
    fn test_leap_day() {
        assert_eq!(extract("2902000380009"), Some(ymd(2000, 2, 29)));
        assert_eq!(extract("2902001"), None);
    }

    #[test]
    fn test_impossible_dates() {
        assert_eq!(extract("3102990330008"), None);
        assert_eq!(extract("3201990"), None);
        assert_eq!(extract("0113990"), None);
        assert_eq!(extract("0001990"), None);
        assert_eq!(extract("0100990"), None);
    }

    #[test]
    fn test_non_canonical_digits_rejected() {
        assert_eq!(extract("+101990"), None);
        assert_eq!(extract("01+1990"), None);
        assert_eq!(extract("0101+99"), None);
        assert_eq!(extract("ab01990"), None);
    }

    #[test]
    fn test_short_input() {
        assert_eq!(extract("010199"), None);
        assert_eq!(extract(""), None);
    }

    #[test]
    fn test_plausibility() {
        let today = ymd(2024, 6, 1);
        assert!(BirthDateValidator::is_plausible(ymd(1990, 1, 1), today));
        assert!(BirthDateValidator::is_plausible(today, today));
        assert!(!BirthDateValidator::is_plausible(ymd(2024, 6, 2), today));
    }
}
