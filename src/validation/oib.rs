use log::debug;

/// ISO 7064 MOD 11-10 check for the 11-digit Croatian OIB.
pub struct OibValidator;

impl OibValidator {
    pub const LENGTH: usize = 11;

    /// Computes the check digit for the first ten digits of an OIB.
    pub fn check_digit(digits: &[u32]) -> u32 {
        let mut sum = 10;
        for digit in digits.iter().take(Self::LENGTH - 1) {
            sum += digit;
            if sum > 10 {
                sum -= 10;
            }
            sum *= 2;
            if sum >= 11 {
                sum -= 11;
            }
        }

        // 11 - sum is in 1..=10, and 10 maps to 0
        (11 - sum) % 10
    }

    pub fn validate(chars: &[char]) -> bool {
        if chars.len() != Self::LENGTH {
            return false;
        }

        let digits: Option<Vec<u32>> = chars[..Self::LENGTH - 1]
            .iter()
            .map(|c| c.to_digit(10))
            .collect();
        let Some(digits) = digits else {
            debug!("OIB rejected: non-digit character in the first ten positions");
            return false;
        };

        let expected = char::from_digit(Self::check_digit(&digits), 10);
        if expected != Some(chars[Self::LENGTH - 1]) {
            debug!("OIB rejected: check digit mismatch");
            return false;
        }

        true
    }
}
