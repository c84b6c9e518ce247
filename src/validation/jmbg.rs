use crate::models::{Gender, Region};
use log::debug;

const WEIGHT_FACTORS: [u32; 12] = [7, 6, 5, 4, 3, 2, 7, 6, 5, 4, 3, 2];

/// Structural checks for the 13-digit JMBG: digits, checksum, region and gender.
pub struct JmbgValidator;

impl JmbgValidator {
    pub const LENGTH: usize = 13;

    /// Validates the structure of a JMBG and classifies it.
    ///
    /// Returns `None` when any stage rejects the number. The birth date is
    /// handled separately by `BirthDateValidator`.
    pub fn classify(chars: &[char]) -> Option<(Region, Gender)> {
        if chars.len() != Self::LENGTH {
            debug!("JMBG rejected: expected {} characters, got {}", Self::LENGTH, chars.len());
            return None;
        }

        let digits: Option<Vec<u32>> = chars.iter().map(|c| c.to_digit(10)).collect();
        let Some(digits) = digits else {
            debug!("JMBG rejected: contains non-digit characters");
            return None;
        };

        let Some(expected) = Self::check_digit(&digits) else {
            debug!("JMBG rejected: weighted sum leaves residue 1");
            return None;
        };
        if expected != digits[12] {
            debug!("JMBG rejected: check digit mismatch");
            return None;
        }

        let Some(region) = Self::region(digits[7], digits[8]) else {
            debug!("JMBG rejected: unknown region code {}{}", digits[7], digits[8]);
            return None;
        };

        Some((region, Self::gender(&digits[9..12])))
    }

    /// Computes the check digit for the first twelve digits.
    ///
    /// A residue of 1 has no valid check digit and yields `None`.
    pub fn check_digit(digits: &[u32]) -> Option<u32> {
        let sum: u32 = digits
            .iter()
            .zip(WEIGHT_FACTORS.iter())
            .map(|(d, w)| d * w)
            .sum();

        match sum % 11 {
            0 => Some(0),
            1 => None,
            residue => Some(11 - residue),
        }
    }

    // Only the first digit selects the republic, except for the exact code 03.
    fn region(first: u32, second: u32) -> Option<Region> {
        if (first, second) == (0, 3) {
            return Some(Region::Foreign);
        }

        match first {
            1 => Some(Region::BosniaAndHerzegovina),
            2 => Some(Region::Montenegro),
            3 => Some(Region::Croatia),
            4 => Some(Region::Macedonia),
            5 => Some(Region::Slovenia),
            7 => Some(Region::Serbia),
            8 => Some(Region::SerbiaVojvodina),
            9 => Some(Region::RepublicOfKosovo),
            _ => None,
        }
    }

    fn gender(serial: &[u32]) -> Gender {
        let number = serial.iter().fold(0, |acc, d| acc * 10 + d);
        if number < 500 {
            Gender::Male
        } else {
            Gender::Female
        }
    }
}
