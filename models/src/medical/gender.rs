use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{ValidationError, ValidationResult};

/// The two gender categories the risk rule table distinguishes.
///
/// Parsing is case-insensitive and accepts both the long spelling used by
/// the patient collaborator (`Male`/`Female`) and the one-letter shorthand
/// (`M`/`F`). Anything else is a [`ValidationError::UnrecognizedGender`] —
/// classification must never fall back to a default category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl FromStr for Gender {
    type Err = ValidationError;

    fn from_str(s: &str) -> ValidationResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            _ => Err(ValidationError::UnrecognizedGender(s.to_string())),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "Male"),
            Gender::Female => write!(f, "Female"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Gender;
    use crate::errors::ValidationError;

    #[test]
    fn should_parse_long_and_short_spellings() {
        assert_eq!("Male".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!("female".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!("M".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!("f".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!("FEMALE".parse::<Gender>().unwrap(), Gender::Female);
    }

    #[test]
    fn should_reject_unrecognized_gender() {
        let err = "Unknown".parse::<Gender>().unwrap_err();
        assert_eq!(err, ValidationError::UnrecognizedGender("Unknown".to_string()));
        assert!("".parse::<Gender>().is_err());
    }
}
