// risk_core/src/age.rs

use chrono::{Datelike, NaiveDate};
use models::errors::{ValidationError, ValidationResult};

/// Whole completed calendar years between `birth` and `today`.
///
/// This is a calendar-period difference, not `days / 365`: the year count
/// only increments once the birthday has passed in the current year. A
/// birth date after `today` is rejected.
pub fn age_in_years(birth: NaiveDate, today: NaiveDate) -> ValidationResult<i32> {
    if birth > today {
        return Err(ValidationError::BirthDateInFuture(birth));
    }

    let mut years = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }
    Ok(years)
}

#[cfg(test)]
mod tests {
    use super::age_in_years;
    use chrono::NaiveDate;
    use models::errors::ValidationError;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn should_not_count_year_before_birthday() {
        let birth = date(1995, 6, 15);
        assert_eq!(age_in_years(birth, date(2025, 6, 14)).unwrap(), 29);
        assert_eq!(age_in_years(birth, date(2025, 6, 15)).unwrap(), 30);
        assert_eq!(age_in_years(birth, date(2025, 6, 16)).unwrap(), 30);
    }

    #[test]
    fn should_handle_leap_day_birth() {
        let birth = date(2000, 2, 29);
        // Feb 28 of a non-leap year: the birthday has not passed yet.
        assert_eq!(age_in_years(birth, date(2025, 2, 28)).unwrap(), 24);
        assert_eq!(age_in_years(birth, date(2025, 3, 1)).unwrap(), 25);
    }

    #[test]
    fn should_be_zero_within_first_year() {
        let birth = date(2025, 1, 10);
        assert_eq!(age_in_years(birth, date(2025, 12, 31)).unwrap(), 0);
        assert_eq!(age_in_years(birth, birth).unwrap(), 0);
    }

    #[test]
    fn should_reject_birth_date_in_future() {
        let birth = date(2030, 1, 1);
        let err = age_in_years(birth, date(2025, 1, 1)).unwrap_err();
        assert_eq!(err, ValidationError::BirthDateInFuture(birth));
    }
}
