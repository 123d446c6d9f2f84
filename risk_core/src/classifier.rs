// risk_core/src/classifier.rs

use std::ops::RangeInclusive;

use models::errors::{ValidationError, ValidationResult};
use models::{Gender, RiskLevel};

/// The two age bands the rule table distinguishes. The 30-year threshold
/// comes from the clinical protocol and applies to completed years.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeBand {
    Under30,
    ThirtyAndOver,
}

impl AgeBand {
    fn contains(&self, age: i32) -> bool {
        match self {
            AgeBand::Under30 => age < 30,
            AgeBand::ThirtyAndOver => age >= 30,
        }
    }
}

/// One row of the risk decision table: a priority-tagged predicate over
/// (age band, gender, signal count) and the level it yields.
#[derive(Debug, Clone)]
pub struct RiskRule {
    pub priority: u8,
    pub age: AgeBand,
    /// `None` matches either gender.
    pub gender: Option<Gender>,
    pub signals: RangeInclusive<u32>,
    pub level: RiskLevel,
}

impl RiskRule {
    pub fn matches(&self, signal_count: u32, age: i32, gender: Gender) -> bool {
        self.age.contains(age)
            && self.gender.is_none_or(|g| g == gender)
            && self.signals.contains(&signal_count)
    }
}

/// The decision table, in evaluation order. Rules are not mutually
/// exclusive by their ranges alone; the first matching row wins, and
/// anything unmatched falls through to `NoRisk`.
static RULES: [RiskRule; 7] = [
    RiskRule {
        priority: 1,
        age: AgeBand::Under30,
        gender: Some(Gender::Male),
        signals: 5..=u32::MAX,
        level: RiskLevel::EarlyOnset,
    },
    RiskRule {
        priority: 1,
        age: AgeBand::Under30,
        gender: Some(Gender::Female),
        signals: 7..=u32::MAX,
        level: RiskLevel::EarlyOnset,
    },
    RiskRule {
        priority: 1,
        age: AgeBand::ThirtyAndOver,
        gender: None,
        signals: 8..=u32::MAX,
        level: RiskLevel::EarlyOnset,
    },
    RiskRule {
        priority: 2,
        age: AgeBand::Under30,
        gender: Some(Gender::Male),
        signals: 3..=3,
        level: RiskLevel::InDanger,
    },
    RiskRule {
        priority: 2,
        age: AgeBand::Under30,
        gender: Some(Gender::Female),
        signals: 4..=4,
        level: RiskLevel::InDanger,
    },
    RiskRule {
        priority: 2,
        age: AgeBand::ThirtyAndOver,
        gender: None,
        signals: 6..=7,
        level: RiskLevel::InDanger,
    },
    RiskRule {
        priority: 3,
        age: AgeBand::ThirtyAndOver,
        gender: None,
        signals: 2..=5,
        level: RiskLevel::Borderline,
    },
];

/// The ordered rule table, exposed so the tie-break order can be inspected
/// and tested in isolation.
pub fn rules() -> &'static [RiskRule] {
    &RULES
}

/// Maps (signal count, age, gender) to a risk level by first-match lookup
/// over [`rules`]. Pure function; rejects a negative age. Signal-count
/// bands the table does not list fall through to `NoRisk` by design.
pub fn classify(signal_count: u32, age: i32, gender: Gender) -> ValidationResult<RiskLevel> {
    if age < 0 {
        return Err(ValidationError::NegativeAge(age));
    }

    let level = RULES
        .iter()
        .find(|rule| rule.matches(signal_count, age, gender))
        .map(|rule| rule.level)
        .unwrap_or(RiskLevel::NoRisk);
    Ok(level)
}

#[cfg(test)]
mod tests {
    use super::{classify, rules};
    use models::errors::ValidationError;
    use models::{Gender, RiskLevel};

    #[test]
    fn should_flag_early_onset_for_young_male_at_five_signals() {
        assert_eq!(classify(5, 29, Gender::Male).unwrap(), RiskLevel::EarlyOnset);
        assert_eq!(classify(9, 18, Gender::Male).unwrap(), RiskLevel::EarlyOnset);
    }

    #[test]
    fn should_not_flag_young_male_below_five_signals() {
        // Four signals match no rule for a young male: InDanger requires
        // exactly three, so this falls through to NoRisk.
        assert_eq!(classify(4, 29, Gender::Male).unwrap(), RiskLevel::NoRisk);
    }

    #[test]
    fn should_flag_in_danger_for_young_male_at_exactly_three_signals() {
        assert_eq!(classify(3, 29, Gender::Male).unwrap(), RiskLevel::InDanger);
        assert_eq!(classify(2, 29, Gender::Male).unwrap(), RiskLevel::NoRisk);
    }

    #[test]
    fn should_use_female_thresholds_under_thirty() {
        assert_eq!(classify(4, 29, Gender::Female).unwrap(), RiskLevel::InDanger);
        assert_eq!(classify(7, 29, Gender::Female).unwrap(), RiskLevel::EarlyOnset);
        assert_eq!(classify(5, 29, Gender::Female).unwrap(), RiskLevel::NoRisk);
        assert_eq!(classify(6, 29, Gender::Female).unwrap(), RiskLevel::NoRisk);
    }

    #[test]
    fn should_band_signals_for_patients_thirty_and_over() {
        for gender in [Gender::Male, Gender::Female] {
            assert_eq!(classify(8, 30, gender).unwrap(), RiskLevel::EarlyOnset);
            assert_eq!(classify(7, 30, gender).unwrap(), RiskLevel::InDanger);
            assert_eq!(classify(6, 30, gender).unwrap(), RiskLevel::InDanger);
            assert_eq!(classify(5, 30, gender).unwrap(), RiskLevel::Borderline);
            assert_eq!(classify(2, 30, gender).unwrap(), RiskLevel::Borderline);
            assert_eq!(classify(1, 30, gender).unwrap(), RiskLevel::NoRisk);
            assert_eq!(classify(0, 30, gender).unwrap(), RiskLevel::NoRisk);
        }
    }

    #[test]
    fn should_treat_age_thirty_as_the_older_band() {
        // 29 uses the young-male rules, 30 the banded rules.
        assert_eq!(classify(5, 29, Gender::Male).unwrap(), RiskLevel::EarlyOnset);
        assert_eq!(classify(5, 30, Gender::Male).unwrap(), RiskLevel::Borderline);
    }

    #[test]
    fn should_be_deterministic() {
        for _ in 0..3 {
            assert_eq!(classify(6, 45, Gender::Female).unwrap(), RiskLevel::InDanger);
        }
    }

    #[test]
    fn should_reject_negative_age() {
        let err = classify(3, -1, Gender::Male).unwrap_err();
        assert_eq!(err, ValidationError::NegativeAge(-1));
    }

    #[test]
    fn should_keep_rule_priorities_in_evaluation_order() {
        let priorities: Vec<u8> = rules().iter().map(|rule| rule.priority).collect();
        let mut sorted = priorities.clone();
        sorted.sort_unstable();
        assert_eq!(priorities, sorted);
    }

    #[test]
    fn should_apply_the_first_matching_rule() {
        let first = rules()
            .iter()
            .find(|rule| rule.matches(8, 40, Gender::Male))
            .expect("a rule matches eight signals at forty");
        assert_eq!(first.level, RiskLevel::EarlyOnset);
        assert_eq!(classify(8, 40, Gender::Male).unwrap(), first.level);
    }
}
