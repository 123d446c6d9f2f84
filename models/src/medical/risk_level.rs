use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The four discrete diabetes-risk levels, least to most severe.
/// Computed fresh per request and never persisted; crosses process
/// boundaries as one of the four literal labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    NoRisk,
    Borderline,
    InDanger,
    EarlyOnset,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::NoRisk => "NoRisk",
            RiskLevel::Borderline => "Borderline",
            RiskLevel::InDanger => "InDanger",
            RiskLevel::EarlyOnset => "EarlyOnset",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RiskLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NoRisk" => Ok(RiskLevel::NoRisk),
            "Borderline" => Ok(RiskLevel::Borderline),
            "InDanger" => Ok(RiskLevel::InDanger),
            "EarlyOnset" => Ok(RiskLevel::EarlyOnset),
            _ => Err(format!("unknown risk level label: {}", s)),
        }
    }
}
