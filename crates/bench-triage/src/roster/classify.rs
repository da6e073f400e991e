//! Status-to-tier mappings used to badge roster rows.
//!
//! Every mapping is total: values outside the known set land in
//! [`DisplayTier::Unknown`] instead of failing.

use super::domain::{ResumeStatus, TrainingStatus};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayTier {
    Positive,
    NeutralWarning,
    Negative,
    Informational,
    Neutral,
    Unknown,
}

impl DisplayTier {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Positive,
            Self::Informational,
            Self::Neutral,
            Self::NeutralWarning,
            Self::Negative,
            Self::Unknown,
        ]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::NeutralWarning => "neutral-warning",
            Self::Negative => "negative",
            Self::Informational => "informational",
            Self::Neutral => "neutral",
            Self::Unknown => "unknown",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::NeutralWarning => "Needs Attention",
            Self::Negative => "Negative",
            Self::Informational => "Informational",
            Self::Neutral => "Neutral",
            Self::Unknown => "Unknown",
        }
    }
}

/// Attendance bucket derived from a raw attendance percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceTier {
    Excellent,
    Good,
    Average,
    Poor,
}

impl AttendanceTier {
    pub const EXCELLENT_FLOOR: f64 = 90.0;
    pub const GOOD_FLOOR: f64 = 75.0;
    pub const AVERAGE_FLOOR: f64 = 60.0;

    pub const fn ordered() -> [Self; 4] {
        [Self::Excellent, Self::Good, Self::Average, Self::Poor]
    }

    /// Boundaries belong to the higher tier: 90 is excellent, 75 good, 60 average.
    /// NaN compares false against every floor and therefore lands in `Poor`.
    pub fn from_rate(rate: f64) -> Self {
        if rate >= Self::EXCELLENT_FLOOR {
            Self::Excellent
        } else if rate >= Self::GOOD_FLOOR {
            Self::Good
        } else if rate >= Self::AVERAGE_FLOOR {
            Self::Average
        } else {
            Self::Poor
        }
    }

    /// Parses a bucket selector such as `"good"`. Matching is exact.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "excellent" => Some(Self::Excellent),
            "good" => Some(Self::Good),
            "average" => Some(Self::Average),
            "poor" => Some(Self::Poor),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Average => "average",
            Self::Poor => "poor",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent (90%+)",
            Self::Good => "Good (75-89%)",
            Self::Average => "Average (60-74%)",
            Self::Poor => "Poor (below 60%)",
        }
    }
}

pub fn classify_resume_status(status: &ResumeStatus) -> DisplayTier {
    match status {
        ResumeStatus::Updated => DisplayTier::Positive,
        ResumeStatus::Pending => DisplayTier::NeutralWarning,
        ResumeStatus::Outdated => DisplayTier::Negative,
        ResumeStatus::Other(_) => DisplayTier::Unknown,
    }
}

pub fn classify_training_status(status: &TrainingStatus) -> DisplayTier {
    match status {
        TrainingStatus::Completed => DisplayTier::Positive,
        TrainingStatus::InProgress => DisplayTier::Informational,
        TrainingStatus::NotStarted => DisplayTier::Neutral,
        TrainingStatus::Overdue => DisplayTier::Negative,
        TrainingStatus::Other(_) => DisplayTier::Unknown,
    }
}

pub fn classify_attendance(rate: f64) -> AttendanceTier {
    AttendanceTier::from_rate(rate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resume_statuses_map_to_tiers() {
        assert_eq!(classify_resume_status(&ResumeStatus::Updated), DisplayTier::Positive);
        assert_eq!(
            classify_resume_status(&ResumeStatus::Pending),
            DisplayTier::NeutralWarning
        );
        assert_eq!(classify_resume_status(&ResumeStatus::Outdated), DisplayTier::Negative);
        assert_eq!(
            classify_resume_status(&ResumeStatus::from("not updated")),
            DisplayTier::Unknown
        );
    }

    #[test]
    fn training_statuses_map_to_tiers() {
        assert_eq!(
            classify_training_status(&TrainingStatus::Completed),
            DisplayTier::Positive
        );
        assert_eq!(
            classify_training_status(&TrainingStatus::InProgress),
            DisplayTier::Informational
        );
        assert_eq!(
            classify_training_status(&TrainingStatus::NotStarted),
            DisplayTier::Neutral
        );
        assert_eq!(
            classify_training_status(&TrainingStatus::Overdue),
            DisplayTier::Negative
        );
        assert_eq!(
            classify_training_status(&TrainingStatus::from("")),
            DisplayTier::Unknown
        );
    }

    #[test]
    fn attendance_boundaries_fall_into_the_higher_tier() {
        assert_eq!(classify_attendance(100.0), AttendanceTier::Excellent);
        assert_eq!(classify_attendance(90.0), AttendanceTier::Excellent);
        assert_eq!(classify_attendance(89.9), AttendanceTier::Good);
        assert_eq!(classify_attendance(75.0), AttendanceTier::Good);
        assert_eq!(classify_attendance(74.99), AttendanceTier::Average);
        assert_eq!(classify_attendance(60.0), AttendanceTier::Average);
        assert_eq!(classify_attendance(59.0), AttendanceTier::Poor);
    }

    #[test]
    fn out_of_range_rates_are_classified_without_validation() {
        assert_eq!(classify_attendance(-5.0), AttendanceTier::Poor);
        assert_eq!(classify_attendance(130.0), AttendanceTier::Excellent);
        assert_eq!(classify_attendance(f64::NAN), AttendanceTier::Poor);
    }

    #[test]
    fn bucket_selectors_parse_exactly() {
        assert_eq!(AttendanceTier::parse("good"), Some(AttendanceTier::Good));
        assert_eq!(AttendanceTier::parse("Good"), None);
        assert_eq!(AttendanceTier::parse(""), None);
    }
}
