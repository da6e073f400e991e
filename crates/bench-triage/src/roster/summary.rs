use super::classify::{
    classify_attendance, classify_resume_status, classify_training_status, AttendanceTier,
    DisplayTier,
};
use super::domain::ConsultantRecord;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TierCount {
    pub tier: DisplayTier,
    pub tier_label: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceTierCount {
    pub tier: AttendanceTier,
    pub tier_label: &'static str,
    pub count: usize,
}

/// Headline numbers for the bench dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterSummary {
    pub total: usize,
    pub with_opportunities: usize,
    pub average_attendance: Option<f64>,
    pub resume_tiers: Vec<TierCount>,
    pub training_tiers: Vec<TierCount>,
    pub attendance_tiers: Vec<AttendanceTierCount>,
}

impl RosterSummary {
    pub fn resume_count(&self, tier: DisplayTier) -> usize {
        count_for(&self.resume_tiers, tier)
    }

    pub fn training_count(&self, tier: DisplayTier) -> usize {
        count_for(&self.training_tiers, tier)
    }

    pub fn attendance_count(&self, tier: AttendanceTier) -> usize {
        self.attendance_tiers
            .iter()
            .find(|entry| entry.tier == tier)
            .map(|entry| entry.count)
            .unwrap_or(0)
    }
}

fn count_for(entries: &[TierCount], tier: DisplayTier) -> usize {
    entries
        .iter()
        .find(|entry| entry.tier == tier)
        .map(|entry| entry.count)
        .unwrap_or(0)
}

pub fn summarize(roster: &[ConsultantRecord]) -> RosterSummary {
    let mut resume: HashMap<DisplayTier, usize> = HashMap::new();
    let mut training: HashMap<DisplayTier, usize> = HashMap::new();
    let mut attendance: HashMap<AttendanceTier, usize> = HashMap::new();
    let mut with_opportunities = 0;
    let mut attendance_total = 0.0;

    for record in roster {
        *resume
            .entry(classify_resume_status(&record.resume_status))
            .or_default() += 1;
        *training
            .entry(classify_training_status(&record.training_status))
            .or_default() += 1;
        *attendance
            .entry(classify_attendance(record.attendance_rate))
            .or_default() += 1;

        if record.opportunities_count > 0 {
            with_opportunities += 1;
        }
        attendance_total += record.attendance_rate;
    }

    let tier_counts = |counts: &HashMap<DisplayTier, usize>| -> Vec<TierCount> {
        DisplayTier::ordered()
            .into_iter()
            .map(|tier| TierCount {
                tier,
                tier_label: tier.label(),
                count: counts.get(&tier).copied().unwrap_or(0),
            })
            .collect()
    };

    let attendance_tiers = AttendanceTier::ordered()
        .into_iter()
        .map(|tier| AttendanceTierCount {
            tier,
            tier_label: tier.label(),
            count: attendance.get(&tier).copied().unwrap_or(0),
        })
        .collect();

    let average_attendance = if roster.is_empty() {
        None
    } else {
        Some(attendance_total / roster.len() as f64)
    };

    RosterSummary {
        total: roster.len(),
        with_opportunities,
        average_attendance,
        resume_tiers: tier_counts(&resume),
        training_tiers: tier_counts(&training),
        attendance_tiers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::domain::{
        Department, PrimarySkill, ResumeStatus, TrainingStatus,
    };
    use chrono::NaiveDate;

    fn record(
        resume_status: ResumeStatus,
        training_status: TrainingStatus,
        attendance_rate: f64,
        opportunities_count: u32,
    ) -> ConsultantRecord {
        ConsultantRecord {
            id: "C-1".to_string(),
            name: "Sam Ortiz".to_string(),
            email: "sam.ortiz@example.com".to_string(),
            department: Department::Devops,
            primary_skill: PrimarySkill::Cloud,
            resume_status,
            attendance_rate,
            training_status,
            opportunities_count,
            bench_start_date: NaiveDate::from_ymd_opt(2025, 5, 2).expect("valid date"),
        }
    }

    #[test]
    fn empty_roster_lists_every_tier_with_zero_counts() {
        let summary = summarize(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.average_attendance, None);
        assert_eq!(summary.resume_tiers.len(), DisplayTier::ordered().len());
        assert_eq!(summary.attendance_tiers.len(), 4);
        assert!(summary.resume_tiers.iter().all(|entry| entry.count == 0));
    }

    #[test]
    fn counts_each_record_once_per_dimension() {
        let roster = vec![
            record(ResumeStatus::Updated, TrainingStatus::Completed, 95.0, 2),
            record(ResumeStatus::Outdated, TrainingStatus::Overdue, 55.0, 0),
            record(ResumeStatus::from("lost"), TrainingStatus::InProgress, 80.0, 1),
        ];

        let summary = summarize(&roster);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.with_opportunities, 2);
        assert_eq!(summary.average_attendance, Some(230.0 / 3.0));
        assert_eq!(summary.resume_count(DisplayTier::Positive), 1);
        assert_eq!(summary.resume_count(DisplayTier::Negative), 1);
        assert_eq!(summary.resume_count(DisplayTier::Unknown), 1);
        assert_eq!(summary.training_count(DisplayTier::Informational), 1);
        assert_eq!(summary.attendance_count(AttendanceTier::Excellent), 1);
        assert_eq!(summary.attendance_count(AttendanceTier::Good), 1);
        assert_eq!(summary.attendance_count(AttendanceTier::Poor), 1);
    }
}
