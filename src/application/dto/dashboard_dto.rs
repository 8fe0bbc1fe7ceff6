use serde::Serialize;

use crate::domain::{
    config::track::TrackRules,
    models::{
        audit::{AuditRatio, AuditSplit},
        chart::{ChartSeries, SkillTotal, TaskXp},
        profile::UserProfile,
        size::SizeValue,
    },
    shaping::{audit_ratio, skill_series, task_series, total_xp},
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileSummary {
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub login: String,
    pub email: String,
    #[serde(rename = "gitUrl")]
    pub git_url: String,
}

/// Everything the dashboard shows, derived from one profile load.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardDTO {
    pub profile: ProfileSummary,
    #[serde(rename = "xpTotal")]
    pub xp_total: SizeValue,
    #[serde(rename = "auditRatio")]
    pub audit_ratio: AuditRatio,
    pub audits: AuditSplit,
    pub tasks: Vec<TaskXp>,
    pub skills: Vec<SkillTotal>,
}

impl DashboardDTO {
    pub fn from_profile(profile: &UserProfile, rules: &TrackRules, git_base_url: &str) -> Self {
        let transactions = profile.transactions.as_slice();
        DashboardDTO {
            profile: ProfileSummary {
                full_name: profile.full_name(),
                login: profile.login.clone(),
                email: profile.email().to_string(),
                git_url: format!("{}/{}", git_base_url.trim_end_matches('/'), profile.login),
            },
            xp_total: total_xp(transactions, rules),
            audit_ratio: audit_ratio(profile.total_up, profile.total_down),
            audits: AuditSplit {
                given: profile.total_up,
                received: profile.total_down,
            },
            tasks: task_series(transactions, rules),
            skills: skill_series(transactions, rules),
        }
    }

    pub fn xp_label(&self) -> String {
        format!("Your XP amount: {}", self.xp_total)
    }

    pub fn audit_ratio_label(&self) -> String {
        format!("Your audit ratio: {}", self.audit_ratio)
    }

    pub fn xp_series(&self) -> ChartSeries {
        ChartSeries::from_tasks(&self.tasks)
    }

    pub fn skill_chart_series(&self) -> ChartSeries {
        ChartSeries::from_skills(&self.skills)
    }
}
