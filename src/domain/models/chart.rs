use serde::Serialize;

use crate::domain::models::size::SizeValue;

/// XP earned for one task, amount expressed in KB.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskXp {
    pub name: String,
    #[serde(skip)]
    pub bytes: u64,
    pub amount: SizeValue,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillTotal {
    pub skill: String,
    pub total: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

/// Render-ready series; rebuilt from the profile on every load.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub name: String,
    pub data: Vec<ChartPoint>,
}

impl ChartSeries {
    pub fn from_tasks(tasks: &[TaskXp]) -> Self {
        Self {
            name: "XP".to_string(),
            data: tasks
                .iter()
                .map(|task| ChartPoint {
                    label: task.name.clone(),
                    value: task.amount.amount,
                })
                .collect(),
        }
    }

    pub fn from_skills(skills: &[SkillTotal]) -> Self {
        Self {
            name: "Skills".to_string(),
            data: skills
                .iter()
                .map(|skill| ChartPoint {
                    label: skill.skill.clone(),
                    value: skill.total as f64,
                })
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
