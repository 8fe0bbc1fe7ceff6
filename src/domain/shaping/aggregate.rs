use crate::domain::{
    config::track::TrackRules,
    models::{
        chart::{SkillTotal, TaskXp},
        size::SizeValue,
        transaction::{Transaction, TransactionKind},
    },
    shaping::units::{to_human_size, to_kilobytes},
};

const DATE_FORMAT: &str = "%d/%m/%Y";

/// Sum of plain `xp` transactions admitted by the track's total rule.
pub fn total_xp(transactions: &[Transaction], rules: &TrackRules) -> SizeValue {
    let total: u64 = transactions
        .iter()
        .filter(|t| t.kind() == TransactionKind::Xp && rules.admits_total(&t.path))
        .map(Transaction::bytes)
        .sum();
    to_human_size(total)
}

/// One entry per XP transaction inside the track, ascending by amount.
/// Records without a task segment in their path are skipped.
pub fn task_series(transactions: &[Transaction], rules: &TrackRules) -> Vec<TaskXp> {
    let mut tasks: Vec<TaskXp> = transactions
        .iter()
        .filter(|t| t.mentions_xp() && rules.admits_series(&t.path))
        .filter_map(|t| {
            let name = t.task_name()?;
            Some(TaskXp {
                name: name.to_string(),
                bytes: t.bytes(),
                amount: to_kilobytes(t.bytes()),
                date: t.created_at.format(DATE_FORMAT).to_string(),
            })
        })
        .collect();

    // stable: equal amounts keep their chronological order
    tasks.sort_by_key(|task| task.bytes);
    tasks
}

/// Skill totals inside the track, in order of first appearance.
pub fn skill_series(transactions: &[Transaction], rules: &TrackRules) -> Vec<SkillTotal> {
    let mut totals: Vec<SkillTotal> = Vec::new();

    for transaction in transactions.iter().filter(|t| rules.admits_series(&t.path)) {
        let TransactionKind::Skill(skill) = transaction.kind() else {
            continue;
        };
        match totals.iter_mut().find(|entry| entry.skill == skill) {
            Some(entry) => entry.total += transaction.amount,
            None => totals.push(SkillTotal {
                skill,
                total: transaction.amount,
            }),
        }
    }

    totals
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::domain::models::size::SizeUnit;

    fn tx(kind: &str, amount: i64, path: &str) -> Transaction {
        tx_on(kind, amount, path, 1)
    }

    fn tx_on(kind: &str, amount: i64, path: &str, day: u32) -> Transaction {
        Transaction {
            id: i64::from(day),
            transaction_type: kind.to_string(),
            amount,
            path: path.to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 3, day, 10, 0, 0).unwrap(),
        }
    }

    #[test]
    fn empty_input_yields_zero_and_empty_series() {
        let rules = TrackRules::default();
        assert_eq!(total_xp(&[], &rules), SizeValue::new(0.0, SizeUnit::Bytes));
        assert!(task_series(&[], &rules).is_empty());
        assert!(skill_series(&[], &rules).is_empty());
    }

    #[test]
    fn total_skips_excluded_subtrack() {
        let rules = TrackRules::default();
        let transactions = vec![
            tx("xp", 400_000, "/johvi/div-01/piscine-js/xp"),
            tx("xp", 600_000, "/johvi/div-01/some-task"),
            tx("xp", 400_000, "/johvi/div-01/other-task"),
            tx("up", 900_000, "/johvi/div-01/some-task"),
            tx("xp", 900_000, "/johvi/piscine-go/quest-01"),
        ];
        assert_eq!(
            total_xp(&transactions, &rules),
            SizeValue::new(1.0, SizeUnit::Megabytes)
        );
    }

    #[test]
    fn task_series_is_sorted_ascending() {
        let rules = TrackRules::default();
        let transactions = vec![
            tx_on("xp", 50_000, "/johvi/div-01/ascii-art", 3),
            tx_on("xp", 9_000, "/johvi/div-01/go-reloaded", 1),
            tx_on("xp", 120_000, "/johvi/div-01/forum", 5),
            tx_on("xp", 9_000, "/johvi/div-01/lem-in", 2),
        ];
        let tasks = task_series(&transactions, &rules);
        let names: Vec<&str> = tasks.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["go-reloaded", "lem-in", "ascii-art", "forum"]);
        assert_eq!(tasks[0].amount, SizeValue::new(9.0, SizeUnit::Kilobytes));
        assert_eq!(tasks[3].date, "05/03/2024");
    }

    #[test]
    fn task_series_filters_paths_and_types() {
        let rules = TrackRules::default();
        let transactions = vec![
            tx("xp", 1_000, "/johvi/div-01/piscine-js/quest-01"),
            tx("xp", 1_000, "/johvi/div-01/rust/piscine-rust"),
            tx("xp", 1_000, "/johvi/div-01/"),
            tx("skill_go", 1_000, "/johvi/div-01/go-reloaded"),
            tx("xp", 2_000, "/johvi/div-01/make-your-game"),
        ];
        let tasks = task_series(&transactions, &rules);
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].name, "make-your-game");
    }

    #[test]
    fn skill_series_sums_duplicates_in_discovery_order() {
        let rules = TrackRules::default();
        let transactions = vec![
            tx("skill_go", 10, "/johvi/div-01/go-reloaded"),
            tx("skill_js", 20, "/johvi/div-01/make-your-game"),
            tx("skill_go", 5, "/johvi/div-01/ascii-art"),
            tx("skill_go", 99, "/johvi/div-01/piscine-js/quest-01"),
            tx("xp", 1_000, "/johvi/div-01/ascii-art"),
        ];
        assert_eq!(
            skill_series(&transactions, &rules),
            vec![
                SkillTotal {
                    skill: "go".to_string(),
                    total: 15
                },
                SkillTotal {
                    skill: "js".to_string(),
                    total: 20
                },
            ]
        );
    }
}
