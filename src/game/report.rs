//! Case report
//!
//! A serialisable summary of a finished (or abandoned) case.

use super::{Case, Exit, GameStats, Verdict};
use crate::data::{CaseNote, Id};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseReport {
    pub case_id: Id,
    pub opened_at: DateTime<Utc>,
    pub path: Vec<String>,
    pub exit: Option<Exit>,
    /// Collected clues, ascending
    pub clues: Vec<String>,
    pub journal: Vec<CaseNote>,
    pub stats: GameStats,
    pub accusation: Option<String>,
    pub verdict: Option<Verdict>,
}

impl CaseReport {
    pub fn from_case(case: &Case) -> Self {
        Self {
            case_id: case.id,
            opened_at: case.journal.opened_at,
            path: case.path_names(),
            exit: case.exit(),
            clues: case.ledger.inorder().map(str::to_string).collect(),
            journal: case.journal.notes.clone(),
            stats: case.stats.clone(),
            accusation: case.accusation.clone(),
            verdict: case.verdict.clone(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameConfig;

    #[test]
    fn test_report_json_fields() {
        let mut case = Case::new(&GameConfig::default()).unwrap();
        case.explore(["d", "e"]).unwrap();
        case.accuse("Cook\n");

        let report = case.report();
        assert_eq!(report.exit, Some(Exit::DeadEnd));
        assert_eq!(report.clues, vec!["Empty vial of arsenic", "Missing carving knife"]);

        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["accusation"], "Cook");
        assert_eq!(json["verdict"]["Sustained"]["count"], 2);
        assert_eq!(json["path"][2], "Pantry");
        assert_eq!(json["exit"], "DeadEnd");
    }
}
