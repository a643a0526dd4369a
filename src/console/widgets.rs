//! Text blocks for the console UI

use super::Theme;
use crate::data::{Insertion, Journal, Severity};
use crate::game::verdict::MIN_ACCUSATION_LEN;
use crate::game::{Arrival, Exit, Exits, Verdict, EVIDENCE_THRESHOLD};

const RULE: &str = "──────────────────────────────────────────────────";

/// A horizontal rule with an optional title
pub fn rule(title: &str, theme: &Theme) -> String {
    if title.is_empty() {
        return theme.paint(RULE, theme.border);
    }
    let head = format!("── {} ", title);
    let pad = RULE.chars().count().saturating_sub(head.chars().count());
    let line = format!("{}{}", head, "─".repeat(pad));
    theme.paint(&line, theme.border)
}

/// Lines announcing a room on entry
pub fn arrival_lines(arrival: &Arrival, theme: &Theme) -> Vec<String> {
    let mut lines = vec![
        String::new(),
        format!("You are in: {}", theme.bold(&arrival.name, theme.accent)),
    ];
    if let Some((clue, outcome)) = &arrival.clue {
        let text = match outcome {
            Insertion::Added => format!("You found a clue: \"{}\"", clue),
            Insertion::Duplicate => {
                format!("You found \"{}\" again; it is already in your notes", clue)
            }
        };
        lines.push(theme.message(Severity::Discovery, &text));
    }
    if arrival.exits.none() {
        lines.push(theme.message(
            Severity::Warning,
            "Dead end! This room has no other way out. The exploration is over.",
        ));
    }
    lines
}

/// The direction menu, listing only passages that exist
pub fn exits_prompt(exits: &Exits, theme: &Theme) -> Vec<String> {
    let mut lines = vec!["Where do you want to go?".to_string()];
    if exits.left {
        lines.push(format!("  {} Left", theme.bold("[e]", theme.accent)));
    }
    if exits.right {
        lines.push(format!("  {} Right", theme.bold("[d]", theme.accent)));
    }
    lines.push(format!("  {} Leave the mansion", theme.bold("[s]", theme.accent)));
    lines
}

/// Why the walk ended and how long the clues took to gather
pub fn exploration_summary(exit: Exit, journal: &Journal, theme: &Theme) -> String {
    let text = format!(
        "Exploration ended ({}): {} discovery note(s) in {}s.",
        exit,
        journal.len(),
        journal.elapsed().num_seconds()
    );
    theme.message(Severity::Info, &text)
}

/// Collected clues in ledger order, with where each was found
pub fn clue_list(clues: &[&str], journal: &Journal, theme: &Theme) -> Vec<String> {
    let mut lines = vec![rule("Collected clues", theme)];
    if clues.is_empty() {
        lines.push("  (none)".to_string());
    }
    for (i, clue) in clues.iter().enumerate() {
        let origin = journal
            .origin_of(clue)
            .map(|note| format!(" ({}, {})", note.room, note.timestamp.format("%H:%M:%S")))
            .unwrap_or_default();
        lines.push(format!(
            "  {:>2}. {}{}",
            i + 1,
            clue,
            theme.paint(&origin, theme.border)
        ));
    }
    lines
}

/// Suspects the player may accuse
pub fn suspect_roll(suspects: &[String], theme: &Theme) -> Vec<String> {
    let mut lines = vec![rule("Suspects", theme)];
    for name in suspects {
        lines.push(format!("  • {}", name));
    }
    lines
}

/// The closing verdict block
pub fn verdict_block(verdict: &Verdict, theme: &Theme) -> Vec<String> {
    let mut lines = vec![rule("Verdict", theme)];
    lines.push(theme.message(Severity::Critical, verdict.headline()));
    match verdict {
        Verdict::Sustained { suspect, count } | Verdict::Insufficient { suspect, count } => {
            lines.push(format!(
                "Clues pointing to {}: {} (needed: {})",
                suspect, count, EVIDENCE_THRESHOLD
            ));
            if verdict.is_sustained() {
                lines.push(format!("{} is arrested. Case closed.", suspect));
            } else {
                lines.push(format!("{} walks free for lack of evidence.", suspect));
            }
        }
        Verdict::Impossible => {
            lines.push("You left the mansion empty-handed.".to_string());
        }
        Verdict::Invalid => {
            lines.push(format!(
                "An accusation must name someone (at least {} characters).",
                MIN_ACCUSATION_LEN
            ));
        }
    }
    lines.push(rule("", theme));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::RoomId;

    #[test]
    fn test_exits_prompt_hides_missing_passages() {
        let lines = exits_prompt(&Exits { left: false, right: true }, &Theme::plain());
        assert_eq!(
            lines,
            vec!["Where do you want to go?", "  [d] Right", "  [s] Leave the mansion"]
        );
    }

    #[test]
    fn test_arrival_lines_mention_clue_and_dead_end() {
        let arrival = Arrival {
            room: RoomId(3),
            name: "Pantry".to_string(),
            clue: Some(("Empty vial".to_string(), Insertion::Added)),
            exits: Exits::default(),
        };
        let lines = arrival_lines(&arrival, &Theme::plain());
        assert_eq!(lines[1], "You are in: Pantry");
        assert!(lines[2].contains("You found a clue: \"Empty vial\""));
        assert!(lines[3].contains("Dead end!"));
    }

    #[test]
    fn test_verdict_block_shows_count_and_threshold() {
        let verdict = Verdict::Sustained {
            suspect: "Cook".to_string(),
            count: 2,
        };
        let lines = verdict_block(&verdict, &Theme::plain());
        assert!(lines.iter().any(|l| l == "Clues pointing to Cook: 2 (needed: 2)"));
        assert!(lines.iter().any(|l| l == "● [VERDICT] Accusation sustained"));
    }

    #[test]
    fn test_exploration_summary_names_the_exit() {
        let journal = Journal::default();
        let line = exploration_summary(Exit::DeadEnd, &journal, &Theme::plain());
        assert_eq!(line, "ℹ [INFO] Exploration ended (dead end): 0 discovery note(s) in 0s.");
    }

    #[test]
    fn test_rule_title() {
        assert!(rule("Suspects", &Theme::plain()).starts_with("── Suspects ─"));
    }
}
