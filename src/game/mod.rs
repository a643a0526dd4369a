//! Core game logic and state management

pub mod navigation;
pub mod report;
pub mod scenario;
pub mod verdict;

pub use navigation::{Arrival, Choice, Exit, Exits, Explorer, Step};
pub use report::CaseReport;
pub use verdict::{render_verdict, Verdict, EVIDENCE_THRESHOLD};

use crate::data::*;
use crate::GameError;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

/// Settings for a case, usually taken from the command line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Bucket count of the suspect index
    pub buckets: usize,
    /// Style console output with colours
    pub color: bool,
    /// Print the case report as JSON when the case closes
    pub json_report: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            buckets: DEFAULT_CAPACITY,
            color: true,
            json_report: false,
        }
    }
}

/// Current phase of the case
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CasePhase {
    Exploring,
    Accusation,
    Closed,
}

/// Game statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    pub rooms_visited: u32,
    pub clues_collected: u32,
    pub duplicate_clues: u32,
    pub rejected_inputs: u32,
    pub blocked_moves: u32,
}

/// One play-through of the mansion
#[derive(Debug)]
pub struct Case {
    pub id: Id,
    pub phase: CasePhase,
    pub mansion: Mansion,
    pub ledger: ClueLedger,
    pub index: SuspectIndex,
    pub journal: Journal,
    pub stats: GameStats,
    pub accusation: Option<String>,
    pub verdict: Option<Verdict>,
    explorer: Explorer,
}

impl Case {
    /// Open the bundled case
    pub fn new(config: &GameConfig) -> Result<Self, GameError> {
        let mansion = scenario::create_mansion()
            .inspect_err(|e| error!(error = %e, "mansion wiring failed"))?;
        let index = scenario::create_suspect_index(config.buckets)
            .inspect_err(|e| {
                error!(error = %e, buckets = config.buckets, "suspect index rejected");
            })?;
        Ok(Self::from_parts(mansion, index))
    }

    /// Open a case over a caller-built mansion and index
    pub fn from_parts(mansion: Mansion, index: SuspectIndex) -> Self {
        let explorer = Explorer::new(&mansion);
        let case = Self {
            id: Id::new(),
            phase: CasePhase::Exploring,
            mansion,
            ledger: ClueLedger::new(),
            index,
            journal: Journal::new(Utc::now()),
            stats: GameStats::default(),
            accusation: None,
            verdict: None,
            explorer,
        };
        info!(case = %case.id, rooms = case.mansion.len(), "case opened");
        case
    }

    pub fn explorer(&self) -> &Explorer {
        &self.explorer
    }

    pub fn exit(&self) -> Option<Exit> {
        self.explorer.exit()
    }

    /// Names of the rooms entered, in order
    pub fn path_names(&self) -> Vec<String> {
        self.explorer
            .path()
            .iter()
            .filter_map(|id| self.mansion.get(*id).ok())
            .map(|room| room.name.clone())
            .collect()
    }

    /// Enter the room under the cursor
    pub fn enter_room(&mut self) -> Result<Arrival, GameError> {
        let arrival = self.explorer.arrive(&mut self.mansion, &mut self.ledger)?;
        self.stats.rooms_visited += 1;

        if let Some((clue, outcome)) = &arrival.clue {
            let is_new = *outcome == Insertion::Added;
            if is_new {
                self.stats.clues_collected += 1;
            } else {
                self.stats.duplicate_clues += 1;
            }
            self.journal.record(CaseNote {
                timestamp: Utc::now(),
                room: arrival.name.clone(),
                clue: clue.clone(),
                is_new,
            });
        }
        if self.explorer.is_finished() {
            self.finish_exploring();
        }
        Ok(arrival)
    }

    /// Feed one line of player input to the navigation engine
    pub fn submit(&mut self, input: &str) -> Result<Step, GameError> {
        let step = self.explorer.submit(&self.mansion, input)?;
        match step {
            Step::Rejected(_) => self.stats.rejected_inputs += 1,
            Step::NoPassage(_) => self.stats.blocked_moves += 1,
            Step::Finished(_) => self.finish_exploring(),
            Step::Moved(_) => {}
        }
        Ok(step)
    }

    /// Input stream closed
    pub fn end_of_input(&mut self) -> Exit {
        let exit = self.explorer.end_of_input();
        self.finish_exploring();
        exit
    }

    fn finish_exploring(&mut self) {
        if self.phase == CasePhase::Exploring {
            debug!(case = %self.id, exit = ?self.explorer.exit(), "exploration over");
            self.phase = CasePhase::Accusation;
        }
    }

    /// Drive the whole exploration from a sequence of input lines.
    ///
    /// Running out of lines counts as leaving the mansion.
    pub fn explore<'a, I>(&mut self, inputs: I) -> Result<Exit, GameError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut inputs = inputs.into_iter();
        loop {
            self.enter_room()?;
            if let Some(exit) = self.exit() {
                return Ok(exit);
            }
            loop {
                let Some(line) = inputs.next() else {
                    return Ok(self.end_of_input());
                };
                match self.submit(line)? {
                    Step::Moved(_) => break,
                    Step::Finished(exit) => return Ok(exit),
                    Step::NoPassage(_) | Step::Rejected(_) => continue,
                }
            }
        }
    }

    /// Collected clues in ascending order
    pub fn clues(&self) -> Vec<&str> {
        self.ledger.inorder().collect()
    }

    /// Name the culprit and close the case
    pub fn accuse(&mut self, accused: &str) -> Verdict {
        let verdict = render_verdict(&self.ledger, &self.index, accused);
        self.accusation = Some(accused.trim_end_matches(['\r', '\n']).to_string());
        self.verdict = Some(verdict.clone());
        self.phase = CasePhase::Closed;
        verdict
    }

    pub fn report(&self) -> CaseReport {
        CaseReport::from_case(self)
    }
}
