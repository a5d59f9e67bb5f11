//! Boat log state machine.
//!
//! The grader is fed classified lines in file order. Each operation either
//! lets the run continue (`Ok(())`) or halts it with a [`Halt`]. Once halted,
//! the grader keeps returning that same halt and ignores further input.
//!
//! Checks on a move run in a fixed order and mutate nothing on failure:
//! 1. sequencing: the move must be a legal successor of the last move;
//! 2. availability: someone of that age must be on the origin island;
//! 3. commit: the ledger moves one person and the move becomes the last move.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::core::population::Population;
use crate::core::successors::SuccessorTable;
use crate::core::types::{Age, Island, Move};

/// A log line, as reported with a failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineRef {
    pub number: usize,
    pub text: String,
}

impl LineRef {
    pub fn new(number: usize, text: &str) -> Self {
        Self {
            number,
            text: text.to_string(),
        }
    }
}

/// A broken puzzle rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    /// A second `Testing Boats...` line.
    DuplicateDeclaration,
    /// Input ended with people still on Oahu.
    Incomplete { summary: String },
    /// Nobody of that age is on the island the move leaves from.
    Unavailable { age: Age, destination: Island },
    /// The first move of the run is not a legal opener.
    IllegalFirstMove { attempted: Move },
    /// The move may not follow the previous one.
    IllegalSuccessor { attempted: Move, previous: Move },
}

impl Violation {
    /// Numbered constraint the violation belongs to, if any.
    pub fn constraint(&self) -> Option<u8> {
        match self {
            Violation::DuplicateDeclaration => None,
            Violation::Incomplete { .. } => Some(0),
            Violation::Unavailable { .. } => Some(1),
            Violation::IllegalFirstMove { .. } | Violation::IllegalSuccessor { .. } => Some(2),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::DuplicateDeclaration => {
                f.write_str("Must have only one 'Testing Boats...' line.")
            }
            Violation::Incomplete { summary } => f.write_str(summary),
            Violation::Unavailable { age, destination } => write!(
                f,
                "[constraint 1] There are no {} available to move to {}.",
                age.plural(),
                destination
            ),
            Violation::IllegalFirstMove { attempted } => {
                write!(f, "[constraint 2] {attempted} is not a legal first move")
            }
            Violation::IllegalSuccessor {
                attempted,
                previous,
            } => write!(
                f,
                "[constraint 2] {attempted} is not a legal successor of {previous}."
            ),
        }
    }
}

/// A rule violation, attributed to a line (`None` = end of input).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failure {
    pub line: Option<LineRef>,
    pub violation: Violation,
}

/// Why a log is not a boat log at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Unusable {
    /// Input ended without any declaration.
    NotALog,
    /// A move showed up before the declaration.
    MoveBeforeDeclaration,
    /// The declaration carried no head count.
    NoPopulation,
}

impl fmt::Display for Unusable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unusable::NotALog => f.write_str("This file does not seem to be a log file."),
            Unusable::MoveBeforeDeclaration => {
                f.write_str("Must have a declaration line \"Testing Boats...\"")
            }
            Unusable::NoPopulation => {
                f.write_str("The \"Testing Boats...\" line does not say how many people there are.")
            }
        }
    }
}

/// Terminal stop signal returned by a grader operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Halt {
    Failed(Failure),
    Unusable { reason: Unusable },
}

/// Final outcome of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Verdict {
    /// Everyone reached Molokai.
    Success { total: u64 },
    Failed(Failure),
    Unusable { reason: Unusable },
}

impl From<Halt> for Verdict {
    fn from(halt: Halt) -> Self {
        match halt {
            Halt::Failed(failure) => Verdict::Failed(failure),
            Halt::Unusable { reason } => Verdict::Unusable { reason },
        }
    }
}

#[derive(Debug, Clone)]
enum Phase {
    AwaitingDeclaration,
    Active {
        population: Population,
        last_move: Option<Move>,
    },
    Halted(Halt),
}

/// Replays one log against the puzzle rules.
#[derive(Debug, Clone)]
pub struct Grader<'a> {
    table: &'a SuccessorTable,
    phase: Phase,
}

impl<'a> Grader<'a> {
    pub fn new(table: &'a SuccessorTable) -> Self {
        Self {
            table,
            phase: Phase::AwaitingDeclaration,
        }
    }

    /// Current ledger, once a declaration has been accepted.
    pub fn population(&self) -> Option<&Population> {
        match &self.phase {
            Phase::Active { population, .. } => Some(population),
            _ => None,
        }
    }

    pub fn last_move(&self) -> Option<Move> {
        match &self.phase {
            Phase::Active { last_move, .. } => *last_move,
            _ => None,
        }
    }

    pub fn halted(&self) -> Option<&Halt> {
        match &self.phase {
            Phase::Halted(halt) => Some(halt),
            _ => None,
        }
    }

    /// Handle a `Testing Boats with ...` line.
    pub fn declare(&mut self, line: &str, number: usize) -> Result<(), Halt> {
        match &self.phase {
            Phase::Halted(halt) => Err(halt.clone()),
            Phase::Active { .. } => self.halt(Halt::Failed(Failure {
                line: Some(LineRef::new(number, line)),
                violation: Violation::DuplicateDeclaration,
            })),
            Phase::AwaitingDeclaration => {
                let Some((children, adults)) = parse_population(line) else {
                    return self.halt(Halt::Unusable {
                        reason: Unusable::NoPopulation,
                    });
                };
                debug!(line = number, children, adults, "declaration accepted");
                self.phase = Phase::Active {
                    population: Population::new(children, adults),
                    last_move: None,
                };
                Ok(())
            }
        }
    }

    /// Handle one crossing.
    pub fn apply_move(&mut self, mv: Move, line: &str, number: usize) -> Result<(), Halt> {
        let table = self.table;
        let (population, last_move) = match &mut self.phase {
            Phase::Halted(halt) => return Err(halt.clone()),
            Phase::AwaitingDeclaration => {
                return self.halt(Halt::Unusable {
                    reason: Unusable::MoveBeforeDeclaration,
                });
            }
            Phase::Active {
                population,
                last_move,
            } => (population, last_move),
        };

        if !table.allows(*last_move, mv) {
            let violation = match *last_move {
                None => Violation::IllegalFirstMove { attempted: mv },
                Some(previous) => Violation::IllegalSuccessor {
                    attempted: mv,
                    previous,
                },
            };
            return self.fail_at(line, number, violation);
        }

        let origin = mv.origin();
        if population.count(mv.age, origin) == 0 {
            return self.fail_at(
                line,
                number,
                Violation::Unavailable {
                    age: mv.age,
                    destination: mv.destination,
                },
            );
        }

        population.move_from(mv.age, origin);
        *last_move = Some(mv);
        debug!(line = number, %mv, "move accepted");
        Ok(())
    }

    /// Close the run after the last line.
    pub fn finish(&mut self) -> Verdict {
        let verdict = match &self.phase {
            Phase::Halted(halt) => return halt.clone().into(),
            Phase::AwaitingDeclaration => Verdict::Unusable {
                reason: Unusable::NotALog,
            },
            Phase::Active { population, .. } if !population.all_across() => {
                Verdict::Failed(Failure {
                    line: None,
                    violation: Violation::Incomplete {
                        summary: population.to_string(),
                    },
                })
            }
            Phase::Active { population, .. } => Verdict::Success {
                total: population.total(),
            },
        };
        match &verdict {
            Verdict::Failed(failure) => {
                self.phase = Phase::Halted(Halt::Failed(failure.clone()));
            }
            Verdict::Unusable { reason } => {
                self.phase = Phase::Halted(Halt::Unusable { reason: *reason });
            }
            Verdict::Success { .. } => {}
        }
        verdict
    }

    fn fail_at(&mut self, line: &str, number: usize, violation: Violation) -> Result<(), Halt> {
        self.halt(Halt::Failed(Failure {
            line: Some(LineRef::new(number, line)),
            violation,
        }))
    }

    fn halt(&mut self, halt: Halt) -> Result<(), Halt> {
        debug!(?halt, "grader halted");
        self.phase = Phase::Halted(halt.clone());
        Err(halt)
    }
}

/// Read `(children, adults)` out of a declaration line.
///
/// Counts are whitespace-separated all-digit tokens. Two counts are children
/// then adults; a single count belongs to whichever of "child" or "adult" the
/// line mentions (children first), and the other age is zero.
pub fn parse_population(line: &str) -> Option<(u32, u32)> {
    let counts: Vec<u32> = line
        .split_whitespace()
        .filter(|token| token.bytes().all(|b| b.is_ascii_digit()))
        .map(|token| token.parse().ok())
        .collect::<Option<_>>()?;
    match counts.as_slice() {
        [children, adults] => Some((*children, *adults)),
        [first, ..] if line.contains("child") => Some((*first, 0)),
        [first, ..] if line.contains("adult") => Some((0, *first)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Mode;

    const CHILD_TO_MOLOKAI: Move = Move::new(Age::Child, Mode::Row, Island::Molokai);
    const CHILD_TO_OAHU: Move = Move::new(Age::Child, Mode::Row, Island::Oahu);
    const CHILD_RIDES_TO_MOLOKAI: Move = Move::new(Age::Child, Mode::Ride, Island::Molokai);
    const ADULT_TO_MOLOKAI: Move = Move::new(Age::Adult, Mode::Row, Island::Molokai);

    fn table() -> SuccessorTable {
        SuccessorTable::standard().expect("standard table")
    }

    #[test]
    fn parse_population_forms() {
        assert_eq!(
            parse_population("Testing Boats with 3 children, 2 adults"),
            Some((3, 2))
        );
        assert_eq!(
            parse_population("Testing Boats with only 4 children"),
            Some((4, 0))
        );
        assert_eq!(
            parse_population("Testing Boats with only 1 adult"),
            Some((0, 1))
        );
        assert_eq!(parse_population("Testing Boats with nobody"), None);
        assert_eq!(parse_population("Testing Boats with only 5 people"), None);
    }

    #[test]
    fn parse_population_rejects_overflowing_count() {
        assert_eq!(
            parse_population("Testing Boats with only 99999999999 children"),
            None
        );
    }

    #[test]
    fn declaration_without_count_is_unusable() {
        let table = table();
        let mut grader = Grader::new(&table);
        let halt = grader
            .declare("Testing Boats with only 99999999999 children", 1)
            .expect_err("count overflows");
        assert_eq!(
            halt,
            Halt::Unusable {
                reason: Unusable::NoPopulation
            }
        );
        assert_eq!(grader.finish(), Verdict::from(halt));
    }

    #[test]
    fn declaration_builds_population_on_oahu() {
        let table = table();
        let mut grader = Grader::new(&table);
        grader
            .declare("Testing Boats with 3 children, 2 adults", 1)
            .expect("declare");
        let pop = grader.population().expect("population");
        assert_eq!(pop.total(), 5);
        assert_eq!(pop.count(Age::Child, Island::Oahu), 3);
        assert_eq!(pop.count(Age::Adult, Island::Oahu), 2);
        assert_eq!(grader.last_move(), None);
    }

    #[test]
    fn three_children_cross() {
        let table = table();
        let mut grader = Grader::new(&table);
        grader
            .declare("Testing Boats with only 3 children", 1)
            .expect("declare");
        let moves = [
            CHILD_TO_MOLOKAI,
            CHILD_TO_OAHU,
            CHILD_TO_MOLOKAI,
            CHILD_RIDES_TO_MOLOKAI,
            CHILD_TO_OAHU,
            CHILD_TO_MOLOKAI,
            CHILD_RIDES_TO_MOLOKAI,
        ];
        for (idx, mv) in moves.into_iter().enumerate() {
            grader
                .apply_move(mv, "move", idx + 2)
                .unwrap_or_else(|halt| panic!("move {idx} halted: {halt:?}"));
        }
        assert_eq!(grader.finish(), Verdict::Success { total: 3 });
    }

    #[test]
    fn adult_cannot_open_the_run() {
        let table = table();
        let mut grader = Grader::new(&table);
        grader
            .declare("Testing Boats with 1 child, 2 adults", 1)
            .expect("declare");
        let halt = grader
            .apply_move(ADULT_TO_MOLOKAI, "Adult rowing to Molokai", 2)
            .expect_err("illegal first move");
        let Halt::Failed(failure) = halt else {
            panic!("expected failure, got {halt:?}");
        };
        assert_eq!(
            failure.violation,
            Violation::IllegalFirstMove {
                attempted: ADULT_TO_MOLOKAI
            }
        );
        assert_eq!(failure.violation.constraint(), Some(2));
        assert_eq!(
            failure.violation.to_string(),
            "[constraint 2] adultRowToMolokai is not a legal first move"
        );
        assert_eq!(failure.line, Some(LineRef::new(2, "Adult rowing to Molokai")));
    }

    #[test]
    fn successor_checked_before_availability() {
        let table = table();
        let mut grader = Grader::new(&table);
        grader
            .declare("Testing Boats with only 2 children", 1)
            .expect("declare");
        grader
            .apply_move(CHILD_TO_MOLOKAI, "a", 2)
            .expect("first move");
        // Nobody is on Molokai to row an adult back, and am-row is not a successor either.
        let halt = grader
            .apply_move(ADULT_TO_MOLOKAI, "b", 3)
            .expect_err("illegal successor");
        assert_eq!(
            halt,
            Halt::Failed(Failure {
                line: Some(LineRef::new(3, "b")),
                violation: Violation::IllegalSuccessor {
                    attempted: ADULT_TO_MOLOKAI,
                    previous: CHILD_TO_MOLOKAI,
                },
            })
        );
    }

    #[test]
    fn unavailable_age_fails() {
        let table = table();
        let mut grader = Grader::new(&table);
        grader
            .declare("Testing Boats with only 1 child", 1)
            .expect("declare");
        grader
            .apply_move(CHILD_TO_MOLOKAI, "a", 2)
            .expect("first move");
        let halt = grader
            .apply_move(CHILD_RIDES_TO_MOLOKAI, "b", 3)
            .expect_err("no child left on Oahu");
        let Halt::Failed(failure) = &halt else {
            panic!("expected failure, got {halt:?}");
        };
        assert_eq!(
            failure.violation.to_string(),
            "[constraint 1] There are no children available to move to Molokai."
        );
        assert_eq!(grader.halted(), Some(&halt));
        assert!(grader.population().is_none());
    }

    #[test]
    fn move_before_declaration_is_unusable() {
        let table = table();
        let mut grader = Grader::new(&table);
        let halt = grader
            .apply_move(CHILD_TO_MOLOKAI, "Child rowing to Molokai", 1)
            .expect_err("no declaration");
        assert_eq!(
            halt,
            Halt::Unusable {
                reason: Unusable::MoveBeforeDeclaration
            }
        );
    }

    #[test]
    fn duplicate_declaration_halts_for_good() {
        let table = table();
        let mut grader = Grader::new(&table);
        grader
            .declare("Testing Boats with only 2 children", 1)
            .expect("declare");
        let halt = grader
            .declare("Testing Boats with only 2 children", 2)
            .expect_err("duplicate");
        let Halt::Failed(failure) = &halt else {
            panic!("expected failure, got {halt:?}");
        };
        assert_eq!(failure.violation, Violation::DuplicateDeclaration);
        assert_eq!(failure.violation.constraint(), None);

        // Later input is ignored and the same halt comes back.
        assert_eq!(grader.apply_move(CHILD_TO_MOLOKAI, "x", 3), Err(halt.clone()));
        assert_eq!(grader.finish(), Verdict::from(halt));
    }

    #[test]
    fn finish_without_declaration_is_unusable() {
        let table = table();
        let mut grader = Grader::new(&table);
        assert_eq!(
            grader.finish(),
            Verdict::Unusable {
                reason: Unusable::NotALog
            }
        );
    }

    #[test]
    fn finish_with_people_left_is_incomplete() {
        let table = table();
        let mut grader = Grader::new(&table);
        grader
            .declare("Testing Boats with 2 children, 1 adults", 1)
            .expect("declare");
        grader
            .apply_move(CHILD_TO_MOLOKAI, "a", 2)
            .expect("first move");
        let Verdict::Failed(failure) = grader.finish() else {
            panic!("expected failure");
        };
        assert_eq!(failure.line, None);
        assert_eq!(failure.violation.constraint(), Some(0));
        assert_eq!(
            failure.violation.to_string(),
            "Oahu has 1/1 adults and 1/2 children."
        );
    }

    #[test]
    fn empty_population_succeeds_immediately() {
        let table = table();
        let mut grader = Grader::new(&table);
        grader
            .declare("Testing Boats with 0 children, 0 adults", 1)
            .expect("declare");
        assert_eq!(grader.finish(), Verdict::Success { total: 0 });
    }
}
