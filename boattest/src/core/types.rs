//! Shared deterministic types for the boat grader core.
//!
//! These types are the closed vocabulary every core component agrees on:
//! who travels, how they travel, and where they go. All helpers are total
//! over their enums.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Person-type of a traveller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Age {
    Child,
    Adult,
}

impl Age {
    pub const ALL: [Age; 2] = [Age::Child, Age::Adult];

    pub fn label(self) -> &'static str {
        match self {
            Age::Child => "child",
            Age::Adult => "adult",
        }
    }

    pub fn plural(self) -> &'static str {
        match self {
            Age::Child => "children",
            Age::Adult => "adults",
        }
    }
}

/// One of the two islands. Everyone starts on `Oahu`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Island {
    Oahu,
    Molokai,
}

impl Island {
    /// Island everyone starts on.
    pub const ORIGIN: Island = Island::Oahu;

    pub fn other(self) -> Island {
        match self {
            Island::Oahu => Island::Molokai,
            Island::Molokai => Island::Oahu,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Island::Oahu => "Oahu",
            Island::Molokai => "Molokai",
        }
    }
}

impl fmt::Display for Island {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How a traveller crosses: rowing the boat or riding along as a passenger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Row,
    Ride,
}

impl Mode {
    pub fn name(self) -> &'static str {
        match self {
            Mode::Row => "Row",
            Mode::Ride => "Ride",
        }
    }
}

/// A single crossing of one person toward `destination`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    pub age: Age,
    pub mode: Mode,
    pub destination: Island,
}

impl Move {
    pub const fn new(age: Age, mode: Mode, destination: Island) -> Self {
        Self {
            age,
            mode,
            destination,
        }
    }

    /// Island the traveller leaves from.
    pub fn origin(&self) -> Island {
        self.destination.other()
    }
}

/// Renders as `childRowToMolokai`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}To{}",
            self.age.label(),
            self.mode.name(),
            self.destination
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_is_opposite_of_destination() {
        let mv = Move::new(Age::Child, Mode::Row, Island::Molokai);
        assert_eq!(mv.origin(), Island::Oahu);
        let back = Move::new(Age::Adult, Mode::Ride, Island::Oahu);
        assert_eq!(back.origin(), Island::Molokai);
    }

    #[test]
    fn move_display_matches_log_vocabulary() {
        let mv = Move::new(Age::Adult, Mode::Ride, Island::Oahu);
        assert_eq!(mv.to_string(), "adultRideToOahu");
    }

    #[test]
    fn plural_labels() {
        assert_eq!(Age::Child.plural(), "children");
        assert_eq!(Age::Adult.plural(), "adults");
    }
}
