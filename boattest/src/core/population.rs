//! Head counts per age on each island.

use std::fmt;

use serde::Serialize;

use crate::core::types::{Age, Island};

/// Where everybody is right now.
///
/// Only the Oahu side is stored; the Molokai count is `total - on_oahu`.
/// Invariant: `on_oahu <= total` for both ages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Population {
    children: u32,
    adults: u32,
    children_on_oahu: u32,
    adults_on_oahu: u32,
}

impl Population {
    /// Everyone starts on Oahu.
    pub fn new(children: u32, adults: u32) -> Self {
        Self {
            children,
            adults,
            children_on_oahu: children,
            adults_on_oahu: adults,
        }
    }

    pub fn total(&self) -> u64 {
        u64::from(self.children) + u64::from(self.adults)
    }

    pub fn count(&self, age: Age, island: Island) -> u32 {
        let (total, on_oahu) = self.slots(age);
        match island {
            Island::Oahu => on_oahu,
            Island::Molokai => total - on_oahu,
        }
    }

    /// Move one person of `age` off `island` to the other island.
    ///
    /// Callers check `count(age, island) > 0` first; this is a plain ledger
    /// update, not a rule check.
    pub fn move_from(&mut self, age: Age, island: Island) {
        let on_oahu = match age {
            Age::Child => &mut self.children_on_oahu,
            Age::Adult => &mut self.adults_on_oahu,
        };
        match island {
            Island::Oahu => *on_oahu -= 1,
            Island::Molokai => *on_oahu += 1,
        }
        debug_assert!(self.children_on_oahu <= self.children);
        debug_assert!(self.adults_on_oahu <= self.adults);
    }

    /// True once nobody is left on the origin island.
    pub fn all_across(&self) -> bool {
        Age::ALL
            .iter()
            .all(|age| self.count(*age, Island::ORIGIN) == 0)
    }

    fn slots(&self, age: Age) -> (u32, u32) {
        match age {
            Age::Child => (self.children, self.children_on_oahu),
            Age::Adult => (self.adults, self.adults_on_oahu),
        }
    }
}

impl fmt::Display for Population {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Oahu has {}/{} adults and {}/{} children.",
            self.adults_on_oahu, self.adults, self.children_on_oahu, self.children
        )
    }
}
