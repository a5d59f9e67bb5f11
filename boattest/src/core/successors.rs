//! Which move may legally follow which.
//!
//! The rules are authored in a compact shorthand and expanded once into an
//! explicit lookup table:
//!
//! - A move is abbreviated `<age><island>-<mode>`: `c`/`a` for child/adult,
//!   `m`/`o` for the destination (Molokai/Oahu), `row`/`ride` for the mode.
//!   `cm-ride` is "a child rides to Molokai".
//! - A leading `*` stands for both ages: `*o-row` expands to `co-row` and
//!   `ao-row`.
//! - Alternatives are joined with ` or `.
//! - The key `start` holds the legal first moves.

use std::collections::{BTreeMap, BTreeSet};

use anyhow::{Context, Result, anyhow, bail};

use crate::core::types::{Age, Island, Mode, Move};

/// Shorthand key for "no move yet".
pub const START_KEY: &str = "start";

const WILDCARD: char = '*';
const ALTERNATIVE: &str = " or ";

/// Built-in rules: two children or one adult per crossing, and somebody has
/// to bring the boat back.
pub const DEFAULT_RULES: &[(&str, &str)] = &[
    (START_KEY, "cm-row"),
    ("am-row", "*o-row"),
    ("ao-row", "*m-row"),
    ("cm-row", "*o-row or cm-ride"),
    ("co-row", "*m-row or co-ride"),
    ("cm-ride", "*o-row"),
    ("co-ride", "*m-row"),
];

/// Expanded successor table keyed by the previous move (`None` = no move yet).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuccessorTable {
    entries: BTreeMap<Option<Move>, BTreeSet<Move>>,
}

impl SuccessorTable {
    /// Expand the built-in rules.
    pub fn standard() -> Result<Self> {
        Self::from_shorthand(DEFAULT_RULES.iter().copied())
            .context("expand built-in successor rules")
    }

    /// Expand shorthand `(key, alternatives)` pairs into a full table.
    ///
    /// Any unknown code is an error: the rules are fixed data, so a bad entry
    /// means the table itself is broken.
    pub fn from_shorthand<'a, I>(raw: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut entries = BTreeMap::new();
        for (key, value) in raw {
            let prev = parse_key(key).with_context(|| format!("successor key '{key}'"))?;
            let allowed =
                expand_alternatives(value).with_context(|| format!("successors of '{key}'"))?;
            if entries.insert(prev, allowed).is_some() {
                bail!("duplicate successor key '{key}'");
            }
        }
        Ok(Self { entries })
    }

    /// Legal next moves after `prev`; `None` for a key the rules never name.
    pub fn successors(&self, prev: Option<Move>) -> Option<&BTreeSet<Move>> {
        self.entries.get(&prev)
    }

    pub fn allows(&self, prev: Option<Move>, next: Move) -> bool {
        self.successors(prev)
            .is_some_and(|allowed| allowed.contains(&next))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn parse_key(key: &str) -> Result<Option<Move>> {
    let key = key.trim();
    if key == START_KEY {
        return Ok(None);
    }
    parse_abbreviation(key).map(Some)
}

fn expand_alternatives(value: &str) -> Result<BTreeSet<Move>> {
    let mut allowed = BTreeSet::new();
    for alternative in value.split(ALTERNATIVE).map(str::trim) {
        match alternative.strip_prefix(WILDCARD) {
            Some(rest) => {
                for age in Age::ALL {
                    allowed.insert(parse_tail(age, rest)?);
                }
            }
            None => {
                allowed.insert(parse_abbreviation(alternative)?);
            }
        }
    }
    Ok(allowed)
}

/// Parse a concrete abbreviation like `cm-ride`.
pub fn parse_abbreviation(abbr: &str) -> Result<Move> {
    let mut chars = abbr.chars();
    let age = match chars.next() {
        Some('c') => Age::Child,
        Some('a') => Age::Adult,
        Some(other) => return Err(anyhow!("unknown age code '{other}' in '{abbr}'")),
        None => bail!("empty move abbreviation"),
    };
    parse_tail(age, chars.as_str()).with_context(|| format!("abbreviation '{abbr}'"))
}

/// Parse the `<island>-<mode>` part of an abbreviation.
fn parse_tail(age: Age, tail: &str) -> Result<Move> {
    let (island, mode) = tail
        .split_once('-')
        .ok_or_else(|| anyhow!("expected '<island>-<mode>' but got '{tail}'"))?;
    let destination = match island {
        "m" => Island::Molokai,
        "o" => Island::Oahu,
        other => bail!("unknown island code '{other}'"),
    };
    let mode = match mode {
        "row" => Mode::Row,
        "ride" => Mode::Ride,
        other => bail!("unknown mode code '{other}'"),
    };
    Ok(Move::new(age, mode, destination))
}
