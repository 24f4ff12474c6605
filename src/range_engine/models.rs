use std::borrow::Borrow;
use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RangeError;

/// Rank order used for every hand comparison, lowest first.
pub const RANK_ORDER: &str = "23456789TJQKA";

// ---------------------------------------------------------------------------
// Actions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    #[serde(rename = "All-in")]
    AllIn,
    Raise,
    Fold,
}

impl Action {
    /// Stacking order for bars and feedback listings.
    pub const ALL: [Action; 3] = [Action::AllIn, Action::Raise, Action::Fold];

    pub fn name(self) -> &'static str {
        match self {
            Action::AllIn => "All-in",
            Action::Raise => "Raise",
            Action::Fold  => "Fold",
        }
    }

    /// Fixed colour category used when drawing this action's bar.
    pub fn colour(self) -> &'static str {
        match self {
            Action::AllIn => "#8b0000", // dark red
            Action::Raise => "#f08080", // light red
            Action::Fold  => "#add8e6", // light blue
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Action {
    type Err = RangeError;

    /// Accepts the display name or its first letter, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a" | "all-in" | "allin" | "all in" | "shove" => Ok(Action::AllIn),
            "r" | "raise"                                 => Ok(Action::Raise),
            "f" | "fold"                                  => Ok(Action::Fold),
            _ => Err(RangeError::UnknownAction(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Positions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Position {
    UTG,
    #[serde(rename = "UTG+1")]
    UTG1,
    LJ, // Lojack
    HJ, // Hijack
    CO, // Cutoff
    BU, // Button
}

impl Position {
    /// Chart columns, earliest to latest preflop action.
    pub const ALL: [Position; 6] = [
        Position::UTG, Position::UTG1, Position::LJ,
        Position::HJ, Position::CO, Position::BU,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Position::UTG  => "UTG",
            Position::UTG1 => "UTG+1",
            Position::LJ   => "LJ",
            Position::HJ   => "HJ",
            Position::CO   => "CO",
            Position::BU   => "BU",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Position {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::ALL
            .into_iter()
            .find(|p| p.code() == s)
            .ok_or_else(|| RangeError::UnknownPosition(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Hands
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandKind {
    Pair,
    Suited,
    Offsuit,
}

impl HandKind {
    pub fn name(self) -> &'static str {
        match self {
            HandKind::Pair    => "pair",
            HandKind::Suited  => "suited",
            HandKind::Offsuit => "offsuit",
        }
    }
}

/// A starting hand in canonical notation: `"88"`, `"AKs"` or `"AKo"`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Hand(String);

/// Index of `c` in [`RANK_ORDER`]; `None` for anything that is not a rank.
pub fn rank_index(c: char) -> Option<usize> {
    RANK_ORDER.find(c)
}

impl Hand {
    /// Accept `s` only if it is already canonical.
    pub fn from_canonical(s: &str) -> Option<Hand> {
        let chars: Vec<char> = s.chars().collect();
        let (hi, lo) = match chars.as_slice() {
            [a, b] | [a, b, _] => (rank_index(*a)?, rank_index(*b)?),
            _ => return None,
        };
        match chars.len() {
            2 if hi == lo => Some(Hand(s.to_string())),
            3 if hi > lo && matches!(chars[2], 's' | 'o') => Some(Hand(s.to_string())),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn kind(&self) -> HandKind {
        match self.0.chars().nth(2) {
            None      => HandKind::Pair,
            Some('s') => HandKind::Suited,
            Some(_)   => HandKind::Offsuit,
        }
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Lets hand-keyed maps be queried with a plain `&str`.
impl Borrow<str> for Hand {
    fn borrow(&self) -> &str {
        &self.0
    }
}

// ---------------------------------------------------------------------------
// Frequencies
// ---------------------------------------------------------------------------

/// Mixed-strategy weights over [`Action::ALL`] for one (hand, position) pair.
///
/// Stored data is rounded, so the three weights need not sum to exactly 1.
/// Serialized as the bare `[all_in, raise, fold]` array used by strategy files.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct FrequencyVector {
    pub all_in: f64,
    pub raise: f64,
    pub fold: f64,
}

impl FrequencyVector {
    /// Used whenever a pair is missing from the table.
    pub const ALWAYS_FOLD: FrequencyVector = FrequencyVector { all_in: 0.0, raise: 0.0, fold: 1.0 };

    pub fn new(all_in: f64, raise: f64, fold: f64) -> Self {
        FrequencyVector { all_in, raise, fold }
    }

    pub fn total(&self) -> f64 {
        self.all_in + self.raise + self.fold
    }

    /// `(action, frequency)` in stacking order.
    pub fn iter(&self) -> impl Iterator<Item = (Action, f64)> + '_ {
        Action::ALL.into_iter().map(move |a| (a, self[a]))
    }

    /// Every weight finite and non-negative, and the sum finite too.
    pub fn is_valid(&self) -> bool {
        self.iter().all(|(_, f)| f.is_finite() && f >= 0.0) && self.total().is_finite()
    }

    /// Largest single weight; `0.0` for an all-zero vector.
    pub fn peak(&self) -> f64 {
        self.iter().map(|(_, f)| f).fold(0.0, f64::max)
    }
}

impl Index<Action> for FrequencyVector {
    type Output = f64;

    fn index(&self, action: Action) -> &f64 {
        match action {
            Action::AllIn => &self.all_in,
            Action::Raise => &self.raise,
            Action::Fold  => &self.fold,
        }
    }
}

impl From<[f64; 3]> for FrequencyVector {
    fn from([all_in, raise, fold]: [f64; 3]) -> Self {
        FrequencyVector { all_in, raise, fold }
    }
}

impl From<FrequencyVector> for [f64; 3] {
    fn from(v: FrequencyVector) -> Self {
        [v.all_in, v.raise, v.fold]
    }
}

/// Nearest whole percent, as shown on labels and in feedback.
pub fn percent(freq: f64) -> u32 {
    (freq * 100.0).round().max(0.0) as u32
}

// ---------------------------------------------------------------------------
// Quiz records
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub hand: Hand,
    pub position: Position,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Score {
    pub correct: u32,
    pub total: u32,
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.correct, self.total)
    }
}
