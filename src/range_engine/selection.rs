//! The hands currently on the chart.

use log::warn;

use crate::error::{RangeError, Result};
use crate::range_engine::{models::Hand, normalizer::normalize, table::StrategyTable};

/// Normalize one user entry and look it up in the table.
pub fn resolve(table: &StrategyTable, raw: &str) -> Result<Hand> {
    let raw = raw.trim();
    let key = normalize(raw);
    table.hand(&key).ok_or_else(|| {
        warn!("'{raw}' -> '{key}' is not in the strategy table");
        RangeError::UnknownHand(raw.to_string())
    })
}

/// Ordered set of distinct hands, capped at `max`.
#[derive(Debug, Clone)]
pub struct ChartSelection {
    hands: Vec<Hand>,
    max: usize,
}

impl ChartSelection {
    pub fn new(max: usize) -> Self {
        ChartSelection { hands: Vec::new(), max }
    }

    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    pub fn len(&self) -> usize {
        self.hands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hands.is_empty()
    }

    pub fn max(&self) -> usize {
        self.max
    }

    pub fn contains(&self, hand: &Hand) -> bool {
        self.hands.contains(hand)
    }

    pub fn add(&mut self, hand: Hand) -> Result<()> {
        if self.contains(&hand) {
            return Err(RangeError::DuplicateHand(hand.to_string()));
        }
        if self.hands.len() >= self.max {
            return Err(RangeError::SelectionFull { max: self.max });
        }
        self.hands.push(hand);
        Ok(())
    }

    pub fn remove(&mut self, hand: &Hand) -> Result<()> {
        let idx = self
            .hands
            .iter()
            .position(|h| h == hand)
            .ok_or_else(|| RangeError::HandNotCharted(hand.to_string()))?;
        self.hands.remove(idx);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.hands.clear();
    }

    /// Replace the selection from a batch of free-text entries.
    ///
    /// Blank entries are ignored. Entries that do not resolve are logged and
    /// skipped, as are duplicates and anything past the cap. If nothing resolves
    /// the selection is left untouched and `NoValidHands` is returned.
    pub fn replace_from_inputs<S: AsRef<str>>(
        &mut self,
        table: &StrategyTable,
        inputs: &[S],
    ) -> Result<()> {
        let mut next = ChartSelection::new(self.max);
        for raw in inputs.iter().map(|s| s.as_ref().trim()).filter(|s| !s.is_empty()) {
            let Ok(hand) = resolve(table, raw) else { continue };
            match next.add(hand) {
                Ok(()) | Err(RangeError::DuplicateHand(_)) => {}
                Err(e) => warn!("dropping '{raw}': {e}"),
            }
        }
        if next.is_empty() {
            return Err(RangeError::NoValidHands);
        }
        *self = next;
        Ok(())
    }
}
