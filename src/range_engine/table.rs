//! The precomputed strategy table and its JSON loader.
//!
//! Wire format: `{ "<hand>": { "<position>": [all_in, raise, fold] } }`.

use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::{debug, warn};

use crate::error::{RangeError, Result};
use crate::range_engine::models::{FrequencyVector, Hand, Position};

type RawTable = BTreeMap<String, BTreeMap<String, FrequencyVector>>;

/// Read-only lookup of frequency vectors by hand and position.
#[derive(Debug, Clone, Default)]
pub struct StrategyTable {
    entries: HashMap<Hand, HashMap<Position, FrequencyVector>>,
}

impl StrategyTable {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::from_raw(serde_json::from_str(json)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_raw(serde_json::from_reader(reader)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("loading strategy table from {}", path.display());
        Self::from_reader(BufReader::new(File::open(path)?))
    }

    /// Non-canonical hand keys and unknown position codes can never be looked
    /// up, so they are skipped with a warning. Bad numbers fail the load.
    fn from_raw(raw: RawTable) -> Result<Self> {
        let mut entries = HashMap::with_capacity(raw.len());
        for (key, by_position) in raw {
            let Some(hand) = Hand::from_canonical(&key) else {
                warn!("skipping non-canonical hand key '{key}'");
                continue;
            };
            let mut row = HashMap::with_capacity(by_position.len());
            for (code, freqs) in by_position {
                let Ok(position) = code.parse::<Position>() else {
                    warn!("skipping unknown position '{code}' for {key}");
                    continue;
                };
                if !freqs.is_valid() {
                    return Err(RangeError::InvalidFrequency {
                        hand: key,
                        position: code,
                        values: freqs.into(),
                    });
                }
                row.insert(position, freqs);
            }
            entries.insert(hand, row);
        }
        debug!("strategy table ready with {} hands", entries.len());
        Ok(StrategyTable { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a canonical key. `None` if the key is not a table hand.
    pub fn hand(&self, key: &str) -> Option<Hand> {
        self.entries.get_key_value(key).map(|(hand, _)| hand.clone())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Every hand in the table, sorted so that sampling is reproducible.
    pub fn hands(&self) -> Vec<Hand> {
        let mut hands: Vec<Hand> = self.entries.keys().cloned().collect();
        hands.sort();
        hands
    }

    pub fn get(&self, hand: &Hand, position: Position) -> Option<&FrequencyVector> {
        self.entries.get(hand)?.get(&position)
    }

    /// Missing pairs are a data gap and play as a pure fold.
    pub fn frequencies(&self, hand: &Hand, position: Position) -> FrequencyVector {
        self.get(hand, position).copied().unwrap_or(FrequencyVector::ALWAYS_FOLD)
    }
}
