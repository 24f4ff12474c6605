//! # preflop_range_drill
//!
//! Preflop range charts and a recall quiz over a precomputed strategy table.
//!
//! The strategy table maps each starting hand and each of six positions
//! (`UTG, UTG+1, LJ, HJ, CO, BU`) to mixed frequencies over All-in, Raise and
//! Fold. This crate reads that table, turns free-text hand entries into table
//! keys, renders the chosen hands as stacked proportional bars, and runs a
//! practice quiz that asks for the correct action at random hand/position
//! pairs.
//!
//! ## How it works
//!
//! 1. Load a [`StrategyTable`] from JSON (`{ hand: { position: [a, r, f] } }`).
//! 2. Wrap it in a [`Session`]: the one context object holding the chart
//!    selection, the rendered [`Chart`] and the [`QuizEngine`].
//! 3. Drive it with [`Session::dispatch`] and a [`SessionEvent`] per user
//!    action. Refused events return a [`RangeError`] and change nothing.
//! 4. Read the result back: [`Session::chart`] for the grid,
//!    [`Session::prompt`], [`Session::feedback`] and [`Session::score_display`]
//!    for practice, or [`view_adapter`] for a JSON view-model.
//!
//! ## Quick start
//!
//! ```rust
//! use preflop_range_drill::{Action, Session, SessionConfig, SessionEvent, StrategyTable};
//!
//! let table = StrategyTable::from_json_str(r#"{"AA": {"UTG": [0.9, 0.1, 0.0]}}"#)?;
//! let mut session = Session::new(table, SessionConfig::default());
//!
//! session.dispatch(SessionEvent::Generate(vec!["aa".into()]))?;
//! print!("{}", session.chart().to_text(8));
//!
//! session.dispatch(SessionEvent::StartPractice)?;
//! println!("{}", session.prompt().unwrap_or_default());
//! session.dispatch(SessionEvent::Answer(Action::Raise))?;
//! println!("{}  [{}]", session.feedback().unwrap_or_default(), session.score_display());
//! # Ok::<(), preflop_range_drill::RangeError>(())
//! ```

pub mod error;
pub mod range_engine;
pub mod view_adapter;

// Convenience re-exports so callers can use `preflop_range_drill::Session`
// directly without reaching into `range_engine::`.
pub use error::{RangeError, Result};
pub use range_engine::{
    normalize, render, Action, Chart, ChartSelection, FrequencyVector, Grade, Hand,
    Position, QuizEngine, QuizEvent, QuizState, Score, Session, SessionConfig,
    SessionEvent, StrategyTable, View,
};

#[cfg(test)]
mod tests;
