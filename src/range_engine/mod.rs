//! Core range engine: hand parsing, chart rendering and the practice quiz.
//!
//! ## Module overview
//!
//! | Module       | Purpose |
//! |--------------|---------|
//! | `models`     | Shared types: actions, positions, hands, frequency vectors, score |
//! | `normalizer` | Free-text hand notation → canonical table key |
//! | `table`      | Read-only strategy table and its JSON loader |
//! | `selection`  | Ordered, capped set of charted hands |
//! | `chart`      | Frequency vectors → stacked proportional bars (and terminal drawing) |
//! | `quiz`       | Practice state machine: sampling, grading, scoring |
//! | `config`     | Session tunables with serde defaults |
//! | `session`    | Context object owning all of the above, driven by `dispatch` |

pub mod chart;
pub mod config;
pub mod models;
pub mod normalizer;
pub mod quiz;
pub mod selection;
pub mod session;
pub mod table;

// Re-export the public API surface so callers can use
// `range_engine::Session` without reaching into sub-modules.
pub use chart::{render, Bar, Cell, Chart, Row};
pub use config::SessionConfig;
pub use models::{Action, FrequencyVector, Hand, HandKind, Position, Question, Score};
pub use normalizer::normalize;
pub use quiz::{Grade, QuizEngine, QuizEvent, QuizState};
pub use selection::ChartSelection;
pub use session::{Session, SessionEvent, View};
pub use table::StrategyTable;
