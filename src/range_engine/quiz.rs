//! Practice quiz: a small state machine over random (hand, position) questions.
//!
//! ```text
//!   Idle ──Start──▶ AwaitingAnswer ──Submit──▶ Answered
//!    ▲                  │    ▲                    │
//!    └──────Exit────────┘    └───────Next─────────┘
//!    ▲                                            │
//!    └──────────────────Exit──────────────────────┘
//! ```
//!
//! Any other (state, event) pair is refused and leaves the engine untouched.

use log::debug;
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::Serialize;

use crate::error::{RangeError, Result};
use crate::range_engine::{
    models::{percent, Action, FrequencyVector, Hand, Position, Question, Score},
    table::StrategyTable,
};

// ---------------------------------------------------------------------------
// Grading
// ---------------------------------------------------------------------------

/// Outcome of one submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Grade {
    pub submitted: Action,
    pub correct: bool,
    /// Every acceptable action with its stored frequency in whole percent.
    pub correct_actions: Vec<(Action, u32)>,
}

impl Grade {
    pub fn feedback(&self) -> String {
        if self.correct {
            return "Correct!".to_string();
        }
        let listed = if self.correct_actions.is_empty() {
            "none".to_string()
        } else {
            self.correct_actions
                .iter()
                .map(|(action, pct)| format!("{action} ({pct}%)"))
                .collect::<Vec<_>>()
                .join(", ")
        };
        format!("Incorrect. Correct action(s): {listed}")
    }
}

/// Actions whose frequency is above `epsilon`, in stacking order.
pub fn correct_actions(freqs: &FrequencyVector, epsilon: f64) -> Vec<Action> {
    freqs.iter().filter(|&(_, f)| f > epsilon).map(|(a, _)| a).collect()
}

pub fn grade(freqs: &FrequencyVector, submitted: Action, epsilon: f64) -> Grade {
    let accepted = correct_actions(freqs, epsilon);
    Grade {
        submitted,
        correct: accepted.contains(&submitted),
        correct_actions: accepted.into_iter().map(|a| (a, percent(freqs[a]))).collect(),
    }
}

impl Question {
    pub fn prompt(&self) -> String {
        format!("What is the correct action with {} from {}?", self.hand, self.position)
    }
}

// ---------------------------------------------------------------------------
// State machine
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum QuizState {
    Idle,
    AwaitingAnswer(Question),
    Answered { question: Question, grade: Grade },
}

impl QuizState {
    pub fn name(&self) -> &'static str {
        match self {
            QuizState::Idle              => "idle",
            QuizState::AwaitingAnswer(_) => "awaiting an answer",
            QuizState::Answered { .. }   => "answered",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum QuizEvent {
    /// Begin practice over `pool`; the pool is fixed until the next start.
    Start { pool: Vec<Hand> },
    Submit(Action),
    Next,
    Exit,
}

impl QuizEvent {
    pub fn name(&self) -> &'static str {
        match self {
            QuizEvent::Start { .. } => "start",
            QuizEvent::Submit(_)    => "submit",
            QuizEvent::Next         => "next",
            QuizEvent::Exit         => "exit",
        }
    }
}

pub struct QuizEngine {
    state: QuizState,
    score: Score,
    pool: Vec<Hand>,
    epsilon: f64,
    rng: StdRng,
}

impl QuizEngine {
    pub fn new(epsilon: f64, rng_seed: Option<u64>) -> Self {
        let rng = match rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        };
        QuizEngine {
            state: QuizState::Idle,
            score: Score::default(),
            pool: Vec::new(),
            epsilon,
            rng,
        }
    }

    pub fn state(&self) -> &QuizState {
        &self.state
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn is_active(&self) -> bool {
        !matches!(self.state, QuizState::Idle)
    }

    pub fn question(&self) -> Option<&Question> {
        match &self.state {
            QuizState::Idle                          => None,
            QuizState::AwaitingAnswer(question)      => Some(question),
            QuizState::Answered { question, .. }     => Some(question),
        }
    }

    pub fn last_grade(&self) -> Option<&Grade> {
        match &self.state {
            QuizState::Answered { grade, .. } => Some(grade),
            _ => None,
        }
    }

    /// Hand uniform over the pool, position uniform over the six seats.
    fn sample(&mut self) -> Option<Question> {
        if self.pool.is_empty() {
            return None;
        }
        let hand = self.pool[self.rng.gen_range(0..self.pool.len())].clone();
        let position = Position::ALL[self.rng.gen_range(0..Position::ALL.len())];
        Some(Question { hand, position })
    }

    pub fn dispatch(&mut self, event: QuizEvent, table: &StrategyTable) -> Result<&QuizState> {
        let current = std::mem::replace(&mut self.state, QuizState::Idle);
        let next = match (current, event) {
            (QuizState::Idle, QuizEvent::Start { pool }) => {
                self.pool = pool;
                let Some(question) = self.sample() else {
                    return Err(RangeError::EmptyPracticePool);
                };
                self.score = Score::default();
                QuizState::AwaitingAnswer(question)
            }
            (QuizState::AwaitingAnswer(question), QuizEvent::Submit(action)) => {
                let freqs = table.frequencies(&question.hand, question.position);
                let grade = grade(&freqs, action, self.epsilon);
                self.score.total += 1;
                if grade.correct {
                    self.score.correct += 1;
                }
                QuizState::Answered { question, grade }
            }
            (QuizState::Answered { question, grade }, QuizEvent::Next) => match self.sample() {
                Some(next) => QuizState::AwaitingAnswer(next),
                None => {
                    self.state = QuizState::Answered { question, grade };
                    return Err(RangeError::EmptyPracticePool);
                }
            },
            (QuizState::AwaitingAnswer(_) | QuizState::Answered { .. }, QuizEvent::Exit) => {
                self.pool.clear();
                QuizState::Idle
            }
            (state, event) => {
                let err = RangeError::InvalidTransition { event: event.name(), state: state.name() };
                self.state = state;
                return Err(err);
            }
        };
        debug!("quiz -> {} (score {})", next.name(), self.score);
        self.state = next;
        Ok(&self.state)
    }
}
