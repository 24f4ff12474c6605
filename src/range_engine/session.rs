//! The session controller: one context object owning everything a user
//! interaction can touch, driven through [`Session::dispatch`].
//!
//! Front-ends translate their widget events into [`SessionEvent`]s and read
//! the observable state back through the accessors. Every refused event comes
//! back as an `Err` and changes nothing, so it can be shown as a notice.

use log::{debug, error, info};

use crate::error::{RangeError, Result};
use crate::range_engine::{
    chart::{self, Chart},
    config::SessionConfig,
    models::{Action, Hand},
    quiz::{QuizEngine, QuizEvent},
    selection::{self, ChartSelection},
    table::StrategyTable,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Chart,
    Practice,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// Replace the chart from a set of free-text hand fields.
    Generate(Vec<String>),
    AddHand(String),
    RemoveHand(String),
    ClearHands,
    StartPractice,
    Answer(Action),
    NextQuestion,
    ExitPractice,
}

impl SessionEvent {
    pub fn name(&self) -> &'static str {
        match self {
            SessionEvent::Generate(_)   => "generate",
            SessionEvent::AddHand(_)    => "add hand",
            SessionEvent::RemoveHand(_) => "remove hand",
            SessionEvent::ClearHands    => "clear hands",
            SessionEvent::StartPractice => "start practice",
            SessionEvent::Answer(_)     => "answer",
            SessionEvent::NextQuestion  => "next question",
            SessionEvent::ExitPractice  => "exit practice",
        }
    }
}

enum Data {
    Ready(StrategyTable),
    /// The load failed; nothing can be enabled until a new session is built.
    Unavailable(String),
}

pub struct Session {
    data: Data,
    config: SessionConfig,
    selection: ChartSelection,
    chart: Chart,
    quiz: QuizEngine,
}

impl Session {
    pub fn new(table: StrategyTable, config: SessionConfig) -> Self {
        info!("session ready with {} hands", table.len());
        Self::build(Data::Ready(table), config)
    }

    pub fn unavailable(reason: impl Into<String>, config: SessionConfig) -> Self {
        Self::build(Data::Unavailable(reason.into()), config)
    }

    /// Build from the outcome of the one startup load. A failed load gives a
    /// session that refuses every event with the load error.
    pub fn from_load(loaded: Result<StrategyTable>, config: SessionConfig) -> Self {
        match loaded {
            Ok(table) => Self::new(table, config),
            Err(e) => {
                error!("error loading strategy data: {e}");
                Self::unavailable(e.to_string(), config)
            }
        }
    }

    fn build(data: Data, config: SessionConfig) -> Self {
        Session {
            data,
            selection: ChartSelection::new(config.max_selection),
            chart: Chart::default(),
            quiz: QuizEngine::new(config.correct_epsilon, config.rng_seed),
            config,
        }
    }

    // -- observable state ----------------------------------------------------

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn table(&self) -> Option<&StrategyTable> {
        match &self.data {
            Data::Ready(table) => Some(table),
            Data::Unavailable(_) => None,
        }
    }

    pub fn unavailable_reason(&self) -> Option<&str> {
        match &self.data {
            Data::Ready(_) => None,
            Data::Unavailable(reason) => Some(reason),
        }
    }

    pub fn view(&self) -> View {
        if self.quiz.is_active() { View::Practice } else { View::Chart }
    }

    pub fn chart(&self) -> &Chart {
        &self.chart
    }

    pub fn selection(&self) -> &ChartSelection {
        &self.selection
    }

    pub fn quiz(&self) -> &QuizEngine {
        &self.quiz
    }

    pub fn can_generate(&self) -> bool {
        self.table().is_some() && self.view() == View::Chart
    }

    pub fn can_practice(&self) -> bool {
        self.can_generate() && !self.practice_pool().is_empty()
    }

    pub fn prompt(&self) -> Option<String> {
        self.quiz.question().map(|q| q.prompt())
    }

    /// Answer controls are live only while a question awaits its single answer.
    pub fn answers_enabled(&self) -> bool {
        self.quiz.question().is_some() && self.quiz.last_grade().is_none()
    }

    pub fn feedback(&self) -> Option<String> {
        self.quiz.last_grade().map(|g| g.feedback())
    }

    pub fn score_display(&self) -> String {
        self.quiz.score().to_string()
    }

    /// Charted hands, or the whole table when configured and nothing is charted.
    fn practice_pool(&self) -> Vec<Hand> {
        match self.table() {
            Some(_) if !self.selection.is_empty() => self.selection.hands().to_vec(),
            Some(table) if self.config.allow_full_table_pool => table.hands(),
            _ => Vec::new(),
        }
    }

    // -- dispatch ------------------------------------------------------------

    pub fn dispatch(&mut self, event: SessionEvent) -> Result<()> {
        let table = match &self.data {
            Data::Ready(table) => table,
            Data::Unavailable(reason) => return Err(RangeError::DataUnavailable(reason.clone())),
        };
        debug!("dispatch '{}' in {:?} view", event.name(), self.view());

        let in_chart_view = !self.quiz.is_active();
        let chart_only = matches!(
            event,
            SessionEvent::Generate(_)
                | SessionEvent::AddHand(_)
                | SessionEvent::RemoveHand(_)
                | SessionEvent::ClearHands
                | SessionEvent::StartPractice
        );
        if chart_only && !in_chart_view {
            return Err(RangeError::WrongView(event.name()));
        }

        match event {
            SessionEvent::Generate(inputs) => {
                self.selection.replace_from_inputs(table, &inputs)?;
            }
            SessionEvent::AddHand(raw) => {
                let hand = selection::resolve(table, &raw)?;
                self.selection.add(hand)?;
            }
            SessionEvent::RemoveHand(raw) => {
                let hand = selection::resolve(table, &raw)?;
                self.selection.remove(&hand)?;
            }
            SessionEvent::ClearHands => self.selection.clear(),
            SessionEvent::StartPractice => {
                let pool = self.practice_pool();
                self.quiz.dispatch(QuizEvent::Start { pool }, table)?;
                return Ok(());
            }
            SessionEvent::Answer(action) => {
                self.quiz.dispatch(QuizEvent::Submit(action), table)?;
                return Ok(());
            }
            SessionEvent::NextQuestion => {
                self.quiz.dispatch(QuizEvent::Next, table)?;
                return Ok(());
            }
            SessionEvent::ExitPractice => {
                self.quiz.dispatch(QuizEvent::Exit, table)?;
                return Ok(());
            }
        }

        self.chart = chart::render(table, self.selection.hands());
        Ok(())
    }
}
