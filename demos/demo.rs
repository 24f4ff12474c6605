//! End-to-end demo of the chart and practice flow.
//!
//! Run with: `cargo run --example demo`
//!
//! 1. **Chart**: free-text entries in mixed case and rank order are normalized,
//!    unknown ones are skipped, and the rest are drawn as stacked bars.
//! 2. **Incremental edits**: add and remove single hands; the chart re-renders.
//! 3. **Practice**: a seeded quiz answers a few questions and prints feedback
//!    and the running score.
//! 4. **View-model**: the JSON a web client would draw from.
//!
//! Set `RUST_LOG=debug` to see rejected inputs and state transitions.

use preflop_range_drill::{
    view_adapter, Action, Session, SessionConfig, SessionEvent, StrategyTable,
};

const SAMPLE: &str = include_str!("strategy_sample.json");

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let table = StrategyTable::from_json_str(SAMPLE)?;
    let config = SessionConfig { rng_seed: Some(2024), ..Default::default() };
    let mut session = Session::new(table, config);

    // ── Chart ────────────────────────────────────────────────────────────────
    println!("══ Chart: aa, KAs, 9ts, 5as, qq (not in table) ══\n");
    let inputs = ["aa", "KAs", "9ts", "5as", "qq"].map(String::from).to_vec();
    session.dispatch(SessionEvent::Generate(inputs))?;
    print!("{}", session.chart().to_text(10));

    // ── Incremental edits ────────────────────────────────────────────────────
    println!("\n══ Add ako, remove T9s ══\n");
    session.dispatch(SessionEvent::AddHand("ako".into()))?;
    session.dispatch(SessionEvent::RemoveHand("t9s".into()))?;
    print!("{}", session.chart().to_text(10));
    if let Err(e) = session.dispatch(SessionEvent::AddHand("AA".into())) {
        println!("notice: {e}");
    }

    // ── Practice ─────────────────────────────────────────────────────────────
    println!("\n══ Practice (always answering Raise) ══\n");
    session.dispatch(SessionEvent::StartPractice)?;
    for _ in 0..6 {
        let prompt = session.prompt().unwrap_or_default();
        session.dispatch(SessionEvent::Answer(Action::Raise))?;
        println!("  {prompt}");
        println!("    → {}   [{}]", session.feedback().unwrap_or_default(), session.score_display());
        session.dispatch(SessionEvent::NextQuestion)?;
    }
    if let Err(e) = session.dispatch(SessionEvent::Generate(vec!["KK".into()])) {
        println!("\n  notice while practising: {e}");
    }
    session.dispatch(SessionEvent::ExitPractice)?;

    // ── View-model ───────────────────────────────────────────────────────────
    println!("\n══ Page view-model (chart view) ══\n");
    let page = view_adapter::page_to_json(&session);
    println!("{}", serde_json::to_string_pretty(&page["chart"]["rows"][0])?);
    Ok(())
}
