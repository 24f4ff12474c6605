//! End-to-end tests for the `preflop_range_drill` crate.
//!
//! Included from `lib.rs` under `#[cfg(test)]`.
//!
//! | Group | What is tested |
//! |-------|----------------|
//! | Normalizer laws | Idempotence, rank ordering, pair/length handling, case |
//! | Renderer laws | Proportions fill the cell, zero omission, missing-pair fallback |
//! | Quiz laws | Epsilon threshold, score monotonicity, pool restriction |
//! | Scenarios | Single-hand table, chart and practice walkthrough |

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::range_engine::{
    normalize, render, Action, FrequencyVector, Hand, Position, QuizState, Score, Session,
    SessionConfig, SessionEvent, StrategyTable,
};

// ── helpers ──────────────────────────────────────────────────────────────────

const SINGLE: &str = r#"{"AA": {"UTG": [0.9, 0.1, 0]}}"#;

fn single_session(seed: u64) -> Session {
    let table = StrategyTable::from_json_str(SINGLE).unwrap();
    Session::new(table, SessionConfig { rng_seed: Some(seed), ..Default::default() })
}

fn hand(s: &str) -> Hand {
    Hand::from_canonical(s).unwrap()
}

/// Random short strings over ranks, suits and a little noise.
fn random_inputs(seed: u64, n: usize) -> Vec<String> {
    const ALPHABET: &[u8] = b"23456789TJQKAtjqkasoSOxh ";
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let len = rng.gen_range(0..=4);
            (0..len)
                .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
                .collect()
        })
        .collect()
}

// ── normalizer laws ──────────────────────────────────────────────────────────

#[test]
fn normalize_is_idempotent_on_random_input() {
    for raw in random_inputs(7, 2000) {
        let once = normalize(&raw);
        assert_eq!(normalize(&once), once, "normalize not idempotent for {raw:?}");
    }
}

#[test]
fn normalize_orders_ranks_by_table_order() {
    assert_eq!(normalize("KAs"), normalize("AKs"));
    assert_eq!(normalize("AKs"), "AKs");
}

#[test]
fn normalize_pairs_and_four_char_input() {
    assert_eq!(normalize("8h8c"), "8h8c");
    assert_eq!(normalize("88"), "88");
}

#[test]
fn normalize_is_case_insensitive() {
    assert_eq!(normalize("ako"), "AKo");
    assert_eq!(normalize("q5S"), "Q5s");
}

// ── renderer laws ────────────────────────────────────────────────────────────

#[test]
fn rendered_cells_always_fill_or_stay_empty() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..500 {
        let mut draw = || if rng.gen_bool(0.3) { 0.0 } else { rng.gen_range(0.0..1.0) };
        let v = FrequencyVector::new(draw(), draw(), draw());
        let bars = crate::range_engine::chart::cell_bars(&v);
        let filled: f64 = bars.iter().map(|b| b.fraction).sum();
        if v.total() > 0.0 {
            assert!((filled - 1.0).abs() < 1e-9, "{v:?} filled {filled}");
        } else {
            assert!(bars.is_empty());
        }
        for (action, f) in v.iter() {
            let has_bar = bars.iter().any(|b| b.action == action);
            assert_eq!(has_bar, f > 0.0, "{action} bar presence wrong for {v:?}");
        }
    }
}

#[test]
fn absent_pair_renders_one_full_fold_bar() {
    let table = StrategyTable::from_json_str(SINGLE).unwrap();
    let chart = render(&table, &[hand("AA"), hand("72o")]);
    for (key, pos) in [("AA", Position::BU), ("72o", Position::UTG)] {
        let cell = chart.cell(key, pos).unwrap();
        assert_eq!(cell.bars.len(), 1);
        assert_eq!(cell.bars[0].action, Action::Fold);
        assert_eq!(cell.bars[0].fraction, 1.0);
    }
}

// ── quiz laws ────────────────────────────────────────────────────────────────

#[test]
fn epsilon_threshold_for_correct_answers() {
    let eps = SessionConfig::default().correct_epsilon;
    let v = FrequencyVector::new(0.0005, 0.01, 0.9895);
    let accepted = crate::range_engine::quiz::correct_actions(&v, eps);
    assert!(!accepted.contains(&Action::AllIn));
    assert!(accepted.contains(&Action::Raise));
}

#[test]
fn score_is_monotone_through_a_session() {
    let table = StrategyTable::from_json_str(
        r#"{
            "AA":  { "UTG": [0.9, 0.1, 0], "BU": [1, 0, 0] },
            "AKo": { "UTG": [0, 0.6, 0.4], "CO": [0.1, 0.9, 0] },
            "76s": { "BU": [0, 0.5, 0.5] }
        }"#,
    )
    .unwrap();
    let mut s = Session::new(table, SessionConfig { rng_seed: Some(31), ..Default::default() });
    s.dispatch(SessionEvent::Generate(vec!["aa".into(), "KAo".into(), "67s".into()])).unwrap();
    s.dispatch(SessionEvent::StartPractice).unwrap();

    let mut rng = StdRng::seed_from_u64(8);
    for n in 1..=100u32 {
        let action = Action::ALL[rng.gen_range(0..3)];
        s.dispatch(SessionEvent::Answer(action)).unwrap();
        let Score { correct, total } = s.quiz().score();
        assert_eq!(total, n);
        assert!(correct <= total);
        s.dispatch(SessionEvent::NextQuestion).unwrap();
    }
}

#[test]
fn questions_only_come_from_charted_hands() {
    let table = StrategyTable::from_json_str(
        r#"{ "AA": {"UTG": [1, 0, 0]}, "KK": {"UTG": [1, 0, 0]}, "QQ": {"UTG": [1, 0, 0]} }"#,
    )
    .unwrap();
    let mut s = Session::new(table, SessionConfig { rng_seed: Some(2), ..Default::default() });
    s.dispatch(SessionEvent::Generate(vec!["QQ".into()])).unwrap();
    s.dispatch(SessionEvent::StartPractice).unwrap();
    for _ in 0..50 {
        assert_eq!(s.quiz().question().unwrap().hand.as_str(), "QQ");
        s.dispatch(SessionEvent::Answer(Action::Fold)).unwrap();
        s.dispatch(SessionEvent::NextQuestion).unwrap();
    }
}

// ── scenarios ────────────────────────────────────────────────────────────────

#[test]
fn single_hand_chart_shows_all_in_and_raise() {
    let mut s = single_session(1);
    s.dispatch(SessionEvent::Generate(vec!["AA".into()])).unwrap();
    let cell = s.chart().cell("AA", Position::UTG).unwrap();
    let bars: Vec<(Action, String)> = cell.bars.iter().map(|b| (b.action, b.label.clone())).collect();
    assert_eq!(
        bars,
        [(Action::AllIn, "All-in: 90%".to_string()), (Action::Raise, "Raise: 10%".to_string())]
    );
    assert!(cell.bars.iter().all(|b| b.action != Action::Fold));
}

#[test]
fn folding_aces_under_the_gun_is_graded_wrong() {
    // Seeds vary the position; walk until the question lands on UTG.
    let mut s = single_session(1);
    s.dispatch(SessionEvent::Generate(vec!["AA".into()])).unwrap();
    s.dispatch(SessionEvent::StartPractice).unwrap();
    while s.quiz().question().unwrap().position != Position::UTG {
        s.dispatch(SessionEvent::ExitPractice).unwrap();
        s.dispatch(SessionEvent::StartPractice).unwrap();
    }
    assert_eq!(s.quiz().question().unwrap().hand.as_str(), "AA");

    s.dispatch(SessionEvent::Answer(Action::Fold)).unwrap();
    assert!(matches!(s.quiz().state(), QuizState::Answered { .. }));
    assert_eq!(s.quiz().score(), Score { correct: 0, total: 1 });
    assert_eq!(s.score_display(), "0 / 1");
    assert_eq!(
        s.feedback().as_deref(),
        Some("Incorrect. Correct action(s): All-in (90%), Raise (10%)")
    );
}

#[test]
fn rejected_inputs_do_not_block_valid_ones() {
    let mut s = single_session(3);
    s.dispatch(SessionEvent::Generate(vec!["".into(), "zz".into(), " aa ".into(), "AhAd".into()]))
        .unwrap();
    let rows: Vec<&str> = s.chart().hands().map(|h| h.as_str()).collect();
    assert_eq!(rows, ["AA"]);
}
