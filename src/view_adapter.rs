use serde_json::{json, Value};

use crate::range_engine::{Action, Bar, Cell, Chart, Session, View};

/// Build one bar entry: CSS height percentage, colour and hover title.
fn bar(b: &Bar) -> Value {
    json!({
        "action": b.action.name(),
        "height_pct": b.fraction * 100.0,
        "colour": b.colour,
        "title": b.label
    })
}

/// Build one grid cell; an empty `bars` array draws a blank cell.
fn cell(c: &Cell) -> Value {
    json!({
        "position": c.position.code(),
        "bars": c.bars.iter().map(bar).collect::<Vec<_>>()
    })
}

/// Map a rendered [`Chart`] to the grid view-model used by the web client.
///
/// An empty chart maps to empty `header` and `rows` arrays, so the client
/// draws no header row either.
pub fn chart_to_json(chart: &Chart) -> Value {
    let header: Vec<&str> = chart.positions.iter().map(|p| p.code()).collect();
    let rows: Vec<Value> = chart
        .rows
        .iter()
        .map(|row| {
            json!({
                "hand": row.hand.as_str(),
                "kind": row.hand.kind().name(),
                "cells": row.cells.iter().map(cell).collect::<Vec<_>>()
            })
        })
        .collect();
    json!({ "header": header, "rows": rows })
}

/// Practice panel state: prompt, answer buttons, feedback and score.
///
/// The three answer buttons are always listed so the client can keep its
/// layout; `enabled` turns them on only while a question awaits its answer.
pub fn practice_to_json(session: &Session) -> Value {
    let question = session.quiz().question();
    let grade = session.quiz().last_grade();
    let enabled = session.answers_enabled();
    let buttons: Vec<Value> = Action::ALL
        .iter()
        .map(|a| json!({ "action": a.name(), "colour": a.colour(), "enabled": enabled }))
        .collect();

    json!({
        "active": session.view() == View::Practice,
        "question": question.map(|q| json!({
            "hand": q.hand.as_str(),
            "position": q.position.code(),
            "prompt": q.prompt()
        })),
        "answers": buttons,
        "feedback": grade.map(|g| json!({
            "correct": g.correct,
            "text": g.feedback()
        })),
        "next_enabled": grade.is_some(),
        "score": session.score_display()
    })
}

/// Top-level page state: which view is shown and which entry points are live.
pub fn page_to_json(session: &Session) -> Value {
    json!({
        "view": match session.view() {
            View::Chart    => "chart",
            View::Practice => "practice",
        },
        "error": session.unavailable_reason(),
        "generate_enabled": session.can_generate(),
        "practice_enabled": session.can_practice(),
        "chart": chart_to_json(session.chart()),
        "practice": practice_to_json(session)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range_engine::{SessionConfig, SessionEvent, StrategyTable};

    fn session() -> Session {
        let table = StrategyTable::from_json_str(r#"{"AA": {"UTG": [0.9, 0.1, 0.0]}}"#).unwrap();
        Session::new(table, SessionConfig { rng_seed: Some(4), ..Default::default() })
    }

    #[test]
    fn chart_json_carries_heights_colours_and_titles() {
        let mut s = session();
        s.dispatch(SessionEvent::Generate(vec!["AA".into()])).unwrap();
        let v = chart_to_json(s.chart());
        assert_eq!(v["header"][1], "UTG+1");
        assert_eq!(v["rows"][0]["kind"], "pair");
        let utg = &v["rows"][0]["cells"][0];
        assert_eq!(utg["position"], "UTG");
        assert_eq!(utg["bars"].as_array().unwrap().len(), 2);
        assert_eq!(utg["bars"][0]["colour"], "#8b0000");
        assert_eq!(utg["bars"][0]["title"], "All-in: 90%");
        assert_eq!(v["rows"][0]["cells"][3]["bars"][0]["title"], "Fold: 100%");
    }

    #[test]
    fn empty_chart_has_no_header() {
        let v = chart_to_json(&Chart::default());
        assert_eq!(v["header"].as_array().unwrap().len(), 0);
        assert_eq!(v["rows"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn practice_json_tracks_answer_state() {
        let mut s = session();
        s.dispatch(SessionEvent::Generate(vec!["AA".into()])).unwrap();
        s.dispatch(SessionEvent::StartPractice).unwrap();
        let v = practice_to_json(&s);
        assert_eq!(v["active"], true);
        assert_eq!(v["question"]["hand"], "AA");
        assert_eq!(v["answers"][0]["enabled"], true);
        assert!(v["feedback"].is_null());

        s.dispatch(SessionEvent::Answer(Action::Fold)).unwrap();
        let v = practice_to_json(&s);
        assert_eq!(v["answers"][2]["enabled"], false);
        assert_eq!(v["next_enabled"], true);
        assert_eq!(v["score"].as_str().unwrap().split(" / ").nth(1), Some("1"));
    }

    #[test]
    fn page_json_reports_load_failure() {
        let s = Session::unavailable("missing file", SessionConfig::default());
        let v = page_to_json(&s);
        assert_eq!(v["error"], "missing file");
        assert_eq!(v["generate_enabled"], false);
        assert_eq!(v["practice_enabled"], false);
    }
}
