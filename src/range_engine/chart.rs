//! Chart rendering: frequency vectors → stacked proportional bars.
//!
//! Every cell is re-normalized by its own total, so a cell with any positive
//! frequency is always filled to its full extent. Rendering is a pure function
//! of the table and the hand list; callers replace the previous chart wholesale.

use log::debug;
use serde::Serialize;

use crate::range_engine::{
    models::{percent, Action, FrequencyVector, Hand, Position},
    table::StrategyTable,
};

/// One action's slice of a cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub action: Action,
    /// Share of the cell's full extent, in `(0, 1]`.
    pub fraction: f64,
    pub colour: &'static str,
    /// Hover text, e.g. `"All-in: 90%"`.
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cell {
    pub position: Position,
    pub bars: Vec<Bar>,
}

impl Cell {
    /// Sum of bar fractions: 1 for any cell with a positive frequency, else 0.
    pub fn filled(&self) -> f64 {
        self.bars.iter().map(|b| b.fraction).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    pub hand: Hand,
    pub cells: Vec<Cell>,
}

/// Rows are hands in selection order, columns are [`Position::ALL`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Chart {
    pub positions: Vec<Position>,
    pub rows: Vec<Row>,
}

/// Bars for one frequency vector, stacked All-in, Raise, Fold.
///
/// Zero-frequency actions produce no bar. An all-zero vector produces none at all.
/// Weights are scaled by the largest one before summing, so huge values cannot
/// overflow the total.
pub fn cell_bars(freqs: &FrequencyVector) -> Vec<Bar> {
    let peak = match freqs.peak() {
        p if p > 0.0 => p,
        _ => 1.0,
    };
    let total = match freqs.iter().map(|(_, f)| f / peak).sum::<f64>() {
        t if t > 0.0 => t,
        _ => 1.0,
    };
    freqs
        .iter()
        .filter(|&(_, f)| f > 0.0)
        .map(|(action, f)| Bar {
            action,
            fraction: f / peak / total,
            colour: action.colour(),
            label: format!("{}: {}%", action, percent(f)),
        })
        .collect()
}

pub fn render(table: &StrategyTable, hands: &[Hand]) -> Chart {
    if hands.is_empty() {
        return Chart::default();
    }
    let rows = hands
        .iter()
        .map(|hand| Row {
            hand: hand.clone(),
            cells: Position::ALL
                .into_iter()
                .map(|position| Cell {
                    position,
                    bars: cell_bars(&table.frequencies(hand, position)),
                })
                .collect(),
        })
        .collect::<Vec<_>>();
    debug!("rendered chart with {} rows", rows.len());
    Chart { positions: Position::ALL.to_vec(), rows }
}

// ---------------------------------------------------------------------------
// Terminal drawing
// ---------------------------------------------------------------------------

fn glyph(action: Action) -> char {
    match action {
        Action::AllIn => '█',
        Action::Raise => '▒',
        Action::Fold  => '░',
    }
}

/// Split `width` character columns between bars by the largest-remainder
/// method, so the runs of a non-empty cell always add up to exactly `width`.
fn allocate(bars: &[Bar], width: usize) -> Vec<usize> {
    let exact: Vec<f64> = bars.iter().map(|b| b.fraction * width as f64).collect();
    let mut runs: Vec<usize> = exact.iter().map(|x| x.floor() as usize).collect();
    let used: usize = runs.iter().sum();
    if bars.is_empty() || used >= width {
        return runs;
    }
    let mut order: Vec<usize> = (0..bars.len()).collect();
    order.sort_by(|&a, &b| {
        let ra = exact[a] - exact[a].floor();
        let rb = exact[b] - exact[b].floor();
        rb.total_cmp(&ra).then(a.cmp(&b))
    });
    for &i in order.iter().cycle().take(width - used) {
        runs[i] += 1;
    }
    runs
}

impl Cell {
    fn draw(&self, width: usize) -> String {
        let mut out: String = self
            .bars
            .iter()
            .zip(allocate(&self.bars, width))
            .flat_map(|(bar, run)| std::iter::repeat(glyph(bar.action)).take(run))
            .collect();
        let drawn = out.chars().count();
        out.extend(std::iter::repeat(' ').take(width.saturating_sub(drawn)));
        out
    }
}

impl Chart {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn hands(&self) -> impl Iterator<Item = &Hand> {
        self.rows.iter().map(|r| &r.hand)
    }

    pub fn cell(&self, hand: &str, position: Position) -> Option<&Cell> {
        self.rows
            .iter()
            .find(|r| r.hand.as_str() == hand)?
            .cells
            .iter()
            .find(|c| c.position == position)
    }

    /// Draw the grid with `cell_width` characters per cell plus a legend.
    /// An empty chart draws nothing, not even the header row.
    pub fn to_text(&self, cell_width: usize) -> String {
        if self.is_empty() {
            return String::new();
        }
        let width = cell_width.max(5);
        let label_width = self.rows.iter().map(|r| r.hand.as_str().len()).max().unwrap_or(0) + 2;

        let mut out = format!("{:label_width$}", "");
        for pos in &self.positions {
            out.push_str(&format!("{:<width$} ", pos.code()));
        }
        out.push('\n');

        for row in &self.rows {
            out.push_str(&format!("{:<label_width$}", row.hand.as_str()));
            for cell in &row.cells {
                out.push_str(&cell.draw(width));
                out.push(' ');
            }
            out.push('\n');
        }

        let legend: Vec<String> = Action::ALL
            .iter()
            .map(|&a| format!("{} {}", glyph(a), a))
            .collect();
        out.push_str(&legend.join("   "));
        out.push('\n');
        out
    }
}
