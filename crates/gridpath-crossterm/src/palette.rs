//! Cell-state colors. The core crates know nothing about these.

use crossterm::style::Color;
use gridpath_core::CellState;

pub const EMPTY: Color = Color::Rgb { r: 255, g: 255, b: 255 };
pub const BARRIER: Color = Color::Rgb { r: 0, g: 0, b: 0 };
pub const START: Color = Color::Rgb { r: 255, g: 165, b: 0 };
pub const END: Color = Color::Rgb { r: 64, g: 224, b: 208 };
pub const OPEN: Color = Color::Rgb { r: 0, g: 255, b: 0 };
pub const CLOSED: Color = Color::Rgb { r: 255, g: 0, b: 0 };
pub const PATH: Color = Color::Rgb { r: 128, g: 0, b: 128 };
pub const CURSOR: Color = Color::Rgb { r: 128, g: 128, b: 128 };

/// Background color used to paint a cell in `state`.
pub const fn color(state: CellState) -> Color {
    match state {
        CellState::Empty => EMPTY,
        CellState::Barrier => BARRIER,
        CellState::Start => START,
        CellState::End => END,
        CellState::Open => OPEN,
        CellState::Closed => CLOSED,
        CellState::Path => PATH,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_state_has_a_distinct_color() {
        let colors: Vec<Color> = CellState::ALL.into_iter().map(color).collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert!(!colors.contains(&CURSOR));
    }
}
