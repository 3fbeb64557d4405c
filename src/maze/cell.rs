use crossterm::style::{Color, Stylize};

use std::fmt;

/// State of a single grid cell.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    #[default]
    Wall,
    Passage,
    /// A passage cell that lies on a solution route.
    MarkedPath,
}

impl Cell {
    /// The width of each cell when rendered, in character widths.
    pub const CELL_WIDTH: usize = 2;

    /// Maps an external code to a cell: 0 is a passage, 1 is a wall.
    pub fn from_code(code: u8) -> Option<Cell> {
        match code {
            0 => Some(Cell::Passage),
            1 => Some(Cell::Wall),
            _ => None,
        }
    }

    pub fn code(&self) -> i8 {
        match self {
            Cell::Passage => 0,
            Cell::Wall => 1,
            Cell::MarkedPath => -1,
        }
    }

    pub fn is_passage(&self) -> bool {
        matches!(self, Cell::Passage)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let styled_symbol = match self {
            Cell::Wall => "██".with(Color::White),
            Cell::Passage => "  ".with(Color::Reset),
            Cell::MarkedPath => "//".with(Color::Yellow),
        };

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                styled_symbol.content().width(),
                Cell::CELL_WIDTH,
                "Each cell must occupy exactly two character widths."
            );
        }

        write!(f, "{}", styled_symbol)
    }
}
