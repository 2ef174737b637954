use std::io::{self, Write};

use shakmaty::{Color, Piece, Role};

use crate::BoardDisplay;
use crate::board::{BOARD_SIZE, Board, Coord};
use crate::feedback::{BoardFeedback, SquareFeedback};

/// Terminal-based board display.
///
/// Renders the board as an 8×8 grid of piece glyphs with ANSI
/// color-coded squares matching the feedback type. Without color,
/// highlighted squares are bracketed instead.
#[derive(Debug)]
pub struct TerminalDisplay {
    color: bool,
}

impl Default for TerminalDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalDisplay {
    /// Create a new terminal display using ANSI colors.
    pub fn new() -> Self {
        Self { color: true }
    }

    /// Create a display that uses plain markers instead of colors.
    pub fn monochrome() -> Self {
        Self { color: false }
    }

    /// Color unless the `NO_COLOR` environment variable is set.
    pub fn from_env() -> Self {
        if std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
            Self::monochrome()
        } else {
            Self::new()
        }
    }
}

/// Error type for terminal display operations.
#[derive(Debug, thiserror::Error)]
pub enum DisplayError {
    #[error("failed to write to terminal: {0}")]
    Io(#[from] io::Error),
}

impl BoardDisplay for TerminalDisplay {
    type Error = DisplayError;

    fn show(&mut self, board: &Board, feedback: &BoardFeedback) -> Result<(), Self::Error> {
        render_board(&mut io::stdout(), board, feedback, self.color)
    }
}

/// Render the board to any writer. Extracted for testability.
fn render_board(
    w: &mut impl Write,
    board: &Board,
    feedback: &BoardFeedback,
    color: bool,
) -> Result<(), DisplayError> {
    for row in 0..BOARD_SIZE {
        write!(w, " {} ", BOARD_SIZE - row)?;
        for col in 0..BOARD_SIZE {
            let at = Coord { row, col };
            let glyph = board.get(at).map_or('·', glyph);
            write!(w, "{}", format_square(glyph, feedback.get(at), color))?;
        }
        writeln!(w)?;
    }
    writeln!(w, "    a  b  c  d  e  f  g  h")?;
    w.flush()?;
    Ok(())
}

/// Unicode glyph for a piece: outlined for player one, filled for player two.
pub fn glyph(piece: Piece) -> char {
    match (piece.role, piece.color) {
        (Role::Pawn, Color::White) => '♙',
        (Role::Knight, Color::White) => '♘',
        (Role::Bishop, Color::White) => '♗',
        (Role::Rook, Color::White) => '♖',
        (Role::Queen, Color::White) => '♕',
        (Role::King, Color::White) => '♔',
        (Role::Pawn, Color::Black) => '♟',
        (Role::Knight, Color::Black) => '♞',
        (Role::Bishop, Color::Black) => '♝',
        (Role::Rook, Color::Black) => '♜',
        (Role::Queen, Color::Black) => '♛',
        (Role::King, Color::Black) => '♚',
    }
}

/// Map a glyph and its feedback to a three-column cell.
fn format_square(glyph: char, feedback: Option<SquareFeedback>, color: bool) -> String {
    let Some(feedback) = feedback else {
        return format!(" {glyph} ");
    };
    if color {
        let background = match feedback {
            SquareFeedback::Destination => 44,
            SquareFeedback::Capture => 41,
            SquareFeedback::Origin => 42,
            SquareFeedback::Promotion => 45,
        };
        format!("\x1b[{background}m {glyph} \x1b[0m")
    } else {
        let (open, close) = match feedback {
            SquareFeedback::Destination => ('(', ')'),
            SquareFeedback::Capture => ('<', '>'),
            SquareFeedback::Origin | SquareFeedback::Promotion => ('[', ']'),
        };
        format!("{open}{glyph}{close}")
    }
}
