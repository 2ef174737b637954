use board::Board;
use feedback::BoardFeedback;

pub mod board;
pub mod cli;
pub mod feedback;
pub mod game_logic;

/// Trait for drawing the board and its feedback to the player.
///
/// The rule engine never renders anything itself; front ends implement
/// this to show each square's piece identity and highlights after every
/// change to the game.
pub trait BoardDisplay {
    /// Error type for display update failures.
    type Error: std::fmt::Debug + std::fmt::Display;

    /// Show the given board with its feedback highlights.
    ///
    /// Implementations map [`feedback::SquareFeedback`] variants
    /// to their own output (terminal colors, markers, etc.).
    fn show(&mut self, board: &Board, feedback: &BoardFeedback) -> Result<(), Self::Error>;
}
