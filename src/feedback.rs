use crate::board::Coord;

/// Type of visual feedback for an individual square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SquareFeedback {
    /// Legal destination onto an empty square
    Destination,
    /// Moving here captures an opponent piece
    Capture,
    /// The selected piece (origin of move)
    Origin,
    /// A pawn waiting for its promotion choice
    Promotion,
}

/// Contains the set of squares and their associated feedback types for the current board state.
///
/// `BoardFeedback` is computed by `compute_feedback()` and consumed by the display layer to
/// highlight the selected piece, where it may go, and pending promotions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoardFeedback {
    squares: Vec<(Coord, SquareFeedback)>,
}

impl BoardFeedback {
    /// Create empty feedback (no highlights)
    #[inline]
    pub const fn new() -> Self {
        Self {
            squares: Vec::new(),
        }
    }

    /// Get all square feedback entries
    #[inline]
    pub fn squares(&self) -> &[(Coord, SquareFeedback)] {
        &self.squares
    }

    /// Get feedback for a specific square, if any
    #[inline]
    pub fn get(&self, at: Coord) -> Option<SquareFeedback> {
        self.squares
            .iter()
            .find(|(sq, _)| *sq == at)
            .map(|(_, feedback)| *feedback)
    }

    /// Set feedback for a square, replacing any previous entry
    pub fn set(&mut self, at: Coord, feedback: SquareFeedback) {
        match self.squares.iter_mut().find(|(sq, _)| *sq == at) {
            Some(entry) => entry.1 = feedback,
            None => self.squares.push((at, feedback)),
        }
    }

    /// Returns true if there are no feedback squares to display.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }
}

impl From<Vec<(Coord, SquareFeedback)>> for BoardFeedback {
    fn from(squares: Vec<(Coord, SquareFeedback)>) -> Self {
        Self { squares }
    }
}

/// Game state information needed to compute feedback
///
/// This trait defines what the feedback system needs from the game engine.
pub trait FeedbackSource {
    /// The currently selected origin square
    fn selected(&self) -> Option<Coord>;

    /// Legal destinations for the piece on `from`
    fn destinations(&self, from: Coord) -> Vec<Coord>;

    /// Whether a piece stands on `at`
    fn is_occupied(&self, at: Coord) -> bool;

    /// Square of a pawn waiting for a promotion choice
    fn pending_promotion(&self) -> Option<Coord>;
}

/// Compute visual feedback based on current game state.
///
/// - Promotion pending: marks the pawn
/// - Piece selected: marks the origin and its legal destinations
pub fn compute_feedback(source: &impl FeedbackSource) -> BoardFeedback {
    match (source.pending_promotion(), source.selected()) {
        (Some(at), _) => vec![(at, SquareFeedback::Promotion)].into(),
        (None, Some(from)) => show_destinations_for(source, from),
        (None, None) => BoardFeedback::default(),
    }
}

/// Show legal destinations for the selected piece
fn show_destinations_for(source: &impl FeedbackSource, from: Coord) -> BoardFeedback {
    std::iter::once((from, SquareFeedback::Origin))
        .chain(source.destinations(from).into_iter().map(|to| {
            if source.is_occupied(to) {
                (to, SquareFeedback::Capture)
            } else {
                (to, SquareFeedback::Destination)
            }
        }))
        .collect::<Vec<_>>()
        .into()
}
