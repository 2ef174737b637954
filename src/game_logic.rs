use crate::board::{Board, Coord};
use crate::feedback::FeedbackSource;
use shakmaty::{Color, Piece, Role};
use thiserror::Error;

/// Why a move or click was refused.
///
/// These are user-facing notices, not failures: the board and the turn
/// are left untouched.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum MoveRejection {
    #[error("Invalid move")]
    IllegalMove { from: Coord, to: Coord },

    #[error("a promotion choice is pending on {0}")]
    PromotionPending(Coord),

    #[error("no promotion is pending")]
    NoPromotionPending,
}

/// Result of applying a move to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move is complete and play continues.
    Moved,
    /// A pawn reached the back rank and waits for [`GameState::resolve_promotion`].
    PromotionPending(Coord),
    /// One side was eliminated. The game has already been reset.
    Won(Color),
}

/// Result of a selection intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The clicked piece is now selected.
    Selected {
        origin: Coord,
        destinations: Vec<Coord>,
    },
    /// Nothing was selected and the square holds no piece of the current player.
    Ignored,
    /// The click completed a move from the selected square.
    Moved(MoveOutcome),
}

/// Parse a promotion answer. Accepts a single `Q`, `R`, `B`, `N` or `K`
/// in either case; the king is a legal promotion target here.
pub fn parse_promotion(answer: &str) -> Option<Role> {
    let mut chars = answer.trim().chars();
    let ch = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    match Role::from_char(ch.to_ascii_lowercase())? {
        Role::Pawn => None,
        role => Some(role),
    }
}

/// The player number shown to users: 1 for white, 2 for black.
#[inline]
pub const fn player_number(color: Color) -> u8 {
    match color {
        Color::White => 1,
        Color::Black => 2,
    }
}

/// Rule engine for one game: board, turn, selection and pending promotion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Color,
    selection: Option<Coord>,
    pending_promotion: Option<Coord>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    #[inline]
    pub fn new() -> Self {
        Self::from_board(Board::starting(), Color::White)
    }

    /// Creates a game from an arbitrary position with `to_move` to play.
    pub fn from_board(board: Board, to_move: Color) -> Self {
        Self {
            board,
            current_player: to_move,
            selection: None,
            pending_promotion: None,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn piece_at(&self, at: Coord) -> Option<Piece> {
        self.board.get(at)
    }

    #[inline]
    pub fn current_player(&self) -> Color {
        self.current_player
    }

    #[inline]
    pub fn selection(&self) -> Option<Coord> {
        self.selection
    }

    #[inline]
    pub fn pending_promotion(&self) -> Option<Coord> {
        self.pending_promotion
    }

    /// Status line for the UI, e.g. "Player 1's turn".
    pub fn status(&self) -> String {
        format!("Player {}'s turn", player_number(self.current_player))
    }

    /// Whether `piece` belongs to the player whose turn it is.
    #[inline]
    pub fn is_current_player_piece(&self, piece: Piece) -> bool {
        piece.color == self.current_player
    }

    /// Move legality for the piece standing on `from`.
    ///
    /// `from` must hold a piece; an empty origin is never a legal move.
    pub fn is_valid_move(&self, from: Coord, to: Coord) -> bool {
        let Some(piece) = self.board.get(from) else {
            return false;
        };

        // Own pieces can never be captured, whatever the piece kind.
        if self
            .board
            .get(to)
            .is_some_and(|target| self.is_current_player_piece(target))
        {
            return false;
        }

        let d_row = i16::from(to.row) - i16::from(from.row);
        let d_col = i16::from(to.col) - i16::from(from.col);
        let straight = (d_row == 0) != (d_col == 0);
        let diagonal = d_row != 0 && d_row.abs() == d_col.abs();

        match piece.role {
            Role::Pawn => self.is_valid_pawn_move(piece.color, from, to, d_row, d_col),
            Role::Rook => straight && self.board.clear_path(from, to),
            Role::Knight => matches!((d_row.abs(), d_col.abs()), (2, 1) | (1, 2)),
            Role::Bishop => diagonal && self.board.clear_path(from, to),
            Role::Queen => (straight || diagonal) && self.board.clear_path(from, to),
            Role::King => d_row.abs() <= 1 && d_col.abs() <= 1 && (d_row, d_col) != (0, 0),
        }
    }

    fn is_valid_pawn_move(
        &self,
        color: Color,
        from: Coord,
        to: Coord,
        d_row: i16,
        d_col: i16,
    ) -> bool {
        let forward = i16::from(Coord::forward(color));
        let target = self.board.get(to);

        if d_col == 0 && d_row == forward {
            return target.is_none();
        }
        if d_col == 0 && d_row == 2 * forward && from.row == Coord::pawn_rank(color) {
            let between = Coord::new((i16::from(from.row) + forward) as u8, from.col);
            return target.is_none() && between.is_some_and(|at| self.board.is_empty_at(at));
        }
        if d_col.abs() == 1 && d_row == forward {
            return target.is_some_and(|piece| piece.color != color);
        }
        false
    }

    /// Every square the piece on `from` may legally move to.
    pub fn valid_destinations(&self, from: Coord) -> Vec<Coord> {
        Coord::all().filter(|&to| self.is_valid_move(from, to)).collect()
    }

    /// Relocates the piece on `from` to `to`, discarding any occupant of `to`.
    ///
    /// No legality check is made. A pawn landing on its promotion rank
    /// suspends the move until [`GameState::resolve_promotion`]; otherwise
    /// the win condition is evaluated. The turn is not switched here.
    pub fn move_piece(&mut self, from: Coord, to: Coord) -> MoveOutcome {
        let moving = self.board.take(from);
        let captured = self.board.get(to);
        self.board.set(to, moving);

        if let Some(piece) = moving {
            log::info!("{:?} {:?} {} -> {}", piece.color, piece.role, from, to);
        }
        if let Some(captured) = captured {
            log::debug!("captured {:?} {:?} on {}", captured.color, captured.role, to);
        }

        if let Some(piece) = moving
            && piece.role == Role::Pawn
            && to.row == Coord::promotion_rank(piece.color)
        {
            log::debug!("promotion pending on {to}");
            self.pending_promotion = Some(to);
            return MoveOutcome::PromotionPending(to);
        }

        self.check_win_condition()
            .map_or(MoveOutcome::Moved, MoveOutcome::Won)
    }

    /// Applies the pending promotion answer and completes the move.
    ///
    /// A valid answer replaces the pawn's kind, keeping its owner. An empty
    /// or unrecognised answer leaves the pawn as it is.
    pub fn resolve_promotion(&mut self, answer: &str) -> Result<MoveOutcome, MoveRejection> {
        let at = self
            .pending_promotion
            .take()
            .ok_or(MoveRejection::NoPromotionPending)?;

        match (self.board.get(at), parse_promotion(answer)) {
            (Some(pawn), Some(role)) => {
                log::info!("{:?} pawn on {} promoted to {:?}", pawn.color, at, role);
                self.board.set(at, Some(Piece { role, ..pawn }));
            }
            _ => log::debug!("promotion answer {answer:?} ignored, pawn stays on {at}"),
        }

        Ok(self.complete_move())
    }

    /// Counts pieces as the current player's or the opponent's and, if
    /// either side has none left, resets the game and returns the winner.
    ///
    /// Must run right after a move and before the turn switches, so that
    /// the current player is the side that just moved.
    pub fn check_win_condition(&mut self) -> Option<Color> {
        let ours = self.board.count(self.current_player);
        let theirs = self.board.count(self.current_player.other());

        let winner = if ours == 0 {
            self.current_player.other()
        } else if theirs == 0 {
            self.current_player
        } else {
            return None;
        };

        log::info!("Player {} wins by elimination", player_number(winner));
        self.reset_game();
        Some(winner)
    }

    /// Passes the turn to the other player.
    #[inline]
    pub fn switch_turn(&mut self) {
        self.current_player = self.current_player.other();
    }

    /// Validates and plays a move, switching the turn when it completes.
    pub fn play(&mut self, from: Coord, to: Coord) -> Result<MoveOutcome, MoveRejection> {
        if let Some(at) = self.pending_promotion {
            return Err(MoveRejection::PromotionPending(at));
        }
        let owns_origin = self
            .board
            .get(from)
            .is_some_and(|piece| self.is_current_player_piece(piece));
        if !owns_origin || !self.is_valid_move(from, to) {
            log::warn!("rejected move {from} -> {to}");
            return Err(MoveRejection::IllegalMove { from, to });
        }

        Ok(match self.move_piece(from, to) {
            MoveOutcome::Moved => {
                self.switch_turn();
                MoveOutcome::Moved
            }
            outcome => outcome,
        })
    }

    /// Handles a clicked square.
    ///
    /// Without a selection, selects the current player's piece. With one,
    /// treats the square as the destination; the selection is cleared
    /// whether or not the move is legal.
    pub fn click(&mut self, at: Coord) -> Result<ClickOutcome, MoveRejection> {
        if let Some(pending) = self.pending_promotion {
            return Err(MoveRejection::PromotionPending(pending));
        }

        match self.selection.take() {
            Some(origin) => self.play(origin, at).map(ClickOutcome::Moved),
            None => match self.board.get(at) {
                Some(piece) if self.is_current_player_piece(piece) => {
                    log::debug!("selected {at}");
                    self.selection = Some(at);
                    Ok(ClickOutcome::Selected {
                        origin: at,
                        destinations: self.valid_destinations(at),
                    })
                }
                _ => Ok(ClickOutcome::Ignored),
            },
        }
    }

    /// Ends the game in favour of the player who did not concede.
    pub fn concede(&mut self) -> Color {
        let winner = self.current_player.other();
        log::info!(
            "Player {} concedes, Player {} wins",
            player_number(self.current_player),
            player_number(winner)
        );
        self.reset_game();
        winner
    }

    /// Restores the starting arrangement with player one to move.
    pub fn reset_game(&mut self) {
        *self = Self::new();
        log::debug!("game reset");
    }

    fn complete_move(&mut self) -> MoveOutcome {
        match self.check_win_condition() {
            Some(winner) => MoveOutcome::Won(winner),
            None => {
                self.switch_turn();
                MoveOutcome::Moved
            }
        }
    }
}

impl FeedbackSource for GameState {
    fn selected(&self) -> Option<Coord> {
        self.selection
    }

    fn destinations(&self, from: Coord) -> Vec<Coord> {
        self.valid_destinations(from)
    }

    fn is_occupied(&self, at: Coord) -> bool {
        !self.board.is_empty_at(at)
    }

    fn pending_promotion(&self) -> Option<Coord> {
        self.pending_promotion
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn sq(name: &str) -> Coord {
        name.parse().expect("test square is invalid")
    }

    fn from_fen(fen: &str, to_move: Color) -> GameState {
        GameState::from_board(fen.parse().expect("invalid board FEN"), to_move)
    }

    fn assert_piece(game: &GameState, square: &str, role: Role, color: Color) {
        let expected = Piece { role, color };
        assert_eq!(
            game.piece_at(sq(square)),
            Some(expected),
            "Expected {:?} at {}, found {:?}",
            expected,
            square,
            game.piece_at(sq(square))
        );
    }

    fn assert_empty(game: &GameState, square: &str) {
        assert_eq!(
            game.piece_at(sq(square)),
            None,
            "Expected empty at {}, found {:?}",
            square,
            game.piece_at(sq(square))
        );
    }

    #[test]
    fn test_new_game_starts_with_player_one() {
        let game = GameState::new();
        assert_eq!(game.current_player(), Color::White);
        assert_eq!(game.board(), &Board::starting());
        assert_eq!(game.selection(), None);
        assert_eq!(game.status(), "Player 1's turn");
    }

    #[test_case("e2", "e3", true; "single step")]
    #[test_case("e2", "e4", true; "double step from home rank")]
    #[test_case("e2", "e5", false; "triple step")]
    #[test_case("e2", "d3", false; "diagonal onto empty square")]
    #[test_case("e2", "e1", false; "backwards onto own king")]
    #[test_case("a1", "e1", false; "rook through own pieces")]
    #[test_case("b1", "c3", true; "knight jumps over pawns")]
    #[test_case("b1", "d2", false; "knight onto own pawn")]
    #[test_case("c1", "e3", false; "bishop blocked by pawn")]
    #[test_case("e1", "e2", false; "king onto own pawn")]
    fn test_starting_position_moves(from: &str, to: &str, legal: bool) {
        let game = GameState::new();
        assert_eq!(game.is_valid_move(sq(from), sq(to)), legal);
    }

    #[test]
    fn test_pawn_blocked_one_ahead_has_no_forward_moves() {
        let game = from_fen("4k3/8/8/8/8/4p3/4P3/4K3", Color::White);
        assert!(!game.is_valid_move(sq("e2"), sq("e3")));
        assert!(!game.is_valid_move(sq("e2"), sq("e4")));
    }

    #[test]
    fn test_pawn_double_step_blocked_on_destination() {
        let game = from_fen("4k3/8/8/8/4p3/8/4P3/4K3", Color::White);
        assert!(game.is_valid_move(sq("e2"), sq("e3")));
        assert!(!game.is_valid_move(sq("e2"), sq("e4")));
    }

    #[test]
    fn test_pawn_double_step_only_from_home_rank() {
        let game = from_fen("4k3/8/8/8/8/4P3/8/4K3", Color::White);
        assert!(game.is_valid_move(sq("e3"), sq("e4")));
        assert!(!game.is_valid_move(sq("e3"), sq("e5")));
    }

    #[test]
    fn test_pawn_captures_diagonally_forward_only() {
        let game = from_fen("4k3/8/8/3p1p2/4P3/8/8/4K3", Color::White);
        assert!(game.is_valid_move(sq("e4"), sq("d5")));
        assert!(game.is_valid_move(sq("e4"), sq("f5")));
        assert!(game.is_valid_move(sq("e4"), sq("e5")));
    }

    #[test]
    fn test_pawn_cannot_capture_diagonally_backwards() {
        let game = from_fen("4k3/8/8/8/4P3/3p1p2/8/4K3", Color::White);
        assert!(!game.is_valid_move(sq("e4"), sq("d3")));
        assert!(!game.is_valid_move(sq("e4"), sq("f3")));
    }

    #[test]
    fn test_pawn_cannot_capture_straight_ahead() {
        let game = from_fen("4k3/8/8/4p3/4P3/8/8/4K3", Color::White);
        assert!(!game.is_valid_move(sq("e4"), sq("e5")));
    }

    #[test]
    fn test_black_pawn_moves_towards_higher_rows() {
        let game = from_fen("4k3/3p4/8/8/8/8/8/4K3", Color::Black);
        assert!(game.is_valid_move(sq("d7"), sq("d6")));
        assert!(game.is_valid_move(sq("d7"), sq("d5")));
        assert!(!game.is_valid_move(sq("d7"), sq("d8")));
    }

    #[test_case("d4", "d8", true; "rook captures up the file")]
    #[test_case("d4", "a4", true; "rook slides left")]
    #[test_case("d4", "d1", false; "rook blocked by own king")]
    #[test_case("d4", "h4", false; "rook path blocked at g4")]
    #[test_case("d4", "e5", false; "rook cannot move diagonally")]
    fn test_rook_moves(from: &str, to: &str, legal: bool) {
        let game = from_fen("3qk3/8/8/8/3R2p1/8/8/3K4", Color::White);
        assert_eq!(game.is_valid_move(sq(from), sq(to)), legal);
    }

    #[test_case("c1", "h6", true; "bishop long diagonal")]
    #[test_case("c1", "a3", false; "bishop blocked by pawn on b2")]
    #[test_case("c1", "c4", false; "bishop cannot move straight")]
    fn test_bishop_moves(from: &str, to: &str, legal: bool) {
        let game = from_fen("4k3/8/8/8/8/8/1P6/2B1K3", Color::White);
        assert_eq!(game.is_valid_move(sq(from), sq(to)), legal);
    }

    #[test_case("d1", "d8", true; "queen straight capture")]
    #[test_case("d1", "h5", true; "queen diagonal")]
    #[test_case("d1", "a4", false; "queen diagonal blocked")]
    #[test_case("d1", "e3", false; "queen knight shape")]
    fn test_queen_moves(from: &str, to: &str, legal: bool) {
        let game = from_fen("3qk3/8/8/8/8/8/2P5/3QK3", Color::White);
        assert_eq!(game.is_valid_move(sq(from), sq(to)), legal);
    }

    #[test]
    fn test_knight_ignores_intervening_pieces() {
        let game = GameState::new();
        let origin = sq("g1");
        let destinations = game.valid_destinations(origin);
        assert_eq!(destinations, vec![sq("f3"), sq("h3")]);
    }

    #[test]
    fn test_king_moves_one_square_any_direction() {
        let game = from_fen("4k3/8/8/8/3K4/8/8/8", Color::White);
        assert_eq!(game.valid_destinations(sq("d4")).len(), 8);
        assert!(!game.is_valid_move(sq("d4"), sq("d6")));
        assert!(!game.is_valid_move(sq("d4"), sq("d4")));
    }

    #[test]
    fn test_king_may_be_captured() {
        let game = from_fen("4k3/4R3/8/8/8/8/8/4K3", Color::White);
        assert!(game.is_valid_move(sq("e7"), sq("e8")));
    }

    #[test]
    fn test_play_moves_piece_and_switches_turn() {
        let mut game = GameState::new();

        let outcome = game.play(sq("e2"), sq("e4")).expect("legal move");

        assert_eq!(outcome, MoveOutcome::Moved);
        assert_empty(&game, "e2");
        assert_piece(&game, "e4", Role::Pawn, Color::White);
        assert_eq!(game.current_player(), Color::Black);
    }

    #[test]
    fn test_play_capture_removes_one_piece() {
        let mut game = from_fen("4k3/8/8/3p4/4P3/8/8/4K3", Color::White);

        game.play(sq("e4"), sq("d5")).expect("legal capture");

        assert_piece(&game, "d5", Role::Pawn, Color::White);
        assert_empty(&game, "e4");
        assert_eq!(game.board().piece_count(), 3);
        assert_eq!(game.current_player(), Color::Black);
    }

    #[test]
    fn test_illegal_move_leaves_state_unchanged() {
        let mut game = GameState::new();
        let before = game.clone();

        let result = game.play(sq("a1"), sq("a5"));

        assert_eq!(
            result,
            Err(MoveRejection::IllegalMove { from: sq("a1"), to: sq("a5") })
        );
        assert_eq!(game, before);
    }

    #[test_case("e7", "e5"; "opponent pawn advance")]
    #[test_case("a8", "a7"; "opponent rook onto own pawn")]
    #[test_case("b8", "c6"; "opponent knight")]
    fn test_play_rejects_opponent_piece(from: &str, to: &str) {
        let mut game = GameState::new();
        let before = game.clone();

        let result = game.play(sq(from), sq(to));

        assert_eq!(
            result,
            Err(MoveRejection::IllegalMove { from: sq(from), to: sq(to) })
        );
        assert_eq!(game, before);
        assert_eq!(game.board().piece_count(), 32);
    }

    #[test]
    fn test_play_rejects_empty_origin() {
        let mut game = GameState::new();
        assert_eq!(
            game.play(sq("e4"), sq("e5")),
            Err(MoveRejection::IllegalMove { from: sq("e4"), to: sq("e5") })
        );
        assert_eq!(game.current_player(), Color::White);
    }

    #[test]
    fn test_move_piece_does_not_switch_turn() {
        let mut game = GameState::new();
        assert_eq!(game.move_piece(sq("g1"), sq("f3")), MoveOutcome::Moved);
        assert_eq!(game.current_player(), Color::White);
    }

    #[test_case("Q", Role::Queen)]
    #[test_case("r", Role::Rook)]
    #[test_case(" b ", Role::Bishop)]
    #[test_case("n", Role::Knight)]
    #[test_case("K", Role::King)]
    fn test_promotion_to_chosen_kind(answer: &str, role: Role) {
        let mut game = from_fen("4k3/P7/8/8/8/8/8/4K3", Color::White);

        let outcome = game.play(sq("a7"), sq("a8")).expect("legal move");
        assert_eq!(outcome, MoveOutcome::PromotionPending(sq("a8")));
        assert_eq!(game.current_player(), Color::White);

        let outcome = game.resolve_promotion(answer).expect("promotion pending");

        assert_eq!(outcome, MoveOutcome::Moved);
        assert_piece(&game, "a8", role, Color::White);
        assert_eq!(game.board().piece_count(), 3);
        assert_eq!(game.current_player(), Color::Black);
        assert_eq!(game.pending_promotion(), None);
    }

    #[test_case(""; "empty answer")]
    #[test_case("P"; "pawn")]
    #[test_case("QQ"; "two letters")]
    #[test_case("x"; "unknown letter")]
    fn test_invalid_promotion_answer_leaves_pawn(answer: &str) {
        let mut game = from_fen("4k3/P7/8/8/8/8/8/4K3", Color::White);
        game.play(sq("a7"), sq("a8")).expect("legal move");

        let outcome = game.resolve_promotion(answer).expect("promotion pending");

        assert_eq!(outcome, MoveOutcome::Moved);
        assert_piece(&game, "a8", Role::Pawn, Color::White);
        assert_eq!(game.current_player(), Color::Black);
    }

    #[test]
    fn test_black_promotion_keeps_owner() {
        let mut game = from_fen("4k3/8/8/8/8/8/p7/4K3", Color::Black);
        game.play(sq("a2"), sq("a1")).expect("legal move");

        game.resolve_promotion("q").expect("promotion pending");

        assert_piece(&game, "a1", Role::Queen, Color::Black);
    }

    #[test]
    fn test_moves_rejected_while_promotion_pending() {
        let mut game = from_fen("4k3/P7/8/8/8/8/8/4K3", Color::White);
        game.play(sq("a7"), sq("a8")).expect("legal move");

        assert_eq!(
            game.play(sq("e1"), sq("e2")),
            Err(MoveRejection::PromotionPending(sq("a8")))
        );
        assert_eq!(
            game.click(sq("e1")),
            Err(MoveRejection::PromotionPending(sq("a8")))
        );
    }

    #[test]
    fn test_resolve_without_pending_promotion() {
        let mut game = GameState::new();
        assert_eq!(
            game.resolve_promotion("Q"),
            Err(MoveRejection::NoPromotionPending)
        );
    }

    #[test]
    fn test_capturing_last_piece_wins_and_resets() {
        let mut game = from_fen("8/8/8/8/8/8/8/r3K3", Color::White);

        let outcome = game.play(sq("e1"), sq("d1")).expect("legal move");
        assert_eq!(outcome, MoveOutcome::Moved);

        let outcome = game.play(sq("a1"), sq("d1")).expect("legal capture");

        assert_eq!(outcome, MoveOutcome::Won(Color::Black));
        assert_eq!(game, GameState::new());
    }

    #[test]
    fn test_check_win_condition_without_elimination() {
        let mut game = GameState::new();
        assert_eq!(game.check_win_condition(), None);
        assert_eq!(game.board(), &Board::starting());
    }

    #[test]
    fn test_check_win_condition_counts_opponent_bucket() {
        let mut game = from_fen("8/8/8/8/8/8/8/4K3", Color::White);
        assert_eq!(game.check_win_condition(), Some(Color::White));
        assert_eq!(game, GameState::new());
    }

    #[test]
    fn test_check_win_condition_counts_current_bucket() {
        let mut game = from_fen("8/8/8/8/8/8/8/4K3", Color::Black);
        assert_eq!(game.check_win_condition(), Some(Color::White));
    }

    #[test]
    fn test_click_selects_own_piece_and_lists_destinations() {
        let mut game = GameState::new();

        let outcome = game.click(sq("e2")).expect("click accepted");

        assert_eq!(
            outcome,
            ClickOutcome::Selected {
                origin: sq("e2"),
                destinations: vec![sq("e4"), sq("e3")],
            }
        );
        assert_eq!(game.selection(), Some(sq("e2")));
    }

    #[test_case("e7"; "opponent piece")]
    #[test_case("e4"; "empty square")]
    fn test_click_ignores_squares_without_own_piece(square: &str) {
        let mut game = GameState::new();
        assert_eq!(game.click(sq(square)), Ok(ClickOutcome::Ignored));
        assert_eq!(game.selection(), None);
    }

    #[test]
    fn test_click_illegal_destination_clears_selection() {
        let mut game = GameState::new();
        game.click(sq("e2")).expect("click accepted");

        let result = game.click(sq("e5"));

        assert!(matches!(result, Err(MoveRejection::IllegalMove { .. })));
        assert_eq!(game.selection(), None);
        assert_eq!(game.current_player(), Color::White);
        assert_eq!(game.board(), &Board::starting());
    }

    #[test]
    fn test_concede_awards_other_player_and_resets() {
        let mut game = GameState::new();
        game.play(sq("e2"), sq("e4")).expect("legal move");

        assert_eq!(game.concede(), Color::White);
        assert_eq!(game, GameState::new());
    }

    #[test]
    fn test_parse_promotion() {
        assert_eq!(parse_promotion("q"), Some(Role::Queen));
        assert_eq!(parse_promotion("K"), Some(Role::King));
        assert_eq!(parse_promotion("p"), None);
        assert_eq!(parse_promotion("queen"), None);
    }
}
