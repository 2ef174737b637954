use std::fmt;
use std::str::FromStr;

use shakmaty::{Color, File, Piece, Rank, Role, Square};

/// Board edge length.
pub const BOARD_SIZE: u8 = 8;

const BACK_RANK: [Role; BOARD_SIZE as usize] = [
    Role::Rook,
    Role::Knight,
    Role::Bishop,
    Role::Queen,
    Role::King,
    Role::Bishop,
    Role::Knight,
    Role::Rook,
];

/// Board coordinate as (row, column).
///
/// Row 0 is the far rank (player two's home), row 7 the near rank
/// (player one's home). Column 0 is the a-file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: u8,
    pub col: u8,
}

impl Coord {
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// All 64 coordinates in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Coord { row, col }))
    }

    /// Home rank of the given owner's pawns.
    pub const fn pawn_rank(color: Color) -> u8 {
        match color {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Back rank a pawn of the given owner promotes on.
    pub const fn promotion_rank(color: Color) -> u8 {
        match color {
            Color::White => 0,
            Color::Black => BOARD_SIZE - 1,
        }
    }

    /// Row direction a pawn of the given owner advances in.
    pub const fn forward(color: Color) -> i8 {
        match color {
            Color::White => -1,
            Color::Black => 1,
        }
    }
}

impl From<Coord> for Square {
    fn from(coord: Coord) -> Self {
        Square::from_coords(
            File::new(u32::from(coord.col)),
            Rank::new(u32::from(BOARD_SIZE - 1 - coord.row)),
        )
    }
}

impl From<Square> for Coord {
    fn from(square: Square) -> Self {
        let rank = u32::from(square.rank()) as u8;
        let file = u32::from(square.file()) as u8;
        Self {
            row: BOARD_SIZE - 1 - rank,
            col: file,
        }
    }
}

impl FromStr for Coord {
    type Err = <Square as FromStr>::Err;

    /// Parses algebraic square names such as `e2`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Square>().map(Coord::from)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Square::from(*self))
    }
}

/// The 8×8 grid of pieces.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; BOARD_SIZE as usize]; BOARD_SIZE as usize],
}

impl Board {
    /// A board without any pieces.
    pub const fn empty() -> Self {
        Self {
            squares: [[None; BOARD_SIZE as usize]; BOARD_SIZE as usize],
        }
    }

    /// The standard chess starting arrangement.
    pub fn starting() -> Self {
        let mut board = Self::empty();
        for (col, &role) in BACK_RANK.iter().enumerate() {
            board.squares[0][col] = Some(Piece { role, color: Color::Black });
            board.squares[1][col] = Some(Piece { role: Role::Pawn, color: Color::Black });
            board.squares[6][col] = Some(Piece { role: Role::Pawn, color: Color::White });
            board.squares[7][col] = Some(Piece { role, color: Color::White });
        }
        board
    }

    #[inline]
    pub fn get(&self, at: Coord) -> Option<Piece> {
        self.squares[usize::from(at.row)][usize::from(at.col)]
    }

    #[inline]
    pub fn set(&mut self, at: Coord, piece: Option<Piece>) {
        self.squares[usize::from(at.row)][usize::from(at.col)] = piece;
    }

    /// Removes and returns the piece at `at`.
    #[inline]
    pub fn take(&mut self, at: Coord) -> Option<Piece> {
        self.squares[usize::from(at.row)][usize::from(at.col)].take()
    }

    #[inline]
    pub fn is_empty_at(&self, at: Coord) -> bool {
        self.get(at).is_none()
    }

    /// Occupied squares in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        Coord::all().filter_map(|at| self.get(at).map(|piece| (at, piece)))
    }

    /// Number of pieces owned by `color`.
    pub fn count(&self, color: Color) -> usize {
        self.occupied().filter(|(_, piece)| piece.color == color).count()
    }

    pub fn piece_count(&self) -> usize {
        self.occupied().count()
    }

    /// Returns true if every square strictly between `from` and `to` is
    /// empty, stepping along the unit direction between them.
    ///
    /// Adjacent squares trivially have a clear path. Squares that share no
    /// row, column or diagonal have no path at all.
    pub fn clear_path(&self, from: Coord, to: Coord) -> bool {
        let delta_row = i16::from(to.row) - i16::from(from.row);
        let delta_col = i16::from(to.col) - i16::from(from.col);
        if delta_row != 0 && delta_col != 0 && delta_row.abs() != delta_col.abs() {
            return false;
        }

        let d_row = delta_row.signum();
        let d_col = delta_col.signum();
        let mut row = i16::from(from.row) + d_row;
        let mut col = i16::from(from.col) + d_col;

        while (row, col) != (i16::from(to.row), i16::from(to.col)) {
            if self.squares[row as usize][col as usize].is_some() {
                return false;
            }
            row += d_row;
            col += d_col;
        }
        true
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting()
    }
}

impl From<&shakmaty::Board> for Board {
    fn from(board: &shakmaty::Board) -> Self {
        let mut out = Self::empty();
        for square in Square::ALL {
            out.set(Coord::from(square), board.piece_at(square));
        }
        out
    }
}

impl From<&Board> for shakmaty::Board {
    fn from(board: &Board) -> Self {
        let mut out = shakmaty::Board::empty();
        for (at, piece) in board.occupied() {
            out.set_piece_at(Square::from(at), piece);
        }
        out
    }
}

impl FromStr for Board {
    type Err = <shakmaty::Board as FromStr>::Err;

    /// Parses the piece placement field of a FEN, row 0 first.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<shakmaty::Board>().map(|board| Board::from(&board))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", shakmaty::Board::from(self))
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Board").field(&format_args!("{self}")).finish()
    }
}
