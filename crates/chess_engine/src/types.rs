//! Core chess types - colors, pieces and board coordinates
//!
//! ## Coordinate System
//!
//! Squares are addressed by `(row, col)` exactly as the board is drawn on screen:
//!
//! ```text
//!        col 0 ........ col 7
//! row 0   a8  b8 ... h8        <- Black's back rank
//! row 7   a1  b1 ... h1        <- White's back rank
//! ```
//!
//! - `rank = 8 - row`
//! - `file = 'a' + col`
//!
//! Keeping the screen orientation in the engine means the front end can map a
//! mouse position to a [`Square`] with two integer divisions and nothing else.
//!
//! ## Piece Codes
//!
//! Every piece has a two-character code: color (`w`/`b`) followed by kind
//! (`p`, `N`, `B`, `R`, `Q`, `K`). The pawn letter is lowercase. These codes are
//! used by the board's text form and as image names (`wK.png`).

use std::fmt;
use std::str::FromStr;

use crate::error::ChessEngineError;

/// Side of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    #[default]
    White,
    Black,
}

impl Color {
    /// The other side
    #[inline]
    pub fn opponent(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Single-letter code used in piece codes (`'w'` / `'b'`)
    pub fn code(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }

    pub fn from_code(c: char) -> Option<Self> {
        match c {
            'w' => Some(Color::White),
            'b' => Some(Color::Black),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Black => "Black",
        }
    }

    /// Row a pawn of this color starts on (eligible for the double step)
    pub fn pawn_start_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Row a pawn of this color promotes on
    pub fn promotion_row(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Row delta of a single pawn step
    pub fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    pub fn code(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    pub fn from_code(c: char) -> Option<Self> {
        match c {
            'p' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Upper-case letter for display, including `P` for pawns
    pub fn letter(self) -> char {
        self.code().to_ascii_uppercase()
    }
}

/// A colored piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// Two-character code, e.g. `"wK"` or `"bp"`
    pub fn code(self) -> String {
        let mut code = String::with_capacity(2);
        code.push(self.color.code());
        code.push(self.kind.code());
        code
    }

    pub fn from_code(code: &str) -> Option<Self> {
        let mut chars = code.chars();
        let color = Color::from_code(chars.next()?)?;
        let kind = PieceKind::from_code(chars.next()?)?;
        if chars.next().is_some() {
            return None;
        }
        Some(Self { color, kind })
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.color.code(), self.kind.code())
    }
}

/// A square on the board, addressed in screen orientation (row 0 = rank 8)
///
/// Both indices are always in `0..8`; the only ways to build a `Square` are
/// the checked constructors below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Create a square from row and column indices
    ///
    /// # Panics
    ///
    /// Panics if either index is outside `0..8`. Use [`Square::try_new`] for
    /// unchecked input.
    pub fn new(row: u8, col: u8) -> Self {
        assert!(row < 8 && col < 8, "square ({row}, {col}) is off the board");
        Self { row, col }
    }

    /// Create a square from signed indices, `None` when off the board
    #[inline]
    pub fn try_new(row: i8, col: i8) -> Option<Self> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    #[inline]
    pub fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub fn col(self) -> u8 {
        self.col
    }

    /// Step by a row/column delta, `None` when the result leaves the board
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        Self::try_new(self.row as i8 + d_row, self.col as i8 + d_col)
    }

    pub fn file_char(self) -> char {
        (b'a' + self.col) as char
    }

    pub fn rank_char(self) -> char {
        (b'8' - self.row) as char
    }

    /// Algebraic name of the square, e.g. `"e2"`
    pub fn notation(self) -> String {
        let mut s = String::with_capacity(2);
        s.push(self.file_char());
        s.push(self.rank_char());
        s
    }

    /// Parse an algebraic square name such as `"e2"`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chess_engine::Square;
    ///
    /// let e2 = Square::from_notation("e2").unwrap();
    /// assert_eq!((e2.row(), e2.col()), (6, 4));
    /// ```
    pub fn from_notation(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let (file, rank) = (bytes[0], bytes[1]);
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return None;
        }
        Some(Self {
            row: b'8' - rank,
            col: file - b'a',
        })
    }

    /// Whether this is a light square (`(row + col)` even)
    pub fn is_light(self) -> bool {
        (self.row + self.col) % 2 == 0
    }

    /// Iterate all 64 squares, row by row from the top
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Square { row, col }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl FromStr for Square {
    type Err = ChessEngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Square::from_notation(s).ok_or_else(|| ChessEngineError::InvalidNotation {
            notation: s.to_string(),
        })
    }
}

impl TryFrom<(i8, i8)> for Square {
    type Error = ChessEngineError;

    fn try_from((row, col): (i8, i8)) -> Result<Self, Self::Error> {
        Square::try_new(row, col).ok_or(ChessEngineError::InvalidSquare { row, col })
    }
}

impl From<Square> for (u8, u8) {
    fn from(square: Square) -> Self {
        (square.row, square.col)
    }
}
