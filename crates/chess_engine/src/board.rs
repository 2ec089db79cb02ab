//! Board representation
//!
//! An 8x8 grid of `Option<Piece>` indexed by [`Square`]. The board knows nothing
//! about whose turn it is or how pieces move; that lives in [`crate::game`] and
//! [`crate::move_gen`].
//!
//! The text form is the one used throughout tests and debug logs: eight lines,
//! each with eight space-separated piece codes, `--` for an empty square.
//!
//! ```text
//! bR bN bB bQ bK bB bN bR
//! bp bp bp bp bp bp bp bp
//! -- -- -- -- -- -- -- --
//! ...
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::{ChessEngineError, ChessEngineResult};
use crate::types::{Color, Piece, PieceKind, Square};

/// Text used for an empty square
pub const EMPTY_CODE: &str = "--";

const BACK_ROW: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::starting()
    }
}

impl Board {
    /// A board with no pieces on it
    pub fn empty() -> Self {
        Self {
            squares: [[None; 8]; 8],
        }
    }

    /// Standard starting position: black on rows 0-1, white on rows 6-7
    pub fn starting() -> Self {
        let mut board = Self::empty();
        for (col, kind) in BACK_ROW.iter().enumerate() {
            board.squares[0][col] = Some(Piece::new(Color::Black, *kind));
            board.squares[1][col] = Some(Piece::new(Color::Black, PieceKind::Pawn));
            board.squares[6][col] = Some(Piece::new(Color::White, PieceKind::Pawn));
            board.squares[7][col] = Some(Piece::new(Color::White, *kind));
        }
        board
    }

    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.squares[square.row() as usize][square.col() as usize]
    }

    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.row() as usize][square.col() as usize] = piece;
    }

    /// Remove and return whatever stands on `square`
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.row() as usize][square.col() as usize].take()
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    /// Color of the piece on `square`, if any
    #[inline]
    pub fn color_at(&self, square: Square) -> Option<Color> {
        self.get(square).map(|piece| piece.color)
    }

    /// All occupied squares, row by row from the top
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |square| self.get(square).map(|piece| (square, piece)))
    }

    /// Location of the king of `color`, scanning the board
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, piece)| piece.color == color && piece.kind == PieceKind::King)
            .map(|(square, _)| square)
    }

    /// Rows of piece codes, `--` for empty squares
    pub fn to_codes(&self) -> [[String; 8]; 8] {
        std::array::from_fn(|row| {
            std::array::from_fn(|col| match self.squares[row][col] {
                Some(piece) => piece.code(),
                None => EMPTY_CODE.to_string(),
            })
        })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, codes) in self.to_codes().iter().enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", codes.join(" "))?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ChessEngineError;

    fn from_str(s: &str) -> ChessEngineResult<Self> {
        let rows: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if rows.len() != 8 {
            return Err(ChessEngineError::InvalidBoard {
                message: format!("expected 8 rows, found {}", rows.len()),
            });
        }

        let mut board = Board::empty();
        for (row, line) in rows.iter().enumerate() {
            let codes: Vec<&str> = line.split_whitespace().collect();
            if codes.len() != 8 {
                return Err(ChessEngineError::InvalidBoard {
                    message: format!("row {row}: expected 8 squares, found {}", codes.len()),
                });
            }
            for (col, code) in codes.iter().enumerate() {
                if *code == EMPTY_CODE {
                    continue;
                }
                let piece = Piece::from_code(code).ok_or_else(|| ChessEngineError::InvalidBoard {
                    message: format!("row {row}, col {col}: unknown piece code {code:?}"),
                })?;
                board.squares[row][col] = Some(piece);
            }
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_layout() {
        let board = Board::starting();
        assert_eq!(board.pieces().count(), 32);
        assert_eq!(board.get(Square::new(7, 4)).map(Piece::code), Some("wK".into()));
        assert_eq!(board.get(Square::new(0, 3)).map(Piece::code), Some("bQ".into()));
        assert_eq!(board.get(Square::new(6, 0)).map(Piece::code), Some("wp".into()));
        assert!(board.is_empty(Square::new(4, 4)));
    }

    #[test]
    fn test_find_king() {
        let board = Board::starting();
        assert_eq!(board.find_king(Color::White), Some(Square::new(7, 4)));
        assert_eq!(board.find_king(Color::Black), Some(Square::new(0, 4)));
        assert_eq!(Board::empty().find_king(Color::White), None);
    }

    #[test]
    fn test_text_form_parses_back() {
        let board = Board::starting();
        let text = board.to_string();
        assert!(text.starts_with("bR bN bB bQ bK bB bN bR"));
        assert_eq!(text.parse::<Board>().unwrap(), board);
    }

    #[test]
    fn test_parse_rejects_malformed_boards() {
        assert!(matches!(
            "-- --".parse::<Board>(),
            Err(ChessEngineError::InvalidBoard { .. })
        ));

        let mut rows = vec!["-- -- -- -- -- -- -- --"; 8];
        rows[3] = "-- -- xx -- -- -- -- --";
        let err = rows.join("\n").parse::<Board>().unwrap_err();
        assert!(err.to_string().contains("xx"));
    }

    #[test]
    fn test_take_clears_square() {
        let mut board = Board::starting();
        let e2 = Square::new(6, 4);
        assert!(board.take(e2).is_some());
        assert!(board.is_empty(e2));
        assert_eq!(board.take(e2), None);
    }
}
