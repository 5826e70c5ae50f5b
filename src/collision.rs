//! Collision detection
//!
//! `collides` is the only gate a move, rotation or gravity step passes
//! through before the session commits it.

use crate::board::{Board, EMPTY};
use crate::piece::Piece;

/// Would `piece`, anchored at (x, y) instead of its own position, hit a wall,
/// the floor or a settled cell?
///
/// Cells above the board (negative rows) never collide, so pieces can spawn
/// or rotate partly off the top.
pub fn collides(board: &Board, piece: &Piece, x: i32, y: i32) -> bool {
    let cols = board.cols() as i32;
    let rows = board.rows() as i32;

    piece.shape.filled_cells().any(|(r, c)| {
        let board_x = x + c as i32;
        let board_y = y + r as i32;

        if board_x < 0 || board_x >= cols || board_y >= rows {
            return true;
        }
        if board_y < 0 {
            return false;
        }
        board.get(board_y, board_x).is_some_and(|cell| cell != EMPTY)
    })
}

/// Does `piece` fit where it currently stands?
pub fn fits(board: &Board, piece: &Piece) -> bool {
    !collides(board, piece, piece.x, piece.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tetromino::{Shape, TetrominoType};

    fn square_at(x: i32, y: i32) -> Piece {
        Piece::new(TetrominoType::O, x, y)
    }

    #[test]
    fn test_square_in_open_space() {
        let board = Board::new(4, 4);
        let piece = square_at(1, 2);
        assert!(!collides(&board, &piece, 1, 2));
        assert!(fits(&board, &piece));
    }

    #[test]
    fn test_floor_breach() {
        let board = Board::new(4, 4);
        let piece = square_at(1, 2);
        assert!(collides(&board, &piece, 1, 3));
    }

    #[test]
    fn test_wall_breach() {
        let board = Board::new(4, 4);
        let piece = square_at(0, 0);
        assert!(collides(&board, &piece, -1, 0));
        assert!(collides(&board, &piece, 3, 0));
        assert!(!collides(&board, &piece, 2, 0));
    }

    #[test]
    fn test_above_board_is_free() {
        let board = Board::new(4, 4);
        let piece = square_at(1, 0);
        assert!(!collides(&board, &piece, 1, -1));
        assert!(!collides(&board, &piece, 1, -10));
    }

    #[test]
    fn test_walls_apply_above_board() {
        let board = Board::new(4, 4);
        let piece = square_at(0, 0);
        assert!(collides(&board, &piece, -1, -5));
    }

    #[test]
    fn test_settled_cell_blocks() {
        let board = Board::from_rows(vec![
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 0],
            vec![0, 0, 3, 0],
        ])
        .unwrap();
        let piece = square_at(1, 1);
        assert!(!collides(&board, &piece, 1, 1));
        assert!(collides(&board, &piece, 1, 2));
        assert!(!collides(&board, &piece, 0, 2));
    }

    #[test]
    fn test_empty_shape_cells_ignored() {
        // S piece: the empty top-left corner may overlap a settled cell
        let board = Board::from_rows(vec![vec![1, 0, 0], vec![0, 0, 0]]).unwrap();
        let piece = Piece::new(TetrominoType::S, 0, 0);
        assert!(!collides(&board, &piece, 0, 0));
    }

    #[test]
    fn test_does_not_use_piece_position() {
        let board = Board::new(4, 4);
        let mut piece = square_at(10, 10);
        piece.shape = Shape::from_flags(&[[1]]);
        assert!(!collides(&board, &piece, 0, 0));
    }
}
