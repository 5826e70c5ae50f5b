//! Quarter-turn rotation of a shape's bounding box
//!
//! Rotation never looks at the board. The caller checks the result for
//! collisions before committing it, and there are no wall kicks: a rotated
//! shape that does not fit where it stands is simply rejected.

use crate::tetromino::Shape;

/// Rotate 90 degrees clockwise.
/// An R x C box becomes C x R, with input (r, c) landing on (c, R - 1 - r).
pub fn rotate_cw(shape: &Shape) -> Shape {
    let height = shape.height();
    let width = shape.width();
    let mut rotated = vec![vec![false; height]; width];
    for (r, c) in shape.filled_cells() {
        rotated[c][height - 1 - r] = true;
    }
    Shape::from_raw(rotated)
}

impl Shape {
    pub fn rotated(&self) -> Shape {
        rotate_cw(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tetromino::TetrominoType;

    #[test]
    fn test_bar_becomes_column() {
        let bar = Shape::from_flags(&[[1, 1, 1, 1]]);
        assert_eq!(rotate_cw(&bar), Shape::from_flags(&[[1], [1], [1], [1]]));
    }

    #[test]
    fn test_column_becomes_bar() {
        let column = Shape::from_flags(&[[1], [1], [1], [1]]);
        assert_eq!(rotate_cw(&column), Shape::from_flags(&[[1, 1, 1, 1]]));
    }

    #[test]
    fn test_t_rotates_clockwise() {
        // .T.      T.
        // TTT  ->  TT
        //          T.
        let rotated = rotate_cw(&TetrominoType::T.shape());
        assert_eq!(rotated, Shape::from_flags(&[[1, 0], [1, 1], [1, 0]]));
    }

    #[test]
    fn test_l_rotates_clockwise() {
        // ..L      L.
        // LLL  ->  L.
        //          LL
        let rotated = rotate_cw(&TetrominoType::L.shape());
        assert_eq!(rotated, Shape::from_flags(&[[1, 0], [1, 0], [1, 1]]));
    }

    #[test]
    fn test_square_is_fixed_point() {
        let square = TetrominoType::O.shape();
        assert_eq!(square.rotated(), square);
    }

    #[test]
    fn test_four_turns_is_identity() {
        for kind in TetrominoType::all() {
            let shape = kind.shape();
            let turned = shape.rotated().rotated().rotated().rotated();
            assert_eq!(turned, shape, "{:?}", kind);
        }
    }

    #[test]
    fn test_dimensions_swap() {
        let shape = TetrominoType::J.shape();
        let rotated = shape.rotated();
        assert_eq!(rotated.height(), shape.width());
        assert_eq!(rotated.width(), shape.height());
    }
}
