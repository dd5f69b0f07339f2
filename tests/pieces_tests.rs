//! Piece tests - shape templates, rotation states and cell positions

use tetris_classic::core::{Piece, ROTATION_STATES};
use tetris_classic::types::{standard_shapes, ShapeMatrix, ShapeTemplate, RED};

fn template(name: char) -> ShapeTemplate {
    standard_shapes()
        .into_iter()
        .find(|t| t.name == name)
        .expect("standard shape")
}

fn offsets(m: &ShapeMatrix) -> Vec<(usize, usize)> {
    m.occupied().collect()
}

#[test]
fn test_standard_shapes_order_and_size() {
    let names: Vec<char> = standard_shapes().iter().map(|t| t.name).collect();
    assert_eq!(names, vec!['I', 'T', 'L', 'J', 'O', 'S', 'Z']);
    for t in standard_shapes() {
        assert_eq!(t.matrix.occupied().count(), 4, "{} has four cells", t.name);
    }
}

#[test]
fn test_i_piece_rotation_states() {
    let piece = Piece::new(0, 0, &template('I'), RED);
    assert_eq!(offsets(piece.state(0)), vec![(0, 0), (1, 0), (2, 0), (3, 0)]);
    assert_eq!(offsets(piece.state(1)), vec![(0, 0), (0, 1), (0, 2), (0, 3)]);
    assert_eq!(piece.state(2), piece.state(0));
    assert_eq!(piece.state(3), piece.state(1));
}

#[test]
fn test_o_piece_is_rotation_invariant() {
    let piece = Piece::new(0, 0, &template('O'), RED);
    for r in 1..ROTATION_STATES {
        assert_eq!(piece.state(r), piece.state(0));
    }
}

#[test]
fn test_t_piece_rotation_states() {
    let piece = Piece::new(0, 0, &template('T'), RED);
    // 1 1 1
    // 0 1 0
    assert_eq!(offsets(piece.state(0)), vec![(0, 0), (1, 0), (2, 0), (1, 1)]);
    // 0 1
    // 1 1
    // 0 1
    assert_eq!(offsets(piece.state(1)), vec![(1, 0), (0, 1), (1, 1), (1, 2)]);
    // 0 1 0
    // 1 1 1
    assert_eq!(offsets(piece.state(2)), vec![(1, 0), (0, 1), (1, 1), (2, 1)]);
    // 1 0
    // 1 1
    // 1 0
    assert_eq!(offsets(piece.state(3)), vec![(0, 0), (0, 1), (1, 1), (0, 2)]);
}

#[test]
fn test_rotation_cycles_back_after_four_turns() {
    for t in standard_shapes() {
        let mut piece = Piece::new(5, 5, &t, RED);
        let start = piece.matrix().clone();
        for _ in 0..ROTATION_STATES {
            piece.rotate();
        }
        assert_eq!(piece.rotation(), 0, "{}", t.name);
        assert_eq!(piece.matrix(), &start, "{}", t.name);
    }
}

#[test]
fn test_rotated_matrix_swaps_dimensions() {
    let mut piece = Piece::new(0, 0, &template('L'), RED);
    assert_eq!((piece.matrix().cols(), piece.matrix().rows()), (3, 2));
    piece.rotate();
    assert_eq!((piece.matrix().cols(), piece.matrix().rows()), (2, 3));
}

#[test]
fn test_cells_are_offset_by_position() {
    let piece = Piece::new(7, 3, &template('S'), RED);
    let cells: Vec<(i32, i32)> = piece.cells().collect();
    assert_eq!(cells, vec![(8, 3), (9, 3), (7, 4), (8, 4)]);

    let shifted: Vec<(i32, i32)> = piece.cells_at(-1, 2).collect();
    assert_eq!(shifted, vec![(7, 5), (8, 5), (6, 6), (7, 6)]);
}

#[test]
fn test_piece_keeps_kind_and_color() {
    let piece = Piece::new(0, 0, &template('Z'), RED);
    assert_eq!(piece.kind(), 'Z');
    assert_eq!(piece.color(), RED);
}

#[test]
fn test_custom_template() {
    let domino = ShapeTemplate::new('D', &[&[1], &[1]]);
    let mut piece = Piece::new(2, 2, &domino, RED);
    piece.rotate();
    let cells: Vec<(i32, i32)> = piece.cells().collect();
    assert_eq!(cells, vec![(2, 2), (3, 2)]);
}
