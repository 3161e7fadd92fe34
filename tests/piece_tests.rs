//! Piece tests - catalog layouts and the rotation laws

use blockfall::core::{Piece, SimpleRng};
use blockfall::types::{Direction, PieceKind};

#[test]
fn test_matrix_sizes_by_kind() {
    assert_eq!(Piece::new(PieceKind::O).size(), 2);
    assert_eq!(Piece::new(PieceKind::I).size(), 4);
    for kind in [
        PieceKind::L,
        PieceKind::J,
        PieceKind::T,
        PieceKind::Z,
        PieceKind::S,
    ] {
        assert_eq!(Piece::new(kind).size(), 3, "kind {:?}", kind);
    }
}

#[test]
fn test_every_piece_has_four_occupied_cells() {
    for kind in PieceKind::ALL {
        let piece = Piece::new(kind);
        let occupied = piece.cells().iter().filter(|&&c| c != 0).count();
        assert_eq!(occupied, 4, "kind {:?}", kind);
    }
}

#[test]
fn test_cells_carry_the_kind_color() {
    for kind in PieceKind::ALL {
        let piece = Piece::new(kind);
        for &cell in piece.cells() {
            assert!(
                cell == 0 || cell == kind.cell_value(),
                "kind {:?} cell {}",
                kind,
                cell
            );
        }
    }
}

#[test]
fn test_canonical_j_layout() {
    let j = Piece::new(PieceKind::J);
    assert_eq!(j.cells(), &[0, 3, 0, 0, 3, 0, 3, 3, 0]);
}

#[test]
fn test_canonical_i_is_a_vertical_bar() {
    let i = Piece::new(PieceKind::I);
    for y in 0..4 {
        for x in 0..4 {
            assert_eq!(i.is_occupied(x, y), x == 2);
        }
    }
}

#[test]
fn test_four_same_direction_rotations_are_identity() {
    for kind in PieceKind::ALL {
        for direction in [Direction::Left, Direction::Right] {
            let original = Piece::new(kind);
            let mut piece = original.clone();
            for _ in 0..4 {
                piece = piece.rotated(direction);
            }
            assert_eq!(piece, original, "kind {:?} dir {:?}", kind, direction);
        }
    }
}

#[test]
fn test_opposite_rotations_cancel() {
    for kind in PieceKind::ALL {
        let original = Piece::new(kind);
        assert_eq!(
            original.rotated(Direction::Left).rotated(Direction::Right),
            original
        );
        assert_eq!(
            original.rotated(Direction::Right).rotated(Direction::Left),
            original
        );
    }
}

#[test]
fn test_o_piece_is_a_rotation_fixed_point() {
    let o = Piece::new(PieceKind::O);
    assert_eq!(o.rotated(Direction::Left), o);
    assert_eq!(o.rotated(Direction::Right), o);
}

#[test]
fn test_rotation_preserves_cell_count_and_color() {
    for kind in PieceKind::ALL {
        let rotated = Piece::new(kind).rotated(Direction::Right);
        let occupied = rotated.cells().iter().filter(|&&c| c != 0).count();
        assert_eq!(occupied, 4);
        for &cell in rotated.cells() {
            assert!(cell == 0 || cell == kind.cell_value());
        }
    }
}

#[test]
fn test_random_pieces_are_deterministic_per_seed() {
    let mut rng1 = SimpleRng::new(4242);
    let mut rng2 = SimpleRng::new(4242);
    for _ in 0..100 {
        assert_eq!(Piece::random(&mut rng1), Piece::random(&mut rng2));
    }
}

#[test]
fn test_random_pieces_cover_every_kind() {
    let mut rng = SimpleRng::new(7);
    let mut seen = [false; 7];
    for _ in 0..1000 {
        seen[Piece::random(&mut rng).kind() as usize] = true;
    }
    assert_eq!(seen, [true; 7]);
}
