//! Collision module - piece-versus-arena geometry
//!
//! Wall checks and stack checks are split on purpose: horizontal moves must
//! reject any out-of-bounds overlap, while vertical checks treat "below the
//! floor" and "overlapping a settled cell" identically as "must lock now".

use blockfall_types::{ARENA_HEIGHT, ARENA_WIDTH};

use crate::arena::Arena;
use crate::piece::Piece;

/// Whether the piece at horizontal anchor `x` sticks out past either wall.
pub fn hits_wall(piece: &Piece, x: i32) -> bool {
    let leftmost = piece.leftmost_occupied_col() as i32;
    let rightmost = piece.rightmost_occupied_col() as i32;
    leftmost + x < 0 || rightmost + x >= ARENA_WIDTH as i32
}

/// Whether any occupied cell of the piece at anchor (x, y) lies below the
/// floor or on a settled cell.
///
/// Cells outside the arena horizontally are skipped here - [`hits_wall`] is
/// the dedicated guard for those. Cells above the top row are also skipped:
/// a freshly aligned piece may overhang the top edge.
pub fn hits_stack(piece: &Piece, x: i32, y: i32, arena: &Arena) -> bool {
    let size = piece.size();
    for py in 0..size {
        for px in 0..size {
            if !piece.is_occupied(px, py) {
                continue;
            }
            let ax = x + px as i32;
            if ax < 0 || ax >= ARENA_WIDTH as i32 {
                continue;
            }
            let ay = y + py as i32;
            if ay >= ARENA_HEIGHT as i32 {
                return true;
            }
            if ay < 0 {
                continue;
            }
            if arena.cell(ax as usize, ay as usize) != 0 {
                return true;
            }
        }
    }
    false
}

/// Combined check used to validate horizontal moves and rotations.
pub fn hits_side(piece: &Piece, x: i32, y: i32, arena: &Arena) -> bool {
    hits_wall(piece, x) || hits_stack(piece, x, y, arena)
}
