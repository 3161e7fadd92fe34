//! Piece module - tetromino matrices and rotation
//!
//! A piece owns a small square matrix (2x2, 3x3 or 4x4) of cells in row-major
//! order. Non-zero cells carry the kind's color value so locked cells keep
//! their color in the arena; for collision and placement only zero/non-zero
//! matters. Rotation is a pure transform on the matrix - validating the
//! result against the arena is the game's job.

use arrayvec::ArrayVec;
use blockfall_types::{Cell, Direction, PieceKind};

use crate::rng::SimpleRng;

/// Largest matrix any piece needs (the I piece, 4x4).
pub const MAX_PIECE_CELLS: usize = 16;

// Canonical orientation of each kind. Non-zero entries are the kind's cell
// value (declaration index + 1).
const O_LAYOUT: [Cell; 4] = [
    1, 1, //
    1, 1,
];
const L_LAYOUT: [Cell; 9] = [
    0, 2, 0, //
    0, 2, 0, //
    0, 2, 2,
];
const J_LAYOUT: [Cell; 9] = [
    0, 3, 0, //
    0, 3, 0, //
    3, 3, 0,
];
const T_LAYOUT: [Cell; 9] = [
    0, 0, 0, //
    4, 4, 4, //
    0, 4, 0,
];
const I_LAYOUT: [Cell; 16] = [
    0, 0, 5, 0, //
    0, 0, 5, 0, //
    0, 0, 5, 0, //
    0, 0, 5, 0,
];
const Z_LAYOUT: [Cell; 9] = [
    0, 0, 0, //
    6, 6, 0, //
    0, 6, 6,
];
const S_LAYOUT: [Cell; 9] = [
    0, 0, 0, //
    0, 7, 7, //
    7, 7, 0,
];

/// A falling piece: kind tag plus its current cell matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    kind: PieceKind,
    cells: ArrayVec<Cell, MAX_PIECE_CELLS>,
}

impl Piece {
    /// Create a piece of the given kind in its canonical orientation.
    pub fn new(kind: PieceKind) -> Self {
        let layout: &[Cell] = match kind {
            PieceKind::O => &O_LAYOUT,
            PieceKind::L => &L_LAYOUT,
            PieceKind::J => &J_LAYOUT,
            PieceKind::T => &T_LAYOUT,
            PieceKind::I => &I_LAYOUT,
            PieceKind::Z => &Z_LAYOUT,
            PieceKind::S => &S_LAYOUT,
        };
        Self {
            kind,
            cells: layout.iter().copied().collect(),
        }
    }

    /// Create a piece of a uniformly random kind.
    pub fn random(rng: &mut SimpleRng) -> Self {
        Self::new(PieceKind::from_index(rng.next_range(7) as usize))
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Side length of the matrix.
    pub fn size(&self) -> usize {
        self.kind.matrix_size()
    }

    /// Cell at matrix position (x, y).
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        self.cells[y * self.size() + x]
    }

    pub fn is_occupied(&self, x: usize, y: usize) -> bool {
        self.cell(x, y) != 0
    }

    /// Row-major matrix cells.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The piece rotated 90 degrees in the given direction.
    ///
    /// Four rotations in the same direction restore the original matrix;
    /// rotating one way and then the other is the identity.
    pub fn rotated(&self, direction: Direction) -> Piece {
        match direction {
            Direction::Right => self.rotated_cw(),
            // Three clockwise rotations equal one counter-clockwise turn.
            Direction::Left => self.rotated_cw().rotated_cw().rotated_cw(),
        }
    }

    /// Clockwise rotation: transpose, then reverse rows. Source cell (x, y)
    /// lands at (size-1-y, x).
    fn rotated_cw(&self) -> Piece {
        // The O piece is a fixed point under rotation.
        if self.kind == PieceKind::O {
            return self.clone();
        }

        let size = self.size();
        let mut cells: ArrayVec<Cell, MAX_PIECE_CELLS> = (0..size * size).map(|_| 0).collect();
        for y in 0..size {
            for x in 0..size {
                cells[x * size + (size - 1 - y)] = self.cells[y * size + x];
            }
        }
        Piece {
            kind: self.kind,
            cells,
        }
    }

    /// Leftmost matrix column containing an occupied cell.
    pub fn leftmost_occupied_col(&self) -> usize {
        let size = self.size();
        for x in 0..size {
            if (0..size).any(|y| self.is_occupied(x, y)) {
                return x;
            }
        }
        0
    }

    /// Rightmost matrix column containing an occupied cell.
    pub fn rightmost_occupied_col(&self) -> usize {
        let size = self.size();
        for x in (0..size).rev() {
            if (0..size).any(|y| self.is_occupied(x, y)) {
                return x;
            }
        }
        0
    }

    /// Number of all-zero rows before the first occupied row. Used for spawn
    /// alignment so asymmetric layouts don't spawn visually offset.
    pub fn leading_empty_rows(&self) -> usize {
        let size = self.size();
        (0..size)
            .take_while(|&y| (0..size).all(|x| !self.is_occupied(x, y)))
            .count()
    }

    /// Number of all-zero columns before the first occupied column.
    pub fn leading_empty_cols(&self) -> usize {
        let size = self.size();
        (0..size)
            .take_while(|&x| (0..size).all(|y| !self.is_occupied(x, y)))
            .count()
    }
}
