//! Game module - the state machine that owns a whole session
//!
//! Ties the arena, pieces, collision checks and scoring together and drives
//! the spawn -> move -> rotate -> drop -> lock -> clear -> respawn cycle.
//! The driving loop (input polling, gravity timer, rendering) lives outside;
//! it calls in through the handful of methods below and reads state back
//! through accessors and [`Game::snapshot_board`].

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use blockfall_types::{
    Cell, Direction, LifecycleState, ARENA_CELLS, ARENA_HEIGHT, ARENA_WIDTH, SPAWN_X, SPAWN_Y,
};

use crate::arena::Arena;
use crate::collision;
use crate::piece::Piece;
use crate::rng::SimpleRng;
use crate::scoring;
use crate::snapshot::BoardSnapshot;

/// One game session: lifecycle, arena, falling piece and counters.
#[derive(Debug, Clone)]
pub struct Game {
    state: LifecycleState,
    arena: Arena,
    current: Piece,
    next: Piece,
    /// Top-left anchor of the current piece's matrix, in arena coordinates.
    /// Spawn alignment can push either coordinate negative.
    x: i32,
    y: i32,
    fast_drop: bool,
    score: u32,
    level: u32,
    cleared_lines: u32,
    /// How often each kind has spawned, indexed by kind.
    piece_counts: [u32; 7],
    defeated: bool,
    seed: u32,
    rng: SimpleRng,
}

impl Game {
    /// Create a new session. A seed of 0 requests a clock-derived seed; any
    /// other value reproduces the same piece sequence every time.
    pub fn new(seed: u32) -> Self {
        let seed = if seed == 0 { clock_seed() } else { seed };
        let mut rng = SimpleRng::new(seed);
        let current = Piece::random(&mut rng);
        let next = Piece::random(&mut rng);

        let mut game = Self {
            state: LifecycleState::Playing,
            arena: Arena::new(),
            current,
            next,
            x: SPAWN_X,
            y: SPAWN_Y,
            fast_drop: false,
            score: 0,
            level: 0,
            cleared_lines: 0,
            piece_counts: [0; 7],
            defeated: false,
            seed,
            rng,
        };
        game.finish_spawn();
        game
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn cleared_lines(&self) -> u32 {
        self.cleared_lines
    }

    pub fn piece_counts(&self) -> &[u32; 7] {
        &self.piece_counts
    }

    pub fn is_defeat(&self) -> bool {
        self.defeated
    }

    /// The resolved seed of this session, for deterministic replay.
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// The settled-block grid, without the falling piece.
    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn current_piece(&self) -> &Piece {
        &self.current
    }

    /// The pre-generated piece that spawns after the current one locks.
    pub fn next_piece(&self) -> &Piece {
        &self.next
    }

    /// Anchor position of the current piece.
    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn fast_drop(&self) -> bool {
        self.fast_drop
    }

    /// Set while the fast-drop input is held.
    pub fn set_fast_drop(&mut self, fast: bool) {
        self.fast_drop = fast;
    }

    /// Delay until the next automatic gravity tick.
    pub fn drop_interval(&self) -> Duration {
        scoring::drop_interval(self.level, self.fast_drop)
    }

    /// Shift the current piece one column. A move into a wall or the stack
    /// is reverted and reported as not applied; no move is legal once the
    /// game is over.
    pub fn move_piece(&mut self, direction: Direction) -> bool {
        if self.state == LifecycleState::GameOver {
            return false;
        }

        let dx = match direction {
            Direction::Left => -1,
            Direction::Right => 1,
        };
        self.x += dx;
        if collision::hits_side(&self.current, self.x, self.y, &self.arena) {
            self.x -= dx;
            return false;
        }
        true
    }

    /// Rotate the current piece 90 degrees. The rotated matrix is adopted
    /// only if it fits at the current anchor; there is no wall-kick search.
    pub fn rotate(&mut self, direction: Direction) -> bool {
        if self.state == LifecycleState::GameOver {
            return false;
        }

        let rotated = self.current.rotated(direction);
        if collision::hits_side(&rotated, self.x, self.y, &self.arena) {
            return false;
        }
        self.current = rotated;
        true
    }

    /// Advance the current piece one row (a gravity tick).
    ///
    /// If the step collides with the stack or the floor it is reverted and
    /// the piece locks instead: its cells are added into the arena, filled
    /// rows are cleared and scored at the pre-clear level, the next piece
    /// spawns (flipping to game over if it overlaps the stack), and the
    /// level is re-derived. Returns the number of rows cleared, 0..=4, so
    /// the caller can trigger feedback.
    #[allow(clippy::should_implement_trait)]
    pub fn drop(&mut self) -> usize {
        if self.state != LifecycleState::Playing {
            return 0;
        }

        self.y += 1;
        if !collision::hits_stack(&self.current, self.x, self.y, &self.arena) {
            return 0;
        }
        self.y -= 1;

        self.arena.lock(&self.current, self.x, self.y);
        let rows = self.arena.clear_filled_rows();
        self.score = self
            .score
            .saturating_add(scoring::line_clear_score(rows, self.level));
        self.cleared_lines += rows as u32;
        self.spawn_next();
        self.level = scoring::level_for_lines(self.cleared_lines);

        rows
    }

    /// Replace the current piece with the preview piece and generate a new
    /// preview.
    fn spawn_next(&mut self) {
        self.current = std::mem::replace(&mut self.next, Piece::random(&mut self.rng));
        self.finish_spawn();
    }

    /// Position a freshly promoted piece: reset the anchor, nudge it so the
    /// first occupied row and column of its matrix sit on the anchor, count
    /// the spawn, and detect spawn-time defeat.
    fn finish_spawn(&mut self) {
        self.x = SPAWN_X - self.current.leading_empty_cols() as i32;
        self.y = SPAWN_Y - self.current.leading_empty_rows() as i32;
        self.piece_counts[self.current.kind() as usize] += 1;

        if collision::hits_stack(&self.current, self.x, self.y, &self.arena) {
            self.defeated = true;
            self.state = LifecycleState::GameOver;
        }
    }

    /// Toggle between playing and paused. Does nothing once the game is
    /// over.
    pub fn toggle_pause(&mut self) {
        self.state = match self.state {
            LifecycleState::Playing => LifecycleState::Paused,
            LifecycleState::Paused => LifecycleState::Playing,
            LifecycleState::GameOver => LifecycleState::GameOver,
        };
    }

    pub fn pause(&mut self) {
        if self.state == LifecycleState::Playing {
            self.state = LifecycleState::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.state == LifecycleState::Paused {
            self.state = LifecycleState::Playing;
        }
    }

    /// Discard the session and start over with a fresh clock-derived seed.
    pub fn reset(&mut self) {
        *self = Self::new(0);
    }

    /// Settled cells with the current piece overlaid at its live position.
    /// Piece cells are added in so the zeros of its bounding box don't mask
    /// settled neighbors; cells outside the arena are skipped.
    pub fn snapshot_board(&self) -> BoardSnapshot {
        let mut cells: [Cell; ARENA_CELLS] = *self.arena.cells();
        let size = self.current.size();
        for py in 0..size {
            let ay = self.y + py as i32;
            if ay < 0 || ay >= ARENA_HEIGHT as i32 {
                continue;
            }
            for px in 0..size {
                let ax = self.x + px as i32;
                if ax < 0 || ax >= ARENA_WIDTH as i32 {
                    continue;
                }
                cells[ay as usize * ARENA_WIDTH + ax as usize] += self.current.cell(px, py);
            }
        }
        BoardSnapshot::new(cells)
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs() as u32)
        .unwrap_or(1)
}
