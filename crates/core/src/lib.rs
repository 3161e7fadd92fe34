//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains all the game rules and state for the falling-block
//! engine. It has **zero dependencies** on UI, audio, or I/O, making it:
//!
//! - **Deterministic**: the same seed produces an identical session
//! - **Testable**: every rule is exercised without a front end
//! - **Portable**: runs under any driver (windowed, terminal, headless)
//! - **Fast**: fixed-capacity storage, zero allocation on the hot paths
//!
//! # Module structure
//!
//! - [`arena`]: the 10x20 settled-block grid with line clearing
//! - [`collision`]: piece-versus-wall and piece-versus-stack checks
//! - [`game`]: the state machine owning a whole session
//! - [`piece`]: tetromino matrices and rotation
//! - [`rng`]: seeded pseudo-random piece selection
//! - [`scoring`]: points, leveling and gravity timing
//! - [`snapshot`]: read-only combined board view for renderers
//!
//! # Example
//!
//! ```
//! use blockfall_core::Game;
//! use blockfall_types::Direction;
//!
//! let mut game = Game::new(12345);
//!
//! game.move_piece(Direction::Right);
//! game.rotate(Direction::Left);
//! let cleared = game.drop();
//!
//! assert_eq!(cleared, 0); // plenty of space below at spawn
//! ```
//!
//! The driving loop decides *when* to call [`Game::drop`] (using
//! [`Game::drop_interval`]) and applies pending input before the gravity
//! step of the same tick, since a move or rotation can change whether that
//! step collides.

pub mod arena;
pub mod collision;
pub mod game;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use arena::Arena;
pub use game::Game;
pub use piece::Piece;
pub use rng::SimpleRng;
pub use snapshot::BoardSnapshot;
