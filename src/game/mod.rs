//! Core Connect Four game logic: board representation, players, and the
//! game session that drives turns.

mod board;
mod player;
mod session;

pub use board::{Board, Cell, HEIGHT, LENGTH};
pub use player::{Player, Token};
pub use session::{GameOutcome, GameSession, PlayOutcome};
