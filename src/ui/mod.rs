//! Text interface: the injected console, board rendering, and the top-level
//! new/load/play-again menu.

pub mod board_view;
mod console;
pub mod menu;

pub use console::{ask, prompt, Console, IoConsole};
