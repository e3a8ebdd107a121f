//! # Connect Four
//!
//! Two-player Connect Four played through a line-oriented text interface,
//! with games that can be saved to a JSON file and resumed later.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, players, game session
//! - [`save`] — Snapshot format and save file storage
//! - [`ui`] — Console abstraction, board rendering, top-level menu
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod save;
pub mod ui;
