use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use crate::error::SaveError;
use crate::game::{Board, Cell};

/// A saved game: the board plus the name of the player who moves next.
///
/// Stored as pretty-printed JSON so it can be edited by hand:
///
/// ```json
/// {
///   "board": [["O", "@", " ", " ", " ", " ", " "], ...],
///   "current_player": "Player 1"
/// }
/// ```
///
/// Rows are listed bottom-to-top.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub board: Board,
    pub current_player: String,
}

/// On-disk shape before the board dimensions are checked.
#[derive(Deserialize)]
struct RawSnapshot {
    board: Vec<Vec<Cell>>,
    current_player: String,
}

impl Snapshot {
    pub fn new(board: Board, current_player: impl Into<String>) -> Self {
        Snapshot {
            board,
            current_player: current_player.into(),
        }
    }

    pub fn to_json(&self) -> Result<String, SaveError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a snapshot. A board of the wrong shape is reported as
    /// [`SaveError::Board`] rather than a parse failure.
    pub fn from_json(json: &str) -> Result<Self, SaveError> {
        let raw: RawSnapshot = serde_json::from_str(json)?;
        Ok(Snapshot {
            board: Board::from_rows(raw.board)?,
            current_player: raw.current_player,
        })
    }

    pub fn write_to(&self, mut writer: impl Write) -> Result<(), SaveError> {
        writer.write_all(self.to_json()?.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    pub fn read_from(mut reader: impl Read) -> Result<Self, SaveError> {
        let mut json = String::new();
        reader.read_to_string(&mut json)?;
        Self::from_json(&json)
    }
}
