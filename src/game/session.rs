use std::io::Write;
use std::path::{Path, PathBuf};

use super::{Board, Player, LENGTH};
use crate::config::AppConfig;
use crate::error::{BoardError, MoveError, SaveError, SessionError};
use crate::save::{SaveStore, Snapshot};
use crate::ui::{ask, board_view, prompt, Console};

/// Answer at the column prompt that saves the game and leaves.
const SAVE_COMMAND: &str = "save";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

impl GameOutcome {
    pub fn announcement(&self) -> String {
        match self {
            GameOutcome::Winner(player) => format!("{} is the winner!", player.name),
            GameOutcome::Draw => "The game is a draw!".to_string(),
        }
    }
}

/// How an interactive [`GameSession::play`] ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayOutcome {
    Finished(GameOutcome),
    SavedAndQuit(PathBuf),
}

/// One game between two seated players.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    players: [Player; 2],
    /// Index into `players` of the seat that moves next.
    turn: usize,
    outcome: Option<GameOutcome>,
}

impl GameSession {
    /// Fresh game with the canonical players, "Player 1" to move.
    pub fn new() -> Self {
        Self::with_players(Player::canonical())
    }

    /// Fresh game with the given seats; the first seat moves first.
    pub fn with_players(players: [Player; 2]) -> Self {
        tracing::info!(first = %players[0].name, second = %players[1].name, "new game");
        GameSession {
            board: Board::new(),
            players,
            turn: 0,
            outcome: None,
        }
    }

    /// Resume a saved game. The seat named in the snapshot moves next.
    pub fn from_snapshot(snapshot: Snapshot, players: [Player; 2]) -> Result<Self, SaveError> {
        let turn = players
            .iter()
            .position(|p| p.name == snapshot.current_player)
            .ok_or_else(|| SaveError::UnknownPlayer(snapshot.current_player.clone()))?;

        let outcome = snapshot.board.is_full().then_some(GameOutcome::Draw);
        tracing::info!(current_player = %snapshot.current_player, "resumed game");
        Ok(GameSession {
            board: snapshot.board,
            players,
            turn,
            outcome,
        })
    }

    /// Load a save file through `store` and resume it.
    pub fn load(store: &SaveStore, name: &Path, players: [Player; 2]) -> Result<Self, SaveError> {
        let snapshot = store.load(name)?;
        Self::from_snapshot(snapshot, players)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// The player whose move is next, or the winner once the game is won.
    pub fn current_player(&self) -> &Player {
        &self.players[self.turn]
    }

    pub fn outcome(&self) -> Option<&GameOutcome> {
        self.outcome.as_ref()
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Drop the current player's token into `column` (0-based).
    ///
    /// Returns the outcome if the move ended the game. The turn passes to the
    /// other seat only after a move that leaves the game open; a rejected
    /// move changes nothing.
    pub fn apply_move(&mut self, column: usize) -> Result<Option<GameOutcome>, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let player = self.current_player().clone();
        let row = self.board.place_token(player.token, column)?;
        tracing::debug!(player = %player.name, row, column, "placed token");

        if self.board.four_in_a_row(row, column, player.token) {
            self.outcome = Some(GameOutcome::Winner(player));
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
        } else {
            self.turn = (self.turn + 1) % self.players.len();
        }

        if let Some(outcome) = &self.outcome {
            tracing::info!(result = %outcome.announcement(), "game over");
        }
        Ok(self.outcome.clone())
    }

    /// Board plus the name of the player who moves next.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.board, self.current_player().name.clone())
    }

    pub fn save(&self, writer: impl Write) -> Result<(), SaveError> {
        self.snapshot().write_to(writer)
    }

    /// Run the turn loop until someone wins, the board fills, or a player
    /// saves and quits.
    pub fn play(
        &mut self,
        console: &mut dyn Console,
        config: &AppConfig,
    ) -> Result<PlayOutcome, SessionError> {
        let store = SaveStore::new(&config.save.directory);
        let color = config.display.color;

        let columns: Vec<String> = (1..=LENGTH).map(|c| c.to_string()).collect();
        let mut valid: Vec<&str> = columns.iter().map(String::as_str).collect();
        valid.push(SAVE_COMMAND);

        loop {
            if let Some(outcome) = self.outcome.clone() {
                board_view::show(console, &self.board, color)?;
                console.write_line("")?;
                console.write_line(&outcome.announcement())?;
                return Ok(PlayOutcome::Finished(outcome));
            }

            board_view::show(console, &self.board, color)?;
            let player = self.current_player();
            let message = format!(
                "{} ({}), choose a column 1-{LENGTH}, or '{SAVE_COMMAND}' to save and quit: ",
                player.name,
                player.token.symbol()
            );
            let answer = prompt(console, &message, &valid)?;

            if answer == SAVE_COMMAND {
                if let Some(path) = self.save_and_quit(console, &store)? {
                    return Ok(PlayOutcome::SavedAndQuit(path));
                }
                continue;
            }

            let Ok(choice) = answer.parse::<usize>() else {
                continue;
            };
            match self.apply_move(choice - 1) {
                Ok(_) => {}
                Err(MoveError::Board(BoardError::ColumnFull(_))) => {
                    tracing::warn!(column = choice, "column full");
                    console.write_line(&format!(
                        "Column {choice} is full. Please choose another column."
                    ))?;
                }
                Err(err) => {
                    tracing::warn!(column = choice, error = %err, "move rejected");
                    console.write_line(&format!("That move is not allowed: {err}."))?;
                }
            }
        }
    }

    /// Ask for a file name and write the snapshot there. `None` if nothing was
    /// saved, in which case play carries on.
    fn save_and_quit(
        &self,
        console: &mut dyn Console,
        store: &SaveStore,
    ) -> Result<Option<PathBuf>, SessionError> {
        let name = ask(console, "Please enter a file name to save to: ")?;
        if name.is_empty() {
            console.write_line("Sorry, that file name is not valid.")?;
            return Ok(None);
        }

        match store.save(Path::new(&name), &self.snapshot()) {
            Ok(path) => {
                console.write_line(&format!(
                    "Saving to file \"{}\" and quitting... goodbye.",
                    path.display()
                ))?;
                Ok(Some(path))
            }
            Err(err) => {
                tracing::warn!(file = %name, error = %err, "save failed");
                console.write_line(&format!("Could not save the game: {err}"))?;
                Ok(None)
            }
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
