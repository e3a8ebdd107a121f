use std::path::{Path, PathBuf};

use super::{ask, prompt, Console};
use crate::config::AppConfig;
use crate::error::{SaveError, SessionError};
use crate::game::{GameSession, PlayOutcome};
use crate::save::SaveStore;

/// Top-level loop: choose a new or saved game, play it, offer another.
///
/// `resume` skips the first question and loads that save file instead. If it
/// cannot be loaded the problem is reported and the normal menu follows.
pub fn run(
    console: &mut dyn Console,
    config: &AppConfig,
    mut resume: Option<PathBuf>,
) -> Result<(), SessionError> {
    let store = SaveStore::new(&config.save.directory);

    loop {
        let resumed = match resume.take() {
            Some(path) => match GameSession::load(&store, &path, config.players.seats()) {
                Ok(session) => Some(session),
                Err(err) => {
                    report_load_error(console, &path, &err)?;
                    None
                }
            },
            None => None,
        };
        let mut session = match resumed {
            Some(session) => session,
            None => choose_game(console, &store, config)?,
        };

        if let PlayOutcome::SavedAndQuit(_) = session.play(console, config)? {
            return Ok(());
        }

        console.write_line("")?;
        let again = prompt(console, "Play again?", &["y", "n", "yes", "no"])?;
        if again.starts_with('n') {
            return Ok(());
        }
    }
}

fn choose_game(
    console: &mut dyn Console,
    store: &SaveStore,
    config: &AppConfig,
) -> Result<GameSession, SessionError> {
    console.write_line("New game or load save file?")?;
    let choice = prompt(console, "Enter 'new' or 'load': ", &["new", "load"])?;
    if choice == "new" {
        return Ok(GameSession::with_players(config.players.seats()));
    }

    loop {
        let name = ask(console, "Please enter the file name: ")?;
        let path = Path::new(&name);
        match GameSession::load(store, path, config.players.seats()) {
            Ok(session) => return Ok(session),
            Err(err) => report_load_error(console, path, &err)?,
        }
    }
}

fn report_load_error(
    console: &mut dyn Console,
    path: &Path,
    err: &SaveError,
) -> Result<(), SessionError> {
    tracing::warn!(path = %path.display(), error = %err, "could not load save");
    let message = match err {
        SaveError::InvalidFileName(_) => "Sorry, that file name is not valid.".to_string(),
        other => format!("Sorry, that save could not be loaded: {other}"),
    };
    console.write_line(&message)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Board, Player, Token};
    use crate::save::Snapshot;
    use crate::ui::IoConsole;

    fn scripted(input: &str) -> IoConsole<&[u8], Vec<u8>> {
        IoConsole::new(input.as_bytes(), Vec::new())
    }

    fn output(console: &IoConsole<&[u8], Vec<u8>>) -> String {
        String::from_utf8(console.writer().clone()).unwrap()
    }

    fn config_in(dir: &Path) -> AppConfig {
        let mut config = AppConfig::default();
        config.save.directory = dir.to_path_buf();
        config
    }

    /// Player 1 stacks four in column 1 while Player 2 plays column 2.
    const QUICK_WIN: &str = "1\n2\n1\n2\n1\n2\n1\n";

    #[test]
    fn test_new_game_then_quit() {
        let dir = tempfile::tempdir().unwrap();
        let input = format!("new\n{QUICK_WIN}n\n");
        let mut console = scripted(&input);

        run(&mut console, &config_in(dir.path()), None).unwrap();

        let out = output(&console);
        assert!(out.starts_with("New game or load save file?\nEnter 'new' or 'load': \n"));
        assert!(out.contains("Player 1 is the winner!"));
        assert!(out.trim_end().ends_with("Play again?"));
    }

    #[test]
    fn test_play_again_starts_over() {
        let dir = tempfile::tempdir().unwrap();
        let input = format!("new\n{QUICK_WIN}yes\nnew\n{QUICK_WIN}no\n");
        let mut console = scripted(&input);

        run(&mut console, &config_in(dir.path()), None).unwrap();

        let out = output(&console);
        assert_eq!(out.matches("Player 1 is the winner!").count(), 2);
        assert_eq!(out.matches("New game or load save file?").count(), 2);
    }

    #[test]
    fn test_load_retries_after_bad_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());

        let mut board = Board::new();
        board.place_token(Token::Circle, 0).unwrap();
        SaveStore::new(dir.path())
            .save(Path::new("saved.json"), &Snapshot::new(board, "Player 2"))
            .unwrap();

        // Player 2 resumes and plays column 2, then input runs out.
        let mut console = scripted("load\nmissing.json\nsaved.json\n2\n");
        let err = run(&mut console, &config, None).unwrap_err();
        assert!(matches!(err, SessionError::InputClosed));

        let out = output(&console);
        assert_eq!(out.matches("Sorry, that file name is not valid.").count(), 1);
        assert_eq!(out.matches("Please enter the file name: ").count(), 2);
        assert!(out.contains("Player 2 (@), choose a column"));
        assert!(out.contains("[O][@][ ][ ][ ][ ][ ]"));
    }

    #[test]
    fn test_load_reports_corrupt_save() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("bad.json"), "{}").unwrap();

        let mut console = scripted("load\nbad.json\n");
        let err = run(&mut console, &config_in(dir.path()), None).unwrap_err();
        assert!(matches!(err, SessionError::InputClosed));
        assert!(output(&console).contains("Sorry, that save could not be loaded"));
    }

    #[test]
    fn test_resume_flag_skips_menu() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        SaveStore::new(dir.path())
            .save(Path::new("resume.json"), &Snapshot::new(Board::new(), "Player 2"))
            .unwrap();

        // Player 2 moves first in the resumed game and saves straight away.
        let mut console = scripted("3\nsave\nnext.json\n");
        run(&mut console, &config, Some(PathBuf::from("resume.json"))).unwrap();

        let out = output(&console);
        assert!(!out.contains("New game or load save file?"));

        let store = SaveStore::new(dir.path());
        let resumed =
            GameSession::load(&store, Path::new("next.json"), Player::canonical()).unwrap();
        assert_eq!(resumed.current_player().name, "Player 1");
        assert_eq!(resumed.board().get(0, 2), crate::game::Cell::At);
    }

    #[test]
    fn test_resume_flag_with_missing_file_falls_back_to_menu() {
        let dir = tempfile::tempdir().unwrap();
        let input = format!("new\n{QUICK_WIN}n\n");
        let mut console = scripted(&input);

        run(
            &mut console,
            &config_in(dir.path()),
            Some(PathBuf::from("gone.json")),
        )
        .unwrap();

        let out = output(&console);
        assert!(out.starts_with(
            "Sorry, that file name is not valid.\nNew game or load save file?"
        ));
    }
}
