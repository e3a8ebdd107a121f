use crossterm::style::Stylize;

use super::console::Console;
use crate::game::{Board, Cell, HEIGHT, LENGTH};

/// Render the board as text, topmost row first, each cell as `[c]`,
/// followed by a line of 1-based column numbers.
pub fn render_lines(board: &Board, color: bool) -> Vec<String> {
    let mut lines = Vec::with_capacity(HEIGHT + 1);

    for row in (0..HEIGHT).rev() {
        let line: String = (0..LENGTH)
            .map(|col| format!("[{}]", cell_text(board.get(row, col), color)))
            .collect();
        lines.push(line);
    }

    let numbers: String = (1..=LENGTH).map(|col| format!(" {col} ")).collect();
    lines.push(numbers);
    lines
}

/// Write the rendered board to the console.
pub fn show(console: &mut dyn Console, board: &Board, color: bool) -> std::io::Result<()> {
    for line in render_lines(board, color) {
        console.write_line(&line)?;
    }
    Ok(())
}

fn cell_text(cell: Cell, color: bool) -> String {
    let symbol = cell.symbol().to_string();
    if !color {
        return symbol;
    }
    match cell {
        Cell::Empty => symbol,
        Cell::Circle => symbol.red().bold().to_string(),
        Cell::At => symbol.yellow().bold().to_string(),
    }
}
