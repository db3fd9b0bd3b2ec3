use anyhow::Result;
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use four_in_row_ai::board::{Board, Cell};
use four_in_row_ai::{HEIGHT, WIDTH};

/// Draws the grid as coloured discs on a blue field, computer red, human yellow
pub fn draw(board: &Board) -> Result<()> {
    let mut stdout = stdout();

    let header: String = (1..=WIDTH).map(|x| x.to_string()).collect();
    stdout.queue(PrintStyledContent(style(header + "\n")))?;

    // rows are stored bottom-up, the terminal prints top-down
    for row in (0..HEIGHT).rev() {
        for column in 0..WIDTH {
            stdout.queue(PrintStyledContent(
                style("O")
                    .attribute(Attribute::Bold)
                    .on(Color::DarkBlue)
                    .with(match board.cell(row, column) {
                        Cell::Computer => Color::Red,
                        Cell::Player => Color::Yellow,
                        Cell::Empty => Color::DarkBlue,
                    }),
            ))?;
        }
        stdout.queue(PrintStyledContent(style("\n")))?;
    }
    stdout.flush()?;
    Ok(())
}
