use std::io::{self, Write};

use crossterm::{queue, style::Print};

use crate::{error::Result, proc::Board};

const LIVE: &str = "[]";
const DEAD: &str = "  ";

/// Writes the board row by row, two characters per cell.
pub fn write_board<W: Write>(board: &Board, out: &mut W) -> Result<()> {
    for row in board.rows() {
        for c in row {
            queue!(out, Print(if *c { LIVE } else { DEAD }))?;
        }
        queue!(out, Print("\n"))?;
    }
    out.flush()?;
    Ok(())
}

pub fn print_board(board: &Board) -> Result<()> {
    write_board(board, &mut io::stdout().lock())
}

/// Board framed by its generation number and a rule line on each side.
pub fn write_generation<W: Write>(board: &Board, out: &mut W) -> Result<()> {
    let rule = "--".repeat(board.width());
    queue!(
        out,
        Print(format!("Generation #{}\n", board.generation())),
        Print(&rule),
        Print("\n")
    )?;
    write_board(board, out)?;
    queue!(out, Print(&rule), Print("\n"))?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(board: &Board) -> String {
        let mut buf = Vec::new();
        write_board(board, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn two_chars_per_cell() {
        let b: Board = "#.\n.#".parse().unwrap();
        assert_eq!(render(&b), "[]  \n  []\n");
    }

    #[test]
    fn prints_to_stdout() {
        let b: Board = ".#.\n.#.\n.#.".parse().unwrap();
        print_board(&b).unwrap();
    }

    #[test]
    fn empty_board_renders_nothing() {
        assert_eq!(render(&Board::new(0, 0)), "");
    }

    #[test]
    fn generation_frame() {
        let mut b: Board = "##\n##".parse().unwrap();
        b.tick();
        let mut buf = Vec::new();
        write_generation(&b, &mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Generation #1\n----\n[][]\n[][]\n----\n"
        );
    }
}
