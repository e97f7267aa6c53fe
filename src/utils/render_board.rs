//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view for debugging, tests and the console
//! front end. Output is for people only and is never parsed back.

use crate::game_state::checkers_rules::BOARD_SIZE;
use crate::game_state::checkers_types::*;

/// Render the board to a Unicode string for terminal output.
///
/// Rows are labelled `0..8` top to bottom and columns `0..8` left to right,
/// matching the `(row, col)` coordinates used by moves.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  0 1 2 3 4 5 6 7\n");

    for row in 0..BOARD_SIZE {
        out.push(char::from(b'0' + row as u8));
        out.push(' ');

        for col in 0..BOARD_SIZE {
            out.push(square_glyph(board, row, col));
            if col < BOARD_SIZE - 1 {
                out.push(' ');
            }
        }
        out.push('\n');
    }

    out.push_str(&format!(
        "Light: {} ({} kings)  Dark: {} ({} kings)",
        board.piece_count(Color::Light),
        board.king_count(Color::Light),
        board.piece_count(Color::Dark),
        board.king_count(Color::Dark),
    ));

    out
}

fn square_glyph(board: &Board, row: i8, col: i8) -> char {
    match board.piece_at(row, col) {
        Some(piece) => piece_to_unicode(piece.color, piece.rank),
        None if is_dark_square(row, col) => '·',
        None => ' ',
    }
}

fn piece_to_unicode(color: Color, rank: Rank) -> char {
    match (color, rank) {
        (Color::Light, Rank::Regular) => '⛀',
        (Color::Light, Rank::King) => '⛁',
        (Color::Dark, Rank::Regular) => '⛂',
        (Color::Dark, Rank::King) => '⛃',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glyph_count(text: &str, glyph: char) -> usize {
        text.chars().filter(|c| *c == glyph).count()
    }

    #[test]
    fn starting_position_layout() {
        let text = render_board(&Board::new());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "  0 1 2 3 4 5 6 7");
        assert_eq!(lines[1], "0   ⛂   ⛂   ⛂   ⛂");
        assert_eq!(lines[4], "3 ·   ·   ·   ·  ");
        assert_eq!(lines[9], "Light: 12 (0 kings)  Dark: 12 (0 kings)");
        assert_eq!(glyph_count(&text, '⛀'), 12);
        assert_eq!(glyph_count(&text, '⛂'), 12);
        assert_eq!(glyph_count(&text, '·'), 8);
    }

    #[test]
    fn kings_have_their_own_glyphs() {
        let mut board = Board::empty();
        board.place(0, 1, Piece::king(Color::Light, 0, 1)).expect("on board");
        board.place(7, 6, Piece::king(Color::Dark, 7, 6)).expect("on board");

        let text = board.to_string();
        assert_eq!(glyph_count(&text, '⛁'), 1);
        assert_eq!(glyph_count(&text, '⛃'), 1);
        assert!(text.ends_with("Light: 1 (1 kings)  Dark: 1 (1 kings)"));
    }
}
