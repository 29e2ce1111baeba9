use crate::game::{Cell, MergedBoard, Placement, ROWS};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Colour of a disc on the merged board.
pub fn cell_color(cell: Cell) -> Color {
    match cell {
        Cell::Empty => Color::DarkGray,
        Cell::PlayerOne => Color::Red,
        Cell::PlayerTwo => Color::Yellow,
    }
}

/// One styled line per board row, top row first, framed by `left`/`right`.
/// Cells in `highlight` are drawn bold and reversed.
pub fn board_lines(
    board: &MergedBoard,
    highlight: &[Placement],
    left: &'static str,
    right: &'static str,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for (i, cells) in board.rows_top_down().enumerate() {
        let row = ROWS - 1 - i;
        let mut spans = vec![Span::raw(left)];
        for (column, &cell) in cells.iter().enumerate() {
            let symbol = match cell {
                Cell::Empty => " . ",
                Cell::PlayerOne | Cell::PlayerTwo => " \u{25cf} ",
            };
            let mut style = Style::default().fg(cell_color(cell));
            if highlight.contains(&Placement::new(column, row)) {
                style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
            }
            spans.push(Span::styled(symbol, style));
        }
        spans.push(Span::raw(right));
        lines.push(Line::from(spans));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameEngine, Player, COLS};

    #[test]
    fn test_board_lines_one_per_row() {
        let lines = board_lines(&GameEngine::new().get_merged_board(), &[], "|", "|");
        assert_eq!(lines.len(), ROWS);
        // frame + one span per column + frame
        assert_eq!(lines[0].spans.len(), COLS + 2);
    }

    #[test]
    fn test_board_lines_highlight_bottom_row() {
        let mut engine = GameEngine::new();
        engine.make_move(Player::One, 2).unwrap();
        let highlight = [Placement::new(2, 0)];
        let lines = board_lines(&engine.get_merged_board(), &highlight, "", "");

        let bottom = &lines[ROWS - 1].spans[1 + 2];
        assert_eq!(bottom.style.fg, Some(Color::Red));
        assert!(bottom.style.add_modifier.contains(Modifier::REVERSED));

        let top = &lines[0].spans[1 + 2];
        assert!(!top.style.add_modifier.contains(Modifier::REVERSED));
    }
}
