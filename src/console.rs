//! Line-oriented console front-end: prompts on a writer, reads choices from a
//! reader, and prints the merged board after every turn.

use std::io::{self, BufRead, Write};

use crate::config::{AppConfig, DisplayConfig};
use crate::game::{Cell, GameDisplay, GameOutcome, MergedBoard, Player, Rejection, TurnEvent, COLS};
use crate::input::InputSource;

/// Render the merged board as text, top row first.
pub fn render_text(board: &MergedBoard, display: &DisplayConfig) -> String {
    let mut out = String::new();

    if display.show_column_numbers {
        for column in 0..COLS {
            out.push_str(&format!(" {column}"));
        }
        out.push('\n');
    }

    for row in board.rows_top_down() {
        let symbols: Vec<&str> = row
            .iter()
            .map(|cell| match cell {
                Cell::Empty => display.empty_symbol.as_str(),
                Cell::PlayerOne => display.player_one_symbol.as_str(),
                Cell::PlayerTwo => display.player_two_symbol.as_str(),
            })
            .collect();
        out.push('|');
        out.push_str(&symbols.join(" "));
        out.push_str("|\n");
    }

    out.push('+');
    out.push_str(&"-".repeat(COLS * 2 - 1));
    out.push_str("+\n");
    out
}

fn names(config: &AppConfig) -> [String; 2] {
    [
        config.player_name(Player::One).to_string(),
        config.player_name(Player::Two).to_string(),
    ]
}

fn name_of(names: &[String; 2], player: Player) -> &str {
    match player {
        Player::One => &names[0],
        Player::Two => &names[1],
    }
}

/// Prompts on `writer` and reads one line per turn from `reader`.
pub struct LineInput<R, W> {
    reader: R,
    writer: W,
    names: [String; 2],
    forfeit_token: String,
}

impl<R: BufRead, W: Write> LineInput<R, W> {
    pub fn new(reader: R, writer: W, config: &AppConfig) -> Self {
        LineInput {
            reader,
            writer,
            names: names(config),
            forfeit_token: config.game.forfeit_token.clone(),
        }
    }
}

impl<R: BufRead, W: Write> InputSource for LineInput<R, W> {
    fn next_line(&mut self, player: Player) -> io::Result<Option<String>> {
        write!(
            self.writer,
            "{}, choose a column (0-{}) or '{}' to forfeit: ",
            name_of(&self.names, player),
            COLS - 1,
            self.forfeit_token
        )?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

/// Prints the board and status lines for each turn.
pub struct TextDisplay<W> {
    writer: W,
    display: DisplayConfig,
    names: [String; 2],
}

impl<W: Write> TextDisplay<W> {
    pub fn new(writer: W, config: &AppConfig) -> Self {
        TextDisplay {
            writer,
            display: config.display.clone(),
            names: names(config),
        }
    }

    fn name(&self, player: Player) -> &str {
        name_of(&self.names, player)
    }

    /// Closing line for a finished game.
    pub fn outcome_message(&self, outcome: GameOutcome) -> String {
        match outcome {
            GameOutcome::Winner(player) => format!("{} wins!", self.name(player)),
            GameOutcome::Draw => "It's a draw!".to_string(),
        }
    }
}

impl<W: Write> GameDisplay for TextDisplay<W> {
    fn show_start(&mut self, board: &MergedBoard) -> io::Result<()> {
        write!(self.writer, "{}", render_text(board, &self.display))
    }

    fn show_event(&mut self, event: &TurnEvent, board: &MergedBoard) -> io::Result<()> {
        if event.placement().is_some() {
            write!(self.writer, "{}", render_text(board, &self.display))?;
        }
        let message = match *event {
            TurnEvent::Placed { .. } => return Ok(()),
            TurnEvent::Won { player, .. } => {
                self.outcome_message(GameOutcome::Winner(player))
            }
            TurnEvent::Drawn { .. } => self.outcome_message(GameOutcome::Draw),
            TurnEvent::Forfeited { player, winner } => format!(
                "{} forfeits. {}",
                self.name(player),
                self.outcome_message(GameOutcome::Winner(winner))
            ),
        };
        writeln!(self.writer, "{message}")
    }

    fn show_rejection(&mut self, _player: Player, rejection: &Rejection) -> io::Result<()> {
        writeln!(self.writer, "Invalid move: {rejection}. Try again.")
    }
}
