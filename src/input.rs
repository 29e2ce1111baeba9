//! Player input: parsing a line into a column choice or a forfeit, and the
//! blocking line source the turn loop reads from.

use std::collections::VecDeque;
use std::io;

use crate::error::InputError;
use crate::game::Player;

/// Default token a player types to concede.
pub const FORFEIT_TOKEN: &str = "ff";

/// One parsed turn choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerInput {
    /// Drop into this column. Range is checked by the engine, not here.
    Column(usize),
    Forfeit,
}

/// Parse a line of input. The forfeit token matches case-insensitively and
/// surrounding whitespace is ignored. Anything that is neither a
/// non-negative integer nor the token is malformed.
pub fn parse_input(line: &str, forfeit_token: &str) -> Result<PlayerInput, InputError> {
    let trimmed = line.trim();
    if trimmed.eq_ignore_ascii_case(forfeit_token) {
        return Ok(PlayerInput::Forfeit);
    }
    trimmed
        .parse::<usize>()
        .map(PlayerInput::Column)
        .map_err(|_| InputError::Malformed(trimmed.to_string()))
}

/// A blocking, line-oriented source of player choices.
pub trait InputSource {
    /// Wait for the active player's next line. `Ok(None)` means the source is
    /// exhausted and no further input will arrive.
    fn next_line(&mut self, player: Player) -> io::Result<Option<String>>;
}

/// Input source fed from a fixed list of lines, for tests and scripted games.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
    prompts: Vec<Player>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedInput {
            lines: lines.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    /// Players that were asked for input, in order.
    pub fn prompts(&self) -> &[Player] {
        &self.prompts
    }
}

impl InputSource for ScriptedInput {
    fn next_line(&mut self, player: Player) -> io::Result<Option<String>> {
        self.prompts.push(player);
        Ok(self.lines.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_column() {
        assert_eq!(parse_input("3", FORFEIT_TOKEN), Ok(PlayerInput::Column(3)));
        assert_eq!(parse_input(" 0\n", FORFEIT_TOKEN), Ok(PlayerInput::Column(0)));
    }

    #[test]
    fn test_parse_out_of_range_column_is_still_a_column() {
        assert_eq!(parse_input("7", FORFEIT_TOKEN), Ok(PlayerInput::Column(7)));
    }

    #[test]
    fn test_parse_forfeit_case_insensitive() {
        assert_eq!(parse_input("ff", FORFEIT_TOKEN), Ok(PlayerInput::Forfeit));
        assert_eq!(parse_input("FF", FORFEIT_TOKEN), Ok(PlayerInput::Forfeit));
        assert_eq!(parse_input(" fF \n", FORFEIT_TOKEN), Ok(PlayerInput::Forfeit));
    }

    #[test]
    fn test_parse_custom_forfeit_token() {
        assert_eq!(parse_input("Quit", "quit"), Ok(PlayerInput::Forfeit));
        assert!(parse_input("ff", "quit").is_err());
    }

    #[test]
    fn test_parse_malformed() {
        for line in ["", "abc", "-1", "1.5", "f", "3 4"] {
            assert_eq!(
                parse_input(line, FORFEIT_TOKEN),
                Err(InputError::Malformed(line.trim().to_string())),
                "line {line:?} should be malformed"
            );
        }
    }

    #[test]
    fn test_scripted_input_yields_lines_then_none() {
        let mut input = ScriptedInput::new(["0", "ff"]);
        assert_eq!(input.next_line(Player::One).unwrap().as_deref(), Some("0"));
        assert_eq!(input.next_line(Player::Two).unwrap().as_deref(), Some("ff"));
        assert_eq!(input.next_line(Player::One).unwrap(), None);
        assert_eq!(input.prompts(), &[Player::One, Player::Two, Player::One]);
    }
}
