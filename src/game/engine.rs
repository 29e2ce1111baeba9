use std::io;

use tracing::{debug, info};

use super::board::{lowest_free_row, MergedBoard, Placement, PlayerBoard, CONNECT, COLS, ROWS};
use super::Player;
use crate::error::{BoardError, InputError, MoveError, PlayError};
use crate::input::{parse_input, InputSource, PlayerInput, FORFEIT_TOKEN};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// Turn loop state. `MoveApplied` only exists between placing a disc and
/// evaluating it, so callers observe `AwaitingInput` or `GameOver`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    AwaitingInput(Player),
    MoveApplied { player: Player, placement: Placement },
    GameOver(GameOutcome),
}

/// Result of one accepted turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnEvent {
    Placed {
        player: Player,
        placement: Placement,
        next: Player,
    },
    Won {
        player: Player,
        placement: Placement,
    },
    Drawn {
        player: Player,
        placement: Placement,
    },
    Forfeited {
        player: Player,
        winner: Player,
    },
}

impl TurnEvent {
    /// Disc placed by this turn, if any.
    pub fn placement(&self) -> Option<Placement> {
        match *self {
            TurnEvent::Placed { placement, .. }
            | TurnEvent::Won { placement, .. }
            | TurnEvent::Drawn { placement, .. } => Some(placement),
            TurnEvent::Forfeited { .. } => None,
        }
    }
}

/// Why a line of input did not advance the game. Both kinds re-prompt the
/// same player.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error(transparent)]
    Move(#[from] MoveError),

    #[error(transparent)]
    Input(#[from] InputError),
}

/// Receives what the turn loop wants shown. All methods default to no-ops.
pub trait GameDisplay {
    /// Called once before the first prompt.
    fn show_start(&mut self, _board: &MergedBoard) -> io::Result<()> {
        Ok(())
    }

    /// Called after every accepted turn with the updated board.
    fn show_event(&mut self, _event: &TurnEvent, _board: &MergedBoard) -> io::Result<()> {
        Ok(())
    }

    /// Called when input is rejected and the same player is asked again.
    fn show_rejection(&mut self, _player: Player, _rejection: &Rejection) -> io::Result<()> {
        Ok(())
    }
}

/// Display that shows nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullDisplay;

impl GameDisplay for NullDisplay {}

/// Two-player Connect Four rules engine.
///
/// Each player owns a separate occupancy board. The boards never overlap:
/// discs are only placed through [`GameEngine::make_move`], which picks a row
/// free on both boards.
#[derive(Debug, Clone)]
pub struct GameEngine {
    player_one: PlayerBoard,
    player_two: PlayerBoard,
    turn: Player,
    state: TurnState,
    moves: Vec<(Player, Placement)>,
    forfeit_token: String,
}

impl GameEngine {
    /// Empty boards, player one to move.
    pub fn new() -> Self {
        GameEngine {
            player_one: PlayerBoard::new(),
            player_two: PlayerBoard::new(),
            turn: Player::One,
            state: TurnState::AwaitingInput(Player::One),
            moves: Vec::new(),
            forfeit_token: FORFEIT_TOKEN.to_string(),
        }
    }

    /// Build a position from raw boards.
    ///
    /// Rejects boards that overlap or leave a disc above an empty cell. A
    /// board that already holds four in a row ends the game immediately.
    pub fn from_boards(
        player_one: PlayerBoard,
        player_two: PlayerBoard,
        to_move: Player,
    ) -> Result<Self, BoardError> {
        if let Some(cell) = player_one.overlaps(&player_two) {
            return Err(BoardError::Overlap(cell));
        }
        for column in 0..COLS {
            let mut seen_gap = false;
            for row in 0..ROWS {
                let filled =
                    player_one.is_occupied(column, row) || player_two.is_occupied(column, row);
                if !filled {
                    seen_gap = true;
                } else if seen_gap {
                    return Err(BoardError::Floating(Placement::new(column, row)));
                }
            }
        }

        let mut engine = GameEngine::new();
        engine.player_one = player_one;
        engine.player_two = player_two;
        engine.turn = to_move;
        engine.state = TurnState::AwaitingInput(to_move);
        engine.settle();
        Ok(engine)
    }

    /// Replace the token that concedes the game (matched case-insensitively).
    pub fn with_forfeit_token(mut self, token: impl Into<String>) -> Self {
        self.forfeit_token = token.into();
        self
    }

    /// Get a player's board
    pub fn board(&self, player: Player) -> &PlayerBoard {
        match player {
            Player::One => &self.player_one,
            Player::Two => &self.player_two,
        }
    }

    fn board_mut(&mut self, player: Player) -> &mut PlayerBoard {
        match player {
            Player::One => &mut self.player_one,
            Player::Two => &mut self.player_two,
        }
    }

    /// Player whose turn it is (or was, once the game is over).
    pub fn current_player(&self) -> Player {
        self.turn
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.state {
            TurnState::GameOver(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn winner(&self) -> Option<Player> {
        match self.outcome() {
            Some(GameOutcome::Winner(player)) => Some(player),
            _ => None,
        }
    }

    /// Check if game is over
    pub fn is_over(&self) -> bool {
        self.outcome().is_some()
    }

    /// Placements applied so far, oldest first.
    pub fn moves(&self) -> &[(Player, Placement)] {
        &self.moves
    }

    /// Columns with at least one free row. Empty once the game is over.
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_over() {
            return Vec::new();
        }
        (0..COLS)
            .filter(|&column| {
                lowest_free_row(&self.player_one, &self.player_two, column).is_some()
            })
            .collect()
    }

    fn is_board_full(&self) -> bool {
        self.player_one.count() + self.player_two.count() == ROWS * COLS
    }

    /// Drop a disc for `player` into `column`.
    ///
    /// The disc lands on the lowest row free on both boards. Nothing is
    /// modified on error.
    pub fn make_move(&mut self, player: Player, column: usize) -> Result<Placement, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if column >= COLS {
            return Err(MoveError::InvalidColumn(column));
        }
        let row = lowest_free_row(&self.player_one, &self.player_two, column)
            .ok_or(MoveError::ColumnFull(column))?;

        self.board_mut(player).set(column, row);
        let placement = Placement::new(column, row);
        self.moves.push((player, placement));
        debug!(player = player.number(), column, row, "disc placed");
        Ok(placement)
    }

    /// Whether `board` holds four or more aligned discs in any direction.
    pub fn check_win_condition(board: &PlayerBoard) -> bool {
        board.check_win()
    }

    /// The winner's first run of four, for highlighting.
    pub fn winning_line(&self) -> Option<[Placement; CONNECT]> {
        self.winner().and_then(|player| self.board(player).winning_line())
    }

    /// Both boards combined: 1 for player one, 2 for player two, 0 empty.
    pub fn get_merged_board(&self) -> MergedBoard {
        MergedBoard::merge(&self.player_one, &self.player_two)
    }

    /// End the game if the boards already hold a win or fill the grid.
    ///
    /// Discs placed straight through [`GameEngine::make_move`] bypass turn
    /// evaluation, so the turn loop settles the position before asking for
    /// input. A finished game is left as it is.
    fn settle(&mut self) {
        if !matches!(self.state, TurnState::AwaitingInput(_)) {
            return;
        }
        let outcome = if Self::check_win_condition(&self.player_one) {
            GameOutcome::Winner(Player::One)
        } else if Self::check_win_condition(&self.player_two) {
            GameOutcome::Winner(Player::Two)
        } else if self.is_board_full() {
            GameOutcome::Draw
        } else {
            return;
        };
        info!(?outcome, moves = self.moves.len(), "position already decided");
        self.state = TurnState::GameOver(outcome);
    }

    /// Advance the state machine by one input for the active player.
    ///
    /// A rejected column leaves the turn with the same player.
    pub fn play_turn(&mut self, input: PlayerInput) -> Result<TurnEvent, MoveError> {
        self.settle();
        let player = match self.state {
            TurnState::AwaitingInput(player) => player,
            _ => return Err(MoveError::GameOver),
        };

        match input {
            PlayerInput::Forfeit => {
                let winner = player.other();
                self.state = TurnState::GameOver(GameOutcome::Winner(winner));
                info!(player = player.number(), winner = winner.number(), "player forfeited");
                Ok(TurnEvent::Forfeited { player, winner })
            }
            PlayerInput::Column(column) => {
                let placement = self.make_move(player, column)?;
                self.state = TurnState::MoveApplied { player, placement };
                Ok(self.resolve_move(player, placement))
            }
        }
    }

    /// Evaluate a freshly applied move against the mover's board.
    fn resolve_move(&mut self, player: Player, placement: Placement) -> TurnEvent {
        if Self::check_win_condition(self.board(player)) {
            self.state = TurnState::GameOver(GameOutcome::Winner(player));
            info!(winner = player.number(), moves = self.moves.len(), "game won");
            TurnEvent::Won { player, placement }
        } else if self.is_board_full() {
            self.state = TurnState::GameOver(GameOutcome::Draw);
            info!(moves = self.moves.len(), "board full, game drawn");
            TurnEvent::Drawn { player, placement }
        } else {
            let next = player.other();
            self.turn = next;
            self.state = TurnState::AwaitingInput(next);
            TurnEvent::Placed {
                player,
                placement,
                next,
            }
        }
    }

    /// Parse a line with this engine's forfeit token and play it.
    pub fn submit_line(&mut self, line: &str) -> Result<TurnEvent, Rejection> {
        let input = parse_input(line, &self.forfeit_token)?;
        Ok(self.play_turn(input)?)
    }

    /// Run the turn loop until the game ends.
    ///
    /// Malformed lines and rejected columns re-prompt the same player. Fails
    /// only when the input source errors or runs dry mid-game.
    pub fn start_game<I, D>(&mut self, input: &mut I, display: &mut D) -> Result<GameOutcome, PlayError>
    where
        I: InputSource + ?Sized,
        D: GameDisplay + ?Sized,
    {
        self.settle();
        display.show_start(&self.get_merged_board())?;

        loop {
            if let Some(outcome) = self.outcome() {
                return Ok(outcome);
            }

            let player = self.turn;
            let line = input.next_line(player)?.ok_or(PlayError::InputClosed)?;

            match self.submit_line(&line) {
                Ok(event) => display.show_event(&event, &self.get_merged_board())?,
                Err(rejection) => {
                    debug!(player = player.number(), input = line.trim(), "{rejection}");
                    display.show_rejection(player, &rejection)?;
                }
            }
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
