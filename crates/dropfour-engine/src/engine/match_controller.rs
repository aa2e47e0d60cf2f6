use std::convert::Infallible;

use serde::{Deserialize, Serialize};

use crate::{Avatar, Board, InputClosed};

use super::player::{Player, PlayerId};

/// The I/O collaborator of a [`MatchController`].
///
/// Requests block until the human answers. They fail only with
/// [`InputClosed`] once no more input can arrive, which ends the session.
pub trait Console {
    /// Asks for the display name of a player.
    ///
    /// Implementations re-ask until a non-empty name is given.
    fn request_name(&mut self, id: PlayerId, avatar: Avatar) -> Result<String, InputClosed>;

    /// Asks `player` for the column of their next move.
    ///
    /// Implementations re-prompt until the answer is a column accepted by
    /// [`Board::is_valid_move`].
    fn request_column(&mut self, board: &Board, player: &Player) -> Result<usize, InputClosed>;

    /// Shows the board after a move.
    fn show_board(&mut self, board: &Board);

    /// Shows the result of a finished game, the final board and the updated
    /// scoreboard.
    fn show_outcome(&mut self, outcome: Outcome, board: &Board, players: &[Player; 2]);

    /// Waits until the players want to start the next game.
    fn request_continue(&mut self) -> Result<(), InputClosed>;
}

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::IsVariant)]
pub enum Outcome {
    Win(PlayerId),
    Draw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum GameState {
    /// Fresh board, no move made yet.
    Idle,
    InProgress,
    /// Someone connected four or the board is full.
    Over,
}

/// Drives repeated games between two players on a single board.
///
/// The controller exclusively owns both players and the board. Player one
/// moves first in every game; win/loss counters carry over from game to game.
#[derive(Debug, Clone)]
pub struct MatchController {
    board: Board,
    players: [Player; 2],
    current: PlayerId,
    state: GameState,
}

impl MatchController {
    /// Creates a controller for two existing players.
    ///
    /// # Panics
    ///
    /// Panics if the players are not seated as `[PlayerId::One, PlayerId::Two]`
    /// or share an avatar.
    #[must_use]
    pub fn new(mut board: Board, players: [Player; 2]) -> Self {
        assert!(
            players[0].id().is_one() && players[1].id().is_two(),
            "players must be seated in order"
        );
        assert_ne!(
            players[0].avatar(),
            players[1].avatar(),
            "players must have distinct avatars"
        );
        board.reset();
        Self {
            board,
            players,
            current: PlayerId::One,
            state: GameState::Idle,
        }
    }

    /// Creates both players, asking the console for their names.
    pub fn start<C>(
        board: Board,
        avatars: [Avatar; 2],
        console: &mut C,
    ) -> Result<Self, InputClosed>
    where
        C: Console + ?Sized,
    {
        let [first, second] = avatars;
        let one = Player::new(
            PlayerId::One,
            console.request_name(PlayerId::One, first)?,
            first,
        );
        let two = Player::new(
            PlayerId::Two,
            console.request_name(PlayerId::Two, second)?,
            second,
        );
        Ok(Self::new(board, [one, two]))
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    #[must_use]
    pub fn current_player(&self) -> &Player {
        self.player(self.current)
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub fn avatars(&self) -> [Avatar; 2] {
        self.players.each_ref().map(Player::avatar)
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.board.is_game_over(&self.avatars())
    }

    pub fn next_player(&mut self) {
        self.current = self.current.opponent();
    }

    /// Plays one move for the current player.
    ///
    /// Columns the board rejects are requested again.
    pub fn take_turn<C>(&mut self, console: &mut C) -> Result<(), InputClosed>
    where
        C: Console + ?Sized,
    {
        let player = &self.players[self.current.index()];
        let column = loop {
            let column = console.request_column(&self.board, player)?;
            if self.board.is_valid_move(column) {
                break column;
            }
        };
        self.board.drop_piece(column, player.avatar());
        self.state = GameState::InProgress;
        console.show_board(&self.board);
        Ok(())
    }

    /// Alternates turns until the game is over.
    pub fn run_game<C>(&mut self, console: &mut C) -> Result<(), InputClosed>
    where
        C: Console + ?Sized,
    {
        while !self.is_game_over() {
            self.take_turn(console)?;
            self.next_player();
        }
        self.state = GameState::Over;
        Ok(())
    }

    /// Updates the win/loss counters for the current board.
    ///
    /// Player one is checked first: if both players somehow have four in a
    /// row, player one is credited with the win.
    pub fn settle_outcome(&mut self) -> Outcome {
        let [one, two] = &mut self.players;
        if self.board.has_win(one.avatar()) {
            one.increment_win();
            two.increment_loss();
            Outcome::Win(PlayerId::One)
        } else if self.board.has_win(two.avatar()) {
            two.increment_win();
            one.increment_loss();
            Outcome::Win(PlayerId::Two)
        } else {
            Outcome::Draw
        }
    }

    /// Scores the finished game, reports it and prepares the next one.
    pub fn resolve_outcome<C>(&mut self, console: &mut C) -> Result<Outcome, InputClosed>
    where
        C: Console + ?Sized,
    {
        let outcome = self.settle_outcome();
        console.show_outcome(outcome, &self.board, &self.players);
        self.board.reset();
        self.current = PlayerId::One;
        self.state = GameState::Idle;
        console.request_continue()?;
        Ok(outcome)
    }

    /// Plays games back to back until the console's input is closed.
    pub fn run_session<C>(&mut self, console: &mut C) -> Result<Infallible, InputClosed>
    where
        C: Console + ?Sized,
    {
        loop {
            self.run_game(console)?;
            self.resolve_outcome(console)?;
        }
    }
}
