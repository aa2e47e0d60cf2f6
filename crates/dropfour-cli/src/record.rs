use std::{
    collections::VecDeque,
    fs::{self, File},
    io::{BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context;
use chrono::Utc;
use dropfour_engine::{Avatar, Board, Console, InputClosed, Outcome, Player, PlayerId};

use crate::schema::record::{GameRecord, RecordedSession};

/// A [`Console`] wrapper that records every finished game.
///
/// Columns handed to the match controller are collected as the game's moves;
/// when the outcome is shown, the moves, the final board and the outcome are
/// stored. Games cut short by the end of input are not recorded.
#[derive(Debug)]
pub struct RecordingConsole<C> {
    console: C,
    moves: Vec<usize>,
    games_played: usize,
    games: RingBuffer<GameRecord>,
}

impl<C> RecordingConsole<C>
where
    C: Console,
{
    /// Wraps `console`, keeping at most `history_size` finished games.
    pub fn new(console: C, history_size: usize) -> Self {
        Self {
            console,
            moves: vec![],
            games_played: 0,
            games: RingBuffer::with_capacity(history_size),
        }
    }

    /// Returns the wrapped console and the recorded history, completed with
    /// the final player records.
    pub fn into_parts(self, players: &[Player; 2]) -> (C, SessionHistory) {
        let history = SessionHistory {
            players: players.clone(),
            games_played: self.games_played,
            games: self.games,
        };
        (self.console, history)
    }

    fn record(&mut self, outcome: Outcome, board: &Board) {
        self.games.push(GameRecord {
            game: self.games_played,
            moves: std::mem::take(&mut self.moves),
            outcome,
            final_board: board.render(),
        });
        self.games_played += 1;
    }
}

impl<C> Console for RecordingConsole<C>
where
    C: Console,
{
    fn request_name(&mut self, id: PlayerId, avatar: Avatar) -> Result<String, InputClosed> {
        self.console.request_name(id, avatar)
    }

    fn request_column(&mut self, board: &Board, player: &Player) -> Result<usize, InputClosed> {
        let column = self.console.request_column(board, player)?;
        if board.is_valid_move(column) {
            self.moves.push(column);
        }
        Ok(column)
    }

    fn show_board(&mut self, board: &Board) {
        self.console.show_board(board);
    }

    fn show_outcome(&mut self, outcome: Outcome, board: &Board, players: &[Player; 2]) {
        self.record(outcome, board);
        self.console.show_outcome(outcome, board, players);
    }

    fn request_continue(&mut self) -> Result<(), InputClosed> {
        self.console.request_continue()
    }
}

/// Recorded history of a play session.
///
/// Holds the final player records and the most recent finished games.
/// Created by [`RecordingConsole::into_parts`] and saved with
/// [`save`](Self::save).
#[derive(Debug)]
pub struct SessionHistory {
    players: [Player; 2],
    games_played: usize,
    games: RingBuffer<GameRecord>,
}

impl SessionHistory {
    #[must_use]
    pub fn games_played(&self) -> usize {
        self.games_played
    }

    /// Saves the recorded session to a JSON file and returns its path.
    ///
    /// The filename is generated from the current timestamp:
    /// `session_{YYYYMMDD_HHMMSS}.json`
    ///
    /// # Arguments
    ///
    /// * `record_dir` - Directory to save the recording (created if it doesn't exist)
    pub fn save(&self, record_dir: &Path) -> anyhow::Result<PathBuf> {
        fs::create_dir_all(record_dir)
            .with_context(|| format!("Failed to create directory {}", record_dir.display()))?;

        let timestamp = Utc::now();
        let filename = format!("session_{}.json", timestamp.format("%Y%m%d_%H%M%S"));
        let filepath = record_dir.join(filename);

        let data = RecordedSession {
            recorded_at: timestamp,
            players: self.players.clone(),
            discarded_games: self.games_played - self.games.len(),
            games: self.games.to_vec(),
        };

        let file = File::create(&filepath)
            .with_context(|| format!("Failed to create file: {}", filepath.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &data)
            .with_context(|| format!("Failed to write JSON to {}", filepath.display()))?;
        writer
            .flush()
            .with_context(|| format!("Failed to flush output to {}", filepath.display()))?;

        Ok(filepath)
    }
}

/// A fixed-capacity ring buffer that overwrites oldest entries when full.
#[derive(Debug)]
struct RingBuffer<T> {
    capacity: usize,
    buf: VecDeque<T>,
}

impl<T> RingBuffer<T> {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            buf: VecDeque::with_capacity(capacity.min(64)),
        }
    }

    fn push(&mut self, item: T) {
        if self.capacity == 0 {
            return;
        }
        if self.buf.len() >= self.capacity {
            self.buf.pop_front();
        }
        self.buf.push_back(item);
    }

    fn len(&self) -> usize {
        self.buf.len()
    }

    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.buf.iter().cloned().collect()
    }
}
