use chrono::{DateTime, Utc};
use dropfour_engine::{Outcome, Player, RenderedBoard};
use serde::{Deserialize, Serialize};

/// Recorded play session, written as JSON when the session ends
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordedSession {
    /// Timestamp when recording was created (ISO 8601 format)
    pub recorded_at: DateTime<Utc>,
    /// Both players with their final win/loss records
    pub players: [Player; 2],
    /// Number of finished games dropped because the history was full
    pub discarded_games: usize,
    /// The most recent finished games, oldest first
    pub games: Vec<GameRecord>,
}

/// A single finished game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    /// Game number within the session (0-indexed)
    pub game: usize,
    /// Columns played, in move order starting with player one
    pub moves: Vec<usize>,
    pub outcome: Outcome,
    /// Board as it stood when the game ended
    pub final_board: RenderedBoard,
}
