use serde::{Deserialize, Serialize};

use crate::Avatar;

/// Seat of a player in a match. Player one moves first in every game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::IsVariant,
)]
pub enum PlayerId {
    #[display("1")]
    One,
    #[display("2")]
    Two,
}

impl PlayerId {
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }
}

/// A participant in a session, with a running win/loss record.
///
/// Counters accumulate over every game of the session and are never reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    avatar: Avatar,
    wins: u32,
    losses: u32,
}

impl Player {
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>, avatar: Avatar) -> Self {
        Self {
            id,
            name: name.into(),
            avatar,
            wins: 0,
            losses: 0,
        }
    }

    #[must_use]
    pub const fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn avatar(&self) -> Avatar {
        self.avatar
    }

    #[must_use]
    pub const fn wins(&self) -> u32 {
        self.wins
    }

    #[must_use]
    pub const fn losses(&self) -> u32 {
        self.losses
    }

    pub const fn increment_win(&mut self) {
        self.wins += 1;
    }

    pub const fn increment_loss(&mut self) {
        self.losses += 1;
    }
}
