use std::fmt;

use dropfour_engine::Player;

use crate::ui::style::{self, Palette};

const NAME_WIDTH: usize = 10;

/// Win/loss table for both players.
#[derive(Debug)]
pub struct ScoreboardDisplay<'a> {
    players: &'a [Player; 2],
    palette: Option<&'a Palette>,
}

impl<'a> ScoreboardDisplay<'a> {
    pub fn new(players: &'a [Player; 2]) -> Self {
        Self {
            players,
            palette: None,
        }
    }

    pub fn palette(self, palette: Option<&'a Palette>) -> Self {
        Self { palette, ..self }
    }
}

impl fmt::Display for ScoreboardDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "S C O R E B O A R D:")?;
        for player in self.players {
            let avatar = player.avatar();
            let avatar_style = self
                .palette
                .map_or_else(Default::default, |palette| palette.avatar_style(avatar));
            writeln!(
                f,
                "Player {} ({}): {:<w$} wins: {} losses: {}",
                player.id(),
                style::paint(self.palette, avatar_style, avatar),
                player.name(),
                player.wins(),
                player.losses(),
                w = NAME_WIDTH,
            )?;
        }
        Ok(())
    }
}
