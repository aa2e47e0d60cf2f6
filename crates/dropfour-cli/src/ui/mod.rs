pub use self::{board_display::*, scoreboard_display::*};

mod board_display;
mod scoreboard_display;

pub mod style {
    use std::fmt;

    use crossterm::style::{Attribute, Color, ContentStyle, StyledContent};
    use dropfour_engine::Avatar;

    fn fg(color: Color) -> ContentStyle {
        ContentStyle {
            foreground_color: Some(color),
            attributes: Attribute::Bold.into(),
            ..ContentStyle::default()
        }
    }

    pub fn player_one() -> ContentStyle {
        fg(Color::Yellow)
    }

    pub fn player_two() -> ContentStyle {
        fg(Color::Red)
    }

    pub fn grid() -> ContentStyle {
        fg(Color::Blue)
    }

    pub fn label() -> ContentStyle {
        ContentStyle {
            foreground_color: Some(Color::DarkGrey),
            ..ContentStyle::default()
        }
    }

    /// Maps each player's avatar to their color.
    #[derive(Debug, Clone, Copy)]
    pub struct Palette {
        avatars: [Avatar; 2],
    }

    impl Palette {
        pub fn new(avatars: [Avatar; 2]) -> Self {
            Self { avatars }
        }

        pub fn avatar_style(&self, avatar: Avatar) -> ContentStyle {
            match self.avatars.iter().position(|&a| a == avatar) {
                Some(0) => player_one(),
                Some(_) => player_two(),
                None => ContentStyle::new(),
            }
        }
    }

    /// Applies `style` when a palette is in use, leaving `text` plain otherwise.
    pub fn paint<D>(palette: Option<&Palette>, style: ContentStyle, text: D) -> StyledContent<D>
    where
        D: fmt::Display,
    {
        let style = if palette.is_some() {
            style
        } else {
            ContentStyle::new()
        };
        style.apply(text)
    }
}
