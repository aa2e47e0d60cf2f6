pub use self::{board::*, cell::*, line::*, rendered_board::*};

pub(crate) mod board;
pub(crate) mod cell;
pub(crate) mod line;
pub(crate) mod rendered_board;
